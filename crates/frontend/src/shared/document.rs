/// Sets the browser tab title. Safe to call from any component body; does
/// nothing outside a browser context.
pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}
