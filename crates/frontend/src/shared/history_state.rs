use leptos::prelude::GetUntracked;
use leptos_router::hooks::use_location;
use serde::de::DeserializeOwned;

/// Reads the handoff payload a navigation left in history state.
///
/// Returns `None` when the page was reached without one (direct URL entry,
/// reload) or when the stored value does not decode as `T`; callers render
/// a fallback in that case.
pub fn decode_handoff<T>() -> Option<T>
where
    T: DeserializeOwned,
{
    let state = use_location().state.get_untracked();
    let value = state.to_js_value();
    if value.is_null() || value.is_undefined() {
        return None;
    }
    serde_wasm_bindgen::from_value(value).ok()
}
