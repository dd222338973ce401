pub mod footer;
pub mod header;

use leptos::prelude::*;

/// Page shell: decorative header on top, footer at the bottom, the page
/// content in between. Carries no state.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="page">
            <header::Header />
            <main class="page__main">{children()}</main>
            <footer::Footer />
        </div>
    }
}
