pub mod builder;
pub mod chat;
pub mod landing;
pub mod not_found;

pub use builder::BuilderPage;
pub use chat::ChatPage;
pub use landing::LandingPage;
pub use not_found::NotFoundPage;

use leptos::prelude::*;

/// Fallback for a destination page opened without a handoff in history
/// state (direct URL entry or reload).
#[component]
pub fn HandoffMissing() -> impl IntoView {
    view! {
        <div class="handoff__missing">
            <h1 class="handoff__title">"Nothing to show yet"</h1>
            <p class="handoff__hint">"Start from the entry screen to describe what you need."</p>
            <a class="handoff__back" href="/">"Back to start"</a>
        </div>
    }
}
