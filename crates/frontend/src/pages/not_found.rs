use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Shell>
            <div class="not-found">
                <h1 class="not-found__code">"404"</h1>
                <p class="not-found__text">"Page not found"</p>
                <a class="not-found__home" href="/">"Go Home"</a>
            </div>
        </Shell>
    }
}
