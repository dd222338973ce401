use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header__content">
                <a class="header__brand" href="/">
                    <span class="header__logo">"</>"</span>
                    <span class="header__title">"SiteWeaver"</span>
                </a>
                <nav class="header__nav">
                    <a class="header__link" href="#features">"Features"</a>
                    <a class="header__link" href="#testimonials">"Testimonials"</a>
                </nav>
            </div>
        </header>
    }
}
