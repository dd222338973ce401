use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    // Client clock; good enough for a copyright line
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="footer__content">
                <p class="footer__blurb">
                    "Describe your dream website and watch it come to life."
                </p>
                <span class="footer__copyright">
                    {format!("© {} SiteWeaver", year)}
                </span>
            </div>
        </footer>
    }
}
