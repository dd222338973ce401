use crate::pages::{BuilderPage, ChatPage, LandingPage, NotFoundPage};
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

/// Route table of the app: the entry screen plus the two downstream
/// screens a submission can hand off to.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=LandingPage />
                <Route path=path!("/builder") view=BuilderPage />
                <Route path=path!("/chatmode") view=ChatPage />
            </Routes>
        </Router>
    }
}
