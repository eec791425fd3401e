//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::i18n::{provide_i18n, use_i18n};
use crate::pages::{HomePage, RegisterPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_i18n();

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/register") view=RegisterPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let i18n = use_i18n();

    view! { <p class="not-found">{move || i18n.tr("not-found")}</p> }
}
