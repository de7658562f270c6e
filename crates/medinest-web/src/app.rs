//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use medinest_core::ShellConfig;

use crate::components::{RouteGuard, Shell, ToastProvider};
use crate::pages::{Login, NotFound, Signup};
use crate::session::provide_session;

/// Main App component
///
/// `/login` and `/signup` are matched before the guard; every other path
/// goes through [`RouteGuard`] into the [`Shell`], which resolves it against
/// the route table.
#[component]
pub fn App(
    /// Shell configuration; defaults when omitted
    #[prop(optional)]
    config: Option<ShellConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let toast_position = config.toast_position;

    provide_context(config.clone());
    provide_session(config);

    view! {
        <ToastProvider position=toast_position>
            <Router>
                <div class="app">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/login") view=Login />
                        <Route path=path!("/signup") view=Signup />
                        <Route path=path!("/*any") view=ProtectedArea />
                    </Routes>
                </div>
            </Router>
        </ToastProvider>
    }
}

/// Catch-all route: the guarded shell
#[component]
fn ProtectedArea() -> impl IntoView {
    view! {
        <RouteGuard>
            <Shell />
        </RouteGuard>
    }
}
