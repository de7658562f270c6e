//! Route guard for the protected area

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use medinest_core::ShellConfig;

use crate::session::use_session;

/// Renders children only for an authenticated session, otherwise redirects
/// to the login path
///
/// The session is read again on every navigation and after every sign-in or
/// sign-out in this tab.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let pathname = use_location().pathname;
    let login_path = expect_context::<ShellConfig>().login_path;

    let authorized = move || {
        pathname.track();
        session.is_authenticated()
    };

    view! {
        <Show
            when=authorized
            fallback=move || view! { <Redirect path=login_path.clone() /> }
        >
            {children()}
        </Show>
    }
}
