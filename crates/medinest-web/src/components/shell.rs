//! Shell layout: sidebar, mobile toggle and the routed content region

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use medinest_core::{MobileMenu, Resolution, RouteTable, ShellConfig};

use super::{MobileToggle, Sidebar};
use crate::pages::{render_route, NotFound};
use crate::session::use_session;

/// Persistent layout wrapping every guarded view
///
/// Navigating only swaps the content region; the sidebar and the menu state
/// survive.
#[component]
pub fn Shell() -> impl IntoView {
    // Mobile sidebar state
    let (menu, set_menu) = signal(MobileMenu::closed());

    let config = expect_context::<ShellConfig>();
    let session = use_session();
    let pathname = use_location().pathname;
    let table = RouteTable::from_config(&config);

    let resolution = Memo::new(move |_| table.resolve(&pathname.get(), &session));

    let brand = config.brand.clone();
    Effect::new(move |_| {
        let title = match resolution.get() {
            Resolution::Render(route) => config.page_title(route.title()),
            Resolution::NotFound => config.page_title("Page Not Found"),
            Resolution::Redirect { .. } => return,
        };
        document().set_title(&title);
    });

    let content = move || match resolution.get() {
        Resolution::Render(route) if route.is_guarded() => render_route(route),
        // Public views never render inside the shell; go to their canonical path
        Resolution::Render(route) => view! { <Redirect path=route.path() /> }.into_any(),
        Resolution::NotFound => view! { <NotFound /> }.into_any(),
        Resolution::Redirect { to } => view! { <Redirect path=to /> }.into_any(),
    };

    view! {
        <div class="shell">
            <MobileToggle menu set_menu />
            <Sidebar menu set_menu brand />
            <main class="content">{content}</main>
        </div>
    }
}
