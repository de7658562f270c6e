//! Sidebar navigation component

use leptos::prelude::*;
use leptos_router::components::A;
use medinest_core::{nav_entries, MobileMenu};

use super::LucideIcon;

/// Sidebar with the navigation menu
///
/// Always mounted; on narrow viewports the menu state only slides it in and
/// out of view.
#[component]
pub fn Sidebar(
    menu: ReadSignal<MobileMenu>,
    set_menu: WriteSignal<MobileMenu>,
    #[prop(into)] brand: String,
) -> impl IntoView {
    // Close sidebar when clicking a link (mobile)
    let close_menu = move |_: leptos::ev::MouseEvent| set_menu.update(MobileMenu::close);

    let links = nav_entries()
        .iter()
        .map(|entry| {
            view! {
                <li class="nav-item">
                    <A href=entry.path() attr:class="sidebar-link" on:click=close_menu>
                        <LucideIcon icon=entry.icon accent=entry.accent />
                        <span class="sidebar-link-label">{entry.label}</span>
                    </A>
                </li>
            }
        })
        .collect_view();

    view! {
        <>
            // Backdrop overlay for mobile
            <Show when=move || menu.get().is_open()>
                <div class="sidebar-backdrop" on:click=close_menu></div>
            </Show>

            <nav class=move || menu.get().sidebar_class() aria-label="Main navigation">
                <div class="sidebar-header">
                    <h1 class="logo">{brand}</h1>
                </div>

                <ul class="nav-list">{links}</ul>
            </nav>
        </>
    }
}
