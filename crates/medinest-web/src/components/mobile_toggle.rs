//! Mobile menu button

use leptos::prelude::*;
use medinest_core::MobileMenu;

use super::LucideIcon;

/// Hamburger button shown below the desktop breakpoint
#[component]
pub fn MobileToggle(
    menu: ReadSignal<MobileMenu>,
    set_menu: WriteSignal<MobileMenu>,
) -> impl IntoView {
    view! {
        <div class="mobile-toggle">
            <button
                class="hamburger"
                on:click=move |_| set_menu.update(MobileMenu::toggle)
                aria-label=move || menu.get().toggle_label()
                aria-expanded=move || menu.get().is_open().to_string()
            >
                {move || view! { <LucideIcon icon=menu.get().glyph() size=24 /> }}
            </button>
        </div>
    }
}
