//! Empty state component for feature pages that are not built yet

use leptos::prelude::*;
use leptos_router::components::A;
use medinest_core::Icon;

use super::LucideIcon;

/// Placeholder body for a feature page
#[component]
pub fn EmptyState(
    /// Page title (e.g., "Reminders")
    title: &'static str,
    /// What this page will do
    description: &'static str,
    /// Icon shown above the title
    icon: Icon,
    /// Extra actions rendered under the description
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page empty-state">
            <div class="empty-state-icon">
                <LucideIcon icon size=64 />
            </div>
            <h2 class="empty-state-title">{title}</h2>
            <p class="empty-state-description">{description}</p>
            <p class="empty-state-badge">"In development"</p>

            {children.map(|children| view! { <div class="empty-state-extra">{children()}</div> })}

            <div class="empty-state-actions">
                <A href="/" attr:class="btn btn-primary">
                    "Back to Home"
                </A>
            </div>
        </div>
    }
}
