//! Home page - static landing content

use leptos::prelude::*;
use leptos_router::components::A;
use medinest_core::home::{
    FEATURE_HIGHLIGHTS, HERO_SUBTITLE, HERO_TITLE, PRIMARY_CTA, SECONDARY_CTA,
};

use crate::components::LucideIcon;

/// Home page with hero, calls to action and the feature grid
#[component]
pub fn HomePage() -> impl IntoView {
    let (cta_label, cta_route) = PRIMARY_CTA;

    let features = FEATURE_HIGHLIGHTS
        .iter()
        .map(|feature| {
            view! {
                <div class="feature-card">
                    <div class="feature-icon">
                        <LucideIcon icon=feature.icon size=32 accent=feature.accent />
                    </div>
                    <h3 class="feature-title">{feature.title}</h3>
                    <p class="feature-description">{feature.description}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="page home-page">
            <div class="hero">
                <h1 class="hero-title">{HERO_TITLE}</h1>
                <p class="hero-subtitle">{HERO_SUBTITLE}</p>
                <div class="hero-actions">
                    <A href=cta_route.path() attr:class="btn btn-primary">
                        {cta_label}
                    </A>
                    <button type="button" class="btn btn-secondary">
                        {SECONDARY_CTA}
                    </button>
                </div>
            </div>

            <div class="feature-grid">{features}</div>
        </div>
    }
}
