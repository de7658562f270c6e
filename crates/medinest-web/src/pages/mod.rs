//! Page components

mod auth;
mod features;
mod home;
mod not_found;

pub use auth::{Login, Signup};
pub use features::{
    Chatbot, Consultations, Dashboard, Emergency, Language, Profile, Reminders, Symptoms,
    UploadPrescription,
};
pub use home::HomePage;
pub use not_found::NotFound;

use leptos::prelude::*;
use medinest_core::AppRoute;

/// View bound to a route
pub fn render_route(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <Login /> }.into_any(),
        AppRoute::Signup => view! { <Signup /> }.into_any(),
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Dashboard => view! { <Dashboard /> }.into_any(),
        AppRoute::UploadPrescription => view! { <UploadPrescription /> }.into_any(),
        AppRoute::Reminders => view! { <Reminders /> }.into_any(),
        AppRoute::Symptoms => view! { <Symptoms /> }.into_any(),
        AppRoute::Consultations => view! { <Consultations /> }.into_any(),
        AppRoute::Chatbot => view! { <Chatbot /> }.into_any(),
        AppRoute::Emergency => view! { <Emergency /> }.into_any(),
        AppRoute::Language => view! { <Language /> }.into_any(),
        AppRoute::Profile => view! { <Profile /> }.into_any(),
    }
}
