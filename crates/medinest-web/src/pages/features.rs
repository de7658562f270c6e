//! Feature pages
//!
//! Each is still a placeholder body; only the profile page carries a real
//! action (log out).

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use medinest_core::{Icon, ShellConfig};
use tracing::warn;

use crate::components::{use_toast, EmptyState};
use crate::session::use_session;

#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <EmptyState
            title="Dashboard"
            description="Overview of your prescriptions, upcoming reminders and recent consultations."
            icon=Icon::LayoutDashboard
        />
    }
}

#[component]
pub fn UploadPrescription() -> impl IntoView {
    view! {
        <EmptyState
            title="Upload Prescription"
            description="Upload photos or PDFs of your prescriptions and keep them in one place."
            icon=Icon::Upload
        />
    }
}

#[component]
pub fn Reminders() -> impl IntoView {
    view! {
        <EmptyState
            title="Reminders"
            description="Schedule medication reminders so you never miss a dose."
            icon=Icon::Bell
        />
    }
}

#[component]
pub fn Symptoms() -> impl IntoView {
    view! {
        <EmptyState
            title="Symptoms"
            description="Log symptoms over time and share the history with your doctor."
            icon=Icon::FileText
        />
    }
}

#[component]
pub fn Consultations() -> impl IntoView {
    view! {
        <EmptyState
            title="Consultations"
            description="Book and join online consultations with healthcare professionals."
            icon=Icon::Stethoscope
        />
    }
}

#[component]
pub fn Chatbot() -> impl IntoView {
    view! {
        <EmptyState
            title="AI Chatbot"
            description="Ask general health questions and get pointed to the right resources."
            icon=Icon::MessageSquare
        />
    }
}

#[component]
pub fn Emergency() -> impl IntoView {
    view! {
        <EmptyState
            title="Emergency"
            description="Emergency contacts and nearby care. In an emergency, call your local emergency number."
            icon=Icon::AlertCircle
        />
    }
}

#[component]
pub fn Language() -> impl IntoView {
    view! {
        <EmptyState
            title="Language"
            description="Choose the language MediNest speaks to you in."
            icon=Icon::Languages
        />
    }
}

/// Profile page with the log-out action
#[component]
pub fn Profile() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let navigate = use_navigate();
    let login_path = expect_context::<ShellConfig>().login_path;

    let log_out = move |_| {
        if let Err(e) = session.sign_out() {
            warn!(error = %e, "could not clear session");
        }
        toast.info("You have been logged out");
        navigate(&login_path, Default::default());
    };

    view! {
        <EmptyState
            title="Profile"
            description="Personal details, emergency contacts and account settings."
            icon=Icon::User
        >
            <button type="button" class="btn btn-secondary" on:click=log_out>
                "Log out"
            </button>
        </EmptyState>
    }
}
