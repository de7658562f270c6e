//! Login and signup pages (public, rendered outside the shell)

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use medinest_core::{AppRoute, CredentialError, LoginForm, SignupForm};
use tracing::warn;

use crate::components::{use_toast, ToastContext};
use crate::session::{use_session, SessionContext};

/// Validate, start a session and enter the dashboard
fn start_session(
    validation: Result<(), CredentialError>,
    welcome: &str,
    session: SessionContext,
    toast: ToastContext,
    navigate: impl Fn(&str, leptos_router::NavigateOptions),
) {
    if let Err(e) = validation {
        toast.error(e.to_string());
        return;
    }

    match session.sign_in() {
        Ok(_) => {
            toast.success(welcome);
            navigate(AppRoute::Dashboard.path(), Default::default());
        }
        Err(e) => {
            warn!(error = %e, "could not persist session");
            toast.error("Could not start a session in this browser");
        }
    }
}

/// Login page
#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        start_session(form.validate(), "Welcome back!", session, toast, navigate.clone());
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1 class="auth-title">"Log in to MediNest"</h1>

                <label class="field">
                    <span class="field-label">"Email"</span>
                    <input
                        type="email"
                        autocomplete="email"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>

                <label class="field">
                    <span class="field-label">"Password"</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>

                <button type="submit" class="btn btn-primary">"Log In"</button>

                <p class="auth-switch">
                    "No account yet? "
                    <A href=AppRoute::Signup.path()>"Sign up"</A>
                </p>
            </form>
        </div>
    }
}

/// Signup page
#[component]
pub fn Signup() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let navigate = use_navigate();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = SignupForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        start_session(
            form.validate(),
            "Account created. Welcome to MediNest!",
            session,
            toast,
            navigate.clone(),
        );
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1 class="auth-title">"Create your MediNest account"</h1>

                <label class="field">
                    <span class="field-label">"Full name"</span>
                    <input
                        type="text"
                        autocomplete="name"
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>

                <label class="field">
                    <span class="field-label">"Email"</span>
                    <input
                        type="email"
                        autocomplete="email"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>

                <label class="field">
                    <span class="field-label">"Password"</span>
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>

                <button type="submit" class="btn btn-primary">"Sign Up"</button>

                <p class="auth-switch">
                    "Already registered? "
                    <A href=AppRoute::Login.path()>"Log in"</A>
                </p>
            </form>
        </div>
    }
}
