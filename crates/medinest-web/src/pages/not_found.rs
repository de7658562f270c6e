//! Not found page, rendered inside the shell for unknown paths

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFound() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <div class="page not-found">
            <h2 class="not-found-title">"Page not found"</h2>
            <p class="not-found-path">
                "Nothing lives at " <code>{move || pathname.get()}</code> "."
            </p>
            <A href="/" attr:class="btn btn-primary">
                "Back to Home"
            </A>
        </div>
    }
}
