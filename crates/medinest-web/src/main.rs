//! WASM entry point for the Leptos CSR app

#[cfg(feature = "csr")]
fn main() {
    use leptos::prelude::*;
    use medinest_core::ShellConfig;
    use medinest_web::{api, App};

    console_error_panic_hook::set_once();

    // The host decides the shell config; `trunk serve` has no /api, so fall back
    leptos::task::spawn_local(async {
        let config = match api::fetch_config().await {
            Ok(config) => config,
            Err(e) => {
                leptos::logging::warn!("using default shell config: {}", e);
                ShellConfig::default()
            }
        };
        leptos::mount::mount_to_body(move || view! { <App config /> });
    });
}

#[cfg(not(feature = "csr"))]
fn main() {
    eprintln!("medinest-web is the browser bundle: build it with `trunk build` and serve it with `medinest serve`");
}
