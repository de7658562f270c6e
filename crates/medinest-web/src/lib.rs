//! medinest-web - Web front end for MediNest using Leptos + Axum

#![recursion_limit = "1024"]

pub mod api;
pub mod app;
pub mod components;
pub mod pages;
pub mod session;
pub mod storage;

#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;

#[cfg(feature = "ssr")]
pub use router::{create_router, run, ServeOptions};
