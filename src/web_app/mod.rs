// web_app/mod.rs - Root module for the catalog client
//
// Architecture:
// - model/: Wire and form data types
// - api/: HTTP transport and typed catalog client
// - config.rs, error.rs: endpoint configuration and error type
// - render.rs: product list markup
// - session.rs: upload/submit/list flow and the shared image reference
// - components/, pages/, app.rs: Leptos UI (csr only)

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod session;

// Components, pages, and app only exist in the browser build
#[cfg(feature = "csr")]
pub mod components;

#[cfg(feature = "csr")]
pub mod pages;

#[cfg(feature = "csr")]
pub mod app;

#[cfg(feature = "csr")]
pub use app::App;
