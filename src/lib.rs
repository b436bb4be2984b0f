// lib.rs - Root module for the product_catalog library
//
// The request/response flow (web_app::session) compiles natively for tests
// and the CLI, and to wasm32 with the `csr` feature for the browser app.

pub mod web_app;
