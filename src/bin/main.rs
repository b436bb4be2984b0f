// Browser entry point
//
// Built by trunk with the `csr` feature (see index.html). Installs the panic
// hook, routes tracing output to the browser console and mounts the app.

cfg_if::cfg_if! {
    if #[cfg(feature = "csr")] {
        fn main() {
            use product_catalog::web_app::App;

            console_error_panic_hook::set_once();
            wasm_logger::init(wasm_logger::Config::default());
            tracing::info!("Product catalog starting");

            leptos::mount::mount_to_body(App);
        }
    } else {
        fn main() {
            panic!("This binary requires the 'csr' feature. Run with: trunk serve");
        }
    }
}
