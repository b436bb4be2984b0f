// web_app/app.rs - Root application component
//
// Sets up meta tags and routing for the client-side rendered catalog.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::CatalogPage;

pub const APP_TITLE: &str = "Product Catalog";

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE />
        <Meta name="description" content="Upload a product image and add products to the catalog" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=CatalogPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/" class="btn">"Back to catalog"</a>
        </div>
    }
}
