// web_app/pages/catalog.rs - Catalog page
//
// Wires the form and the product container to a CatalogSession. All network
// work runs through spawn_local on the browser event loop.

use std::rc::Rc;

use leptos::callback::UnsyncCallback;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::web_app::api::client::CatalogClient;
use crate::web_app::api::transport::ReqwestTransport;
use crate::web_app::components::{read_image_file, ProductContainer, ProductForm};
use crate::web_app::config::CatalogConfig;
use crate::web_app::model::ProductDraft;
use crate::web_app::session::CatalogSession;

type BrowserSession = CatalogSession<ReqwestTransport, RwSignal<String>>;

/// Main catalog page
///
/// Lists products on mount, uploads the image as soon as it is picked and
/// refreshes the list after every successful submission.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let markup = RwSignal::new(String::new());
    let client = CatalogClient::new(ReqwestTransport::new(), CatalogConfig::from_window());
    let session: Rc<BrowserSession> = Rc::new(CatalogSession::new(client, markup));

    {
        let session = Rc::clone(&session);
        spawn_local(async move { session.refresh().await });
    }

    let on_image = {
        let session = Rc::clone(&session);
        UnsyncCallback::new(move |file: Option<File>| {
            let session = Rc::clone(&session);
            spawn_local(async move {
                let image = match file {
                    Some(file) => match read_image_file(file).await {
                        Ok(image) => Some(image),
                        Err(e) => {
                            tracing::error!("{}", e);
                            None
                        }
                    },
                    None => None,
                };
                session.select_image(image).await;
            });
        })
    };

    let on_submit = UnsyncCallback::new(move |draft: ProductDraft| {
        let session = Rc::clone(&session);
        spawn_local(async move { session.submit(draft).await });
    });

    view! {
        <div class="page">
            <ProductForm on_image=on_image on_submit=on_submit />
            <ProductContainer markup=markup />
        </div>
    }
}
