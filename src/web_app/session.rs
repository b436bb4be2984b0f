// web_app/session.rs - Form session: upload, submit, list
//
// The session owns the only shared state, the last uploaded image URL.
// Handlers never return errors: every failure is logged and the page keeps
// working on the next user action.
//
// The image reference is last-write-wins. A slow upload that completes after
// a submission has already been sent does not affect that submission.

use std::cell::RefCell;

use crate::web_app::api::client::CatalogClient;
use crate::web_app::api::transport::CatalogTransport;
use crate::web_app::error::CatalogError;
use crate::web_app::model::{ImageFile, ProductDraft};
use crate::web_app::render::render_products;

/// Destination for rendered product markup (the `.container` element)
pub trait MarkupSink {
    /// Replace the whole content with `markup`
    fn replace(&self, markup: String);
}

#[cfg(feature = "csr")]
impl MarkupSink for leptos::prelude::RwSignal<String> {
    fn replace(&self, markup: String) {
        use leptos::prelude::Set;
        self.set(markup);
    }
}

pub struct CatalogSession<T, S> {
    client: CatalogClient<T>,
    container: S,
    image: RefCell<Option<String>>,
}

impl<T: CatalogTransport, S: MarkupSink> CatalogSession<T, S> {
    pub fn new(client: CatalogClient<T>, container: S) -> Self {
        Self {
            client,
            container,
            image: RefCell::new(None),
        }
    }

    pub fn client(&self) -> &CatalogClient<T> {
        &self.client
    }

    pub fn container(&self) -> &S {
        &self.container
    }

    /// Current uploaded image URL, if any
    pub fn image_reference(&self) -> Option<String> {
        self.image.borrow().clone()
    }

    /// Handle a change of the image input
    ///
    /// `None` means the input was cleared or the file could not be read.
    pub async fn select_image(&self, file: Option<ImageFile>) {
        let result = match file {
            Some(file) => self.client.upload_image(file).await,
            None => Err(CatalogError::NoFileSelected),
        };

        match result {
            Ok(src) => {
                *self.image.borrow_mut() = Some(src);
            }
            Err(e) => {
                tracing::error!("Image upload failed: {}", e);
                *self.image.borrow_mut() = None;
            }
        }
    }

    /// Handle a form submission; refreshes the list on success
    pub async fn submit(&self, draft: ProductDraft) {
        let product = draft.into_product(self.image_reference());

        match self.client.create_product(&product).await {
            Ok(()) => self.refresh().await,
            Err(e) => tracing::error!("Product submission failed: {}", e),
        }
    }

    /// Fetch the listing and replace the container markup
    pub async fn refresh(&self) {
        match self.client.fetch_products().await {
            Ok(products) => {
                tracing::debug!("Rendering {} products", products.len());
                self.container.replace(render_products(&products));
            }
            Err(e) => tracing::error!("Product listing failed: {}", e),
        }
    }
}
