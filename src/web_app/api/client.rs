// web_app/api/client.rs - Typed calls against the catalog REST API
//
// One method per endpoint. Each is a single request/response round trip:
// no retries, no caching.

use crate::web_app::api::transport::{ApiResponse, CatalogTransport};
use crate::web_app::config::CatalogConfig;
use crate::web_app::error::{CatalogError, Operation};
use crate::web_app::model::{ImageFile, ListedProduct, NewProduct, UploadResponse};

/// Multipart field the upload endpoint reads the file from
pub const IMAGE_FIELD: &str = "image";

pub struct CatalogClient<T> {
    transport: T,
    config: CatalogConfig,
}

impl<T: CatalogTransport> CatalogClient<T> {
    pub fn new(transport: T, config: CatalogConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Upload an image and return the URL the API stored it under
    pub async fn upload_image(&self, file: ImageFile) -> Result<String, CatalogError> {
        let url = self.config.uploads_url();
        tracing::debug!(
            "Uploading '{}' ({} bytes) to {}",
            file.file_name,
            file.bytes.len(),
            url
        );

        let response = self.transport.post_multipart(&url, IMAGE_FIELD, file).await?;
        let response = ensure_success(response, Operation::UploadImage)?;
        let uploaded: UploadResponse = serde_json::from_str(&response.body)?;

        tracing::info!("Image uploaded: {}", uploaded.image.src);
        Ok(uploaded.image.src)
    }

    /// Create a product; success is judged by status only
    pub async fn create_product(&self, product: &NewProduct) -> Result<(), CatalogError> {
        let url = self.config.products_url();
        let body = serde_json::to_value(product)?;
        tracing::debug!("Creating product at {}: {}", url, body);

        let response = self.transport.post_json(url, &body).await?;
        ensure_success(response, Operation::AddProduct)?;

        tracing::info!("Product '{}' created", product.name);
        Ok(())
    }

    /// Fetch the current product collection
    pub async fn fetch_products(&self) -> Result<Vec<ListedProduct>, CatalogError> {
        let url = self.config.products_url();
        tracing::debug!("Fetching products from {}", url);

        let response = self.transport.get(url).await?;
        let response = ensure_success(response, Operation::FetchProducts)?;
        let products = parse_listing(&response.body)?;

        tracing::info!("Fetched {} products", products.len());
        Ok(products)
    }
}

fn ensure_success(response: ApiResponse, operation: Operation) -> Result<ApiResponse, CatalogError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(CatalogError::Status {
            operation,
            status: response.status,
        })
    }
}

/// Parse a listing body, requiring `product` to be an array
///
/// Records are decoded one by one. A record that is not an object renders
/// as an empty card instead of failing the whole listing.
pub fn parse_listing(body: &str) -> Result<Vec<ListedProduct>, CatalogError> {
    let mut value: serde_json::Value = serde_json::from_str(body)?;

    let records = match value.get_mut("product").map(serde_json::Value::take) {
        Some(serde_json::Value::Array(records)) => records,
        Some(_) => return Err(CatalogError::InvalidResponse("`product` is not an array")),
        None => return Err(CatalogError::InvalidResponse("missing `product` field")),
    };

    let products = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record).unwrap_or_else(|e| {
                tracing::warn!("Unreadable product record #{}: {}", index, e);
                ListedProduct::default()
            })
        })
        .collect();
    Ok(products)
}
