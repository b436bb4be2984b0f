// web_app/api/transport.rs - HTTP seam between the client and the network
//
// The client only talks to `CatalogTransport`. `ReqwestTransport` is the
// real implementation (native and wasm32); tests script their own.

use reqwest::multipart::{Form, Part};

use crate::web_app::error::CatalogError;
use crate::web_app::model::ImageFile;

/// Status and raw body of a completed HTTP exchange
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal HTTP surface the catalog client needs
///
/// Futures are not required to be `Send`: in the browser everything runs on
/// the single event-loop thread.
#[allow(async_fn_in_trait)]
pub trait CatalogTransport {
    async fn get(&self, url: &str) -> Result<ApiResponse, CatalogError>;

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<ApiResponse, CatalogError>;

    /// Send `file` as the single multipart field `field`
    async fn post_multipart(&self, url: &str, field: &str, file: ImageFile) -> Result<ApiResponse, CatalogError>;
}

/// `reqwest`-backed transport (uses `fetch` when compiled to wasm32)
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

async fn read_response(response: reqwest::Response) -> Result<ApiResponse, CatalogError> {
    let status = response.status().as_u16();
    let body = response.text().await.map_err(CatalogError::network)?;
    Ok(ApiResponse { status, body })
}

impl CatalogTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<ApiResponse, CatalogError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(CatalogError::network)?;
        read_response(response).await
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<ApiResponse, CatalogError> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(CatalogError::network)?;
        read_response(response).await
    }

    async fn post_multipart(&self, url: &str, field: &str, file: ImageFile) -> Result<ApiResponse, CatalogError> {
        let mut part = Part::bytes(file.bytes).file_name(file.file_name);
        if let Some(content_type) = file.content_type.as_deref() {
            part = part.mime_str(content_type).map_err(CatalogError::network)?;
        }
        let form = Form::new().part(field.to_string(), part);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(CatalogError::network)?;
        read_response(response).await
    }
}
