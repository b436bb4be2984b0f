// common/mod.rs - Shared test utilities
//
// ScriptedTransport replays queued responses and records every request, so
// tests can assert both what was sent and how the session reacted.
// RecordingSink stands in for the `.container` element.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use product_catalog::web_app::api::{ApiResponse, CatalogClient, CatalogTransport};
use product_catalog::web_app::config::CatalogConfig;
use product_catalog::web_app::error::CatalogError;
use product_catalog::web_app::model::ImageFile;
use product_catalog::web_app::session::{CatalogSession, MarkupSink};

pub const BASE_URL: &str = "http://catalog.test/api/v1/products";
pub const UPLOADS_URL: &str = "http://catalog.test/api/v1/products/uploads";

#[derive(Clone, Debug, PartialEq)]
pub enum RecordedRequest {
    Get {
        url: String,
    },
    PostJson {
        url: String,
        body: serde_json::Value,
    },
    PostMultipart {
        url: String,
        field: String,
        file: ImageFile,
    },
}

impl RecordedRequest {
    pub fn url(&self) -> &str {
        match self {
            RecordedRequest::Get { url }
            | RecordedRequest::PostJson { url, .. }
            | RecordedRequest::PostMultipart { url, .. } => url,
        }
    }

    pub fn is_get(&self) -> bool {
        matches!(self, RecordedRequest::Get { .. })
    }
}

#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<ApiResponse, CatalogError>>>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn respond_json(&self, status: u16, body: serde_json::Value) -> &Self {
        self.respond(status, body.to_string())
    }

    pub fn fail_network(&self, message: &str) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Err(CatalogError::Network(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_json_body(&self) -> Option<serde_json::Value> {
        self.requests.borrow().iter().rev().find_map(|r| match r {
            RecordedRequest::PostJson { body, .. } => Some(body.clone()),
            _ => None,
        })
    }

    pub fn get_count(&self) -> usize {
        self.requests.borrow().iter().filter(|r| r.is_get()).count()
    }

    fn next(&self, request: RecordedRequest) -> Result<ApiResponse, CatalogError> {
        let url = request.url().to_string();
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted response left for {}", url))
    }
}

impl CatalogTransport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<ApiResponse, CatalogError> {
        self.next(RecordedRequest::Get {
            url: url.to_string(),
        })
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<ApiResponse, CatalogError> {
        self.next(RecordedRequest::PostJson {
            url: url.to_string(),
            body: body.clone(),
        })
    }

    async fn post_multipart(&self, url: &str, field: &str, file: ImageFile) -> Result<ApiResponse, CatalogError> {
        self.next(RecordedRequest::PostMultipart {
            url: url.to_string(),
            field: field.to_string(),
            file,
        })
    }
}

#[derive(Default)]
pub struct RecordingSink {
    renders: RefCell<Vec<String>>,
}

impl RecordingSink {
    pub fn renders(&self) -> Vec<String> {
        self.renders.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.renders.borrow().last().cloned()
    }
}

impl MarkupSink for RecordingSink {
    fn replace(&self, markup: String) {
        self.renders.borrow_mut().push(markup);
    }
}

pub fn test_client() -> CatalogClient<ScriptedTransport> {
    CatalogClient::new(ScriptedTransport::new(), CatalogConfig::new(BASE_URL))
}

pub fn test_session() -> CatalogSession<ScriptedTransport, RecordingSink> {
    CatalogSession::new(test_client(), RecordingSink::default())
}

pub fn desk_image() -> ImageFile {
    ImageFile::new("desk.jpg", vec![0xFF, 0xD8, 0xFF, 0xE0]).with_content_type("image/jpeg")
}
