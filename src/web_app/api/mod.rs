// web_app/api/mod.rs - Catalog API access
//
// transport.rs is the HTTP seam; client.rs maps endpoints to typed calls.

pub mod client;
pub mod transport;

pub use client::CatalogClient;
pub use transport::{ApiResponse, CatalogTransport, ReqwestTransport};
