// web_app/error.rs - Error type shared by the client, transport and session

use thiserror::Error;

/// The catalog call that failed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    UploadImage,
    AddProduct,
    FetchProducts,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::UploadImage => write!(f, "upload image"),
            Operation::AddProduct => write!(f, "add product"),
            Operation::FetchProducts => write!(f, "fetch products"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),

    #[error("Failed to {operation} (HTTP {status})")]
    Status { operation: Operation, status: u16 },

    #[error("malformed JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid response format: {0}")]
    InvalidResponse(&'static str),

    #[error("no file selected")]
    NoFileSelected,

    #[error("could not read selected file: {0}")]
    FileRead(String),
}

impl CatalogError {
    pub fn network(err: impl std::fmt::Display) -> Self {
        CatalogError::Network(err.to_string())
    }
}
