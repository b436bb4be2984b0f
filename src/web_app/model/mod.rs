// web_app/model/mod.rs - Shared data models for the catalog client
//
// These structs describe the JSON exchanged with the catalog API and the
// values the form hands to the session.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Product payload sent to the creation endpoint
///
/// `image` is always serialized, as `null` when no upload succeeded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: String,
    pub image: Option<String>,
}

/// Raw form values read at submission time
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
        }
    }

    /// Combine the form values with the current image reference
    pub fn into_product(self, image: Option<String>) -> NewProduct {
        NewProduct {
            name: self.name,
            price: self.price,
            image,
        }
    }
}

/// A file picked in the image input, ready to be sent as multipart
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Body returned by `POST {base}/uploads`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub image: UploadedImage,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub src: String,
}

/// Listing price: the API sends either a string or a number
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(serde_json::Number),
    Text(String),
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Price::Number(n) => write!(f, "{}", format_number(n)),
            Price::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Print a JSON number the way the browser does (`10.0` becomes `10`)
fn format_number(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}

/// One record of the product listing
///
/// Every field is optional on the wire. Scalars of the wrong type are
/// printed as text; `null`, arrays and objects count as missing and render
/// empty. A bad field never drops the record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListedProduct {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: Option<Price>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub image: Option<String>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(format_number(&n)),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_price<'de, D>(deserializer: D) -> Result<Option<Price>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => Some(Price::Number(n)),
        Value::String(s) => Some(Price::Text(s)),
        Value::Bool(b) => Some(Price::Text(b.to_string())),
        _ => None,
    })
}
