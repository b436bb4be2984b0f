// web_app/config.rs - Endpoint configuration
//
// Native builds read CATALOG_API_URL (after loading .env in the CLI).
// Browser builds bake CATALOG_API_PATH in at compile time and resolve it
// against the page origin, since reqwest needs absolute URLs.

/// Path the catalog API is mounted on
pub const DEFAULT_API_PATH: &str = "/api/v1/products";

/// Used natively when CATALOG_API_URL is unset
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/v1/products";

pub const API_URL_ENV: &str = "CATALOG_API_URL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    base_url: String,
}

impl CatalogConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Products collection endpoint (`GET` and `POST`)
    pub fn products_url(&self) -> &str {
        &self.base_url
    }

    /// Image upload endpoint
    pub fn uploads_url(&self) -> String {
        format!("{}/uploads", self.base_url)
    }

    /// Read the base URL from the process environment
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => {
                tracing::debug!("{} not set, using {}", API_URL_ENV, DEFAULT_API_URL);
                Self::new(DEFAULT_API_URL)
            }
        }
    }

    /// Resolve the compiled-in API path against `window.location.origin`
    #[cfg(feature = "csr")]
    pub fn from_window() -> Self {
        let path = option_env!("CATALOG_API_PATH").unwrap_or(DEFAULT_API_PATH);
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        tracing::debug!("Catalog API at {}{}", origin, path);
        Self::from_origin(&origin, path)
    }

    /// Join an origin and a path, passing absolute URLs through unchanged
    pub fn from_origin(origin: &str, path: &str) -> Self {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Self::new(path);
        }
        let origin = origin.trim_end_matches('/');
        if path.starts_with('/') {
            Self::new(format!("{}{}", origin, path))
        } else {
            Self::new(format!("{}/{}", origin, path))
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = CatalogConfig::new("http://shop.test/api/v1/products/");
        assert_eq!(config.products_url(), "http://shop.test/api/v1/products");
        assert_eq!(config.uploads_url(), "http://shop.test/api/v1/products/uploads");
    }

    #[test]
    fn test_from_origin() {
        let config = CatalogConfig::from_origin("http://localhost:8080/", DEFAULT_API_PATH);
        assert_eq!(config.products_url(), "http://localhost:8080/api/v1/products");

        let config = CatalogConfig::from_origin("http://localhost:8080", "api/items");
        assert_eq!(config.products_url(), "http://localhost:8080/api/items");
    }

    #[test]
    fn test_from_origin_keeps_absolute_path() {
        let config = CatalogConfig::from_origin("http://localhost:8080", "https://api.shop.test/products");
        assert_eq!(config.products_url(), "https://api.shop.test/products");
    }

    #[test]
    fn test_default_points_at_local_api() {
        assert_eq!(CatalogConfig::default().products_url(), DEFAULT_API_URL);
    }
}
