// web_app/pages/mod.rs - Page components module

pub mod catalog;

pub use catalog::CatalogPage;
