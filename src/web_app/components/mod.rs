// web_app/components/mod.rs - UI components module
//
// - product.rs: product form, product container and file reading

pub mod product;

pub use product::*;
