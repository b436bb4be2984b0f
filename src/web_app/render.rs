// web_app/render.rs - Product list markup
//
// Plain string rendering: the container's markup is replaced wholesale, so
// there is nothing to diff.

use crate::web_app::model::ListedProduct;

/// Escape text for use in HTML content and double-quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render one product card
pub fn render_product(product: &ListedProduct) -> String {
    let name = escape_html(product.name.as_deref().unwrap_or_default());
    let image = escape_html(product.image.as_deref().unwrap_or_default());
    let price = product
        .price
        .as_ref()
        .map(|p| escape_html(&p.to_string()))
        .unwrap_or_default();

    format!(
        r#"<article class="product">
  <img src="{image}" alt="{name}" class="img"/>
  <footer>
    <p>{name}</p>
    <span>${price}</span>
  </footer>
</article>"#
    )
}

/// Render every product, in order, with no separator
pub fn render_products(products: &[ListedProduct]) -> String {
    products.iter().map(render_product).collect()
}
