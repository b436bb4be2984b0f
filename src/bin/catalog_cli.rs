// Command-line companion for the catalog API
//
// Uses the same client as the browser app. Configure the endpoint with
// CATALOG_API_URL (a .env file is honoured) and the log level with RUST_LOG.
//
//   catalog_cli list
//   catalog_cli upload <path>
//   catalog_cli add <name> <price> [image-path]

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use product_catalog::web_app::api::{CatalogClient, ReqwestTransport};
use product_catalog::web_app::config::CatalogConfig;
use product_catalog::web_app::model::{ImageFile, ListedProduct, ProductDraft};

const USAGE: &str = "usage: catalog_cli list | upload <path> | add <name> <price> [image-path]";

type Client = CatalogClient<ReqwestTransport>;

fn main() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main())
}

async fn async_main() -> Result<()> {
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let client = CatalogClient::new(ReqwestTransport::new(), CatalogConfig::from_env());
    tracing::info!("Using catalog API at {}", client.config().products_url());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["list"] => list(&client).await,
        ["upload", path] => {
            let image = load_image(Path::new(path)).await?;
            let src = client.upload_image(image).await?;
            println!("{}", src);
            Ok(())
        }
        ["add", name, price] => add(&client, name, price, None).await,
        ["add", name, price, path] => add(&client, name, price, Some(Path::new(path))).await,
        _ => bail!(USAGE),
    }
}

async fn list(client: &Client) -> Result<()> {
    let products = client.fetch_products().await?;
    if products.is_empty() {
        println!("No products.");
    }
    for product in &products {
        println!("{}", format_line(product));
    }
    Ok(())
}

async fn add(client: &Client, name: &str, price: &str, image_path: Option<&Path>) -> Result<()> {
    // Same policy as the browser: a failed upload still submits, without an image
    let image = match image_path {
        Some(path) => {
            let file = load_image(path).await?;
            match client.upload_image(file).await {
                Ok(src) => Some(src),
                Err(e) => {
                    tracing::error!("Image upload failed: {}", e);
                    None
                }
            }
        }
        None => None,
    };

    let product = ProductDraft::new(name, price).into_product(image);
    client.create_product(&product).await?;
    list(client).await
}

async fn load_image(path: &Path) -> Result<ImageFile> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("could not read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    let image = ImageFile::new(file_name, bytes);
    Ok(match content_type_for(path) {
        Some(content_type) => image.with_content_type(content_type),
        None => image,
    })
}

fn content_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

fn format_line(product: &ListedProduct) -> String {
    let price = product
        .price
        .as_ref()
        .map(|p| p.to_string())
        .unwrap_or_default();
    format!(
        "{:<30} ${:<10} {}",
        product.name.as_deref().unwrap_or_default(),
        price,
        product.image.as_deref().unwrap_or("-")
    )
}
