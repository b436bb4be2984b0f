// web_app/components/product.rs - Product form and product container
//
// Components for the catalog page:
// - ProductForm: name/price/image form (`.file-form`)
// - ProductContainer: element whose markup is replaced on each listing

use leptos::callback::{Callable, UnsyncCallback};
use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

use crate::web_app::error::CatalogError;
use crate::web_app::model::{ImageFile, ProductDraft};

/// Product creation form
///
/// The browser's default submission is suppressed; field values are left
/// as typed after submitting.
#[component]
pub fn ProductForm(
    /// Called with the first selected file whenever the image input changes
    on_image: UnsyncCallback<Option<File>>,
    /// Called with the current field values on submit
    on_submit: UnsyncCallback<ProductDraft>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());

    view! {
        <form
            class="file-form"
            on:submit=move |ev: SubmitEvent| {
                ev.prevent_default();
                on_submit.run(ProductDraft::new(name.get_untracked(), price.get_untracked()));
            }
        >
            <h4>"file upload"</h4>
            <div class="form-row">
                <label for="name" class="form-label">"name"</label>
                <input
                    type="text"
                    id="name"
                    class="form-input"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </div>
            <div class="form-row">
                <label for="price" class="form-label">"price"</label>
                <input
                    type="number"
                    id="price"
                    class="form-input"
                    prop:value=move || price.get()
                    on:input=move |ev| price.set(event_target_value(&ev))
                />
            </div>
            <div class="form-row">
                <label for="image" class="form-label">"image"</label>
                <input
                    type="file"
                    id="image"
                    accept="image/*"
                    class="form-input"
                    on:change=move |ev: Event| {
                        let input = event_target::<HtmlInputElement>(&ev);
                        // Only the first file is used even if several are picked
                        let file = input.files().and_then(|files| files.get(0));
                        on_image.run(file);
                    }
                />
            </div>
            <button type="submit" class="btn btn-block">"submit"</button>
        </form>
    }
}

/// Container for the rendered product list
#[component]
pub fn ProductContainer(
    /// Markup produced by the session; replaced wholesale
    markup: RwSignal<String>,
) -> impl IntoView {
    view! {
        <section class="products">
            <div class="container" inner_html=move || markup.get()></div>
        </section>
    }
}

/// Read a picked file into memory for the multipart upload
pub async fn read_image_file(file: File) -> Result<ImageFile, CatalogError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| CatalogError::FileRead(format!("{:?}", e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    let image = ImageFile::new(file.name(), bytes);
    let content_type = file.type_();
    if content_type.is_empty() {
        Ok(image)
    } else {
        Ok(image.with_content_type(content_type))
    }
}
