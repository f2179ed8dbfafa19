//! Browser file save for the schema download

use leptos::web_sys;
use schemaform_core::SchemaDownload;
use wasm_bindgen::{JsCast, JsValue};

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Offer `download` to the user through a temporary object URL
pub fn save(download: &SchemaDownload) -> Result<(), String> {
    let parts = js_sys::Array::of1(&JsValue::from_str(&download.body));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(download.content_type);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(js_error)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "No document available".to_string())?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| "Failed to create download link".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(download.file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_error)
}

/// Save the editor text, alerting the user on failure
pub fn save_editor_text(text: &str) {
    let download = SchemaDownload::from_editor_text(text);
    if let Err(e) = save(&download) {
        log::error!("Error downloading JSON: {}", e);
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message("An error occurred while downloading the JSON.");
        }
    }
}
