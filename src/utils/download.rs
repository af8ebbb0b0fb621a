//! Client-side file downloads through a temporary object URL.

use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::dom;
use crate::config::table::EXPORT_URL_LIFETIME_MS;
use crate::core::error::DownloadError;

/// MIME type of exported tables.
pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

/// Offer `content` to the user as a file named `filename`.
pub fn download_text(filename: &str, mime: &str, content: &str) -> Result<(), DownloadError> {
    start_download(filename, mime, content).map(|_| ())
}

/// Click a download link and return its object URL, revoked after
/// `EXPORT_URL_LIFETIME_MS`.
fn start_download(filename: &str, mime: &str, content: &str) -> Result<String, DownloadError> {
    let document = dom::window()
        .and_then(|w| w.document())
        .ok_or(DownloadError::NoDocument)?;

    let parts = Array::new();
    parts.push(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| DownloadError::BlobCreationFailed)?;

    let url = Url::create_object_url_with_blob(&blob).map_err(|_| DownloadError::ObjectUrlFailed)?;

    let link = document
        .create_element("a")
        .map_err(|_| DownloadError::LinkCreationFailed)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| DownloadError::LinkCreationFailed)?;
    link.set_href(&url);
    link.set_download(filename);
    link.click();

    // Revoking in the same tick can cancel the download in some browsers
    if let Some(window) = dom::window() {
        let url = url.clone();
        spawn_local(async move {
            dom::delay(&window, EXPORT_URL_LIFETIME_MS).await;
            let _ = Url::revoke_object_url(&url);
        });
    }

    Ok(url)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn url_is_readable(url: &str) -> bool {
        let Some(window) = dom::window() else {
            return false;
        };
        wasm_bindgen_futures::JsFuture::from(window.fetch_with_str(url))
            .await
            .is_ok()
    }

    #[wasm_bindgen_test]
    async fn test_object_url_outlives_click() {
        let url = start_download("rows.csv", CSV_MIME, "name,age\nCid,20\n").expect("download");
        let window = dom::window().expect("window");

        dom::delay(&window, 0).await;
        assert!(url_is_readable(&url).await);

        dom::delay(&window, EXPORT_URL_LIFETIME_MS + 200).await;
        assert!(!url_is_readable(&url).await);
    }
}
