//! Export a document as a PDF download.

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error(transparent)]
    Pdf(#[from] pdf::PdfError),

    #[error("browser refused the download: {0}")]
    Browser(String),

    #[cfg(not(target_arch = "wasm32"))]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Render `text` and hand it to the user as `Complaint_<date>.pdf`.
/// Returns the filename used.
pub fn download_pdf(text: &str, author: Option<&str>) -> Result<String, DownloadError> {
    let bytes = pdf::export_pdf(text, author)?;
    let filename = pdf::todays_filename();
    save_bytes(&filename, &bytes)?;
    tracing::info!("Exported {} ({} bytes)", filename, bytes.len());
    Ok(filename)
}

#[cfg(target_arch = "wasm32")]
fn save_bytes(filename: &str, bytes: &[u8]) -> Result<(), DownloadError> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| DownloadError::Browser("no document".to_string()))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_error)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let anchor = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| DownloadError::Browser("could not create link".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_error)
}

#[cfg(target_arch = "wasm32")]
fn js_error(value: wasm_bindgen::JsValue) -> DownloadError {
    DownloadError::Browser(format!("{value:?}"))
}

#[cfg(not(target_arch = "wasm32"))]
fn save_bytes(filename: &str, bytes: &[u8]) -> Result<(), DownloadError> {
    let path = std::env::temp_dir().join(filename);
    std::fs::write(&path, bytes)?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}
