use crate::error::SketchResult;
use crate::util::time;

/// File name offered for an export made now
pub fn export_file_name() -> String {
    format!("sketchpad-{}.png", time::timestamp_secs())
}

/// Let the user save the exported bytes: natively, a file in the working directory
#[cfg(not(target_arch = "wasm32"))]
pub fn offer_download(bytes: &[u8], file_name: &str) -> SketchResult<()> {
    let path = std::env::current_dir()?.join(file_name);
    std::fs::write(&path, bytes)?;
    log::info!("Saved export to {}", path.display());
    Ok(())
}

/// Let the user save the exported bytes: a download link in the browser
#[cfg(target_arch = "wasm32")]
pub fn offer_download(bytes: &[u8], file_name: &str) -> SketchResult<()> {
    use crate::error::SketchError;
    use wasm_bindgen::JsCast as _;

    let js_err = |err: wasm_bindgen::JsValue| SketchError::Download(format!("{err:?}"));

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| SketchError::Download("no document".to_owned()))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| SketchError::Download("not an anchor element".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_err)?;
    log::info!("Offered {file_name} for download");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name_is_png() {
        let name = export_file_name();
        assert!(name.starts_with("sketchpad-"));
        assert!(name.ends_with(".png"));
    }
}
