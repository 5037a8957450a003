//! Client-side file download through a temporary object URL.

/// Offer `contents` to the user as a file named `filename`.
///
/// # Errors
///
/// Returns a description of the failing browser call.
pub fn download_text(filename: &str, mime_type: &str, contents: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let describe = |err: wasm_bindgen::JsValue| format!("{err:?}");
        let window = web_sys::window().ok_or("window tidak tersedia")?;
        let document = window.document().ok_or("document tidak tersedia")?;

        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime_type);
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(describe)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(describe)?;

        let anchor = document
            .create_element("a")
            .map_err(describe)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "elemen unduhan tidak valid".to_owned())?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        let _ = anchor.set_attribute("hidden", "");
        let body = document.body().ok_or("body tidak tersedia")?;
        body.append_child(&anchor).map_err(describe)?;
        anchor.click();
        let _ = body.remove_child(&anchor);
        let _ = web_sys::Url::revoke_object_url(&url);
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (filename, mime_type, contents);
        Ok(())
    }
}
