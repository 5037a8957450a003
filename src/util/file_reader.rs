//! Reading a picked file as a data URL.
//!
//! Used for surat attachments and profile photos: the data URL doubles as a
//! preview source and, after the first comma, as the base64 upload payload.

#[cfg(test)]
#[path = "file_reader_test.rs"]
mod file_reader_test;

use records::UploadedFile;

/// A file read from an `<input type="file">`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub mime_type: String,
    pub data_url: String,
}

impl PickedFile {
    /// Upload payload for this file, if the data URL carries one.
    #[must_use]
    pub fn to_upload(&self) -> Option<UploadedFile> {
        UploadedFile::from_data_url(&self.name, &self.mime_type, &self.data_url)
    }
}

/// Read the first file selected in `input`. `None` when nothing is selected
/// or the read fails.
#[cfg(feature = "csr")]
pub async fn read_first_file(input: &web_sys::HtmlInputElement) -> Option<PickedFile> {
    use futures::channel::oneshot;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let file = input.files()?.get(0)?;
    let reader = web_sys::FileReader::new().ok()?;
    let (tx, rx) = oneshot::channel::<Option<String>>();
    let tx = std::rc::Rc::new(std::cell::RefCell::new(Some(tx)));

    let done = {
        let tx = tx.clone();
        let reader = reader.clone();
        Closure::once_into_js(move || {
            let url = reader.result().ok().and_then(|v| v.as_string());
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(url);
            }
        })
    };
    let failed = Closure::once_into_js(move || {
        if let Some(tx) = tx.borrow_mut().take() {
            let _ = tx.send(None);
        }
    });
    reader.set_onload(Some(done.unchecked_ref()));
    reader.set_onerror(Some(failed.unchecked_ref()));
    reader.read_as_data_url(&file).ok()?;

    let data_url = rx.await.ok().flatten()?;
    Some(PickedFile {
        name: file.name(),
        mime_type: file.type_(),
        data_url,
    })
}
