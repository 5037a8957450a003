use super::*;

#[test]
fn upload_payload_is_text_after_comma() {
    let picked = PickedFile {
        name: "foto.png".to_owned(),
        mime_type: "image/png".to_owned(),
        data_url: "data:image/png;base64,iVBORw0KGgo=".to_owned(),
    };
    let upload = picked.to_upload().unwrap();
    assert_eq!(upload.base64_data, "iVBORw0KGgo=");
    assert_eq!(upload.file_name, "foto.png");
    assert_eq!(upload.mime_type, "image/png");
}

#[test]
fn malformed_data_url_has_no_payload() {
    let picked = PickedFile {
        name: "x".to_owned(),
        mime_type: "text/plain".to_owned(),
        data_url: "garbage".to_owned(),
    };
    assert!(picked.to_upload().is_none());
}
