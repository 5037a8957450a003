use super::*;
use records::MailType;

// =============================================================
// encode_request
// =============================================================

#[test]
fn request_body_names_function_and_args() {
    let body = encode_request(&Call::delete_surat(MailType::Masuk, "m-1")).unwrap();
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "functionName": "deleteSurat", "args": ["masuk", "m-1"] })
    );
}

#[test]
fn zero_arg_call_sends_empty_args() {
    let body = encode_request(&Call::check_auth()).unwrap();
    assert_eq!(body, r#"{"functionName":"checkAuth","args":[]}"#);
}

// =============================================================
// normalize_response
// =============================================================

#[test]
fn non_2xx_rejects_with_status_in_message() {
    let err = normalize_response(Operation::ListSurat, 500, "Internal error").unwrap_err();
    assert_eq!(
        err,
        RemoteError::Http {
            status: 500,
            body: "Internal error".to_owned()
        }
    );
    assert!(err.to_string().contains("500"));
    assert_eq!(err.to_string(), "HTTP 500: Internal error");
}

#[test]
fn redirect_status_also_rejects() {
    assert!(matches!(
        normalize_response(Operation::Ping, 302, ""),
        Err(RemoteError::Http { status: 302, .. })
    ));
}

#[test]
fn ok_plain_value_resolves() {
    let out = normalize_response(Operation::GetNewNomorSurat, 200, "\"005/SK/2024\"");
    assert_eq!(out, Ok(serde_json::json!("005/SK/2024")));
}

#[test]
fn ok_with_failed_envelope_rejects() {
    let err = normalize_response(Operation::Login, 200, r#"{"success":false,"message":"Salah"}"#).unwrap_err();
    assert_eq!(err, RemoteError::Backend("Salah".to_owned()));
}

#[test]
fn ok_with_failed_list_reply_rejects_with_backend_message() {
    let body = r#"{"success":false,"message":"Sesi berakhir"}"#;
    for operation in [Operation::ListSurat, Operation::GetDashboardStats] {
        let err = normalize_response(operation, 200, body).unwrap_err();
        assert_eq!(err, RemoteError::Backend("Sesi berakhir".to_owned()));
    }
}

#[test]
fn ok_probe_with_success_false_resolves() {
    let out = normalize_response(Operation::Ping, 200, r#"{"success":false}"#);
    assert_eq!(out, Ok(serde_json::json!({ "success": false })));
}

#[test]
fn ok_with_error_field_rejects() {
    let err = normalize_response(Operation::ListSurat, 200, r#"{"error":"Sheet hilang"}"#).unwrap_err();
    assert_eq!(err.to_string(), "Sheet hilang");
}

#[test]
fn unparseable_body_is_decode_error() {
    let err = normalize_response(Operation::ListSurat, 200, "<html>").unwrap_err();
    assert!(matches!(err, RemoteError::Decode(_)));
}

// =============================================================
// Transport
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn native_call_rejects_without_network() {
    let transport = HttpTransport::new("https://example.invalid/exec");
    assert_eq!(transport.name(), "http");
    assert_eq!(transport.endpoint(), "https://example.invalid/exec");
    let out = futures::executor::block_on(transport.call(Call::ping()));
    assert!(matches!(out, Err(RemoteError::Transport(_))));
}
