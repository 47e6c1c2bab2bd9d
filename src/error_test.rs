use super::*;

// =============================================================================
// from_status
// =============================================================================

#[test]
fn from_status_401_is_unauthorized() {
    let err = ApiError::from_status(401, r#"{"detail":"Token expired"}"#);
    assert!(err.is_unauthorized());
    assert_eq!(err.status(), Some(401));
}

#[test]
fn from_status_403_is_forbidden() {
    let err = ApiError::from_status(403, "");
    assert!(matches!(err, ApiError::Forbidden { .. }));
}

#[test]
fn from_status_other_4xx_is_rejected() {
    let err = ApiError::from_status(400, r#"{"username":["This field is required."]}"#);
    let ApiError::Rejected { status, body } = err else {
        panic!("expected Rejected");
    };
    assert_eq!(status, 400);
    assert_eq!(body.fields["username"], vec!["This field is required.".to_owned()]);
}

#[test]
fn from_status_404_is_rejected() {
    assert!(matches!(ApiError::from_status(404, ""), ApiError::Rejected { status: 404, .. }));
}

#[test]
fn from_status_5xx_is_server() {
    assert_eq!(ApiError::from_status(500, "boom"), ApiError::Server { status: 500 });
    assert_eq!(ApiError::from_status(503, ""), ApiError::Server { status: 503 });
}

#[test]
fn network_error_has_no_status() {
    assert_eq!(ApiError::Network("refused".to_owned()).status(), None);
}

// =============================================================================
// ErrorBody
// =============================================================================

#[test]
fn error_body_parses_detail() {
    let body = ErrorBody::parse(r#"{"detail":"Not allowed."}"#);
    assert_eq!(body.detail.as_deref(), Some("Not allowed."));
    assert!(body.fields.is_empty());
}

#[test]
fn error_body_accepts_message_key() {
    let body = ErrorBody::parse(r#"{"message":"Already saved"}"#);
    assert_eq!(body.detail.as_deref(), Some("Already saved"));
}

#[test]
fn error_body_non_json_is_empty() {
    assert!(ErrorBody::parse("<html>Bad Gateway</html>").is_empty());
    assert!(ErrorBody::parse("").is_empty());
}

#[test]
fn error_body_string_field_becomes_single_message() {
    let body = ErrorBody::parse(r#"{"job_id":"job_id required"}"#);
    assert_eq!(body.fields["job_id"], vec!["job_id required".to_owned()]);
}

#[test]
fn error_body_summary_prefers_detail() {
    let body = ErrorBody::parse(r#"{"detail":"Nope","email":["bad"]}"#);
    assert_eq!(body.summary().as_deref(), Some("Nope"));
}

#[test]
fn error_body_summary_falls_back_to_first_field() {
    let body = ErrorBody::parse(r#"{"password":["Too short."],"username":["Taken."]}"#);
    assert_eq!(body.summary().as_deref(), Some("password: Too short."));
}

// =============================================================================
// user_message
// =============================================================================

#[test]
fn user_message_for_server_error_asks_to_retry() {
    let msg = ApiError::Server { status: 502 }.user_message();
    assert!(msg.contains("try again"));
}

#[test]
fn user_message_for_rejected_without_body_mentions_status() {
    let msg = ApiError::from_status(409, "").user_message();
    assert_eq!(msg, "The request was rejected (status 409).");
}

#[test]
fn user_message_for_unauthorized_uses_detail() {
    let msg = ApiError::from_status(401, r#"{"detail":"No active account found with the given credentials"}"#)
        .user_message();
    assert_eq!(msg, "No active account found with the given credentials");
}
