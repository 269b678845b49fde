use crate::{Client, ClientError};

use googletest::prelude::*;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8000/", None);
    assert_that!(client.base_url, eq("http://localhost:8000"));
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8000", None);
    assert_that!(client.base_url, eq("http://localhost:8000"));
}

#[test]
fn test_token_stored() {
    let client = Client::new("http://localhost:8000", Some("abc.def.ghi"));
    assert_eq!(client.token.as_deref(), Some("abc.def.ghi"));
}

#[tokio::test]
async fn test_authorized_call_without_token_fails_before_sending() {
    // Port 9 is never contacted: the token check comes first
    let client = Client::new("http://127.0.0.1:9", None);

    let result = client.current_session().await;

    assert!(matches!(result, Err(ClientError::MissingToken { .. })));
}

#[test]
fn test_api_code_only_for_api_errors() {
    let api = ClientError::Api {
        code: "CONFLICT".to_string(),
        message: "handle is already taken".to_string(),
        location: error_location::ErrorLocation::from(std::panic::Location::caller()),
    };
    let missing = ClientError::MissingToken {
        location: error_location::ErrorLocation::from(std::panic::Location::caller()),
    };

    assert_eq!(api.api_code(), Some("CONFLICT"));
    assert_eq!(missing.api_code(), None);
}
