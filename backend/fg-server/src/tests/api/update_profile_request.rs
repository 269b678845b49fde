use crate::UpdateProfileRequest;

use fg_core::{AgeGroup, CoreError};

#[test]
fn test_empty_request_produces_empty_patch() {
    let patch = UpdateProfileRequest::default().into_patch().unwrap();

    assert!(patch.is_empty());
}

#[test]
fn test_handle_and_email_are_normalized() {
    let request = UpdateProfileRequest {
        handle: Some("  alice ".to_string()),
        email: Some(" Alice@Example.COM ".to_string()),
        age_group: Some(" teen ".to_string()),
        ..Default::default()
    };

    let patch = request.into_patch().unwrap();

    assert_eq!(patch.handle.as_deref(), Some("alice"));
    assert_eq!(patch.email.as_deref(), Some("alice@example.com"));
    assert_eq!(patch.age_group, Some(AgeGroup::Teen));
    assert_eq!(patch.display_name, None);
}

#[test]
fn test_blank_handle_is_rejected() {
    let request = UpdateProfileRequest {
        handle: Some("   ".to_string()),
        ..Default::default()
    };

    let result = request.into_patch();

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: "handle", .. })
    ));
}

#[test]
fn test_unknown_adhd_subtype_is_rejected() {
    let request = UpdateProfileRequest {
        adhd_subtype: Some("mixed".to_string()),
        ..Default::default()
    };

    let result = request.into_patch();

    assert!(matches!(
        result,
        Err(CoreError::Validation {
            field: "adhd_subtype",
            ..
        })
    ));
}
