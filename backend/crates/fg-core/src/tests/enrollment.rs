use crate::tests::offset_descriptor;
use crate::{
    AdhdSubtype, AgeGroup, CoreError, DescriptorPolicy, EnrollmentRequest, normalize_email,
    normalize_handle,
};

use googletest::prelude::*;

fn face_request() -> EnrollmentRequest {
    EnrollmentRequest {
        handle: "  alice ".to_string(),
        email: " Alice@Example.COM ".to_string(),
        descriptor: Some(offset_descriptor(0.1)),
        ..Default::default()
    }
}

fn failed_field(result: crate::Result<crate::NewIdentity>) -> &'static str {
    match result {
        Err(CoreError::Validation { field, .. }) => field,
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn given_valid_face_request_when_validated_then_values_are_normalized() {
    let identity = face_request().validate(DescriptorPolicy::Required).unwrap();

    assert_that!(identity.handle, eq("alice"));
    assert_that!(identity.email, eq("alice@example.com"));
    assert_that!(identity.descriptor.map(|d| d.len()), some(eq(128)));
    assert_that!(identity.profile.display_name, eq("alice"));
    assert_that!(identity.profile.age_group, eq(AgeGroup::Adult));
    assert_that!(identity.profile.adhd_subtype, eq(AdhdSubtype::Combined));
}

#[test]
fn given_blank_handle_when_validated_then_handle_field_named() {
    let request = EnrollmentRequest {
        handle: "   ".to_string(),
        ..face_request()
    };

    assert_that!(failed_field(request.validate(DescriptorPolicy::Required)), eq("handle"));
}

#[test]
fn given_blank_handle_and_bad_email_when_validated_then_handle_reported_first() {
    let request = EnrollmentRequest {
        handle: String::new(),
        email: "nope".to_string(),
        descriptor: Some(vec![0.0; 3]),
        ..Default::default()
    };

    assert_that!(failed_field(request.validate(DescriptorPolicy::Required)), eq("handle"));
}

#[test]
fn given_email_without_at_when_validated_then_email_field_named() {
    let request = EnrollmentRequest {
        email: "alice.example.com".to_string(),
        ..face_request()
    };

    assert_that!(failed_field(request.validate(DescriptorPolicy::Required)), eq("email"));
}

#[test]
fn given_empty_email_when_validated_then_email_field_named() {
    let request = EnrollmentRequest {
        email: " ".to_string(),
        ..face_request()
    };

    assert_that!(failed_field(request.validate(DescriptorPolicy::Optional)), eq("email"));
}

#[test]
fn given_wrong_length_descriptor_when_validated_then_descriptor_field_named() {
    for len in [0usize, 1, 127, 129, 256] {
        let request = EnrollmentRequest {
            descriptor: Some(vec![0.0; len]),
            ..face_request()
        };

        assert_that!(
            failed_field(request.validate(DescriptorPolicy::Optional)),
            eq("descriptor")
        );
    }
}

#[test]
fn given_infinite_descriptor_value_when_validated_then_descriptor_field_named() {
    let request = EnrollmentRequest {
        descriptor: Some(offset_descriptor(f64::INFINITY)),
        ..face_request()
    };

    assert_that!(failed_field(request.validate(DescriptorPolicy::Required)), eq("descriptor"));
}

#[test]
fn given_missing_descriptor_on_face_path_when_validated_then_descriptor_required() {
    let request = EnrollmentRequest {
        descriptor: None,
        ..face_request()
    };

    assert_that!(failed_field(request.validate(DescriptorPolicy::Required)), eq("descriptor"));
}

#[test]
fn given_missing_descriptor_on_email_path_when_validated_then_ok_without_descriptor() {
    let request = EnrollmentRequest {
        descriptor: None,
        ..face_request()
    };

    let identity = request.validate(DescriptorPolicy::Optional).unwrap();

    assert_that!(identity.descriptor, none());
}

#[test]
fn given_profile_tags_when_validated_then_parsed() {
    let request = EnrollmentRequest {
        display_name: Some(" Alice A. ".to_string()),
        pronouns: Some("she/her".to_string()),
        age_group: Some("teen".to_string()),
        adhd_subtype: Some("inattentive".to_string()),
        ..face_request()
    };

    let identity = request.validate(DescriptorPolicy::Required).unwrap();

    assert_that!(identity.profile.display_name, eq("Alice A."));
    assert_that!(identity.profile.pronouns, eq("she/her"));
    assert_that!(identity.profile.age_group, eq(AgeGroup::Teen));
    assert_that!(identity.profile.adhd_subtype, eq(AdhdSubtype::Inattentive));
}

#[test]
fn given_unknown_age_group_when_validated_then_age_group_field_named() {
    let request = EnrollmentRequest {
        age_group: Some("toddler".to_string()),
        ..face_request()
    };

    assert_that!(failed_field(request.validate(DescriptorPolicy::Required)), eq("age_group"));
}

#[test]
fn given_blank_age_group_when_validated_then_default_used() {
    let request = EnrollmentRequest {
        age_group: Some("".to_string()),
        ..face_request()
    };

    let identity = request.validate(DescriptorPolicy::Required).unwrap();

    assert_that!(identity.profile.age_group, eq(AgeGroup::Adult));
}

#[test]
fn test_normalize_helpers() {
    assert_that!(normalize_handle(" bob "), ok(eq("bob")));
    assert!(normalize_handle("").is_err());
    assert_that!(normalize_email(" Bob@X.io"), ok(eq("bob@x.io")));
    assert!(normalize_email("bob").is_err());
}
