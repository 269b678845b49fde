#![allow(dead_code)]

use fg_core::{DESCRIPTOR_LEN, Descriptor, Identity, NewIdentity, Profile};

/// Descriptor of zeros with `value` in the first dimension
pub fn offset_descriptor(value: f64) -> Descriptor {
    let mut values = vec![0.0; DESCRIPTOR_LEN];
    values[0] = value;
    Descriptor::new(values).expect("valid test descriptor")
}

/// Creates a face-enrolled identity
pub fn create_test_identity(handle: &str, descriptor_offset: f64) -> Identity {
    Identity::new(NewIdentity {
        handle: handle.to_string(),
        email: format!("{}@example.com", handle),
        descriptor: Some(offset_descriptor(descriptor_offset)),
        profile: Profile {
            display_name: handle.to_string(),
            ..Default::default()
        },
    })
}

/// Creates an email-only identity without a descriptor
pub fn create_email_only_identity(handle: &str) -> Identity {
    Identity::new(NewIdentity {
        handle: handle.to_string(),
        email: format!("{}@example.com", handle),
        descriptor: None,
        profile: Profile::default(),
    })
}
