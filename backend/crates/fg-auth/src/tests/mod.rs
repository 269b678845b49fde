
use fg_core::{Identity, NewIdentity, Profile};

pub(crate) const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

pub(crate) fn test_identity() -> Identity {
    Identity::new(NewIdentity {
        handle: "alice".to_string(),
        email: "alice@example.com".to_string(),
        descriptor: None,
        profile: Profile::default(),
    })
}
