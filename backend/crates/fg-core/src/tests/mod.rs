mod enrollment;

use crate::{DESCRIPTOR_LEN, Descriptor, Identity, NewIdentity, Profile};

use uuid::Uuid;

/// Descriptor of zeros with `value` in the first dimension
pub(crate) fn offset_descriptor(value: f64) -> Vec<f64> {
    let mut values = vec![0.0; DESCRIPTOR_LEN];
    values[0] = value;
    values
}

/// Identity with a fixed id and an unchecked stored descriptor
pub(crate) fn identity_with(id: u128, descriptor: Option<Vec<f64>>) -> Identity {
    let mut identity = Identity::new(NewIdentity {
        handle: format!("user-{}", id),
        email: format!("user-{}@example.com", id),
        descriptor: descriptor.map(Descriptor::from_stored),
        profile: Profile::default(),
    });
    identity.id = Uuid::from_u128(id);
    identity
}
