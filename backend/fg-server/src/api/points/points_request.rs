use serde::Deserialize;

/// Body for both points endpoints: the new balance for a set, the signed
/// delta for an add.
#[derive(Debug, Deserialize)]
pub struct PointsRequest {
    pub points: i64,
}
