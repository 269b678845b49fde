use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub id: String,
    pub points: i64,
}
