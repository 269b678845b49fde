use serde::Deserialize;

/// POST /api/login/face body
#[derive(Debug, Deserialize)]
pub struct FaceLoginRequest {
    /// Probe descriptor, exactly 128 numbers
    pub descriptor: Vec<f64>,
}
