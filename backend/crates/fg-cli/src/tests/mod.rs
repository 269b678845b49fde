mod client;

use fg_core::DESCRIPTOR_LEN;

use std::path::PathBuf;

/// Write `values` as a JSON descriptor file inside `dir`
pub(crate) fn write_descriptor(dir: &tempfile::TempDir, values: &[f64]) -> PathBuf {
    let path = dir.path().join("descriptor.json");
    std::fs::write(&path, serde_json::to_string(values).unwrap()).unwrap();
    path
}

pub(crate) fn full_descriptor(value: f64) -> Vec<f64> {
    vec![value; DESCRIPTOR_LEN]
}
