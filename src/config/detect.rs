use crate::detector::{Algorithm, DetectParams};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for the `detect_segments` demo tool.
#[derive(Debug, Deserialize)]
pub struct DetectToolConfig {
    /// Point file: count header, `x y` pairs, optional blank terminator.
    pub input: PathBuf,
    #[serde(default)]
    pub algorithm: Algorithm,
    #[serde(default)]
    pub parallel: bool,
    /// Optional JSON report destination (input points + segments).
    #[serde(default)]
    pub segments_json: Option<PathBuf>,
}

impl DetectToolConfig {
    pub fn to_params(&self) -> DetectParams {
        DetectParams {
            algorithm: self.algorithm,
            parallel: self.parallel,
        }
    }
}

pub fn load_config(path: &Path) -> Result<DetectToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
