//! Runtime configuration for the demo binaries.
//!
//! A JSON config names the input image, the working rectangle and the output
//! destinations; engine parameters are optional and default to the standard
//! values.
use crate::engine::SegmenterParams;
use crate::trimap::Rect;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Destination for the binary mask PNG.
    pub mask_out: Option<PathBuf>,
    /// Destination for the JSON pass trace.
    pub trace_out: Option<PathBuf>,
}

#[derive(Clone, Deserialize)]
pub struct RuntimeConfig {
    pub input_path: PathBuf,
    /// Working rectangle: inside is unknown/eligible, outside is background.
    pub rect: Rect,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub params: SegmenterParams,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

/// Parse the single config-path argument of a demo binary.
pub fn parse_cli(program: &str) -> Result<RuntimeConfig, String> {
    let mut args = env::args().skip(1);
    let config_path = args
        .next()
        .ok_or_else(|| format!("Usage: {program} <config.json>"))?;
    if args.next().is_some() {
        return Err(format!("Usage: {program} <config.json>"));
    }
    load_config(Path::new(&config_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_parses_with_default_params() {
        let json = r#"{
            "input_path": "photo.png",
            "rect": { "x": 10, "y": 20, "w": 200, "h": 100 }
        }"#;
        let config: RuntimeConfig = serde_json::from_str(json).expect("parse");
        assert_eq!(config.rect.w, 200);
        assert_eq!(config.params.gmm.components, 5);
        assert_eq!(config.params.energy.gamma, 50.0);
        assert!(config.output.mask_out.is_none());
    }

    #[test]
    fn params_can_be_overridden() {
        let json = r#"{
            "input_path": "photo.png",
            "rect": { "x": 0, "y": 0, "w": 10, "h": 10 },
            "params": { "gmm": { "components": 3 }, "energy": { "gamma": 25.0 } }
        }"#;
        let config: RuntimeConfig = serde_json::from_str(json).expect("parse");
        assert_eq!(config.params.gmm.components, 3);
        assert_eq!(config.params.energy.gamma, 25.0);
    }
}
