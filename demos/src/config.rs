// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! TOML configuration for the demo.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pulse_dataset::FieldMap;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub(crate) struct PulseConfig {
    pub(crate) input: InputConfig,
    pub(crate) canvas: CanvasConfig,
    pub(crate) output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub(crate) struct InputConfig {
    pub(crate) csv: Option<PathBuf>,
    /// Keep only rows from this region, compared case-insensitively.
    pub(crate) restrict_region: Option<String>,
    pub(crate) fields: FieldMap,
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub(crate) struct CanvasConfig {
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub(crate) struct OutputConfig {
    pub(crate) svg: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            svg: PathBuf::from("pulse.svg"),
        }
    }
}

impl PulseConfig {
    pub(crate) fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
    }

    pub(crate) fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = PulseConfig::from_toml("").unwrap();
        assert_eq!(config.input.csv, None);
        assert_eq!(config.input.fields, FieldMap::default());
        assert_eq!(config.canvas.width, 1200);
        assert_eq!(config.output.svg, PathBuf::from("pulse.svg"));
    }

    #[test]
    fn partial_field_map_keeps_other_defaults() {
        let config = PulseConfig::from_toml(
            r#"
            [input]
            csv = "data/sample.csv"
            restrict_region = "manhattan"

            [input.fields]
            latitude = "lat"
            longitude = "lng"

            [canvas]
            width = 640
            "#,
        )
        .unwrap();

        assert_eq!(config.input.csv, Some(PathBuf::from("data/sample.csv")));
        assert_eq!(config.input.restrict_region.as_deref(), Some("manhattan"));
        assert_eq!(config.input.fields.latitude, "lat");
        assert_eq!(config.input.fields.name, "Property Name");
        assert_eq!(config.canvas.width, 640);
        assert_eq!(config.canvas.height, 800);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let err = PulseConfig::from_toml("[canvas]\nwidth = \"wide\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }

    #[test]
    fn missing_file_names_path() {
        let err = PulseConfig::load_from_file(Path::new("/no/such/pulse.toml")).unwrap_err();
        assert!(err.to_string().contains("/no/such/pulse.toml"));
    }
}
