//! Startup configuration.
//!
//! Two layers:
//!
//! - [`AppConfig`]: the optional `config.toml` read from the working
//!   directory at startup. It supplies the CLI help description and the image
//!   settings used for every copy.
//! - [`RunConfig`]: the immutable settings for one run, built once from the
//!   CLI arguments plus [`AppConfig`] and passed by reference to each stage.
//!
//! ## Config File
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [about]
//! description = "Organize front/back photo scans into a numbered directory"
//!
//! [images]
//! resize_factor = 0.7   # Scale applied to both edges (0 < factor <= 1)
//! quality = 90          # JPEG quality (1-100)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::Quality;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the working directory at startup.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Fixed parent of every output directory.
pub const BASE_OUTPUT_DIR: &str = "output";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub about: AboutConfig,
    pub images: ImagesConfig,
}

/// Text shown in `--help`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AboutConfig {
    pub description: String,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            description: "Organize front/back photo scans into a numbered directory".to_string(),
        }
    }
}

/// Resize and encoding settings applied to every copied image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    /// Multiplier applied to width and height, floored.
    pub resize_factor: f64,
    /// JPEG quality (1-100).
    pub quality: u8,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            resize_factor: 0.7,
            quality: 90,
        }
    }
}

impl AppConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factor = self.images.resize_factor;
        if !(factor > 0.0 && factor <= 1.0) {
            return Err(ConfigError::Validation(
                "images.resize_factor must be in (0, 1]".into(),
            ));
        }
        if self.images.quality == 0 || self.images.quality > 100 {
            return Err(ConfigError::Validation(
                "images.quality must be 1-100".into(),
            ));
        }
        Ok(())
    }
}

/// Load `config.toml` from `dir`, falling back to defaults when absent.
pub fn load_config(dir: &Path) -> Result<AppConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(AppConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: AppConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Immutable settings for one organize run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Directory holding the scanner's `.jpg` files.
    pub source_dir: PathBuf,
    /// Parent directory for the output; created when missing.
    pub base_output_dir: PathBuf,
    /// Name of the output directory under `base_output_dir`.
    pub output_name: String,
    /// Whether back scans are copied.
    pub copy_back: bool,
    pub resize_factor: f64,
    pub quality: Quality,
}

impl RunConfig {
    /// Build a run config from CLI values and the loaded file config.
    pub fn new(
        source_dir: impl Into<PathBuf>,
        output_name: impl Into<String>,
        skip_back: bool,
        app: &AppConfig,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            base_output_dir: PathBuf::from(BASE_OUTPUT_DIR),
            output_name: output_name.into(),
            copy_back: !skip_back,
            resize_factor: app.images.resize_factor,
            quality: Quality::new(app.images.quality),
        }
    }

    /// Directory the organized images are written to.
    pub fn destination_dir(&self) -> PathBuf {
        self.base_output_dir.join(&self.output_name)
    }
}
