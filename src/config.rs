//! Configuration for the `pixelwalk` tool.
//!
//! YAML file with precedence: CLI > ENV > file > defaults.
//!
//! ```yaml
//! version: 1
//! debug: false
//! raster:
//!   default_algorithm: bresenham-line
//! clip:
//!   default_algorithm: cohen-sutherland
//!   midpoint_max_iterations: 20
//!   midpoint_convergence: 0.5
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::clip::{ClipKind, MidpointLimits};
use crate::debug::{is_truthy, DEBUG_ENV};
use crate::error::{Error, Result};
use crate::raster::RasterKind;

/// Environment variable overriding `clip.midpoint_max_iterations`.
pub const MIDPOINT_ITERATIONS_ENV: &str = "PIXELWALK_MIDPOINT_ITERATIONS";

/// Rasterizer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RasterConfig {
    /// Algorithm used when the CLI is not given one.
    #[serde(default = "default_raster_algorithm")]
    pub default_algorithm: RasterKind,
}

fn default_raster_algorithm() -> RasterKind {
    RasterKind::BresenhamLine
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            default_algorithm: default_raster_algorithm(),
        }
    }
}

/// Clipper settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipConfig {
    /// Algorithm used when the CLI is not given one.
    #[serde(default = "default_clip_algorithm")]
    pub default_algorithm: ClipKind,

    /// Bisection budget per midpoint search.
    #[serde(default = "default_midpoint_max_iterations")]
    pub midpoint_max_iterations: u32,

    /// Gap below which midpoint subdivision stops.
    #[serde(default = "default_midpoint_convergence")]
    pub midpoint_convergence: f64,
}

fn default_clip_algorithm() -> ClipKind {
    ClipKind::CohenSutherland
}
fn default_midpoint_max_iterations() -> u32 {
    MidpointLimits::DEFAULT_MAX_ITERATIONS
}
fn default_midpoint_convergence() -> f64 {
    MidpointLimits::DEFAULT_CONVERGENCE
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            default_algorithm: default_clip_algorithm(),
            midpoint_max_iterations: default_midpoint_max_iterations(),
            midpoint_convergence: default_midpoint_convergence(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Enable debug logging.
    #[serde(default)]
    pub debug: bool,

    /// Rasterizer settings.
    #[serde(default)]
    pub raster: RasterConfig,

    /// Clipper settings.
    #[serde(default)]
    pub clip: ClipConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            debug: false,
            raster: RasterConfig::default(),
            clip: ClipConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(Error::ConfigNotFound(_)) => Self::default(),
            Err(e) => {
                crate::warn!("config", "{}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the offending key.
    pub fn validate(&self) -> Result<()> {
        if self.clip.midpoint_max_iterations == 0 {
            return Err(Error::ConfigInvalid {
                key: "clip.midpoint_max_iterations".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        let convergence = self.clip.midpoint_convergence;
        if !convergence.is_finite() || convergence <= 0.0 {
            return Err(Error::ConfigInvalid {
                key: "clip.midpoint_convergence".to_string(),
                message: format!("must be a positive number, got {convergence}"),
            });
        }
        Ok(())
    }

    /// Applies overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] if a variable holds an unusable value.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`, which maps variable names to values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] if a variable holds an unusable value.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = lookup(DEBUG_ENV) {
            self.debug = is_truthy(&value);
        }
        if let Some(value) = lookup(MIDPOINT_ITERATIONS_ENV) {
            self.clip.midpoint_max_iterations =
                value.trim().parse().map_err(|_| Error::ConfigInvalid {
                    key: MIDPOINT_ITERATIONS_ENV.to_string(),
                    message: format!("expected a positive integer, got '{value}'"),
                })?;
        }
        self.validate()
    }

    /// Midpoint subdivision limits from the clip settings.
    #[must_use]
    pub fn midpoint_limits(&self) -> MidpointLimits {
        MidpointLimits {
            max_iterations: self.clip.midpoint_max_iterations,
            convergence: self.clip.midpoint_convergence,
        }
    }
}
