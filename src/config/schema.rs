//! Configuration schema definitions.
//!
//! All types derive Serde traits so options can be embedded in a host's own
//! config file or loaded standalone via [`load_config`](super::loader::load_config).

use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

/// One day, in seconds.
pub const ONE_DAY_SECS: u64 = 60 * 60 * 24;

/// One (non-leap) year, in seconds. Upper bound for `max_age`.
pub const ONE_YEAR_SECS: u64 = 60 * 60 * 24 * 365;

/// Options for the stylesheet middleware.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SassyConfig {
    /// Path prefix under which stylesheets are served (e.g. "/stylesheet").
    /// Empty serves from the root.
    pub mount: String,

    /// `Cache-Control` max-age in seconds, clamped to `[0, ONE_YEAR_SECS]`.
    #[serde(deserialize_with = "deserialize_max_age")]
    pub max_age: u64,

    /// Output formatting of compiled CSS.
    pub output_style: OutputStyle,

    /// Extra directories searched when resolving `@use` / `@import`.
    pub load_paths: Vec<PathBuf>,
}

impl Default for SassyConfig {
    fn default() -> Self {
        Self {
            mount: String::new(),
            max_age: ONE_DAY_SECS,
            output_style: OutputStyle::default(),
            load_paths: Vec::new(),
        }
    }
}

impl SassyConfig {
    /// Set the mount prefix.
    pub fn with_mount(mut self, mount: impl Into<String>) -> Self {
        self.mount = mount.into();
        self
    }

    /// Set the max-age, clamping to `[0, ONE_YEAR_SECS]`.
    pub fn with_max_age(mut self, secs: impl Into<f64>) -> Self {
        self.max_age = clamp_max_age(secs.into());
        self
    }

    /// Set the output style.
    pub fn with_output_style(mut self, style: OutputStyle) -> Self {
        self.output_style = style;
        self
    }

    /// Add an import search directory.
    pub fn with_load_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.load_paths.push(path.into());
        self
    }
}

/// Formatting of compiled CSS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    #[default]
    Expanded,
    Compressed,
}

/// Clamp a requested max-age to `[0, ONE_YEAR_SECS]`.
///
/// Infinity clamps to the ceiling; NaN is treated as zero.
pub fn clamp_max_age(secs: f64) -> u64 {
    if secs.is_nan() || secs <= 0.0 {
        0
    } else if secs >= ONE_YEAR_SECS as f64 {
        ONE_YEAR_SECS
    } else {
        secs as u64
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMaxAge {
    Int(i64),
    Float(f64),
}

fn deserialize_max_age<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = match RawMaxAge::deserialize(deserializer)? {
        RawMaxAge::Int(i) => i as f64,
        RawMaxAge::Float(f) => f,
    };
    Ok(clamp_max_age(secs))
}
