use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::cloud::PositionSpec;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {} failed", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing config {} failed", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Closed interval sampled uniformly as `min + u * (max - min)`, `u` in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Degenerate or inverted ranges yield `min`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if !(self.max > self.min) {
            return self.min;
        }
        self.min + rng.random::<f64>() * (self.max - self.min)
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn check(&self, field: &str) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "{field} bounds must be finite numbers"
            )));
        }
        if self.min > self.max {
            return Err(ConfigError::Invalid(format!(
                "{field} min ({}) exceeds max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CloudConfig {
    pub count: usize,
    pub randomize: bool,
    /// Only consulted when `randomize` is false; indexed by pre-sort cloud index.
    pub positions: Vec<PositionSpec>,
    /// Pixels kept between clouds on the first placement pass.
    pub min_distance: f64,
    pub max_placement_attempts: u32,
    pub size_range: Range,
    pub opacity_range: Range,
    pub drift_duration: Range,
    pub float_duration: Range,
    pub delay_range: Range,
    pub float_offset_x: Range,
    pub float_offset_y: Range,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            count: 50,
            randomize: true,
            positions: Vec::new(),
            min_distance: 10.0,
            max_placement_attempts: 100,
            size_range: Range::new(100.0, 300.0),
            opacity_range: Range::new(0.5, 1.0),
            drift_duration: Range::new(2.0, 5.0),
            float_duration: Range::new(3.0, 6.0),
            delay_range: Range::new(-10.0, 0.0),
            float_offset_x: Range::new(-100.0, 500.0),
            float_offset_y: Range::new(-100.0, 100.0),
        }
    }
}

impl CloudConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_distance.is_finite() || self.min_distance < 0.0 {
            return Err(ConfigError::Invalid(
                "minDistance must be a non-negative number".to_string(),
            ));
        }
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::Invalid(
                "maxPlacementAttempts must be at least 1".to_string(),
            ));
        }

        self.size_range.check("sizeRange")?;
        self.opacity_range.check("opacityRange")?;
        self.drift_duration.check("driftDuration")?;
        self.float_duration.check("floatDuration")?;
        self.delay_range.check("delayRange")?;
        self.float_offset_x.check("floatOffsetX")?;
        self.float_offset_y.check("floatOffsetY")?;

        if self.size_range.min <= 0.0 {
            return Err(ConfigError::Invalid(
                "sizeRange must be strictly positive".to_string(),
            ));
        }
        if self.opacity_range.min < 0.0 || self.opacity_range.max > 1.0 {
            return Err(ConfigError::Invalid(
                "opacityRange must stay within 0..=1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Flag(PathBuf),
    Env(PathBuf),
    Home(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(path) => write!(f, "{} (--config)", path.display()),
            Self::Env(path) => write!(f, "{} ({CONFIG_ENV_VAR})", path.display()),
            Self::Home(path) => write!(f, "{}", path.display()),
            Self::Defaults => f.write_str("built-in defaults"),
        }
    }
}

pub const CONFIG_ENV_VAR: &str = "CLOUD_LOADER_CONFIG";

/// Resolves `--config`, then `CLOUD_LOADER_CONFIG`, then the per-user file.
/// Falls back to defaults when none of them point anywhere.
pub fn load_config(explicit: Option<&Path>) -> Result<(CloudConfig, ConfigSource), ConfigError> {
    let source = locate_config(explicit);
    let config = match &source {
        ConfigSource::Flag(path) | ConfigSource::Env(path) | ConfigSource::Home(path) => {
            load_config_file(path)?
        }
        ConfigSource::Defaults => CloudConfig::default(),
    };
    Ok((config, source))
}

pub fn load_config_file(path: &Path) -> Result<CloudConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config =
        serde_json::from_str::<CloudConfig>(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    config.validate()?;
    Ok(config)
}

fn locate_config(explicit: Option<&Path>) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Flag(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return ConfigSource::Env(PathBuf::from(path));
    }
    match user_config_path() {
        Some(path) if path.is_file() => ConfigSource::Home(path),
        _ => ConfigSource::Defaults,
    }
}

fn user_config_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("cloud-loader")
            .join("config.json"),
    )
}
