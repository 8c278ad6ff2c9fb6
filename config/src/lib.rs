//! `~/.linkman/config.toml` loading.
//!
//! Every table and field is optional. A missing file is not an error; a
//! present but broken one is, and callers are expected to fall back to
//! defaults after logging it.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use linkman_types::ui::SpringParams;
use linkman_types::{InvalidTuning, SwipeTuning};

/// Set to `1` (or `true`) to force reduced motion regardless of the file.
pub const REDUCED_MOTION_ENV: &str = "LINKMAN_REDUCED_MOTION";

const DEFAULT_UNITS_PER_COLUMN: f32 = 10.0;
const DEFAULT_TENSION: f32 = 80.0;
const DEFAULT_FRICTION: f32 = 12.0;

#[derive(Debug, Default, Deserialize)]
pub struct LinkmanConfig {
    pub swipe: Option<SwipeConfig>,
    pub ui: Option<UiConfig>,
}

/// `[swipe]` table.
#[derive(Debug, Default, Deserialize)]
pub struct SwipeConfig {
    pub open_fraction: Option<f32>,
    /// Units per millisecond.
    pub velocity_threshold: Option<f32>,
    pub claim_slop: Option<f32>,
    pub tap_slop: Option<f32>,
    pub close_duration_ms: Option<u64>,
    pub spring_tension: Option<f32>,
    pub spring_friction: Option<f32>,
    pub rest_displacement: Option<f32>,
    pub rest_speed: Option<f32>,
}

/// `[ui]` table.
#[derive(Debug, Default, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub reduced_motion: bool,
    #[serde(default)]
    pub ascii_only: bool,
    pub units_per_column: Option<f32>,
}

/// Resolved presentation options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiOptions {
    pub reduced_motion: bool,
    pub ascii_only: bool,
    /// Layout units per terminal column. Rows are twice as tall.
    pub units_per_column: f32,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            ascii_only: false,
            units_per_column: DEFAULT_UNITS_PER_COLUMN,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid [swipe] settings: {0}")]
    Tuning(#[from] InvalidTuning),
}

impl ConfigError {
    /// File the error came from, when there was one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => Some(path),
            ConfigError::Tuning(_) => None,
        }
    }
}

impl LinkmanConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// `[ui]` resolved against defaults and the environment override.
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options_with(env::var(REDUCED_MOTION_ENV).ok().as_deref())
    }

    /// Same as [`ui_options`](Self::ui_options) with an explicit value for
    /// the reduced-motion variable.
    #[must_use]
    pub fn ui_options_with(&self, reduced_motion_env: Option<&str>) -> UiOptions {
        let mut options = UiOptions::default();
        if let Some(ui) = &self.ui {
            options.reduced_motion = ui.reduced_motion;
            options.ascii_only = ui.ascii_only;
            match ui.units_per_column {
                Some(units) if units.is_finite() && units > 0.0 => {
                    options.units_per_column = units;
                }
                Some(units) => {
                    tracing::warn!(units, "ignoring non-positive ui.units_per_column");
                }
                None => {}
            }
        }
        if let Some(flag) = reduced_motion_env.and_then(parse_flag) {
            options.reduced_motion = flag;
        }
        options
    }

    /// Apply `[swipe]` on top of a list preset and validate the result.
    pub fn swipe_tuning(
        &self,
        preset: SwipeTuning,
        ui: &UiOptions,
    ) -> Result<SwipeTuning, ConfigError> {
        let mut tuning = preset;
        tuning.reduced_motion = ui.reduced_motion;

        if let Some(swipe) = &self.swipe {
            if let Some(value) = swipe.open_fraction {
                tuning.open_fraction = value;
            }
            if let Some(value) = swipe.velocity_threshold {
                tuning.velocity_threshold = value;
            }
            if let Some(value) = swipe.claim_slop {
                tuning.claim_slop = value;
            }
            if let Some(value) = swipe.tap_slop {
                tuning.tap_slop = value;
            }
            if let Some(ms) = swipe.close_duration_ms {
                tuning.close_duration = Duration::from_millis(ms);
            }
            if swipe.spring_tension.is_some() || swipe.spring_friction.is_some() {
                let base = tuning.spring;
                tuning.spring = SpringParams {
                    rest_displacement: base.rest_displacement,
                    rest_speed: base.rest_speed,
                    ..SpringParams::from_tension_friction(
                        swipe.spring_tension.unwrap_or(DEFAULT_TENSION),
                        swipe.spring_friction.unwrap_or(DEFAULT_FRICTION),
                    )
                };
            }
            if let Some(value) = swipe.rest_displacement {
                tuning.spring.rest_displacement = value;
            }
            if let Some(value) = swipe.rest_speed {
                tuning.spring.rest_speed = value;
            }
        }

        tuning.validate()?;
        Ok(tuning)
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".linkman").join("config.toml"))
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
