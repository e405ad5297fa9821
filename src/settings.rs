//! Game settings and preferences
//!
//! Read once at start-up from the `VOID_RUNNER_SETTINGS` environment variable
//! (JSON). Nothing is written back.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_SUBSTEPS;
use crate::sim::SimConfig;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    /// Maximum particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 100,
            QualityPreset::Medium => 500,
            QualityPreset::High => 2000,
        }
    }

    /// Whether to render the bright starfield layer
    pub fn bright_stars(&self) -> bool {
        match self {
            QualityPreset::Low => false,
            QualityPreset::Medium => true,
            QualityPreset::High => true,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Show the controls line when a run starts
    pub show_help: bool,
    /// Ticks the driver may run per host frame
    pub max_substeps: u32,
    /// How long the headless demo plays (seconds)
    pub demo_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            show_help: true,
            max_substeps: MAX_SUBSTEPS,
            demo_seconds: 60,
        }
    }
}

impl Settings {
    /// Environment variable holding a JSON settings object
    pub const ENV_VAR: &'static str = "VOID_RUNNER_SETTINGS";

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Load settings from the environment, falling back to defaults
    pub fn load() -> Self {
        match std::env::var(Self::ENV_VAR) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings (quality {:?})", settings.quality);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring {}: {}", Self::ENV_VAR, e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Simulation knobs derived from these settings
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            max_particles: self.quality.max_particles(),
            show_help: self.show_help,
        }
    }
}
