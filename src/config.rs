use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::action::DEFAULT_HISTORY_LIMIT;
use crate::error::ConfigError;
use crate::text_box::{DEFAULT_FONT_SIZE, MemeFont};

/// Tunables for an edit session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to the defaults below
pub struct EditorConfig {
    /// How many actions the undo log keeps
    pub history_limit: usize,
    /// Size given to freshly created text boxes
    pub default_font_size: f32,
    pub min_font_size: f32,
    pub max_font_size: f32,
    pub default_font: MemeFont,
    pub default_color: Color32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            default_font_size: DEFAULT_FONT_SIZE,
            min_font_size: 12.0,
            max_font_size: 72.0,
            default_font: MemeFont::Default,
            default_color: Color32::WHITE,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_limit == 0 {
            return Err(ConfigError::Invalid("history_limit must be at least 1".to_owned()));
        }
        if !(self.min_font_size.is_finite() && self.min_font_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "min_font_size must be positive, got {}",
                self.min_font_size
            )));
        }
        if !self.max_font_size.is_finite() || self.max_font_size < self.min_font_size {
            return Err(ConfigError::Invalid(format!(
                "max_font_size {} is below min_font_size {}",
                self.max_font_size, self.min_font_size
            )));
        }
        Ok(())
    }

    /// Bring a requested size into the allowed range. Non-finite sizes fall
    /// back to the default size.
    pub fn clamp_font_size(&self, size: f32) -> f32 {
        if size.is_finite() {
            size.clamp(self.min_font_size, self.max_font_size)
        } else {
            self.default_font_size.clamp(self.min_font_size, self.max_font_size)
        }
    }
}
