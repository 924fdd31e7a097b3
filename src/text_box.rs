use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

use crate::id_generator;

/// Size of freshly created boxes, also the configured default
pub const DEFAULT_FONT_SIZE: f32 = 24.0;

/// Stable identifier of a text box within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextBoxId(usize);

impl TextBoxId {
    pub fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for TextBoxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "text-box-{}", self.0)
    }
}

/// The typefaces a text box can be rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MemeFont {
    #[default]
    Default,
    Serif,
    SansSerif,
    Monospace,
    Cursive,
}

impl MemeFont {
    pub const ALL: [MemeFont; 5] = [
        MemeFont::Default,
        MemeFont::Serif,
        MemeFont::SansSerif,
        MemeFont::Monospace,
        MemeFont::Cursive,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            MemeFont::Default => "Default",
            MemeFont::Serif => "Serif",
            MemeFont::SansSerif => "Sans Serif",
            MemeFont::Monospace => "Monospace",
            MemeFont::Cursive => "Cursive",
        }
    }
}

/// One piece of overlay text placed on a template.
///
/// Boxes are values: every `with_*` method returns a new box that keeps the
/// same id. Two boxes are equal only when every field matches.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    id: TextBoxId,
    pub text: String,
    pub position: Pos2,
    pub font_size: f32,
    pub font: MemeFont,
    pub color: Color32,
}

impl TextBox {
    /// Create a box with a freshly generated id and default styling
    pub fn new(text: impl Into<String>, position: Pos2) -> Self {
        Self::with_id(id_generator::generate_id(), text, position)
    }

    /// Create a box for an id the caller already owns
    pub fn with_id(id: TextBoxId, text: impl Into<String>, position: Pos2) -> Self {
        Self {
            id,
            text: text.into(),
            position,
            font_size: DEFAULT_FONT_SIZE,
            font: MemeFont::Default,
            color: Color32::WHITE,
        }
    }

    pub fn id(&self) -> TextBoxId {
        self.id
    }

    pub fn with_position(&self, position: Pos2) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }

    pub fn with_style(&self, font_size: f32, font: MemeFont, color: Color32) -> Self {
        Self {
            font_size,
            font,
            color,
            ..self.clone()
        }
    }

    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }
}
