//! Input mode classification.
//!
//! Pure domain logic - no I/O, no platform dependencies.

use crate::layout::ConversionFlags;
use serde::{Deserialize, Serialize};

/// Classification of the active text input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Korean layout with Hangul conversion active.
    Korean,

    /// Any other layout, or the Korean layout in alphabetic mode.
    #[default]
    NonKorean,

    /// The layout is Korean but the conversion state could not be read.
    Undetermined,
}

impl InputMode {
    /// Classify a conversion state read from a Korean layout.
    pub fn from_flags(flags: ConversionFlags) -> Self {
        if flags.contains(ConversionFlags::HANGUL) {
            InputMode::Korean
        } else {
            InputMode::NonKorean
        }
    }

    pub fn is_korean(&self) -> bool {
        matches!(self, InputMode::Korean)
    }

    /// Returns a human-readable label for the mode.
    pub fn label(&self) -> &'static str {
        match self {
            InputMode::Korean => "Korean",
            InputMode::NonKorean => "NonKorean",
            InputMode::Undetermined => "Undetermined",
        }
    }

    /// Line shown to users. `Undetermined` reads as English.
    pub fn display_line(&self) -> &'static str {
        match self {
            InputMode::Korean => "Korean input mode",
            InputMode::NonKorean | InputMode::Undetermined => "English input mode",
        }
    }
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
