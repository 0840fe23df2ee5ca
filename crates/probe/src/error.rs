//! Error types for input-mode probing.

use crate::layout::LocaleCode;
use crate::mode::InputMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a probe did not read a Hangul conversion state.
///
/// None of these reach the caller of
/// [`InputModeProbe::detect`](crate::InputModeProbe::detect); each folds into
/// an [`InputMode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// No window currently has input focus.
    #[error("no window has input focus")]
    NoFocusContext,

    /// The active layout is not the Korean layout.
    #[error("active layout {layout} is not the Korean layout")]
    UnsupportedLayout { layout: LocaleCode },

    /// The input context could not be obtained for the foreground window.
    #[error("failed to acquire the input context of the foreground window")]
    ContextAcquisitionFailed,

    /// The conversion state could not be read from the input context.
    #[error("failed to query the IME conversion state")]
    StateQueryFailed,
}

/// Serializable discriminant of [`ProbeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeErrorKind {
    NoFocusContext,
    UnsupportedLayout,
    ContextAcquisitionFailed,
    StateQueryFailed,
}

impl ProbeError {
    /// Classification reported when this error ends a probe.
    pub fn fallback_mode(&self) -> InputMode {
        match self {
            ProbeError::NoFocusContext | ProbeError::UnsupportedLayout { .. } => {
                InputMode::NonKorean
            }
            ProbeError::ContextAcquisitionFailed | ProbeError::StateQueryFailed => {
                InputMode::Undetermined
            }
        }
    }

    pub fn kind(&self) -> ProbeErrorKind {
        match self {
            ProbeError::NoFocusContext => ProbeErrorKind::NoFocusContext,
            ProbeError::UnsupportedLayout { .. } => ProbeErrorKind::UnsupportedLayout,
            ProbeError::ContextAcquisitionFailed => ProbeErrorKind::ContextAcquisitionFailed,
            ProbeError::StateQueryFailed => ProbeErrorKind::StateQueryFailed,
        }
    }
}
