//! InputModeProbe - one-shot sampling of the foreground IME state.

use crate::error::{ProbeError, ProbeErrorKind};
use crate::guard::InputContextGuard;
use crate::layout::{ConversionFlags, LocaleCode};
use crate::mode::InputMode;
use crate::platform::PlatformProvider;
use crate::provider::ImeProvider;
use serde::Serialize;

/// A single probe result with the facts that led to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeSnapshot {
    /// Same value `detect()` returns for this state
    pub mode: InputMode,

    /// Layout of the foreground window, if one had focus
    pub layout: Option<LocaleCode>,

    /// Conversion state, if it was read
    pub conversion: Option<ConversionFlags>,

    /// Why the conversion state was not read
    pub reason: Option<ProbeErrorKind>,

    /// Timestamp when this sample was taken
    pub timestamp_ms: i64,
}

/// Detects whether the foreground window is in Hangul input mode.
///
/// Each call takes one fresh sample; nothing is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct InputModeProbe<P> {
    provider: P,
}

impl InputModeProbe<PlatformProvider> {
    /// Probe bound to the provider for the current platform.
    pub fn platform() -> Self {
        Self::new(PlatformProvider::new())
    }
}

impl<P: ImeProvider> InputModeProbe<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Classify the current input mode. Never fails.
    pub fn detect(&self) -> InputMode {
        match self.inspect() {
            Ok(flags) => InputMode::from_flags(flags),
            Err(err) => {
                tracing::debug!(reason = %err, "input mode fell back");
                err.fallback_mode()
            }
        }
    }

    /// Read the conversion state of the foreground Korean IME.
    ///
    /// # Errors
    ///
    /// - `ProbeError::NoFocusContext` if no window has focus
    /// - `ProbeError::UnsupportedLayout` if the layout is not Korean
    /// - `ProbeError::ContextAcquisitionFailed` if the input context is unavailable
    /// - `ProbeError::StateQueryFailed` if the conversion state cannot be read
    pub fn inspect(&self) -> Result<ConversionFlags, ProbeError> {
        self.sample().1
    }

    /// Take one sample and keep everything observed along the way.
    pub fn snapshot(&self) -> ProbeSnapshot {
        let (layout, result) = self.sample();
        let timestamp_ms = chrono::Utc::now().timestamp_millis();

        match result {
            Ok(flags) => ProbeSnapshot {
                mode: InputMode::from_flags(flags),
                layout,
                conversion: Some(flags),
                reason: None,
                timestamp_ms,
            },
            Err(err) => ProbeSnapshot {
                mode: err.fallback_mode(),
                layout,
                conversion: None,
                reason: Some(err.kind()),
                timestamp_ms,
            },
        }
    }

    fn sample(&self) -> (Option<LocaleCode>, Result<ConversionFlags, ProbeError>) {
        let Some(context) = self.provider.foreground_context() else {
            return (None, Err(ProbeError::NoFocusContext));
        };

        let layout = self.provider.layout_identifier(&context);
        if !layout.is_korean() {
            return (Some(layout), Err(ProbeError::UnsupportedLayout { layout }));
        }

        let Some(guard) = InputContextGuard::acquire(&self.provider, &context) else {
            return (Some(layout), Err(ProbeError::ContextAcquisitionFailed));
        };

        let result = guard
            .conversion_state()
            .ok_or(ProbeError::StateQueryFailed);
        drop(guard);

        if let Ok(flags) = &result {
            tracing::trace!(conversion = flags.bits(), "conversion state read");
        }

        (Some(layout), result)
    }
}
