//! Provider trait for IME state detection.
//!
//! This trait abstracts the platform windowing and text-input facilities,
//! allowing the probe logic to remain pure and testable.

use crate::layout::{ConversionFlags, LocaleCode};

/// Capability set the probe needs from the host OS.
///
/// Handles are owned by the OS. A `ContextHandle` is borrowed for the
/// duration of one probe; an `InputContextHandle` must be handed back to
/// [`release_input_context`](ImeProvider::release_input_context) exactly once.
pub trait ImeProvider: Send + Sync {
    /// Window currently receiving keyboard input.
    type ContextHandle;

    /// Input context scoped to a `ContextHandle`.
    type InputContextHandle;

    /// Get the window that currently has input focus.
    fn foreground_context(&self) -> Option<Self::ContextHandle>;

    /// Get the keyboard layout of the thread owning `context`.
    fn layout_identifier(&self, context: &Self::ContextHandle) -> LocaleCode;

    /// Acquire the input context of `context`.
    fn acquire_input_context(&self, context: &Self::ContextHandle)
        -> Option<Self::InputContextHandle>;

    /// Read the conversion mode from an acquired input context.
    fn query_conversion_state(&self, input: &Self::InputContextHandle) -> Option<ConversionFlags>;

    /// Release an input context obtained from `acquire_input_context`.
    fn release_input_context(&self, context: &Self::ContextHandle, input: Self::InputContextHandle);
}

impl<P: ImeProvider + ?Sized> ImeProvider for &P {
    type ContextHandle = P::ContextHandle;
    type InputContextHandle = P::InputContextHandle;

    fn foreground_context(&self) -> Option<Self::ContextHandle> {
        (**self).foreground_context()
    }

    fn layout_identifier(&self, context: &Self::ContextHandle) -> LocaleCode {
        (**self).layout_identifier(context)
    }

    fn acquire_input_context(
        &self,
        context: &Self::ContextHandle,
    ) -> Option<Self::InputContextHandle> {
        (**self).acquire_input_context(context)
    }

    fn query_conversion_state(&self, input: &Self::InputContextHandle) -> Option<ConversionFlags> {
        (**self).query_conversion_state(input)
    }

    fn release_input_context(&self, context: &Self::ContextHandle, input: Self::InputContextHandle) {
        (**self).release_input_context(context, input)
    }
}

/// Null implementation for testing or unsupported platforms.
///
/// Never reports a focused window.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProvider;

impl NullProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ImeProvider for NullProvider {
    type ContextHandle = ();
    type InputContextHandle = ();

    fn foreground_context(&self) -> Option<()> {
        None
    }

    fn layout_identifier(&self, _context: &()) -> LocaleCode {
        LocaleCode::UNKNOWN
    }

    fn acquire_input_context(&self, _context: &()) -> Option<()> {
        None
    }

    fn query_conversion_state(&self, _input: &()) -> Option<ConversionFlags> {
        None
    }

    fn release_input_context(&self, _context: &(), _input: ()) {}
}
