//! Scoped ownership of an acquired input context.

use crate::layout::ConversionFlags;
use crate::provider::ImeProvider;

/// Owns an input context and releases it when dropped.
///
/// Every early return after a successful acquisition goes through `Drop`,
/// so acquire and release stay paired.
pub struct InputContextGuard<'a, P: ImeProvider> {
    provider: &'a P,
    context: &'a P::ContextHandle,
    input: Option<P::InputContextHandle>,
}

impl<'a, P: ImeProvider> InputContextGuard<'a, P> {
    /// Acquire the input context of `context`, or `None` if the OS refuses.
    pub fn acquire(provider: &'a P, context: &'a P::ContextHandle) -> Option<Self> {
        let input = provider.acquire_input_context(context)?;
        Some(Self {
            provider,
            context,
            input: Some(input),
        })
    }

    /// Read the conversion mode through the held context.
    pub fn conversion_state(&self) -> Option<ConversionFlags> {
        self.input
            .as_ref()
            .and_then(|input| self.provider.query_conversion_state(input))
    }
}

impl<P: ImeProvider> Drop for InputContextGuard<'_, P> {
    fn drop(&mut self) {
        if let Some(input) = self.input.take() {
            self.provider.release_input_context(self.context, input);
            tracing::trace!("input context released");
        }
    }
}
