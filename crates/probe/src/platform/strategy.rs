//! Choice between the two IMM32 acquisition paths.

/// Which IMM32 path is used to read the conversion mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryStrategy {
    /// `ImmGetContext` + `ImmGetConversionStatus` + `ImmReleaseContext`.
    InputContext,

    /// `WM_IME_CONTROL` sent to the window's default IME window.
    /// Works for windows owned by other processes.
    ImeWindow,

    /// Input context first, default IME window if no context is available.
    #[default]
    Auto,
}

impl QueryStrategy {
    /// Run the acquisition paths this strategy allows, in order.
    ///
    /// A path that is not needed is never called.
    pub fn acquire<T>(
        self,
        input_context: impl FnOnce() -> Option<T>,
        ime_window: impl FnOnce() -> Option<T>,
    ) -> Option<T> {
        match self {
            QueryStrategy::InputContext => input_context(),
            QueryStrategy::ImeWindow => ime_window(),
            QueryStrategy::Auto => input_context().or_else(|| {
                tracing::trace!("no input context, falling back to default IME window");
                ime_window()
            }),
        }
    }
}
