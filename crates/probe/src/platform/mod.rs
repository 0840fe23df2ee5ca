//! Platform-specific implementations.

mod strategy;

pub use strategy::QueryStrategy;

#[cfg(windows)]
mod windows;

#[cfg(windows)]
pub use self::windows::{WindowsInputContext, WindowsProvider, IME_WINDOW_TIMEOUT_MS};

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "macos")]
pub use macos::{MacOSInputSource, MacOSProvider};

// Re-export the appropriate provider for the current platform
#[cfg(windows)]
pub type PlatformProvider = WindowsProvider;

#[cfg(target_os = "macos")]
pub type PlatformProvider = MacOSProvider;

#[cfg(not(any(windows, target_os = "macos")))]
pub type PlatformProvider = crate::provider::NullProvider;
