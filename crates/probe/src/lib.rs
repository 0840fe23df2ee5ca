//! Korean input-mode detection for hanmode.
//!
//! This crate answers one question: is the window currently receiving
//! keyboard input typing Hangul right now?
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                             │
//! │  mode.rs     - InputMode classification (pure)              │
//! │  layout.rs   - LocaleCode and ConversionFlags values        │
//! │  error.rs    - ProbeError taxonomy and fallback modes       │
//! │  provider.rs - ImeProvider capability trait                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Infrastructure Layer                        │
//! │  platform/windows.rs - IMM32 implementation                 │
//! │  platform/macos.rs   - Text Input Sources implementation    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Application Layer                          │
//! │  guard.rs - scoped input context ownership                  │
//! │  probe.rs - InputModeProbe (detect / inspect / snapshot)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use hanmode_probe::{InputMode, InputModeProbe};
//!
//! let probe = InputModeProbe::platform();
//!
//! match probe.detect() {
//!     InputMode::Korean => println!("typing Hangul"),
//!     InputMode::NonKorean => println!("typing Latin"),
//!     InputMode::Undetermined => println!("could not tell"),
//! }
//! ```

mod error;
mod guard;
mod layout;
mod mode;
mod probe;
mod provider;

pub mod platform;

pub use error::{ProbeError, ProbeErrorKind};
pub use guard::InputContextGuard;
pub use layout::{ConversionFlags, LocaleCode};
pub use mode::InputMode;
pub use probe::{InputModeProbe, ProbeSnapshot};
pub use provider::{ImeProvider, NullProvider};
