//! Keyboard layout and IME conversion state values.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Language identifier of the active keyboard layout.
///
/// This is the low word of a Windows `HKL`. Classification compares the
/// whole word, so ko-KR matches and other Korean sublanguages do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleCode(pub u16);

impl LocaleCode {
    /// ko-KR.
    pub const KOREAN: LocaleCode = LocaleCode(0x0412);

    /// en-US.
    pub const ENGLISH_US: LocaleCode = LocaleCode(0x0409);

    /// Layout could not be identified.
    pub const UNKNOWN: LocaleCode = LocaleCode(0);

    /// Extract the language identifier from a raw keyboard layout handle.
    pub fn from_layout_handle(raw: usize) -> Self {
        LocaleCode((raw & 0xFFFF) as u16)
    }

    pub fn is_korean(&self) -> bool {
        *self == LocaleCode::KOREAN
    }
}

impl std::fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

bitflags! {
    /// IME conversion mode (`IME_CMODE_*`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ConversionFlags: u32 {
        /// Hangul conversion on a Korean IME
        const HANGUL = 0x0001;
        /// Native-script conversion (same bit as HANGUL)
        const NATIVE = 0x0001;
        const KATAKANA = 0x0002;
        const FULLSHAPE = 0x0008;
        const ROMAN = 0x0010;
        const CHARCODE = 0x0020;
        const HANJA = 0x0040;
        const SOFTKBD = 0x0080;
        const NOCONVERSION = 0x0100;
        const EUDC = 0x0200;
        const SYMBOL = 0x0400;
        const FIXED = 0x0800;

        // Bits reported by newer IMEs are kept as-is.
        const _ = !0;
    }
}

impl ConversionFlags {
    pub fn from_raw(raw: u32) -> Self {
        ConversionFlags::from_bits_retain(raw)
    }
}
