//! Script classification for typed words.

use serde::{Deserialize, Serialize};

/// Hangul syllables and every jamo block.
pub fn is_hangul(c: char) -> bool {
    matches!(
        c as u32,
        0x1100..=0x11FF | 0x3130..=0x318F | 0xA960..=0xA97F | 0xAC00..=0xD7A3 | 0xD7B0..=0xD7FF
    )
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Dominant script of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Hangul,
    Latin,
    /// Both Hangul and Latin letters
    Mixed,
    /// Neither, e.g. digits, punctuation or empty input
    Other,
}

impl Script {
    /// Classify `word` by the letters it contains. Other characters are ignored.
    pub fn of(word: &str) -> Self {
        let hangul = word.chars().any(is_hangul);
        let latin = word.chars().any(is_latin);
        match (hangul, latin) {
            (true, true) => Script::Mixed,
            (true, false) => Script::Hangul,
            (false, true) => Script::Latin,
            (false, false) => Script::Other,
        }
    }
}
