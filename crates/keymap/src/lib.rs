//! Dubeolsik (2-set) key mapping for hanmode.
//!
//! Converts between Hangul compatibility jamo and the QWERTY keys that type
//! them, so text entered in the wrong input mode can be recovered.
//!
//! # Example
//!
//! ```
//! use hanmode_keymap::{hangul_to_qwerty, qwerty_to_jamo};
//!
//! assert_eq!(qwerty_to_jamo("dkssud"), "ㅇㅏㄴㄴㅕㅇ");
//! assert_eq!(hangul_to_qwerty("안녕"), "dkssud");
//! ```

mod layout;
mod script;
mod syllable;

pub use layout::{jamo_for_key, key_for_jamo};
pub use script::{is_hangul, is_latin, Script};
pub use syllable::decompose;

/// Type `input` on the Dubeolsik layout. Unmapped characters pass through.
pub fn qwerty_to_jamo(input: &str) -> String {
    input
        .chars()
        .map(|c| jamo_for_key(c).unwrap_or(c))
        .collect()
}

/// Keys that type each jamo of `input`. Unmapped characters pass through.
///
/// Compound vowels and final clusters expand to their component keys.
/// Precomposed syllables are left untouched; see [`hangul_to_qwerty`].
pub fn jamo_to_qwerty(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        push_keys(&mut out, c);
    }
    out
}

/// Like [`jamo_to_qwerty`], but precomposed syllables are decomposed first.
pub fn hangul_to_qwerty(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match decompose(c) {
            Some(jamo) => jamo.iter().for_each(|&j| push_keys(&mut out, j)),
            None => push_keys(&mut out, c),
        }
    }
    out
}

fn push_keys(out: &mut String, c: char) {
    if let Some(key) = key_for_jamo(c) {
        out.push(key);
    } else if let Some((first, second)) = syllable::split_compound(c) {
        push_keys(out, first);
        push_keys(out, second);
    } else {
        out.push(c);
    }
}
