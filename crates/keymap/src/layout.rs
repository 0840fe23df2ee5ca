//! Dubeolsik key table.

/// Unshifted keys and the compatibility jamo they type.
const KEYS: &[(char, char)] = &[
    ('q', 'ㅂ'),
    ('w', 'ㅈ'),
    ('e', 'ㄷ'),
    ('r', 'ㄱ'),
    ('t', 'ㅅ'),
    ('y', 'ㅛ'),
    ('u', 'ㅕ'),
    ('i', 'ㅑ'),
    ('o', 'ㅐ'),
    ('p', 'ㅔ'),
    ('a', 'ㅁ'),
    ('s', 'ㄴ'),
    ('d', 'ㅇ'),
    ('f', 'ㄹ'),
    ('g', 'ㅎ'),
    ('h', 'ㅗ'),
    ('j', 'ㅓ'),
    ('k', 'ㅏ'),
    ('l', 'ㅣ'),
    ('z', 'ㅋ'),
    ('x', 'ㅌ'),
    ('c', 'ㅊ'),
    ('v', 'ㅍ'),
    ('b', 'ㅠ'),
    ('n', 'ㅜ'),
    ('m', 'ㅡ'),
];

/// Shifted keys with a distinct jamo.
const SHIFTED_KEYS: &[(char, char)] = &[
    ('Q', 'ㅃ'),
    ('W', 'ㅉ'),
    ('E', 'ㄸ'),
    ('R', 'ㄲ'),
    ('T', 'ㅆ'),
    ('O', 'ㅒ'),
    ('P', 'ㅖ'),
];

/// Jamo typed by `key`. Shift without a distinct jamo types the plain one.
pub fn jamo_for_key(key: char) -> Option<char> {
    if let Some(&(_, jamo)) = SHIFTED_KEYS.iter().find(|(k, _)| *k == key) {
        return Some(jamo);
    }
    let key = key.to_ascii_lowercase();
    KEYS.iter().find(|(k, _)| *k == key).map(|&(_, jamo)| jamo)
}

/// Key that types `jamo`, upper-case when Shift is needed.
pub fn key_for_jamo(jamo: char) -> Option<char> {
    KEYS.iter()
        .chain(SHIFTED_KEYS)
        .find(|(_, j)| *j == jamo)
        .map(|&(key, _)| key)
}
