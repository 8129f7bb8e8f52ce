//! The 26-letter machine alphabet: index arithmetic and input normalization.

/// Number of symbols in the machine alphabet.
pub(crate) const LEN: usize = 26;

/// Index of an uppercase letter in the alphabet, or `None` for any other
/// character.
pub(crate) fn index_of(symbol: char) -> Option<u8> {
    if symbol.is_ascii_uppercase() {
        Some(symbol as u8 - b'A')
    } else {
        None
    }
}

/// Letter at the given alphabet index.
///
/// Callers only pass indices produced by [`index_of`] or [`offset_by`],
/// which are always in `[0, 26)`.
pub(crate) fn letter(index: u8) -> char {
    debug_assert!((index as usize) < LEN);
    (b'A' + index) as char
}

/// Cyclically rotates an alphabet index by `delta`, which may be negative
/// or larger than the alphabet.
pub(crate) fn offset_by(index: u8, delta: i32) -> u8 {
    (i32::from(index) + delta).rem_euclid(LEN as i32) as u8
}

/// Normalizes input text: case-folds to uppercase and drops every
/// character that is not a letter, digit, or underscore.
///
/// Digits and underscores deliberately survive the filter; they have no
/// table entry and are rejected by the engine as `SymbolNotInTable`.
pub(crate) fn normalize(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
        .flat_map(char::to_uppercase)
        .filter(|c| c.is_alphanumeric() || *c == '_')
}
