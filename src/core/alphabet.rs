//! The letters a guess may contain

/// Number of letters in the alphabet
pub const LEN: usize = 26;

/// Every letter of the alphabet, in order
pub fn letters() -> impl Iterator<Item = char> {
    'a'..='z'
}

/// Fold ASCII upper-case onto lower-case; anything else passes through
#[inline]
#[must_use]
pub const fn normalize(c: char) -> char {
    c.to_ascii_lowercase()
}

/// Check whether `c` belongs to the alphabet (after normalisation)
#[inline]
#[must_use]
pub const fn contains(c: char) -> bool {
    normalize(c).is_ascii_lowercase()
}

/// Position of a letter in [`letters`], if it belongs to the alphabet
#[inline]
#[must_use]
pub fn index_of(c: char) -> Option<usize> {
    let c = normalize(c);
    c.is_ascii_lowercase().then(|| (c as u8 - b'a') as usize)
}
