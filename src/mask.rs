// Token masking for the accounts listing
// Lossy display form only; stored values are never changed

use std::borrow::Cow;

/// Placeholder shown for fields the record does not carry.
pub const NOT_AVAILABLE: &str = "N/A";

/// Tokens up to this many characters are shown in full.
pub const MASK_THRESHOLD: usize = 15;
const KEEP_HEAD: usize = 10;
const KEEP_TAIL: usize = 5;

/// Display form of a token: first 10 characters, `...`, last 5 characters.
///
/// Only applies to tokens longer than 15 characters; shorter ones and the
/// `N/A` placeholder are returned unchanged. Lengths count chars, not bytes.
pub fn mask_token(token: &str) -> Cow<'_, str> {
    if token == NOT_AVAILABLE {
        return Cow::Borrowed(token);
    }

    let len = token.chars().count();
    if len <= MASK_THRESHOLD {
        return Cow::Borrowed(token);
    }

    let head: String = token.chars().take(KEEP_HEAD).collect();
    let tail: String = token.chars().skip(len - KEEP_TAIL).collect();
    Cow::Owned(format!("{head}...{tail}"))
}
