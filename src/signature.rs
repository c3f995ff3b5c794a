//! Case folding and canonical signatures for anagram comparison.
//!
//! Two strings are anagrams when their [`Signature`]s are equal. A signature is
//! the multiset of a string's characters after canonical composition and
//! lowercasing, stored as a sorted `Vec<char>`.

use std::borrow::Cow;
use std::fmt;

use unicode_normalization::{UnicodeNormalization, is_nfc};

/// Lowercase a string for case-insensitive comparison.
///
/// ASCII input is folded byte-by-byte without touching the Unicode case
/// tables. Anything else goes through [`str::to_lowercase`], which may change
/// the character count (e.g. `'İ'` lowercases to two chars).
///
/// Returns [`Cow::Borrowed`] when the input is already lowercase.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use anagram::signature::fold_case;
///
/// assert_eq!(fold_case("Orchestra"), "orchestra");
/// assert!(matches!(fold_case("orchestra"), Cow::Borrowed(_)));
/// assert_eq!(fold_case("ΣΟΦΙΑ"), "σοφια");
/// ```
pub fn fold_case(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        if s.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(s.to_ascii_lowercase())
        } else {
            Cow::Borrowed(s)
        }
    } else {
        let lower = s.to_lowercase();
        if lower == s {
            Cow::Borrowed(s)
        } else {
            Cow::Owned(lower)
        }
    }
}

/// Apply Unicode canonical composition (NFC) to `s`.
///
/// A precomposed letter such as `"\u{00e9}"` and its decomposed spelling
/// `"e\u{0301}"` become the same single character, so they contribute the
/// same element to a [`Signature`]. Marks are composed, never stripped.
///
/// Returns [`Cow::Borrowed`] for ASCII input and for input already in NFC.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use anagram::signature::compose;
///
/// assert_eq!(compose("cafe\u{0301}"), "caf\u{00e9}");
/// assert!(matches!(compose("cafe"), Cow::Borrowed(_)));
/// ```
pub fn compose(s: &str) -> Cow<'_, str> {
    // ASCII is always in NFC.
    if s.is_ascii() || is_nfc(s) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.nfc().collect())
}

/// Compose then case-fold `s`. This is the form used both for the
/// self-exclusion check and as the input to [`Signature::from_folded`].
pub(crate) fn normalize(s: &str) -> Cow<'_, str> {
    match compose(s) {
        Cow::Borrowed(composed) => fold_case(composed),
        Cow::Owned(composed) => Cow::Owned(fold_case(&composed).into_owned()),
    }
}

/// The canonical, order-independent form of a string's characters.
///
/// Built from the composed, lowercased string with its characters sorted, so
/// equality is multiset equality: every character must appear the same number
/// of times on both sides. Whitespace and punctuation are ordinary characters
/// and take part in the comparison.
///
/// # Examples
///
/// ```
/// use anagram::Signature;
///
/// assert_eq!(Signature::of("Listen"), Signature::of("silent"));
/// assert_ne!(Signature::of("mass"), Signature::of("last"));
/// assert_ne!(Signature::of("tapper"), Signature::of("patter"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Signature(Vec<char>);

impl Signature {
    /// Compute the signature of an arbitrary string.
    pub fn of(s: &str) -> Self {
        Self::from_folded(&normalize(s))
    }

    /// Build a signature from a string that has already been through
    /// [`normalize`].
    pub(crate) fn from_folded(folded: &str) -> Self {
        let mut chars: Vec<char> = folded.chars().collect();
        chars.sort_unstable();
        Self(chars)
    }

    /// Number of characters in the signature.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the signature was built from an empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The sorted characters making up this signature.
    pub fn as_chars(&self) -> &[char] {
        &self.0
    }
}

// Writes the sorted characters back out, e.g. "listen" -> "eilnst".
impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
