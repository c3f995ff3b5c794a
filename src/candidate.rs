//! String-like candidate types.
//!
//! [`Anagram::matches`](crate::Anagram::matches) hands back the very items it
//! was given, so it is generic over the candidate type. The [`AsCandidateStr`]
//! trait provides the `&str` view used for comparison.

use std::borrow::Cow;

/// Trait for types that can be tested as anagram candidates.
///
/// # Built-in Implementations
///
/// - [`str`] -- returns `self`
/// - [`String`] -- delegates to [`String::as_str`]
/// - [`Cow<'_, str>`] -- delegates to [`AsRef::as_ref`]
/// - [`Box<str>`] -- dereferences
/// - `&T` for any `T: AsCandidateStr` -- forwards to `T`
///
/// # Examples
///
/// ```
/// use anagram::AsCandidateStr;
///
/// let owned = String::from("inlets");
/// assert_eq!(owned.as_candidate_str(), "inlets");
///
/// let borrowed: &&str = &"silent";
/// assert_eq!(borrowed.as_candidate_str(), "silent");
/// ```
pub trait AsCandidateStr {
    /// Returns the string content of this candidate.
    fn as_candidate_str(&self) -> &str;
}

impl AsCandidateStr for str {
    fn as_candidate_str(&self) -> &str {
        self
    }
}

impl AsCandidateStr for String {
    fn as_candidate_str(&self) -> &str {
        self.as_str()
    }
}

impl AsCandidateStr for Cow<'_, str> {
    fn as_candidate_str(&self) -> &str {
        self.as_ref()
    }
}

impl AsCandidateStr for Box<str> {
    fn as_candidate_str(&self) -> &str {
        self
    }
}

// Covers `&str`, `&String`, `&&str` and so on, which is what slice and `Vec`
// iterators yield.
impl<T: AsCandidateStr + ?Sized> AsCandidateStr for &T {
    fn as_candidate_str(&self) -> &str {
        (**self).as_candidate_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_ref() {
        let s: &str = "tan";
        assert_eq!(s.as_candidate_str(), "tan");
    }

    #[test]
    fn string() {
        let s = String::from("tan");
        assert_eq!(s.as_candidate_str(), "tan");
    }

    #[test]
    fn string_ref() {
        let s = String::from("tan");
        let r = &s;
        assert_eq!(r.as_candidate_str(), "tan");
    }

    #[test]
    fn cow_borrowed_and_owned() {
        let borrowed: Cow<'_, str> = Cow::Borrowed("borrowed");
        let owned: Cow<'_, str> = Cow::Owned("owned".to_owned());
        assert_eq!(borrowed.as_candidate_str(), "borrowed");
        assert_eq!(owned.as_candidate_str(), "owned");
    }

    #[test]
    fn boxed_str() {
        let b: Box<str> = "boxed".into();
        assert_eq!(b.as_candidate_str(), "boxed");
    }

    #[test]
    fn double_reference() {
        let words = ["stand", "tan"];
        let first = words.iter().next().map(|w| w.as_candidate_str());
        assert_eq!(first, Some("stand"));
    }

    #[test]
    fn empty() {
        assert_eq!("".as_candidate_str(), "");
        assert_eq!(String::new().as_candidate_str(), "");
    }
}
