//! The anagram matcher.
//!
//! [`Anagram`] is built once per subject word. Construction folds the subject
//! and computes its [`Signature`]; every later candidate check reuses both, so
//! filtering a long word list only does per-candidate work.

use crate::candidate::AsCandidateStr;
use crate::signature::{Signature, normalize};

/// Finds anagrams of a fixed subject word.
///
/// A candidate is an anagram when:
///
/// 1. its case-folded form differs from the subject's (a word is never its
///    own anagram, whatever its casing), and
/// 2. its [`Signature`] equals the subject's, i.e. it uses exactly the same
///    characters the same number of times, ignoring case.
///
/// Candidates are compared as whole strings. Spaces and punctuation count as
/// characters, so `"go Go GO"` is not an anagram of `"go"`.
///
/// # Examples
///
/// ```
/// use anagram::Anagram;
///
/// let subject = Anagram::new("listen");
/// let found = subject.matches(["enlists", "google", "inlets", "banana"]);
/// assert_eq!(found, ["inlets"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anagram {
    /// The subject exactly as given.
    subject: String,
    /// Composed, lowercased subject used for the self-exclusion check.
    folded: String,
    /// Signature of `folded`.
    signature: Signature,
}

impl Anagram {
    /// Create a matcher for `subject`.
    ///
    /// Never fails. An empty subject is accepted and matches nothing, since
    /// the only string with an empty signature is the empty string, which is
    /// excluded as the subject itself.
    pub fn new(subject: &str) -> Self {
        let folded = normalize(subject).into_owned();
        let signature = Signature::from_folded(&folded);
        Self {
            subject: subject.to_owned(),
            folded,
            signature,
        }
    }

    /// The subject word as passed to [`Anagram::new`].
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The subject's canonical signature.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Returns `true` if `candidate` is an anagram of the subject.
    ///
    /// # Examples
    ///
    /// ```
    /// use anagram::Anagram;
    ///
    /// let subject = Anagram::new("Orchestra");
    /// assert!(subject.is_anagram("Carthorse"));
    /// assert!(!subject.is_anagram("orchestra"));
    /// assert!(!subject.is_anagram("radishes"));
    /// ```
    pub fn is_anagram(&self, candidate: &str) -> bool {
        let folded = normalize(candidate);

        if *folded == *self.folded {
            return false;
        }

        // Differing lengths can never share a signature; skip the sort.
        if folded.chars().count() != self.signature.len() {
            return false;
        }

        Signature::from_folded(&folded) == self.signature
    }

    /// Filter `candidates` down to the anagrams of the subject.
    ///
    /// Accepts anything iterable over string-like items: an array of `&str`,
    /// a `Vec<String>`, a slice reference, and so on. The matching items are
    /// returned unchanged with their original casing. Input order is kept,
    /// though callers should treat the result as a set.
    ///
    /// # Examples
    ///
    /// ```
    /// use anagram::Anagram;
    ///
    /// let subject = Anagram::new("allergy");
    /// let words = vec![
    ///     "gallery".to_owned(),
    ///     "ballerina".to_owned(),
    ///     "regally".to_owned(),
    ///     "clergy".to_owned(),
    ///     "largely".to_owned(),
    ///     "leading".to_owned(),
    /// ];
    ///
    /// let found = subject.matches(&words);
    /// assert_eq!(found, [&words[0], &words[2], &words[4]]);
    /// ```
    pub fn matches<I>(&self, candidates: I) -> Vec<I::Item>
    where
        I: IntoIterator,
        I::Item: AsCandidateStr,
    {
        candidates
            .into_iter()
            .filter(|candidate| self.is_anagram(candidate.as_candidate_str()))
            .collect()
    }
}

/// Find the anagrams of `subject` among `candidates` in one call.
///
/// Shorthand for `Anagram::new(subject).matches(candidates)`. Build an
/// [`Anagram`] directly when checking the same subject more than once.
///
/// # Examples
///
/// ```
/// use anagram::find_anagrams;
///
/// assert_eq!(find_anagrams("ant", ["stand", "tan", "at"]), ["tan"]);
/// ```
pub fn find_anagrams<I>(subject: &str, candidates: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: AsCandidateStr,
{
    Anagram::new(subject).matches(candidates)
}
