#![warn(missing_docs)]

//! Case-insensitive anagram detection.
//!
//! `anagram` checks candidate words against a fixed subject word. A candidate
//! matches when it uses exactly the same characters as the subject, the same
//! number of times, ignoring case, and is not the subject word itself.

/// The [`Anagram`] matcher and the [`find_anagrams`] shorthand.
pub mod matcher;

/// String-like candidate types accepted by the matcher.
pub mod candidate;

/// Case folding, canonical composition and character-multiset signatures.
pub mod signature;

// Re-export primary public API types and functions at the crate root.
pub use matcher::{Anagram, find_anagrams};
pub use candidate::AsCandidateStr;
pub use signature::Signature;
