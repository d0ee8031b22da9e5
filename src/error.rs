//! Error types for the strict configuration APIs.
//!
//! Formatting itself never fails: every `format*` function returns a `String`, and any
//! request it cannot honor degrades to the plain decimal rendering of the number. The
//! [`Error`] type is only produced by APIs that callers opt into when they want invalid
//! input reported instead of silently tolerated:
//!
//! - Parsing keywords with [`FromStr`](std::str::FromStr) (`LetterValue`, `WordCase`)
//! - Looking up a language with [`NumbererRegistry::get`](crate::NumbererRegistry::get)
//! - Writing formatted output to an I/O sink with [`write_sequence`](crate::write_sequence)
//!
//! ## Examples
//!
//! ```rust
//! use xsl_numbering::{Error, LetterValue};
//!
//! let result: Result<LetterValue, Error> = "numeric".parse();
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     assert!(err.to_string().contains("numeric"));
//! }
//! ```

use thiserror::Error;

/// Errors reported by the strict (opt-in) APIs of this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// IO error while writing formatted output
    #[error("IO error: {0}")]
    Io(String),

    /// A letter-value keyword other than `alphabetic` or `traditional`
    #[error("Invalid letter-value '{0}': expected 'alphabetic' or 'traditional'")]
    InvalidLetterValue(String),

    /// A word-case keyword other than `upper`, `lower` or `title`
    #[error("Invalid word case '{0}': expected 'upper', 'lower' or 'title'")]
    InvalidWordCase(String),

    /// No numberer is registered for the language tag
    #[error("No numberer registered for language '{0}'")]
    UnknownLanguage(String),
}

impl Error {
    /// Creates an invalid letter-value error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xsl_numbering::Error;
    ///
    /// let err = Error::invalid_letter_value("roman");
    /// assert!(err.to_string().contains("'roman'"));
    /// ```
    pub fn invalid_letter_value(value: &str) -> Self {
        Error::InvalidLetterValue(value.to_string())
    }

    /// Creates an invalid word-case error.
    pub fn invalid_word_case(value: &str) -> Self {
        Error::InvalidWordCase(value.to_string())
    }

    /// Creates an unknown-language error for a registry lookup.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xsl_numbering::Error;
    ///
    /// let err = Error::unknown_language("tlh");
    /// assert_eq!(err.to_string(), "No numberer registered for language 'tlh'");
    /// ```
    pub fn unknown_language(tag: &str) -> Self {
        Error::UnknownLanguage(tag.to_string())
    }

    /// Creates an I/O error for write failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
