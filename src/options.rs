//! Configuration options for number formatting.
//!
//! This module provides the caller-facing knobs of `xsl:number`:
//!
//! - [`NumberOptions`]: grouping, letter-value and ordinal settings for a formatting call
//! - [`LetterValue`]: alphabetic vs. traditional interpretation of letter tokens
//!
//! ## Examples
//!
//! ```rust
//! use xsl_numbering::{format_sequence_with_options, numbers, NumberOptions};
//!
//! let options = NumberOptions::new().with_grouping(3, ",");
//! assert_eq!(format_sequence_with_options(&numbers![1234567], "1", &options), "1,234,567");
//!
//! let options = NumberOptions::new().with_ordinal("yes");
//! assert_eq!(format_sequence_with_options(&numbers![2], "1", &options), "2nd");
//! ```

use crate::error::Error;
use crate::group::RegularGroupFormatter;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// How a letter format token such as `"i"` is interpreted.
///
/// # Examples
///
/// ```rust
/// use xsl_numbering::LetterValue;
///
/// assert_eq!(LetterValue::from_attribute(""), LetterValue::Unspecified);
/// assert_eq!(LetterValue::from_attribute("alphabetic"), LetterValue::Alphabetic);
/// assert!(matches!(LetterValue::from_attribute("roman"), LetterValue::Other(_)));
/// assert!("roman".parse::<LetterValue>().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum LetterValue {
    #[default]
    Unspecified,
    /// Treat the token as the first letter of an alphabet.
    Alphabetic,
    /// Use the traditional numbering for the token (Roman numerals for `i`/`I`).
    Traditional,
    /// Any other keyword. Letter tokens formatted with it degrade to decimal.
    Other(String),
}

impl LetterValue {
    /// Lenient conversion of a letter-value attribute; never fails.
    #[must_use]
    pub fn from_attribute(value: &str) -> Self {
        match value {
            "" => LetterValue::Unspecified,
            "alphabetic" => LetterValue::Alphabetic,
            "traditional" => LetterValue::Traditional,
            other => LetterValue::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            LetterValue::Unspecified => "",
            LetterValue::Alphabetic => "alphabetic",
            LetterValue::Traditional => "traditional",
            LetterValue::Other(other) => other,
        }
    }
}

impl fmt::Display for LetterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LetterValue {
    type Err = Error;

    /// Strict parsing: only `""`, `"alphabetic"` and `"traditional"` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match LetterValue::from_attribute(s) {
            LetterValue::Other(other) => Err(Error::invalid_letter_value(&other)),
            value => Ok(value),
        }
    }
}

impl Serialize for LetterValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LetterValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(LetterValue::from_attribute(&value))
    }
}

/// Options controlling how each number of a sequence is formatted.
///
/// All fields have lenient defaults: no grouping, unspecified letter-value, cardinal
/// numbers. Deserialization fills in any missing field from [`Default`].
///
/// # Examples
///
/// ```rust
/// use xsl_numbering::{LetterValue, NumberOptions};
///
/// let options = NumberOptions::new()
///     .with_grouping(3, ".")
///     .with_letter_value(LetterValue::Alphabetic)
///     .with_ordinal("yes");
/// assert_eq!(options.group_size, 3);
/// assert!(options.is_ordinal());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberOptions {
    /// Digits per group; 0 disables grouping.
    pub group_size: usize,
    pub group_separator: String,
    pub letter_value: LetterValue,
    /// The ordinal hint; empty means cardinal numbering.
    pub ordinal: String,
}

impl NumberOptions {
    /// Creates default options (no grouping, cardinal numbers).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the grouping size and separator.
    #[must_use]
    pub fn with_grouping(mut self, group_size: usize, separator: impl Into<String>) -> Self {
        self.group_size = group_size;
        self.group_separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_letter_value(mut self, letter_value: LetterValue) -> Self {
        self.letter_value = letter_value;
        self
    }

    /// Requests ordinal numbering (`"yes"` in English).
    #[must_use]
    pub fn with_ordinal(mut self, ordinal: impl Into<String>) -> Self {
        self.ordinal = ordinal.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn is_ordinal(&self) -> bool {
        !self.ordinal.is_empty()
    }

    /// The grouping formatter described by these options.
    #[must_use]
    pub fn group_formatter(&self) -> RegularGroupFormatter {
        RegularGroupFormatter::new(self.group_size, self.group_separator.clone())
    }
}
