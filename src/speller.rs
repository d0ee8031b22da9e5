//! The per-language word-spelling capability.
//!
//! Everything language specific that a [`Numberer`](crate::Numberer) needs is behind the
//! [`WordSpeller`] trait: cardinal and ordinal words, the numeric ordinal suffix, and the
//! names used when formatting dates. Numeral systems themselves (digits, letters, Roman,
//! CJK) never depend on the language.
//!
//! Implementations must be immutable once built so that a single speller can be shared by
//! concurrent formatting calls. [`EnglishSpeller`](crate::EnglishSpeller) is the reference
//! implementation.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter case applied to numbers written as words.
///
/// Spellers compose words in title case ("Twenty One"); the case is applied to the finished
/// string as the last step.
///
/// # Examples
///
/// ```rust
/// use xsl_numbering::WordCase;
///
/// assert_eq!(WordCase::for_token("W"), WordCase::Upper);
/// assert_eq!(WordCase::for_token("w"), WordCase::Lower);
/// assert_eq!(WordCase::for_token("Ww"), WordCase::Title);
/// assert_eq!(WordCase::Upper.apply("Twenty One".to_string()), "TWENTY ONE");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordCase {
    Upper,
    Lower,
    #[default]
    Title,
}

impl WordCase {
    /// The case requested by a word format token.
    ///
    /// Only the exact tokens `"W"` and `"w"` select upper and lower case. Every other token
    /// starting with `w` or `W` (`"Ww"`, `"WW"`, `"Wz"`) is accepted and means title case.
    #[must_use]
    pub fn for_token(token: &str) -> Self {
        match token {
            "W" => WordCase::Upper,
            "w" => WordCase::Lower,
            _ => WordCase::Title,
        }
    }

    /// Applies this case to title-case `words`.
    #[must_use]
    pub fn apply(self, words: String) -> String {
        match self {
            WordCase::Upper => words.to_uppercase(),
            WordCase::Lower => words.to_lowercase(),
            WordCase::Title => words,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            WordCase::Upper => "upper",
            WordCase::Lower => "lower",
            WordCase::Title => "title",
        }
    }
}

impl fmt::Display for WordCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WordCase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "upper" => Ok(WordCase::Upper),
            "lower" => Ok(WordCase::Lower),
            "title" => Ok(WordCase::Title),
            _ => Err(Error::invalid_word_case(s)),
        }
    }
}

/// Language-specific spelling of numbers and calendar names.
///
/// Required methods produce title-case text; the provided `to_words` /
/// `to_ordinal_words` wrappers apply a [`WordCase`]. None of the methods may panic on odd
/// input: out-of-range values come back as their decimal string.
pub trait WordSpeller: fmt::Debug + Send + Sync {
    /// The language tag this speller serves, for example `"en"`.
    fn language(&self) -> &str;

    /// Cardinal words in title case, e.g. `121` as "One Hundred and Twenty One".
    fn cardinal_words(&self, number: i64) -> String;

    /// Ordinal words in title case, e.g. `21` as "Twenty-First".
    ///
    /// `ordinal` is the caller's ordinal hint (for example `"yes"`, or a grammatical
    /// ending in languages that inflect ordinals).
    fn ordinal_words(&self, ordinal: &str, number: i64) -> String;

    /// Name of a month (1 = January) fitted between `min_width` and `max_width` characters.
    fn month_name(&self, month: u32, min_width: usize, max_width: usize) -> String;

    /// Name of a day of the week (1 = Monday) fitted between `min_width` and `max_width`
    /// characters.
    fn day_name(&self, day: u32, min_width: usize, max_width: usize) -> String;

    fn to_words(&self, number: i64, case: WordCase) -> String {
        case.apply(self.cardinal_words(number))
    }

    fn to_ordinal_words(&self, ordinal: &str, number: i64, case: WordCase) -> String {
        case.apply(self.ordinal_words(ordinal, number))
    }

    /// Suffix appended to a digit-formatted ordinal ("st" in "1st"). Empty by default.
    fn ordinal_suffix(&self, _ordinal: &str, _number: i64) -> String {
        String::new()
    }

    /// The am/pm indicator for `minutes` past midnight.
    ///
    /// The default follows English usage: "Midnight" and "Noon" when there is room for
    /// eight characters, otherwise "A", "Am" or "A.M." (and the P forms) by width.
    fn half_day_name(&self, minutes: u32, _min_width: usize, max_width: usize) -> String {
        const NOON: u32 = 12 * 60;
        let name = if minutes == 0 && max_width >= 8 {
            "Midnight"
        } else if minutes < NOON {
            match max_width {
                1 => "A",
                2 | 3 => "Am",
                _ => "A.M.",
            }
        } else if minutes == NOON && max_width >= 8 {
            "Noon"
        } else {
            match max_width {
                1 => "P",
                2 | 3 => "Pm",
                _ => "P.M.",
            }
        };
        name.to_string()
    }

    /// The ordinal hint to use for a date/time picture component such as `"D"` or `"M"`.
    fn ordinal_suffix_for_date_time(&self, _component: &str) -> String {
        "yes".to_string()
    }

    /// Era name for a proleptic Gregorian year (year 0 is the year before 1 AD).
    fn era_name(&self, year: i64) -> String {
        let era = if year > 0 { "AD" } else { "BC" };
        era.to_string()
    }

    /// Display name of a calendar code such as `"AD"`.
    fn calendar_name(&self, code: &str) -> String {
        if code == "AD" {
            "Gregorian".to_string()
        } else {
            code.to_string()
        }
    }
}
