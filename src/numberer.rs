//! Formatting a single number with a format token.
//!
//! A [`Numberer`] combines the language-independent numbering systems with one
//! [`WordSpeller`] for word numbering, ordinal suffixes and calendar names. It is configured
//! once and then only read, so one instance can serve any number of concurrent callers.
//!
//! ## Examples
//!
//! ```rust
//! use xsl_numbering::Numberer;
//!
//! let numberer = Numberer::english();
//! assert_eq!(numberer.format(5, "001", 0, "", "", ""), "005");
//! assert_eq!(numberer.format(1994, "I", 0, "", "", ""), "MCMXCIV");
//! assert_eq!(numberer.format(28, "a", 0, "", "", ""), "ab");
//! assert_eq!(numberer.format(21, "Ww", 0, "", "", "yes"), "Twenty-First");
//! assert_eq!(numberer.format(-3, "i", 0, "", "", ""), "-3");
//! ```

use crate::encode::{
    decimal_digits, letter_run, to_alpha_sequence, to_enclosed, to_kanji, to_radical, to_roman,
};
use crate::english::EnglishSpeller;
use crate::group::{GroupFormatter, RegularGroupFormatter};
use crate::options::{LetterValue, NumberOptions};
use crate::speller::WordSpeller;
use crate::system::NumberingSystem;
use std::sync::Arc;
use tracing::trace;

/// Formats numbers for one language.
#[derive(Clone, Debug)]
pub struct Numberer {
    speller: Arc<dyn WordSpeller>,
    country: Option<String>,
}

impl Default for Numberer {
    fn default() -> Self {
        Self::english()
    }
}

impl Numberer {
    /// Creates a numberer spelling words with `speller`.
    #[must_use]
    pub fn new(speller: impl WordSpeller + 'static) -> Self {
        Self::from_shared(Arc::new(speller))
    }

    /// Creates a numberer around an already shared speller.
    #[must_use]
    pub fn from_shared(speller: Arc<dyn WordSpeller>) -> Self {
        Numberer {
            speller,
            country: None,
        }
    }

    /// The English numberer with default separators.
    #[must_use]
    pub fn english() -> Self {
        Self::new(EnglishSpeller::new())
    }

    #[must_use]
    pub fn language(&self) -> &str {
        self.speller.language()
    }

    #[must_use]
    pub fn speller(&self) -> &dyn WordSpeller {
        self.speller.as_ref()
    }

    /// Sets the country (used for time zone names by date formatting).
    pub fn set_country(&mut self, country: impl Into<String>) {
        self.country = Some(country.into());
    }

    /// Builder form of [`set_country`](Self::set_country).
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.set_country(country);
        self
    }

    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Formats `number` according to one format token.
    ///
    /// `group_size` of 0 disables grouping. `letter_value` is `"alphabetic"`,
    /// `"traditional"` or empty; `ordinal` is empty for cardinal numbers and `"yes"` (or a
    /// language-specific hint) for ordinals. Invalid requests are never reported: the number
    /// is formatted as plain decimal instead.
    #[must_use]
    pub fn format(
        &self,
        number: i64,
        token: &str,
        group_size: usize,
        group_separator: &str,
        letter_value: &str,
        ordinal: &str,
    ) -> String {
        let grouping = RegularGroupFormatter::new(group_size, group_separator);
        self.format_grouped(number, token, Some(&grouping), letter_value, ordinal)
    }

    /// Formats `number` with a caller-supplied grouping formatter (or none).
    #[must_use]
    pub fn format_grouped(
        &self,
        number: i64,
        token: &str,
        grouping: Option<&dyn GroupFormatter>,
        letter_value: &str,
        ordinal: &str,
    ) -> String {
        let letter_value = LetterValue::from_attribute(letter_value);
        self.format_token(number, token, grouping, &letter_value, ordinal)
    }

    /// Formats `number` using the settings in `options`.
    #[must_use]
    pub fn format_with_options(&self, number: i64, token: &str, options: &NumberOptions) -> String {
        let grouping = options.group_formatter();
        self.format_token(
            number,
            token,
            Some(&grouping),
            &options.letter_value,
            &options.ordinal,
        )
    }

    pub(crate) fn format_token(
        &self,
        number: i64,
        token: &str,
        grouping: Option<&dyn GroupFormatter>,
        letter_value: &LetterValue,
        ordinal: &str,
    ) -> String {
        if number < 0 || token.is_empty() {
            return number.to_string();
        }
        let width = token.chars().count();
        match NumberingSystem::for_token(token, letter_value) {
            NumberingSystem::Western => {
                let mut out = to_radical(number, &decimal_digits('0'), width, grouping);
                if !ordinal.is_empty() {
                    out.push_str(&self.speller.ordinal_suffix(ordinal, number));
                }
                out
            }
            NumberingSystem::Digits { zero } => {
                to_radical(number, &decimal_digits(zero), width, grouping)
            }
            NumberingSystem::Fallback => {
                trace!(number, token, "no numbering system for token, using decimal");
                if number == 0 {
                    "0".to_string()
                } else {
                    to_radical(number, &decimal_digits('0'), width, grouping)
                }
            }
            NumberingSystem::Alphabetic(alphabet) => to_alpha_sequence(number, alphabet),
            NumberingSystem::LetterRun { first } => to_alpha_sequence(number, &letter_run(first)),
            NumberingSystem::Roman { upper: false } => to_roman(number),
            NumberingSystem::Roman { upper: true } => to_roman(number).to_uppercase(),
            NumberingSystem::Kanji => to_kanji(number),
            NumberingSystem::Enclosed { first } => to_enclosed(number, first),
            NumberingSystem::Words(case) if ordinal.is_empty() => {
                self.speller.to_words(number, case)
            }
            NumberingSystem::Words(case) => self.speller.to_ordinal_words(ordinal, number, case),
            NumberingSystem::Plain => {
                trace!(number, token, letter_value = %letter_value, "unrecognized letter-value, using decimal");
                number.to_string()
            }
        }
    }

    /// Month name (1 = January) between `min_width` and `max_width` characters.
    #[must_use]
    pub fn month_name(&self, month: u32, min_width: usize, max_width: usize) -> String {
        self.speller.month_name(month, min_width, max_width)
    }

    /// Day name (1 = Monday) between `min_width` and `max_width` characters.
    #[must_use]
    pub fn day_name(&self, day: u32, min_width: usize, max_width: usize) -> String {
        self.speller.day_name(day, min_width, max_width)
    }

    /// The am/pm indicator for `minutes` past midnight.
    #[must_use]
    pub fn half_day_name(&self, minutes: u32, min_width: usize, max_width: usize) -> String {
        self.speller.half_day_name(minutes, min_width, max_width)
    }

    #[must_use]
    pub fn ordinal_suffix_for_date_time(&self, component: &str) -> String {
        self.speller.ordinal_suffix_for_date_time(component)
    }

    #[must_use]
    pub fn era_name(&self, year: i64) -> String {
        self.speller.era_name(year)
    }

    #[must_use]
    pub fn calendar_name(&self, code: &str) -> String {
        self.speller.calendar_name(code)
    }
}
