//! English number words and calendar names.
//!
//! [`EnglishSpeller`] is the reference [`WordSpeller`]. Large numbers are decomposed at the
//! billion, million and thousand boundaries; a remainder below one hundred is joined with
//! "and" ("One Thousand and Five"), a larger one with a plain space.
//!
//! ## Examples
//!
//! ```rust
//! use xsl_numbering::{EnglishSpeller, WordCase, WordSpeller};
//!
//! let english = EnglishSpeller::new();
//! assert_eq!(english.cardinal_words(121), "One Hundred and Twenty One");
//! assert_eq!(english.to_ordinal_words("yes", 21, WordCase::Title), "Twenty-First");
//! assert_eq!(english.ordinal_suffix("yes", 22), "nd");
//!
//! // Tens/units separators are configurable
//! let hyphenated = EnglishSpeller::new().with_cardinal_separator("-");
//! assert_eq!(hyphenated.cardinal_words(42), "Forty-Two");
//! ```

use crate::speller::WordSpeller;
use serde::{Deserialize, Serialize};

static UNITS: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

static TENS: [&str; 10] = [
    "", "Ten", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

static ORDINAL_UNITS: [&str; 20] = [
    "", "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth", "Ninth",
    "Tenth", "Eleventh", "Twelfth", "Thirteenth", "Fourteenth", "Fifteenth", "Sixteenth",
    "Seventeenth", "Eighteenth", "Nineteenth",
];

static ORDINAL_TENS: [&str; 10] = [
    "", "Tenth", "Twentieth", "Thirtieth", "Fortieth", "Fiftieth", "Sixtieth", "Seventieth",
    "Eightieth", "Ninetieth",
];

static SCALES: [(i64, &str); 3] = [
    (1_000_000_000, " Billion"),
    (1_000_000, " Million"),
    (1_000, " Thousand"),
];

static MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

static DAYS: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

static DAY_ABBREVIATIONS: [&str; 7] = ["Mon", "Tues", "Weds", "Thurs", "Fri", "Sat", "Sun"];

// Shortest prefix that tells each day apart from the others (M, Tu, W, Th, F, Sa, Su).
static MIN_UNIQUE_DAY_LENGTH: [usize; 7] = [1, 2, 1, 2, 1, 2, 2];

/// English [`WordSpeller`].
///
/// The separators placed between tens and units are configurable, separately for cardinal
/// ("Thirty Six", "Thirty-Six", "ThirtySix") and ordinal ("Thirty-Sixth") words.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnglishSpeller {
    pub cardinal_separator: String,
    pub ordinal_separator: String,
}

impl Default for EnglishSpeller {
    fn default() -> Self {
        EnglishSpeller {
            cardinal_separator: " ".to_string(),
            ordinal_separator: "-".to_string(),
        }
    }
}

impl EnglishSpeller {
    /// Creates a speller with the default separators (space for cardinals, hyphen for
    /// ordinals).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the separator between tens and units in cardinal words.
    #[must_use]
    pub fn with_cardinal_separator(mut self, separator: impl Into<String>) -> Self {
        self.cardinal_separator = separator.into();
        self
    }

    /// Sets the separator between tens and units in ordinal words.
    #[must_use]
    pub fn with_ordinal_separator(mut self, separator: impl Into<String>) -> Self {
        self.ordinal_separator = separator.into();
        self
    }

    // Recursion is bounded: i64 has at most three billion-levels and each level descends
    // into strictly smaller scales.
    fn spell(&self, number: i64) -> String {
        for &(scale, name) in &SCALES {
            if number >= scale {
                let rest = number % scale;
                let mut words = self.spell(number / scale) + name;
                if rest != 0 {
                    words.push_str(if rest < 100 { " and " } else { " " });
                    words.push_str(&self.spell(rest));
                }
                return words;
            }
        }
        if number >= 100 {
            let rest = number % 100;
            let mut words = self.spell(number / 100) + " Hundred";
            if rest != 0 {
                words.push_str(" and ");
                words.push_str(&self.spell(rest));
            }
            return words;
        }
        let n = number as usize;
        if n < 20 {
            return UNITS[n].to_string();
        }
        match n % 10 {
            0 => TENS[n / 10].to_string(),
            units => format!("{}{}{}", TENS[n / 10], self.cardinal_separator, UNITS[units]),
        }
    }

    fn spell_ordinal(&self, number: i64) -> String {
        for &(scale, name) in &SCALES {
            if number >= scale {
                let rest = number % scale;
                let mut words = self.spell(number / scale) + name;
                if rest == 0 {
                    words.push_str("th");
                } else {
                    words.push_str(if rest < 100 { " and " } else { " " });
                    words.push_str(&self.spell_ordinal(rest));
                }
                return words;
            }
        }
        if number >= 100 {
            let rest = number % 100;
            let mut words = self.spell(number / 100) + " Hundred";
            if rest == 0 {
                words.push_str("th");
            } else {
                words.push_str(" and ");
                words.push_str(&self.spell_ordinal(rest));
            }
            return words;
        }
        let n = number as usize;
        if n < 20 {
            return ORDINAL_UNITS[n].to_string();
        }
        match n % 10 {
            0 => ORDINAL_TENS[n / 10].to_string(),
            units => format!(
                "{}{}{}",
                TENS[n / 10],
                self.ordinal_separator,
                ORDINAL_UNITS[units]
            ),
        }
    }
}

fn pad_to(mut name: String, min_width: usize) -> String {
    let width = name.chars().count();
    if width < min_width {
        name.extend(std::iter::repeat(' ').take(min_width - width));
    }
    name
}

fn truncate_to(name: &str, max_width: usize) -> String {
    name.chars().take(max_width).collect()
}

impl WordSpeller for EnglishSpeller {
    fn language(&self) -> &str {
        "en"
    }

    fn cardinal_words(&self, number: i64) -> String {
        match number {
            0 => "Zero".to_string(),
            n if n < 0 => n.to_string(),
            n => self.spell(n),
        }
    }

    fn ordinal_words(&self, _ordinal: &str, number: i64) -> String {
        match number {
            0 => "Zeroth".to_string(),
            n if n < 0 => n.to_string(),
            n => self.spell_ordinal(n),
        }
    }

    fn ordinal_suffix(&self, _ordinal: &str, number: i64) -> String {
        let tens = (number % 100).abs() / 10;
        let units = (number % 10).abs();
        let suffix = match (tens, units) {
            (1, _) => "th",
            (_, 1) => "st",
            (_, 2) => "nd",
            (_, 3) => "rd",
            _ => "th",
        };
        suffix.to_string()
    }

    fn month_name(&self, month: u32, min_width: usize, max_width: usize) -> String {
        let Some(name) = month.checked_sub(1).and_then(|i| MONTHS.get(i as usize)) else {
            return month.to_string();
        };
        pad_to(truncate_to(name, max_width.max(3)), min_width)
    }

    fn day_name(&self, day: u32, min_width: usize, max_width: usize) -> String {
        let Some(index) = day.checked_sub(1).map(|i| i as usize).filter(|&i| i < DAYS.len())
        else {
            return day.to_string();
        };
        let max_width = max_width.max(2);
        let mut name = DAYS[index].to_string();
        if name.len() > max_width {
            name = truncate_to(DAY_ABBREVIATIONS[index], max_width);
        }
        let name = pad_to(name, min_width);
        if min_width == 1 && max_width == 2 {
            return truncate_to(&name, MIN_UNIQUE_DAY_LENGTH[index]);
        }
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speller::WordCase;

    #[test]
    fn test_small_cardinals() {
        let english = EnglishSpeller::new();
        assert_eq!(english.cardinal_words(0), "Zero");
        assert_eq!(english.cardinal_words(7), "Seven");
        assert_eq!(english.cardinal_words(13), "Thirteen");
        assert_eq!(english.cardinal_words(20), "Twenty");
        assert_eq!(english.cardinal_words(21), "Twenty One");
        assert_eq!(english.cardinal_words(99), "Ninety Nine");
    }

    #[test]
    fn test_hundreds_and_scales() {
        let english = EnglishSpeller::new();
        assert_eq!(english.cardinal_words(100), "One Hundred");
        assert_eq!(english.cardinal_words(121), "One Hundred and Twenty One");
        assert_eq!(english.cardinal_words(1000), "One Thousand");
        assert_eq!(english.cardinal_words(1005), "One Thousand and Five");
        assert_eq!(english.cardinal_words(1100), "One Thousand One Hundred");
        assert_eq!(
            english.cardinal_words(2_000_345),
            "Two Million Three Hundred and Forty Five"
        );
        assert_eq!(english.cardinal_words(3_000_000_000), "Three Billion");
        assert_eq!(
            english.cardinal_words(1_000_000_000_000),
            "One Thousand Billion"
        );
    }

    #[test]
    fn test_largest_value_spells() {
        let english = EnglishSpeller::new();
        let words = english.cardinal_words(i64::MAX);
        assert!(words.starts_with("Nine Billion Two Hundred and Twenty Three Million"));
        assert!(words.ends_with("Eight Hundred and Seven"));
    }

    #[test]
    fn test_ordinals() {
        let english = EnglishSpeller::new();
        assert_eq!(english.ordinal_words("yes", 1), "First");
        assert_eq!(english.ordinal_words("yes", 12), "Twelfth");
        assert_eq!(english.ordinal_words("yes", 20), "Twentieth");
        assert_eq!(english.ordinal_words("yes", 21), "Twenty-First");
        assert_eq!(english.ordinal_words("yes", 100), "One Hundredth");
        assert_eq!(english.ordinal_words("yes", 103), "One Hundred and Third");
        assert_eq!(english.ordinal_words("yes", 1000), "One Thousandth");
        assert_eq!(english.ordinal_words("yes", 1_000_042), "One Million and Forty-Second");
        assert_eq!(english.ordinal_words("yes", 0), "Zeroth");
    }

    #[test]
    fn test_case_applied_last() {
        let english = EnglishSpeller::new();
        assert_eq!(english.to_words(121, WordCase::Upper), "ONE HUNDRED AND TWENTY ONE");
        assert_eq!(english.to_words(0, WordCase::Lower), "zero");
        assert_eq!(
            english.to_ordinal_words("yes", 1_000_021, WordCase::Lower),
            "one million and twenty-first"
        );
    }

    #[test]
    fn test_custom_separators() {
        let english = EnglishSpeller::new()
            .with_cardinal_separator("")
            .with_ordinal_separator(" ");
        assert_eq!(english.cardinal_words(36), "ThirtySix");
        assert_eq!(english.ordinal_words("yes", 36), "Thirty Sixth");
    }

    #[test]
    fn test_numeric_ordinal_suffix() {
        let english = EnglishSpeller::new();
        let expected = [
            (1, "st"), (2, "nd"), (3, "rd"), (4, "th"), (11, "th"), (12, "th"), (13, "th"),
            (21, "st"), (22, "nd"), (23, "rd"), (101, "st"), (111, "th"), (112, "th"), (1000, "th"),
        ];
        for (n, suffix) in expected {
            assert_eq!(english.ordinal_suffix("yes", n), suffix, "n = {n}");
        }
    }

    #[test]
    fn test_month_names() {
        let english = EnglishSpeller::new();
        assert_eq!(english.month_name(1, 1, usize::MAX), "January");
        assert_eq!(english.month_name(9, 1, 3), "Sep");
        assert_eq!(english.month_name(9, 1, 1), "Sep");
        assert_eq!(english.month_name(5, 6, 10), "May   ");
        assert_eq!(english.month_name(13, 1, 10), "13");
        assert_eq!(english.month_name(0, 1, 10), "0");
    }

    #[test]
    fn test_day_names() {
        let english = EnglishSpeller::new();
        assert_eq!(english.day_name(1, 1, usize::MAX), "Monday");
        assert_eq!(english.day_name(2, 1, 4), "Tues");
        assert_eq!(english.day_name(2, 1, 3), "Tue");
        assert_eq!(english.day_name(3, 1, 4), "Weds");
        assert_eq!(english.day_name(5, 5, 5), "Fri  ");
        assert_eq!(english.day_name(8, 1, 5), "8");
    }

    #[test]
    fn test_minimal_unique_day_prefixes() {
        let english = EnglishSpeller::new();
        let names: Vec<String> = (1..=7).map(|d| english.day_name(d, 1, 2)).collect();
        assert_eq!(names, ["M", "Tu", "W", "Th", "F", "Sa", "Su"]);
        assert_eq!(english.day_name(4, 1, 1), "Th");
    }

    #[test]
    fn test_serde_defaults() {
        let english: EnglishSpeller = serde_json::from_str(r#"{"cardinal_separator":"-"}"#).unwrap();
        assert_eq!(english.cardinal_separator, "-");
        assert_eq!(english.ordinal_separator, "-");
    }
}
