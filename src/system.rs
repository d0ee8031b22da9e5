//! Selection of a numbering system from a format token.
//!
//! The first character of a format token (its *representative* character) decides how a
//! number is rendered. The choice depends only on that character, the exact token for word
//! numbering, and the letter-value hint; it never depends on the language.

use crate::alphanumeric::{digit_family, is_alphanumeric};
use crate::encode;
use crate::options::LetterValue;
use crate::speller::WordCase;

/// The numbering systems a format token can select.
///
/// # Examples
///
/// ```rust
/// use xsl_numbering::{LetterValue, NumberingSystem, WordCase};
///
/// let none = LetterValue::Unspecified;
/// assert_eq!(NumberingSystem::for_token("001", &none), NumberingSystem::Western);
/// assert_eq!(NumberingSystem::for_token("I", &none), NumberingSystem::Roman { upper: true });
/// assert_eq!(NumberingSystem::for_token("Ww", &none), NumberingSystem::Words(WordCase::Title));
/// assert_eq!(
///     NumberingSystem::for_token("i", &LetterValue::Alphabetic),
///     NumberingSystem::LetterRun { first: 'i' }
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberingSystem {
    /// ASCII decimal digits selected by a `0`/`1` token; the only system that takes a
    /// numeric ordinal suffix.
    Western,
    /// Decimal digits of the digit family whose zero is `zero`.
    Digits { zero: char },
    /// Zero-less alphabetic labels over a fixed script alphabet.
    Alphabetic(&'static [char]),
    /// Zero-less alphabetic labels over the run of letters starting at `first`.
    LetterRun { first: char },
    Roman { upper: bool },
    Kanji,
    /// Twenty consecutive enclosed-digit symbols starting at `first`.
    Enclosed { first: char },
    Words(WordCase),
    /// ASCII decimal used when the token names no known system.
    Fallback,
    /// Plain decimal without padding or grouping.
    Plain,
}

impl NumberingSystem {
    /// Chooses the numbering system for `token`.
    #[must_use]
    pub fn for_token(token: &str, letter_value: &LetterValue) -> Self {
        let Some(first) = token.chars().next() else {
            return NumberingSystem::Plain;
        };
        match first {
            '0' | '1' => NumberingSystem::Western,
            'A' => NumberingSystem::Alphabetic(&encode::LATIN_UPPER),
            'a' => NumberingSystem::Alphabetic(&encode::LATIN_LOWER),
            'w' | 'W' => NumberingSystem::Words(WordCase::for_token(token)),
            'i' | 'I' => match letter_value {
                LetterValue::Unspecified | LetterValue::Traditional => {
                    NumberingSystem::Roman { upper: first == 'I' }
                }
                LetterValue::Alphabetic => NumberingSystem::LetterRun { first },
                LetterValue::Other(_) => NumberingSystem::Plain,
            },
            '\u{2460}' | '\u{2474}' | '\u{2488}' => NumberingSystem::Enclosed { first },
            '\u{0391}' => NumberingSystem::Alphabetic(&encode::GREEK_UPPER),
            '\u{03b1}' => NumberingSystem::Alphabetic(&encode::GREEK_LOWER),
            '\u{0410}' => NumberingSystem::Alphabetic(&encode::CYRILLIC_UPPER),
            '\u{0430}' => NumberingSystem::Alphabetic(&encode::CYRILLIC_LOWER),
            '\u{05d0}' => NumberingSystem::Alphabetic(&encode::HEBREW),
            '\u{3042}' => NumberingSystem::Alphabetic(&encode::HIRAGANA_A),
            '\u{3044}' => NumberingSystem::Alphabetic(&encode::HIRAGANA_I),
            '\u{30a2}' => NumberingSystem::Alphabetic(&encode::KATAKANA_A),
            '\u{30a4}' => NumberingSystem::Alphabetic(&encode::KATAKANA_I),
            '\u{4e00}' => NumberingSystem::Kanji,
            other => {
                if let Some(zero) = digit_family(other) {
                    NumberingSystem::Digits { zero }
                } else if (other as u32) < 0x1100 && is_alphanumeric(other) {
                    // Below U+1100 consecutive letters reliably belong to one alphabet.
                    NumberingSystem::LetterRun { first: other }
                } else {
                    NumberingSystem::Fallback
                }
            }
        }
    }
}
