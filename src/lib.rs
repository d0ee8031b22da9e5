//! # xsl_numbering
//!
//! Number formatting in the style of XSLT `xsl:number` and `format-integer`: a sequence of
//! integers is rendered against a *picture* such as `"1.a.i"`, `"(A)"` or `"Ww"`.
//!
//! ## Key Features
//!
//! - **Many numbering systems**: decimal digits of any Unicode digit family, Latin, Greek,
//!   Cyrillic, Hebrew and kana letters, Roman and Kanji numerals, enclosed numbers and
//!   English words
//! - **Padding and grouping**: `"001"` pads to three digits; any group size and separator
//! - **Ordinals**: `1st`, `22nd`, `Twenty-First`
//! - **Never fails**: anything a format token cannot express falls back to plain decimal
//! - **Pluggable languages**: word spelling sits behind the [`WordSpeller`] trait, selected
//!   by language tag through [`NumbererRegistry`]
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! xsl_numbering = "0.1"
//! ```
//!
//! ### Formatting numbers
//!
//! ```rust
//! use xsl_numbering::{format_number, format_sequence, numbers};
//!
//! assert_eq!(format_number(7, "001"), "007");
//! assert_eq!(format_number(1999, "I"), "MCMXCIX");
//! assert_eq!(format_number(28, "a"), "ab");
//! assert_eq!(format_number(42, "Ww"), "Forty Two");
//!
//! // The last format token repeats for extra numbers
//! assert_eq!(format_sequence(&numbers![2, 3, 4], "1.a.i"), "2.c.iv");
//! assert_eq!(format_sequence(&numbers![1, 2], "(1)"), "(1.2)");
//! ```
//!
//! ### Options
//!
//! ```rust
//! use xsl_numbering::{format_sequence_with_options, numbers, LetterValue, NumberOptions};
//!
//! let options = NumberOptions::new().with_grouping(3, ",").with_ordinal("yes");
//! assert_eq!(format_sequence_with_options(&numbers![1234], "1", &options), "1,234th");
//!
//! let options = NumberOptions::new().with_letter_value(LetterValue::Alphabetic);
//! assert_eq!(format_sequence_with_options(&numbers![3], "i", &options), "k");
//! ```
//!
//! ### Reusing a picture
//!
//! A [`NumberFormatter`] tokenizes its picture once, and a [`Numberer`] is immutable after
//! construction, so both can be shared freely between threads.
//!
//! ```rust
//! use xsl_numbering::{numbers, NumberFormatter, NumberOptions, Numberer};
//!
//! let formatter = NumberFormatter::new("[A-1]");
//! let numberer = Numberer::english();
//! let options = NumberOptions::default();
//! for (section, expected) in [(1, "[A-1]"), (2, "[B-1]")] {
//!     assert_eq!(formatter.format(&numbers![section, 1], &options, &numberer), expected);
//! }
//! ```
//!
//! ## Picture grammar
//!
//! See the [`grammar`] module for the picture syntax and every numbering system.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Formatting single numbers with common tokens
//! - **`sequences.rs`** - Multi-level pictures, prefixes and suffixes
//! - **`scripts.rs`** - Non-Latin digit families and alphabets
//! - **`words_and_dates.rs`** - Words, ordinals and calendar names
//!
//! Run any example with: `cargo run --example <name>`

pub mod alphanumeric;
pub mod encode;
pub mod english;
pub mod error;
pub mod formatter;
pub mod grammar;
pub mod group;
pub mod macros;
pub mod numberer;
pub mod options;
pub mod picture;
pub mod registry;
pub mod speller;
pub mod system;
pub mod value;

mod datetime;

pub use english::EnglishSpeller;
pub use error::{Error, Result};
pub use formatter::NumberFormatter;
pub use group::{GroupFormatter, RegularGroupFormatter};
pub use numberer::Numberer;
pub use options::{LetterValue, NumberOptions};
pub use picture::Picture;
pub use registry::NumbererRegistry;
pub use speller::{WordCase, WordSpeller};
pub use system::NumberingSystem;
pub use value::FormatValue;

use std::io;

/// Formats a single number with a picture, using English and default options.
///
/// # Examples
///
/// ```rust
/// use xsl_numbering::format_number;
///
/// assert_eq!(format_number(3, "(a)"), "(c)");
/// assert_eq!(format_number(-3, "(a)"), "(-3)");
/// ```
#[must_use]
pub fn format_number(number: i64, picture: &str) -> String {
    format_sequence(&[FormatValue::Integer(number)], picture)
}

/// Formats a sequence of numbers with a picture, using English and default options.
#[must_use]
pub fn format_sequence(numbers: &[FormatValue], picture: &str) -> String {
    format_sequence_with_options(numbers, picture, &NumberOptions::default())
}

/// Formats a sequence of numbers with a picture and custom options, using English.
///
/// # Examples
///
/// ```rust
/// use xsl_numbering::{format_sequence_with_options, numbers, NumberOptions};
///
/// let options = NumberOptions::new().with_grouping(4, " ");
/// assert_eq!(
///     format_sequence_with_options(&numbers![12345678, 9], "1/1", &options),
///     "1234 5678/9"
/// );
/// ```
#[must_use]
pub fn format_sequence_with_options(
    numbers: &[FormatValue],
    picture: &str,
    options: &NumberOptions,
) -> String {
    format_sequence_with_numberer(numbers, picture, options, &Numberer::english())
}

/// Formats a sequence of numbers with a picture, options and a language-specific numberer.
///
/// # Examples
///
/// ```rust
/// use xsl_numbering::{format_sequence_with_numberer, numbers, NumberOptions, NumbererRegistry};
///
/// let registry = NumbererRegistry::default();
/// let numberer = registry.get_or_default("en-US");
/// let options = NumberOptions::new().with_ordinal("yes");
/// assert_eq!(
///     format_sequence_with_numberer(&numbers![3], "Ww", &options, numberer),
///     "Third"
/// );
/// ```
#[must_use]
pub fn format_sequence_with_numberer(
    numbers: &[FormatValue],
    picture: &str,
    options: &NumberOptions,
    numberer: &Numberer,
) -> String {
    NumberFormatter::new(picture).format(numbers, options, numberer)
}

/// Formats a sequence of numbers and writes it to `writer`.
///
/// # Examples
///
/// ```rust
/// use xsl_numbering::{numbers, write_sequence, NumberOptions};
///
/// let mut buffer = Vec::new();
/// write_sequence(&mut buffer, &numbers![1, 2], "1.1 ", &NumberOptions::default()).unwrap();
/// assert_eq!(buffer, b"1.2 ");
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub fn write_sequence<W>(
    mut writer: W,
    numbers: &[FormatValue],
    picture: &str,
    options: &NumberOptions,
) -> Result<()>
where
    W: io::Write,
{
    let formatted = format_sequence_with_options(numbers, picture, options);
    writer
        .write_all(formatted.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5, "1"), "5");
        assert_eq!(format_number(5, ""), "5");
        assert_eq!(format_number(5, "i."), "v.");
        assert_eq!(format_number(0, "A"), "0");
    }

    #[test]
    fn test_format_sequence_defaults() {
        assert_eq!(format_sequence(&numbers![1, 2, 3], "1"), "1.2.3");
        assert_eq!(format_sequence(&numbers![], "(1)"), "()");
        assert_eq!(format_sequence(&numbers![4, "x"], "a-1"), "d-x");
    }

    #[test]
    fn test_write_sequence_reports_io_errors() {
        struct Broken;

        impl io::Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let result = write_sequence(Broken, &numbers![1], "1", &NumberOptions::default());
        assert_eq!(result, Err(Error::io("closed")));
    }
}
