//! Formatting a sequence of numbers against a picture.
//!
//! The picture's format tokens are applied to the numbers in order, with the last token
//! repeating for any extra numbers. Each number after the first is preceded by the
//! punctuation before its format token; the punctuation that opens the picture is a prefix
//! written once, and punctuation that closes it is a suffix written once.
//!
//! ## Examples
//!
//! ```rust
//! use xsl_numbering::{FormatValue, NumberFormatter, NumberOptions, Numberer};
//!
//! let formatter = NumberFormatter::new("1.a.i");
//! let numberer = Numberer::english();
//! let options = NumberOptions::new();
//!
//! let numbers: Vec<FormatValue> = vec![2.into(), 3.into(), 4.into()];
//! assert_eq!(formatter.format(&numbers, &options, &numberer), "2.c.iv");
//!
//! let formatter = NumberFormatter::new("(1)");
//! let numbers = [FormatValue::from(1), FormatValue::from(2)];
//! assert_eq!(formatter.format(&numbers, &options, &numberer), "(1.2)");
//! ```

use crate::numberer::Numberer;
use crate::options::NumberOptions;
use crate::picture::Picture;
use crate::value::FormatValue;
use tracing::debug;

/// Formats sequences of numbers according to one tokenized picture.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NumberFormatter {
    picture: Picture,
}

impl NumberFormatter {
    /// Tokenizes `picture` once for any number of formatting calls.
    #[must_use]
    pub fn new(picture: &str) -> Self {
        NumberFormatter {
            picture: Picture::new(picture),
        }
    }

    #[must_use]
    pub fn picture(&self) -> &Picture {
        &self.picture
    }

    /// Formats `numbers`; an empty sequence produces only the prefix and suffix.
    #[must_use]
    pub fn format(
        &self,
        numbers: &[FormatValue],
        options: &NumberOptions,
        numberer: &Numberer,
    ) -> String {
        let mut out = String::new();
        self.format_into(&mut out, numbers, options, numberer);
        out
    }

    /// Appends the formatted sequence to `out`.
    pub fn format_into(
        &self,
        out: &mut String,
        numbers: &[FormatValue],
        options: &NumberOptions,
        numberer: &Numberer,
    ) {
        let picture = &self.picture;
        let grouping = options.group_formatter();

        if let Some(prefix) = picture.prefix() {
            out.push_str(prefix);
        }

        for (position, value) in numbers.iter().enumerate() {
            if position > 0 {
                out.push_str(picture.separator(position));
            }
            match value {
                FormatValue::Integer(number) => out.push_str(&numberer.format_token(
                    *number,
                    picture.format_token(position),
                    Some(&grouping),
                    &options.letter_value,
                    &options.ordinal,
                )),
                FormatValue::BigInt(number) => {
                    debug!(position, "integer too large for format token, writing decimal");
                    out.push_str(&number.to_string());
                }
                FormatValue::Text(text) => out.push_str(text),
            }
        }

        if let Some(suffix) = picture.suffix() {
            out.push_str(suffix);
        }
    }
}

impl From<Picture> for NumberFormatter {
    fn from(picture: Picture) -> Self {
        NumberFormatter { picture }
    }
}
