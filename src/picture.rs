//! Tokenizing numbering pictures.
//!
//! A picture such as `"(1.a)"` alternates *punctuation* runs and *format* runs. A format run
//! is a maximal sequence of alphanumeric characters (see
//! [`is_alphanumeric`](crate::alphanumeric::is_alphanumeric)); everything between format
//! runs is punctuation.
//!
//! A [`Picture`] is built once and can then format any number of sequences.
//!
//! ## Examples
//!
//! ```rust
//! use xsl_numbering::Picture;
//!
//! let picture = Picture::new("(1.a)");
//! assert_eq!(picture.format_tokens(), ["1", "a"]);
//! assert_eq!(picture.punctuation_tokens(), ["(", ".", ")"]);
//! assert!(picture.starts_with_punctuation());
//! ```

use crate::alphanumeric::is_alphanumeric;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used between numbers when the picture supplies none.
pub const DEFAULT_SEPARATOR: &str = ".";

/// A tokenized numbering picture.
///
/// `punctuation_tokens[i]` is the punctuation that precedes `format_tokens[i]`; when the
/// picture starts with a format token that slot holds [`DEFAULT_SEPARATOR`]. If the picture
/// ends with punctuation there is one more punctuation token than format tokens.
///
/// Serializes as the picture string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Picture {
    format_tokens: Vec<String>,
    punctuation_tokens: Vec<String>,
    starts_with_punctuation: bool,
}

impl Default for Picture {
    fn default() -> Self {
        Picture::new("1")
    }
}

impl Picture {
    /// Tokenizes `picture`. An empty picture means `"1"`.
    ///
    /// A picture with no format token at all (`"--"`) gets the token `"1"`, and its single
    /// punctuation run serves as both prefix and suffix.
    #[must_use]
    pub fn new(picture: &str) -> Self {
        let picture = if picture.is_empty() { "1" } else { picture };

        let mut format_tokens = Vec::new();
        let mut punctuation_tokens = Vec::new();
        let mut starts_with_punctuation = true;

        for (index, (is_format, run)) in runs(picture).into_iter().enumerate() {
            if is_format {
                if index == 0 {
                    punctuation_tokens.push(DEFAULT_SEPARATOR.to_string());
                    starts_with_punctuation = false;
                }
                format_tokens.push(run.to_string());
            } else {
                punctuation_tokens.push(run.to_string());
            }
        }

        if format_tokens.is_empty() {
            format_tokens.push("1".to_string());
            if punctuation_tokens.len() == 1 {
                punctuation_tokens.push(punctuation_tokens[0].clone());
            }
        }

        Picture {
            format_tokens,
            punctuation_tokens,
            starts_with_punctuation,
        }
    }

    #[must_use]
    pub fn format_tokens(&self) -> &[String] {
        &self.format_tokens
    }

    #[must_use]
    pub fn punctuation_tokens(&self) -> &[String] {
        &self.punctuation_tokens
    }

    /// Returns `true` if the picture begins with punctuation. That punctuation is a prefix
    /// emitted once before the first number, never a separator.
    #[must_use]
    pub fn starts_with_punctuation(&self) -> bool {
        self.starts_with_punctuation
    }

    /// The format token used for the number at `position`; the last token repeats.
    #[must_use]
    pub fn format_token(&self, position: usize) -> &str {
        let last = self.format_tokens.len() - 1;
        &self.format_tokens[position.min(last)]
    }

    /// Punctuation emitted once before the first number, if any.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        if self.starts_with_punctuation {
            self.punctuation_tokens.first().map(String::as_str)
        } else {
            None
        }
    }

    /// The separator written before the number at `position` (meaningful from 1 on).
    ///
    /// Separators follow the format tokens they precede, so the last one repeats along with
    /// the last format token. A leading prefix is never reused as a separator; the default
    /// `"."` replaces it.
    #[must_use]
    pub fn separator(&self, position: usize) -> &str {
        let slot = position.min(self.format_tokens.len() - 1);
        if slot == 0 && self.starts_with_punctuation {
            DEFAULT_SEPARATOR
        } else {
            &self.punctuation_tokens[slot]
        }
    }

    /// Punctuation emitted once after the last number, if the picture ends with some.
    #[must_use]
    pub fn suffix(&self) -> Option<&str> {
        if self.punctuation_tokens.len() > self.format_tokens.len() {
            self.punctuation_tokens.last().map(String::as_str)
        } else {
            None
        }
    }
}

impl From<&str> for Picture {
    fn from(picture: &str) -> Self {
        Picture::new(picture)
    }
}

impl From<String> for Picture {
    fn from(picture: String) -> Self {
        Picture::new(&picture)
    }
}

impl From<Picture> for String {
    fn from(picture: Picture) -> Self {
        picture.to_string()
    }
}

impl fmt::Display for Picture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = self.prefix() {
            f.write_str(prefix)?;
        }
        for (i, token) in self.format_tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(&self.punctuation_tokens[i])?;
            }
            f.write_str(token)?;
        }
        if let Some(suffix) = self.suffix() {
            f.write_str(suffix)?;
        }
        Ok(())
    }
}

// Splits `picture` into maximal runs of alphanumeric / non-alphanumeric characters.
fn runs(picture: &str) -> Vec<(bool, &str)> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;
    for (offset, c) in picture.char_indices() {
        let is_format = is_alphanumeric(c);
        if current.is_some_and(|kind| kind != is_format) {
            runs.push((!is_format, &picture[start..offset]));
            start = offset;
        }
        current = Some(is_format);
    }
    if let Some(kind) = current {
        runs.push((kind, &picture[start..]));
    }
    runs
}
