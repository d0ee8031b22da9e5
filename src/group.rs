//! Grouping separators for positional numbers.
//!
//! A [`GroupFormatter`] receives the fully padded digit string produced by positional
//! encoding and inserts separators into it. [`RegularGroupFormatter`] implements the
//! fixed-interval rule used by `xsl:number` (`grouping-size` / `grouping-separator`).
//!
//! ## Examples
//!
//! ```rust
//! use xsl_numbering::{GroupFormatter, RegularGroupFormatter};
//!
//! let grouping = RegularGroupFormatter::new(3, ",");
//! assert_eq!(grouping.format("1234567"), "1,234,567");
//!
//! // Size zero disables grouping
//! let none = RegularGroupFormatter::new(0, ",");
//! assert_eq!(none.format("1234567"), "1234567");
//! ```

/// Inserts grouping separators into a string of digits.
pub trait GroupFormatter {
    /// Returns `digits` with separators inserted.
    fn format(&self, digits: &str) -> String;

    /// The separator this formatter inserts, if any.
    fn separator(&self) -> &str;
}

/// Groups digits at a fixed interval counted from the right.
///
/// Works on characters rather than bytes, so both the digits and the separator may be
/// outside the BMP.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct RegularGroupFormatter {
    group_size: usize,
    separator: String,
}

impl RegularGroupFormatter {
    /// Creates a formatter inserting `separator` every `group_size` digits.
    #[must_use]
    pub fn new(group_size: usize, separator: impl Into<String>) -> Self {
        RegularGroupFormatter {
            group_size,
            separator: separator.into(),
        }
    }

    /// A formatter that leaves digit strings unchanged.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.group_size > 0 && !self.separator.is_empty()
    }
}

impl GroupFormatter for RegularGroupFormatter {
    fn format(&self, digits: &str) -> String {
        if !self.is_enabled() {
            return digits.to_string();
        }
        let chars: Vec<char> = digits.chars().collect();
        let separators = chars.len().saturating_sub(1) / self.group_size;
        let mut out = String::with_capacity(digits.len() + separators * self.separator.len());
        for (i, c) in chars.iter().enumerate() {
            let remaining = chars.len() - i;
            if i > 0 && remaining % self.group_size == 0 {
                out.push_str(&self.separator);
            }
            out.push(*c);
        }
        out
    }

    fn separator(&self) -> &str {
        &self.separator
    }
}
