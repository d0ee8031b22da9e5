//! Numbering picture grammar
//!
//! This module documents the pictures accepted by this library and the numbering systems a
//! format token selects.
//!
//! # Pictures
//!
//! A picture is a string of alternating runs:
//!
//! ```text
//! picture     ::= punctuation? (format (punctuation format)*)? punctuation?
//! format      ::= alphanumeric+
//! punctuation ::= non-alphanumeric+
//! ```
//!
//! A character is *alphanumeric* when its Unicode general category is one of `Nd`, `Nl`,
//! `No`, `Lu`, `Ll`, `Lt`, `Lm` or `Lo`. Supplementary-plane characters are classified too,
//! so `𝟎𝟏` (mathematical bold digits) is a single format token.
//!
//! **Rules**:
//! - An empty picture is the same as `"1"`.
//! - Punctuation before the first format token is a prefix, written once before the first
//!   number. It is never used as a separator.
//! - Punctuation after the last format token is a suffix, written once after the last
//!   number.
//! - Punctuation between two format tokens separates the numbers those tokens format.
//! - When there are more numbers than format tokens, the last format token and the
//!   separator before it are reused. The default separator is `.`.
//! - A picture with no format token (`"--"`) formats with `"1"` and uses its punctuation as
//!   both prefix and suffix: `5` becomes `--5--`.
//!
//! ```text
//! picture   numbers      output
//! 1.a.i     2, 3, 4      2.c.iv
//! (1)       1, 2         (1.2)
//! [A-1]     1, 2, 3      [A-2-3]
//! 1.        3, 4         3.4.
//! ```
//!
//! # Format tokens
//!
//! The first character of a token picks the numbering system. The token length is the
//! minimum width for positional systems only.
//!
//! | Token | System | 1, 2, 27 |
//! |-------|--------|----------|
//! | `1`, `01`, `001` | ASCII decimal, zero padded | `1`, `2`, `27` (`001`: `001`, `002`, `027`) |
//! | `٠`, `١`, `०`, `𝟎`, ... | decimal digits of that family | `١`, `٢`, `٢٧` |
//! | `a`, `A` | Latin letters, zero-less | `a`, `b`, `aa` |
//! | `i`, `I` | Roman numerals (1 to 9999) | `i`, `ii`, `xxvii` |
//! | `w`, `W`, `Ww` | words: lower, upper, title case | `one`, `TWO`, `Twenty Seven` |
//! | `α`, `Α`, `а`, `А`, `א` | Greek, Cyrillic, Hebrew alphabets | `α`, `β`, `αβ` (for `α`) |
//! | `あ`, `い`, `ア`, `イ` | gojūon and iroha kana | `あ`, `い`, ... (for `あ`) |
//! | `一` | Kanji numerals (0 to 9999) | `一`, `二`, `二十七` |
//! | `①`, `⑴`, `⒈` | enclosed numbers (1 to 20) | `①`, `②`, `27` |
//! | other letter below U+1100 | letters from that letter onwards | `b`, `c`, `bc` (for `b`) |
//! | anything else | ASCII decimal | `1`, `2`, `27` |
//!
//! **Rules**:
//! - Negative numbers are always written as plain decimal, whatever the token.
//! - Zero is written as `0` by every zero-less system (letters, Roman numerals, enclosed
//!   numbers).
//! - A number outside a bounded system's range is written as plain decimal.
//! - `letter-value="alphabetic"` turns `i`/`I` into letter sequences (`i`, `j`, ...);
//!   `"traditional"` or an empty value keeps Roman numerals; any other value writes
//!   `i`/`I` tokens in plain decimal.
//! - Grouping (`group_size`, `group_separator`) applies to decimal systems only.
//! - An ordinal request adds a suffix to `0`/`1` tokens (`1st`, `22nd`) and turns word
//!   tokens into ordinal words (`Twenty-First`). Other systems ignore it.
//!
//! # Limitations
//!
//! - **Range**: format tokens apply to `i64` values; larger integers are written in plain
//!   decimal.
//! - **Languages**: English words and calendar names are built in. Other languages plug in
//!   through [`WordSpeller`](crate::WordSpeller) and
//!   [`NumbererRegistry`](crate::NumbererRegistry).

// This module contains only documentation; no implementation code
