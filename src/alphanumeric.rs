//! Codepoint classification for picture strings.
//!
//! A character is *alphanumeric* for the purposes of a numbering picture when it falls in
//! one of the Unicode general categories Nd, Nl, No, Lu, Ll, Lt, Lm or Lo. Alphanumeric runs
//! become format tokens; everything else is punctuation.
//!
//! The module also knows the decimal *digit families*: ranges of ten consecutive codepoints
//! that spell 0-9 in one script (ASCII, Arabic-Indic, Devanagari, Thai, fullwidth, ...). A
//! format token that starts with a member of a digit family selects positional decimal
//! numbering in that script.
//!
//! ## Examples
//!
//! ```rust
//! use xsl_numbering::alphanumeric::{digit_family, digit_value, is_alphanumeric};
//!
//! assert!(is_alphanumeric('a'));
//! assert!(!is_alphanumeric('.'));
//!
//! // Arabic-Indic digit seven
//! assert_eq!(digit_value('\u{0667}'), Some(7));
//! assert_eq!(digit_family('\u{0667}'), Some('\u{0660}'));
//! assert_eq!(digit_value('x'), None);
//! ```

use unicode_general_category::{get_general_category, GeneralCategory};

/// Zero digits of the known digit families, in ascending codepoint order.
static ZERO_DIGITS: [u32; 27] = [
    0x0030, 0x0660, 0x06f0, 0x0966, 0x09e6, 0x0a66, 0x0ae6, 0x0b66, 0x0be6, 0x0c66, 0x0ce6,
    0x0d66, 0x0e50, 0x0ed0, 0x0f20, 0x1040, 0x17e0, 0x1810, 0x1946, 0x19d0, 0xff10, 0x104a0,
    0x1d7ce, 0x1d7d8, 0x1d7e2, 0x1d7ec, 0x1d7f6,
];

// Inclusive ranges of alphanumeric codepoints outside the BMP, ascending. The CJK extension
// blocks are listed as single ranges.
static ASTRAL_ALPHANUMERIC: [(u32, u32); 63] = [
    (0x10000, 0x1000B),
    (0x1000D, 0x10026),
    (0x10028, 0x1003A),
    (0x1003C, 0x1003D),
    (0x1003F, 0x1004D),
    (0x10050, 0x1005D),
    (0x10080, 0x100FA),
    (0x10107, 0x10133),
    (0x10140, 0x10178),
    (0x1018A, 0x1018A),
    (0x10300, 0x1031E),
    (0x10320, 0x10323),
    (0x10330, 0x1034A),
    (0x10380, 0x1039D),
    (0x103A0, 0x103C3),
    (0x103C8, 0x103CF),
    (0x103D1, 0x103D5),
    (0x10400, 0x1049D),
    (0x104A0, 0x104A9),
    (0x10800, 0x10805),
    (0x10808, 0x10808),
    (0x1080A, 0x10835),
    (0x10837, 0x10838),
    (0x1083C, 0x1083C),
    (0x1083F, 0x1083F),
    (0x10A00, 0x10A00),
    (0x10A10, 0x10A13),
    (0x10A15, 0x10A17),
    (0x10A19, 0x10A33),
    (0x10A40, 0x10A47),
    (0x1D400, 0x1D454),
    (0x1D456, 0x1D49C),
    (0x1D49E, 0x1D49F),
    (0x1D4A2, 0x1D4A2),
    (0x1D4A5, 0x1D4A6),
    (0x1D4A9, 0x1D4AC),
    (0x1D4AE, 0x1D4B9),
    (0x1D4BB, 0x1D4BB),
    (0x1D4BD, 0x1D4C3),
    (0x1D4C5, 0x1D505),
    (0x1D507, 0x1D50A),
    (0x1D50D, 0x1D514),
    (0x1D516, 0x1D51C),
    (0x1D51E, 0x1D539),
    (0x1D53B, 0x1D53E),
    (0x1D540, 0x1D544),
    (0x1D546, 0x1D546),
    (0x1D54A, 0x1D550),
    (0x1D552, 0x1D6A5),
    (0x1D6A8, 0x1D6C0),
    (0x1D6C2, 0x1D6DA),
    (0x1D6DC, 0x1D6FA),
    (0x1D6FC, 0x1D714),
    (0x1D716, 0x1D734),
    (0x1D736, 0x1D74E),
    (0x1D750, 0x1D76E),
    (0x1D770, 0x1D788),
    (0x1D78A, 0x1D7A8),
    (0x1D7AA, 0x1D7C2),
    (0x1D7C4, 0x1D7C9),
    (0x1D7CE, 0x1D7FF),
    (0x20000, 0x2A6D6),
    (0x2F800, 0x2FA1D),
];

/// Returns `true` if `c` is a letter or digit in the sense of a numbering picture.
///
/// ASCII is answered directly. The rest of the BMP is classified by general category, so
/// combining marks and symbols such as `\u{24B6}` are punctuation. Astral codepoints are
/// looked up in a fixed range table.
///
/// # Examples
///
/// ```rust
/// use xsl_numbering::alphanumeric::is_alphanumeric;
///
/// assert!(is_alphanumeric('\u{2460}')); // circled digit one (No)
/// assert!(!is_alphanumeric('\u{24B6}')); // circled capital A (So)
/// ```
#[inline]
#[must_use]
pub fn is_alphanumeric(c: char) -> bool {
    let cp = c as u32;
    if cp <= 0x7F {
        c.is_ascii_alphanumeric()
    } else if cp <= 0xFFFF {
        is_letter_or_number(c)
    } else {
        is_astral_alphanumeric(cp)
    }
}

fn is_letter_or_number(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}

fn is_astral_alphanumeric(cp: u32) -> bool {
    ASTRAL_ALPHANUMERIC
        .iter()
        .find(|&&(_, end)| cp <= end)
        .map_or(false, |&(start, _)| cp >= start)
}

// Only the first family whose range ends at or after `cp` is considered.
fn family_zero(cp: u32) -> Option<u32> {
    let zero = *ZERO_DIGITS.iter().find(|&&zero| cp <= zero + 9)?;
    (cp >= zero).then_some(zero)
}

/// Returns the decimal value of `c` if it belongs to a known digit family.
///
/// # Examples
///
/// ```rust
/// use xsl_numbering::alphanumeric::digit_value;
///
/// assert_eq!(digit_value('4'), Some(4));
/// assert_eq!(digit_value('\u{0e55}'), Some(5)); // Thai five
/// assert_eq!(digit_value('A'), None);
/// ```
#[must_use]
pub fn digit_value(c: char) -> Option<u32> {
    let cp = c as u32;
    family_zero(cp).map(|zero| cp - zero)
}

/// Returns the zero digit of the digit family that `c` belongs to.
#[must_use]
pub fn digit_family(c: char) -> Option<char> {
    family_zero(c as u32).and_then(char::from_u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_fast_path() {
        for c in ['0', '9', 'A', 'Z', 'a', 'z'] {
            assert!(is_alphanumeric(c), "{c:?}");
        }
        for c in ['.', ' ', '-', '(', '_', '\u{7f}'] {
            assert!(!is_alphanumeric(c), "{c:?}");
        }
    }

    #[test]
    fn test_bmp_letters_and_numbers() {
        assert!(is_alphanumeric('\u{03b1}')); // alpha
        assert!(is_alphanumeric('\u{4e00}')); // CJK one
        assert!(is_alphanumeric('\u{2460}')); // circled one (No)
        assert!(is_alphanumeric('\u{0660}')); // Arabic-Indic zero
        assert!(!is_alphanumeric('\u{2014}')); // em dash
        assert!(!is_alphanumeric('\u{3002}')); // ideographic full stop
    }

    #[test]
    fn test_marks_and_symbols_are_punctuation() {
        assert!(!is_alphanumeric('\u{24B6}')); // circled capital A (So)
        assert!(!is_alphanumeric('\u{24E9}')); // circled small z (So)
        assert!(!is_alphanumeric('\u{0903}')); // Devanagari visarga (Mc)
        assert!(!is_alphanumeric('\u{0345}')); // combining ypogegrammeni (Mn)
        assert!(is_alphanumeric('\u{01C5}')); // Dz with caron (Lt)
        assert!(is_alphanumeric('\u{02B0}')); // modifier small h (Lm)
        assert!(is_alphanumeric('\u{2160}')); // Roman numeral one (Nl)
    }

    #[test]
    fn test_astral_ranges() {
        assert!(is_alphanumeric('\u{10000}'));
        assert!(!is_alphanumeric('\u{1000C}'));
        assert!(is_alphanumeric('\u{1D7CE}'));
        assert!(is_alphanumeric('\u{20000}'));
        assert!(!is_alphanumeric('\u{2A6D7}'));
        assert!(!is_alphanumeric('\u{1F600}'));
        assert!(!is_alphanumeric('\u{30000}'));
    }

    #[test]
    fn test_digit_values_across_families() {
        assert_eq!(digit_value('0'), Some(0));
        assert_eq!(digit_value('\u{0969}'), Some(3));
        assert_eq!(digit_value('\u{ff19}'), Some(9));
        assert_eq!(digit_value('\u{1d7d0}'), Some(2));
        assert_eq!(digit_family('\u{ff19}'), Some('\u{ff10}'));
        assert_eq!(digit_family('\u{1d7d9}'), Some('\u{1d7d8}'));
    }

    #[test]
    fn test_gaps_between_families_are_not_digits() {
        assert_eq!(digit_value(':'), None);
        assert_eq!(digit_value('\u{0100}'), None);
        assert_eq!(digit_family('\u{0670}'), None);
        assert_eq!(digit_value('\u{10ffff}'), None);
    }

    #[test]
    fn test_mathematical_digits_live_at_1d7ce() {
        // U+107CE..U+107FF are not digits
        for cp in [0x107CE, 0x107D0, 0x107D8, 0x107F6, 0x107FF] {
            let c = char::from_u32(cp).unwrap();
            assert_eq!(digit_value(c), None, "{cp:#X}");
            assert!(!is_alphanumeric(c), "{cp:#X}");
        }
        assert_eq!(digit_family('\u{1D7D0}'), Some('\u{1D7CE}'));
        assert_eq!(digit_family('\u{1D7FF}'), Some('\u{1D7F6}'));
    }
}
