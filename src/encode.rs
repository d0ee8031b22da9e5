//! Numeral encoding algorithms.
//!
//! Each function turns one integer into a string for a single numbering system. None of them
//! fail: a number outside the domain of the system comes back as its plain decimal string.
//!
//! | Function | Numbering | Domain |
//! |---|---|---|
//! | [`to_radical`] | positional, any digit alphabet | `n >= 0` |
//! | [`to_alpha_sequence`] | zero-less alphabetic (a, b, ..., z, aa, ab, ...) | `n >= 1` |
//! | [`to_roman`] | Roman numerals, lower case | `1..=9999` |
//! | [`to_kanji`] | CJK ideographic numerals | `0..=9999` |
//! | [`to_enclosed`] | circled / parenthesized / full-stop digits | `1..=20` |
//!
//! The script alphabets used by alphabetic numbering live here as immutable statics.

use crate::alphanumeric::is_alphanumeric;
use crate::group::GroupFormatter;

pub static LATIN_UPPER: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

pub static LATIN_LOWER: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

// U+03A2 is unassigned; it stays in the sequence so that positions match the codepoint order.
pub static GREEK_UPPER: [char; 25] = [
    '\u{0391}', '\u{0392}', '\u{0393}', '\u{0394}', '\u{0395}', '\u{0396}', '\u{0397}',
    '\u{0398}', '\u{0399}', '\u{039a}', '\u{039b}', '\u{039c}', '\u{039d}', '\u{039e}',
    '\u{039f}', '\u{03a0}', '\u{03a1}', '\u{03a2}', '\u{03a3}', '\u{03a4}', '\u{03a5}',
    '\u{03a6}', '\u{03a7}', '\u{03a8}', '\u{03a9}',
];

pub static GREEK_LOWER: [char; 25] = [
    '\u{03b1}', '\u{03b2}', '\u{03b3}', '\u{03b4}', '\u{03b5}', '\u{03b6}', '\u{03b7}',
    '\u{03b8}', '\u{03b9}', '\u{03ba}', '\u{03bb}', '\u{03bc}', '\u{03bd}', '\u{03be}',
    '\u{03bf}', '\u{03c0}', '\u{03c1}', '\u{03c2}', '\u{03c3}', '\u{03c4}', '\u{03c5}',
    '\u{03c6}', '\u{03c7}', '\u{03c8}', '\u{03c9}',
];

// Es (U+0421) appears twice where Te (U+0422) is expected. Positions are kept as published.
pub static CYRILLIC_UPPER: [char; 29] = [
    '\u{0410}', '\u{0411}', '\u{0412}', '\u{0413}', '\u{0414}', '\u{0415}', '\u{0416}',
    '\u{0417}', '\u{0418}', '\u{041a}', '\u{041b}', '\u{041c}', '\u{041d}', '\u{041e}',
    '\u{041f}', '\u{0420}', '\u{0421}', '\u{0421}', '\u{0423}', '\u{0424}', '\u{0425}',
    '\u{0426}', '\u{0427}', '\u{0428}', '\u{0429}', '\u{042b}', '\u{042d}', '\u{042e}',
    '\u{042f}',
];

pub static CYRILLIC_LOWER: [char; 29] = [
    '\u{0430}', '\u{0431}', '\u{0432}', '\u{0433}', '\u{0434}', '\u{0435}', '\u{0436}',
    '\u{0437}', '\u{0438}', '\u{043a}', '\u{043b}', '\u{043c}', '\u{043d}', '\u{043e}',
    '\u{043f}', '\u{0440}', '\u{0441}', '\u{0441}', '\u{0443}', '\u{0444}', '\u{0445}',
    '\u{0446}', '\u{0447}', '\u{0448}', '\u{0449}', '\u{044b}', '\u{044d}', '\u{044e}',
    '\u{044f}',
];

// Final forms are excluded.
pub static HEBREW: [char; 22] = [
    '\u{05d0}', '\u{05d1}', '\u{05d2}', '\u{05d3}', '\u{05d4}', '\u{05d5}', '\u{05d6}',
    '\u{05d7}', '\u{05d8}', '\u{05d9}', '\u{05db}', '\u{05dc}', '\u{05de}', '\u{05e0}',
    '\u{05e1}', '\u{05e2}', '\u{05e4}', '\u{05e6}', '\u{05e7}', '\u{05e8}', '\u{05e9}',
    '\u{05ea}',
];

/// Hiragana in gojuon order (a, i, u, e, o, ka, ...).
pub static HIRAGANA_A: [char; 46] = [
    '\u{3042}', '\u{3044}', '\u{3046}', '\u{3048}', '\u{304a}', '\u{304b}', '\u{304d}',
    '\u{304f}', '\u{3051}', '\u{3053}', '\u{3055}', '\u{3057}', '\u{3059}', '\u{305b}',
    '\u{305d}', '\u{305f}', '\u{3061}', '\u{3064}', '\u{3066}', '\u{3068}', '\u{306a}',
    '\u{306b}', '\u{306c}', '\u{306d}', '\u{306e}', '\u{306f}', '\u{3072}', '\u{3075}',
    '\u{3078}', '\u{307b}', '\u{307e}', '\u{307f}', '\u{3080}', '\u{3081}', '\u{3082}',
    '\u{3084}', '\u{3086}', '\u{3088}', '\u{3089}', '\u{308a}', '\u{308b}', '\u{308c}',
    '\u{308d}', '\u{308f}', '\u{3092}', '\u{3093}',
];

pub static KATAKANA_A: [char; 46] = [
    '\u{30a2}', '\u{30a4}', '\u{30a6}', '\u{30a8}', '\u{30aa}', '\u{30ab}', '\u{30ad}',
    '\u{30af}', '\u{30b1}', '\u{30b3}', '\u{30b5}', '\u{30b7}', '\u{30b9}', '\u{30bb}',
    '\u{30bd}', '\u{30bf}', '\u{30c1}', '\u{30c4}', '\u{30c6}', '\u{30c8}', '\u{30ca}',
    '\u{30cb}', '\u{30cc}', '\u{30cd}', '\u{30ce}', '\u{30cf}', '\u{30d2}', '\u{30d5}',
    '\u{30d8}', '\u{30db}', '\u{30de}', '\u{30df}', '\u{30e0}', '\u{30e1}', '\u{30e2}',
    '\u{30e4}', '\u{30e6}', '\u{30e8}', '\u{30e9}', '\u{30ea}', '\u{30eb}', '\u{30ec}',
    '\u{30ed}', '\u{30ef}', '\u{30f2}', '\u{30f3}',
];

/// Hiragana in iroha order (i, ro, ha, ni, ...).
pub static HIRAGANA_I: [char; 47] = [
    '\u{3044}', '\u{308d}', '\u{306f}', '\u{306b}', '\u{307b}', '\u{3078}', '\u{3068}',
    '\u{3061}', '\u{308a}', '\u{306c}', '\u{308b}', '\u{3092}', '\u{308f}', '\u{304b}',
    '\u{3088}', '\u{305f}', '\u{308c}', '\u{305d}', '\u{3064}', '\u{306d}', '\u{306a}',
    '\u{3089}', '\u{3080}', '\u{3046}', '\u{3090}', '\u{306e}', '\u{304a}', '\u{304f}',
    '\u{3084}', '\u{307e}', '\u{3051}', '\u{3075}', '\u{3053}', '\u{3048}', '\u{3066}',
    '\u{3042}', '\u{3055}', '\u{304d}', '\u{3086}', '\u{3081}', '\u{307f}', '\u{3057}',
    '\u{3091}', '\u{3072}', '\u{3082}', '\u{305b}', '\u{3059}',
];

pub static KATAKANA_I: [char; 47] = [
    '\u{30a4}', '\u{30ed}', '\u{30cf}', '\u{30cb}', '\u{30db}', '\u{30d8}', '\u{30c8}',
    '\u{30c1}', '\u{30ea}', '\u{30cc}', '\u{30eb}', '\u{30f2}', '\u{30ef}', '\u{30ab}',
    '\u{30e8}', '\u{30bf}', '\u{30ec}', '\u{30bd}', '\u{30c4}', '\u{30cd}', '\u{30ca}',
    '\u{30e9}', '\u{30e0}', '\u{30a6}', '\u{30f0}', '\u{30ce}', '\u{30aa}', '\u{30af}',
    '\u{30e4}', '\u{30de}', '\u{30b1}', '\u{30d5}', '\u{30b3}', '\u{30a8}', '\u{30c6}',
    '\u{30a2}', '\u{30b5}', '\u{30ad}', '\u{30e6}', '\u{30e1}', '\u{30df}', '\u{30b7}',
    '\u{30f1}', '\u{30d2}', '\u{30e2}', '\u{30bb}', '\u{30b9}',
];

// Roman numbers beyond 3999 would need overlining; thousands simply repeat "m".
static ROMAN_THOUSANDS: [&str; 10] = [
    "", "m", "mm", "mmm", "mmmm", "mmmmm", "mmmmmm", "mmmmmmm", "mmmmmmmm", "mmmmmmmmm",
];
static ROMAN_HUNDREDS: [&str; 10] = ["", "c", "cc", "ccc", "cd", "d", "dc", "dcc", "dccc", "cm"];
static ROMAN_TENS: [&str; 10] = ["", "x", "xx", "xxx", "xl", "l", "lx", "lxx", "lxxx", "xc"];
static ROMAN_UNITS: [&str; 10] = ["", "i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix"];

static KANJI_DIGITS: [char; 10] = [
    '\u{3007}', '\u{4e00}', '\u{4e8c}', '\u{4e09}', '\u{56db}', '\u{4e94}', '\u{516d}',
    '\u{4e03}', '\u{516b}', '\u{4e5d}',
];
const KANJI_TEN: char = '\u{5341}';
const KANJI_HUNDRED: char = '\u{767e}';
const KANJI_THOUSAND: char = '\u{5343}';

/// The largest value Roman and Kanji numbering can represent.
pub const TABLE_NUMERAL_MAX: i64 = 9999;

/// The largest value the enclosed-digit symbols can represent.
pub const ENCLOSED_MAX: i64 = 20;

/// Renders `number` using a positional digit alphabet (index 0 is the zero symbol).
///
/// The result is left-padded with the zero symbol to `min_width` characters, then handed to
/// `grouping` if one is supplied. Negative numbers and alphabets with fewer than two digits
/// produce the plain decimal string.
///
/// # Examples
///
/// ```rust
/// use xsl_numbering::encode::to_radical;
///
/// let western = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
/// assert_eq!(to_radical(5, &western, 3, None), "005");
/// assert_eq!(to_radical(0, &western, 1, None), "0");
/// assert_eq!(to_radical(5, &['0', '1'], 1, None), "101");
/// ```
#[must_use]
pub fn to_radical(
    number: i64,
    digits: &[char],
    min_width: usize,
    grouping: Option<&dyn GroupFormatter>,
) -> String {
    let base = digits.len() as i64;
    if number < 0 || base < 2 {
        return number.to_string();
    }
    let mut reversed = Vec::new();
    let mut n = number;
    while n > 0 {
        reversed.push(digits[(n % base) as usize]);
        n /= base;
    }
    while reversed.len() < min_width.max(1) {
        reversed.push(digits[0]);
    }
    let plain: String = reversed.iter().rev().collect();
    match grouping {
        Some(grouping) => grouping.format(&plain),
        None => plain,
    }
}

/// The ten digits of the decimal family whose zero is `zero`.
#[must_use]
pub fn decimal_digits(zero: char) -> [char; 10] {
    let mut digits = [zero; 10];
    for (value, digit) in digits.iter_mut().enumerate() {
        *digit = char::from_u32(zero as u32 + value as u32).unwrap_or(zero);
    }
    digits
}

/// Renders `number` as a zero-less alphabetic label over `alphabet`.
///
/// With the alphabet `a..z` the sequence is a, b, ..., z, aa, ab, ..., zz, aaa, ...
/// Numbers below 1 have no label and come back as decimal, as do alphabets with fewer than
/// two letters (whose labels would grow linearly with the number).
///
/// # Examples
///
/// ```rust
/// use xsl_numbering::encode::{to_alpha_sequence, LATIN_LOWER};
///
/// assert_eq!(to_alpha_sequence(1, &LATIN_LOWER), "a");
/// assert_eq!(to_alpha_sequence(27, &LATIN_LOWER), "aa");
/// assert_eq!(to_alpha_sequence(0, &LATIN_LOWER), "0");
/// ```
#[must_use]
pub fn to_alpha_sequence(number: i64, alphabet: &[char]) -> String {
    let radix = alphabet.len() as i64;
    if number <= 0 || radix < 2 {
        return number.to_string();
    }
    // At most log_radix(i64::MAX) iterations, i.e. 63 for a two-letter alphabet.
    let mut reversed = Vec::new();
    let mut n = number;
    loop {
        reversed.push(alphabet[((n - 1) % radix) as usize]);
        if n <= radix {
            break;
        }
        n = (n - 1) / radix;
    }
    reversed.iter().rev().collect()
}

/// The run of consecutive alphanumeric codepoints starting at `first`.
///
/// This is the implied alphabet of a format token such as `"i"` with letter-value
/// `alphabetic` (i, j, ..., z) or an otherwise unknown letter like `"\u{00e0}"`.
#[must_use]
pub fn letter_run(first: char) -> Vec<char> {
    (first as u32..)
        .map_while(char::from_u32)
        .take_while(|&c| is_alphanumeric(c))
        .collect()
}

/// Renders `number` as a lower-case Roman numeral.
///
/// Thousands are written by repeating `m`; values from 1 to 9999 are supported and anything
/// else is returned as decimal.
///
/// # Examples
///
/// ```rust
/// use xsl_numbering::encode::to_roman;
///
/// assert_eq!(to_roman(1994), "mcmxciv");
/// assert_eq!(to_roman(0), "0");
/// assert_eq!(to_roman(10000), "10000");
/// ```
#[must_use]
pub fn to_roman(number: i64) -> String {
    if !(1..=TABLE_NUMERAL_MAX).contains(&number) {
        return number.to_string();
    }
    let n = number as usize;
    [
        ROMAN_THOUSANDS[n / 1000],
        ROMAN_HUNDREDS[(n / 100) % 10],
        ROMAN_TENS[(n / 10) % 10],
        ROMAN_UNITS[n % 10],
    ]
    .concat()
}

/// Renders `number` with CJK ideographic numerals.
///
/// Zero is U+3007. A coefficient of one is dropped in front of the tens marker (10 is
/// written as a bare ten), while hundreds and thousands always spell their coefficient.
/// Values above 9999 are returned as decimal.
///
/// # Examples
///
/// ```rust
/// use xsl_numbering::encode::to_kanji;
///
/// assert_eq!(to_kanji(10), "\u{5341}");
/// assert_eq!(to_kanji(21), "\u{4e8c}\u{5341}\u{4e00}");
/// assert_eq!(to_kanji(12345), "12345");
/// ```
#[must_use]
pub fn to_kanji(number: i64) -> String {
    if !(0..=TABLE_NUMERAL_MAX).contains(&number) {
        return number.to_string();
    }
    let mut out = String::new();
    push_kanji(&mut out, number as usize);
    out
}

// Recursion depth is bounded by the four place values.
fn push_kanji(out: &mut String, n: usize) {
    let (place, marker) = match n {
        0..=9 => {
            out.push(KANJI_DIGITS[n]);
            return;
        }
        10..=99 => (10, KANJI_TEN),
        100..=999 => (100, KANJI_HUNDRED),
        _ => (1000, KANJI_THOUSAND),
    };
    let coefficient = n / place;
    let rest = n % place;
    if !(coefficient == 1 && place == 10) {
        push_kanji(out, coefficient);
    }
    out.push(marker);
    if rest != 0 {
        push_kanji(out, rest);
    }
}

/// Renders `number` as one of twenty consecutive enclosed-digit symbols starting at `first`
/// (for example U+2460 CIRCLED DIGIT ONE). Only 1 to 20 have a symbol.
///
/// # Examples
///
/// ```rust
/// use xsl_numbering::encode::to_enclosed;
///
/// assert_eq!(to_enclosed(3, '\u{2460}'), "\u{2462}");
/// assert_eq!(to_enclosed(21, '\u{2460}'), "21");
/// ```
#[must_use]
pub fn to_enclosed(number: i64, first: char) -> String {
    if !(1..=ENCLOSED_MAX).contains(&number) {
        return number.to_string();
    }
    char::from_u32(first as u32 + number as u32 - 1)
        .map_or_else(|| number.to_string(), String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::RegularGroupFormatter;

    const WESTERN: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

    #[test]
    fn test_radical_padding_and_grouping() {
        assert_eq!(to_radical(5, &WESTERN, 3, None), "005");
        assert_eq!(to_radical(12345, &WESTERN, 3, None), "12345");
        assert_eq!(to_radical(0, &WESTERN, 0, None), "0");
        assert_eq!(to_radical(0, &WESTERN, 2, None), "00");

        let grouping = RegularGroupFormatter::new(3, ",");
        assert_eq!(to_radical(1234567, &WESTERN, 1, Some(&grouping)), "1,234,567");
        assert_eq!(to_radical(42, &WESTERN, 5, Some(&grouping)), "00,042");
    }

    #[test]
    fn test_radical_rejects_negative_and_degenerate_alphabets() {
        assert_eq!(to_radical(-7, &WESTERN, 3, None), "-7");
        assert_eq!(to_radical(7, &['x'], 1, None), "7");
    }

    #[test]
    fn test_decimal_digits() {
        assert_eq!(decimal_digits('0'), WESTERN);
        assert_eq!(decimal_digits('\u{0660}')[9], '\u{0669}');
        assert_eq!(to_radical(305, &decimal_digits('\u{0966}'), 1, None), "\u{0969}\u{0966}\u{096b}");
    }

    #[test]
    fn test_alpha_sequence() {
        let expected = [(1, "a"), (26, "z"), (27, "aa"), (52, "az"), (53, "ba"), (702, "zz"), (703, "aaa")];
        for (n, label) in expected {
            assert_eq!(to_alpha_sequence(n, &LATIN_LOWER), label, "n = {n}");
        }
        assert_eq!(to_alpha_sequence(3, &['x', 'y', 'z']), "z");
        assert_eq!(to_alpha_sequence(4, &['x', 'y', 'z']), "xx");
    }

    #[test]
    fn test_alpha_sequence_outside_domain() {
        assert_eq!(to_alpha_sequence(0, &LATIN_UPPER), "0");
        assert_eq!(to_alpha_sequence(-3, &LATIN_UPPER), "-3");
        assert_eq!(to_alpha_sequence(5, &[]), "5");
        assert_eq!(to_alpha_sequence(5, &['q']), "5");
        assert_eq!(to_alpha_sequence(i64::MAX, &['a', 'b']).len(), 63);
    }

    #[test]
    fn test_letter_run() {
        let run = letter_run('i');
        assert_eq!(run.first(), Some(&'i'));
        assert_eq!(run.last(), Some(&'z'));
        assert_eq!(run.len(), 18);
        assert!(letter_run('.').is_empty());
        assert_eq!(letter_run('\u{00e0}').last(), Some(&'\u{00f6}'));
    }

    #[test]
    fn test_letter_run_stops_at_combining_mark() {
        let run = letter_run('\u{0915}');
        assert_eq!(run.len(), 37);
        assert_eq!(run.last(), Some(&'\u{0939}'));
        assert!(letter_run('\u{0345}').is_empty());
    }

    #[test]
    fn test_roman() {
        assert_eq!(to_roman(1), "i");
        assert_eq!(to_roman(4), "iv");
        assert_eq!(to_roman(9), "ix");
        assert_eq!(to_roman(14), "xiv");
        assert_eq!(to_roman(40), "xl");
        assert_eq!(to_roman(90), "xc");
        assert_eq!(to_roman(400), "cd");
        assert_eq!(to_roman(1994), "mcmxciv");
        assert_eq!(to_roman(2024), "mmxxiv");
        assert_eq!(to_roman(4999), "mmmmcmxcix");
        assert_eq!(to_roman(9999), "mmmmmmmmmcmxcix");
    }

    #[test]
    fn test_roman_outside_domain() {
        assert_eq!(to_roman(0), "0");
        assert_eq!(to_roman(-4), "-4");
        assert_eq!(to_roman(10000), "10000");
    }

    #[test]
    fn test_kanji() {
        assert_eq!(to_kanji(0), "\u{3007}");
        assert_eq!(to_kanji(1), "\u{4e00}");
        assert_eq!(to_kanji(10), "\u{5341}");
        assert_eq!(to_kanji(11), "\u{5341}\u{4e00}");
        assert_eq!(to_kanji(20), "\u{4e8c}\u{5341}");
        assert_eq!(to_kanji(100), "\u{4e00}\u{767e}");
        assert_eq!(to_kanji(110), "\u{4e00}\u{767e}\u{5341}");
        assert_eq!(to_kanji(1000), "\u{4e00}\u{5343}");
        assert_eq!(
            to_kanji(2345),
            "\u{4e8c}\u{5343}\u{4e09}\u{767e}\u{56db}\u{5341}\u{4e94}"
        );
        assert_eq!(to_kanji(9999).chars().count(), 7);
    }

    #[test]
    fn test_kanji_outside_domain() {
        assert_eq!(to_kanji(10000), "10000");
        assert_eq!(to_kanji(-1), "-1");
    }

    #[test]
    fn test_enclosed() {
        assert_eq!(to_enclosed(1, '\u{2460}'), "\u{2460}");
        assert_eq!(to_enclosed(20, '\u{2460}'), "\u{2473}");
        assert_eq!(to_enclosed(1, '\u{2474}'), "\u{2474}");
        assert_eq!(to_enclosed(20, '\u{2488}'), "\u{249b}");
        assert_eq!(to_enclosed(0, '\u{2460}'), "0");
        assert_eq!(to_enclosed(21, '\u{2488}'), "21");
    }

    #[test]
    fn test_script_alphabets() {
        assert_eq!(to_alpha_sequence(2, &GREEK_LOWER), "\u{03b2}");
        assert_eq!(to_alpha_sequence(26, &GREEK_UPPER), "\u{0391}\u{0391}");
        assert_eq!(to_alpha_sequence(1, &HEBREW), "\u{05d0}");
        assert_eq!(to_alpha_sequence(47, &HIRAGANA_I), "\u{3059}");
        assert_eq!(to_alpha_sequence(47, &HIRAGANA_A), "\u{3042}\u{3042}");
        assert_eq!(to_alpha_sequence(18, &CYRILLIC_LOWER), "\u{0441}");
        assert_eq!(to_alpha_sequence(17, &CYRILLIC_UPPER), "\u{0421}");
        for (hiragana, katakana) in HIRAGANA_I.iter().zip(KATAKANA_I.iter()) {
            assert_eq!(*hiragana as u32 + 0x60, *katakana as u32);
        }
        for (hiragana, katakana) in HIRAGANA_A.iter().zip(KATAKANA_A.iter()) {
            assert_eq!(*hiragana as u32 + 0x60, *katakana as u32);
        }
    }
}
