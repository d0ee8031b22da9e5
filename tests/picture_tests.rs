//! Picture tokenization and numbering-system selection across scripts
//!
//! Covers the picture forms and format tokens described in the `grammar` module.

use xsl_numbering::{format_number, format_sequence, numbers, NumberOptions, Numberer, Picture};

fn tokens(picture: &str) -> (Vec<String>, Vec<String>, bool) {
    let picture = Picture::new(picture);
    (
        picture.format_tokens().to_vec(),
        picture.punctuation_tokens().to_vec(),
        picture.starts_with_punctuation(),
    )
}

#[test]
fn test_leading_format_token_gets_placeholder() {
    let (format, punctuation, starts) = tokens("1.a");
    assert_eq!(format, ["1", "a"]);
    assert_eq!(punctuation, [".", "."]);
    assert!(!starts);
}

#[test]
fn test_leading_punctuation_is_first_token() {
    let (format, punctuation, starts) = tokens("((a))");
    assert_eq!(format, ["a"]);
    assert_eq!(punctuation, ["((", "))"]);
    assert!(starts);
}

#[test]
fn test_empty_and_all_punctuation_pictures() {
    let (format, punctuation, starts) = tokens("");
    assert_eq!(format, ["1"]);
    assert_eq!(punctuation, ["."]);
    assert!(!starts);

    let (format, punctuation, starts) = tokens("**");
    assert_eq!(format, ["1"]);
    assert_eq!(punctuation, ["**", "**"]);
    assert!(starts);
    assert_eq!(format_number(9, "**"), "**9**");
}

#[test]
fn test_non_ascii_format_runs() {
    let (format, punctuation, _) = tokens("\u{0661}\u{3001}\u{05d0}");
    assert_eq!(format, ["\u{0661}", "\u{05d0}"]);
    assert_eq!(punctuation, [".", "\u{3001}"]);

    // Astral digits and letters form one run
    let (format, _, _) = tokens("\u{1D7D8}\u{1D7D9}-\u{10400}");
    assert_eq!(format, ["\u{1D7D8}\u{1D7D9}", "\u{10400}"]);
}

#[test]
fn test_symbols_and_combining_marks_are_punctuation() {
    // Circled capital A is a symbol, not a letter
    let (format, punctuation, starts) = tokens("\u{24B6}1");
    assert_eq!(format, ["1"]);
    assert_eq!(punctuation, ["\u{24B6}"]);
    assert!(starts);
    assert_eq!(format_number(5, "\u{24B6}1"), "\u{24B6}5");

    let (format, punctuation, _) = tokens("1\u{0903}1");
    assert_eq!(format, ["1", "1"]);
    assert_eq!(punctuation, [".", "\u{0903}"]);
    assert_eq!(format_sequence(&numbers![2, 3], "1\u{0903}1"), "2\u{0903}3");

    // Devanagari ka..ha is 37 letters; the vowel sign after it ends the run
    assert_eq!(format_number(37, "\u{0915}"), "\u{0939}");
    assert_eq!(format_number(38, "\u{0915}"), "\u{0915}\u{0915}");
}

#[test]
fn test_digit_families() {
    assert_eq!(format_number(2024, "\u{0660}"), "\u{0662}\u{0660}\u{0662}\u{0664}");
    assert_eq!(format_number(7, "\u{0966}\u{0966}\u{0967}"), "\u{0966}\u{0966}\u{096d}");
    assert_eq!(format_number(31, "\u{0e50}"), "\u{0e53}\u{0e51}");
    assert_eq!(format_number(5, "\u{1D7CE}\u{1D7CE}"), "\u{1D7CE}\u{1D7D3}");
    assert_eq!(format_number(10, "\u{1D7F6}"), "\u{1D7F7}\u{1D7F6}");
}

#[test]
fn test_grouping_with_other_digit_families() {
    let numberer = Numberer::english();
    let options = NumberOptions::new().with_grouping(3, "\u{066c}");
    assert_eq!(
        numberer.format_with_options(1_000_000, "\u{0661}", &options),
        "\u{0661}\u{066c}\u{0660}\u{0660}\u{0660}\u{066c}\u{0660}\u{0660}\u{0660}"
    );
}

#[test]
fn test_script_alphabets() {
    assert_eq!(format_number(1, "\u{0391}"), "\u{0391}");
    assert_eq!(format_number(26, "\u{03b1}"), "\u{03b1}\u{03b1}");
    assert_eq!(format_number(3, "\u{0430}"), "\u{0432}");
    assert_eq!(format_number(22, "\u{05d0}"), "\u{05ea}");
    assert_eq!(format_number(23, "\u{05d0}"), "\u{05d0}\u{05d0}");
    assert_eq!(format_number(1, "\u{30a2}"), "\u{30a2}");
    assert_eq!(format_number(1, "\u{30a4}"), "\u{30a4}");
}

#[test]
fn test_unknown_letters_count_from_the_token() {
    assert_eq!(format_number(1, "\u{00e0}"), "\u{00e0}");
    assert_eq!(format_number(2, "\u{00e0}"), "\u{00e1}");
    assert_eq!(format_number(3, "x"), "z");
}

#[test]
fn test_kanji_numerals() {
    assert_eq!(format_number(10, "\u{4e00}"), "\u{5341}");
    assert_eq!(format_number(100, "\u{4e00}"), "\u{4e00}\u{767e}");
    assert_eq!(format_number(110, "\u{4e00}"), "\u{4e00}\u{767e}\u{5341}");
    assert_eq!(
        format_number(2025, "\u{4e00}"),
        "\u{4e8c}\u{5343}\u{4e8c}\u{5341}\u{4e94}"
    );
}

#[test]
fn test_enclosed_numbers() {
    assert_eq!(
        format_sequence(&numbers![1, 2, 20], "\u{2460} "),
        "\u{2460}.\u{2461}.\u{2473} "
    );
    assert_eq!(format_number(3, "\u{2488}"), "\u{248a}");
}

#[test]
fn test_unsupported_scripts_use_decimal() {
    assert_eq!(format_number(42, "\u{ac00}"), "42");
    assert_eq!(format_number(42, "\u{4e8c}"), "42");
    assert_eq!(format_number(7, "\u{ac00}\u{ac00}\u{ac00}"), "007");
}
