//! Digit families and alphabets beyond ASCII.
//!
//! Run with: cargo run --example scripts

use xsl_numbering::{LetterValue, NumberOptions, Numberer, NumberingSystem};

fn main() {
    let numberer = Numberer::english();

    let tokens = [
        ("Arabic-Indic", "\u{0661}"),
        ("Devanagari", "\u{0966}\u{0967}"),
        ("Thai", "\u{0e51}"),
        ("Fullwidth", "\u{ff11}"),
        ("Math bold", "\u{1D7CF}"),
        ("Greek", "\u{03b1}"),
        ("Cyrillic", "\u{0410}"),
        ("Hebrew", "\u{05d0}"),
        ("Hiragana", "\u{3042}"),
        ("Katakana iroha", "\u{30a4}"),
        ("Kanji", "\u{4e00}"),
        ("Circled", "\u{2460}"),
        ("Hangul", "\u{ac00}"),
    ];

    for (name, token) in tokens {
        let system = NumberingSystem::for_token(token, &LetterValue::Unspecified);
        let samples: Vec<String> = [1, 7, 12, 2024]
            .iter()
            .map(|&n| numberer.format(n, token, 0, "", "", ""))
            .collect();
        println!("{:<15} {:<40} {:?}", name, samples.join(" "), system);
    }

    // Grouping works in any digit family
    let options = NumberOptions::new().with_grouping(3, "\u{066c}");
    println!("{}", numberer.format_with_options(9_876_543, "\u{0661}", &options));
}
