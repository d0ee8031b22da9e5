//! Formatting single numbers with the common format tokens.
//!
//! Run with: cargo run --example simple

use xsl_numbering::format_number;

fn main() {
    let pictures = ["1", "001", "a", "A", "i", "I", "w", "Ww", "(1)"];

    for n in [1, 4, 27, 1994] {
        let row: Vec<String> = pictures.iter().map(|p| format_number(n, p)).collect();
        println!("{:>5}: {}", n, row.join(" | "));
    }

    // Anything a token cannot express falls back to decimal
    println!("{}", format_number(0, "I"));
    println!("{}", format_number(-12, "a"));
    println!("{}", format_number(12_000, "i"));
}
