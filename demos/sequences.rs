//! Multi-level pictures: separators, prefixes, suffixes and options.
//!
//! Run with: cargo run --example sequences

use xsl_numbering::{numbers, FormatValue, NumberFormatter, NumberOptions, Numberer};

fn main() {
    let numberer = Numberer::english();
    let options = NumberOptions::default();

    // Outline numbering: the last token repeats for deeper levels
    let outline = NumberFormatter::new("1.a.i");
    for path in [vec![1], vec![1, 1], vec![1, 2, 3], vec![2, 3, 4, 5]] {
        let values: Vec<FormatValue> = path.into_iter().map(FormatValue::from).collect();
        println!("{}", outline.format(&values, &options, &numberer));
    }

    // Leading punctuation is written once; trailing punctuation closes the sequence
    let bracketed = NumberFormatter::new("[A-1]");
    println!("{}", bracketed.format(&numbers![3, 14], &options, &numberer));
    println!("{}", NumberFormatter::new("(1)").format(&numbers![1, 2], &options, &numberer));

    // Grouping and ordinals apply to every number in the sequence
    let grouped = NumberOptions::new().with_grouping(3, ",").with_ordinal("yes");
    let formatter = NumberFormatter::new("1 / 1");
    println!("{}", formatter.format(&numbers![1_000_001, 22], &grouped, &numberer));

    // Oversized integers and preformatted items pass through
    let mixed = numbers![u64::MAX, "bis", 3];
    println!("{}", NumberFormatter::new("1.1.i").format(&mixed, &options, &numberer));
}
