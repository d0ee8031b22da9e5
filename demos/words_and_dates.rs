//! Number words, ordinals and calendar names.
//!
//! Run with: cargo run --example words_and_dates

use chrono::{Datelike, Local, Month, Timelike, Weekday};
use xsl_numbering::{EnglishSpeller, Numberer, NumbererRegistry};

fn main() {
    let registry = NumbererRegistry::default().with(
        "en-x-hyphen",
        Numberer::new(EnglishSpeller::new().with_cardinal_separator("-")),
    );

    for tag in ["en", "en-x-hyphen", "fr"] {
        let numberer = registry.get_or_default(tag);
        println!(
            "{:<12} {} / {}",
            tag,
            numberer.format(1234, "Ww", 0, "", "", ""),
            numberer.format(42, "w", 0, "", "", "yes"),
        );
    }

    let numberer = registry.get_or_default("en");
    for n in [1, 2, 3, 11, 21, 112] {
        print!("{} ", numberer.format(n, "1", 0, "", "", "yes"));
    }
    println!();

    println!(
        "{} {} {}",
        numberer.month_name_of(Month::February, 1, 3),
        numberer.day_name_of(Weekday::Thu, 1, 2),
        numberer.day_name_of(Weekday::Sat, 1, 20),
    );

    let now = Local::now();
    println!(
        "Today is {}, the {} of {} {} {}, at {}:{:02} {}",
        numberer.day_name_of(now.weekday(), 1, 20),
        numberer.format(i64::from(now.day()), "w", 0, "", "", "yes"),
        numberer.month_name_of(
            Month::try_from(now.month() as u8).unwrap_or(Month::January),
            1,
            20
        ),
        now.year(),
        numberer.era_name_of(&now),
        now.hour12().1,
        now.minute(),
        numberer.half_day_name_at(&now, 1, 4),
    );
}
