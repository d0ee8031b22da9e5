//! chrono-typed calendar names.
//!
//! These are thin wrappers over the [`Numberer`] date helpers that take chrono values
//! instead of raw month, weekday and minute numbers.
//!
//! ## Examples
//!
//! ```rust
//! use chrono::{Month, NaiveDate, NaiveTime, Weekday};
//! use xsl_numbering::Numberer;
//!
//! let numberer = Numberer::english();
//! assert_eq!(numberer.month_name_of(Month::September, 1, 3), "Sep");
//! assert_eq!(numberer.day_name_of(Weekday::Wed, 1, 20), "Wednesday");
//!
//! let evening = NaiveTime::from_hms_opt(18, 30, 0).unwrap();
//! assert_eq!(numberer.half_day_name_at(&evening, 1, 4), "P.M.");
//!
//! let date = NaiveDate::from_ymd_opt(1066, 10, 14).unwrap();
//! assert_eq!(numberer.era_name_of(&date), "AD");
//! ```

use crate::numberer::Numberer;
use chrono::{Datelike, Month, Timelike, Weekday};

impl Numberer {
    /// Name of `month`, fitted between `min_width` and `max_width` characters.
    #[must_use]
    pub fn month_name_of(&self, month: Month, min_width: usize, max_width: usize) -> String {
        self.month_name(month.number_from_month(), min_width, max_width)
    }

    /// Name of `day`, fitted between `min_width` and `max_width` characters.
    #[must_use]
    pub fn day_name_of(&self, day: Weekday, min_width: usize, max_width: usize) -> String {
        self.day_name(day.number_from_monday(), min_width, max_width)
    }

    /// The am/pm indicator for the time of day of `time`.
    #[must_use]
    pub fn half_day_name_at<T: Timelike>(
        &self,
        time: &T,
        min_width: usize,
        max_width: usize,
    ) -> String {
        self.half_day_name(time.hour() * 60 + time.minute(), min_width, max_width)
    }

    /// The era of the year of `date`.
    #[must_use]
    pub fn era_name_of<D: Datelike>(&self, date: &D) -> String {
        self.era_name(i64::from(date.year()))
    }
}
