//! Error types for calendar conversion.

use thiserror::Error;

/// Result type for fallible conversions in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by validating constructors and lunar to solar conversion.
///
/// The numeric core never validates; these only come from the `try_*`
/// constructors and from asking for a leap month that does not exist.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    /// Day of month outside `1..=max`.
    #[error("day {day} not in 1..={max}")]
    DayOutOfRange { day: u32, max: u32 },

    /// Month outside `1..=12`.
    #[error("month {0} not in 1..=12")]
    MonthOutOfRange(u32),

    /// Year outside the supported range.
    #[error("year {0} not supported")]
    YearOutOfRange(i32),

    /// The lunar year has no leap month with this number.
    #[error("lunar year {year} has no leap month {month}")]
    NotLeapMonth { month: u32, year: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        for (err, std) in [
            (Error::DayOutOfRange { day: 31, max: 30 }, "day 31 not in 1..=30"),
            (Error::MonthOutOfRange(13), "month 13 not in 1..=12"),
            (Error::YearOutOfRange(1800), "year 1800 not supported"),
            (
                Error::NotLeapMonth { month: 3, year: 2023 },
                "lunar year 2023 has no leap month 3",
            ),
        ] {
            assert_eq!(std, err.to_string());
        }
    }
}
