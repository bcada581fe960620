//! Vietnamese text for lunar dates.

use super::{LunarDate, Month};
use super::sexagenary::CanChi;

/// Month names, index `0..12` for months 1 to 12.
pub const MONTH_NAMES: &[&str] = &[
    "Giêng", "Hai", "Ba", "Tư", "Năm", "Sáu", "Bảy", "Tám", "Chín", "Mười", "Mười Một", "Chạp",
];

/// Gets the month name (with "Tháng"). Months 1 and 12 are "Giêng" and
/// "Chạp"; a leap month is suffixed with "Nhuận".
///
/// # Example
///
/// ```
/// use amlich::vietnamese::{self, Month::*};
///
/// assert_eq!("Tháng Giêng", vietnamese::fmt::month(Common(1)));
/// assert_eq!("Tháng Hai Nhuận", vietnamese::fmt::month(Leap(2)));
/// ```
///
/// # Panics
///
/// Panics if the month number is not in `1..=12`.
pub fn month(m: Month) -> String {
    let num = m.num();
    let name = match num {
        1..=12 => MONTH_NAMES[num as usize - 1],
        _ => panic!("month {} not in 1..=12", num),
    };
    let mut rt = format!("Tháng {name}");
    if m.is_leap() {
        rt += " Nhuận";
    }
    rt
}

/// Gets the day name. The first ten days are "Mùng 1" to "Mùng 10", the
/// fifteenth is "Rằm", the rest are plain numbers.
///
/// # Example
///
/// ```
/// use amlich::vietnamese;
///
/// assert_eq!("Mùng 1", vietnamese::fmt::day(1));
/// assert_eq!("Rằm", vietnamese::fmt::day(15));
/// assert_eq!("30", vietnamese::fmt::day(30));
/// ```
///
/// # Panics
///
/// Panics if the day is not in `1..=30`.
pub fn day(d: u32) -> String {
    match d {
        1..=10 => format!("Mùng {d}"),
        15 => "Rằm".to_owned(),
        11..=30 => d.to_string(),
        _ => panic!("day {} not in 1..=30", d),
    }
}

/// Name of an ISO day of week (`1..=7`, Monday first).
///
/// # Panics
///
/// Panics if `dow` is not in `1..=7`.
pub fn weekday(dow: u32) -> &'static str {
    const NAMES: &[&str] = &[
        "Thứ Hai", "Thứ Ba", "Thứ Tư", "Thứ Năm", "Thứ Sáu", "Thứ Bảy", "Chủ Nhật",
    ];
    match dow {
        1..=7 => NAMES[dow as usize - 1],
        _ => panic!("day of week {} not in 1..=7", dow),
    }
}

/// Full text of a lunar date, with the year named by its Can Chi.
///
/// # Example
///
/// ```
/// use amlich::vietnamese::{self, LunarDate, Month::*};
///
/// let tet = LunarDate::new(2024, Common(1), 1);
/// assert_eq!("Mùng 1 Tháng Giêng năm Giáp Thìn", vietnamese::fmt::lunar_date(&tet));
/// ```
pub fn lunar_date(date: &LunarDate) -> String {
    format!(
        "{} {} năm {}",
        day(date.day),
        month(date.month),
        CanChi::for_year(date.year)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month() {
        use Month::*;
        for (std, m) in [
            ("Tháng Giêng", Common(1)),
            ("Tháng Tư", Common(4)),
            ("Tháng Mười Một", Common(11)),
            ("Tháng Chạp", Common(12)),
            ("Tháng Sáu Nhuận", Leap(6)),
        ] {
            assert_eq!(std, month(m));
        }
    }

    #[test]
    fn test_day() {
        for (std, d) in [("Mùng 1", 1), ("Mùng 10", 10), ("11", 11), ("Rằm", 15), ("30", 30)] {
            assert_eq!(std, day(d));
        }
    }

    #[test]
    #[should_panic]
    fn day_out_of_range() {
        day(31);
    }

    #[test]
    fn test_weekday() {
        assert_eq!("Thứ Hai", weekday(1));
        assert_eq!("Chủ Nhật", weekday(7));
    }
}
