//! Calendar-independant day count and Gregorian dates.

use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{Error, Result};

/// First day of the Gregorian calendar (1582-10-15). Earlier day numbers are
/// read and written in the proleptic Julian calendar.
pub const GREGORIAN_REFORM: i32 = 2299161;

/// A calendar-independant date, stored as its Julian day number (JDN).
///
/// JDN 0 is January 1, 4713 BC, proleptic Julian calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct JulianDay {
    jdn: i32,
}

impl JulianDay {
    /// Creates a `JulianDay` with a Julian day number (JDN).
    pub const fn from_jdn(jdn: i32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub const fn jdn(&self) -> i32 {
        self.jdn
    }

    /// Creates a `JulianDay` from a calendar date.
    ///
    /// Dates from 1582-10-15 on are Gregorian, earlier ones Julian. `year`
    /// is an astronomical year number, i.e. 1 BC is `0`.
    ///
    /// No validation is done; out of range months or days simply carry over.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::JulianDay;
    ///
    /// let date = JulianDay::from_gregorian(2000, 1, 1);
    /// assert_eq!(2451545, date.jdn());
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Self {
        let a = (14 - month).div_euclid(12);
        let y = year + 4800 - a;
        let m = month + 12 * a - 3;
        let jdn = day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4)
            - y.div_euclid(100)
            + y.div_euclid(400)
            - 32045;
        if jdn < GREGORIAN_REFORM {
            return Self::from_jdn(day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - 32083);
        }
        Self::from_jdn(jdn)
    }
    /// Represents the date in the Gregorian calendar (Julian calendar before
    /// the reform), in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::JulianDay;
    ///
    /// let date = JulianDay::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let jdn = self.jdn;
        let (b, c) = if jdn >= GREGORIAN_REFORM {
            let a = jdn + 32044;
            let b = (4 * a + 3).div_euclid(146097);
            (b, a - (b * 146097).div_euclid(4))
        } else {
            (0, jdn + 32082)
        };
        let d = (4 * c + 3).div_euclid(1461);
        let e = c - (1461 * d).div_euclid(4);
        let m = (5 * e + 2).div_euclid(153);
        let day = e - (153 * m + 2).div_euclid(5) + 1;
        let month = m + 3 - 12 * m.div_euclid(10);
        let year = b * 100 + d - 4800 + m.div_euclid(10);
        (year, month, day)
    }
    /// Returns the date as a [`SolarDate`].
    pub fn solar(&self) -> SolarDate {
        let (y, m, d) = self.gregorian();
        SolarDate::new(y, m as u32, d as u32)
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::JulianDay;
    ///
    /// let date = JulianDay::from_gregorian(2000, 1, 1);
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> u32 {
        (self.jdn.rem_euclid(7) + 1) as u32
    }
}

impl Add<i32> for JulianDay {
    type Output = JulianDay;
    fn add(self, rhs: i32) -> Self::Output {
        JulianDay::from_jdn(self.jdn + rhs)
    }
}
impl Sub<JulianDay> for JulianDay {
    type Output = i32;
    fn sub(self, rhs: JulianDay) -> Self::Output {
        self.jdn - rhs.jdn
    }
}

/// A Gregorian calendar date.
///
/// Fields are public and unchecked; use [`SolarDate::try_new`] to validate
/// user input against the supported range.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl SolarDate {
    /// Earliest year accepted by [`SolarDate::try_new`].
    pub const MIN_YEAR: i32 = 1900;
    /// Latest year accepted by [`SolarDate::try_new`].
    pub const MAX_YEAR: i32 = 2100;
    /// The `0/0/0` placeholder standing for "no such date".
    pub const ZERO: SolarDate = SolarDate::new(0, 0, 0);

    /// Creates a date without any checks.
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
    /// Creates a date, checking month and day against the Gregorian calendar
    /// and the year against `MIN_YEAR..=MAX_YEAR`.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::{Error, SolarDate};
    ///
    /// assert!(SolarDate::try_new(2024, 2, 29).is_ok());
    /// assert_eq!(
    ///     Err(Error::DayOutOfRange { day: 29, max: 28 }),
    ///     SolarDate::try_new(2023, 2, 29),
    /// );
    /// ```
    pub fn try_new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::YearOutOfRange(year));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::MonthOutOfRange(month));
        }
        let max = YearType::from_gregorian(year).days_in_month(month);
        if !(1..=max).contains(&day) {
            return Err(Error::DayOutOfRange { day, max });
        }
        Ok(Self::new(year, month, day))
    }
    /// Returns `true` for the [`SolarDate::ZERO`] placeholder.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
    /// Returns the Julian day number of the date.
    pub fn julian_day(&self) -> JulianDay {
        JulianDay::from_gregorian(self.year, self.month as i32, self.day as i32)
    }
}

impl From<SolarDate> for JulianDay {
    fn from(date: SolarDate) -> Self {
        date.julian_day()
    }
}
impl From<JulianDay> for SolarDate {
    fn from(date: JulianDay) -> Self {
        date.solar()
    }
}

impl fmt::Display for SolarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
    /// Number of days in `month` (`1..=12`), `0` for any other month.
    pub fn days_in_month(&self, month: u32) -> u32 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 => 28 + self.is_leap() as u32,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn it_works() {
        let date = JulianDay::from_jdn(2440588);
        assert_eq!(2440588, date.jdn());
    }

    #[test]
    fn from_gregorian() {
        for ((y, m, d), jdn) in [
            ((1970, 1, 1), 2440588),
            ((2021, 9, 8), 2459466),
            ((1900, 1, 1), 2415021),
            ((2100, 12, 31), 2488434),
            ((1582, 10, 15), 2299161),
            ((1582, 10, 4), 2299160),
        ] {
            assert_eq!(jdn, JulianDay::from_gregorian(y, m, d).jdn(), "{y:04}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn to_gregorian() {
        for (jdn, ymd) in [
            (2440588, (1970, 1, 1)),
            (2459466, (2021, 9, 8)),
            (2451545, (2000, 1, 1)),
            (2299161, (1582, 10, 15)),
            (2299160, (1582, 10, 4)),
        ] {
            assert_eq!(ymd, JulianDay::from_jdn(jdn).gregorian(), "{jdn}");
        }
    }

    #[test]
    fn to_day_of_week() {
        let date = JulianDay::from_gregorian(1970, 1, 1);
        assert_eq!(4, date.day_of_week());
        let date = JulianDay::from_gregorian(2021, 9, 8);
        assert_eq!(3, date.day_of_week());
    }

    #[test]
    fn arithmetic() {
        let date = JulianDay::from_gregorian(2024, 2, 28);
        assert_eq!(SolarDate::new(2024, 3, 1), (date + 2).solar());
        assert_eq!(SolarDate::new(2024, 2, 18), (date + -10).solar());
        assert_eq!(366, JulianDay::from_gregorian(2025, 1, 1) - JulianDay::from_gregorian(2024, 1, 1));
    }

    #[test]
    fn validation() {
        assert_eq!(Ok(SolarDate::new(1900, 1, 1)), SolarDate::try_new(1900, 1, 1));
        assert_eq!(Ok(SolarDate::new(2100, 12, 31)), SolarDate::try_new(2100, 12, 31));
        assert_eq!(Err(Error::YearOutOfRange(1899)), SolarDate::try_new(1899, 12, 31));
        assert_eq!(Err(Error::YearOutOfRange(2101)), SolarDate::try_new(2101, 1, 1));
        assert_eq!(Err(Error::MonthOutOfRange(13)), SolarDate::try_new(2000, 13, 1));
        assert_eq!(Err(Error::MonthOutOfRange(0)), SolarDate::try_new(2000, 0, 1));
        assert_eq!(
            Err(Error::DayOutOfRange { day: 31, max: 30 }),
            SolarDate::try_new(2000, 4, 31)
        );
        assert_eq!(
            Err(Error::DayOutOfRange { day: 0, max: 31 }),
            SolarDate::try_new(2000, 1, 0)
        );
    }

    #[test]
    fn iso_format() {
        assert_eq!("2021-09-08", SolarDate::new(2021, 9, 8).to_string());
        assert_eq!("0000-00-00", SolarDate::ZERO.to_string());
        assert!(SolarDate::ZERO.is_zero());
    }

    #[test]
    fn year_types() {
        use YearType::*;
        for (year, std) in [(1900, Common), (2000, Leap), (2023, Common), (2024, Leap)] {
            assert_eq!(std, YearType::from_gregorian(year), "{year}");
        }
        assert_eq!(29, Leap.days_in_month(2));
        assert_eq!(28, Common.days_in_month(2));
        assert_eq!(0, Common.days_in_month(13));
    }

    proptest! {
        #[test]
        fn jdn_inverse(jdn in 0..=3_000_000i32) {
            let date = JulianDay::from_jdn(jdn);
            let (y, m, d) = date.gregorian();
            prop_assert_eq!(jdn, JulianDay::from_gregorian(y, m, d).jdn());
        }

        #[test]
        fn jdn_monotonic(jdn in 2_415_021..=2_488_433i32) {
            let today = JulianDay::from_jdn(jdn).solar();
            let tomorrow = JulianDay::from_jdn(jdn + 1).solar();
            prop_assert!(today < tomorrow);
        }
    }
}
