//! Vietnamese lunisolar calendar (âm lịch)
//!
//! Months begin on the civil day (UTC+7) of the new moon. Month 11 is the
//! month containing the December solstice; a lunar year with 13 months
//! repeats the first month that contains no major solar term. New moons and
//! solar longitudes are computed with the truncated series in
//! [`ephemeris`], so results match the traditional Vietnamese almanac
//! computation day for day over 1900–2100.

use tracing::{debug, trace};

use crate::date::{JulianDay, SolarDate};
use crate::error::{Error, Result};

pub mod almanac;
pub mod day_info;
pub mod ephemeris;
pub mod fmt;
pub mod sexagenary;

/// Offset of Vietnamese civil time (UTC+7), in minutes east of UTC.
pub const TIME_ZONE_OFFSET_MINUTES: i32 = 420;

/// A lunar month, `Common` for a regular month, `Leap` for the repeated
/// month following the regular one with the same number.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// Creates a month from its number and leap flag.
    pub fn new(num: u32, is_leap: bool) -> Self {
        if is_leap { Self::Leap(num) } else { Self::Common(num) }
    }
    /// Returns the month number, regardless of leap or not.
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// `true` for a leap month, `false` for a regular one.
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// Returns the Vietnamese name of the month, see [`fmt::month`].
    pub fn name(&self) -> String {
        fmt::month(*self)
    }
}

/// A date in the Vietnamese lunisolar calendar.
///
/// `year` is the lunar year, numbered after the Gregorian year in which it
/// mostly falls: months 11 and 12 straddling the new Gregorian year still
/// belong to the previous lunar year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarDate {
    pub year: i32,
    pub month: Month,
    pub day: u32,
}

impl LunarDate {
    /// Creates a lunar date without any checks.
    pub const fn new(year: i32, month: Month, day: u32) -> Self {
        Self { year, month, day }
    }
    /// Creates a lunar date, checking `1 <= day <= 30`, `1 <= month <= 12`
    /// and the year against the supported range.
    ///
    /// Whether the month really has 30 days, or whether a leap month exists,
    /// is only known after conversion; see [`LunarDate::month_length`] and
    /// [`lunar_to_solar`].
    pub fn try_new(year: i32, month: Month, day: u32) -> Result<Self> {
        if !(SolarDate::MIN_YEAR..=SolarDate::MAX_YEAR).contains(&year) {
            return Err(Error::YearOutOfRange(year));
        }
        if !(1..=12).contains(&month.num()) {
            return Err(Error::MonthOutOfRange(month.num()));
        }
        if !(1..=30).contains(&day) {
            return Err(Error::DayOutOfRange { day, max: 30 });
        }
        Ok(Self::new(year, month, day))
    }
    /// `true` if the date lies in a leap month.
    pub fn is_leap_month(&self) -> bool {
        self.month.is_leap()
    }
    /// Number of days (29 or 30) of the month of this date, `None` if the
    /// lunar year has no such month.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::vietnamese::{LunarDate, Month::*};
    ///
    /// assert_eq!(Some(29), LunarDate::new(2023, Leap(2), 1).month_length());
    /// assert_eq!(None, LunarDate::new(2023, Leap(3), 1).month_length());
    /// ```
    pub fn month_length(&self) -> Option<u32> {
        let annus = if self.month.num() >= 11 { self.year + 1 } else { self.year };
        Annus::new(annus).month_length(self.month)
    }
    /// Converts to the Gregorian calendar, see [`lunar_to_solar`].
    pub fn to_solar(&self) -> Result<SolarDate> {
        lunar_to_solar(*self)
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month.num(), self.year)?;
        if self.month.is_leap() {
            f.write_str(" (nhuận)")?;
        }
        Ok(())
    }
}

/// Converts a Gregorian date into the lunar calendar.
///
/// Total over the supported range; no validation is done.
///
/// # Example
///
/// ```
/// use amlich::SolarDate;
/// use amlich::vietnamese::{solar_to_lunar, LunarDate, Month::*};
///
/// let tet = solar_to_lunar(SolarDate::new(2024, 2, 10));
/// assert_eq!(LunarDate::new(2024, Common(1), 1), tet);
/// ```
pub fn solar_to_lunar(date: SolarDate) -> LunarDate {
    let yy = date.year;
    let day = date.julian_day();
    let month_start = ephemeris::month_start(day);
    let a11 = ephemeris::month11(yy);
    let (mut year, a11, b11) = if a11 >= month_start {
        (yy, ephemeris::month11(yy - 1), a11)
    } else {
        (yy + 1, a11, ephemeris::month11(yy + 1))
    };
    let diff = (month_start - a11).div_euclid(29);
    let mut month = diff + 11;
    let mut is_leap = false;
    if b11 - a11 > 365 {
        let leap_off = ephemeris::leap_month_offset(a11);
        if diff >= leap_off {
            month = diff + 10;
            is_leap = diff == leap_off;
        }
    }
    if month > 12 {
        month -= 12;
    }
    if month >= 11 && diff < 4 {
        year -= 1;
    }
    let lunar = LunarDate::new(
        year,
        Month::new(month as u32, is_leap),
        (day - month_start + 1) as u32,
    );
    trace!(%date, %lunar, "solar to lunar");
    lunar
}

/// Converts a lunar date into the Gregorian calendar.
///
/// Asking for a leap month that the lunar year does not have is an error. In
/// years without a leap month the leap flag is ignored.
///
/// A day beyond the real length of the month is not rejected and simply
/// runs into the following month; validate with
/// [`LunarDate::month_length`] when that matters.
///
/// # Example
///
/// ```
/// use amlich::{Error, SolarDate};
/// use amlich::vietnamese::{lunar_to_solar, LunarDate, Month::*};
///
/// let date = lunar_to_solar(LunarDate::new(2023, Leap(2), 1));
/// assert_eq!(Ok(SolarDate::new(2023, 3, 22)), date);
///
/// let date = lunar_to_solar(LunarDate::new(2023, Leap(3), 1));
/// assert_eq!(Err(Error::NotLeapMonth { month: 3, year: 2023 }), date);
/// ```
pub fn lunar_to_solar(date: LunarDate) -> Result<SolarDate> {
    let LunarDate { year, month, day } = date;
    let num = month.num() as i32;
    let (a11, b11) = if num < 11 {
        (ephemeris::month11(year - 1), ephemeris::month11(year))
    } else {
        (ephemeris::month11(year), ephemeris::month11(year + 1))
    };
    let k = ephemeris::lunation_of(a11);
    let mut off = (num - 11).rem_euclid(12);
    if b11 - a11 > 365 {
        let leap_off = ephemeris::leap_month_offset(a11);
        if month.is_leap() && month.num() != month_number(leap_off - 1) {
            debug!(%date, leap_month = month_number(leap_off - 1), "no such leap month");
            return Err(Error::NotLeapMonth {
                month: month.num(),
                year,
            });
        }
        if month.is_leap() || off >= leap_off {
            off += 1;
        }
    }
    let start = ephemeris::new_moon_day(k + off);
    let solar = (start + (day as i32 - 1)).solar();
    trace!(%date, %solar, "lunar to solar");
    Ok(solar)
}

/// Like [`lunar_to_solar`], but reports a missing leap month with the
/// [`SolarDate::ZERO`] placeholder instead of an error.
pub fn lunar_to_solar_or_zero(date: LunarDate) -> SolarDate {
    lunar_to_solar(date).unwrap_or(SolarDate::ZERO)
}

/// Number of the regular month starting `off` lunations after month 11.
fn month_number(off: i32) -> u32 {
    ((off + 10).rem_euclid(12) + 1) as u32
}

/// First Gregorian date on or after `from` falling on lunar `day/month`
/// (regular month). Years in which that month has fewer than `day` days are
/// skipped, so day 30 only lands on a 30-day month.
///
/// Fails if `month` or `day` is out of range, or if there is no such date
/// up to [`SolarDate::MAX_YEAR`].
///
/// # Example
///
/// ```
/// use amlich::SolarDate;
/// use amlich::vietnamese::next_lunar_date;
///
/// // Mid-Autumn festival
/// let date = next_lunar_date(8, 15, SolarDate::new(2024, 1, 1));
/// assert_eq!(Ok(SolarDate::new(2024, 9, 17)), date);
/// ```
pub fn next_lunar_date(month: u32, day: u32, from: SolarDate) -> Result<SolarDate> {
    LunarDate::try_new(SolarDate::MIN_YEAR, Month::Common(month), day)?;
    let from_day = from.julian_day();
    let mut year = solar_to_lunar(from).year;
    while year <= SolarDate::MAX_YEAR {
        let date = LunarDate::new(year, Month::Common(month), day);
        if date.month_length().is_some_and(|len| len >= day)
            && let Ok(solar) = lunar_to_solar(date)
            && solar.julian_day() >= from_day
        {
            return Ok(solar);
        }
        year += 1;
    }
    Err(Error::YearOutOfRange(year))
}

/// First day of the next lunar year (Tết Nguyên Đán) on or after `from`.
///
/// # Example
///
/// ```
/// use amlich::SolarDate;
/// use amlich::vietnamese::next_lunar_new_year;
///
/// let tet = next_lunar_new_year(SolarDate::new(2024, 3, 1));
/// assert_eq!(Ok(SolarDate::new(2025, 1, 29)), tet);
/// ```
pub fn next_lunar_new_year(from: SolarDate) -> Result<SolarDate> {
    next_lunar_date(1, 1, from)
}

/// A lunar year counted from solstice to solstice: from the month 11
/// containing one December solstice up to the month before the next month
/// 11 (month 10, or a leap month following it).
///
/// `annus` is the Gregorian year of the second solstice, so the months 11
/// and 12 at the start belong to lunar year `annus - 1` and the rest to
/// lunar year `annus`.
///
/// # Example
///
/// ```
/// use amlich::JulianDay;
/// use amlich::vietnamese::{Annus, LunarDate, Month::*};
///
/// let date = JulianDay::from_gregorian(2000, 1, 1);
/// let annus = Annus::from_date(date);
///
/// assert_eq!(Ok(LunarDate::new(1999, Common(11), 25)), annus.ymd_for(date));
/// ```
#[derive(Debug, Clone)]
pub struct Annus {
    /// Gregorian year of the closing solstice.
    pub annus: i32,
    /// Every month start, including the next month 11 marking the end.
    pub months: Vec<NewMoon>,
}
/// The first day of a lunar month.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NewMoon {
    pub month: Month,
    pub date: JulianDay,
}

impl Annus {
    /// Computes the lunar year closing with month 11 of Gregorian year
    /// `annus`.
    pub fn new(annus: i32) -> Self {
        let a11 = ephemeris::month11(annus - 1);
        let b11 = ephemeris::month11(annus);
        let k = ephemeris::lunation_of(a11);
        let leap_off = (b11 - a11 > 365).then(|| ephemeris::leap_month_offset(a11));
        let count = 12 + leap_off.is_some() as i32;
        let months = (0..=count)
            .map(|off| {
                let month = match leap_off {
                    Some(leap) if off == leap => Month::Leap(month_number(off - 1)),
                    Some(leap) if off > leap => Month::Common(month_number(off - 1)),
                    _ => Month::Common(month_number(off)),
                };
                NewMoon {
                    month,
                    date: ephemeris::new_moon_day(k + off),
                }
            })
            .collect();
        Annus { annus, months }
    }
    /// Gets the lunar year containing `date`.
    pub fn from_date(date: JulianDay) -> Self {
        let mut y = date.gregorian().0;
        loop {
            let annus = Self::new(y);
            if date < annus.begin() {
                y -= 1;
            } else if date >= annus.end() {
                y += 1;
            } else {
                return annus;
            }
        }
    }
    /// First day of the lunar year (first day of month 11).
    pub fn begin(&self) -> JulianDay {
        self.months[0].date
    }
    /// Day after the last day of the lunar year.
    pub fn end(&self) -> JulianDay {
        self.months[self.months.len() - 1].date
    }
    /// Number of the leap month, if the year has one.
    pub fn leap_month(&self) -> Option<u32> {
        self.months
            .iter()
            .find(|m| m.month.is_leap())
            .map(|m| m.month.num())
    }
    /// First day of `month`, `None` if there is no such month this year.
    pub fn first_day(&self, month: Month) -> Option<JulianDay> {
        self.position(month).map(|i| self.months[i].date)
    }
    /// Number of days (29 or 30) of `month`, `None` if there is no such
    /// month this year.
    pub fn month_length(&self, month: Month) -> Option<u32> {
        self.position(month)
            .map(|i| (self.months[i + 1].date - self.months[i].date) as u32)
    }
    fn position(&self, month: Month) -> Option<usize> {
        self.months[..self.months.len() - 1]
            .iter()
            .position(|m| m.month == month)
    }

    /// Gets the lunar date of `date` within this year.
    ///
    /// If `date` is not in this year, reports `Err` telling whether it is
    /// before or after.
    pub fn ymd_for(&self, date: JulianDay) -> std::result::Result<LunarDate, OtherAnnus> {
        if date < self.begin() {
            return Err(OtherAnnus::Before);
        } else if date >= self.end() {
            return Err(OtherAnnus::After);
        }
        let m = self.months[self.months.partition_point(|m| m.date <= date) - 1];
        let year = if m.month.num() >= 11 {
            self.annus - 1
        } else {
            self.annus
        };
        Ok(LunarDate::new(year, m.month, (date - m.date + 1) as u32))
    }
}

/// Tells that a date is not within a lunar year, and on which side.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OtherAnnus {
    Before,
    After,
}

#[cfg(test)]
mod tests {
    use super::*;
    use Month::*;

    fn solar(y: i32, m: u32, d: u32) -> SolarDate {
        SolarDate::new(y, m, d)
    }

    #[test]
    fn lunar_new_years() {
        for (year, (y, m, d)) in [
            (1985, (1985, 1, 21)),
            (2007, (2007, 2, 17)),
            (2017, (2017, 1, 28)),
            (2020, (2020, 1, 25)),
            (2021, (2021, 2, 12)),
            (2022, (2022, 2, 1)),
            (2023, (2023, 1, 22)),
            (2024, (2024, 2, 10)),
            (2025, (2025, 1, 29)),
        ] {
            let tet = LunarDate::new(year, Common(1), 1);
            assert_eq!(tet, solar_to_lunar(solar(y, m, d)), "{year}");
            assert_eq!(Ok(solar(y, m, d)), lunar_to_solar(tet), "{year}");
        }
    }

    #[test]
    fn dates() {
        for ((y, m, d), std) in [
            ((2000, 1, 1), LunarDate::new(1999, Common(11), 25)),
            ((2024, 2, 9), LunarDate::new(2023, Common(12), 30)),
            ((2023, 1, 21), LunarDate::new(2022, Common(12), 30)),
            ((2023, 3, 21), LunarDate::new(2023, Common(2), 30)),
            ((2023, 3, 22), LunarDate::new(2023, Leap(2), 1)),
            ((2023, 4, 20), LunarDate::new(2023, Common(3), 1)),
            ((2017, 7, 23), LunarDate::new(2017, Leap(6), 1)),
            ((2020, 5, 23), LunarDate::new(2020, Leap(4), 1)),
            ((2024, 9, 17), LunarDate::new(2024, Common(8), 15)),
            ((2054, 5, 7), LunarDate::new(2054, Common(3), 30)),
            ((2054, 5, 8), LunarDate::new(2054, Common(4), 1)),
            ((2062, 4, 9), LunarDate::new(2062, Common(2), 30)),
            ((2062, 4, 10), LunarDate::new(2062, Common(3), 1)),
        ] {
            assert_eq!(std, solar_to_lunar(solar(y, m, d)), "{y:04}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn leap_requests() {
        let leap2 = lunar_to_solar(LunarDate::new(2023, Leap(2), 1));
        assert_eq!(Ok(solar(2023, 3, 22)), leap2);
        let leap3 = LunarDate::new(2023, Leap(3), 1);
        assert_eq!(
            Err(Error::NotLeapMonth { month: 3, year: 2023 }),
            lunar_to_solar(leap3)
        );
        assert_eq!(SolarDate::ZERO, lunar_to_solar_or_zero(leap3));
        // 2024 has no leap month: the flag is ignored
        assert_eq!(
            lunar_to_solar(LunarDate::new(2024, Common(3), 1)),
            lunar_to_solar(LunarDate::new(2024, Leap(3), 1))
        );
    }

    #[test]
    fn day_overflow() {
        // 2/2023 has 30 days, leap 2/2023 has 29
        assert_eq!(
            Ok(solar(2023, 3, 22)),
            lunar_to_solar(LunarDate::new(2023, Common(2), 31))
        );
        assert_eq!(
            Ok(solar(2023, 4, 20)),
            lunar_to_solar(LunarDate::new(2023, Leap(2), 30))
        );
    }

    #[test]
    fn validation() {
        assert!(LunarDate::try_new(2023, Leap(2), 30).is_ok());
        assert_eq!(
            Err(Error::DayOutOfRange { day: 31, max: 30 }),
            LunarDate::try_new(2023, Common(1), 31)
        );
        assert_eq!(
            Err(Error::MonthOutOfRange(13)),
            LunarDate::try_new(2023, Common(13), 1)
        );
        assert_eq!(
            Err(Error::YearOutOfRange(2101)),
            LunarDate::try_new(2101, Common(1), 1)
        );
    }

    #[test]
    fn festivals() {
        assert_eq!(Ok(solar(2024, 2, 10)), next_lunar_new_year(solar(2024, 2, 10)));
        assert_eq!(Ok(solar(2025, 1, 29)), next_lunar_new_year(solar(2024, 2, 11)));
        assert_eq!(Ok(solar(2024, 2, 10)), next_lunar_new_year(solar(2023, 6, 1)));
        // Hùng Kings' day, 10/3
        assert_eq!(Ok(solar(2024, 4, 18)), next_lunar_date(3, 10, solar(2024, 1, 1)));
    }

    #[test]
    fn festival_on_short_month() {
        // 1/2024 has 29 days, 1/2025 has 30
        assert_eq!(Some(29), LunarDate::new(2024, Common(1), 1).month_length());
        assert_eq!(Ok(solar(2024, 3, 10)), lunar_to_solar(LunarDate::new(2024, Common(1), 30)));
        assert_eq!(Ok(solar(2025, 2, 27)), next_lunar_date(1, 30, solar(2024, 1, 1)));
        assert_eq!(
            Err(Error::DayOutOfRange { day: 31, max: 30 }),
            next_lunar_date(1, 31, solar(2024, 1, 1))
        );
        assert_eq!(
            Err(Error::YearOutOfRange(2101)),
            next_lunar_new_year(solar(2100, 6, 1))
        );
    }

    #[test]
    fn annus_months() {
        let stds = [
            (Common(11), "2022-11-24"),
            (Common(12), "2022-12-23"),
            (Common(1), "2023-01-22"),
            (Common(2), "2023-02-20"),
            (Leap(2), "2023-03-22"),
            (Common(3), "2023-04-20"),
        ];
        let annus = Annus::new(2023);
        assert_eq!(14, annus.months.len());
        for (std, month) in stds.iter().zip(&annus.months) {
            assert_eq!(std.0, month.month);
            assert_eq!(std.1, month.date.solar().to_string());
        }
        assert_eq!(Common(11), annus.months[13].month);
        assert_eq!(ephemeris::month11(2023), annus.end());
        assert_eq!(Some(2), annus.leap_month());
        assert_eq!(Some(30), annus.month_length(Common(2)));
        assert_eq!(Some(29), annus.month_length(Leap(2)));
        assert_eq!(None, annus.month_length(Leap(3)));
    }

    #[test]
    fn leap_months() {
        for (annus, std) in [
            (2017, Some(6)),
            (2020, Some(4)),
            (2023, Some(2)),
            (2024, None),
            (2025, Some(6)),
        ] {
            assert_eq!(std, Annus::new(annus).leap_month(), "{annus}");
        }
        assert_eq!(13, Annus::new(2024).months.len());
    }

    #[test]
    fn annus_dates() {
        use OtherAnnus::*;
        let annus = Annus::new(2017);
        for ((y, m, d), std) in [
            ((2016, 11, 29), Ok(LunarDate::new(2016, Common(11), 1))),
            ((2017, 1, 27), Ok(LunarDate::new(2016, Common(12), 30))),
            ((2017, 1, 28), Ok(LunarDate::new(2017, Common(1), 1))),
            ((2017, 7, 22), Ok(LunarDate::new(2017, Common(6), 29))),
            ((2017, 7, 23), Ok(LunarDate::new(2017, Leap(6), 1))),
            ((2016, 11, 28), Err(Before)),
            ((2017, 12, 18), Err(After)),
        ] {
            assert_eq!(std, annus.ymd_for(JulianDay::from_gregorian(y, m, d)));
        }
    }

    #[test]
    fn annus_agrees_with_conversion() {
        let annus = Annus::new(2023);
        let mut date = annus.begin();
        while date < annus.end() {
            assert_eq!(Ok(solar_to_lunar(date.solar())), annus.ymd_for(date));
            date = date + 1;
        }
        assert_eq!(2023, Annus::from_date(JulianDay::from_gregorian(2023, 6, 1)).annus);
        assert_eq!(2024, Annus::from_date(JulianDay::from_gregorian(2023, 12, 20)).annus);
        assert_eq!(2023, Annus::from_date(JulianDay::from_gregorian(2022, 11, 24)).annus);
    }

    #[test]
    fn display() {
        assert_eq!("1/1/2024", LunarDate::new(2024, Common(1), 1).to_string());
        assert_eq!("1/2/2023 (nhuận)", LunarDate::new(2023, Leap(2), 1).to_string());
    }
}
