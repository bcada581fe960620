//! New moon and solar longitude series, and the month 11 anchors derived
//! from them.
//!
//! The series are truncated, but every value here only feeds a civil day
//! (UTC+7), so what matters is that each evaluation lands on the same day as
//! the classic Vietnamese almanac computation. Constants and the order of
//! operations are kept as published; do not simplify the arithmetic.

use std::f64::consts::PI;

use tracing::trace;

use super::TIME_ZONE_OFFSET_MINUTES;
use crate::date::JulianDay;
use crate::time_scales::{Tt, Ut};

/// JD of the new moon of 1900 January 1, origin of the lunation count.
pub const LUNATION_EPOCH: f64 = 2415021.076998695;
/// Mean synodic month, in days.
pub const SYNODIC_MONTH: f64 = 29.530588853;

/// Instant (UT) of the new moon with lunation number `k`, counted from the
/// new moon of 1900 January 1 (`k = 0`).
pub fn new_moon(k: i32) -> Ut {
    let k = k as f64;
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let dr = PI / 180.0;
    // mean new moon
    let mut jd1 = 2415020.75933 + 29.53058868 * k + 0.0001178 * t2 - 0.000000155 * t3;
    jd1 += 0.00033 * ((166.56 + 132.87 * t - 0.009173 * t2) * dr).sin();
    // sun's mean anomaly, moon's mean anomaly, moon's argument of latitude
    let m = 359.2242 + 29.10535608 * k - 0.0000333 * t2 - 0.00000347 * t3;
    let mpr = 306.0253 + 385.81691806 * k + 0.0107306 * t2 + 0.00001236 * t3;
    let f = 21.2964 + 390.67050646 * k - 0.0016528 * t2 - 0.00000239 * t3;
    let mut c1 = (0.1734 - 0.000393 * t) * (m * dr).sin() + 0.0021 * (2.0 * dr * m).sin();
    c1 = c1 - 0.4068 * (mpr * dr).sin() + 0.0161 * (dr * 2.0 * mpr).sin();
    c1 -= 0.0004 * (dr * 3.0 * mpr).sin();
    c1 = c1 + 0.0104 * (dr * 2.0 * f).sin() - 0.0051 * (dr * (m + mpr)).sin();
    c1 = c1 - 0.0074 * (dr * (m - mpr)).sin() + 0.0004 * (dr * (2.0 * f + m)).sin();
    c1 = c1 - 0.0004 * (dr * (2.0 * f - m)).sin() - 0.0006 * (dr * (2.0 * f + mpr)).sin();
    c1 = c1 + 0.0010 * (dr * (2.0 * f - mpr)).sin() + 0.0005 * (dr * (2.0 * mpr + m)).sin();
    Ut::convert(Tt(jd1 + c1), t)
}

/// Civil day (UTC+7) of the new moon with lunation number `k`.
///
/// # Example
///
/// ```
/// use amlich::vietnamese::ephemeris::new_moon_day;
///
/// assert_eq!((2024, 2, 10), new_moon_day(1535).gregorian());
/// ```
pub fn new_moon_day(k: i32) -> JulianDay {
    new_moon(k).date_in_timezone(TIME_ZONE_OFFSET_MINUTES)
}

/// Lunation number whose mean new moon is the last one at or before the
/// start of `date`. The true new moon may fall on either side of it.
pub fn lunation_before(date: JulianDay) -> i32 {
    ((date.jdn() as f64 - LUNATION_EPOCH) / SYNODIC_MONTH).floor() as i32
}

/// Lunation number whose new moon falls on `new_moon_day`.
pub fn lunation_of(new_moon_day: JulianDay) -> i32 {
    ((new_moon_day.jdn() as f64 - LUNATION_EPOCH) / SYNODIC_MONTH + 0.5).floor() as i32
}

/// First day of the lunar month containing `date`, i.e. the last new moon
/// day at or before it.
///
/// The true new moon of lunation [`lunation_before`]`(date)` can land up to a
/// day after `date`, in which case the month started one lunation earlier.
pub fn month_start(date: JulianDay) -> JulianDay {
    let k = lunation_before(date);
    let next = new_moon_day(k + 1);
    if next <= date {
        return next;
    }
    let start = new_moon_day(k);
    if start <= date { start } else { new_moon_day(k - 1) }
}

/// Apparent ecliptic longitude of the sun at `ut`, in radians within
/// `[0, 2π)`.
pub fn sun_longitude(ut: Ut) -> f64 {
    let t = (ut.0 - 2451545.0) / 36525.0;
    let t2 = t * t;
    let dr = PI / 180.0;
    let m = 357.52910 + 35999.05030 * t - 0.0001559 * t2 - 0.00000048 * t * t2;
    let l0 = 280.46645 + 36000.76983 * t + 0.0003032 * t2;
    let mut dl = (1.914600 - 0.004817 * t - 0.000014 * t2) * (dr * m).sin();
    dl = dl + (0.019993 - 0.000101 * t) * (dr * 2.0 * m).sin() + 0.000290 * (dr * 3.0 * m).sin();
    let l = (l0 + dl) * dr;
    l - PI * 2.0 * (l / (PI * 2.0)).floor()
}

/// Major term sector: `0..12`, each 30° of solar longitude from the March
/// equinox, read at the local midnight starting `date`.
///
/// Month numbering and leap months are decided with this one only.
pub fn major_term_sector(date: JulianDay) -> u32 {
    let l = sun_longitude(Ut::local_midnight(date, TIME_ZONE_OFFSET_MINUTES));
    (l / PI * 6.0).floor() as u32
}

/// Minor term sector: `0..24`, each 15° of solar longitude from the March
/// equinox, read at the local midnight starting `date`.
pub fn minor_term_sector(date: JulianDay) -> u32 {
    let l = sun_longitude(Ut::local_midnight(date, TIME_ZONE_OFFSET_MINUTES));
    (l / PI * 12.0).floor() as u32
}

/// First day of lunar month 11 of solar year `year`, the month containing
/// the December solstice.
///
/// # Example
///
/// ```
/// use amlich::vietnamese::ephemeris::month11;
///
/// assert_eq!((2023, 12, 13), month11(2023).gregorian());
/// ```
pub fn month11(year: i32) -> JulianDay {
    let off = JulianDay::from_gregorian(year, 12, 31).jdn() - 2415021;
    let k = (off as f64 / SYNODIC_MONTH).floor() as i32;
    let nm = new_moon_day(k);
    let sector = major_term_sector(nm);
    let nm = if sector >= 9 { new_moon_day(k - 1) } else { nm };
    trace!(year, k, sector, month11 = nm.jdn(), "month 11 located");
    nm
}

/// Offset, in lunations after the month 11 starting on `a11`, of the leap
/// month of a 13-month lunar year.
///
/// The leap month is the first one during which the sun stays in the same
/// major term sector, i.e. the first month without a major term. Only meaningful
/// when the next month 11 is more than 365 days after `a11`.
pub fn leap_month_offset(a11: JulianDay) -> i32 {
    let k = lunation_of(a11);
    let mut last = major_term_sector(new_moon_day(k + 1));
    for i in 2..14 {
        let arc = major_term_sector(new_moon_day(k + i));
        if arc == last {
            trace!(a11 = a11.jdn(), offset = i - 1, "leap month found");
            return i - 1;
        }
        last = arc;
    }
    trace!(a11 = a11.jdn(), "no repeated sector within 13 lunations");
    13
}
