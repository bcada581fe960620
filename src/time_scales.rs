//! Deals with the two time scales the calendar series work in: dynamical
//! time, in which the lunar phase series is expressed, and universal time,
//! which decides the civil date.
//!
//! Both are represented as Julian dates (JD), i.e. a day count starting at
//! noon, so a civil midnight sits on `x.5`.

use crate::date::JulianDay;

/// [Terrestrial time](https://en.wikipedia.org/wiki/Terrestrial_Time),
/// represented in Julian date (JD).
///
/// The mean lunar phase series yields instants on this scale; they must be
/// converted to [`Ut`] before taking the civil date.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tt(pub f64);

/// [Universal time](https://en.wikipedia.org/wiki/Universal_Time),
/// represented in Julian date (JD).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ut(pub f64);

impl Ut {
    /// Converts a TT instant into UT by subtracting ΔT.
    ///
    /// `centuries` is the time of the instant in Julian centuries since
    /// 1900 January 0.5, which is what [`delta_t`] is fitted against.
    pub fn convert(tt: Tt, centuries: f64) -> Self {
        Ut(tt.0 - delta_t(centuries))
    }
    /// Returns the UT instant of the local midnight starting `date`, in a
    /// timezone ahead (east) of UTC by `tz_offset_minutes` minutes.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::JulianDay;
    /// use amlich::time_scales::Ut;
    ///
    /// let ut = Ut::local_midnight(JulianDay::from_jdn(2451545), 0);
    /// assert_eq!(2451544.5, ut.0);
    /// ```
    pub fn local_midnight(date: JulianDay, tz_offset_minutes: i32) -> Self {
        Ut(date.jdn() as f64 - 0.5 - tz_offset_minutes as f64 / 1440.0)
    }
    /// Returns the date at the time point in timezone ahead (east) of UTC by
    /// `tz_offset_minutes` minutes.
    ///
    /// For Vietnam (UTC+7), `tz_offset_minutes` should be +420.
    ///
    /// The day is `floor(jd + 0.5 + tz / 24h)`, evaluated left to right; new
    /// moon days depend on this exact rounding.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::time_scales::Ut;
    ///
    /// let ut = Ut(2451544.8); // 2000-01-01T07:12Z
    /// assert_eq!((2000, 1, 1), ut.date_in_timezone(420).gregorian());
    /// ```
    pub fn date_in_timezone(&self, tz_offset_minutes: i32) -> JulianDay {
        let jdn = (self.0 + 0.5 + tz_offset_minutes as f64 / 1440.0).floor();
        JulianDay::from_jdn(jdn as i32)
    }
}

/// ΔT = TT − UT in days, as a polynomial in `t`, Julian centuries since
/// 1900 January 0.5.
///
/// Two fits are used: one for dates before about AD 800 (`t < -11`), one for
/// everything later.
pub fn delta_t(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    if t < -11.0 {
        0.001 + 0.000839 * t + 0.0002261 * t2 - 0.00000845 * t3 - 0.000000081 * t * t3
    } else {
        -0.000278 + 0.000265 * t + 0.000262 * t2
    }
}
