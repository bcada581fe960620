//! Everything shown for one day of a calendar page.

use super::almanac::{HourWindows, TietKhi, Truc};
use super::sexagenary::CanChi;
use super::{LunarDate, solar_to_lunar};
use crate::date::{JulianDay, SolarDate, YearType};

/// Solar and lunar dates of a day with its almanac attributes.
///
/// Each call recomputes everything; callers rendering the same days
/// repeatedly should keep the results.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayInfo {
    pub solar: SolarDate,
    pub julian_day: JulianDay,
    /// ISO day of week, `1..=7` for Monday through Sunday.
    pub day_of_week: u32,
    pub lunar: LunarDate,
    pub day_can_chi: CanChi,
    pub month_can_chi: CanChi,
    pub year_can_chi: CanChi,
    pub tiet_khi: TietKhi,
    pub truc: Truc,
    pub hours: HourWindows,
}

impl DayInfo {
    /// Computes the attributes of `solar`.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::SolarDate;
    /// use amlich::vietnamese::day_info::DayInfo;
    ///
    /// let info = DayInfo::new(SolarDate::new(2024, 2, 10));
    /// assert_eq!("1/1/2024", info.lunar.to_string());
    /// assert_eq!("Giáp Thìn", info.year_can_chi.to_string());
    /// assert_eq!("Bính Dần", info.month_can_chi.to_string());
    /// ```
    pub fn new(solar: SolarDate) -> Self {
        let julian_day = solar.julian_day();
        let lunar = solar_to_lunar(solar);
        Self {
            solar,
            julian_day,
            day_of_week: julian_day.day_of_week(),
            lunar,
            day_can_chi: CanChi::for_day(julian_day),
            month_can_chi: CanChi::for_month(lunar.year, lunar.month.num()),
            year_can_chi: CanChi::for_year(lunar.year),
            tiet_khi: TietKhi::for_day(julian_day),
            truc: Truc::for_day(julian_day),
            hours: HourWindows::for_day(julian_day),
        }
    }
}

/// One [`DayInfo`] for every day of Gregorian `month` in `year`; empty if
/// `month` is not in `1..=12`.
pub fn month_grid(year: i32, month: u32) -> Vec<DayInfo> {
    let days = YearType::from_gregorian(year).days_in_month(month);
    (1..=days)
        .map(|day| DayInfo::new(SolarDate::new(year, month, day)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vietnamese::Month;

    #[test]
    fn new_year_day() {
        let info = DayInfo::new(SolarDate::new(2024, 2, 10));
        assert_eq!(2460351, info.julian_day.jdn());
        assert_eq!(6, info.day_of_week);
        assert_eq!(LunarDate::new(2024, Month::Common(1), 1), info.lunar);
        assert_eq!("Giáp Thìn", info.day_can_chi.to_string());
        assert_eq!(TietKhi::LapXuan, info.tiet_khi);
        assert_eq!(6, info.hours.auspicious.len());
    }

    #[test]
    fn leap_month_names() {
        let info = DayInfo::new(SolarDate::new(2023, 3, 22));
        assert!(info.lunar.is_leap_month());
        assert_eq!(CanChi::for_month(2023, 2), info.month_can_chi);
    }

    #[test]
    fn grid() {
        let grid = month_grid(2024, 2);
        assert_eq!(29, grid.len());
        assert_eq!(SolarDate::new(2024, 2, 1), grid[0].solar);
        assert_eq!(LunarDate::new(2024, Month::Common(1), 1), grid[9].lunar);
        assert_eq!(LunarDate::new(2023, Month::Common(12), 30), grid[8].lunar);
        for pair in grid.windows(2) {
            assert_eq!(1, pair[1].julian_day - pair[0].julian_day);
        }
        assert!(month_grid(2024, 13).is_empty());
    }
}
