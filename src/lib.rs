//! Conversion between the Gregorian calendar and the Vietnamese lunisolar
//! calendar (âm lịch), with the day attributes of the traditional almanac.
//!
//! Everything is computed on demand from a date with pure functions: Julian
//! day numbers, new moons and solar longitudes from truncated series, then
//! month numbering and leap months. Vietnamese civil time (UTC+7) is fixed.
//!
//! # Examples
//!
//! Basic usage with [`JulianDay`]:
//!
//! ```
//! use amlich::JulianDay;
//!
//! let date = JulianDay::from_gregorian(2000, 1, 1);
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Lunar calendar:
//!
//! ```
//! use amlich::SolarDate;
//! use amlich::vietnamese::{lunar_to_solar, solar_to_lunar, LunarDate, Month::*};
//!
//! let date = SolarDate::new(2000, 1, 1);
//! let lunar = solar_to_lunar(date);
//!
//! assert_eq!(LunarDate::new(1999, Common(11), 25), lunar);
//! assert_eq!(Ok(date), lunar_to_solar(lunar));
//! ```
//!
//! Almanac attributes:
//!
//! ```
//! use amlich::JulianDay;
//! use amlich::vietnamese::almanac::{TietKhi, Truc};
//! use amlich::vietnamese::sexagenary::CanChi;
//!
//! let date = JulianDay::from_gregorian(2024, 1, 1);
//!
//! assert_eq!("Giáp Tý", CanChi::for_day(date).to_string());
//! assert_eq!(TietKhi::DongChi, TietKhi::for_day(date));
//! assert_eq!(Truc::Binh, Truc::for_day(date));
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for all value types.
//! - `cli`: the `amlich` command line tool.

pub mod date;
pub mod error;
pub mod time_scales;
pub mod vietnamese;

pub use date::{JulianDay, SolarDate, YearType};
pub use error::{Error, Result};
