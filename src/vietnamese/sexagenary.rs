//! Can Chi (干支): the ten heavenly stems, twelve earthly branches and the
//! sixty-term cycle they form, for days, months, years and hours.

use std::fmt;

use crate::date::JulianDay;

/// The ten heavenly stems (Can).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Can {
    Giap,
    At,
    Binh,
    Dinh,
    Mau,
    Ky,
    Canh,
    Tan,
    Nham,
    Quy,
}

/// All ten stems in order (index 0 = Giáp).
pub const ALL_CAN: [Can; 10] = [
    Can::Giap,
    Can::At,
    Can::Binh,
    Can::Dinh,
    Can::Mau,
    Can::Ky,
    Can::Canh,
    Can::Tan,
    Can::Nham,
    Can::Quy,
];

impl Can {
    /// Stem at `index`, taken modulo 10.
    pub fn from_index(index: i64) -> Self {
        ALL_CAN[index.rem_euclid(10) as usize]
    }
    /// 0-based position in the cycle.
    pub fn index(self) -> u32 {
        self as u32
    }
    /// Vietnamese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Giap => "Giáp",
            Self::At => "Ất",
            Self::Binh => "Bính",
            Self::Dinh => "Đinh",
            Self::Mau => "Mậu",
            Self::Ky => "Kỷ",
            Self::Canh => "Canh",
            Self::Tan => "Tân",
            Self::Nham => "Nhâm",
            Self::Quy => "Quý",
        }
    }
}

/// The twelve earthly branches (Chi).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Chi {
    Ty,
    Suu,
    Dan,
    Mao,
    Thin,
    Ti,
    Ngo,
    Mui,
    Than,
    Dau,
    Tuat,
    Hoi,
}

/// All twelve branches in order (index 0 = Tý).
pub const ALL_CHI: [Chi; 12] = [
    Chi::Ty,
    Chi::Suu,
    Chi::Dan,
    Chi::Mao,
    Chi::Thin,
    Chi::Ti,
    Chi::Ngo,
    Chi::Mui,
    Chi::Than,
    Chi::Dau,
    Chi::Tuat,
    Chi::Hoi,
];

impl Chi {
    /// Branch at `index`, taken modulo 12.
    pub fn from_index(index: i64) -> Self {
        ALL_CHI[index.rem_euclid(12) as usize]
    }
    /// 0-based position in the cycle.
    pub fn index(self) -> u32 {
        self as u32
    }
    /// Vietnamese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ty => "Tý",
            Self::Suu => "Sửu",
            Self::Dan => "Dần",
            Self::Mao => "Mão",
            Self::Thin => "Thìn",
            Self::Ti => "Tỵ",
            Self::Ngo => "Ngọ",
            Self::Mui => "Mùi",
            Self::Than => "Thân",
            Self::Dau => "Dậu",
            Self::Tuat => "Tuất",
            Self::Hoi => "Hợi",
        }
    }
    /// Civil hours `(start, end)` of the two-hour window named after this
    /// branch; Tý runs from 23:00 to 01:00.
    pub fn hours(self) -> (u32, u32) {
        let i = self.index();
        ((i * 2 + 23) % 24, (i * 2 + 1) % 24)
    }
}

/// A stem-branch pair of the sixty-term cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanChi {
    pub can: Can,
    pub chi: Chi,
}

impl CanChi {
    /// Can Chi of a day. Depends on the JDN only and repeats every 60 days.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::JulianDay;
    /// use amlich::vietnamese::sexagenary::CanChi;
    ///
    /// let day = CanChi::for_day(JulianDay::from_gregorian(2024, 1, 1));
    /// assert_eq!("Giáp Tý", day.to_string());
    /// ```
    pub fn for_day(date: JulianDay) -> Self {
        let jdn = date.jdn() as i64;
        Self {
            can: Can::from_index(jdn + 9),
            chi: Chi::from_index(jdn + 1),
        }
    }
    /// Can Chi of lunar year `year`.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::vietnamese::sexagenary::CanChi;
    ///
    /// assert_eq!("Giáp Thìn", CanChi::for_year(2024).to_string());
    /// ```
    pub fn for_year(year: i32) -> Self {
        let year = year as i64;
        Self {
            can: Can::from_index(year + 6),
            chi: Chi::from_index(year + 8),
        }
    }
    /// Can Chi of lunar month `month` (`1..=12`) of lunar year `year`. A leap
    /// month takes the name of the month it repeats.
    pub fn for_month(year: i32, month: u32) -> Self {
        let (year, month) = (year as i64, month as i64);
        Self {
            can: Can::from_index(year * 12 + month + 3),
            chi: Chi::from_index(month + 1),
        }
    }
    /// Can Chi of the first hour (Tý, 23:00 to 01:00) of a day.
    pub fn first_hour(date: JulianDay) -> Self {
        Self {
            can: Can::from_index((date.jdn() as i64 - 1) * 2),
            chi: Chi::Ty,
        }
    }
    /// Position in the sixty-term cycle, numbered from 1 (Giáp Tý) to 60
    /// (Quý Hợi).
    pub fn number(&self) -> u32 {
        let (can, chi) = (self.can.index() as i64, self.chi.index() as i64);
        ((6 * can - 5 * chi).rem_euclid(60) + 1) as u32
    }
}

impl fmt::Display for CanChi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.can.name(), self.chi.name())
    }
}
