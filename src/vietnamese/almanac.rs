//! Day-selection attributes: Tiết Khí (solar terms), Trực (day officers)
//! and Hoàng Đạo / Hắc Đạo hours.

use std::fmt;

use super::ephemeris;
use super::sexagenary::{ALL_CHI, Chi};
use crate::date::JulianDay;

/// The 24 solar terms, starting at the March equinox (0° of solar
/// longitude), 15° apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum TietKhi {
    XuanPhan,
    ThanhMinh,
    CocVu,
    LapHa,
    TieuMan,
    MangChung,
    HaChi,
    TieuThu,
    DaiThu,
    LapThu,
    XuThu,
    BachLo,
    ThuPhan,
    HanLo,
    SuongGiang,
    LapDong,
    TieuTuyet,
    DaiTuyet,
    DongChi,
    TieuHan,
    DaiHan,
    LapXuan,
    VuThuy,
    KinhTrap,
}

/// All 24 solar terms in order (index 0 = Xuân phân).
pub const ALL_TIET_KHI: [TietKhi; 24] = [
    TietKhi::XuanPhan,
    TietKhi::ThanhMinh,
    TietKhi::CocVu,
    TietKhi::LapHa,
    TietKhi::TieuMan,
    TietKhi::MangChung,
    TietKhi::HaChi,
    TietKhi::TieuThu,
    TietKhi::DaiThu,
    TietKhi::LapThu,
    TietKhi::XuThu,
    TietKhi::BachLo,
    TietKhi::ThuPhan,
    TietKhi::HanLo,
    TietKhi::SuongGiang,
    TietKhi::LapDong,
    TietKhi::TieuTuyet,
    TietKhi::DaiTuyet,
    TietKhi::DongChi,
    TietKhi::TieuHan,
    TietKhi::DaiHan,
    TietKhi::LapXuan,
    TietKhi::VuThuy,
    TietKhi::KinhTrap,
];

impl TietKhi {
    /// Solar term in force on `date`.
    ///
    /// The sun's longitude is read at the end of the day (the next local
    /// midnight), so a term beginning at any time during `date` is already
    /// reported for it.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::JulianDay;
    /// use amlich::vietnamese::almanac::TietKhi;
    ///
    /// let term = TietKhi::for_day(JulianDay::from_gregorian(2024, 2, 10));
    /// assert_eq!("Lập xuân", term.name());
    /// ```
    pub fn for_day(date: JulianDay) -> Self {
        ALL_TIET_KHI[ephemeris::minor_term_sector(date + 1) as usize % 24]
    }
    /// 0-based position, also the 15° sector of solar longitude.
    pub fn index(self) -> u32 {
        self as u32
    }
    /// Vietnamese name.
    pub fn name(self) -> &'static str {
        const NAMES: [&str; 24] = [
            "Xuân phân", "Thanh minh", "Cốc vũ", "Lập hạ", "Tiểu mãn", "Mang chủng", "Hạ chí",
            "Tiểu thử", "Đại thử", "Lập thu", "Xử thử", "Bạch lộ", "Thu phân", "Hàn lộ",
            "Sương giáng", "Lập đông", "Tiểu tuyết", "Đại tuyết", "Đông chí", "Tiểu hàn",
            "Đại hàn", "Lập xuân", "Vũ thủy", "Kinh trập",
        ];
        NAMES[self as usize]
    }
}

impl fmt::Display for TietKhi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The twelve day officers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Truc {
    Kien,
    Tru,
    Man,
    Binh,
    Dinh,
    Chap,
    Pha,
    Nguy,
    Thanh,
    Thu,
    Khai,
    Be,
}

/// All twelve officers in order (index 0 = Kiến).
pub const ALL_TRUC: [Truc; 12] = [
    Truc::Kien,
    Truc::Tru,
    Truc::Man,
    Truc::Binh,
    Truc::Dinh,
    Truc::Chap,
    Truc::Pha,
    Truc::Nguy,
    Truc::Thanh,
    Truc::Thu,
    Truc::Khai,
    Truc::Be,
];

impl Truc {
    /// Officer of `date`; cycles every 12 days.
    pub fn for_day(date: JulianDay) -> Self {
        ALL_TRUC[(date.jdn() + 4).rem_euclid(12) as usize]
    }
    /// Vietnamese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Kien => "Kiến",
            Self::Tru => "Trừ",
            Self::Man => "Mãn",
            Self::Binh => "Bình",
            Self::Dinh => "Định",
            Self::Chap => "Chấp",
            Self::Pha => "Phá",
            Self::Nguy => "Nguy",
            Self::Thanh => "Thành",
            Self::Thu => "Thu",
            Self::Khai => "Khai",
            Self::Be => "Bế",
        }
    }
}

impl fmt::Display for Truc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hoàng Đạo patterns by branch of the day, Tý first. Bit 11 is the Tý hour,
/// bit 0 the Hợi hour; a set bit marks an auspicious hour. Days six branches
/// apart share a pattern.
const HOUR_PATTERNS: [u16; 12] = [
    0b1101_0010_1100, // Tý
    0b0011_0100_1011, // Sửu
    0b1100_1101_0010, // Dần
    0b1011_0011_0100, // Mão
    0b0010_1100_1101, // Thìn
    0b0100_1011_0011, // Tỵ
    0b1101_0010_1100, // Ngọ
    0b0011_0100_1011, // Mùi
    0b1100_1101_0010, // Thân
    0b1011_0011_0100, // Dậu
    0b0010_1100_1101, // Tuất
    0b0100_1011_0011, // Hợi
];

/// One of the twelve two-hour windows of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HourWindow {
    pub chi: Chi,
    pub auspicious: bool,
}

impl HourWindow {
    /// Civil hours `(start, end)` of the window, e.g. `(23, 1)` for Tý.
    pub fn time_range(&self) -> (u32, u32) {
        self.chi.hours()
    }
}

impl fmt::Display for HourWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start, end) = self.time_range();
        write!(f, "{} ({}-{})", self.chi.name(), start, end)
    }
}

/// The hours of a day split into Hoàng Đạo (auspicious) and Hắc Đạo
/// (inauspicious), each in Tý-to-Hợi order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HourWindows {
    pub auspicious: Vec<HourWindow>,
    pub inauspicious: Vec<HourWindow>,
}

impl HourWindows {
    /// Classifies the hours of `date`.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::JulianDay;
    /// use amlich::vietnamese::almanac::HourWindows;
    ///
    /// let hours = HourWindows::for_day(JulianDay::from_gregorian(2024, 1, 1));
    /// let names: Vec<_> = hours.auspicious.iter().map(|w| w.chi.name()).collect();
    /// assert_eq!(vec!["Tý", "Sửu", "Mão", "Ngọ", "Thân", "Dậu"], names);
    /// ```
    pub fn for_day(date: JulianDay) -> Self {
        let pattern = HOUR_PATTERNS[(date.jdn() + 1).rem_euclid(12) as usize];
        let (auspicious, inauspicious) = ALL_CHI
            .iter()
            .map(|&chi| HourWindow {
                chi,
                auspicious: pattern & (1 << (11 - chi.index())) != 0,
            })
            .partition(|w| w.auspicious);
        Self {
            auspicious,
            inauspicious,
        }
    }
}
