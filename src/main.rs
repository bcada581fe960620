use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use amlich::SolarDate;
use amlich::vietnamese::day_info::{DayInfo, month_grid};
use amlich::vietnamese::{self, LunarDate, Month, lunar_to_solar, solar_to_lunar};

#[derive(Parser)]
#[command(name = "amlich", about = "Vietnamese lunisolar calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lunar date of a Gregorian date
    Lunar {
        /// Gregorian date (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        date: SolarDate,
    },
    /// Gregorian date of a lunar date
    Solar {
        /// Lunar year
        year: i32,
        /// Lunar month (1-12)
        month: u32,
        /// Lunar day (1-30)
        day: u32,
        /// The leap month of that number
        #[arg(long)]
        leap: bool,
    },
    /// All almanac attributes of a Gregorian date
    Day {
        /// Gregorian date (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        date: SolarDate,
    },
    /// Solar and lunar dates of a whole Gregorian month
    Month {
        /// Gregorian year
        year: i32,
        /// Gregorian month (1-12)
        month: u32,
    },
    /// Date of Tết (lunar new year) of a lunar year
    Tet {
        /// Lunar year
        year: i32,
    },
}

fn parse_date(s: &str) -> Result<SolarDate, String> {
    // Parse "YYYY-MM-DD"
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    }
    let year: i32 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = parts[2].parse().map_err(|e| format!("{e}"))?;
    SolarDate::try_new(year, month, day).map_err(|e| e.to_string())
}

fn print_day(info: &DayInfo) {
    println!(
        "{} ({})",
        info.solar,
        vietnamese::fmt::weekday(info.day_of_week)
    );
    println!("  Âm lịch:  {}", vietnamese::fmt::lunar_date(&info.lunar));
    println!(
        "  Ngày {}, tháng {}, năm {}",
        info.day_can_chi, info.month_can_chi, info.year_can_chi
    );
    println!("  Tiết khí: {}", info.tiet_khi);
    println!("  Trực:     {}", info.truc);
    let list = |hours: &[vietnamese::almanac::HourWindow]| {
        hours
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("  Hoàng đạo: {}", list(&info.hours.auspicious));
    println!("  Hắc đạo:   {}", list(&info.hours.inauspicious));
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Lunar { date } => {
            let lunar = solar_to_lunar(date);
            println!("{lunar}  ({})", vietnamese::fmt::lunar_date(&lunar));
        }

        Commands::Solar {
            year,
            month,
            day,
            leap,
        } => {
            let lunar = match LunarDate::try_new(year, Month::new(month, leap), day) {
                Ok(lunar) => lunar,
                Err(e) => {
                    eprintln!("Invalid lunar date: {e}");
                    std::process::exit(1);
                }
            };
            match lunar_to_solar(lunar) {
                Ok(solar) => println!("{solar}"),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Day { date } => print_day(&DayInfo::new(date)),

        Commands::Month { year, month } => {
            if let Err(e) = SolarDate::try_new(year, month, 1) {
                eprintln!("Invalid month: {e}");
                std::process::exit(1);
            }
            for info in month_grid(year, month) {
                let lunar = info.lunar;
                println!(
                    "{}  {:<8} {:>2}/{:<2}{}  {}",
                    info.solar,
                    vietnamese::fmt::weekday(info.day_of_week),
                    lunar.day,
                    lunar.month.num(),
                    if lunar.is_leap_month() { "N" } else { " " },
                    info.day_can_chi
                );
            }
        }

        Commands::Tet { year } => {
            match LunarDate::try_new(year, Month::Common(1), 1).and_then(lunar_to_solar) {
                Ok(solar) => println!("{solar}"),
                Err(e) => {
                    eprintln!("Invalid year: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
