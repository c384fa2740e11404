use chrono::format::{parse, Parsed, StrftimeItems};

use crate::astro::{day_of_year, solar_declination, EARTH_AXIAL_TILT};
use crate::types::{AnalemmaPoint, DateRangeSelector};

/// Northern-hemisphere solstice approximations on the 365-day dial calendar.
pub const SUMMER_SOLSTICE_DAY: u32 = 172;
pub const WINTER_SOLSTICE_DAY: u32 = 355;

/// Resolve a date-range selector into one or two day-of-year intervals.
/// `WinterToSummer` wraps the calendar year and resolves to two intervals;
/// consumers must branch on the interval count.
pub fn resolve_day_range(selector: DateRangeSelector) -> Vec<(u32, u32)> {
    match selector {
        DateRangeSelector::FullYear => vec![(1, 365)],
        DateRangeSelector::SummerToWinter => vec![(SUMMER_SOLSTICE_DAY, WINTER_SOLSTICE_DAY)],
        DateRangeSelector::WinterToSummer => vec![
            (WINTER_SOLSTICE_DAY, 365),
            (1, SUMMER_SOLSTICE_DAY),
        ],
    }
}

/// Apply a date-range selector to a full-year sweep of analemma points.
///
/// The wraparound case is handled by partitioning the one sweep, not by two
/// generation passes: points land in the `day >= 355` list first, then the
/// `day <= 172` list, each sorted ascending by day so no stroke jumps across
/// the year boundary. Empty partitions are dropped.
pub fn partition_by_day_range(
    points: &[AnalemmaPoint],
    selector: DateRangeSelector,
) -> Vec<Vec<AnalemmaPoint>> {
    let ranges = resolve_day_range(selector);
    let mut partitions = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        let mut part: Vec<AnalemmaPoint> = points
            .iter()
            .filter(|p| p.day >= start && p.day <= end)
            .copied()
            .collect();
        part.sort_by_key(|p| p.day);
        if !part.is_empty() {
            partitions.push(part);
        }
    }
    partitions
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolarEvent {
    Equinox,
    SummerSolstice,
    WinterSolstice,
}

/// Parsed form of a declination mark's date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkDate {
    Event(SolarEvent),
    Calendar { day_of_year: u32 },
    Unparseable,
}

const CALENDAR_FORMATS: &[&str] = &[
    "%B %d", "%d %B", "%b %d", "%d %b", "%m/%d", "%m-%d", "%Y-%m-%d",
];

fn try_month_day(input: &str, format: &str) -> Option<(u32, u32)> {
    let mut parsed = Parsed::new();
    parse(&mut parsed, input, StrftimeItems::new(format)).ok()?;
    Some((parsed.month()?, parsed.day()?))
}

/// Parse a mark's date descriptor: a named solar event, or a calendar date
/// tried against several month/day orderings. Anything else is `Unparseable`
/// and the mark contributes no curve.
pub fn parse_mark_date(date: &str) -> MarkDate {
    let trimmed = date.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "equinox" | "vernal equinox" | "autumnal equinox" => {
            return MarkDate::Event(SolarEvent::Equinox)
        }
        "summer solstice" => return MarkDate::Event(SolarEvent::SummerSolstice),
        "winter solstice" => return MarkDate::Event(SolarEvent::WinterSolstice),
        _ => {}
    }

    let dim: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    for format in CALENDAR_FORMATS {
        if let Some((month, day)) = try_month_day(trimmed, format) {
            if (1..=12).contains(&month) && day >= 1 && day <= dim[(month - 1) as usize] {
                return MarkDate::Calendar {
                    day_of_year: day_of_year(month, day),
                };
            }
        }
    }

    log::debug!("unparseable declination mark date {trimmed:?}");
    MarkDate::Unparseable
}

/// Declination in degrees for a parsed mark date, `None` if unparseable.
pub fn mark_declination(date: &MarkDate) -> Option<f64> {
    match date {
        MarkDate::Event(SolarEvent::Equinox) => Some(0.0),
        MarkDate::Event(SolarEvent::SummerSolstice) => Some(EARTH_AXIAL_TILT),
        MarkDate::Event(SolarEvent::WinterSolstice) => Some(-EARTH_AXIAL_TILT),
        MarkDate::Calendar { day_of_year } => Some(solar_declination(*day_of_year)),
        MarkDate::Unparseable => None,
    }
}
