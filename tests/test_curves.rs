use gnomonics::astro::solar_position;
use gnomonics::curves::{generate_analemma, generate_declination_curve};
use gnomonics::date_range::*;
use gnomonics::types::{DateRangeSelector, DialConfig, Location, Orientation, TimeWindow};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn fort_collins() -> Location {
    Location {
        latitude: 40.5853,
        longitude: -105.0844,
        tz_meridian: -105.0,
    }
}

fn horizontal_dial() -> DialConfig {
    DialConfig {
        orientation: Orientation::Horizontal,
        gnomon_height: 100.0,
    }
}

// ── DayRangeResolution ──

#[test]
fn test_resolve_day_range_single_intervals() {
    assert_eq!(
        resolve_day_range(DateRangeSelector::FullYear),
        vec![(1, 365)]
    );
    assert_eq!(
        resolve_day_range(DateRangeSelector::SummerToWinter),
        vec![(172, 355)]
    );
}

#[test]
fn test_resolve_day_range_wraparound() {
    assert_eq!(
        resolve_day_range(DateRangeSelector::WinterToSummer),
        vec![(355, 365), (1, 172)]
    );
}

// ── MarkDateParsing ──

#[test]
fn test_parse_named_events() {
    assert_eq!(
        parse_mark_date("Equinox"),
        MarkDate::Event(SolarEvent::Equinox)
    );
    assert_eq!(
        parse_mark_date("vernal equinox"),
        MarkDate::Event(SolarEvent::Equinox)
    );
    assert_eq!(
        parse_mark_date("Summer Solstice"),
        MarkDate::Event(SolarEvent::SummerSolstice)
    );
    assert_eq!(
        parse_mark_date("  winter solstice "),
        MarkDate::Event(SolarEvent::WinterSolstice)
    );
}

#[test]
fn test_parse_calendar_orderings() {
    // March 12 = day 71, however the month and day are spelled.
    for s in ["March 12", "12 March", "Mar 12", "12 Mar", "3/12", "03-12", "2024-03-12"] {
        assert_eq!(
            parse_mark_date(s),
            MarkDate::Calendar { day_of_year: 71 },
            "input {:?}",
            s
        );
    }
}

#[test]
fn test_parse_rejects_garbage() {
    assert_eq!(parse_mark_date("not a date"), MarkDate::Unparseable);
    assert_eq!(parse_mark_date(""), MarkDate::Unparseable);
    assert_eq!(parse_mark_date("13/45"), MarkDate::Unparseable);
}

#[test]
fn test_mark_declination_values() {
    assert_eq!(
        mark_declination(&MarkDate::Event(SolarEvent::Equinox)),
        Some(0.0)
    );
    assert_eq!(
        mark_declination(&MarkDate::Event(SolarEvent::SummerSolstice)),
        Some(23.44)
    );
    assert_eq!(
        mark_declination(&MarkDate::Event(SolarEvent::WinterSolstice)),
        Some(-23.44)
    );
    assert_eq!(mark_declination(&MarkDate::Unparseable), None);

    let decl = mark_declination(&MarkDate::Calendar { day_of_year: 172 }).unwrap();
    assert_approx!(decl, 23.44, 0.05);
}

// ── AnalemmaGeneration ──

#[test]
fn test_noon_analemma_covers_whole_year() {
    // At this latitude the noon sun is above the horizon every day.
    let points = generate_analemma(&fort_collins(), &horizontal_dial(), 12.0);
    assert_eq!(points.len(), 365);
    for pair in points.windows(2) {
        assert!(pair[0].day < pair[1].day);
    }
}

#[test]
fn test_early_hour_analemma_has_winter_gap() {
    let points = generate_analemma(&fort_collins(), &horizontal_dial(), 6.0);
    assert!(!points.is_empty());
    assert!(points.len() < 365, "len={}", points.len());
}

#[test]
fn test_analemma_never_emits_below_horizon() {
    let loc = fort_collins();
    for hour in [6.0, 7.0, 12.0, 17.0] {
        for p in generate_analemma(&loc, &horizontal_dial(), hour) {
            let pos = solar_position(p.day, loc.latitude, loc.longitude, loc.tz_meridian, hour);
            assert!(
                pos.altitude > 0.0,
                "day {} hour {}: altitude={}",
                p.day, hour, pos.altitude
            );
        }
    }
}

// ── DayRangePartitioning ──

#[test]
fn test_full_year_partition_is_single() {
    let points = generate_analemma(&fort_collins(), &horizontal_dial(), 12.0);
    let parts = partition_by_day_range(&points, DateRangeSelector::FullYear);
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].len(), 365);
}

#[test]
fn test_summer_to_winter_partition_bounds() {
    let points = generate_analemma(&fort_collins(), &horizontal_dial(), 12.0);
    let parts = partition_by_day_range(&points, DateRangeSelector::SummerToWinter);
    assert_eq!(parts.len(), 1);
    assert!(parts[0].iter().all(|p| (172..=355).contains(&p.day)));
}

#[test]
fn test_winter_to_summer_partition_order() {
    let points = generate_analemma(&fort_collins(), &horizontal_dial(), 12.0);
    let parts = partition_by_day_range(&points, DateRangeSelector::WinterToSummer);
    assert_eq!(parts.len(), 2);
    assert!(parts[0].iter().all(|p| p.day >= 355));
    assert!(parts[1].iter().all(|p| p.day <= 172));
    for part in &parts {
        for pair in part.windows(2) {
            assert!(pair[0].day < pair[1].day, "partition not ascending by day");
        }
    }
}

// ── DeclinationCurves ──

#[test]
fn test_equinox_curve_is_single_continuous_path() {
    let window = TimeWindow {
        start_hour: 6.0,
        stop_hour: 18.0,
    };
    let segments =
        generate_declination_curve(&fort_collins(), &horizontal_dial(), &window, 0.0, 300.0);
    assert_eq!(segments.len(), 1, "equinox must stay one path");
    assert!(segments[0].len() >= 2);
}

#[test]
fn test_winter_solstice_curve_segments_well_formed() {
    // The winter sun is below the horizon at the window edges here, so the
    // sweep breaks into interior arcs; each must hold at least 2 points.
    let window = TimeWindow {
        start_hour: 6.0,
        stop_hour: 18.0,
    };
    let segments =
        generate_declination_curve(&fort_collins(), &horizontal_dial(), &window, -23.44, 1e9);
    assert!(!segments.is_empty());
    for seg in &segments {
        assert!(seg.len() >= 2, "segment with {} points", seg.len());
    }
}

#[test]
fn test_max_radius_clips_near_horizon_points() {
    let window = TimeWindow {
        start_hour: 6.0,
        stop_hour: 18.0,
    };
    let clipped =
        generate_declination_curve(&fort_collins(), &horizontal_dial(), &window, -23.44, 300.0);
    let unclipped =
        generate_declination_curve(&fort_collins(), &horizontal_dial(), &window, -23.44, 1e9);

    for seg in &clipped {
        for p in seg {
            assert!(p.x.hypot(p.y) <= 300.0, "point at radius {}", p.x.hypot(p.y));
        }
    }
    let clipped_count: usize = clipped.iter().map(Vec::len).sum();
    let unclipped_count: usize = unclipped.iter().map(Vec::len).sum();
    assert!(clipped_count < unclipped_count);
}

#[test]
fn test_polar_winter_curve_is_empty() {
    // No daylight at all: the sweep produces no drawable segment.
    let loc = Location {
        latitude: 78.0,
        longitude: 15.0,
        tz_meridian: 15.0,
    };
    let window = TimeWindow {
        start_hour: 6.0,
        stop_hour: 18.0,
    };
    let segments = generate_declination_curve(&loc, &horizontal_dial(), &window, -23.44, 1e9);
    assert!(segments.is_empty());
}

#[test]
fn test_declination_curve_deterministic() {
    let window = TimeWindow {
        start_hour: 6.0,
        stop_hour: 18.0,
    };
    let a = generate_declination_curve(&fort_collins(), &horizontal_dial(), &window, 10.0, 300.0);
    let b = generate_declination_curve(&fort_collins(), &horizontal_dial(), &window, 10.0, 300.0);
    assert_eq!(a, b);
}
