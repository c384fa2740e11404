use crate::astro::{solar_position, solar_position_at_declination};
use crate::date_range::{mark_declination, parse_mark_date, partition_by_day_range};
use crate::intervals::tick_times;
use crate::labels::place_hour_labels;
use crate::projection::project_shadow;
use crate::types::{
    AnalemmaPoint, DeclinationCurve, DesignConfig, DialConfig, DialLayout, HourLine, Location,
    Segment, TimeWindow,
};

/// Shadow-tip locus for a fixed clock hour swept across the year, tagged by
/// day. Days where the sun is below the horizon at that hour emit nothing,
/// which is where the winter gaps in an analemma come from.
pub fn generate_analemma(location: &Location, dial: &DialConfig, hour: f64) -> Vec<AnalemmaPoint> {
    let mut points = Vec::with_capacity(365);
    for day in 1..=365u32 {
        let pos = solar_position(
            day,
            location.latitude,
            location.longitude,
            location.tz_meridian,
            hour,
        );
        if pos.altitude <= 0.0 {
            continue;
        }
        if let Some(p) = project_shadow(
            pos.altitude,
            pos.azimuth,
            dial.gnomon_height,
            dial.orientation,
            location.latitude,
        ) {
            points.push(AnalemmaPoint {
                day,
                x: p.x,
                y: p.y,
            });
        }
    }
    points
}

fn minute_samples(window: &TimeWindow) -> std::ops::RangeInclusive<i64> {
    let start = (window.start_hour * 60.0).round() as i64;
    let stop = (window.stop_hour * 60.0).round() as i64;
    start..=stop
}

/// Shadow-tip locus for a fixed solar declination swept across the time
/// window at 1-minute resolution. The sweep breaks into disjoint segments
/// wherever the sun dips below the horizon (sunrise/sunset inside the
/// window); segments shorter than 2 points are discarded. Points whose
/// radius exceeds `max_radius` are dropped to bound near-horizon shadows.
///
/// The equinox (declination 0) is a single continuous sweep without the
/// horizon-break logic; within practical windows the equinox sun stays above
/// the horizon at dial latitudes.
pub fn generate_declination_curve(
    location: &Location,
    dial: &DialConfig,
    window: &TimeWindow,
    declination: f64,
    max_radius: f64,
) -> Vec<Segment> {
    let project = |hour: f64| {
        let pos = solar_position_at_declination(
            declination,
            location.latitude,
            location.longitude,
            location.tz_meridian,
            hour,
        );
        let point = project_shadow(
            pos.altitude,
            pos.azimuth,
            dial.gnomon_height,
            dial.orientation,
            location.latitude,
        )
        .filter(|p| p.x.hypot(p.y) <= max_radius);
        (pos.altitude, point)
    };

    if declination == 0.0 {
        let mut path: Segment = Vec::new();
        for minute in minute_samples(window) {
            if let (_, Some(p)) = project(minute as f64 / 60.0) {
                path.push(p);
            }
        }
        return if path.len() >= 2 { vec![path] } else { Vec::new() };
    }

    let mut segments: Vec<Segment> = Vec::new();
    let mut current: Segment = Vec::new();
    for minute in minute_samples(window) {
        let (altitude, point) = project(minute as f64 / 60.0);
        if altitude > 0.0 {
            if let Some(p) = point {
                current.push(p);
            }
        } else if current.len() >= 2 {
            segments.push(std::mem::take(&mut current));
        } else {
            current.clear();
        }
    }
    if current.len() >= 2 {
        segments.push(current);
    }
    segments
}

/// One analemma per surviving tick of every active hour interval, with ticks
/// owned by a coarser interval suppressed, partitioned by the configured
/// date range. Hours where no day puts the sun above the horizon produce no
/// line.
pub fn generate_hour_lines(config: &DesignConfig) -> Vec<HourLine> {
    let mut lines = Vec::new();
    for def in config.intervals.iter().filter(|d| d.active) {
        for hour in tick_times(
            &config.intervals,
            def,
            config.window.start_hour,
            config.window.stop_hour,
        ) {
            let points = generate_analemma(&config.location, &config.dial, hour);
            let segments = partition_by_day_range(&points, config.date_range);
            if !segments.is_empty() {
                lines.push(HourLine {
                    hour,
                    style: def.style,
                    segments,
                });
            }
        }
    }
    lines
}

/// One declination curve per active mark. Marks whose date string does not
/// parse, and marks whose sweep stays entirely below the horizon or off the
/// dial, contribute nothing.
pub fn generate_declination_curves(config: &DesignConfig) -> Vec<DeclinationCurve> {
    let mut curves = Vec::new();
    for mark in config.marks.iter().filter(|m| m.active) {
        let date = parse_mark_date(&mark.date);
        let Some(declination) = mark_declination(&date) else {
            continue;
        };
        let segments = generate_declination_curve(
            &config.location,
            &config.dial,
            &config.window,
            declination,
            config.max_radius,
        );
        if !segments.is_empty() {
            curves.push(DeclinationCurve {
                mark_id: mark.id.clone(),
                declination,
                style: mark.style,
                segments,
            });
        }
    }
    curves
}

/// Compute the full inscription set for one configuration snapshot.
pub fn generate_dial(config: &DesignConfig) -> DialLayout {
    let hour_lines = generate_hour_lines(config);
    let declination_curves = generate_declination_curves(config);
    let labels = place_hour_labels(&hour_lines, &config.labels, config.date_range);
    DialLayout {
        hour_lines,
        declination_curves,
        labels,
    }
}
