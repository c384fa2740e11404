use crate::date_range::{SUMMER_SOLSTICE_DAY, WINTER_SOLSTICE_DAY};
use crate::types::{
    AnalemmaPoint, DateRangeSelector, DialPoint, HourLabel, HourLine, LabelOptions, LabelSide,
};

/// Local tangent at `idx` by central difference (one-sided at the ends),
/// rotated 90 degrees and oriented away from the dial origin. `None` when the
/// tangent degenerates (coincident neighbors, non-finite components).
fn outward_normal(points: &[AnalemmaPoint], idx: usize) -> Option<(f64, f64)> {
    if points.len() < 2 {
        return None;
    }
    let before = &points[idx.saturating_sub(1)];
    let after = &points[(idx + 1).min(points.len() - 1)];
    let (tx, ty) = (after.x - before.x, after.y - before.y);
    let len = tx.hypot(ty);
    if len == 0.0 || !len.is_finite() {
        return None;
    }

    let mut normal = (-ty / len, tx / len);
    let anchor = &points[idx];
    if normal.0 * anchor.x + normal.1 * anchor.y < 0.0 {
        normal = (-normal.0, -normal.1);
    }
    Some(normal)
}

fn nearest_index_by_day(points: &[AnalemmaPoint], target: u32) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .min_by_key(|(_, p)| p.day.abs_diff(target))
        .map(|(i, _)| i)
}

/// The partition segment a side's label belongs to. With the wraparound
/// selector the winter end lives in the first partition (days >= 355) and the
/// summer end in the last (days <= 172); otherwise there is a single
/// partition holding both. Empty partitions are dropped upstream, so the
/// candidate is checked to actually hold days on the requested side — an
/// hour with no winter daylight must not anchor its winter label on the
/// summer end.
fn segment_for_side(
    line: &HourLine,
    side: LabelSide,
    selector: DateRangeSelector,
) -> Option<&Vec<AnalemmaPoint>> {
    match (selector, side) {
        (DateRangeSelector::WinterToSummer, LabelSide::Winter) => line
            .segments
            .first()
            .filter(|seg| seg.first().is_some_and(|p| p.day >= WINTER_SOLSTICE_DAY)),
        (DateRangeSelector::WinterToSummer, LabelSide::Summer) => line
            .segments
            .last()
            .filter(|seg| seg.last().is_some_and(|p| p.day <= SUMMER_SOLSTICE_DAY)),
        _ => line.segments.first(),
    }
}

pub fn format_hour_label(hour: f64, use_24_hour: bool) -> String {
    let total_minutes = (hour * 60.0).round() as i64;
    let h = (total_minutes / 60).rem_euclid(24);
    let m = total_minutes % 60;
    if use_24_hour {
        format!("{}:{:02}", h, m)
    } else {
        let suffix = if h < 12 { "AM" } else { "PM" };
        let h12 = match h % 12 {
            0 => 12,
            other => other,
        };
        if m == 0 {
            format!("{} {}", h12, suffix)
        } else {
            format!("{}:{:02} {}", h12, m, suffix)
        }
    }
}

fn is_whole_hour(hour: f64) -> bool {
    (hour - hour.round()).abs() < 1e-9
}

fn place_label(
    line: &HourLine,
    side: LabelSide,
    selector: DateRangeSelector,
    opts: &LabelOptions,
) -> Option<HourLabel> {
    let segment = segment_for_side(line, side, selector)?;
    let target = match side {
        LabelSide::Summer => SUMMER_SOLSTICE_DAY,
        LabelSide::Winter => WINTER_SOLSTICE_DAY,
    };
    let idx = nearest_index_by_day(segment, target)?;
    let (nx, ny) = outward_normal(segment, idx)?;
    let anchor = &segment[idx];
    Some(HourLabel {
        hour: line.hour,
        text: format_hour_label(line.hour, opts.use_24_hour),
        position: DialPoint {
            x: anchor.x + nx * opts.offset,
            y: anchor.y + ny * opts.offset,
        },
        side,
    })
}

/// Label anchors for the whole-hour lines, offset along the local outward
/// normal so the text clears the curve. Finer interval lines stay unlabeled.
pub fn place_hour_labels(
    hour_lines: &[HourLine],
    opts: &LabelOptions,
    selector: DateRangeSelector,
) -> Vec<HourLabel> {
    let mut labels = Vec::new();
    for line in hour_lines.iter().filter(|l| is_whole_hour(l.hour)) {
        if opts.summer_side {
            if let Some(label) = place_label(line, LabelSide::Summer, selector, opts) {
                labels.push(label);
            }
        }
        if opts.winter_side {
            if let Some(label) = place_label(line, LabelSide::Winter, selector, opts) {
                labels.push(label);
            }
        }
    }
    labels
}
