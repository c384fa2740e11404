use crate::types::HourIntervalDef;

/// Tolerance for deciding that a time sits on an interval's grid, in hours
/// (3.6 seconds).
pub const GRID_EPSILON: f64 = 0.001;

fn on_grid(t: f64, step: f64) -> bool {
    let r = t.rem_euclid(step);
    r < GRID_EPSILON || step - r < GRID_EPSILON
}

/// True when another active interval with strictly higher priority already
/// claims time `t`, so the line for `def` must not be drawn there. A
/// half-hour line is never redrawn on top of an hour line, and so on down
/// the ranks. Evaluated per sample time.
pub fn is_suppressed(defs: &[HourIntervalDef], def: &HourIntervalDef, t: f64) -> bool {
    defs.iter().any(|other| {
        other.id != def.id
            && other.active
            && other.interval.rank() < def.interval.rank()
            && on_grid(t, other.interval.step_hours())
    })
}

/// Tick times for `def` across `[start_hour, stop_hour]`, with the ticks that
/// a coarser active interval owns filtered out.
pub fn tick_times(
    defs: &[HourIntervalDef],
    def: &HourIntervalDef,
    start_hour: f64,
    stop_hour: f64,
) -> Vec<f64> {
    let step = def.interval.step_hours();
    let mut times = Vec::new();
    let first = (start_hour / step - GRID_EPSILON).ceil() as i64;
    let last = (stop_hour / step + GRID_EPSILON).floor() as i64;
    for i in first..=last {
        let t = i as f64 * step;
        if !is_suppressed(defs, def, t) {
            times.push(t);
        }
    }
    times
}
