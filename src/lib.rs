pub mod astro;
pub mod curves;
pub mod date_range;
pub mod intervals;
pub mod labels;
pub mod projection;
pub mod types;

pub use astro::{
    auto_gnomon_height, day_of_year, deg_to_rad, equation_of_time, intermediate_angle_b,
    rad_to_deg, solar_declination, solar_position, solar_position_at_declination,
    DEGREES_PER_HOUR, EARTH_AXIAL_TILT,
};

pub use curves::{
    generate_analemma, generate_declination_curve, generate_declination_curves, generate_dial,
    generate_hour_lines,
};

pub use date_range::{
    mark_declination, parse_mark_date, partition_by_day_range, resolve_day_range, MarkDate,
    SolarEvent, SUMMER_SOLSTICE_DAY, WINTER_SOLSTICE_DAY,
};

pub use intervals::{is_suppressed, tick_times, GRID_EPSILON};

pub use labels::{format_hour_label, place_hour_labels};

pub use projection::project_shadow;

pub use types::{
    builtin_intervals, builtin_marks, AnalemmaPoint, DashPattern, DateRangeSelector,
    DeclinationCurve, DeclinationMark, DesignConfig, DialConfig, DialLayout, DialPoint, HourInterval,
    HourIntervalDef, HourLabel, HourLine, LabelOptions, LabelSide, LineStyle, LineWidth, Location,
    Orientation, Segment, SolarPosition, StyleCatalog, StyleHandle, TimeWindow,
};
