use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub tz_meridian: f64,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            latitude: 40.5853,
            longitude: -105.0844,
            tz_meridian: -105.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
    Equatorial,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DialConfig {
    pub orientation: Orientation,
    pub gnomon_height: f64,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            gnomon_height: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start_hour: f64,
    pub stop_hour: f64,
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self {
            start_hour: 6.0,
            stop_hour: 18.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateRangeSelector {
    FullYear,
    SummerToWinter,
    WinterToSummer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HourInterval {
    Hour,
    HalfHour,
    QuarterHour,
    FiveMinute,
    TwoMinute,
}

impl HourInterval {
    pub fn step_hours(self) -> f64 {
        match self {
            HourInterval::Hour => 1.0,
            HourInterval::HalfHour => 0.5,
            HourInterval::QuarterHour => 0.25,
            HourInterval::FiveMinute => 1.0 / 12.0,
            HourInterval::TwoMinute => 1.0 / 30.0,
        }
    }

    /// Priority rank; lower wins, so Hour suppresses everything finer.
    pub fn rank(self) -> u8 {
        match self {
            HourInterval::Hour => 0,
            HourInterval::HalfHour => 1,
            HourInterval::QuarterHour => 2,
            HourInterval::FiveMinute => 3,
            HourInterval::TwoMinute => 4,
        }
    }
}

/// Index into a `StyleCatalog`, resolved once when the configuration is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleHandle(pub usize);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourIntervalDef {
    pub interval: HourInterval,
    pub active: bool,
    pub style: StyleHandle,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclinationMark {
    pub date: String,
    pub active: bool,
    pub style: StyleHandle,
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LineWidth {
    Hairline,
    Millimeters(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DashPattern {
    Solid,
    Dashed,
    Dotted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub name: String,
    pub id: String,
    pub width: LineWidth,
    pub color: String,
    pub dash: DashPattern,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleCatalog {
    pub styles: Vec<LineStyle>,
}

impl StyleCatalog {
    /// Resolve a style reference string to a typed handle, matching id first,
    /// then name. Returns `None` for an unknown reference.
    pub fn resolve(&self, key: &str) -> Option<StyleHandle> {
        if let Some(i) = self.styles.iter().position(|s| s.id == key) {
            return Some(StyleHandle(i));
        }
        self.styles
            .iter()
            .position(|s| s.name == key)
            .map(StyleHandle)
    }

    pub fn get(&self, handle: StyleHandle) -> Option<&LineStyle> {
        self.styles.get(handle.0)
    }
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self {
            styles: vec![
                LineStyle {
                    name: "default hairline".into(),
                    id: "default-hairline".into(),
                    width: LineWidth::Hairline,
                    color: "black".into(),
                    dash: DashPattern::Solid,
                },
                LineStyle {
                    name: "dashed hairline".into(),
                    id: "dashed-hairline".into(),
                    width: LineWidth::Hairline,
                    color: "black".into(),
                    dash: DashPattern::Dashed,
                },
                LineStyle {
                    name: "dotted hairline".into(),
                    id: "dotted-hairline".into(),
                    width: LineWidth::Hairline,
                    color: "black".into(),
                    dash: DashPattern::Dotted,
                },
                LineStyle {
                    name: ".5mm black".into(),
                    id: "0.5mm-black".into(),
                    width: LineWidth::Millimeters(0.5),
                    color: "black".into(),
                    dash: DashPattern::Solid,
                },
            ],
        }
    }
}

// Handles into the default catalog, in the order Default lays the styles out.
pub const DEFAULT_HAIRLINE: StyleHandle = StyleHandle(0);
pub const DASHED_HAIRLINE: StyleHandle = StyleHandle(1);
pub const DOTTED_HAIRLINE: StyleHandle = StyleHandle(2);
pub const HALF_MM_BLACK: StyleHandle = StyleHandle(3);

pub fn builtin_intervals() -> Vec<HourIntervalDef> {
    vec![
        HourIntervalDef {
            interval: HourInterval::Hour,
            active: true,
            style: HALF_MM_BLACK,
            id: "hour".into(),
        },
        HourIntervalDef {
            interval: HourInterval::HalfHour,
            active: true,
            style: DEFAULT_HAIRLINE,
            id: "half-hour".into(),
        },
        HourIntervalDef {
            interval: HourInterval::QuarterHour,
            active: false,
            style: DASHED_HAIRLINE,
            id: "quarter-hour".into(),
        },
        HourIntervalDef {
            interval: HourInterval::FiveMinute,
            active: false,
            style: DOTTED_HAIRLINE,
            id: "5-minute".into(),
        },
        HourIntervalDef {
            interval: HourInterval::TwoMinute,
            active: false,
            style: DOTTED_HAIRLINE,
            id: "2-minute".into(),
        },
    ]
}

pub fn builtin_marks() -> Vec<DeclinationMark> {
    vec![
        DeclinationMark {
            date: "Summer Solstice".into(),
            active: true,
            style: DEFAULT_HAIRLINE,
            id: "summer-solstice".into(),
        },
        DeclinationMark {
            date: "Equinox".into(),
            active: true,
            style: DEFAULT_HAIRLINE,
            id: "equinox".into(),
        },
        DeclinationMark {
            date: "Winter Solstice".into(),
            active: true,
            style: DEFAULT_HAIRLINE,
            id: "winter-solstice".into(),
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelOptions {
    pub summer_side: bool,
    pub winter_side: bool,
    pub offset: f64,
    pub use_24_hour: bool,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            summer_side: true,
            winter_side: true,
            offset: 2.0,
            use_24_hour: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    pub altitude: f64,
    pub azimuth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DialPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalemmaPoint {
    pub day: u32,
    pub x: f64,
    pub y: f64,
}

pub type Segment = Vec<DialPoint>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourLine {
    pub hour: f64,
    pub style: StyleHandle,
    pub segments: Vec<Vec<AnalemmaPoint>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeclinationCurve {
    pub mark_id: String,
    pub declination: f64,
    pub style: StyleHandle,
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LabelSide {
    Summer,
    Winter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourLabel {
    pub hour: f64,
    pub text: String,
    pub position: DialPoint,
    pub side: LabelSide,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignConfig {
    pub location: Location,
    pub dial: DialConfig,
    pub window: TimeWindow,
    pub date_range: DateRangeSelector,
    pub intervals: Vec<HourIntervalDef>,
    pub marks: Vec<DeclinationMark>,
    pub styles: StyleCatalog,
    pub labels: LabelOptions,
    pub max_radius: f64,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            location: Location::default(),
            dial: DialConfig::default(),
            window: TimeWindow::default(),
            date_range: DateRangeSelector::FullYear,
            intervals: builtin_intervals(),
            marks: builtin_marks(),
            styles: StyleCatalog::default(),
            labels: LabelOptions::default(),
            max_radius: 300.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DialLayout {
    pub hour_lines: Vec<HourLine>,
    pub declination_curves: Vec<DeclinationCurve>,
    pub labels: Vec<HourLabel>,
}
