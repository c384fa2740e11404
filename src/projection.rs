use crate::astro::deg_to_rad;
use crate::types::{DialPoint, Orientation};

/// Project the shadow tip of a gnomon onto the dial plane.
///
/// Returns `None` when `tan(altitude)` is zero or non-finite (sun on the
/// horizon or at the zenith), so a degenerate sample is omitted instead of
/// collapsing to the dial origin.
pub fn project_shadow(
    altitude: f64,
    azimuth: f64,
    gnomon_height: f64,
    orientation: Orientation,
    latitude: f64,
) -> Option<DialPoint> {
    let tan_alt = altitude.tan();
    if !tan_alt.is_finite() || tan_alt == 0.0 {
        log::debug!("degenerate altitude {altitude}, omitting shadow point");
        return None;
    }

    let shadow_length = gnomon_height / tan_alt;
    let sx = shadow_length * azimuth.sin();
    let sy = shadow_length * azimuth.cos();

    let point = match orientation {
        Orientation::Horizontal => DialPoint { x: sx, y: -sy },
        // Only the horizontal displacement varies on a vertical face; the
        // gnomon height fixes the y coordinate.
        Orientation::Vertical => DialPoint {
            x: sx,
            y: gnomon_height,
        },
        Orientation::Equatorial => {
            let tilt = deg_to_rad(latitude);
            DialPoint {
                x: sx,
                y: gnomon_height * tilt.cos() - sy * tilt.sin(),
            }
        }
    };
    Some(point)
}
