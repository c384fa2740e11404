use crate::types::SolarPosition;

pub const EARTH_AXIAL_TILT: f64 = 23.44;
pub const DEGREES_PER_HOUR: f64 = 15.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// Phase angle B for the declination and equation-of-time series, zeroed at
/// the March equinox (day 81).
pub fn intermediate_angle_b(day: u32) -> f64 {
    deg_to_rad((day as f64 - 81.0) * (360.0 / 365.0))
}

/// Solar declination in degrees for a day of the 365-day dial calendar.
/// Peaks at +23.44 near day 172 and -23.44 near day 355.
pub fn solar_declination(day: u32) -> f64 {
    EARTH_AXIAL_TILT * intermediate_angle_b(day).sin()
}

/// Equation of time in minutes: the seasonal offset between clock time and
/// apparent solar time.
pub fn equation_of_time(day: u32) -> f64 {
    let b = intermediate_angle_b(day);
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

pub fn day_of_year(month: u32, day: u32) -> u32 {
    let dim: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    let sum: u32 = dim[..(month - 1) as usize].iter().sum();
    sum + day
}

/// Derived gnomon height used by the "auto" gnomon mode: tan(latitude) scaled
/// to a 100-unit base, rounded to two decimals.
pub fn auto_gnomon_height(latitude: f64) -> f64 {
    (deg_to_rad(latitude).tan() * 100.0 * 100.0).round() / 100.0
}

fn position_from_declination(decl_rad: f64, lat_rad: f64, hour_angle: f64) -> SolarPosition {
    let sin_alt =
        lat_rad.sin() * decl_rad.sin() + lat_rad.cos() * decl_rad.cos() * hour_angle.cos();
    let altitude = sin_alt.asin();

    // Clamp against floating round-off near the meridian.
    let cos_az = ((decl_rad.sin() - altitude.sin() * lat_rad.sin())
        / (altitude.cos() * lat_rad.cos()))
    .clamp(-1.0, 1.0);
    let mut azimuth = cos_az.acos();
    if hour_angle > 0.0 {
        azimuth = 2.0 * std::f64::consts::PI - azimuth;
    }

    SolarPosition { altitude, azimuth }
}

/// Apparent solar altitude and azimuth (radians) for a clock hour at a
/// location. The timezone meridian is the longitude reference of the clock;
/// together with the equation of time it converts clock time to solar time.
/// Altitude <= 0 means the sun is below the horizon and casts no shadow.
pub fn solar_position(
    day: u32,
    latitude: f64,
    longitude: f64,
    tz_meridian: f64,
    hour: f64,
) -> SolarPosition {
    let correction_minutes = 4.0 * (tz_meridian - longitude) + equation_of_time(day);
    let solar_time = hour + correction_minutes / 60.0;
    let hour_angle = deg_to_rad(DEGREES_PER_HOUR * (solar_time - 12.0));
    position_from_declination(
        deg_to_rad(solar_declination(day)),
        deg_to_rad(latitude),
        hour_angle,
    )
}

/// Same geometry for a fixed declination instead of a date. There is no date
/// to take an equation-of-time correction from, so solar time carries the
/// longitude correction only. Used by the declination-curve sweep.
pub fn solar_position_at_declination(
    declination: f64,
    latitude: f64,
    longitude: f64,
    tz_meridian: f64,
    hour: f64,
) -> SolarPosition {
    let solar_time = hour + 4.0 * (tz_meridian - longitude) / 60.0;
    let hour_angle = deg_to_rad(DEGREES_PER_HOUR * (solar_time - 12.0));
    position_from_declination(deg_to_rad(declination), deg_to_rad(latitude), hour_angle)
}
