//! Low-precision solar ephemeris.
//!
//! Good to about one arc minute, which is a minute of time at rise or set.
//! All `d` arguments are days since 2000 Jan 0.0 UT; a fractional part is the
//! time of day.

use crate::angles::{
    atan2d, cosd, normalize_angle, rad_to_deg, sind, DEGREES_PER_HOUR,
};
use crate::types::{DayCount, EclipticPosition, SolarPosition};

/// Angular radius of the sun at 1 AU, degrees.
pub const SOLAR_RADIUS_AT_1AU: f64 = 0.2666;

const KEPLER_ITERATIONS: usize = 2;

pub fn mean_anomaly(d: f64) -> f64 {
    normalize_angle(356.0470 + 0.9856002585 * d)
}

pub fn perihelion_longitude(d: f64) -> f64 {
    282.9404 + 4.70935e-5 * d
}

pub fn eccentricity(d: f64) -> f64 {
    0.016709 - 1.151e-9 * d
}

pub fn obliquity(d: f64) -> f64 {
    23.4393 - 3.563e-7 * d
}

/// Eccentric anomaly in degrees for mean anomaly `m` (degrees).
pub fn eccentric_anomaly(m: f64, e: f64) -> f64 {
    let mut ea = m + rad_to_deg(e) * sind(m) * (1.0 + e * cosd(m));
    for _ in 1..KEPLER_ITERATIONS {
        ea -= (ea - rad_to_deg(e) * sind(ea) - m) / (1.0 - e * cosd(ea));
    }
    ea
}

pub fn sun_ecliptic(d: f64) -> EclipticPosition {
    let m = mean_anomaly(d);
    let e = eccentricity(d);
    let ea = eccentric_anomaly(m, e);

    let x = cosd(ea) - e;
    let y = (1.0 - e * e).sqrt() * sind(ea);
    let true_anomaly = atan2d(y, x);

    EclipticPosition {
        longitude: normalize_angle(true_anomaly + perihelion_longitude(d)),
        distance: x.hypot(y),
    }
}

/// Equatorial position of the sun; ecliptic latitude is taken as zero.
pub fn sun_position(d: f64) -> SolarPosition {
    let ecl = sun_ecliptic(d);
    let x = ecl.distance * cosd(ecl.longitude);
    let y_ecl = ecl.distance * sind(ecl.longitude);

    let obl = obliquity(d);
    let y = y_ecl * cosd(obl);
    let z = y_ecl * sind(obl);

    SolarPosition {
        right_ascension: normalize_angle(atan2d(y, x)) / DEGREES_PER_HOUR,
        declination: atan2d(z, x.hypot(y)),
        distance: ecl.distance,
    }
}

/// Greenwich mean sidereal time at 0h UT, degrees.
pub fn gmst0(d: f64) -> f64 {
    normalize_angle((180.0 + 356.0470 + 282.9404) + (0.9856002585 + 4.70935e-5) * d)
}

/// Day number of local mean noon at `longitude`.
pub fn local_noon(day_count: DayCount, longitude: f64) -> f64 {
    day_count as f64 + 0.5 - longitude / 360.0
}

pub fn apparent_radius(distance: f64) -> f64 {
    SOLAR_RADIUS_AT_1AU / distance
}
