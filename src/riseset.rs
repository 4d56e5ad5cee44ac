use log::{debug, trace};

use crate::angles::{acosd, cosd, normalize_angle, rev180, sind, wrap_hours, DEGREES_PER_HOUR};
use crate::ephemeris::{gmst0, local_noon, sun_position};
use crate::types::{AltitudeThreshold, DayCount, DayLength, RiseSet};

/// Upper bound on solver passes, the noon estimate included.
pub const MAX_PASSES: usize = 3;

const CONVERGENCE_HOURS: f64 = 1.0 / 3600.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Crossing {
    /// Semi-diurnal arc in degrees.
    Arc(f64),
    AlwaysAbove,
    AlwaysBelow,
}

/// Cosine of the hour angle at which the sun's centre sits at `altitude`.
pub fn hour_angle_cosine(altitude: f64, latitude: f64, declination: f64) -> f64 {
    (sind(altitude) - sind(latitude) * sind(declination)) / (cosd(latitude) * cosd(declination))
}

fn classify(cos_h: f64) -> Crossing {
    if cos_h >= 1.0 {
        Crossing::AlwaysBelow
    } else if cos_h <= -1.0 {
        Crossing::AlwaysAbove
    } else {
        Crossing::Arc(acosd(cos_h))
    }
}

/// Hours the sun spends above `threshold` on the date `day_count`.
///
/// Uses the sun's position at local noon.
pub fn day_length(
    day_count: DayCount,
    longitude: f64,
    latitude: f64,
    threshold: AltitudeThreshold,
) -> DayLength {
    let pos = sun_position(local_noon(day_count, longitude));
    let altitude = threshold.center_altitude(pos.distance);

    match classify(hour_angle_cosine(altitude, latitude, pos.declination)) {
        Crossing::Arc(arc) => DayLength::Regular(2.0 * arc / DEGREES_PER_HOUR),
        Crossing::AlwaysAbove => {
            debug!("day {}: sun stays above {:.3} deg at lat {}", day_count, altitude, latitude);
            DayLength::AlwaysAbove
        }
        Crossing::AlwaysBelow => {
            debug!("day {}: sun stays below {:.3} deg at lat {}", day_count, altitude, latitude);
            DayLength::AlwaysBelow
        }
    }
}

/// UTC times at which the sun crosses `threshold` on the date `day_count`.
///
/// The first pass solves with the position at local noon, which fixes both
/// whether the threshold is crossed and the length of the window above it,
/// exactly as [`day_length`] does. Each later pass re-evaluates the position
/// at the current rise and set estimates and moves the window by half the
/// difference of the two refined half-arcs, stopping once it moves by less
/// than a second or after [`MAX_PASSES`] passes. A pass whose refined
/// crossing does not exist leaves the previous estimate in place.
pub fn rise_set(
    day_count: DayCount,
    longitude: f64,
    latitude: f64,
    threshold: AltitudeThreshold,
) -> RiseSet {
    let d = local_noon(day_count, longitude);
    let pos = sun_position(d);

    let sidereal_time = normalize_angle(gmst0(d) + 180.0 + longitude);
    let transit =
        12.0 - rev180(sidereal_time - pos.right_ascension * DEGREES_PER_HOUR) / DEGREES_PER_HOUR;

    let altitude = threshold.center_altitude(pos.distance);
    let arc = match classify(hour_angle_cosine(altitude, latitude, pos.declination)) {
        Crossing::Arc(arc) => arc,
        Crossing::AlwaysAbove => {
            debug!("day {}: no crossing of {:.3} deg, sun always above", day_count, altitude);
            return RiseSet::AlwaysAbove {
                transit: wrap_hours(transit),
            };
        }
        Crossing::AlwaysBelow => {
            debug!("day {}: no crossing of {:.3} deg, sun always below", day_count, altitude);
            return RiseSet::AlwaysBelow {
                transit: wrap_hours(transit),
            };
        }
    };

    let half = arc / DEGREES_PER_HOUR;
    let mut centre = transit;
    trace!("day {} pass 1: rise {:.5} set {:.5}", day_count, centre - half, centre + half);

    for pass in 2..=MAX_PASSES {
        let rise_arc = refined_arc(day_count, centre - half, latitude, threshold);
        let set_arc = refined_arc(day_count, centre + half, latitude, threshold);
        let (Some(rise_arc), Some(set_arc)) = (rise_arc, set_arc) else {
            trace!("day {} pass {}: refined crossing missing, keeping pass {}", day_count, pass, pass - 1);
            break;
        };
        let next = transit + (set_arc - rise_arc) / (2.0 * DEGREES_PER_HOUR);
        let shift = (next - centre).abs();
        centre = next;
        trace!("day {} pass {}: rise {:.5} set {:.5}", day_count, pass, centre - half, centre + half);
        if shift < CONVERGENCE_HOURS {
            break;
        }
    }

    RiseSet::Regular {
        rise: wrap_hours(centre - half),
        transit: wrap_hours(transit),
        set: wrap_hours(centre + half),
    }
}

/// Half-arc at `utc_hours`, or `None` when the threshold is not crossed there.
fn refined_arc(
    day_count: DayCount,
    utc_hours: f64,
    latitude: f64,
    threshold: AltitudeThreshold,
) -> Option<f64> {
    let pos = sun_position(day_count as f64 + utc_hours / 24.0);
    let altitude = threshold.center_altitude(pos.distance);
    match classify(hour_angle_cosine(altitude, latitude, pos.declination)) {
        Crossing::Arc(arc) => Some(arc),
        Crossing::AlwaysAbove | Crossing::AlwaysBelow => None,
    }
}
