//! Sunrise, sunset and twilight times from a low-precision solar ephemeris.
//!
//! Dates are day counts since 2000 Jan 0.0 UT, angles are degrees and times
//! are UTC decimal hours. Dates and places where the sun never crosses the
//! requested altitude come back as the `AlwaysAbove` / `AlwaysBelow` variants
//! of [`DayLength`] and [`RiseSet`].

pub mod almanac;
pub mod angles;
pub mod calendar;
pub mod ephemeris;
pub mod error;
pub mod presets;
pub mod riseset;
pub mod types;

pub use almanac::{
    almanac_day, format_hhmm, generate_almanac, hours_to_minutes, light_condition, lookup_day,
    minutes_to_time, time_to_minutes,
};

pub use angles::{
    acosd, asind, atan2d, atand, cosd, deg_to_rad, normalize_angle, rad_to_deg, rev180, sind,
    tand, wrap_hours, DEGREES_PER_HOUR,
};

pub use calendar::{
    day_of_year, days_in_months, days_in_year, days_since_epoch, days_since_epoch_for,
    doy_to_month_day, hours_to_naive_time, leap_year, utc_datetime,
};

pub use ephemeris::{apparent_radius, gmst0, local_noon, obliquity, sun_ecliptic, sun_position};

pub use error::SolarError;

pub use presets::{
    astronomical_twilight, astronomical_twilight_length, astronomical_twilight_on,
    civil_twilight, civil_twilight_length, civil_twilight_on, day_length_on, daylight_length,
    daylight_length_on, nautical_twilight, nautical_twilight_length, nautical_twilight_on,
    rise_set_on, sun_rise_set, sun_rise_set_on,
};

pub use riseset::{day_length, hour_angle_cosine, rise_set, MAX_PASSES};

pub use types::{
    Almanac, AlmanacConfig, AlmanacDay, AlmanacMetadata, AltitudeThreshold, CalendarDate,
    DayCount, DayLength, EclipticPosition, GeoCoordinate, LightCondition, RiseSet,
    SolarPosition,
};
