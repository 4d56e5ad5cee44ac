//! Standard thresholds bound to calendar dates.
//!
//! The plain forms take `(year, month, day, lon, lat)`; the `_on` forms take
//! any chrono date. Longitude is east positive, latitude north positive, and
//! all results are UTC.

use chrono::Datelike;

use crate::calendar::{days_since_epoch, days_since_epoch_for};
use crate::riseset;
use crate::types::{AltitudeThreshold, DayLength, RiseSet};

pub fn daylight_length(year: i32, month: u32, day: u32, lon: f64, lat: f64) -> DayLength {
    riseset::day_length(days_since_epoch(year, month, day), lon, lat, AltitudeThreshold::SUNRISE_SUNSET)
}

pub fn civil_twilight_length(year: i32, month: u32, day: u32, lon: f64, lat: f64) -> DayLength {
    riseset::day_length(days_since_epoch(year, month, day), lon, lat, AltitudeThreshold::CIVIL_TWILIGHT)
}

pub fn nautical_twilight_length(year: i32, month: u32, day: u32, lon: f64, lat: f64) -> DayLength {
    riseset::day_length(days_since_epoch(year, month, day), lon, lat, AltitudeThreshold::NAUTICAL_TWILIGHT)
}

pub fn astronomical_twilight_length(
    year: i32,
    month: u32,
    day: u32,
    lon: f64,
    lat: f64,
) -> DayLength {
    riseset::day_length(
        days_since_epoch(year, month, day),
        lon,
        lat,
        AltitudeThreshold::ASTRONOMICAL_TWILIGHT,
    )
}

pub fn sun_rise_set(year: i32, month: u32, day: u32, lon: f64, lat: f64) -> RiseSet {
    riseset::rise_set(days_since_epoch(year, month, day), lon, lat, AltitudeThreshold::SUNRISE_SUNSET)
}

pub fn civil_twilight(year: i32, month: u32, day: u32, lon: f64, lat: f64) -> RiseSet {
    riseset::rise_set(days_since_epoch(year, month, day), lon, lat, AltitudeThreshold::CIVIL_TWILIGHT)
}

pub fn nautical_twilight(year: i32, month: u32, day: u32, lon: f64, lat: f64) -> RiseSet {
    riseset::rise_set(days_since_epoch(year, month, day), lon, lat, AltitudeThreshold::NAUTICAL_TWILIGHT)
}

pub fn astronomical_twilight(year: i32, month: u32, day: u32, lon: f64, lat: f64) -> RiseSet {
    riseset::rise_set(
        days_since_epoch(year, month, day),
        lon,
        lat,
        AltitudeThreshold::ASTRONOMICAL_TWILIGHT,
    )
}

pub fn day_length_on<D: Datelike>(
    date: &D,
    lon: f64,
    lat: f64,
    threshold: AltitudeThreshold,
) -> DayLength {
    riseset::day_length(days_since_epoch_for(date), lon, lat, threshold)
}

pub fn rise_set_on<D: Datelike>(date: &D, lon: f64, lat: f64, threshold: AltitudeThreshold) -> RiseSet {
    riseset::rise_set(days_since_epoch_for(date), lon, lat, threshold)
}

pub fn daylight_length_on<D: Datelike>(date: &D, lon: f64, lat: f64) -> DayLength {
    day_length_on(date, lon, lat, AltitudeThreshold::SUNRISE_SUNSET)
}

pub fn sun_rise_set_on<D: Datelike>(date: &D, lon: f64, lat: f64) -> RiseSet {
    rise_set_on(date, lon, lat, AltitudeThreshold::SUNRISE_SUNSET)
}

pub fn civil_twilight_on<D: Datelike>(date: &D, lon: f64, lat: f64) -> RiseSet {
    rise_set_on(date, lon, lat, AltitudeThreshold::CIVIL_TWILIGHT)
}

pub fn nautical_twilight_on<D: Datelike>(date: &D, lon: f64, lat: f64) -> RiseSet {
    rise_set_on(date, lon, lat, AltitudeThreshold::NAUTICAL_TWILIGHT)
}

pub fn astronomical_twilight_on<D: Datelike>(date: &D, lon: f64, lat: f64) -> RiseSet {
    rise_set_on(date, lon, lat, AltitudeThreshold::ASTRONOMICAL_TWILIGHT)
}
