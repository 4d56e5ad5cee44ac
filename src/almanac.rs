use chrono::{SecondsFormat, Utc};
use log::debug;

use crate::calendar::{day_of_year, days_in_year, doy_to_month_day};
use crate::error::SolarError;
use crate::riseset::{day_length, rise_set};
use crate::types::{
    AltitudeThreshold, Almanac, AlmanacConfig, AlmanacDay, AlmanacMetadata, CalendarDate,
    DayLength, GeoCoordinate, LightCondition,
};

const MINUTES_PER_DAY: i32 = 1440;

/// `(hour, minute)` on a 24-hour clock; minutes outside one day wrap around.
pub fn minutes_to_time(total_minutes: i32) -> (i32, i32) {
    let clock = total_minutes.rem_euclid(MINUTES_PER_DAY);
    (clock / 60, clock % 60)
}

pub fn time_to_minutes(time: (i32, i32)) -> i32 {
    time.0 * 60 + time.1
}

/// Decimal hours to whole minutes after midnight, rounded and wrapped into one day.
pub fn hours_to_minutes(hours: f64) -> i32 {
    ((hours * 60.0).round() as i32).rem_euclid(MINUTES_PER_DAY)
}

/// `HH:MM` for decimal hours, rounded to the minute.
pub fn format_hhmm(hours: f64) -> String {
    let (h, m) = minutes_to_time(hours_to_minutes(hours));
    format!("{:02}:{:02}", h, m)
}

pub fn almanac_day(date: CalendarDate, longitude: f64, latitude: f64) -> AlmanacDay {
    let day_count = date.day_count();
    AlmanacDay {
        day_of_year: day_of_year(date.year, date.month, date.day),
        date,
        day_count,
        day_length: day_length(day_count, longitude, latitude, AltitudeThreshold::SUNRISE_SUNSET),
        sunrise_sunset: rise_set(day_count, longitude, latitude, AltitudeThreshold::SUNRISE_SUNSET),
        civil_twilight: rise_set(day_count, longitude, latitude, AltitudeThreshold::CIVIL_TWILIGHT),
        nautical_twilight: rise_set(
            day_count,
            longitude,
            latitude,
            AltitudeThreshold::NAUTICAL_TWILIGHT,
        ),
        astronomical_twilight: rise_set(
            day_count,
            longitude,
            latitude,
            AltitudeThreshold::ASTRONOMICAL_TWILIGHT,
        ),
    }
}

pub fn generate_almanac(config: &AlmanacConfig) -> Result<Almanac, SolarError> {
    let location = GeoCoordinate::new(config.longitude, config.latitude)?;
    CalendarDate::new(config.year, 1, 1).to_naive_date()?;

    let n_days = days_in_year(config.year);
    let mut days = Vec::with_capacity(n_days as usize);
    for doy in 1..=n_days {
        let (month, day) = doy_to_month_day(config.year, doy);
        days.push(almanac_day(
            CalendarDate::new(config.year, month, day),
            location.longitude,
            location.latitude,
        ));
    }

    let polar_days = days
        .iter()
        .filter(|d| d.day_length == DayLength::AlwaysAbove)
        .count();
    let polar_nights = days
        .iter()
        .filter(|d| d.day_length == DayLength::AlwaysBelow)
        .count();
    debug!(
        "almanac {} at ({}, {}): {} days, {} polar days, {} polar nights",
        config.year,
        config.latitude,
        config.longitude,
        days.len(),
        polar_days,
        polar_nights
    );

    Ok(Almanac {
        config: *config,
        metadata: AlmanacMetadata {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, false),
            total_days: days.len(),
            polar_days,
            polar_nights,
        },
        days,
    })
}

pub fn lookup_day(almanac: &Almanac, month: u32, day: u32) -> Option<&AlmanacDay> {
    almanac
        .days
        .iter()
        .find(|d| d.date.month == month && d.date.day == day)
}

pub fn light_condition(day: &AlmanacDay, utc_hours: f64) -> LightCondition {
    if day.sunrise_sunset.contains(utc_hours) {
        LightCondition::Day
    } else if day.civil_twilight.contains(utc_hours) {
        LightCondition::CivilTwilight
    } else if day.nautical_twilight.contains(utc_hours) {
        LightCondition::NauticalTwilight
    } else if day.astronomical_twilight.contains(utc_hours) {
        LightCondition::AstronomicalTwilight
    } else {
        LightCondition::Night
    }
}
