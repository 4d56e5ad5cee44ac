use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::SolarError;
use crate::types::DayCount;

/// Days since 2000 Jan 0.0 UT for a calendar date.
///
/// The formula skips the Gregorian century rule, so it matches the real
/// calendar from March 1900 through February 2100. It is strictly increasing
/// in calendar order for every year. Dates are not validated.
pub fn days_since_epoch(year: i32, month: u32, day: u32) -> DayCount {
    let y = year as i64;
    let m = month as i64;
    let d = day as i64;
    367 * y - (7 * (y + (m + 9).div_euclid(12))).div_euclid(4) + (275 * m).div_euclid(9) + d
        - 730530
}

pub fn days_since_epoch_for<D: Datelike>(date: &D) -> DayCount {
    days_since_epoch(date.year(), date.month(), date.day())
}

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_months(year: i32) -> [u32; 12] {
    [
        31,
        if leap_year(year) { 29 } else { 28 },
        31, 30, 31, 30, 31, 31, 30, 31, 30, 31,
    ]
}

pub fn days_in_year(year: i32) -> u32 {
    if leap_year(year) {
        366
    } else {
        365
    }
}

/// Ordinal day within the year. Months outside 1..=12 are clamped.
pub fn day_of_year(year: i32, month: u32, day: u32) -> u32 {
    let elapsed = (month.saturating_sub(1) as usize).min(12);
    let sum: u32 = days_in_months(year)[..elapsed].iter().sum();
    sum + day
}

pub fn doy_to_month_day(year: i32, doy: u32) -> (u32, u32) {
    let mut remaining = doy;
    for (month_idx, &dim) in days_in_months(year).iter().enumerate() {
        if remaining <= dim {
            return (month_idx as u32 + 1, remaining);
        }
        remaining -= dim;
    }
    (12, 31)
}

/// Clock time for decimal hours, rounded to the nearest second.
pub fn hours_to_naive_time(hours: f64) -> Result<NaiveTime, SolarError> {
    if !(0.0..24.0).contains(&hours) {
        return Err(SolarError::HoursOutOfRange(hours));
    }
    let secs = ((hours * 3600.0).round() as u32).min(86_399);
    NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).ok_or(SolarError::HoursOutOfRange(hours))
}

/// Instant at `hours` UTC on `date`.
pub fn utc_datetime(date: NaiveDate, hours: f64) -> Result<DateTime<Utc>, SolarError> {
    let time = hours_to_naive_time(hours)?;
    Ok(Utc.from_utc_datetime(&date.and_time(time)))
}
