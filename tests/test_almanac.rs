use std::sync::LazyLock;

use solar_ephemeris::almanac::*;
use solar_ephemeris::error::SolarError;
use solar_ephemeris::types::*;

const SPRINGFIELD_CONFIG: AlmanacConfig = AlmanacConfig {
    latitude: 39.8,
    longitude: -89.6,
    year: 2026,
};

static SPRINGFIELD: LazyLock<Almanac> =
    LazyLock::new(|| generate_almanac(&SPRINGFIELD_CONFIG).unwrap());

static TROMSO: LazyLock<Almanac> = LazyLock::new(|| {
    generate_almanac(&AlmanacConfig {
        latitude: 69.65,
        longitude: 18.96,
        year: 2026,
    })
    .unwrap()
});

// ── Config ──

#[test]
fn test_default_config() {
    let c = AlmanacConfig::default();
    assert_eq!(c.latitude, 51.4779);
    assert_eq!(c.longitude, 0.0);
    assert_eq!(c.year, 2026);
}

#[test]
fn test_default_almanac_greenwich() {
    let almanac = generate_almanac(&AlmanacConfig::default()).unwrap();
    assert_eq!(almanac.metadata.polar_days, 0);
    assert_eq!(almanac.metadata.polar_nights, 0);
    let midsummer = lookup_day(&almanac, 6, 21).unwrap();
    assert!(
        (16.5..16.8).contains(&midsummer.day_length.hours()),
        "{:?}",
        midsummer.day_length
    );
    assert!((11.9..12.1).contains(&midsummer.sunrise_sunset.transit()));
}

#[test]
fn test_invalid_location_rejected() {
    let bad_lat = AlmanacConfig {
        latitude: 91.0,
        ..SPRINGFIELD_CONFIG
    };
    assert_eq!(
        generate_almanac(&bad_lat).unwrap_err(),
        SolarError::LatitudeOutOfRange(91.0)
    );

    let bad_lon = AlmanacConfig {
        longitude: -200.0,
        ..SPRINGFIELD_CONFIG
    };
    assert_eq!(
        generate_almanac(&bad_lon).unwrap_err(),
        SolarError::LongitudeOutOfRange(-200.0)
    );
}

#[test]
fn test_geo_coordinate_bounds_inclusive() {
    assert!(GeoCoordinate::new(180.0, 90.0).is_ok());
    assert!(GeoCoordinate::new(-180.0, -90.0).is_ok());
    assert!(GeoCoordinate::new(180.1, 0.0).is_err());
}

#[test]
fn test_error_messages() {
    assert_eq!(
        SolarError::LatitudeOutOfRange(91.0).to_string(),
        "latitude 91 out of range [-90, 90]"
    );
    assert_eq!(
        SolarError::InvalidDate {
            year: 2025,
            month: 2,
            day: 30
        }
        .to_string(),
        "invalid calendar date 2025-02-30"
    );
}

// ── Time utilities ──

#[test]
fn test_time_roundtrip() {
    for m in [0, 1, 59, 60, 61, 120, 719, 720, 721, 1439] {
        assert_eq!(time_to_minutes(minutes_to_time(m)), m, "minutes={}", m);
    }
}

#[test]
fn test_known_time_conversions() {
    assert_eq!(minutes_to_time(0), (0, 0));
    assert_eq!(minutes_to_time(720), (12, 0));
    assert_eq!(minutes_to_time(1439), (23, 59));
    assert_eq!(minutes_to_time(390), (6, 30));
}

#[test]
fn test_minutes_to_time_wraps_into_one_day() {
    assert_eq!(minutes_to_time(-30), (23, 30));
    assert_eq!(minutes_to_time(1440), (0, 0));
    assert_eq!(minutes_to_time(1500), (1, 0));
    assert_eq!(minutes_to_time(-1441), (23, 59));
}

#[test]
fn test_hours_to_minutes_rounds_and_wraps() {
    assert_eq!(hours_to_minutes(3.7118), 223);
    assert_eq!(hours_to_minutes(23.999), 0);
    assert_eq!(hours_to_minutes(-0.5), 1410);
}

#[test]
fn test_format_hhmm() {
    assert_eq!(format_hhmm(3.7118), "03:43");
    assert_eq!(format_hhmm(20.3522), "20:21");
    assert_eq!(format_hhmm(0.0), "00:00");
    assert_eq!(format_hhmm(12.5), "12:30");
}

// ── Generation ──

#[test]
fn test_almanac_covers_year() {
    assert_eq!(SPRINGFIELD.days.len(), 365);
    assert_eq!(SPRINGFIELD.metadata.total_days, 365);
    let leap = generate_almanac(&AlmanacConfig {
        year: 2024,
        ..SPRINGFIELD_CONFIG
    })
    .unwrap();
    assert_eq!(leap.days.len(), 366);
    assert_eq!(leap.days[59].date, CalendarDate::new(2024, 2, 29));
}

#[test]
fn test_almanac_days_are_consecutive() {
    for (i, pair) in SPRINGFIELD.days.windows(2).enumerate() {
        assert_eq!(pair[1].day_count, pair[0].day_count + 1, "index {}", i);
        assert_eq!(pair[1].day_of_year, pair[0].day_of_year + 1);
    }
    assert_eq!(SPRINGFIELD.days[0].date, CalendarDate::new(2026, 1, 1));
    assert_eq!(SPRINGFIELD.days[364].date, CalendarDate::new(2026, 12, 31));
}

#[test]
fn test_metadata() {
    assert_eq!(SPRINGFIELD.metadata.polar_days, 0);
    assert_eq!(SPRINGFIELD.metadata.polar_nights, 0);
    assert!(SPRINGFIELD.metadata.generated_at.ends_with("+00:00"));
    assert_eq!(SPRINGFIELD.config, SPRINGFIELD_CONFIG);
}

#[test]
fn test_arctic_metadata() {
    let m = &TROMSO.metadata;
    assert!((60..=75).contains(&m.polar_days), "polar_days={}", m.polar_days);
    assert!((40..=55).contains(&m.polar_nights), "polar_nights={}", m.polar_nights);
}

// ── Lookup ──

#[test]
fn test_lookup_day() {
    let day = lookup_day(&SPRINGFIELD, 3, 21).unwrap();
    assert_eq!(day.day_of_year, 80);
    assert_eq!(day.day_count, 9577);
    assert!(lookup_day(&SPRINGFIELD, 2, 29).is_none());
    assert!(lookup_day(&SPRINGFIELD, 13, 1).is_none());
}

#[test]
fn test_almanac_day_matches_solver() {
    let day = lookup_day(&SPRINGFIELD, 6, 21).unwrap();
    assert_eq!(
        day.sunrise_sunset,
        solar_ephemeris::sun_rise_set(2026, 6, 21, -89.6, 39.8)
    );
    assert_eq!(
        day.day_length,
        solar_ephemeris::daylight_length(2026, 6, 21, -89.6, 39.8)
    );
}

#[test]
fn test_almanac_day_out_of_range_month() {
    // garbage in, garbage out, but no panic
    for month in [0, 13, u32::MAX] {
        let day = almanac_day(CalendarDate::new(2026, month, 1), 0.0, 51.5);
        assert!(day.day_of_year >= 1, "month={}", month);
    }
}

// ── Light condition ──

#[test]
fn test_light_condition_springfield_equinox() {
    let day = lookup_day(&SPRINGFIELD, 3, 21).unwrap();
    let cases: &[(f64, LightCondition)] = &[
        (18.09, LightCondition::Day),
        (11.8, LightCondition::CivilTwilight),
        (11.3, LightCondition::NauticalTwilight),
        (10.7, LightCondition::AstronomicalTwilight),
        (10.0, LightCondition::Night),
        (0.5, LightCondition::CivilTwilight),
        (2.0, LightCondition::Night),
    ];
    for &(hours, expected) in cases {
        assert_eq!(light_condition(day, hours), expected, "hours={}", hours);
    }
}

#[test]
fn test_light_condition_polar_night() {
    let day = lookup_day(&TROMSO, 12, 21).unwrap();
    assert_eq!(day.day_length, DayLength::AlwaysBelow);
    assert_eq!(light_condition(day, 10.7), LightCondition::CivilTwilight);
    assert_eq!(light_condition(day, 7.5), LightCondition::NauticalTwilight);
    assert_eq!(light_condition(day, 6.0), LightCondition::AstronomicalTwilight);
    assert_eq!(light_condition(day, 3.0), LightCondition::Night);
}

#[test]
fn test_light_condition_midnight_sun() {
    let day = lookup_day(&TROMSO, 6, 21).unwrap();
    assert_eq!(day.day_length, DayLength::AlwaysAbove);
    for hours in [0.0, 6.0, 12.0, 23.5] {
        assert_eq!(light_condition(day, hours), LightCondition::Day);
    }
}
