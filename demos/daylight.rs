use chrono::NaiveDate;

use solar_ephemeris::{
    astronomical_twilight_on, civil_twilight_on, daylight_length_on, format_hhmm,
    nautical_twilight_on, sun_rise_set_on, DayLength, RiseSet,
};

fn print_events(label: &str, events: RiseSet) {
    match events {
        RiseSet::Regular { rise, set, .. } => {
            println!("{:<22} {} - {} UTC", label, format_hhmm(rise), format_hhmm(set))
        }
        RiseSet::AlwaysAbove { .. } => println!("{:<22} sun stays above all day", label),
        RiseSet::AlwaysBelow { .. } => println!("{:<22} sun stays below all day", label),
    }
}

fn main() {
    let latitude = 51.5;
    let longitude = 0.0;
    let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();

    println!("=== Sun Events ===");
    println!("Location: London ({:.1}°N, {:.1}°E)", latitude, longitude);
    println!("Date: {}", date);
    println!();

    let sun = sun_rise_set_on(&date, longitude, latitude);
    println!("Solar noon: {} UTC", format_hhmm(sun.transit()));
    print_events("Sunrise / sunset:", sun);
    print_events("Civil twilight:", civil_twilight_on(&date, longitude, latitude));
    print_events("Nautical twilight:", nautical_twilight_on(&date, longitude, latitude));
    print_events(
        "Astronomical twilight:",
        astronomical_twilight_on(&date, longitude, latitude),
    );
    println!();

    match daylight_length_on(&date, longitude, latitude) {
        DayLength::Regular(hours) => println!("Day length: {:.2} hours", hours),
        DayLength::AlwaysAbove => println!("Day length: 24 hours (midnight sun)"),
        DayLength::AlwaysBelow => println!("Day length: 0 hours (polar night)"),
    }
}
