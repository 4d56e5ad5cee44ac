use chrono::{Datelike, NaiveDate};

use crate::calendar;
use crate::error::SolarError;

/// Days elapsed since 2000 Jan 0.0 (1999-12-31, 0h UT).
pub type DayCount = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn day_count(&self) -> DayCount {
        calendar::days_since_epoch(self.year, self.month, self.day)
    }

    pub fn to_naive_date(&self) -> Result<NaiveDate, SolarError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or(SolarError::InvalidDate {
            year: self.year,
            month: self.month,
            day: self.day,
        })
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

/// Observer location in degrees, east and north positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoCoordinate {
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, SolarError> {
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(SolarError::LongitudeOutOfRange(longitude));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(SolarError::LatitudeOutOfRange(latitude));
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }
}

/// Solar altitude the rise/set solver looks for.
///
/// With `upper_limb` set the altitude refers to the top edge of the disc and
/// the apparent solar radius is subtracted before solving; otherwise it refers
/// to the centre of the disc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltitudeThreshold {
    pub altitude: f64,
    pub upper_limb: bool,
}

impl AltitudeThreshold {
    /// Upper limb 35 arc minutes below the horizon, which absorbs refraction.
    pub const SUNRISE_SUNSET: Self = Self::new(-35.0 / 60.0, true);
    pub const CIVIL_TWILIGHT: Self = Self::new(-6.0, false);
    pub const NAUTICAL_TWILIGHT: Self = Self::new(-12.0, false);
    pub const ASTRONOMICAL_TWILIGHT: Self = Self::new(-18.0, false);

    pub const fn new(altitude: f64, upper_limb: bool) -> Self {
        Self {
            altitude,
            upper_limb,
        }
    }

    /// Altitude of the sun's centre at the crossing, given its distance in AU.
    pub fn center_altitude(&self, distance: f64) -> f64 {
        if self.upper_limb {
            self.altitude - crate::ephemeris::apparent_radius(distance)
        } else {
            self.altitude
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    /// Ecliptic longitude, degrees in [0, 360).
    pub longitude: f64,
    /// Sun-earth distance, AU.
    pub distance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Hours in [0, 24).
    pub right_ascension: f64,
    /// Degrees.
    pub declination: f64,
    /// AU.
    pub distance: f64,
}

/// Hours the sun spends above a threshold on one date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DayLength {
    Regular(f64),
    /// Never drops below the threshold.
    AlwaysAbove,
    /// Never reaches the threshold.
    AlwaysBelow,
}

impl DayLength {
    pub fn hours(&self) -> f64 {
        match self {
            DayLength::Regular(hours) => *hours,
            DayLength::AlwaysAbove => 24.0,
            DayLength::AlwaysBelow => 0.0,
        }
    }

    pub fn is_circumpolar(&self) -> bool {
        !matches!(self, DayLength::Regular(_))
    }
}

/// Threshold crossings for one date, UTC decimal hours in [0, 24).
///
/// `transit` is the time of solar noon and is reported even when the
/// threshold is never crossed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSet {
    Regular { rise: f64, transit: f64, set: f64 },
    AlwaysAbove { transit: f64 },
    AlwaysBelow { transit: f64 },
}

impl RiseSet {
    pub fn transit(&self) -> f64 {
        match self {
            RiseSet::Regular { transit, .. }
            | RiseSet::AlwaysAbove { transit }
            | RiseSet::AlwaysBelow { transit } => *transit,
        }
    }

    pub fn rise(&self) -> Option<f64> {
        match self {
            RiseSet::Regular { rise, .. } => Some(*rise),
            _ => None,
        }
    }

    pub fn set(&self) -> Option<f64> {
        match self {
            RiseSet::Regular { set, .. } => Some(*set),
            _ => None,
        }
    }

    pub fn is_circumpolar(&self) -> bool {
        !matches!(self, RiseSet::Regular { .. })
    }

    /// Hours between rise and set, wrapping past midnight UTC.
    pub fn duration(&self) -> f64 {
        match self {
            RiseSet::Regular { rise, set, .. } => (set - rise).rem_euclid(24.0),
            RiseSet::AlwaysAbove { .. } => 24.0,
            RiseSet::AlwaysBelow { .. } => 0.0,
        }
    }

    /// Whether the sun is above the threshold at `utc_hours`.
    pub fn contains(&self, utc_hours: f64) -> bool {
        match *self {
            RiseSet::Regular { rise, set, .. } => {
                let t = utc_hours.rem_euclid(24.0);
                if rise <= set {
                    t >= rise && t < set
                } else {
                    t >= rise || t < set
                }
            }
            RiseSet::AlwaysAbove { .. } => true,
            RiseSet::AlwaysBelow { .. } => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightCondition {
    Day,
    CivilTwilight,
    NauticalTwilight,
    AstronomicalTwilight,
    Night,
}

/// Observer and year for [`crate::almanac::generate_almanac`].
///
/// Defaults to Greenwich, where UTC and local mean time coincide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlmanacConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub year: i32,
}

impl Default for AlmanacConfig {
    fn default() -> Self {
        Self {
            latitude: 51.4779,
            longitude: 0.0,
            year: 2026,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlmanacDay {
    pub day_of_year: u32,
    pub date: CalendarDate,
    pub day_count: DayCount,
    pub day_length: DayLength,
    pub sunrise_sunset: RiseSet,
    pub civil_twilight: RiseSet,
    pub nautical_twilight: RiseSet,
    pub astronomical_twilight: RiseSet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlmanacMetadata {
    pub generated_at: String,
    pub total_days: usize,
    pub polar_days: usize,
    pub polar_nights: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Almanac {
    pub config: AlmanacConfig,
    pub days: Vec<AlmanacDay>,
    pub metadata: AlmanacMetadata,
}
