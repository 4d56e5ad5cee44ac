use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SolarError {
    #[error("latitude {0} out of range [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} out of range [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("invalid calendar date {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("{0} hours is not a time of day")]
    HoursOutOfRange(f64),
}
