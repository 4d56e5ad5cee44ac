pub const DEGREES_PER_HOUR: f64 = 15.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn sind(deg: f64) -> f64 {
    deg_to_rad(deg).sin()
}

pub fn cosd(deg: f64) -> f64 {
    deg_to_rad(deg).cos()
}

pub fn tand(deg: f64) -> f64 {
    deg_to_rad(deg).tan()
}

pub fn asind(x: f64) -> f64 {
    rad_to_deg(x.asin())
}

pub fn acosd(x: f64) -> f64 {
    rad_to_deg(x.acos())
}

pub fn atand(x: f64) -> f64 {
    rad_to_deg(x.atan())
}

pub fn atan2d(y: f64, x: f64) -> f64 {
    rad_to_deg(y.atan2(x))
}

/// Reduces an angle into [0, 360).
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Reduces an angle into [-180, 180).
pub fn rev180(angle: f64) -> f64 {
    normalize_angle(angle + 180.0) - 180.0
}

/// Reduces decimal hours into [0, 24).
pub fn wrap_hours(hours: f64) -> f64 {
    let h = hours.rem_euclid(24.0);
    if h >= 24.0 {
        0.0
    } else {
        h
    }
}
