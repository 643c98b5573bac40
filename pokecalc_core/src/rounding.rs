//! Half-up rounding to a fixed number of decimal places
//!
//! Display values are rounded as `floor(x * 10^places + 0.5) / 10^places`,
//! which rounds ties toward positive infinity regardless of how the value
//! would later be formatted.

/// Round `value` half-up to `places` decimal places
pub fn round_half_up(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor + 0.5).floor() / factor
}
