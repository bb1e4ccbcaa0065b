//! Colour-model conversions used to compute command parameters.

use crate::types::Color;

/// Converts an HSV triple (each component in `[0, 1]`) to 8-bit RGB.
///
/// Hue wraps, so `h = 1.0` is the same red as `h = 0.0`.
///
/// # Examples
///
/// ```
/// use yeelight_hub_rs::hsv_to_rgb;
///
/// assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), yeelight_hub_rs::Color::rgb(255, 0, 0));
/// assert_eq!(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), yeelight_hub_rs::Color::rgb(0, 255, 0));
/// ```
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Color {
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Color::rgb(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b))
}

/// Approximates the RGB colour of a black body at `kelvin` (meaningful over
/// 1000K to 40000K).
///
/// Channels are clamped to `[0, 255]` and truncated.
pub fn temperature_to_rgb(kelvin: f64) -> Color {
    let temp = kelvin / 100.0;

    let red = if temp <= 66.0 {
        255.0
    } else {
        329.698727446 * (temp - 60.0).powf(-0.1332047592)
    };

    let green = if temp <= 66.0 {
        99.4708025861 * temp.ln() - 161.1195681661
    } else {
        288.1221695283 * (temp - 60.0).powf(-0.0755148492)
    };

    let blue = if temp >= 66.0 {
        255.0
    } else if temp <= 19.0 {
        0.0
    } else {
        138.5177312231 * (temp - 10.0).ln() - 305.0447927307
    };

    Color::rgb(clamp_to_u8(red), clamp_to_u8(green), clamp_to_u8(blue))
}

/// Clamp to `[0, 1]`, scale to 255 and round half up.
fn unit_to_u8(x: f64) -> u8 {
    if x <= 0.0 || x.is_nan() {
        0
    } else if x >= 1.0 {
        255
    } else {
        (x * 255.0 + 0.5).floor() as u8
    }
}

fn clamp_to_u8(x: f64) -> u8 {
    // `as` saturates and maps NaN to 0
    x.clamp(0.0, 255.0) as u8
}
