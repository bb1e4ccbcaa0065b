//! Hue, saturation and value color representation.

use serde::{Deserialize, Serialize};

use super::Color;
use crate::convert::hsv_to_rgb;

/// HSV color with every component expressed as a fraction in `[0, 1]`.
///
/// A friendlier way to pick colors than raw RGB; the hub itself only
/// understands RGB, so this is converted before sending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    hue: f64,
    saturation: f64,
    value: f64,
}

impl Hsv {
    /// Create a new Hsv with the given values.
    ///
    /// Returns `None` if any component is outside `[0, 1]` or NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use yeelight_hub_rs::Hsv;
    ///
    /// assert!(Hsv::create(0.0, 1.0, 1.0).is_some());
    /// assert!(Hsv::create(1.0 / 3.0, 0.5, 0.8).is_some());
    /// assert!(Hsv::create(1.2, 0.5, 0.5).is_none());
    /// assert!(Hsv::create(0.5, -0.1, 0.5).is_none());
    /// ```
    pub fn create(hue: f64, saturation: f64, value: f64) -> Option<Self> {
        let unit = |x: f64| (0.0..=1.0).contains(&x);
        if unit(hue) && unit(saturation) && unit(value) {
            Some(Hsv {
                hue,
                saturation,
                value,
            })
        } else {
            None
        }
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Convert to RGB Color.
    ///
    /// # Examples
    ///
    /// ```
    /// use yeelight_hub_rs::Hsv;
    ///
    /// let color = Hsv::create(0.0, 1.0, 1.0).unwrap().to_color();
    /// assert_eq!(color.red(), 255);
    /// assert_eq!(color.green(), 0);
    /// assert_eq!(color.blue(), 0);
    /// ```
    pub fn to_color(&self) -> Color {
        hsv_to_rgb(self.hue, self.saturation, self.value)
    }
}

impl From<&Hsv> for Color {
    fn from(hsv: &Hsv) -> Self {
        hsv.to_color()
    }
}
