//! Brightness control.

use serde::{Deserialize, Serialize};

/// Brightness level from 0 (off) to 100 percent.
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Brightness {
    pub(crate) value: u8,
}

impl Brightness {
    const MIN: u8 = 0;
    const MAX: u8 = 100;

    /// Full brightness.
    pub const ON: Brightness = Brightness { value: Self::MAX };

    /// Zero brightness; the hub treats this as off.
    pub const OFF: Brightness = Brightness { value: Self::MIN };

    pub fn new() -> Self {
        Self::ON
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns None if value is outside valid range (0-100).
    pub fn create(value: u8) -> Option<Self> {
        if Self::is_valid(value) {
            Some(Brightness { value })
        } else {
            None
        }
    }

    /// Converts a fraction of full brightness, rounding to the nearest percent.
    /// Values outside `[0, 1]` are clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use yeelight_hub_rs::Brightness;
    ///
    /// assert_eq!(Brightness::from_fraction(0.5).value(), 50);
    /// assert_eq!(Brightness::from_fraction(0.0).value(), 0);
    /// assert_eq!(Brightness::from_fraction(1.0).value(), 100);
    /// assert_eq!(Brightness::from_fraction(0.257).value(), 26);
    /// ```
    pub fn from_fraction(fraction: f64) -> Self {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        Brightness {
            value: (fraction * f64::from(Self::MAX)).round() as u8,
        }
    }

    fn is_valid(value: u8) -> bool {
        (Self::MIN..=Self::MAX).contains(&value)
    }
}

impl From<bool> for Brightness {
    fn from(on: bool) -> Self {
        if on { Self::ON } else { Self::OFF }
    }
}
