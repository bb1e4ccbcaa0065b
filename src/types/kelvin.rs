//! Color temperature control.

use serde::{Deserialize, Serialize};

use super::Color;
use crate::convert::temperature_to_rgb;

/// Color temperature in Kelvin, with valid values from 1000K to 40000K.
///
/// The hub only takes RGB, so a temperature is sent as its approximate
/// black-body color. Typical values:
/// - 2700K: Warm white (incandescent-like)
/// - 4000K: Neutral white
/// - 6600K: Pure white
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Kelvin {
    pub(crate) kelvin: u16,
}

impl Kelvin {
    const MIN: u16 = 1000;
    const MAX: u16 = 40000;

    /// Create a new Kelvin with the default value (1000K).
    ///
    /// # Examples
    ///
    /// ```
    /// use yeelight_hub_rs::Kelvin;
    ///
    /// assert_eq!(Kelvin::new().kelvin(), 1000);
    /// ```
    pub fn new() -> Self {
        Kelvin { kelvin: Self::MIN }
    }

    /// Get the kelvin value.
    pub fn kelvin(&self) -> u16 {
        self.kelvin
    }

    /// Create a new Kelvin with the given value.
    ///
    /// Returns `None` if value is outside the valid range (1000-40000).
    ///
    /// # Examples
    ///
    /// ```
    /// use yeelight_hub_rs::Kelvin;
    ///
    /// assert!(Kelvin::create(999).is_none());
    /// assert!(Kelvin::create(1000).is_some());
    /// assert!(Kelvin::create(40000).is_some());
    /// assert!(Kelvin::create(40001).is_none());
    /// ```
    pub fn create(kelvin: u16) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&kelvin) {
            Some(Kelvin { kelvin })
        } else {
            None
        }
    }

    /// Approximate RGB color of this temperature.
    ///
    /// ```
    /// use yeelight_hub_rs::{Color, Kelvin};
    ///
    /// assert_eq!(Kelvin::create(6600).unwrap().to_color(), Color::rgb(255, 255, 255));
    /// ```
    pub fn to_color(&self) -> Color {
        temperature_to_rgb(f64::from(self.kelvin))
    }
}

impl From<&Kelvin> for Color {
    fn from(kelvin: &Kelvin) -> Self {
        kelvin.to_color()
    }
}
