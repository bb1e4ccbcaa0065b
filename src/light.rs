//! Light records reported by the hub.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::errors::Error;
use crate::protocol::{FIELD_SEPARATOR, LIGHT_FIELD_COUNT};
use crate::types::Color;

type Result<T> = std::result::Result<T, Error>;

/// The numeric fields of a status entry, in wire order after the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum LightField {
    Kind,
    Online,
    LinkQuality,
    Red,
    Green,
    Blue,
    Level,
    Effect,
}

/// One bulb as reported by a single `GL` query.
///
/// Values are passed through as the hub sent them; nothing beyond integer
/// conversion is validated. Records are snapshots and are never updated in
/// place, compare successive snapshots by [`Light::id`].
///
/// # Example
///
/// ```
/// use yeelight_hub_rs::Light;
///
/// let light = Light::from_entry("3CB8,1,1,80,255,0,0,100,0").unwrap();
/// assert_eq!(light.id, "3CB8");
/// assert!(light.is_on());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Light {
    /// Short hex address assigned by the hub.
    pub id: String,
    /// Device type tag, observed to always be 1.
    pub kind: i32,
    /// 1 when the bulb is reachable.
    pub online: i32,
    /// Signal quality, 0-100.
    pub link_quality: i32,
    pub red: i32,
    pub green: i32,
    pub blue: i32,
    /// Brightness, 0-100.
    pub level: i32,
    /// Reserved by the firmware.
    pub effect: i32,
}

impl Light {
    /// Parse one `id,kind,online,lqi,r,g,b,level,effect` entry.
    pub fn from_entry(entry: &str) -> Result<Self> {
        let parts: Vec<&str> = entry.split(FIELD_SEPARATOR).collect();
        if parts.len() != LIGHT_FIELD_COUNT {
            return Err(Error::Protocol(format!(
                "light entry {:?} has {} fields, expected {}",
                entry,
                parts.len(),
                LIGHT_FIELD_COUNT
            )));
        }

        let id = parts[0].trim().to_string();
        let mut values = [0i32; LIGHT_FIELD_COUNT - 1];
        for ((field, raw), slot) in LightField::iter().zip(&parts[1..]).zip(values.iter_mut()) {
            *slot = raw.trim().parse().map_err(|_| Error::Parse {
                light: id.clone(),
                field,
                value: raw.to_string(),
            })?;
        }

        let [kind, online, link_quality, red, green, blue, level, effect] = values;
        Ok(Light {
            id,
            kind,
            online,
            link_quality,
            red,
            green,
            blue,
            level,
            effect,
        })
    }

    /// Current color, with out-of-range channels clamped into 0-255.
    pub fn color(&self) -> Color {
        let channel = |v: i32| v.clamp(0, 255) as u8;
        Color::rgb(channel(self.red), channel(self.green), channel(self.blue))
    }

    /// A light is on whenever its level is non-zero.
    pub fn is_on(&self) -> bool {
        self.level != 0
    }

    pub fn is_online(&self) -> bool {
        self.online != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entry() {
        let light = Light::from_entry("50F5,1,0,60,0,255,0,0,0").unwrap();
        assert_eq!(
            light,
            Light {
                id: "50F5".into(),
                kind: 1,
                online: 0,
                link_quality: 60,
                red: 0,
                green: 255,
                blue: 0,
                level: 0,
                effect: 0,
            }
        );
        assert!(!light.is_on());
        assert!(!light.is_online());
        assert_eq!(light.color(), Color::rgb(0, 255, 0));
    }

    #[test]
    fn test_bad_field_is_reported() {
        let err = Light::from_entry("3CB8,1,1,80,2x5,0,0,100,0").unwrap_err();
        assert_eq!(
            err,
            Error::Parse {
                light: "3CB8".into(),
                field: LightField::Red,
                value: "2x5".into(),
            }
        );
        assert!(err.to_string().contains("red"));
    }

    #[test]
    fn test_empty_field_is_not_zero() {
        let err = Light::from_entry("3CB8,1,1,80,255,0,0,,0").unwrap_err();
        assert!(matches!(
            err,
            Error::Parse {
                field: LightField::Level,
                ..
            }
        ));
    }

    #[test]
    fn test_wrong_field_count() {
        assert!(matches!(
            Light::from_entry("3CB8,1,1,80"),
            Err(Error::Protocol(_))
        ));
        assert!(matches!(
            Light::from_entry("3CB8,1,1,80,255,0,0,100,0,7"),
            Err(Error::Protocol(_))
        ));
    }

    #[test]
    fn test_out_of_range_passes_through() {
        let light = Light::from_entry("3CB8,1,1,180,300,0,0,150,9").unwrap();
        assert_eq!(light.red, 300);
        assert_eq!(light.level, 150);
        assert_eq!(light.color().red(), 255);
    }

    #[test]
    fn test_field_names() {
        let names: Vec<String> = LightField::iter().map(|f| f.to_string()).collect();
        assert_eq!(names.len(), LIGHT_FIELD_COUNT - 1);
        assert_eq!(names[2], "link_quality");
    }
}
