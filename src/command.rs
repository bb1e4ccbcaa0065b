//! Light control commands.

use std::fmt;

use crate::protocol::{BROADCAST_ID, CONTROL_PREFIX, FIELD_SEPARATOR, TERMINATOR};
use crate::types::{Brightness, Color};

/// A `C` control command for one light (or all of them).
///
/// Every unset attribute is written as an empty position, which the hub reads
/// as "leave unchanged". The positions themselves are always present.
///
/// # Creating Commands
///
/// 1. **From an operation** using one of the constructors:
///    ```
///    use yeelight_hub_rs::Command;
///    assert_eq!(Command::on_off("3CB8", true).to_string(), "C 3CB8,,,,100,\r\n");
///    ```
///
/// 2. **Builder pattern** for combining attributes:
///    ```
///    use yeelight_hub_rs::{Brightness, Color, Command};
///    let mut command = Command::new("50F5");
///    command.color(&Color::rgb(200, 100, 255));
///    command.level(&Brightness::create(90).unwrap());
///    assert_eq!(command.to_string(), "C 50F5,200,100,255,90,\r\n");
///    ```
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub(crate) id: String,
    pub(crate) red: Option<u8>,
    pub(crate) green: Option<u8>,
    pub(crate) blue: Option<u8>,
    pub(crate) level: Option<u8>,
    pub(crate) effect: Option<u8>,
}

impl Command {
    /// A command for `id` that changes nothing yet.
    pub fn new(id: &str) -> Self {
        Command {
            id: id.to_string(),
            ..Default::default()
        }
    }

    /// Color and brightness, with the effect reset to 0.
    pub fn set_light(id: &str, color: &Color, brightness: &Brightness) -> Self {
        let mut command = Self::new(id);
        command.color(color).level(brightness).effect(0);
        command
    }

    /// Full brightness or off, color untouched.
    pub fn on_off(id: &str, on: bool) -> Self {
        Self::brightness(id, &Brightness::from(on))
    }

    /// Brightness only.
    pub fn brightness(id: &str, brightness: &Brightness) -> Self {
        let mut command = Self::new(id);
        command.level(brightness);
        command
    }

    /// Color only, brightness untouched.
    pub fn color_only(id: &str, color: &Color) -> Self {
        let mut command = Self::new(id);
        command.color(color);
        command
    }

    /// Every light to black at zero brightness.
    pub fn all_off() -> Self {
        Self::set_light(BROADCAST_ID, &Color::new(), &Brightness::OFF)
    }

    pub fn color(&mut self, color: &Color) -> &mut Self {
        self.red = Some(color.red());
        self.green = Some(color.green());
        self.blue = Some(color.blue());
        self
    }

    pub fn level(&mut self, brightness: &Brightness) -> &mut Self {
        self.level = Some(brightness.value());
        self
    }

    /// Reserved by the firmware; only ever sent as 0.
    pub fn effect(&mut self, effect: u8) -> &mut Self {
        self.effect = Some(effect);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the command would change anything on the hub.
    pub fn is_empty(&self) -> bool {
        self.red.is_none()
            && self.green.is_none()
            && self.blue.is_none()
            && self.level.is_none()
            && self.effect.is_none()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CONTROL_PREFIX, self.id)?;
        for field in [self.red, self.green, self.blue, self.level, self.effect] {
            write!(f, "{}", FIELD_SEPARATOR)?;
            if let Some(value) = field {
                write!(f, "{}", value)?;
            }
        }
        f.write_str(TERMINATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_light() {
        let command = Command::set_light("50F5", &Color::rgb(200, 100, 255), &Brightness::ON);
        assert_eq!(command.to_string(), "C 50F5,200,100,255,100,0\r\n");
    }

    #[test]
    fn test_set_light_all_values() {
        for (r, g, b, level) in [(0, 0, 0, 0), (255, 255, 255, 100), (1, 22, 133, 45)] {
            let command = Command::set_light(
                "3CB8",
                &Color::rgb(r, g, b),
                &Brightness::create(level).unwrap(),
            );
            assert_eq!(
                command.to_string(),
                format!("C 3CB8,{},{},{},{},0\r\n", r, g, b, level)
            );
        }
    }

    #[test]
    fn test_on_off_keeps_empty_fields() {
        assert_eq!(Command::on_off("3CB8", true).to_string(), "C 3CB8,,,,100,\r\n");
        assert_eq!(Command::on_off("3CB8", false).to_string(), "C 3CB8,,,,0,\r\n");
    }

    #[test]
    fn test_brightness() {
        let command = Command::brightness("3CB8", &Brightness::from_fraction(0.5));
        assert_eq!(command.to_string(), "C 3CB8,,,,50,\r\n");
    }

    #[test]
    fn test_color_only() {
        let command = Command::color_only("3CB8", &Color::rgb(10, 20, 30));
        assert_eq!(command.to_string(), "C 3CB8,10,20,30,,\r\n");
    }

    #[test]
    fn test_all_off() {
        assert_eq!(Command::all_off().to_string(), "C G000,0,0,0,0,0\r\n");
    }

    #[test]
    fn test_empty_command() {
        let command = Command::new("3CB8");
        assert!(command.is_empty());
        assert_eq!(command.to_string(), "C 3CB8,,,,,\r\n");
        assert!(!Command::on_off("3CB8", false).is_empty());
    }
}
