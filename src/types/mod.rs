//! Value types for light control parameters.

mod brightness;
mod color;
mod hsv;
mod kelvin;

pub use brightness::Brightness;
pub use color::Color;
pub use hsv::Hsv;
pub use kelvin::Kelvin;
