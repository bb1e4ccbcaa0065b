//! # yeelight_hub_rs
//!
//! An async Rust library for discovering a Yeelight lighting hub and
//! controlling the bulbs attached to it.
//!
//! The hub speaks a small line-based text protocol on TCP port 10003 and
//! answers SSDP discovery queries on the local network. This crate provides
//! a **runtime-agnostic** async API over both.
//!
//! ## Quick Start
//!
//! ```ignore
//! use yeelight_hub_rs::{Color, DiscoveryConfig, ClientConfig, discover_hub};
//!
//! async fn control_lights() -> Result<(), Box<dyn std::error::Error>> {
//!     // Find the hub, then talk to it directly
//!     let hub = discover_hub(&DiscoveryConfig::default())
//!         .await?
//!         .into_hub(ClientConfig::default());
//!
//!     for light in hub.get_lights().await? {
//!         hub.set_color(&light.id, &Color::rgb(0, 0, 255)).await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Discovery**: Find the hub with [`discover_hub`]
//! - **Status**: Read every bulb's color, level and link quality with [`Hub::get_lights`]
//! - **Partial updates**: Change color, brightness or both; untouched attributes
//!   are sent as empty fields and left as they are (see [`Command`])
//! - **Color models**: Convert HSV ([`Hsv`]) and color temperature ([`Kelvin`])
//!   to the RGB the hub understands
//! - **Deadlines and retry**: Every exchange is bounded by [`TransportConfig`]
//!
//! ## Runtime Selection
//!
//! Select your preferred runtime using feature flags:
//!
//! - `runtime-tokio` (default): Use the tokio async runtime
//! - `runtime-async-std`: Use the async-std runtime
//! - `runtime-smol`: Use the smol runtime

mod channel;
mod command;
mod config;
mod convert;
mod discovery;
mod errors;
mod hub;
mod light;
pub mod protocol;
mod response;
pub mod runtime;
mod types;

// Re-export public API
pub use command::Command;
pub use config::{ClientConfig, DiscoveryConfig, RetryPolicy, TransportConfig};
pub use convert::{hsv_to_rgb, temperature_to_rgb};
pub use discovery::{DiscoveredHub, discover_hub};
pub use errors::Error;
pub use hub::Hub;
pub use light::{Light, LightField};
pub use response::parse_lights;
pub use types::{Brightness, Color, Hsv, Kelvin};
