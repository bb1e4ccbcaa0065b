//! Hub client: every light operation goes through here.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::channel;
use crate::command::Command;
use crate::config::ClientConfig;
use crate::errors::Error;
use crate::light::Light;
use crate::protocol::{GET_LIGHTS, HEARTBEAT, HEARTBEAT_ACK};
use crate::response::parse_lights;
use crate::types::{Brightness, Color, Hsv, Kelvin};

type Result<T> = std::result::Result<T, Error>;

/// A lighting hub on the local network.
///
/// A `Hub` is only an address plus client settings; it keeps no connection
/// open and caches no light state. Every call opens a fresh connection to the
/// command port, performs one exchange and closes it.
///
/// # Example
///
/// ```
/// use yeelight_hub_rs::Hub;
///
/// let hub = Hub::new("192.168.1.59");
/// assert_eq!(hub.address(), "192.168.1.59");
/// assert!(hub.light_ids().is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hub {
    address: String,
    #[serde(default)]
    light_ids: Vec<String>,
    #[serde(default)]
    config: ClientConfig,
}

impl Hub {
    pub fn new(address: &str) -> Self {
        Self::with_config(address, ClientConfig::default())
    }

    pub fn with_config(address: &str, config: ClientConfig) -> Self {
        Hub {
            address: address.to_string(),
            light_ids: Vec::new(),
            config,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Point the client at a new address, e.g. after re-discovery.
    pub fn set_address(&mut self, address: &str) {
        self.address = address.to_string();
    }

    /// Light ids seen by the last [`Hub::refresh_light_ids`].
    pub fn light_ids(&self) -> &[String] {
        &self.light_ids
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send raw protocol text and return the hub's reply line.
    ///
    /// The caller supplies the terminator.
    pub async fn send_raw(&self, command: &str) -> Result<String> {
        channel::send(command, &self.endpoint(), &self.config.transport).await
    }

    /// Query the current state of every light.
    pub async fn get_lights(&self) -> Result<Vec<Light>> {
        let reply = self.send_raw(GET_LIGHTS).await?;
        parse_lights(&reply, self.config.response_headers.as_slice())
    }

    /// Re-read the light list and remember the ids.
    pub async fn refresh_light_ids(&mut self) -> Result<&[String]> {
        let lights = self.get_lights().await?;
        self.light_ids = lights.into_iter().map(|l| l.id).collect();
        Ok(&self.light_ids)
    }

    /// Check the hub is alive. Anything but the exact acknowledgement fails.
    pub async fn heartbeat(&self) -> Result<()> {
        let reply = self.send_raw(HEARTBEAT).await?;
        if reply == HEARTBEAT_ACK {
            Ok(())
        } else {
            Err(Error::Protocol(format!(
                "unexpected heartbeat reply {:?}",
                reply
            )))
        }
    }

    /// Send a control command. The hub's reply carries no status and is ignored.
    pub async fn send(&self, command: &Command) -> Result<()> {
        let reply = self.send_raw(&command.to_string()).await?;
        debug!("hub acknowledged {} with {:?}", command.id(), reply);
        Ok(())
    }

    pub async fn turn_off_all_lights(&self) -> Result<()> {
        self.send(&Command::all_off()).await
    }

    /// Set color and brightness together; the effect field is reset to 0.
    pub async fn set_light(&self, id: &str, color: &Color, brightness: &Brightness) -> Result<()> {
        self.send(&Command::set_light(id, color, brightness)).await
    }

    /// Full brightness when `on`, zero otherwise. Color is left unchanged.
    pub async fn set_on_off(&self, id: &str, on: bool) -> Result<()> {
        self.send(&Command::on_off(id, on)).await
    }

    /// Set brightness from a fraction in `[0, 1]`, leaving color unchanged.
    pub async fn set_brightness(&self, id: &str, fraction: f64) -> Result<()> {
        self.send(&Command::brightness(id, &Brightness::from_fraction(fraction)))
            .await
    }

    /// Set color, leaving brightness unchanged.
    pub async fn set_color(&self, id: &str, color: &Color) -> Result<()> {
        self.send(&Command::color_only(id, color)).await
    }

    pub async fn set_hsv(&self, id: &str, hsv: &Hsv) -> Result<()> {
        self.set_color(id, &hsv.to_color()).await
    }

    /// Set the black-body color of `kelvin`, leaving brightness unchanged.
    pub async fn set_temperature(&self, id: &str, kelvin: &Kelvin) -> Result<()> {
        self.set_color(id, &kelvin.to_color()).await
    }

    /// Turn the light off if it is lit, on otherwise.
    ///
    /// Reads the light list first; an unknown `id` fails with
    /// [`Error::LightNotFound`] before any control command is sent.
    pub async fn toggle_on_off(&self, id: &str) -> Result<()> {
        let lights = self.get_lights().await?;
        let light = lights
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| Error::LightNotFound(id.to_string()))?;
        self.set_on_off(id, !light.is_on()).await
    }

    fn endpoint(&self) -> String {
        format!("{}:{}", self.address, self.config.port)
    }
}
