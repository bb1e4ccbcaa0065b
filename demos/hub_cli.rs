//! CLI application for controlling lights through the hub.
//!
//! Run with: cargo run --example hub_cli -- --help

use std::time::Duration;

use clap::{Parser, Subcommand};
use yeelight_hub_rs::{
    Brightness, ClientConfig, Color, DiscoveryConfig, Hsv, Hub, Kelvin, RetryPolicy,
    discover_hub,
};

#[derive(Parser)]
#[command(name = "hub-cli")]
#[command(about = "Control hub-attached lights from the command line", long_about = None)]
struct Cli {
    /// Hub address; discovered when omitted
    #[arg(short, long, global = true)]
    address: Option<String>,

    /// Per-exchange timeout in milliseconds
    #[arg(short, long, global = true, default_value = "2000")]
    timeout: u64,

    /// Retries after a connection failure or timeout
    #[arg(short, long, global = true, default_value = "0")]
    retries: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the hub on the network
    Discover,

    /// Check the hub is responding
    Ping,

    /// List every light and its state
    Status,

    /// Turn a light on
    On { id: String },

    /// Turn a light off
    Off { id: String },

    /// Toggle a light on/off
    Toggle { id: String },

    /// Turn every light off
    AllOff,

    /// Set RGB color (0-255 for each component)
    Color {
        id: String,
        red: u8,
        green: u8,
        blue: u8,
    },

    /// Set color and brightness together
    Set {
        id: String,
        red: u8,
        green: u8,
        blue: u8,
        /// Brightness level (0-100)
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        level: u8,
    },

    /// Set brightness as a fraction (0.0-1.0)
    Brightness { id: String, fraction: f64 },

    /// Set color from hue, saturation and value (each 0.0-1.0)
    Hsv {
        id: String,
        hue: f64,
        saturation: f64,
        value: f64,
    },

    /// Set color temperature in Kelvin (1000-40000)
    Temperature {
        id: String,
        #[arg(value_parser = clap::value_parser!(u16).range(1000..=40000))]
        kelvin: u16,
    },

    /// Send a raw protocol command (terminator is appended)
    Raw { command: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = ClientConfig::default();
    config.transport.connect_timeout = Duration::from_millis(cli.timeout);
    config.transport.read_timeout = Duration::from_millis(cli.timeout);
    config.transport.retry = RetryPolicy::fixed(cli.retries, Duration::from_millis(250));

    let hub = match cli.address {
        Some(address) => Hub::with_config(&address, config),
        None => {
            println!("Discovering hub...");
            let found = discover_hub(&DiscoveryConfig::default()).await?;
            println!("Hub found at {}", found.address);
            found.into_hub(config)
        }
    };

    match cli.command {
        Commands::Discover => {}

        Commands::Ping => match hub.heartbeat().await {
            Ok(()) => println!("Hub is responding"),
            Err(e) => eprintln!("Hub is not responding: {}", e),
        },

        Commands::Status => {
            let lights = hub.get_lights().await?;
            println!("{} light(s):", lights.len());
            for light in lights {
                println!(
                    "  {:6} {:7} {:3}%  RGB({}, {}, {})  link {}",
                    light.id,
                    if light.is_online() { "online" } else { "offline" },
                    light.level,
                    light.red,
                    light.green,
                    light.blue,
                    light.link_quality
                );
            }
        }

        Commands::On { id } => hub.set_on_off(&id, true).await?,

        Commands::Off { id } => hub.set_on_off(&id, false).await?,

        Commands::Toggle { id } => hub.toggle_on_off(&id).await?,

        Commands::AllOff => hub.turn_off_all_lights().await?,

        Commands::Color {
            id,
            red,
            green,
            blue,
        } => hub.set_color(&id, &Color::rgb(red, green, blue)).await?,

        Commands::Set {
            id,
            red,
            green,
            blue,
            level,
        } => {
            let brightness = Brightness::create(level).ok_or("level must be 0-100")?;
            hub.set_light(&id, &Color::rgb(red, green, blue), &brightness)
                .await?
        }

        Commands::Brightness { id, fraction } => hub.set_brightness(&id, fraction).await?,

        Commands::Hsv {
            id,
            hue,
            saturation,
            value,
        } => {
            let hsv = Hsv::create(hue, saturation, value)
                .ok_or("hue, saturation and value must be within 0.0-1.0")?;
            hub.set_hsv(&id, &hsv).await?
        }

        Commands::Temperature { id, kelvin } => {
            let kelvin = Kelvin::create(kelvin).ok_or("temperature must be 1000-40000K")?;
            hub.set_temperature(&id, &kelvin).await?
        }

        Commands::Raw { command } => {
            let reply = hub.send_raw(&format!("{}\r\n", command)).await?;
            println!("{}", reply.trim_end());
        }
    }

    Ok(())
}
