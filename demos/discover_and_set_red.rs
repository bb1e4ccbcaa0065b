//! Discover the hub and set every light it reports to red.
//!
//! This example demonstrates:
//! - Discovery of the hub on the local network
//! - Reading the light list
//! - Setting all lights to red at full brightness
//!
//! Run with: cargo run --example discover_and_set_red

use yeelight_hub_rs::{Brightness, ClientConfig, Color, DiscoveryConfig, discover_hub};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Discovering hub on the network...");
    let found = discover_hub(&DiscoveryConfig::default()).await?;
    println!("Found hub at {} (reply from {})", found.address, found.source);

    let hub = found.into_hub(ClientConfig::default());
    let lights = hub.get_lights().await?;

    if lights.is_empty() {
        println!("The hub reports no lights.");
        return Ok(());
    }

    println!("Found {} light(s):", lights.len());
    for light in &lights {
        println!(
            "  - {}: online={} level={} rgb=({},{},{})",
            light.id, light.online, light.level, light.red, light.green, light.blue
        );
    }

    let red = Color::rgb(255, 0, 0);

    println!("\nSetting all lights to red...");
    for light in lights {
        match hub.set_light(&light.id, &red, &Brightness::ON).await {
            Ok(_) => println!("  ✓ Successfully set {} to red", light.id),
            Err(e) => eprintln!("  ✗ Failed to set {} to red: {}", light.id, e),
        }
    }

    println!("\nDone!");
    Ok(())
}
