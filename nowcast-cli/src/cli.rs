use clap::Parser;
use nowcast_core::{OpenWeatherProvider, WeatherProvider};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "nowcast", version, about = "Current weather lookup")]
pub struct Cli {
    /// Location name or free-form query, e.g. "Kyiv" or "London,UK".
    pub location: String,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let provider = OpenWeatherProvider::new();
        let condition = provider.current(&self.location).await?;

        println!("{} ({})", condition.description, condition.main);
        println!("icon: {}", condition.icon);

        Ok(())
    }
}
