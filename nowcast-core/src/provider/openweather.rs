use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{error::WeatherError, model::Condition};

use super::WeatherProvider;

const API_URL: &str = "http://api.openweathermap.org/data/2.5/weather";
const ICON_BASE_URL: &str = "http://openweathermap.org/img/w";
const API_KEY_VAR: &str = "WEATHER_API_KEY";

/// Current-conditions lookup backed by the OpenWeatherMap API.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    http: Client,
    endpoint: String,
}

impl OpenWeatherProvider {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    /// Use a caller-supplied client, e.g. one carrying a request timeout.
    pub fn with_client(http: Client) -> Self {
        Self {
            http,
            endpoint: API_URL.to_string(),
        }
    }

    #[cfg(test)]
    fn with_endpoint(endpoint: String) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }
}

impl Default for OpenWeatherProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw decoded shape from the API: a list of conditions plus an error
/// message. Both fields default when absent, so a bare `{}` lands in the
/// no-data branch rather than failing to decode. Not exposed to callers.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    weather: Vec<Condition>,
    #[serde(default)]
    message: String,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, location: &str) -> Result<Condition, WeatherError> {
        // The key is read from the environment on every call, never cached.
        // When it is unset an empty key is sent and the API's rejection
        // comes back through the message field like any other remote error.
        let api_key = std::env::var(API_KEY_VAR).unwrap_or_default();

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[("APPID", api_key.as_str()), ("q", location)])
            .send()
            .await?;

        // Reading the body to completion consumes the response, so the
        // underlying stream is released on every path, error branches
        // included (reqwest closes it on drop).
        let body = res.text().await?;

        let data: Envelope = serde_json::from_str(&body)?;

        // A non-empty message is authoritative, whatever the list holds.
        if !data.message.is_empty() {
            return Err(WeatherError::RemoteMessage(data.message));
        }

        // First entry wins; any further entries are dropped.
        let Some(mut condition) = data.weather.into_iter().next() else {
            return Err(WeatherError::NoData);
        };

        // The bare icon id becomes a complete URL for client consumption.
        condition.icon = format!("{ICON_BASE_URL}/{}.png", condition.icon);

        Ok(condition)
    }
}
