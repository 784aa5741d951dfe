//! Core library for the `nowcast` CLI.
//!
//! This crate defines:
//! - Abstraction over weather providers and its OpenWeatherMap implementation
//! - Shared domain models (weather conditions)
//! - The error taxonomy for a single lookup
//!
//! It is used by `nowcast-cli`, but can also be reused by other binaries or services.

pub mod error;
pub mod model;
pub mod provider;

pub use error::WeatherError;
pub use model::Condition;
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
