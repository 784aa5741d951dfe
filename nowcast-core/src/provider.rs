use crate::{error::WeatherError, model::Condition};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// A source of current weather conditions for a free-form location query.
///
/// Cancellation and deadlines follow the usual async rules: dropping the
/// returned future aborts the in-flight request, and any timeout is enforced
/// by the caller, either on the surrounding task or on the HTTP client the
/// provider was built with.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Look up the current conditions for `location`.
    ///
    /// The query string is forwarded to the remote API verbatim; validating
    /// it (e.g. rejecting an empty string) is the caller's responsibility.
    async fn current(&self, location: &str) -> Result<Condition, WeatherError>;
}
