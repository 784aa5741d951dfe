use thiserror::Error;

/// Failures surfaced by a weather lookup.
///
/// Every call returns either a condition or exactly one of these; there are
/// no partial results. Nothing is retried locally, the caller decides
/// whether to try again.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Transport-level failure: DNS, connection refused, timeout, or the
    /// request was aborted before a body could be read.
    #[error("could not get weather: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The response body was not the JSON shape we expect.
    #[error("could not decode weather: {0}")]
    Decode(#[from] serde_json::Error),

    /// The remote API reported an error of its own, e.g. an invalid key.
    #[error("no weather found: {0}")]
    RemoteMessage(String),

    /// The remote API answered cleanly but listed no conditions.
    #[error("no weather found")]
    NoData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_message_is_included_in_display() {
        let err = WeatherError::RemoteMessage("invalid key".to_string());
        assert_eq!(err.to_string(), "no weather found: invalid key");
    }

    #[test]
    fn no_data_is_generic() {
        assert_eq!(WeatherError::NoData.to_string(), "no weather found");
    }
}
