use serde::Deserialize;

/// One reported weather condition, as returned by the remote API.
///
/// Fields other than `icon` pass through untouched. After a successful
/// lookup, `icon` is always an absolute URL, never the bare identifier the
/// API returns. Every field decodes leniently, so a partial entry never
/// fails to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}
