//! Performance profile domain model.
//!
//! A profile is an externally supplied, read-only record of a player's
//! performance indicators. The engine never interprets its contents; it is
//! forwarded verbatim to the remote coaching service, which owns the shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An opaque mapping of named performance indicators.
///
/// Indicators are arbitrary JSON values, e.g. `recent_scores: [15, 18, 22]`
/// or `shooting_pct: 41.2`. The profile is immutable for the lifetime of a
/// generation request; equality is used to detect identity changes that
/// trigger automatic regeneration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerformanceProfile(Map<String, Value>);

impl PerformanceProfile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a profile from an existing indicator map.
    pub fn from_map(indicators: Map<String, Value>) -> Self {
        Self(indicators)
    }

    /// Parses a profile from a JSON object string.
    pub fn from_json_str(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Adds an indicator, consuming and returning the profile.
    pub fn with_indicator(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Returns the named indicator, if present.
    pub fn indicator(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns the underlying indicator map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Returns the number of indicators.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the profile carries no indicators.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_with_indicator() {
        let profile = PerformanceProfile::new()
            .with_indicator("recent_scores", json!([15, 18, 22]))
            .with_indicator("shooting_pct", json!(41.2));

        assert_eq!(profile.len(), 2);
        assert_eq!(profile.indicator("recent_scores"), Some(&json!([15, 18, 22])));
        assert!(profile.indicator("stamina_trend").is_none());
    }

    #[test]
    fn test_serializes_transparently() {
        let profile = PerformanceProfile::new().with_indicator("shooting_pct", json!(41.2));
        let serialized = serde_json::to_value(&profile).unwrap();
        assert_eq!(serialized, json!({ "shooting_pct": 41.2 }));
    }

    #[test]
    fn test_from_json_str() {
        let profile = PerformanceProfile::from_json_str(r#"{ "recent_scores": [15, 18, 22] }"#)
            .unwrap();
        assert_eq!(profile.indicator("recent_scores"), Some(&json!([15, 18, 22])));

        let err = PerformanceProfile::from_json_str("not json").unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_equality_detects_identity_change() {
        let a = PerformanceProfile::new().with_indicator("shooting_pct", json!(41.2));
        let b = PerformanceProfile::new().with_indicator("shooting_pct", json!(41.2));
        let c = PerformanceProfile::new().with_indicator("shooting_pct", json!(35.0));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
