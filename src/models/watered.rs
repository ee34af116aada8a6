// Watered state - Which plants are done for a given local day

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Local calendar date in `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DayStamp(String);

impl DayStamp {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifiers of the plants watered today. Absence means not watered.
///
/// Encoded as a JSON object whose values are all `true`; `false` entries
/// found while decoding are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WateredState {
    done: BTreeSet<String>,
}

impl WateredState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps only the `true` entries of a complete item map.
    pub fn from_flags<'a, I>(flags: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a bool)>,
    {
        let done = flags
            .into_iter()
            .filter(|(_, watered)| **watered)
            .map(|(id, _)| id.clone())
            .collect();
        Self { done }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.done.contains(id)
    }

    pub fn count(&self) -> usize {
        self.done.len()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.done.iter().map(String::as_str)
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl Serialize for WateredState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let map: BTreeMap<&str, bool> = self.ids().map(|id| (id, true)).collect();
        map.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WateredState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<String, bool>::deserialize(deserializer)?;
        Ok(Self::from_flags(&map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_stamp_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(DayStamp::from_date(date).as_str(), "2025-01-05");
    }

    #[test]
    fn false_entries_are_not_materialized() {
        let mut flags = BTreeMap::new();
        flags.insert("a".to_string(), true);
        flags.insert("b".to_string(), false);

        let state = WateredState::from_flags(&flags);
        assert!(state.contains("a"));
        assert!(!state.contains("b"));
        assert_eq!(state.to_json().unwrap(), r#"{"a":true}"#);
    }

    #[test]
    fn decoding_drops_false_values() {
        let state = WateredState::from_json(r#"{"a":true,"b":false}"#).unwrap();
        assert_eq!(state.count(), 1);
        assert!(state.contains("a"));
    }

    #[test]
    fn empty_state_encodes_as_empty_object() {
        assert_eq!(WateredState::new().to_json().unwrap(), "{}");
    }

    #[test]
    fn non_object_json_is_rejected() {
        assert!(WateredState::from_json("[1,2]").is_err());
        assert!(WateredState::from_json(r#"{"a":1}"#).is_err());
        assert!(WateredState::from_json("not json").is_err());
    }
}
