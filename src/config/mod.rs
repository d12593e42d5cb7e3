//! Machine configuration.
//!
//! A configuration names the initial state and, for every state, the events
//! it reacts to and where each one leads. It is plain data: parse it from
//! JSON, assemble it with [`ConfigBuilder`](crate::builder::ConfigBuilder),
//! or write it with the [`machine_config!`](crate::machine_config) macro.
//!
//! ```json
//! {
//!   "initialState": "idle",
//!   "states": {
//!     "idle":    { "transitions": { "start": "running" } },
//!     "running": { "transitions": { "stop": "idle", "pause": "paused" } },
//!     "paused":  { "transitions": { "resume": "running" } }
//!   }
//! }
//! ```
//!
//! Object key order is significant and preserved: it determines the order
//! in which states and events are reported.

use crate::core::{EventName, StateName, TransitionTable};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::ConfigError;

/// Declarative description of a state machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// State the machine starts in and returns to on reset
    #[serde(alias = "initial")]
    pub initial_state: StateName,

    /// States in declaration order
    #[serde(with = "ordered_map")]
    pub states: Vec<(StateName, StateConfig)>,
}

/// Transitions leaving a single state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Event to target state, in declaration order
    #[serde(default, with = "ordered_map")]
    pub transitions: Vec<(EventName, StateName)>,
}

impl Configuration {
    /// Parse a configuration from JSON text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statekeeper::config::Configuration;
    ///
    /// let config = Configuration::from_json(
    ///     r#"{"initialState": "off", "states": {"off": {"transitions": {"flip": "on"}}, "on": {}}}"#,
    /// )
    /// .unwrap();
    /// assert_eq!(config.initial_state, "off");
    /// assert_eq!(config.states.len(), 2);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a configuration from an already-decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Check that a machine can be built from this configuration.
    ///
    /// Requires at least one state, unique state names, unique events per
    /// state, a known initial state, and known transition targets.
    pub fn validate(&self) -> Result<(), ConfigError> {
        TransitionTable::build(self).map(|_| ())
    }

    /// Serialize back to pretty-printed JSON, preserving declaration order.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Serde adapter storing a JSON object as an ordered list of pairs.
///
/// Duplicate keys are rejected rather than silently overwritten.
mod ordered_map {
    use serde::de::{self, MapAccess, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::HashSet;
    use std::fmt;
    use std::hash::Hash;
    use std::marker::PhantomData;

    #[allow(clippy::ptr_arg)]
    pub fn serialize<S, K, V>(entries: &Vec<(K, V)>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        K: Serialize,
        V: Serialize,
    {
        serializer.collect_map(entries.iter().map(|(k, v)| (k, v)))
    }

    pub fn deserialize<'de, D, K, V>(deserializer: D) -> Result<Vec<(K, V)>, D::Error>
    where
        D: Deserializer<'de>,
        K: Deserialize<'de> + Eq + Hash + Clone + fmt::Display,
        V: Deserialize<'de>,
    {
        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }

    struct OrderedMapVisitor<K, V>(PhantomData<(K, V)>);

    impl<'de, K, V> Visitor<'de> for OrderedMapVisitor<K, V>
    where
        K: Deserialize<'de> + Eq + Hash + Clone + fmt::Display,
        V: Deserialize<'de>,
    {
        type Value = Vec<(K, V)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an object with unique keys")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let capacity = map.size_hint().unwrap_or(0);
            let mut entries: Vec<(K, V)> = Vec::with_capacity(capacity);
            let mut seen: HashSet<K> = HashSet::with_capacity(capacity);
            while let Some((key, value)) = map.next_entry::<K, V>()? {
                if !seen.insert(key.clone()) {
                    return Err(de::Error::custom(format!("duplicate key `{key}`")));
                }
                entries.push((key, value));
            }
            Ok(entries)
        }
    }
}
