//! Immutable transition table.

use super::state::{EventName, StateName};
use crate::config::{ConfigError, Configuration};
use std::collections::HashMap;

#[derive(Clone, Debug)]
struct TableEntry {
    name: StateName,
    transitions: Vec<(EventName, StateName)>,
    events: HashMap<EventName, usize>,
}

impl TableEntry {
    fn target(&self, event: &str) -> Option<&StateName> {
        self.events
            .get(event)
            .map(|&position| &self.transitions[position].1)
    }
}

/// Validated `state -> event -> target` mapping.
///
/// Built once from a [`Configuration`] and never mutated afterwards. States
/// and each state's events keep their configuration order; name indexes
/// give constant-time state and event lookup.
///
/// # Example
///
/// ```rust
/// use statekeeper::config::Configuration;
/// use statekeeper::core::TransitionTable;
///
/// let config = Configuration::from_json(
///     r#"{"initialState": "off", "states": {"off": {"transitions": {"flip": "on"}}, "on": {"transitions": {"flip": "off"}}}}"#,
/// )
/// .unwrap();
/// let table = TransitionTable::build(&config).unwrap();
///
/// assert_eq!(table.target("off", "flip").map(|s| s.as_str()), Some("on"));
/// assert_eq!(table.target("off", "missing"), None);
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTable {
    entries: Vec<TableEntry>,
    index: HashMap<StateName, usize>,
}

impl TransitionTable {
    /// Validate `config` and build the table from it.
    ///
    /// Takes its own copies of every name, so the configuration may be
    /// dropped or changed afterwards without affecting the table.
    pub fn build(config: &Configuration) -> Result<Self, ConfigError> {
        if config.states.is_empty() {
            return Err(ConfigError::NoStates);
        }

        let mut entries = Vec::with_capacity(config.states.len());
        let mut index = HashMap::with_capacity(config.states.len());

        for (position, (name, state_config)) in config.states.iter().enumerate() {
            if index.insert(name.clone(), position).is_some() {
                return Err(ConfigError::DuplicateState(name.clone()));
            }

            let mut transitions = Vec::with_capacity(state_config.transitions.len());
            let mut events = HashMap::with_capacity(state_config.transitions.len());
            for (slot, (event, target)) in state_config.transitions.iter().enumerate() {
                if events.insert(event.clone(), slot).is_some() {
                    return Err(ConfigError::DuplicateEvent {
                        state: name.clone(),
                        event: event.clone(),
                    });
                }
                transitions.push((event.clone(), target.clone()));
            }

            entries.push(TableEntry {
                name: name.clone(),
                transitions,
                events,
            });
        }

        if !index.contains_key(&config.initial_state) {
            return Err(ConfigError::UnknownInitialState(
                config.initial_state.clone(),
            ));
        }

        // Targets can only be checked once every state is indexed.
        for entry in &entries {
            for (event, target) in &entry.transitions {
                if !index.contains_key(target) {
                    return Err(ConfigError::UnknownTarget {
                        state: entry.name.clone(),
                        event: event.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        Ok(Self { entries, index })
    }

    fn entry(&self, state: &str) -> Option<&TableEntry> {
        self.index.get(state).map(|&position| &self.entries[position])
    }

    /// Whether `state` is defined.
    pub fn contains_state(&self, state: &str) -> bool {
        self.index.contains_key(state)
    }

    /// The table's own copy of a state name, if defined.
    pub fn resolve(&self, state: &str) -> Option<&StateName> {
        self.entry(state).map(|entry| &entry.name)
    }

    /// Target of `event` when fired from `state`.
    ///
    /// Only `state`'s own transitions are consulted.
    pub fn target(&self, state: &str, event: &str) -> Option<&StateName> {
        self.entry(state)?.target(event)
    }

    /// All state names in configuration order.
    pub fn state_names(&self) -> impl Iterator<Item = &StateName> + '_ {
        self.entries.iter().map(|entry| &entry.name)
    }

    /// States defining a transition for `event`, in configuration order.
    ///
    /// The returned names borrow from the table only, not from `event`.
    pub fn states_with_event(&self, event: &str) -> Vec<&StateName> {
        self.entries
            .iter()
            .filter(|entry| entry.events.contains_key(event))
            .map(|entry| &entry.name)
            .collect()
    }

    /// Events defined for `state`, in configuration order.
    ///
    /// Empty when the state is unknown or has no transitions.
    pub fn events(&self, state: &str) -> Vec<&EventName> {
        self.entry(state)
            .map(|entry| entry.transitions.iter().map(|(event, _)| event).collect())
            .unwrap_or_default()
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of transitions across all states.
    pub fn transition_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.transitions.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StateConfig;

    fn config(initial: &str, states: &[(&str, &[(&str, &str)])]) -> Configuration {
        Configuration {
            initial_state: initial.into(),
            states: states
                .iter()
                .map(|(name, transitions)| {
                    (
                        StateName::from(*name),
                        StateConfig {
                            transitions: transitions
                                .iter()
                                .map(|(e, t)| (EventName::from(*e), StateName::from(*t)))
                                .collect(),
                        },
                    )
                })
                .collect(),
        }
    }

    fn device() -> Configuration {
        config(
            "idle",
            &[
                ("idle", &[("start", "running")]),
                ("running", &[("stop", "idle"), ("pause", "paused")]),
                ("paused", &[("resume", "running")]),
            ],
        )
    }

    #[test]
    fn builds_from_valid_config() {
        let table = TransitionTable::build(&device()).unwrap();
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
        assert_eq!(table.transition_count(), 4);
    }

    #[test]
    fn target_is_scoped_to_state() {
        let table = TransitionTable::build(&device()).unwrap();
        assert_eq!(table.target("running", "stop").unwrap(), "idle");
        assert_eq!(table.target("idle", "stop"), None);
        assert_eq!(table.target("missing", "stop"), None);
    }

    #[test]
    fn state_names_keep_order() {
        let table = TransitionTable::build(&device()).unwrap();
        let names: Vec<&str> = table.state_names().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["idle", "running", "paused"]);
    }

    #[test]
    fn states_with_event_filters() {
        let table = TransitionTable::build(&device()).unwrap();
        let names: Vec<&StateName> = table.states_with_event("stop");
        assert_eq!(names, vec![&StateName::from("running")]);
        assert!(table.states_with_event("explode").is_empty());
    }

    #[test]
    fn events_lists_state_transitions() {
        let table = TransitionTable::build(&device()).unwrap();
        let events: Vec<&str> = table.events("running").iter().map(|e| e.as_str()).collect();
        assert_eq!(events, vec!["stop", "pause"]);
        assert!(table.events("missing").is_empty());
    }

    #[test]
    fn states_with_event_outlives_event_name() {
        let table = TransitionTable::build(&device()).unwrap();
        let names = {
            let event = String::from("pause");
            table.states_with_event(&event)
        };
        assert_eq!(names, vec![&StateName::from("running")]);
    }

    #[test]
    fn wide_state_resolves_every_event() {
        let events: Vec<(String, &str)> = (0..2_000).map(|i| (format!("e{i}"), "a")).collect();
        let pairs: Vec<(&str, &str)> = events.iter().map(|(e, t)| (e.as_str(), *t)).collect();
        let table = TransitionTable::build(&config("a", &[("a", pairs.as_slice())])).unwrap();

        assert_eq!(table.transition_count(), 2_000);
        assert_eq!(table.target("a", "e1999").unwrap(), "a");
        assert_eq!(table.events("a")[0], "e0");
        assert_eq!(table.target("a", "e2000"), None);
    }

    #[test]
    fn rejects_empty_states() {
        let result = TransitionTable::build(&config("a", &[]));
        assert!(matches!(result, Err(ConfigError::NoStates)));
    }

    #[test]
    fn rejects_unknown_initial() {
        let result = TransitionTable::build(&config("z", &[("a", &[])]));
        assert!(matches!(result, Err(ConfigError::UnknownInitialState(_))));
    }

    #[test]
    fn rejects_unknown_target() {
        let result = TransitionTable::build(&config("a", &[("a", &[("go", "b")])]));
        match result {
            Err(ConfigError::UnknownTarget {
                state,
                event,
                target,
            }) => {
                assert_eq!(state, "a");
                assert_eq!(event, "go");
                assert_eq!(target, "b");
            }
            other => panic!("Expected UnknownTarget, got {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_state() {
        let result = TransitionTable::build(&config("a", &[("a", &[]), ("a", &[])]));
        assert!(matches!(result, Err(ConfigError::DuplicateState(_))));
    }

    #[test]
    fn rejects_duplicate_event() {
        let result =
            TransitionTable::build(&config("a", &[("a", &[("go", "a"), ("go", "a")])]));
        assert!(matches!(result, Err(ConfigError::DuplicateEvent { .. })));
    }

    #[test]
    fn table_is_decoupled_from_config() {
        let mut cfg = device();
        let table = TransitionTable::build(&cfg).unwrap();
        cfg.states.clear();
        cfg.initial_state = "gone".into();
        assert_eq!(table.len(), 3);
        assert!(table.contains_state("paused"));
    }
}
