//! The state machine engine.

use crate::config::{ConfigError, Configuration};
use crate::core::{EventName, History, StateName, TransitionTable};
use crate::machine::error::MachineError;

/// Finite state machine with linear undo/redo history.
///
/// Owns its transition table, initial state, current state, and history.
/// Every operation either fully applies or leaves the machine untouched.
///
/// # Example
///
/// ```rust
/// use statekeeper::machine::StateMachine;
///
/// let mut machine = StateMachine::from_json(r#"{
///     "initialState": "idle",
///     "states": {
///         "idle": { "transitions": { "start": "running" } },
///         "running": { "transitions": { "stop": "idle" } }
///     }
/// }"#)
/// .unwrap();
///
/// machine.trigger("start").unwrap();
/// assert_eq!(machine.state(), "running");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "idle");
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "running");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    table: TransitionTable,
    initial: StateName,
    current: StateName,
    history: History,
}

impl StateMachine {
    /// Build a machine from a configuration.
    ///
    /// Fails if the configuration has no states, a duplicate state or
    /// event, an unknown initial state, or a transition to an unknown state.
    pub fn new(config: Configuration) -> Result<Self, ConfigError> {
        let table = TransitionTable::build(&config)?;
        let initial = config.initial_state;

        tracing::debug!(
            initial = %initial,
            states = table.len(),
            transitions = table.transition_count(),
            "state machine created"
        );

        Ok(Self {
            table,
            current: initial.clone(),
            initial,
            history: History::new(),
        })
    }

    /// Parse a JSON configuration and build a machine from it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::new(Configuration::from_json(json)?)
    }

    /// Get the current state (pure)
    pub fn state(&self) -> &StateName {
        &self.current
    }

    /// Get the state captured at construction (pure)
    pub fn initial_state(&self) -> &StateName {
        &self.initial
    }

    /// Move to `target` regardless of transitions.
    ///
    /// Records the current state for undo and discards any redo entries.
    pub fn change_state(&mut self, target: &str) -> Result<(), MachineError> {
        let Some(target) = self.table.resolve(target).cloned() else {
            tracing::debug!(
                current = %self.current,
                requested = target,
                "rejected change to unknown state"
            );
            return Err(MachineError::InvalidState(StateName::from(target)));
        };

        tracing::debug!(from = %self.current, to = %target, "state changed");
        self.advance(target);
        Ok(())
    }

    /// Fire `event` from the current state.
    ///
    /// Only the current state's transitions are consulted. Returns the new
    /// current state on success.
    pub fn trigger(&mut self, event: &str) -> Result<&StateName, MachineError> {
        let Some(target) = self.table.target(self.current.as_str(), event).cloned() else {
            tracing::debug!(current = %self.current, event, "rejected unknown event");
            return Err(MachineError::UnknownEvent {
                state: self.current.clone(),
                event: EventName::from(event),
            });
        };

        tracing::debug!(from = %self.current, to = %target, event, "transition");
        self.advance(target);
        Ok(&self.current)
    }

    fn advance(&mut self, target: StateName) {
        let from = std::mem::replace(&mut self.current, target);
        self.history.record(from);
    }

    /// Jump back to the initial state.
    ///
    /// A position jump only: history and redo entries are left as they are.
    pub fn reset(&mut self) {
        tracing::debug!(from = %self.current, to = %self.initial, "reset");
        self.current = self.initial.clone();
    }

    /// List state names.
    ///
    /// With no event, every state in configuration order. With an event,
    /// the states that define a transition for it, also in configuration
    /// order.
    pub fn states(&self, event: Option<&str>) -> Vec<&StateName> {
        match event {
            Some(event) => self.table.states_with_event(event),
            None => self.table.state_names().collect(),
        }
    }

    /// Events defined for the current state, in configuration order.
    pub fn events(&self) -> Vec<&EventName> {
        self.table.events(self.current.as_str())
    }

    /// Whether `event` would succeed from the current state (pure)
    pub fn can_trigger(&self, event: &str) -> bool {
        self.table.target(self.current.as_str(), event).is_some()
    }

    /// Go back to the previous state.
    ///
    /// Returns `false` and changes nothing when there is no history.
    pub fn undo(&mut self) -> bool {
        match self.history.step_back(self.current.clone()) {
            Some(previous) => {
                tracing::debug!(from = %self.current, to = %previous, "undo");
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Re-apply the most recently undone move.
    ///
    /// Returns `false` and changes nothing when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.step_forward(self.current.clone()) {
            Some(next) => {
                tracing::debug!(from = %self.current, to = %next, "redo");
                self.current = next;
                true
            }
            None => false,
        }
    }

    /// Forget all undo and redo entries. The current state is kept.
    pub fn clear_history(&mut self) {
        tracing::debug!(
            past = self.history.past().len(),
            future = self.history.future().len(),
            "history cleared"
        );
        self.history.clear();
    }

    /// States visited before the current one, oldest first (pure)
    pub fn history(&self) -> &[StateName] {
        self.history.past()
    }

    /// States available for redo, most recently undone last (pure)
    pub fn future(&self) -> &[StateName] {
        self.history.future()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Get the transition table (pure)
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }
}
