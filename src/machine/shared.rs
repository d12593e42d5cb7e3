//! Thread-safe handle around a [`StateMachine`].

use crate::config::{ConfigError, Configuration};
use crate::core::{EventName, StateName};
use crate::machine::error::MachineError;
use crate::machine::state_machine::StateMachine;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable, thread-safe handle to one machine.
///
/// The current state and both history stacks are updated together, so the
/// whole machine sits behind a single lock and every call holds it for its
/// full duration. Reads return owned values because nothing borrowed from
/// the machine may outlive the lock.
///
/// # Example
///
/// ```rust
/// use statekeeper::machine::SharedStateMachine;
/// use std::thread;
///
/// let machine = SharedStateMachine::from_json(
///     r#"{"initialState": "off", "states": {"off": {"transitions": {"flip": "on"}}, "on": {"transitions": {"flip": "off"}}}}"#,
/// )
/// .unwrap();
///
/// let worker = machine.clone();
/// thread::spawn(move || worker.trigger("flip").unwrap()).join().unwrap();
///
/// assert_eq!(machine.state(), "on");
/// ```
#[derive(Clone, Debug)]
pub struct SharedStateMachine {
    inner: Arc<Mutex<StateMachine>>,
}

impl SharedStateMachine {
    pub fn new(config: Configuration) -> Result<Self, ConfigError> {
        StateMachine::new(config).map(Self::from)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        StateMachine::from_json(json).map(Self::from)
    }

    pub fn state(&self) -> StateName {
        self.inner.lock().state().clone()
    }

    pub fn initial_state(&self) -> StateName {
        self.inner.lock().initial_state().clone()
    }

    pub fn change_state(&self, target: &str) -> Result<(), MachineError> {
        self.inner.lock().change_state(target)
    }

    /// Fire `event` and return the resulting state.
    pub fn trigger(&self, event: &str) -> Result<StateName, MachineError> {
        self.inner.lock().trigger(event).cloned()
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    pub fn states(&self, event: Option<&str>) -> Vec<StateName> {
        self.inner
            .lock()
            .states(event)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn events(&self) -> Vec<EventName> {
        self.inner.lock().events().into_iter().cloned().collect()
    }

    pub fn can_trigger(&self, event: &str) -> bool {
        self.inner.lock().can_trigger(event)
    }

    pub fn undo(&self) -> bool {
        self.inner.lock().undo()
    }

    pub fn redo(&self) -> bool {
        self.inner.lock().redo()
    }

    pub fn clear_history(&self) {
        self.inner.lock().clear_history();
    }

    pub fn history(&self) -> Vec<StateName> {
        self.inner.lock().history().to_vec()
    }

    pub fn future(&self) -> Vec<StateName> {
        self.inner.lock().future().to_vec()
    }

    /// Run `f` with exclusive access, for multi-step sequences that must not
    /// interleave with other callers.
    pub fn with<R>(&self, f: impl FnOnce(&mut StateMachine) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Copy of the machine as it is right now.
    pub fn snapshot(&self) -> StateMachine {
        self.inner.lock().clone()
    }
}

impl From<StateMachine> for SharedStateMachine {
    fn from(machine: StateMachine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(machine)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    const TOGGLE: &str = r#"{
        "initialState": "off",
        "states": {
            "off": { "transitions": { "flip": "on" } },
            "on": { "transitions": { "flip": "off" } }
        }
    }"#;

    #[test]
    fn clones_share_one_machine() {
        let machine = SharedStateMachine::from_json(TOGGLE).unwrap();
        let other = machine.clone();

        other.trigger("flip").unwrap();
        assert_eq!(machine.state(), "on");
        assert_eq!(machine.history(), vec![StateName::from("off")]);
    }

    #[test]
    fn concurrent_triggers_are_serialized() {
        let machine = SharedStateMachine::from_json(TOGGLE).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let machine = machine.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        machine.trigger("flip").unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        // 200 flips: every move recorded, back where we started.
        assert_eq!(machine.history().len(), 200);
        assert_eq!(machine.state(), "off");
    }

    #[test]
    fn with_runs_sequence_atomically() {
        let machine = SharedStateMachine::from_json(TOGGLE).unwrap();
        let undone = machine.with(|m| {
            m.trigger("flip").unwrap();
            m.undo()
        });
        assert!(undone);
        assert_eq!(machine.state(), "off");
        assert_eq!(machine.future(), vec![StateName::from("on")]);
    }

    #[test]
    fn errors_pass_through() {
        let machine = SharedStateMachine::from_json(TOGGLE).unwrap();
        assert_eq!(
            machine.change_state("broken"),
            Err(MachineError::InvalidState("broken".into()))
        );
        assert!(!machine.undo());
        assert!(!machine.redo());
    }

    #[test]
    fn snapshot_is_detached() {
        let machine = SharedStateMachine::from_json(TOGGLE).unwrap();
        let snapshot = machine.snapshot();
        machine.trigger("flip").unwrap();
        assert_eq!(snapshot.state(), "off");
        assert_eq!(machine.state(), "on");
    }
}
