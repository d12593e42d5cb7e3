//! Builder for assembling configurations in code.

use crate::config::{ConfigError, Configuration, StateConfig};
use crate::core::{EventName, StateName};
use crate::machine::StateMachine;

/// Builder for constructing configurations with a fluent API.
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<StateName>,
    states: Vec<(StateName, StateConfig)>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateName>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state. Declaring the same state twice has no effect.
    pub fn state(mut self, state: impl Into<StateName>) -> Self {
        self.entry(state.into());
        self
    }

    /// Add a transition, declaring `from` if needed.
    ///
    /// `to` is not declared implicitly; a target that is never declared is
    /// reported by [`build`](Self::build). Adding the same event to a state
    /// again replaces its target.
    pub fn transition(
        mut self,
        from: impl Into<StateName>,
        event: impl Into<EventName>,
        to: impl Into<StateName>,
    ) -> Self {
        let event = event.into();
        let to = to.into();
        let transitions = &mut self.entry(from.into()).transitions;
        match transitions.iter_mut().find(|(existing, _)| *existing == event) {
            Some((_, target)) => *target = to,
            None => transitions.push((event, to)),
        }
        self
    }

    fn entry(&mut self, state: StateName) -> &mut StateConfig {
        let position = match self.states.iter().position(|(name, _)| *name == state) {
            Some(position) => position,
            None => {
                self.states.push((state, StateConfig::default()));
                self.states.len() - 1
            }
        };
        &mut self.states[position].1
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<Configuration, ConfigError> {
        let initial_state = self.initial.ok_or(ConfigError::MissingInitialState)?;
        let config = Configuration {
            initial_state,
            states: self.states,
        };
        config.validate()?;
        Ok(config)
    }

    /// Build the configuration and a machine from it.
    pub fn build_machine(self) -> Result<StateMachine, ConfigError> {
        StateMachine::new(self.build()?)
    }
}
