//! Configuration errors.

use crate::core::{EventName, StateName};
use thiserror::Error;

/// Errors that make a configuration unusable for building a machine.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Input was missing, not an object, or did not match the expected shape
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error("Initial state '{0}' is not a defined state")]
    UnknownInitialState(StateName),

    #[error("State '{0}' is defined more than once")]
    DuplicateState(StateName),

    #[error("Event '{event}' is defined more than once for state '{state}'")]
    DuplicateEvent { state: StateName, event: EventName },

    #[error("Transition '{event}' from '{state}' targets undefined state '{target}'")]
    UnknownTarget {
        state: StateName,
        event: EventName,
        target: StateName,
    },
}
