//! Errors raised by machine operations.

use crate::core::{EventName, StateName};
use thiserror::Error;

/// Errors from moving a machine.
///
/// Both are recoverable: the machine is left exactly as it was before the
/// failing call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    /// `change_state` named a state that is not in the table
    #[error("State '{0}' doesn't exist")]
    InvalidState(StateName),

    /// The current state defines no transition for the event
    #[error("Event '{event}' is not defined for state '{state}'")]
    UnknownEvent { state: StateName, event: EventName },
}
