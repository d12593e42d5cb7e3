//! The running state machine.
//!
//! [`StateMachine`] tracks the current state of a validated transition
//! table and keeps a linear undo/redo history of every move.
//! [`SharedStateMachine`] wraps one behind a lock for callers on several
//! threads.
//!
//! # Moves
//!
//! - `trigger(event)` follows the current state's transition for `event`
//! - `change_state(target)` jumps to any defined state
//! - `undo()` / `redo()` walk the history one step
//! - `reset()` jumps to the initial state without touching history
//! - `clear_history()` forgets history without moving

pub mod error;
mod shared;
mod state_machine;

pub use error::MachineError;
pub use shared::SharedStateMachine;
pub use state_machine::StateMachine;
