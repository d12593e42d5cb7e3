//! Core state machine types.
//!
//! This module contains the data the engine is built from:
//! - State and event names
//! - The immutable transition table
//! - The undo/redo history
//!
//! Nothing here performs logging or holds locks; the machine module layers
//! those on top.

mod history;
mod state;
mod table;

pub use history::History;
pub use state::{EventName, StateName};
pub use table::TransitionTable;
