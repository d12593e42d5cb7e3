//! Statekeeper: an embeddable finite state machine with undo/redo
//!
//! A machine is built once from a declarative configuration of states and
//! event-driven transitions. After that only its position moves: events and
//! explicit state changes move it forward, and a linear history lets it step
//! back and forth.
//!
//! # Core Concepts
//!
//! - **Configuration**: initial state plus, per state, `event -> target`
//! - **Transition table**: the validated, immutable form of a configuration
//! - **History**: two-stack undo/redo log; any forward move clears redo
//!
//! # Example
//!
//! ```rust
//! use statekeeper::machine::StateMachine;
//! use statekeeper::machine_config;
//!
//! let mut machine = StateMachine::new(machine_config! {
//!     initial: idle,
//!     states: {
//!         idle => { start => running },
//!         running => { stop => idle, pause => paused },
//!         paused => { resume => running },
//!     }
//! })
//! .unwrap();
//!
//! machine.trigger("start").unwrap();
//! machine.trigger("pause").unwrap();
//! assert_eq!(machine.state(), "paused");
//!
//! assert!(machine.undo());
//! assert!(machine.undo());
//! assert!(!machine.undo());
//! assert_eq!(machine.state(), "idle");
//!
//! assert!(machine.redo());
//! assert!(machine.redo());
//! assert_eq!(machine.state(), "paused");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use self::builder::ConfigBuilder;
pub use self::config::{ConfigError, Configuration, StateConfig};
pub use self::core::{EventName, History, StateName, TransitionTable};
pub use self::machine::{MachineError, SharedStateMachine, StateMachine};
