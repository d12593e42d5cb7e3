//! Undo/redo history.
//!
//! A classic two-stack log. `past` holds the states visited before the
//! current one (oldest first); `future` holds the states that were undone
//! from (most recently undone last). Any forward move invalidates `future`.

use super::state::StateName;

/// Two-stack undo/redo log of visited states.
///
/// The history never stores the current state itself; the owner passes it
/// in when stepping so the two stacks and the current position move together.
///
/// # Example
///
/// ```rust
/// use statekeeper::core::{History, StateName};
///
/// let mut history = History::new();
/// history.record(StateName::from("idle"));
///
/// let previous = history.step_back(StateName::from("running"));
/// assert_eq!(previous, Some(StateName::from("idle")));
/// assert!(history.can_redo());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    past: Vec<StateName>,
    future: Vec<StateName>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a forward move away from `from`.
    ///
    /// Pushes `from` onto the past stack and discards every redo entry.
    pub fn record(&mut self, from: StateName) {
        self.past.push(from);
        self.future.clear();
    }

    /// Step one entry back.
    ///
    /// Returns the state to move to, or `None` when there is nothing to
    /// undo. On success `current` is pushed onto the future stack.
    pub fn step_back(&mut self, current: StateName) -> Option<StateName> {
        let previous = self.past.pop()?;
        self.future.push(current);
        Some(previous)
    }

    /// Step one entry forward.
    ///
    /// Returns the state to move to, or `None` when there is nothing to
    /// redo. On success `current` is pushed onto the past stack.
    pub fn step_forward(&mut self, current: StateName) -> Option<StateName> {
        let next = self.future.pop()?;
        self.past.push(current);
        Some(next)
    }

    /// Empty both stacks.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    /// States visited before the current one, oldest first.
    pub fn past(&self) -> &[StateName] {
        &self.past
    }

    /// States available for redo, most recently undone last.
    pub fn future(&self) -> &[StateName] {
        &self.future
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> StateName {
        StateName::from(s)
    }

    #[test]
    fn new_history_is_empty() {
        let history = History::new();
        assert!(history.past().is_empty());
        assert!(history.future().is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn record_pushes_past_and_clears_future() {
        let mut history = History::new();
        history.record(name("a"));
        history.record(name("b"));
        assert_eq!(history.step_back(name("c")), Some(name("b")));
        assert_eq!(history.future(), &[name("c")]);

        history.record(name("b"));
        assert!(history.future().is_empty());
        assert_eq!(history.past(), &[name("a"), name("b")]);
    }

    #[test]
    fn step_back_on_empty_does_nothing() {
        let mut history = History::new();
        assert_eq!(history.step_back(name("a")), None);
        assert_eq!(history, History::new());
    }

    #[test]
    fn step_forward_on_empty_does_nothing() {
        let mut history = History::new();
        history.record(name("a"));
        let before = history.clone();
        assert_eq!(history.step_forward(name("b")), None);
        assert_eq!(history, before);
    }

    #[test]
    fn back_then_forward_restores_stacks() {
        let mut history = History::new();
        history.record(name("a"));
        history.record(name("b"));
        let before = history.clone();

        let back = history.step_back(name("c")).unwrap();
        assert_eq!(back, name("b"));
        let forward = history.step_forward(back).unwrap();
        assert_eq!(forward, name("c"));
        assert_eq!(history, before);
    }

    #[test]
    fn clear_empties_both_stacks() {
        let mut history = History::new();
        history.record(name("a"));
        history.record(name("b"));
        history.step_back(name("c"));
        history.clear();
        assert_eq!(history, History::new());
    }
}
