//! Macros for ergonomic configuration.

/// Write a [`Configuration`](crate::config::Configuration) inline.
///
/// State and event names are identifiers and become their own spelling.
/// The result is not validated; validation happens when a machine is built
/// from it.
///
/// # Example
///
/// ```
/// use statekeeper::machine::StateMachine;
/// use statekeeper::machine_config;
///
/// let config = machine_config! {
///     initial: idle,
///     states: {
///         idle => { start => running },
///         running => { stop => idle, pause => paused },
///         paused => { resume => running },
///     }
/// };
///
/// let mut machine = StateMachine::new(config).unwrap();
/// machine.trigger("start").unwrap();
/// assert_eq!(machine.state(), "running");
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:ident,
        states: {
            $(
                $state:ident => { $($event:ident => $target:ident),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {
        $crate::config::Configuration {
            initial_state: $crate::core::StateName::from(stringify!($initial)),
            states: vec![
                $(
                    (
                        $crate::core::StateName::from(stringify!($state)),
                        $crate::config::StateConfig {
                            transitions: vec![
                                $(
                                    (
                                        $crate::core::EventName::from(stringify!($event)),
                                        $crate::core::StateName::from(stringify!($target)),
                                    )
                                ),*
                            ],
                        },
                    )
                ),*
            ],
        }
    };
}
