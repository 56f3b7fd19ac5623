//! Macros for ergonomic configuration construction.

/// Build a [`Configuration`](crate::config::Configuration) from a literal
/// description.
///
/// States are declared in the order written. A state with no transitions is
/// written with empty braces.
///
/// # Example
///
/// ```
/// use fsm_engine::fsm_config;
///
/// let config = fsm_config! {
///     initial: "green",
///     states: {
///         "green" => { "timer" => "yellow" },
///         "yellow" => { "timer" => "red" },
///         "red" => { "timer" => "green", "fault" => "off" },
///         "off" => {},
///     }
/// };
///
/// assert_eq!(config.initial, "green");
/// assert_eq!(config.states.len(), 4);
/// assert_eq!(config.target("red", "fault"), Some("off"));
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => { $( $event:expr => $target:expr ),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut config = $crate::config::Configuration::new($initial);
        $(
            {
                let def = config
                    .states
                    .entry(::std::convert::Into::<::std::string::String>::into($state))
                    .or_default();
                $(
                    def.transitions.insert(
                        ::std::convert::Into::<::std::string::String>::into($event),
                        ::std::convert::Into::<::std::string::String>::into($target),
                    );
                )*
                let _ = def;
            }
        )*
        config
    }};
}
