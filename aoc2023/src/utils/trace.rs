/// Logs `expr = value` at debug level and returns the value.
///
/// Works like `dbg!` but goes through `tracing`, so the output only shows up
/// when the subscriber enables debug events for the calling module.
///
/// ```
/// use aoc2023::trace_value;
///
/// let lowest = trace_value!([5, 3, 9].into_iter().min());
/// assert_eq!(lowest, Some(3));
/// ```
#[macro_export]
macro_rules! trace_value {
    ($value:expr $(,)?) => {
        match $value {
            value => {
                ::tracing::debug!("{} = {:?}", ::core::stringify!($value), &value);
                value
            }
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_trace_value_returns_value() {
        let doubled = crate::trace_value!(21 * 2);
        assert_eq!(doubled, 42);

        let owned = crate::trace_value!(String::from("seed"));
        assert_eq!(owned, "seed");
    }
}
