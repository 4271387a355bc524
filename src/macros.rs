/// Checks a condition, returning `Err` if it is absent or false.
///
/// Accepts a `bool` or an `Option<bool>`, optionally followed by a message
/// (a literal, a format string with arguments, or any `AsRef<str>` value).
///
/// ```rust
/// use allege::condition;
///
/// let depth = 3;
/// assert!(condition!(depth < 8).is_ok());
/// assert_eq!(
///     condition!(depth > 8, "depth {} too shallow", depth).unwrap_err().to_string(),
///     "depth 3 too shallow",
/// );
/// assert!(condition!(None::<bool>).is_err());
/// ```
#[macro_export]
macro_rules! condition {
    ($cond:expr $(,)?) => {
        $crate::assert_condition(::core::option::Option::<bool>::from($cond), ::core::option::Option::None)
    };
    ($cond:expr, $msg:literal $(,)?) => {
        $crate::assert_condition(
            ::core::option::Option::<bool>::from($cond),
            ::core::option::Option::Some(::std::format!($msg).as_str()),
        )
    };
    ($cond:expr, $fmt:literal, $($arg:tt)+) => {
        $crate::assert_condition(
            ::core::option::Option::<bool>::from($cond),
            ::core::option::Option::Some(::std::format!($fmt, $($arg)+).as_str()),
        )
    };
    ($cond:expr, $msg:expr $(,)?) => {
        $crate::assert_condition(
            ::core::option::Option::<bool>::from($cond),
            ::core::option::Option::Some(::core::convert::AsRef::<str>::as_ref(&$msg)),
        )
    };
}

/// Checks that an `Option` is `Some`, naming the parameter after the
/// call-site expression.
///
/// ```rust
/// use allege::not_null;
///
/// let port: Option<u16> = None;
/// let err = not_null!(port).unwrap_err();
/// assert_eq!(err.name(), Some("port"));
///
/// assert_eq!(not_null!(Some(80), "fallback").unwrap(), 80);
/// ```
#[macro_export]
macro_rules! not_null {
    ($value:expr $(,)?) => {
        $crate::assert_not_null($value, ::core::option::Option::Some(::core::stringify!($value)))
    };
    ($value:expr, $name:expr $(,)?) => {
        $crate::assert_not_null($value, ::core::option::Option::Some($name))
    };
}

/// Checks that an `Option` holds a non-empty value, naming the parameter
/// after the call-site expression.
///
/// ```rust
/// use allege::not_empty;
///
/// let tags: Option<Vec<&str>> = Some(Vec::new());
/// let err = not_empty!(tags).unwrap_err();
/// assert_eq!(err.to_string(), "Collection is empty (parameter 'tags')");
/// ```
#[macro_export]
macro_rules! not_empty {
    ($value:expr $(,)?) => {
        $crate::assert_not_empty($value, ::core::option::Option::Some(::core::stringify!($value)))
    };
    ($value:expr, $name:expr $(,)?) => {
        $crate::assert_not_empty($value, ::core::option::Option::Some($name))
    };
}
