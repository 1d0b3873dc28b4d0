//! Private macros used for error handling and logging.

/// Logs an error, ignores an `Ok` value.
macro_rules! log_if_err {
    ($x:expr) => {
        let closure = || {
            try_else_return!($x);
        };
        closure();
    };
}

/// Matches a result, returning the `Ok` value in case of success,
/// exits the calling function otherwise.
/// A closure which returns the return value for the function can
/// be passed as second parameter.
macro_rules! try_else_return {
    ($x:expr) => {
        try_else_return!($x, || {})
    };
    ($x:expr, $el:expr) => {
        match $x {
            Ok(x) => x,
            Err(e) => {
                crate::error::log_error(&e);
                let closure = $el;
                return closure();
            }
        }
    };
}

/// Print an error message to stderr.
macro_rules! error {
    ($($arg:tt)*) => (
        eprintln!("fib-growth ERROR: {}", &format!($($arg)*))
    )
}

/// Print a debug message to stdout, only when `FIB_GROWTH_DEBUG` is set.
macro_rules! info {
    ($($arg:tt)*) => (
        if $crate::debug_enabled() {
            println!("fib-growth DEBUG: {}", &format!($($arg)*));
        }
    )
}
