//! Logging macros.
//!
//! Unlike the methods on [`Logger`](crate::Logger), the macros also capture
//! the name of the calling function, and they accept values of any type with
//! a `Value` conversion without building the slice by hand.
//!
//! # Examples
//!
//! ```
//! use gog::prelude::*;
//! use gog::{info, warnf};
//!
//! let logger = Logger::builder().build();
//!
//! info!(logger, "Server started");
//! info!(logger, tag = "net", "listening on port ", 8080);
//!
//! let retries = 3;
//! warnf!(logger, "Retry {} of {}", retries, 5);
//! ```

/// Captures the macro's call site together with the enclosing function.
#[doc(hidden)]
#[macro_export]
macro_rules! __caller {
    () => {
        $crate::Caller::here().with_function($crate::__function_path!())
    };
}

/// Log values, joined without separator, at a level chosen at runtime.
///
/// `Fatal` exits the process after the grace period; `All` and `Off` are
/// logged at `Info`.
///
/// ```
/// # use gog::prelude::*;
/// # let logger = Logger::builder().build();
/// use gog::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, tag = "http", "status ", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, tag = $tag:expr $(, $value:expr)* $(,)?) => {
        $logger.log_at(
            $crate::__caller!(),
            $tag,
            $level,
            &[$($crate::Value::from($value)),*],
        )
    };
    ($logger:expr, $level:expr $(, $value:expr)* $(,)?) => {
        $logger.log_at(
            $crate::__caller!(),
            "",
            $level,
            &[$($crate::Value::from($value)),*],
        )
    };
}

/// Log a `{}` format string at a level chosen at runtime.
///
/// Arguments only need `Display`; each `{}` takes the next one.
///
/// ```
/// # use gog::prelude::*;
/// # let logger = Logger::builder().build();
/// use gog::logf;
/// logf!(logger, Level::Warn, "disk {} at {}%", "/var", 91);
/// logf!(logger, Level::Info, tag = "db", "pool size {}", 16);
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, tag = $tag:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.logf_at(
            $crate::__caller!(),
            $tag,
            $level,
            $format,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        )
    };
    ($logger:expr, $level:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.logf_at(
            $crate::__caller!(),
            "",
            $level,
            $format,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        )
    };
}

macro_rules! level_macros {
    ($d:tt, $plain:ident, $formatted:ident, $level:ident) => {
        #[doc = concat!("Log values at `", stringify!($level), "` level. See [`log!`].")]
        #[macro_export]
        macro_rules! $plain {
            ($d logger:expr $d(,)?) => {
                $crate::log!($d logger, $crate::Level::$level)
            };
            ($d logger:expr, $d($d rest:tt)+) => {
                $crate::log!($d logger, $crate::Level::$level, $d($d rest)+)
            };
        }

        #[doc = concat!("Log a `{}` format string at `", stringify!($level), "` level. See [`logf!`].")]
        #[macro_export]
        macro_rules! $formatted {
            ($d logger:expr, $d($d rest:tt)+) => {
                $crate::logf!($d logger, $crate::Level::$level, $d($d rest)+)
            };
        }
    };
}

level_macros!($, trace, tracef, Trace);
level_macros!($, debug, debugf, Debug);
level_macros!($, info, infof, Info);
level_macros!($, warn, warnf, Warn);
level_macros!($, error, errorf, Error);
level_macros!($, fatal, fatalf, Fatal);
