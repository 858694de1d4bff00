//! Process-wide default logger
//!
//! The free functions here forward to a shared [`Logger`] that is created on
//! first use with [`Logger::default`]: every level, colorized text on stdout,
//! short file names. [`set_default_logger`] swaps in a different one.
//!
//! ```
//! gog::info(&["service ".into(), "ready".into()]);
//! gog::warn_tagf("disk", "{}% used", &[&91]);
//! ```

use crate::core::{
    Caller, Config, Formatter, Level, Logger, SharedWriter, Value, Writer,
};
use parking_lot::RwLock;
use std::fmt::Display;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

static DEFAULT: OnceLock<RwLock<Arc<Logger>>> = OnceLock::new();

fn slot() -> &'static RwLock<Arc<Logger>> {
    DEFAULT.get_or_init(|| RwLock::new(Arc::new(Logger::default())))
}

/// The current default logger.
pub fn default_logger() -> Arc<Logger> {
    Arc::clone(&slot().read())
}

/// Replace the default logger, returning the previous one.
///
/// Calls already running on the previous logger finish there; shut it down
/// to make sure its queued records are written.
pub fn set_default_logger(logger: Arc<Logger>) -> Arc<Logger> {
    std::mem::replace(&mut *slot().write(), logger)
}

/// Drain and close the default logger. See [`Logger::shutdown`].
pub fn shutdown(timeout: Duration) -> bool {
    default_logger().shutdown(timeout)
}

macro_rules! level_functions {
    ($level:expr, $plain:ident, $tagged:ident, $formatted:ident, $tagged_formatted:ident) => {
        #[doc = concat!("Log `values` at ", stringify!($plain), " level on the default logger.")]
        #[track_caller]
        pub fn $plain(values: &[Value]) {
            default_logger().emit_with_caller(Caller::here(), "", $level, values);
        }

        #[doc = concat!("Log `values` under `tag` at ", stringify!($plain), " level on the default logger.")]
        #[track_caller]
        pub fn $tagged(tag: &str, values: &[Value]) {
            default_logger().emit_with_caller(Caller::here(), tag, $level, values);
        }

        #[doc = concat!("Log a `{}` format string at ", stringify!($plain), " level on the default logger.")]
        #[track_caller]
        pub fn $formatted(format: &str, args: &[&dyn Display]) {
            default_logger().emitf_with_caller(Caller::here(), "", $level, format, args);
        }

        #[doc = concat!("Log a `{}` format string under `tag` at ", stringify!($plain), " level on the default logger.")]
        #[track_caller]
        pub fn $tagged_formatted(tag: &str, format: &str, args: &[&dyn Display]) {
            default_logger().emitf_with_caller(Caller::here(), tag, $level, format, args);
        }
    };
}

level_functions!(Level::Trace, trace, trace_tag, tracef, trace_tagf);
level_functions!(Level::Debug, debug, debug_tag, debugf, debug_tagf);
level_functions!(Level::Info, info, info_tag, infof, info_tagf);
level_functions!(Level::Warn, warn, warn_tag, warnf, warn_tagf);
level_functions!(Level::Error, error, error_tag, errorf, error_tagf);

/// Log `values` at fatal level on the default logger, then exit the process.
#[track_caller]
pub fn fatal(values: &[Value]) {
    default_logger().log_at(Caller::here(), "", Level::Fatal, values);
}

#[track_caller]
pub fn fatal_tag(tag: &str, values: &[Value]) {
    default_logger().log_at(Caller::here(), tag, Level::Fatal, values);
}

#[track_caller]
pub fn fatalf(format: &str, args: &[&dyn Display]) {
    default_logger().logf_at(Caller::here(), "", Level::Fatal, format, args);
}

#[track_caller]
pub fn fatal_tagf(tag: &str, format: &str, args: &[&dyn Display]) {
    default_logger().logf_at(Caller::here(), tag, Level::Fatal, format, args);
}

/// Log at a level chosen at runtime. See [`Logger::log`].
#[track_caller]
pub fn log(level: Level, values: &[Value]) {
    default_logger().log_at(Caller::here(), "", level, values);
}

/// Format-string counterpart of [`log`].
#[track_caller]
pub fn logf(level: Level, format: &str, args: &[&dyn Display]) {
    default_logger().logf_at(Caller::here(), "", level, format, args);
}

pub fn set_config(config: Config) {
    default_logger().set_config(config);
}

pub fn set_formatter<F: Formatter + 'static>(formatter: F) {
    default_logger().set_formatter(formatter);
}

/// Replace all writers of the default logger with `writer`.
pub fn set_writer<W: Writer + 'static>(writer: W) {
    default_logger().set_writer(writer);
}

pub fn set_writers(writers: Vec<SharedWriter>) {
    default_logger().set_writers(writers);
}

pub fn add_writer<W: Writer + 'static>(writer: W) {
    default_logger().add_writer(writer);
}

pub fn reset_writers() {
    default_logger().reset_writers();
}

pub fn set_call_skip(skip: usize) {
    default_logger().set_call_skip(skip);
}

pub fn set_level(level: Level) {
    default_logger().set_level(level);
}

pub fn set_short_file(short: bool) {
    default_logger().set_short_file(short);
}

pub fn set_async(enabled: bool) {
    default_logger().set_async(enabled);
}
