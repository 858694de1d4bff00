//! # gog
//!
//! A leveled, tagged logging pipeline. Each call is gated by level, turned
//! into a [`Record`] carrying its call site and fanned out to every
//! configured [`Writer`] through one [`Formatter`].
//!
//! ## Features
//!
//! - **Six levels** from `Trace` to `Fatal`, plus `All`/`Off` gate sentinels
//! - **Fan-out**: one formatter, any number of ordered writers; a failing
//!   writer never stops the others
//! - **Async mode**: a bounded queue drained by a background thread, with
//!   in-place delivery when the queue is full
//! - **Call sites**: file, line and function of the user's call
//!
//! ## Example
//!
//! ```
//! use gog::prelude::*;
//!
//! let logger = Logger::builder()
//!     .level(Level::Debug)
//!     .short_file(true)
//!     .build();
//!
//! logger.info(&["listening on port ".into(), 8080.into()]);
//! logger.warn_tagf("disk", "{}% used", &[&91]);
//! logger.trace(&["filtered out".into()]);
//! ```

pub mod core;
pub mod formatters;
pub mod global;
pub mod macros;
pub mod writers;

pub mod prelude {
    pub use crate::core::{
        Config, Formatter, Level, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
        LoggerOptions, OutputFormat, Record, Result, TimestampFormat, Value, Writer,
        DEFAULT_SHUTDOWN_TIMEOUT,
    };
    pub use crate::formatters::{JsonFormatter, TextFormatter};
    pub use crate::writers::{ConsoleWriter, FileWriter};
}

pub use crate::core::{
    shared, CallSite, CallSiteResolver, Caller, Config, DiagnosticHook, ExitHook, Formatter,
    Level, LocationResolver, Logger, LoggerBuilder, LoggerError, LoggerMetrics, LoggerOptions,
    NoCallSite, OutputFormat, Record, Result, SharedWriter, TimestampFormat, Value, Writer,
    DEFAULT_QUEUE_CAPACITY, DEFAULT_SHUTDOWN_TIMEOUT, FATAL_EXIT_CODE, FATAL_GRACE_PERIOD,
};
pub use formatters::{JsonFormatter, TextFormatter};
pub use global::{
    add_writer, debug, debug_tag, debug_tagf, debugf, default_logger, error, error_tag,
    error_tagf, errorf, fatal, fatal_tag, fatal_tagf, fatalf, info, info_tag, info_tagf, infof,
    log, logf, reset_writers, set_async, set_call_skip, set_config, set_default_logger,
    set_formatter, set_level, set_short_file, set_writer, set_writers, shutdown, trace,
    trace_tag, trace_tagf, tracef, warn, warn_tag, warn_tagf, warnf,
};
pub use writers::{ConsoleWriter, FileWriter};
