//! Core logger types and traits

pub mod call_site;
pub mod config;
pub mod error;
pub mod formatter;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod options;
pub mod placeholder;
pub mod record;
pub mod timestamp;
pub mod value;
pub mod writer;

pub use call_site::{CallSite, CallSiteResolver, Caller, LocationResolver, NoCallSite};
pub use config::Config;
pub use error::{LoggerError, Result};
pub use formatter::Formatter;
pub use log_level::Level;
pub use logger::{
    DiagnosticHook, ExitHook, Logger, LoggerBuilder, DEFAULT_QUEUE_CAPACITY,
    DEFAULT_SHUTDOWN_TIMEOUT, FATAL_EXIT_CODE, FATAL_GRACE_PERIOD,
};
pub use metrics::LoggerMetrics;
pub use options::{LoggerOptions, OutputFormat};
pub use record::Record;
pub use timestamp::TimestampFormat;
pub use value::Value;
pub use writer::{shared, SharedWriter, Writer};
