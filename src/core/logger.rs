//! Main logger implementation
//!
//! A [`Logger`] gates calls by level, builds a [`Record`] with its call site
//! and fans it out to every configured writer through the configured
//! formatter. In async mode records go through a bounded queue to a drain
//! thread; when the queue is full the caller delivers the record itself
//! instead of waiting or dropping it.

use super::{
    call_site::{Caller, CallSiteResolver, LocationResolver, PIPELINE_FRAMES},
    config::Config,
    error::LoggerError,
    formatter::Formatter,
    log_level::Level,
    metrics::LoggerMetrics,
    placeholder::substitute,
    record::Record,
    value::Value,
    writer::{shared, SharedWriter, Writer},
};
use crate::writers::ConsoleWriter;
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use parking_lot::{Mutex, RwLock};
use std::fmt::Display;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU8, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Default shutdown timeout used when a logger is dropped.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Capacity of the async queue unless configured otherwise.
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

/// How long a fatal call waits for writers before exiting.
pub const FATAL_GRACE_PERIOD: Duration = Duration::from_secs(1);

/// Process exit status after a fatal call.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Receives every internal pipeline failure (formatter, writer).
pub type DiagnosticHook = Arc<dyn Fn(&LoggerError) + Send + Sync>;

/// Terminates the process after a fatal call.
pub type ExitHook = Arc<dyn Fn(i32) + Send + Sync>;

/// State shared between the logger and its drain thread.
struct Shared {
    /// The exclusive lock guarding all configuration state. The gate level
    /// and flags below are only written while it is held, but `emit` reads
    /// them without it; a concurrent change may reach some in-flight calls
    /// and not others.
    config: Mutex<Arc<Config>>,
    level: AtomicU8,
    call_skip: AtomicUsize,
    short_file: AtomicBool,
    async_enabled: AtomicBool,
    resolver: Arc<dyn CallSiteResolver>,
    on_error: Option<DiagnosticHook>,
    metrics: LoggerMetrics,
}

impl Shared {
    /// Current configuration, installing a console writer if none is set.
    fn snapshot(&self) -> Arc<Config> {
        let mut config = self.config.lock();
        if config.writers().is_empty() {
            Arc::make_mut(&mut config).add_writer(shared(ConsoleWriter::new()));
        }
        Arc::clone(&config)
    }

    /// Format the record and hand it to every writer, in order.
    ///
    /// A formatter failure ends the fan-out for this record; a writer
    /// failure only skips that writer.
    fn fan_out(&self, record: &Record) {
        let config = self.snapshot();

        let Some(formatter) = config.formatter() else {
            eprintln!("{}", record);
            return;
        };

        let level_name = record.level().name();
        for writer in config.writers() {
            let data = match Self::format(formatter.as_ref(), level_name, record) {
                Ok(data) => data,
                Err(e) => {
                    self.metrics.record_formatter_failure();
                    self.report(&e);
                    return;
                }
            };
            self.write(writer, record, &data);
        }
    }

    fn format(formatter: &dyn Formatter, level_name: &str, record: &Record) -> super::Result<Vec<u8>> {
        catch_unwind(AssertUnwindSafe(|| {
            formatter.format(record.level(), level_name, record)
        }))
        .unwrap_or_else(|panic_info| {
            Err(LoggerError::formatter("panic", panic_message(&*panic_info)))
        })
    }

    fn write(&self, writer: &SharedWriter, record: &Record, data: &[u8]) {
        let mut writer = writer.lock();
        let result = catch_unwind(AssertUnwindSafe(|| writer.write(record, data)));

        let failure = match result {
            Ok(Ok(_)) => return,
            Ok(Err(e)) => LoggerError::writer(writer.name(), e.to_string()),
            Err(panic_info) => {
                LoggerError::writer_panicked(writer.name(), panic_message(&*panic_info))
            }
        };
        drop(writer);

        self.metrics.record_writer_failure();
        self.report(&failure);
    }

    fn report(&self, err: &LoggerError) {
        match self.on_error {
            Some(ref hook) => hook(err),
            None => eprintln!("[GOG ERROR] {}", err),
        }
    }
}

fn panic_message(panic_info: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn spawn_drain(shared: Arc<Shared>, receiver: Receiver<Record>) -> std::io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("gog-drain".to_string())
        .spawn(move || {
            // Ends once every sender is gone and the queue is empty.
            for record in receiver.iter() {
                shared.fan_out(&record);
            }
        })
}

/// A logging pipeline: level gate, record building, and fan-out to writers.
///
/// Each call below the gate returns immediately. Otherwise the values are
/// joined into a [`Record`], which is either handed to the drain thread
/// through a bounded queue (async mode) or written by the calling thread.
/// A full queue falls back to writing in place, so no record is lost.
/// Every writer receives the record formatted by the configured formatter,
/// and a failing writer never stops the others.
///
/// # Example
/// ```
/// use gog::prelude::*;
///
/// let logger = Logger::builder()
///     .level(Level::Info)
///     .config(
///         Config::new()
///             .with_formatter(TextFormatter::new())
///             .with_writer(ConsoleWriter::new()),
///     )
///     .build();
/// logger.info(&["listening on port ".into(), 8080.into()]);
/// ```
pub struct Logger {
    shared: Arc<Shared>,
    sender: RwLock<Option<Sender<Record>>>,
    drain: Mutex<Option<thread::JoinHandle<()>>>,
    queue_capacity: usize,
    fatal_grace: Duration,
    on_exit: ExitHook,
}

macro_rules! level_methods {
    ($level:expr, $plain:ident, $tagged:ident, $formatted:ident, $tagged_formatted:ident) => {
        #[doc = concat!("Log `values` at ", stringify!($plain), " level.")]
        #[track_caller]
        pub fn $plain(&self, values: &[Value]) {
            self.emit("", $level, values);
        }

        #[doc = concat!("Log `values` under `tag` at ", stringify!($plain), " level.")]
        #[track_caller]
        pub fn $tagged(&self, tag: &str, values: &[Value]) {
            self.emit(tag, $level, values);
        }

        #[doc = concat!("Log a `{}` format string at ", stringify!($plain), " level.")]
        #[track_caller]
        pub fn $formatted(&self, format: &str, args: &[&dyn Display]) {
            self.emitf("", $level, format, args);
        }

        #[doc = concat!("Log a `{}` format string under `tag` at ", stringify!($plain), " level.")]
        #[track_caller]
        pub fn $tagged_formatted(&self, tag: &str, format: &str, args: &[&dyn Display]) {
            self.emitf(tag, $level, format, args);
        }
    };
}

impl Logger {
    /// Create a logger writing colorized text to the console.
    ///
    /// `call_skip` counts the wrapper layers between the user's call and the
    /// public API; the minimum is 1.
    #[must_use]
    pub fn new(level: Level, call_skip: usize) -> Self {
        Self::builder().level(level).call_skip(call_skip).build()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use gog::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .level(Level::Debug)
    ///     .async_mode(true)
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn from_builder(builder: LoggerBuilder) -> Self {
        let shared = Arc::new(Shared {
            config: Mutex::new(Arc::new(builder.config)),
            level: AtomicU8::new(builder.level.as_u8()),
            call_skip: AtomicUsize::new(builder.call_skip),
            short_file: AtomicBool::new(builder.short_file),
            async_enabled: AtomicBool::new(builder.async_mode),
            resolver: builder.resolver,
            on_error: builder.on_error,
            metrics: LoggerMetrics::new(),
        });

        let (sender, receiver) = bounded(builder.queue_capacity);
        let (sender, drain) = match spawn_drain(Arc::clone(&shared), receiver) {
            Ok(handle) => (Some(sender), Some(handle)),
            Err(e) => {
                // Without a drain thread every record is delivered in place.
                shared.report(&LoggerError::other(format!(
                    "Failed to start drain thread: {}",
                    e
                )));
                (None, None)
            }
        };

        Self {
            shared,
            sender: RwLock::new(sender),
            drain: Mutex::new(drain),
            queue_capacity: builder.queue_capacity,
            fatal_grace: builder.fatal_grace,
            on_exit: builder.on_exit,
        }
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    fn update_config(&self, update: impl FnOnce(&mut Config)) -> &Self {
        let mut config = self.shared.config.lock();
        update(Arc::make_mut(&mut config));
        self
    }

    /// Replace the whole configuration.
    pub fn set_config(&self, config: Config) -> &Self {
        *self.shared.config.lock() = Arc::new(config);
        self
    }

    pub fn set_formatter<F: Formatter + 'static>(&self, formatter: F) -> &Self {
        let formatter: Arc<dyn Formatter> = Arc::new(formatter);
        self.update_config(|config| config.set_formatter(formatter))
    }

    /// Replace all writers with `writer`.
    pub fn set_writer<W: Writer + 'static>(&self, writer: W) -> &Self {
        self.set_writers(vec![shared(writer)])
    }

    /// Replace all writers.
    pub fn set_writers(&self, writers: Vec<SharedWriter>) -> &Self {
        self.update_config(|config| config.set_writers(writers))
    }

    pub fn add_writer<W: Writer + 'static>(&self, writer: W) -> &Self {
        self.add_shared_writer(shared(writer))
    }

    /// Append a writer that may also be held elsewhere.
    pub fn add_shared_writer(&self, writer: SharedWriter) -> &Self {
        self.update_config(|config| config.add_writer(writer))
    }

    pub fn reset_writers(&self) -> &Self {
        self.update_config(Config::reset_writers)
    }

    /// Number of wrapper layers between the user's call and this API.
    ///
    /// If you wrap `logger.info(...)` in your own helper, raise this by one
    /// per layer (or mark the helper `#[track_caller]`). The minimum is 1.
    pub fn set_call_skip(&self, skip: usize) -> &Self {
        let _guard = self.shared.config.lock();
        self.shared.call_skip.store(skip, Ordering::Relaxed);
        self
    }

    /// Set the lowest level that produces output.
    pub fn set_level(&self, level: Level) -> &Self {
        let _guard = self.shared.config.lock();
        self.shared.level.store(level.as_u8(), Ordering::Relaxed);
        self
    }

    /// Keep only the file name of the call site instead of its full path.
    pub fn set_short_file(&self, short: bool) -> &Self {
        let _guard = self.shared.config.lock();
        self.shared.short_file.store(short, Ordering::Relaxed);
        self
    }

    /// Route records through the drain thread. Off by default.
    pub fn set_async(&self, enabled: bool) -> &Self {
        let _guard = self.shared.config.lock();
        self.shared.async_enabled.store(enabled, Ordering::Relaxed);
        self
    }

    pub fn config(&self) -> Arc<Config> {
        Arc::clone(&self.shared.config.lock())
    }

    pub fn level(&self) -> Level {
        Level::from_u8(self.shared.level.load(Ordering::Relaxed))
    }

    pub fn call_skip(&self) -> usize {
        self.shared.call_skip.load(Ordering::Relaxed)
    }

    pub fn short_file(&self) -> bool {
        self.shared.short_file.load(Ordering::Relaxed)
    }

    pub fn is_async(&self) -> bool {
        self.shared.async_enabled.load(Ordering::Relaxed)
    }

    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }

    /// Records waiting for the drain thread.
    pub fn queue_len(&self) -> usize {
        self.sender.read().as_ref().map_or(0, Sender::len)
    }

    /// Get the logger metrics
    ///
    /// # Example
    ///
    /// ```
    /// use gog::prelude::*;
    ///
    /// let logger = Logger::builder().config(Config::new()).build();
    /// println!("Sync fallbacks: {}", logger.metrics().sync_fallbacks());
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.shared.metrics
    }

    // ------------------------------------------------------------------
    // Emission
    // ------------------------------------------------------------------

    /// Whether a record at `level` would pass the gate.
    pub fn enabled(&self, level: Level) -> bool {
        level != Level::Off && level >= self.level()
    }

    /// Log `values`, joined without separator, at `level`.
    ///
    /// Does nothing when `level` is `Off`, below the gate, or `values` is
    /// empty. Values that cannot be converted to text are left out.
    #[track_caller]
    pub fn emit(&self, tag: &str, level: Level, values: &[Value]) {
        self.emit_with_caller(Caller::here(), tag, level, values);
    }

    /// Log a `{}` format string at `level`.
    #[track_caller]
    pub fn emitf(&self, tag: &str, level: Level, format: &str, args: &[&dyn Display]) {
        self.emitf_with_caller(Caller::here(), tag, level, format, args);
    }

    /// [`emit`](Self::emit) with an explicitly captured caller.
    pub fn emit_with_caller(&self, caller: Caller, tag: &str, level: Level, values: &[Value]) {
        if !self.enabled(level) || values.is_empty() {
            return;
        }

        let (body, dropped) = Value::join(values);
        if dropped > 0 {
            self.shared.metrics.record_values_dropped(dropped as u64);
        }
        self.dispatch(self.build_record(&caller, tag, level, body));
    }

    /// [`emitf`](Self::emitf) with an explicitly captured caller.
    pub fn emitf_with_caller(
        &self,
        caller: Caller,
        tag: &str,
        level: Level,
        format: &str,
        args: &[&dyn Display],
    ) {
        if !self.enabled(level) {
            return;
        }

        let body = substitute(format, args);
        self.dispatch(self.build_record(&caller, tag, level, body));
    }

    fn build_record(&self, caller: &Caller, tag: &str, level: Level, body: String) -> Record {
        let short_file = self.short_file();
        let skip = self.call_skip() + PIPELINE_FRAMES;

        let record = Record::new(tag, level, body).with_short_file(short_file);
        match self.shared.resolver.resolve(skip, short_file, caller) {
            Some(site) => record.with_call_site(site),
            None => record,
        }
    }

    /// Queue the record, or deliver it in place when async is off or the
    /// queue cannot take it.
    fn dispatch(&self, record: Record) {
        self.shared.metrics.record_emitted();

        let record = if self.is_async() {
            match self.try_enqueue(record) {
                Ok(()) => return,
                Err(record) => {
                    self.shared.metrics.record_sync_fallback();
                    record
                }
            }
        } else {
            record
        };

        self.shared.fan_out(&record);
    }

    fn try_enqueue(&self, record: Record) -> std::result::Result<(), Record> {
        let sender = self.sender.read();
        let Some(sender) = sender.as_ref() else {
            return Err(record);
        };

        match sender.try_send(record) {
            Ok(()) => {
                self.shared.metrics.record_queued();
                Ok(())
            }
            Err(TrySendError::Full(record)) | Err(TrySendError::Disconnected(record)) => {
                Err(record)
            }
        }
    }

    /// Wait out the fatal grace period, then exit.
    fn terminate(&self) {
        thread::sleep(self.fatal_grace);
        (self.on_exit)(FATAL_EXIT_CODE);
    }

    level_methods!(Level::Trace, trace, trace_tag, tracef, trace_tagf);
    level_methods!(Level::Debug, debug, debug_tag, debugf, debug_tagf);
    level_methods!(Level::Info, info, info_tag, infof, info_tagf);
    level_methods!(Level::Warn, warn, warn_tag, warnf, warn_tagf);
    level_methods!(Level::Error, error, error_tag, errorf, error_tagf);

    /// Log `values` at fatal level, wait for writers, then exit the process.
    #[track_caller]
    pub fn fatal(&self, values: &[Value]) {
        self.emit("", Level::Fatal, values);
        self.terminate();
    }

    /// Log `values` under `tag` at fatal level, then exit the process.
    #[track_caller]
    pub fn fatal_tag(&self, tag: &str, values: &[Value]) {
        self.emit(tag, Level::Fatal, values);
        self.terminate();
    }

    /// Log a `{}` format string at fatal level, then exit the process.
    #[track_caller]
    pub fn fatalf(&self, format: &str, args: &[&dyn Display]) {
        self.emitf("", Level::Fatal, format, args);
        self.terminate();
    }

    /// Log a `{}` format string under `tag` at fatal level, then exit the process.
    #[track_caller]
    pub fn fatal_tagf(&self, tag: &str, format: &str, args: &[&dyn Display]) {
        self.emitf(tag, Level::Fatal, format, args);
        self.terminate();
    }

    /// Log at a level chosen at runtime.
    ///
    /// `Fatal` exits like [`fatal`](Self::fatal); the `All` and `Off`
    /// sentinels are logged at `Info`.
    #[track_caller]
    pub fn log(&self, level: Level, values: &[Value]) {
        self.log_at(Caller::here(), "", level, values);
    }

    /// Format-string counterpart of [`log`](Self::log).
    #[track_caller]
    pub fn logf(&self, level: Level, format: &str, args: &[&dyn Display]) {
        self.logf_at(Caller::here(), "", level, format, args);
    }

    /// [`log`](Self::log) with a tag and an explicitly captured caller.
    pub fn log_at(&self, caller: Caller, tag: &str, level: Level, values: &[Value]) {
        let level = runtime_level(level);
        self.emit_with_caller(caller, tag, level, values);
        if level == Level::Fatal {
            self.terminate();
        }
    }

    /// [`logf`](Self::logf) with a tag and an explicitly captured caller.
    pub fn logf_at(
        &self,
        caller: Caller,
        tag: &str,
        level: Level,
        format: &str,
        args: &[&dyn Display],
    ) {
        let level = runtime_level(level);
        self.emitf_with_caller(caller, tag, level, format, args);
        if level == Level::Fatal {
            self.terminate();
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Close the queue, wait for the drain thread to deliver what is left,
    /// then close every writer.
    ///
    /// Optional: a logger that is never shut down keeps working, and one
    /// that is dropped drains with [`DEFAULT_SHUTDOWN_TIMEOUT`]. After
    /// shutdown, async calls are delivered in place.
    ///
    /// Returns `false` if the drain did not finish within `timeout` or a
    /// writer failed to close.
    pub fn shutdown(&self, timeout: Duration) -> bool {
        let drained = self.stop_drain(timeout);

        let mut closed = true;
        for writer in self.config().writers() {
            let mut writer = writer.lock();
            if let Err(e) = writer.close() {
                let name = writer.name().to_string();
                drop(writer);
                self.shared.report(&LoggerError::writer(name, e.to_string()));
                closed = false;
            }
        }

        drained && closed
    }

    fn stop_drain(&self, timeout: Duration) -> bool {
        drop(self.sender.write().take());

        let Some(handle) = self.drain.lock().take() else {
            return true;
        };

        let start = Instant::now();
        loop {
            if handle.is_finished() {
                if let Err(e) = handle.join() {
                    eprintln!("[GOG ERROR] Drain thread panicked during shutdown: {:?}", e);
                    return false;
                }
                return true;
            }

            if start.elapsed() >= timeout {
                eprintln!(
                    "[GOG WARNING] Drain thread did not finish within {:?}. \
                     Some records may be lost.",
                    timeout
                );
                return false;
            }

            thread::sleep(Duration::from_millis(10));
        }
    }
}

fn runtime_level(level: Level) -> Level {
    match level {
        Level::All | Level::Off => Level::Info,
        other => other,
    }
}

impl Default for Logger {
    /// The configuration of the process-wide default logger.
    fn default() -> Self {
        Self::builder().call_skip(1).short_file(true).build()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.stop_drain(DEFAULT_SHUTDOWN_TIMEOUT);
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use gog::prelude::*;
///
/// let logger = Logger::builder()
///     .level(Level::Info)
///     .short_file(true)
///     .async_mode(true)
///     .queue_capacity(1000)
///     .formatter(JsonFormatter::new())
///     .build();
/// ```
pub struct LoggerBuilder {
    level: Level,
    call_skip: usize,
    short_file: bool,
    async_mode: bool,
    queue_capacity: usize,
    config: Config,
    resolver: Arc<dyn CallSiteResolver>,
    on_error: Option<DiagnosticHook>,
    fatal_grace: Duration,
    on_exit: ExitHook,
}

impl LoggerBuilder {
    /// Create a new builder: every level, colorized console output, sync mode.
    pub fn new() -> Self {
        Self {
            level: Level::All,
            call_skip: 1,
            short_file: false,
            async_mode: false,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            config: Config::console(),
            resolver: Arc::new(LocationResolver),
            on_error: None,
            fatal_grace: FATAL_GRACE_PERIOD,
            on_exit: Arc::new(|code| {
                std::process::exit(code);
            }),
        }
    }

    /// Set the lowest level that produces output
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn call_skip(mut self, skip: usize) -> Self {
        self.call_skip = skip;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn short_file(mut self, short: bool) -> Self {
        self.short_file = short;
        self
    }

    /// Start with async delivery enabled
    #[must_use = "builder methods return a new value"]
    pub fn async_mode(mut self, enabled: bool) -> Self {
        self.async_mode = enabled;
        self
    }

    /// Capacity of the async queue
    #[must_use = "builder methods return a new value"]
    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Replace the whole formatter and writer configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.config.set_formatter(Arc::new(formatter));
        self
    }

    /// Append a writer after the ones already configured
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Writer + 'static>(mut self, writer: W) -> Self {
        self.config.add_writer(shared(writer));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn resolver<R: CallSiteResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    /// Receive formatter and writer failures instead of printing them to stderr
    #[must_use = "builder methods return a new value"]
    pub fn on_error(mut self, hook: DiagnosticHook) -> Self {
        self.on_error = Some(hook);
        self
    }

    /// How long fatal calls wait before exiting
    #[must_use = "builder methods return a new value"]
    pub fn fatal_grace(mut self, grace: Duration) -> Self {
        self.fatal_grace = grace;
        self
    }

    /// Replace `std::process::exit` as the fatal exit action
    #[must_use = "builder methods return a new value"]
    pub fn on_exit(mut self, hook: ExitHook) -> Self {
        self.on_exit = hook;
        self
    }

    /// Build the Logger and start its drain thread
    pub fn build(self) -> Logger {
        Logger::from_builder(self)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
