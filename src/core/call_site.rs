//! Call-site resolution
//!
//! Rust does not let a library walk its caller's frames portably, so the
//! public entry points are `#[track_caller]` and hand the captured
//! [`Caller`] to the resolver together with the classic skip count. The
//! default resolver reads the location straight from the [`Caller`]; a
//! custom resolver may use the skip count instead.

use std::panic::Location;
use std::path::Path;

/// Frames between a public logging call and the resolver invocation.
pub const PIPELINE_FRAMES: usize = 3;

/// What the public entry point knows about its caller.
#[derive(Debug, Clone, Copy)]
pub struct Caller {
    location: &'static Location<'static>,
    function: Option<&'static str>,
}

impl Caller {
    /// The location of the nearest `#[track_caller]` boundary.
    #[track_caller]
    pub fn here() -> Self {
        Self {
            location: Location::caller(),
            function: None,
        }
    }

    /// Attach the enclosing function's path, as captured by the logging macros.
    #[must_use]
    pub fn with_function(mut self, function: &'static str) -> Self {
        self.function = Some(function);
        self
    }

    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    pub fn function(&self) -> Option<&'static str> {
        self.function
    }
}

/// Resolved source position of a log call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallSite {
    pub file: String,
    pub function: String,
    pub line: u32,
}

/// Resolves the source location of a log call.
///
/// `skip` is the number of stack frames between the resolver and the user's
/// call (`call_skip + PIPELINE_FRAMES`). Returning `None` leaves the record's
/// location empty; formatting copes with that.
pub trait CallSiteResolver: Send + Sync {
    fn resolve(&self, skip: usize, short_file: bool, caller: &Caller) -> Option<CallSite>;
}

/// Default resolver backed by `#[track_caller]` locations.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationResolver;

impl CallSiteResolver for LocationResolver {
    fn resolve(&self, _skip: usize, short_file: bool, caller: &Caller) -> Option<CallSite> {
        let location = caller.location();
        let file = if short_file {
            base_name(location.file())
        } else {
            location.file().to_string()
        };

        Some(CallSite {
            file,
            function: caller.function().map(short_function_name).unwrap_or_default(),
            line: location.line(),
        })
    }
}

/// Resolver that never finds a location.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCallSite;

impl CallSiteResolver for NoCallSite {
    fn resolve(&self, _skip: usize, _short_file: bool, _caller: &Caller) -> Option<CallSite> {
        None
    }
}

fn base_name(file: &str) -> String {
    Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file)
        .to_string()
}

/// Last path segment of a function path, ignoring closure frames.
///
/// `my_app::server::start::{{closure}}` becomes `start`.
pub fn short_function_name(path: &str) -> String {
    let mut trimmed = path;
    while let Some(stripped) = trimmed.strip_suffix("::{{closure}}") {
        trimmed = stripped;
    }
    trimmed
        .rsplit("::")
        .next()
        .unwrap_or(trimmed)
        .to_string()
}

/// Path of the function the macro is expanded in.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        name.strip_suffix("::f").unwrap_or(name)
    }};
}
