//! Values accepted by the non-format logging calls
//!
//! Each value is turned into text independently and the pieces are joined
//! with no separator. A value that cannot be turned into text is left out of
//! the message instead of failing the call.

use super::error::{LoggerError, Result};
use std::fmt::{self, Write as _};

/// One piece of a log message.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Str(String),
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Float32(f32),
    /// Raw text; must be valid UTF-8 to be logged.
    Bytes(Vec<u8>),
    /// A value whose `Display` impl failed, named by its type. Never logged.
    Unconvertible(&'static str),
}

impl Value {
    /// Capture anything implementing `Display` through its string form.
    ///
    /// A failing `Display` impl yields [`Value::Unconvertible`] rather than
    /// a panic.
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        let mut text = String::new();
        match write!(text, "{}", value) {
            Ok(()) => Value::Str(text),
            Err(_) => Value::Unconvertible(std::any::type_name::<T>()),
        }
    }

    /// Capture an error through its description.
    pub fn error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Value::display(err)
    }

    /// Canonical textual form of the value.
    pub fn to_text(&self) -> Result<String> {
        match self {
            Value::Null => Ok(String::new()),
            Value::Str(s) => Ok(s.clone()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Int(i) => Ok(i.to_string()),
            Value::UInt(u) => Ok(u.to_string()),
            Value::Float(f) => Ok(f.to_string()),
            Value::Float32(f) => Ok(f.to_string()),
            Value::Bytes(bytes) => String::from_utf8(bytes.clone())
                .map_err(|e| LoggerError::conversion("bytes", e.to_string())),
            Value::Unconvertible(type_name) => Err(LoggerError::conversion(
                *type_name,
                "Display implementation returned an error",
            )),
        }
    }

    /// Join values into a message body, skipping the ones that fail to convert.
    ///
    /// Returns the body and the number of values that were left out.
    pub fn join(values: &[Value]) -> (String, usize) {
        let mut body = String::new();
        let mut dropped = 0;
        for value in values {
            match value.to_text() {
                Ok(text) => body.push_str(&text),
                Err(_) => dropped += 1,
            }
        }
        (body, dropped)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bytes(bytes) => write!(f, "{}", String::from_utf8_lossy(bytes)),
            Value::Unconvertible(_) => Ok(()),
            other => match other.to_text() {
                Ok(text) => f.write_str(&text),
                Err(_) => Err(fmt::Error),
            },
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float32(f)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(i: $ty) -> Self {
                Value::Int(i as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(u: $ty) -> Self {
                Value::UInt(u as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);
