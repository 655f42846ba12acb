//! One log event as it travels from the logger to the handler.

use crate::level::Level;
use chrono::{DateTime, Local};
use std::fmt;

/// Attribute value. Closed set of scalar kinds so rendering stays deterministic.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text, written as is without quoting.
    Str(String),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Floating point, written in Rust's shortest round-trip form.
    Float(f64),
    /// `true` or `false`.
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Uint(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Self::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Self::$variant(<$target>::from(n))
                }
            }
        )*
    };
}

impl_from_int!(Int, i64: i8, i16, i32, i64);
impl_from_int!(Uint, u64: u8, u16, u32, u64);

// isize/usize are at most 64 bits on every supported target
impl From<isize> for Value {
    #[allow(clippy::cast_possible_truncation)]
    fn from(n: isize) -> Self {
        Self::Int(n as i64)
    }
}

impl From<usize> for Value {
    #[allow(clippy::cast_possible_truncation)]
    fn from(n: usize) -> Self {
        Self::Uint(n as u64)
    }
}

/// Key/value pair attached to a record. Keys need not be unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    /// Name written before `attr_between`.
    pub key: String,
    /// Value written after `attr_between`.
    pub value: Value,
}

impl Attr {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Shorthand for [`Attr::new`], reads better inside attribute lists.
#[must_use]
pub fn attr(key: impl Into<String>, value: impl Into<Value>) -> Attr {
    Attr::new(key, value)
}

impl<K: Into<String>, V: Into<Value>> From<(K, V)> for Attr {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

/// Immutable log event. Built once per log call and consumed synchronously by a handler.
#[derive(Debug, Clone)]
pub struct Record {
    timestamp: DateTime<Local>,
    level: Level,
    message: String,
    attrs: Vec<Attr>,
}

impl Record {
    /// Captures the current local time as the record's timestamp.
    #[must_use]
    pub fn new(level: Level, message: impl Into<String>, attrs: Vec<Attr>) -> Self {
        Self::at(Local::now(), level, message, attrs)
    }

    /// Record with an explicit timestamp, for replay and deterministic tests.
    #[must_use]
    pub fn at(
        timestamp: DateTime<Local>,
        level: Level,
        message: impl Into<String>,
        attrs: Vec<Attr>,
    ) -> Self {
        Self {
            timestamp,
            level,
            message: message.into(),
            attrs,
        }
    }

    #[must_use]
    pub const fn timestamp(&self) -> &DateTime<Local> {
        &self.timestamp
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Attributes in insertion order.
    #[must_use]
    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }
}
