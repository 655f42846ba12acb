//! `rotalog` - line-formatted logging into size-rotated files.
//!
//! Records pass a level gate, are rendered through a configurable line template,
//! and are appended to a file that rotates itself once it reaches a size limit.
//! Admitted lines can be mirrored to stdout.
//!
//! # Example
//!
//! ```no_run
//! use rotalog::{Handler, Level, Logger, attr};
//!
//! let mut handler = Handler::new("logs/app.log");
//! handler.options_mut().min_level = Level::Debug;
//! handler.format_mut().attr_delimiter = " ".to_string();
//!
//! let logger = Logger::new(handler);
//! logger.info("server started", [attr("port", 8080)]);
//! logger.error("message", []);
//! ```
//!
//! Default lines look like `2024/03/09 07:05:01 INFO [port=8080]: server started`.
//!
//! # Features
//!
//! - `log` (default): [`LogBridge`], a `log::Log` implementation feeding a [`Logger`].

pub mod config;
mod error;
pub mod fmt;
pub mod handler;
pub mod internal;
pub mod level;
pub mod logger;
pub mod record;
pub mod rotate;

pub use config::Config;
pub use error::Error;
pub use fmt::{Format, LineTemplate, render};
pub use handler::{Handler, HandlerOptions};
pub use level::{Level, admit};
#[cfg(feature = "log")]
pub use logger::LogBridge;
pub use logger::{Logger, new_logger};
pub use record::{Attr, Record, Value, attr};
pub use rotate::{RotatingFile, RotationOptions, Sink};
