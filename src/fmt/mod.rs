//! Turning records into text: the line template model and the renderer that applies it.

mod format;
mod render;

pub use format::{
    ATTRS, DATETIME, Format, FormatSegment, LEVEL, LineTemplate, MESSAGE, Placeholder,
};
pub use render::{format_attrs, format_datetime, render};
