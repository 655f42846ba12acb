//! Record + Format → one line of text. Pure: same inputs, same bytes.

use super::format::{Format, FormatSegment, Placeholder};
use crate::record::{Attr, Record};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use std::fmt::{Display, Write};

/// Renders a record into a newline-terminated line.
#[must_use]
pub fn render(record: &Record, format: &Format) -> String {
    let line = &format.line;

    // Only pay for the pieces the template actually references.
    let datetime = if line.uses(Placeholder::Datetime) {
        format_datetime(record.timestamp(), &format.datetime)
    } else {
        String::new()
    };
    let attrs = if line.uses(Placeholder::Attrs) {
        format_attrs(record.attrs(), format)
    } else {
        String::new()
    };

    let mut out = String::with_capacity(64 + record.message().len() + attrs.len());
    for segment in line.segments() {
        match segment {
            FormatSegment::Literal(s) => out.push_str(s),
            FormatSegment::Placeholder(Placeholder::Datetime) => out.push_str(&datetime),
            FormatSegment::Placeholder(Placeholder::Level) => out.push_str(record.level().as_str()),
            FormatSegment::Placeholder(Placeholder::Attrs) => out.push_str(&attrs),
            FormatSegment::Placeholder(Placeholder::Message) => out.push_str(record.message()),
        }
    }
    out.push('\n');
    out
}

/// Formats a timestamp with a strftime pattern.
///
/// A pattern chrono cannot parse is written out verbatim instead of failing the record.
#[must_use]
pub fn format_datetime<Tz>(timestamp: &DateTime<Tz>, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return pattern.to_string();
    }

    let mut out = String::new();
    if write!(out, "{}", timestamp.format_with_items(items.into_iter())).is_err() {
        return pattern.to_string();
    }
    out
}

/// `prefix key<between>value<delimiter>key<between>value suffix`, or empty with no attributes.
#[must_use]
pub fn format_attrs(attrs: &[Attr], format: &Format) -> String {
    if attrs.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(&format.attr_prefix);
    for (i, attr) in attrs.iter().enumerate() {
        if i > 0 {
            out.push_str(&format.attr_delimiter);
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{}{}{}", attr.key, format.attr_between, attr.value);
    }
    out.push_str(&format.attr_suffix);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::record::attr;
    use chrono::{Local, TimeZone};

    fn fixed_record(level: Level, attrs: Vec<Attr>) -> Record {
        let ts = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        Record::at(ts, level, "message", attrs)
    }

    #[test]
    fn default_format_with_one_attr() {
        let record = fixed_record(Level::Info, vec![attr("attr1", 1)]);
        assert_eq!(
            render(&record, &Format::default()),
            "2024/03/09 07:05:01 INFO [attr1=1]: message\n"
        );
    }

    #[test]
    fn default_format_with_two_attrs() {
        let record = fixed_record(Level::Warn, vec![attr("attr1", 1), attr("attr2", "v")]);
        assert_eq!(
            render(&record, &Format::default()),
            "2024/03/09 07:05:01 WARN [attr1=1, attr2=v]: message\n"
        );
    }

    #[test]
    fn no_attrs_leaves_empty_segment() {
        let record = fixed_record(Level::Error, vec![]);
        assert_eq!(
            render(&record, &Format::default()),
            "2024/03/09 07:05:01 ERROR : message\n"
        );
    }

    #[test]
    fn reordered_template_and_custom_attr_format() {
        let format = Format::new()
            .line("${Message} ${Attrs} ${Level}: ${Datetime}")
            .datetime("%y-%m-%d %H_%M_%S")
            .attr_between("=>")
            .attr_delimiter(" | ")
            .attr_prefix("{ ")
            .attr_suffix(" }");

        let warn = fixed_record(Level::Warn, vec![]);
        assert_eq!(render(&warn, &format), "message  WARN: 24-03-09 07_05_01\n");

        let error = fixed_record(Level::Error, vec![attr("attr1", 1), attr("attr2", "v")]);
        assert_eq!(
            render(&error, &format),
            "message { attr1=>1 | attr2=>v } ERROR: 24-03-09 07_05_01\n"
        );
    }

    #[test]
    fn delimiter_count_is_one_less_than_attrs() {
        let format = Format::new().line("${Attrs}").attr_delimiter(";");
        let attrs: Vec<Attr> = (0..5).map(|i| attr(format!("k{i}"), i)).collect();
        let line = render(&fixed_record(Level::Info, attrs), &format);
        assert_eq!(line.matches(';').count(), 4);
        assert_eq!(line, "[k0=0;k1=1;k2=2;k3=3;k4=4]\n");
    }

    #[test]
    fn repeated_tokens_are_all_substituted() {
        let format = Format::new().line("${Level}/${Level} ${Message}");
        let line = render(&fixed_record(Level::Debug, vec![]), &format);
        assert_eq!(line, "DEBUG/DEBUG message\n");
    }

    #[test]
    fn omitted_and_unknown_tokens() {
        let format = Format::new().line("${Nope} ${Message}");
        let line = render(&fixed_record(Level::Info, vec![attr("a", 1)]), &format);
        assert_eq!(line, "${Nope} message\n");
    }

    #[test]
    fn stray_opener_before_token() {
        let format = Format::new().line("cost ${amount ${Level}: ${Message}");
        let line = render(&fixed_record(Level::Info, vec![]), &format);
        assert_eq!(line, "cost ${amount INFO: message\n");
    }

    #[test]
    fn invalid_datetime_pattern_is_written_verbatim() {
        let format = Format::new().line("${Datetime}").datetime("%Q");
        let line = render(&fixed_record(Level::Info, vec![]), &format);
        assert_eq!(line, "%Q\n");
    }

    #[test]
    fn rendering_is_deterministic() {
        let record = fixed_record(Level::Warn, vec![attr("a", 1), attr("a", "dup")]);
        let format = Format::default();
        assert_eq!(render(&record, &format), render(&record, &format));
    }
}
