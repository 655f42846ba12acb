//! Line layout configuration. The line template decides which pieces of a record
//! appear and in what order; the attribute settings decide how the attribute list looks.

/// `${Datetime}` token, substituted with the formatted timestamp.
pub const DATETIME: &str = "${Datetime}";
/// `${Level}` token, substituted with the canonical level name.
pub const LEVEL: &str = "${Level}";
/// `${Attrs}` token, substituted with the rendered attribute list.
pub const ATTRS: &str = "${Attrs}";
/// `${Message}` token, substituted with the raw message.
pub const MESSAGE: &str = "${Message}";

/// Closed set of known substitution tokens. Unknown `${names}` pass through as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Datetime,
    Level,
    Attrs,
    Message,
}

impl Placeholder {
    /// Name between `${` and `}`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Datetime => "Datetime",
            Self::Level => "Level",
            Self::Attrs => "Attrs",
            Self::Message => "Message",
        }
    }

    pub const ALL: &'static [Self] = &[Self::Datetime, Self::Level, Self::Attrs, Self::Message];

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ph| ph.as_str() == name)
    }
}

/// Parsed piece of a line template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSegment {
    /// Separators, whitespace, and unknown `${names}`.
    Literal(String),
    /// Known token, substituted at render time.
    Placeholder(Placeholder),
}

/// Line template parsed once into segments so rendering never rescans the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTemplate {
    source: String,
    segments: Vec<FormatSegment>,
    unknown: Vec<String>,
}

impl LineTemplate {
    /// Splits `"${Datetime} ${Level} ${Attrs}: ${Message}"` into literal and placeholder segments.
    ///
    /// A `${` without a closing brace is kept as literal text, and so is a stray `${`
    /// in front of a token: in `"${a ${Level}"` only `${Level}` is a token.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut unknown = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(mut start) = rest.find("${") {
            let Some(close) = rest[start..].find('}') else {
                break;
            };
            let close = start + close;
            // The token belongs to the opener nearest the closing brace.
            if let Some(inner) = rest[start + 2..close].rfind("${") {
                start += 2 + inner;
            }
            let name = &rest[start + 2..close];

            literal.push_str(&rest[..start]);
            if let Some(ph) = Placeholder::from_name(name) {
                if !literal.is_empty() {
                    segments.push(FormatSegment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(FormatSegment::Placeholder(ph));
            } else {
                literal.push_str(&rest[start..=close]);
                unknown.push(name.to_string());
            }

            rest = &rest[close + 1..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(FormatSegment::Literal(literal));
        }

        Self {
            source: template.to_string(),
            segments,
            unknown,
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[FormatSegment] {
        &self.segments
    }

    /// Template text as given to [`LineTemplate::parse`].
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Names of `${...}` tokens that are not placeholders, in order of appearance.
    ///
    /// Rendering keeps them verbatim; callers that want strict templates can reject
    /// a non-empty list.
    #[must_use]
    pub fn unknown_tokens(&self) -> &[String] {
        &self.unknown
    }

    /// Whether rendering this template needs the given piece of the record.
    #[must_use]
    pub fn uses(&self, placeholder: Placeholder) -> bool {
        self.segments
            .iter()
            .any(|s| *s == FormatSegment::Placeholder(placeholder))
    }
}

impl Default for LineTemplate {
    fn default() -> Self {
        Self::parse(Format::DEFAULT_LINE)
    }
}

impl From<&str> for LineTemplate {
    fn from(template: &str) -> Self {
        Self::parse(template)
    }
}

impl From<String> for LineTemplate {
    fn from(template: String) -> Self {
        Self::parse(&template)
    }
}

/// How a record is laid out as one line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    /// Overall line layout.
    pub line: LineTemplate,
    /// strftime pattern for `${Datetime}`.
    pub datetime: String,
    /// Between an attribute's key and its value.
    pub attr_between: String,
    /// Between two attributes.
    pub attr_delimiter: String,
    /// Before the attribute list; only written when there is at least one attribute.
    pub attr_prefix: String,
    /// After the attribute list; only written when there is at least one attribute.
    pub attr_suffix: String,
}

impl Format {
    pub const DEFAULT_LINE: &'static str = "${Datetime} ${Level} ${Attrs}: ${Message}";
    pub const DEFAULT_DATETIME: &'static str = "%Y/%m/%d %H:%M:%S";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn line(mut self, template: &str) -> Self {
        self.line = LineTemplate::parse(template);
        self
    }

    #[must_use]
    pub fn datetime(mut self, pattern: impl Into<String>) -> Self {
        self.datetime = pattern.into();
        self
    }

    #[must_use]
    pub fn attr_between(mut self, between: impl Into<String>) -> Self {
        self.attr_between = between.into();
        self
    }

    #[must_use]
    pub fn attr_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.attr_delimiter = delimiter.into();
        self
    }

    #[must_use]
    pub fn attr_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.attr_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn attr_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.attr_suffix = suffix.into();
        self
    }
}

impl Default for Format {
    fn default() -> Self {
        Self {
            line: LineTemplate::parse(Self::DEFAULT_LINE),
            datetime: Self::DEFAULT_DATETIME.to_string(),
            attr_between: "=".to_string(),
            attr_delimiter: ", ".to_string(),
            attr_prefix: "[".to_string(),
            attr_suffix: "]".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_template() {
        let t = LineTemplate::default();
        assert_eq!(
            t.segments(),
            &[
                FormatSegment::Placeholder(Placeholder::Datetime),
                FormatSegment::Literal(" ".to_string()),
                FormatSegment::Placeholder(Placeholder::Level),
                FormatSegment::Literal(" ".to_string()),
                FormatSegment::Placeholder(Placeholder::Attrs),
                FormatSegment::Literal(": ".to_string()),
                FormatSegment::Placeholder(Placeholder::Message),
            ]
        );
        assert!(t.unknown_tokens().is_empty());
    }

    #[test]
    fn unknown_tokens_stay_literal() {
        let t = LineTemplate::parse("${Level} ${Host} ${Message}");
        assert_eq!(
            t.segments(),
            &[
                FormatSegment::Placeholder(Placeholder::Level),
                FormatSegment::Literal(" ${Host} ".to_string()),
                FormatSegment::Placeholder(Placeholder::Message),
            ]
        );
        assert_eq!(t.unknown_tokens(), &["Host".to_string()]);
    }

    #[test]
    fn unclosed_token_is_literal() {
        let t = LineTemplate::parse("${Level} ${Message");
        assert_eq!(
            t.segments(),
            &[
                FormatSegment::Placeholder(Placeholder::Level),
                FormatSegment::Literal(" ${Message".to_string()),
            ]
        );
    }

    #[test]
    fn stray_opener_does_not_hide_following_token() {
        let t = LineTemplate::parse("cost ${amount ${Level}: ${Message}");
        assert_eq!(
            t.segments(),
            &[
                FormatSegment::Literal("cost ${amount ".to_string()),
                FormatSegment::Placeholder(Placeholder::Level),
                FormatSegment::Literal(": ".to_string()),
                FormatSegment::Placeholder(Placeholder::Message),
            ]
        );
        assert!(t.unknown_tokens().is_empty());
    }

    #[test]
    fn repeated_and_missing_tokens() {
        let t = LineTemplate::parse("${Message}|${Message}");
        assert!(t.uses(Placeholder::Message));
        assert!(!t.uses(Placeholder::Datetime));
        assert_eq!(t.segments().len(), 3);
    }

    #[test]
    fn token_constants_match_placeholders() {
        let line = format!("{DATETIME}{LEVEL}{ATTRS}{MESSAGE}");
        let t = LineTemplate::parse(&line);
        let expected: Vec<_> = Placeholder::ALL
            .iter()
            .map(|ph| FormatSegment::Placeholder(*ph))
            .collect();
        assert_eq!(t.segments(), expected.as_slice());
    }
}
