//! Description markup rendering.
//!
//! Job descriptions carry a small HTML-like markup. The terminal cannot
//! display HTML, so the description is parsed into styled lines: paragraphs
//! and `<br>` break lines, `<li>` items get a bullet, `<b>`/`<strong>` turn
//! bold. Whitespace is collapsed the way a browser would and the common
//! character entities are decoded.
//!
//! How much of the source is trusted is a [`DescriptionPolicy`]:
//!
//! - [`DescriptionPolicy::Trusted`] keeps unrecognized tags as literal text
//!   and passes every character through, escape sequences included.
//! - [`DescriptionPolicy::Sanitized`] drops unrecognized tags and strips
//!   control characters so the fixture cannot drive the terminal.

use serde::Deserialize;
use unicode_width::UnicodeWidthChar;

/// How description markup from the catalog is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptionPolicy {
    #[default]
    Trusted,
    Sanitized,
}

impl DescriptionPolicy {
    /// Parses a configuration value (`trusted` or `sanitized`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "trusted" => Some(Self::Trusted),
            "sanitized" => Some(Self::Sanitized),
            _ => None,
        }
    }
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

/// What precedes a line when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinePrefix {
    #[default]
    None,
    /// First line of a list item.
    Bullet,
    /// Wrapped continuation of a list item.
    Continuation,
}

impl LinePrefix {
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Bullet => "• ",
            Self::Continuation => "  ",
        }
    }

    const fn width(self) -> usize {
        match self {
            Self::None => 0,
            Self::Bullet | Self::Continuation => 2,
        }
    }
}

/// One output line of a rendered description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupLine {
    pub prefix: LinePrefix,
    pub spans: Vec<Span>,
}

impl MarkupLine {
    /// Line text without styling or prefix.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.spans.iter().all(|span| span.text.is_empty())
    }

    fn from_chars(prefix: LinePrefix, chars: &[(char, bool)]) -> Self {
        let mut spans: Vec<Span> = Vec::new();
        for &(c, bold) in chars {
            match spans.last_mut() {
                Some(span) if span.bold == bold => span.text.push(c),
                _ => spans.push(Span {
                    text: c.to_string(),
                    bold,
                }),
            }
        }
        Self { prefix, spans }
    }
}

#[derive(Default)]
struct LineBuilder {
    lines: Vec<MarkupLine>,
    current: Vec<(char, bool)>,
    prefix: LinePrefix,
    bold_depth: usize,
    pending_space: bool,
}

impl LineBuilder {
    fn push_text(&mut self, text: &str, policy: DescriptionPolicy) {
        for c in text.chars() {
            if c.is_whitespace() {
                self.pending_space = !self.current.is_empty();
                continue;
            }
            if policy == DescriptionPolicy::Sanitized && c.is_control() {
                continue;
            }
            if self.pending_space {
                self.current.push((' ', false));
                self.pending_space = false;
            }
            self.current.push((c, self.bold_depth > 0));
        }
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            let line = MarkupLine::from_chars(self.prefix, &self.current);
            self.lines.push(line);
            self.current.clear();
        }
        self.prefix = LinePrefix::None;
        self.pending_space = false;
    }

    fn line_break(&mut self) {
        if self.current.is_empty() {
            self.lines.push(MarkupLine::default());
        }
        self.flush();
    }

    fn paragraph_end(&mut self) {
        self.flush();
        if self.lines.last().is_some_and(|line| !line.is_blank()) {
            self.lines.push(MarkupLine::default());
        }
    }

    fn finish(mut self) -> Vec<MarkupLine> {
        self.flush();
        while self.lines.last().is_some_and(MarkupLine::is_blank) {
            self.lines.pop();
        }
        self.lines
    }
}

fn decode_entities(text: &str) -> String {
    const ENTITIES: [(&str, &str); 7] = [
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&quot;", "\""),
        ("&#39;", "'"),
        ("&apos;", "'"),
        ("&nbsp;", " "),
        ("&amp;", "&"),
    ];
    if !text.contains('&') {
        return text.to_string();
    }
    ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, replacement)| acc.replace(entity, replacement))
}

/// Applies one tag. Returns `false` when the tag is not recognized.
fn apply_tag(builder: &mut LineBuilder, tag: &str) -> bool {
    let closing = tag.starts_with('/');
    let name = tag
        .trim_start_matches('/')
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    match (name.as_str(), closing) {
        ("p" | "div", false) | ("ul" | "ol", _) => builder.flush(),
        ("p" | "div", true) => builder.paragraph_end(),
        ("br", _) => builder.line_break(),
        ("li", false) => {
            builder.flush();
            builder.prefix = LinePrefix::Bullet;
        }
        ("li", true) => builder.flush(),
        ("b" | "strong", false) => builder.bold_depth += 1,
        ("b" | "strong", true) => builder.bold_depth = builder.bold_depth.saturating_sub(1),
        ("i" | "em" | "span", _) => {}
        _ => return false,
    }
    true
}

/// Parses description markup into unwrapped lines.
///
/// # Example
///
/// ```rust
/// use jobboard::ui::markup::{parse, DescriptionPolicy};
///
/// let lines = parse("<p>Join <b>us</b></p><ul><li>Remote</li></ul>", DescriptionPolicy::Trusted);
/// let text: Vec<String> = lines.iter().map(|line| line.plain_text()).collect();
/// assert_eq!(text, ["Join us", "", "Remote"]);
/// ```
#[must_use]
pub fn parse(source: &str, policy: DescriptionPolicy) -> Vec<MarkupLine> {
    let mut builder = LineBuilder::default();
    let mut rest = source;

    while let Some(open) = rest.find('<') {
        builder.push_text(&decode_entities(&rest[..open]), policy);
        let after = &rest[open + 1..];
        let Some(close) = after.find('>') else {
            builder.push_text(&decode_entities(&rest[open..]), policy);
            rest = "";
            break;
        };

        let tag = &after[..close];
        if !apply_tag(&mut builder, tag) && policy == DescriptionPolicy::Trusted {
            builder.push_text(&rest[open..=open + 1 + close], policy);
        }
        rest = &after[close + 1..];
    }
    builder.push_text(&decode_entities(rest), policy);

    builder.finish()
}

fn char_columns(c: char) -> usize {
    c.width().unwrap_or(0)
}

fn columns(chars: &[(char, bool)]) -> usize {
    chars.iter().map(|&(c, _)| char_columns(c)).sum()
}

/// Splits a word into pieces at most `budget` columns wide.
///
/// A character wider than the budget still gets a piece of its own.
fn split_by_columns(word: &[(char, bool)], budget: usize) -> Vec<&[(char, bool)]> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut used = 0;
    for (index, &(c, _)) in word.iter().enumerate() {
        let w = char_columns(c);
        if index > start && used + w > budget {
            pieces.push(&word[start..index]);
            start = index;
            used = 0;
        }
        used += w;
    }
    if start < word.len() {
        pieces.push(&word[start..]);
    }
    pieces
}

/// Word-wraps lines to `width` terminal columns, list prefixes included.
///
/// Words longer than a line are split.
#[must_use]
pub fn wrap(lines: &[MarkupLine], width: usize) -> Vec<MarkupLine> {
    let mut wrapped = Vec::with_capacity(lines.len());

    for line in lines {
        let available = width.saturating_sub(line.prefix.width()).max(1);
        let chars: Vec<(char, bool)> = line
            .spans
            .iter()
            .flat_map(|span| span.text.chars().map(move |c| (c, span.bold)))
            .collect();

        let mut rows: Vec<Vec<(char, bool)>> = Vec::new();
        let mut current: Vec<(char, bool)> = Vec::new();
        let mut used = 0;
        for word in chars.split(|&(c, _)| c == ' ').filter(|word| !word.is_empty()) {
            for chunk in split_by_columns(word, available) {
                let chunk_width = columns(chunk);
                if !current.is_empty() && used + 1 + chunk_width > available {
                    rows.push(std::mem::take(&mut current));
                    used = 0;
                }
                if !current.is_empty() {
                    current.push((' ', false));
                    used += 1;
                }
                current.extend_from_slice(chunk);
                used += chunk_width;
            }
        }
        if !current.is_empty() || rows.is_empty() {
            rows.push(current);
        }

        for (index, row) in rows.iter().enumerate() {
            let prefix = match (line.prefix, index) {
                (LinePrefix::Bullet, 0) => LinePrefix::Bullet,
                (LinePrefix::Bullet | LinePrefix::Continuation, _) => LinePrefix::Continuation,
                (LinePrefix::None, _) => LinePrefix::None,
            };
            wrapped.push(MarkupLine::from_chars(prefix, row));
        }
    }

    wrapped
}
