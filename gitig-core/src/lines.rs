//! Line tokenizer for ignore-file text.
//!
//! Every consumer of `.gitignore` content (the pattern index, the merge
//! engine, pattern addition) classifies lines through [`tokenize`] so that
//! "comment", "blank" and "pattern" mean the same thing everywhere.

/// Classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// First non-whitespace character is `#`.
    Comment,
    /// Nothing but whitespace.
    Blank,
    /// A pattern, trimmed of surrounding whitespace and line terminator.
    Pattern(&'a str),
}

/// A line of text together with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    raw: &'a str,
    kind: LineKind<'a>,
}

impl<'a> Line<'a> {
    /// Classify a single line (terminator optional).
    pub fn parse(raw: &'a str) -> Self {
        let trimmed = raw.trim();
        let kind = if trimmed.is_empty() {
            LineKind::Blank
        } else if trimmed.starts_with('#') {
            LineKind::Comment
        } else {
            LineKind::Pattern(trimmed)
        };
        Self { raw, kind }
    }

    /// The line exactly as it appeared, including its terminator if any.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn kind(&self) -> LineKind<'a> {
        self.kind
    }

    /// The trimmed pattern text, if this is a pattern line.
    pub fn pattern(&self) -> Option<&'a str> {
        match self.kind {
            LineKind::Pattern(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_comment(&self) -> bool {
        matches!(self.kind, LineKind::Comment)
    }

    /// Whether the raw text ends with a line terminator.
    pub fn is_terminated(&self) -> bool {
        self.raw.ends_with('\n')
    }
}

/// Split `text` into classified lines, keeping each line's terminator.
pub fn tokenize(text: &str) -> impl Iterator<Item = Line<'_>> {
    text.split_inclusive('\n').map(Line::parse)
}

/// Iterate over the trimmed pattern lines of `text`.
pub fn patterns(text: &str) -> impl Iterator<Item = &str> {
    tokenize(text).filter_map(|line| line.pattern())
}
