//! Types produced by the language oracle.

use serde::{Deserialize, Serialize};

/// Where a candidate span came from, used as the overlap tie-break.
///
/// Rule spans outrank model spans so that intentional overrides (a known
/// product name the general model mislabels) survive resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpanOrigin {
    /// Derived from a user-supplied regex rule
    Rule,
    /// Derived from the language oracle
    Model,
}

/// A labeled, contiguous character range of the source text.
///
/// Offsets are byte offsets into the original text. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Surface text of the entity
    pub text: String,
    /// Category label (e.g. `PERSON`, `ORG`, `GPE`, `PRODUCT`)
    pub label: String,
    /// Start offset in the source text
    pub start: usize,
    /// End offset (exclusive) in the source text
    pub end: usize,
    /// Provenance of the span
    pub origin: SpanOrigin,
}

impl Span {
    pub fn new(
        text: impl Into<String>,
        label: impl Into<String>,
        start: usize,
        end: usize,
        origin: SpanOrigin,
    ) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
            start,
            end,
            origin,
        }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether two spans share any character position.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// A single oracle token with its offsets and an optional entity label.
///
/// The label is set for every token covered by an entity span, whether or
/// not that span's category is on the allow-list; the co-occurrence graph
/// deliberately consumes the unfiltered labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub label: Option<String>,
}

/// Character range of one sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub start: usize,
    pub end: usize,
}

impl Sentence {
    /// Whether the given offset falls inside this sentence.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// Everything the oracle produces for one input text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub sentences: Vec<Sentence>,
    pub spans: Vec<Span>,
}

impl Analysis {
    /// The sentence enclosing the given offset, if any.
    pub fn sentence_at(&self, offset: usize) -> Option<&Sentence> {
        self.sentences.iter().find(|s| s.contains(offset))
    }

    /// Tokens whose range falls inside the given sentence.
    pub fn tokens_in(&self, sentence: &Sentence) -> impl Iterator<Item = &Token> {
        let Sentence { start, end } = *sentence;
        self.tokens
            .iter()
            .filter(move |t| t.start >= start && t.end <= end)
    }

    /// Whether `start..end` lines up with token boundaries: `start` begins
    /// some token and `end` terminates some token.
    pub fn aligns_with_tokens(&self, start: usize, end: usize) -> bool {
        self.tokens.iter().any(|t| t.start == start) && self.tokens.iter().any(|t| t.end == end)
    }
}
