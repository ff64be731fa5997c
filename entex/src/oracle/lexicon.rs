//! Gazetteer-backed language oracle.
//!
//! Stands in for a pretrained pipeline: a single-pass tokenizer, a
//! terminal-punctuation sentence splitter, and an entity tagger driven by
//! built-in name lists plus dictionary token-sequence rules from the
//! configuration. Two lexicon sizes are built in; the configuration's
//! `testing` flag selects the small one.

use lazy_static::lazy_static;
use regex::Regex;

use super::{Analysis, Oracle, Sentence, Span, SpanOrigin, Token};
use crate::config::{DictPattern, ServiceConfig};
use crate::Result;

/// Core lexicon shared by both model sizes.
const SMALL_LEXICON: &[(&str, &str)] = &[
    ("Apple", "ORG"),
    ("Google", "ORG"),
    ("Microsoft", "ORG"),
    ("Amazon", "ORG"),
    ("Meta", "ORG"),
    ("OpenAI", "ORG"),
    ("NASA", "ORG"),
    ("MIT", "ORG"),
    // The general model tags product names as ORG; regex rules exist to
    // override exactly this kind of mislabel.
    ("iPhone", "ORG"),
    ("California", "GPE"),
    ("New York", "GPE"),
    ("London", "GPE"),
    ("Paris", "GPE"),
    ("Tokyo", "GPE"),
    ("Berlin", "GPE"),
    ("Texas", "GPE"),
    ("Tim Cook", "PERSON"),
    ("Ada Lovelace", "PERSON"),
    ("Alan Turing", "PERSON"),
    ("Grace Hopper", "PERSON"),
];

/// Additional entries only the large model carries.
const LARGE_LEXICON: &[(&str, &str)] = &[
    ("IBM", "ORG"),
    ("Intel", "ORG"),
    ("AMD", "ORG"),
    ("NVIDIA", "ORG"),
    ("Netflix", "ORG"),
    ("Uber", "ORG"),
    ("Airbnb", "ORG"),
    ("Pfizer", "ORG"),
    ("Moderna", "ORG"),
    ("DeepMind", "ORG"),
    ("Anthropic", "ORG"),
    ("FBI", "ORG"),
    ("CIA", "ORG"),
    ("WHO", "ORG"),
    ("NATO", "ORG"),
    ("CERN", "ORG"),
    ("DARPA", "ORG"),
    ("IEEE", "ORG"),
    ("UCLA", "ORG"),
    ("San Francisco", "GPE"),
    ("Los Angeles", "GPE"),
    ("United States", "GPE"),
    ("United Kingdom", "GPE"),
    ("Washington", "GPE"),
    ("Seattle", "GPE"),
    ("Chicago", "GPE"),
    ("Boston", "GPE"),
    ("Cupertino", "GPE"),
    ("Redmond", "GPE"),
    ("China", "GPE"),
    ("Japan", "GPE"),
    ("Germany", "GPE"),
    ("France", "GPE"),
    ("India", "GPE"),
    ("Brazil", "GPE"),
    ("Satya Nadella", "PERSON"),
    ("Sundar Pichai", "PERSON"),
    ("Margaret Hamilton", "PERSON"),
];

lazy_static! {
    /// Capitalized run ending in an explicit organization suffix.
    static ref ORG_SUFFIX: Regex = Regex::new(
        r"\b[A-Z][A-Za-z]*(?:\s+[A-Z][A-Za-z]*)*\s+(?:Inc\.?|Corp\.?|Corporation|Ltd\.?|LLC|GmbH|University|Institute|Foundation|Laboratory|Labs?|Company|Group|Agency|Commission|Council|Bank)\b"
    )
    .expect("org suffix pattern must compile");
}

/// One tagger rule: a token sequence and the label it carries.
#[derive(Debug, Clone)]
struct LexiconEntry {
    tokens: Vec<String>,
    label: String,
}

/// Gazetteer-backed [`Oracle`] implementation.
#[derive(Debug)]
pub struct LexiconOracle {
    name: String,
    /// Dictionary rules from configuration, tried before the lexicon
    dict_entries: Vec<LexiconEntry>,
    /// Built-in lexicon entries
    lexicon_entries: Vec<LexiconEntry>,
}

impl LexiconOracle {
    /// Build an oracle from the service configuration: the `testing` flag
    /// selects the lexicon size, `entity_dicts` supplies dictionary rules.
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        Ok(Self::new(config.testing, &config.entity_dicts))
    }

    /// Build an oracle directly from a lexicon-size flag and rules.
    pub fn new(testing: bool, dicts: &[DictPattern]) -> Self {
        let mut lexicon: Vec<LexiconEntry> = SMALL_LEXICON
            .iter()
            .map(|(text, label)| LexiconEntry {
                tokens: text.split_whitespace().map(str::to_string).collect(),
                label: (*label).to_string(),
            })
            .collect();

        let name = if testing {
            "lexicon-small"
        } else {
            lexicon.extend(LARGE_LEXICON.iter().map(|(text, label)| LexiconEntry {
                tokens: text.split_whitespace().map(str::to_string).collect(),
                label: (*label).to_string(),
            }));
            "lexicon-large"
        };

        let mut dict_entries: Vec<LexiconEntry> = dicts
            .iter()
            .map(|d| LexiconEntry {
                tokens: d.pattern.clone(),
                label: d.label.to_uppercase(),
            })
            .collect();

        // Longest sequence first so "New York City" beats "New York".
        dict_entries.sort_by_key(|e| std::cmp::Reverse(e.tokens.len()));
        lexicon.sort_by_key(|e| std::cmp::Reverse(e.tokens.len()));

        Self {
            name: name.to_string(),
            dict_entries,
            lexicon_entries: lexicon,
        }
    }

    /// Single-pass tokenizer: alphanumeric runs are word tokens, every
    /// other non-whitespace character is its own token.
    fn tokenize(text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut iter = text.char_indices().peekable();

        while let Some((i, c)) = iter.next() {
            if c.is_whitespace() {
                continue;
            }
            if c.is_alphanumeric() {
                let mut end = i + c.len_utf8();
                while let Some(&(j, d)) = iter.peek() {
                    if d.is_alphanumeric() {
                        end = j + d.len_utf8();
                        iter.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token {
                    text: text[i..end].to_string(),
                    start: i,
                    end,
                    label: None,
                });
            } else {
                tokens.push(Token {
                    text: c.to_string(),
                    start: i,
                    end: i + c.len_utf8(),
                    label: None,
                });
            }
        }

        tokens
    }

    /// Sentence boundaries: terminal punctuation followed by whitespace or
    /// end of text.
    fn split_sentences(text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        let mut start: Option<usize> = None;
        let mut iter = text.char_indices().peekable();

        while let Some((i, c)) = iter.next() {
            if start.is_none() && !c.is_whitespace() {
                start = Some(i);
            }
            if matches!(c, '.' | '!' | '?') {
                let at_boundary = iter
                    .peek()
                    .map(|&(_, d)| d.is_whitespace())
                    .unwrap_or(true);
                if at_boundary {
                    if let Some(s) = start.take() {
                        sentences.push(Sentence {
                            start: s,
                            end: i + c.len_utf8(),
                        });
                    }
                }
            }
        }

        if let Some(s) = start {
            sentences.push(Sentence {
                start: s,
                end: text.len(),
            });
        }

        sentences
    }

    /// Try every entry list at position `i`; dictionary rules win over the
    /// built-in lexicon, longer sequences win within each list.
    fn match_at(&self, tokens: &[Token], i: usize) -> Option<(usize, &str)> {
        for entries in [&self.dict_entries, &self.lexicon_entries] {
            for entry in entries.iter() {
                let len = entry.tokens.len();
                if i + len > tokens.len() {
                    continue;
                }
                if entry
                    .tokens
                    .iter()
                    .zip(&tokens[i..i + len])
                    .all(|(want, tok)| *want == tok.text)
                {
                    return Some((len, &entry.label));
                }
            }
        }
        None
    }

    fn tag_entities(&self, text: &str, tokens: &[Token]) -> Vec<Span> {
        let mut spans: Vec<Span> = Vec::new();

        // Pass 1: dictionary rules and the lexicon over the token stream.
        let mut i = 0;
        while i < tokens.len() {
            if let Some((len, label)) = self.match_at(tokens, i) {
                let start = tokens[i].start;
                let end = tokens[i + len - 1].end;
                spans.push(Span::new(
                    &text[start..end],
                    label,
                    start,
                    end,
                    SpanOrigin::Model,
                ));
                i += len;
            } else {
                i += 1;
            }
        }

        // Pass 2: explicit organization suffixes, skipping anything the
        // lexicon already covered.
        for m in ORG_SUFFIX.find_iter(text) {
            let covered = spans
                .iter()
                .any(|s| s.start < m.end() && s.end > m.start());
            if !covered {
                spans.push(Span::new(
                    m.as_str(),
                    "ORG",
                    m.start(),
                    m.end(),
                    SpanOrigin::Model,
                ));
            }
        }

        spans.sort_by_key(|s| s.start);
        spans
    }
}

impl Oracle for LexiconOracle {
    fn analyze(&self, text: &str) -> Result<Analysis> {
        if text.is_empty() {
            return Ok(Analysis::default());
        }

        let mut tokens = Self::tokenize(text);
        let sentences = Self::split_sentences(text);
        let spans = self.tag_entities(text, &tokens);

        for token in tokens.iter_mut() {
            if let Some(span) = spans
                .iter()
                .find(|s| token.start >= s.start && token.end <= s.end)
            {
                token.label = Some(span.label.clone());
            }
        }

        Ok(Analysis {
            tokens,
            sentences,
            spans,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
