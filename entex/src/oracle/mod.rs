//! The language oracle: the opaque pretrained pipeline that maps text to
//! labeled spans, token boundaries, and sentence boundaries.
//!
//! The oracle is constructed once at process start and passed explicitly
//! into the pipeline, never held as ambient global state. It is
//! synchronous and run-to-completion; callers treat a single invocation as
//! one short CPU-bound unit of work.

mod lexicon;
mod types;

pub use lexicon::LexiconOracle;
pub use types::{Analysis, Sentence, Span, SpanOrigin, Token};

use crate::Result;

/// Trait for language pipelines that analyze raw text.
///
/// Implementations must be deterministic: the same text yields the same
/// `Analysis` on every call.
pub trait Oracle: Send + Sync + std::fmt::Debug {
    /// Analyze the given text.
    ///
    /// Empty text yields an empty [`Analysis`], not an error.
    fn analyze(&self, text: &str) -> Result<Analysis>;

    /// Name of this oracle for identification purposes.
    fn name(&self) -> &str;
}
