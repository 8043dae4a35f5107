use thiserror::Error;

/// Errors produced by classification and conjugation.
///
/// All of these are local validation or classification outcomes; there
/// is no transient or retryable failure anywhere in the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConjugateError {
    /// The input is empty or entirely whitespace.
    #[error("input is empty")]
    EmptyInput,
    /// The trimmed input contains a character outside the hiragana,
    /// katakana and kanji blocks.
    #[error("input contains a character outside Japanese script: {0:?}")]
    InvalidCharacters(char),
    /// The input is script-valid but matches no classification rule.
    #[error("not a recognizable verb: {0}")]
    UnknownVerb(String),
    /// Reserved for inputs with several plausible interpretations.
    /// The current classifier always picks a single interpretation or
    /// fails, so this kind is never produced, but callers must still
    /// account for it.
    #[error("ambiguous verb: {0}")]
    AmbiguousVerb(String),
    /// An internal invariant was violated during generation. This is
    /// never a user-input problem.
    #[error("conjugation failed: {0}")]
    ConjugationFailed(String),
}
