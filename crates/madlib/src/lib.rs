//! Mad lib story generator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for mad lib construction.
pub type MadLibResult<T> = Result<T, MadLibError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MadLibError {
    /// A word was empty after trimming.
    #[error("the {part} must not be empty")]
    EmptyWord { part: WordPart },
}

/// Which blank a word fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordPart {
    Adjective,
    Noun,
    Verb,
}

impl WordPart {
    pub fn label(&self) -> &'static str {
        match self {
            WordPart::Adjective => "adjective",
            WordPart::Noun => "noun",
            WordPart::Verb => "verb",
        }
    }
}

impl std::fmt::Display for WordPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Build the story from three words, used verbatim.
///
/// `verb` should be past tense, e.g. "jumped".
pub fn generate_mad_lib(adjective: &str, noun: &str, verb: &str) -> String {
    format!("Once upon a time, a {adjective} {noun} {verb} over the lazy dog and won a medal.")
}

/// A validated set of words for one story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MadLib {
    pub adjective: String,
    pub noun: String,
    /// Past-tense verb.
    pub verb: String,
}

impl MadLib {
    /// Trim each word and reject empty ones.
    pub fn new(adjective: &str, noun: &str, verb: &str) -> MadLibResult<Self> {
        Ok(Self {
            adjective: checked(adjective, WordPart::Adjective)?,
            noun: checked(noun, WordPart::Noun)?,
            verb: checked(verb, WordPart::Verb)?,
        })
    }

    pub fn story(&self) -> String {
        generate_mad_lib(&self.adjective, &self.noun, &self.verb)
    }
}

fn checked(word: &str, part: WordPart) -> MadLibResult<String> {
    let word = word.trim();
    if word.is_empty() {
        return Err(MadLibError::EmptyWord { part });
    }
    Ok(word.to_string())
}
