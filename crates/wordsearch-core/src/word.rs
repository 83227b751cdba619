use crate::error::{PuzzleError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::BufRead;

/// An uppercase word made only of the letters A-Z
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    /// Normalize `text` to uppercase and check it is a non-empty run of letters
    pub fn new(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(PuzzleError::InvalidWord {
                word: String::new(),
                reason: "word is empty".to_string(),
            });
        }
        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(PuzzleError::InvalidWord {
                word: text.to_string(),
                reason: format!("'{bad}' is not a letter A-Z"),
            });
        }
        Ok(Self(text.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Word {
    type Error = PuzzleError;

    fn try_from(value: String) -> Result<Self> {
        Word::new(&value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

/// Limits applied while reading a word list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordListConfig {
    /// Reading stops after this many words
    pub max_words: usize,
    /// Longer lines are truncated to this many letters
    pub max_word_len: usize,
}

impl Default for WordListConfig {
    fn default() -> Self {
        Self {
            max_words: 30,
            max_word_len: 15,
        }
    }
}

impl WordListConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_words == 0 {
            return Err(PuzzleError::InvalidConfiguration(
                "max words must be positive".to_string(),
            ));
        }
        if self.max_word_len == 0 {
            return Err(PuzzleError::InvalidConfiguration(
                "max word length must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Read one word per line until a blank line, end of input, or the word limit.
///
/// Leading spaces and tabs are skipped, the rest is uppercased and cut to
/// `max_word_len` letters before validation.
pub fn read_words<R: BufRead>(reader: R, config: &WordListConfig) -> Result<Vec<Word>> {
    config.validate()?;

    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let text = line.trim_start_matches([' ', '\t']).trim_end();
        if text.is_empty() {
            break;
        }

        let truncated: String = text.chars().take(config.max_word_len).collect();
        let word = Word::new(truncated.trim_end())?;
        log::trace!("read word {word}");
        words.push(word);

        if words.len() >= config.max_words {
            log::debug!("word limit of {} reached", config.max_words);
            break;
        }
    }

    if words.is_empty() {
        return Err(PuzzleError::EmptyWordList);
    }
    Ok(words)
}
