// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::{ConvertError, Result};

/// The successor that marks "end of message".
pub const END_OF_MESSAGE: &str = "";

/// Weight recorded for every observed successor. The legacy format kept no
/// counts, so presence is all that survives the conversion.
pub const OBSERVED: u32 = 1;

/// Ordered list of display-form words, never containing a blank entry.
pub type WordList = Vec<String>;

/// Maps a successor (possibly [`END_OF_MESSAGE`]) to its weight.
pub type SuccessorWeights = BTreeMap<String, u32>;

/// The chain file format read by the newer bot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainRecord {
    pub words: WordList,
    pub probabilities: BTreeMap<String, SuccessorWeights>,
}

impl ChainRecord {
    /// Checks the invariants the bot relies on when it loads a chain.
    pub fn validate(&self) -> Result<()> {
        for word in &self.words {
            if word.is_empty() {
                return Err(ConvertError::invalid_record("word list holds a blank word"));
            }
            let weights = self.probabilities.get(word).ok_or_else(|| {
                ConvertError::invalid_record(format!("no probabilities for '{}'", word))
            })?;
            if !weights.contains_key(END_OF_MESSAGE) {
                return Err(ConvertError::invalid_record(format!(
                    "'{}' cannot end a message",
                    word
                )));
            }
        }
        for (word, weights) in &self.probabilities {
            if let Some((next, _)) = weights.iter().find(|(_, w)| **w == 0) {
                return Err(ConvertError::invalid_record(format!(
                    "'{}' -> '{}' has a zero weight",
                    word, next
                )));
            }
        }
        Ok(())
    }
}
