// File: src/core/converter.rs
use crate::core::normalize::normalize;
use crate::core::types::{ChainRecord, SuccessorWeights, END_OF_MESSAGE, OBSERVED};
use crate::legacy::{LegacyRecord, Lookup};

/// Builds the chain record for `words` from the legacy successor lists.
pub fn build_record(words: &[String], legacy: &LegacyRecord) -> ChainRecord {
    build_record_with_progress(words, legacy, |_, _| {})
}

/// Same as [`build_record`], calling `on_word(n, total)` before each word.
pub fn build_record_with_progress<F>(
    words: &[String],
    legacy: &LegacyRecord,
    mut on_word: F,
) -> ChainRecord
where
    F: FnMut(usize, usize),
{
    let total = words.len();
    let mut record = ChainRecord {
        words: words.to_vec(),
        probabilities: Default::default(),
    };

    for (i, word) in words.iter().enumerate() {
        on_word(i + 1, total);
        let weights = match legacy.successors(&normalize(word)) {
            Lookup::Found(following) => successor_weights(following),
            Lookup::NotFound => successor_weights(&[String::new()]),
        };
        record.probabilities.insert(word.clone(), weights);
    }

    record
}

/// Turns a list of successor occurrences into a presence map.
///
/// Repeats collapse to a single [`OBSERVED`] weight and the end marker is
/// always present, whether or not the list recorded it.
pub fn successor_weights(following: &[String]) -> SuccessorWeights {
    let mut weights = SuccessorWeights::new();
    for next in following {
        // Older databases repeat the end marker; only the first one counts.
        if next == END_OF_MESSAGE && weights.contains_key(END_OF_MESSAGE) {
            continue;
        }
        weights.insert(next.clone(), OBSERVED);
    }
    weights.entry(END_OF_MESSAGE.to_string()).or_insert(OBSERVED);
    weights
}
