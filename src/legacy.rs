// File: src/legacy.rs
//! Adapter from a decoded pickle to the legacy word database.
//!
//! The old bot pickled a plain `dict`: the empty key holds the master word
//! list and every other key is a normalized word mapped to the successors
//! seen after it. Decoding the pickle itself is left to `serde_pickle`.

use serde_pickle::{DeOptions, HashableValue, Value};
use std::collections::HashMap;
use std::io::Read;
use tracing::{debug, warn};

use crate::core::types::{WordList, END_OF_MESSAGE};
use crate::errors::{ConvertError, Result};

/// Result of looking up a key in a [`LegacyRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a [String]),
    NotFound,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyRecord {
    /// A `None` value in the pickle is kept as an absent list.
    entries: HashMap<String, Option<Vec<String>>>,
}

impl LegacyRecord {
    pub fn new(entries: HashMap<String, Option<Vec<String>>>) -> Self {
        Self { entries }
    }

    /// Decodes a pickled legacy database from `reader`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        // Python 2 pickles store `str` as bytes.
        let options = DeOptions::new().decode_strings();
        let value = serde_pickle::value_from_reader(reader, options)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let dict = match value {
            Value::Dict(dict) => dict,
            other => {
                return Err(ConvertError::malformed_legacy(format!(
                    "expected a dictionary at the root, found {}",
                    kind_of(&other)
                )))
            }
        };

        let mut entries = HashMap::with_capacity(dict.len());
        for (key, value) in dict {
            let key = match key {
                HashableValue::String(s) => s,
                HashableValue::Bytes(b) => String::from_utf8(b)
                    .map_err(|e| ConvertError::malformed_legacy(format!("key is not UTF-8: {}", e)))?,
                other => {
                    warn!("skipping non-string legacy key {:?}", other);
                    continue;
                }
            };
            let list = string_list(&key, value)?;
            entries.insert(key, list);
        }
        debug!(keys = entries.len(), "decoded legacy database");
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Successors recorded under an (already normalized) key.
    pub fn successors(&self, key: &str) -> Lookup<'_> {
        match self.entries.get(key) {
            Some(Some(list)) => Lookup::Found(list),
            _ => Lookup::NotFound,
        }
    }

    /// The master word list with blank entries dropped, or `None` when the
    /// database has no word list at all.
    pub fn word_list(&self) -> Option<WordList> {
        match self.successors(END_OF_MESSAGE) {
            Lookup::Found(words) => Some(
                words
                    .iter()
                    .filter(|w| !w.is_empty())
                    .cloned()
                    .collect(),
            ),
            Lookup::NotFound => None,
        }
    }
}

fn string_list(key: &str, value: Value) -> Result<Option<Vec<String>>> {
    let items = match value {
        Value::None => return Ok(None),
        Value::List(items) | Value::Tuple(items) => items,
        other => {
            return Err(ConvertError::malformed_legacy(format!(
                "entry '{}' holds {}, expected a list",
                key,
                kind_of(&other)
            )))
        }
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Ok(s),
            Value::Bytes(b) => String::from_utf8(b).map_err(|e| {
                ConvertError::malformed_legacy(format!("entry '{}' is not UTF-8: {}", key, e))
            }),
            other => Err(ConvertError::malformed_legacy(format!(
                "entry '{}' contains {}, expected strings",
                key,
                kind_of(&other)
            ))),
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::None => "None",
        Value::Bool(_) => "a bool",
        Value::I64(_) | Value::Int(_) => "an integer",
        Value::F64(_) => "a float",
        Value::Bytes(_) => "bytes",
        Value::String(_) => "a string",
        Value::List(_) => "a list",
        Value::Tuple(_) => "a tuple",
        Value::Set(_) | Value::FrozenSet(_) => "a set",
        Value::Dict(_) => "a dictionary",
    }
}
