// File: src/locator.rs
//! Derives the chain file name from a legacy database path.
//!
//! Legacy databases are named `chat_<id>.<ext>`; the converted chain is
//! written next to it as `<id>.json`.

use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::errors::{ConvertError, Result};

pub const OUTPUT_EXTENSION: &str = "json";

fn legacy_name() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^chat_(-?[0-9]+)\.[^./]+$").expect("static pattern compiles")
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLocation {
    /// Everything up to and including the last `/`, or empty.
    pub directory: String,
    pub chat_id: String,
}

impl OutputLocation {
    pub fn derive(input: &str) -> Result<Self> {
        let (directory, base) = match input.rfind('/') {
            Some(i) => input.split_at(i + 1),
            None => ("", input),
        };
        let chat_id = legacy_name()
            .captures(base)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| ConvertError::MalformedFilename(base.to_string()))?
            .as_str()
            .to_string();

        Ok(Self {
            directory: directory.to_string(),
            chat_id,
        })
    }

    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(format!(
            "{}{}.{}",
            self.directory, self.chat_id, OUTPUT_EXTENSION
        ))
    }
}
