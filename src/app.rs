// File: src/app.rs
//! One conversion run: locate, decode, transform, write.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::converter::build_record_with_progress;
use crate::errors::{ConvertError, Result};
use crate::legacy::LegacyRecord;
use crate::locator::OutputLocation;
use crate::persistence::{load_record, save_record};
use crate::progress::Progress;

/// How a run that did not fail ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The database had no words; nothing was written.
    NothingToDo,
    Converted { output: PathBuf, words: usize },
}

pub fn run(config: &Config, progress: &mut dyn Progress) -> Result<Outcome> {
    println!("Attempting to process {}", config.input);

    let output = match &config.output {
        Some(path) => path.clone(),
        None => OutputLocation::derive(&config.input)?.output_path(),
    };
    debug!(output = %output.display(), "derived output path");

    let legacy = read_legacy(Path::new(&config.input))?;
    let words = match legacy.word_list() {
        Some(words) if !words.is_empty() => words,
        _ => {
            println!("No words to process.");
            info!("legacy database has no words, nothing written");
            return Ok(Outcome::NothingToDo);
        }
    };

    let mut progress_failed = false;
    let record = build_record_with_progress(&words, &legacy, |n, total| {
        if progress_failed {
            return;
        }
        if let Err(e) = progress.word(n, total) {
            warn!("progress output failed: {}", e);
            progress_failed = true;
        }
    });
    if let Err(e) = progress.finish() {
        warn!("progress output failed: {}", e);
    }

    record.validate()?;
    save_record(&record, &output, config.pretty)?;

    if config.verify {
        let written = load_record(&output)?;
        if written != record {
            return Err(ConvertError::invalid_record(format!(
                "{} does not match the converted record",
                output.display()
            )));
        }
        written.validate()?;
        debug!("verified written chain file");
    }

    println!("Done");
    info!(output = %output.display(), words = record.words.len(), "conversion finished");
    Ok(Outcome::Converted {
        output,
        words: record.words.len(),
    })
}

fn read_legacy(path: &Path) -> Result<LegacyRecord> {
    let file = File::open(path).map_err(|e| ConvertError::from_io(path, e))?;
    let legacy = LegacyRecord::from_reader(BufReader::new(file))?;
    debug!(entries = legacy.len(), "legacy database loaded");
    Ok(legacy)
}
