// File: src/persistence.rs
use crate::core::types::ChainRecord;
use crate::errors::{ConvertError, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Writes `record` as JSON to `path`.
///
/// The record goes to a temporary file in the same directory first and is
/// renamed over `path` only once fully written, so a failed run never
/// leaves a truncated chain behind. An existing read-only target is refused
/// rather than renamed over.
pub fn save_record(record: &ChainRecord, path: &Path, pretty: bool) -> Result<()> {
    if let Ok(meta) = fs::metadata(path) {
        if meta.permissions().readonly() {
            return Err(ConvertError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
    }

    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let temp_file =
        NamedTempFile::new_in(parent_dir).map_err(|e| ConvertError::from_output_io(path, e))?;
    {
        let mut writer = BufWriter::new(&temp_file);
        if pretty {
            serde_json::to_writer_pretty(&mut writer, record)?;
        } else {
            serde_json::to_writer(&mut writer, record)?;
        }
        writer.flush().map_err(|e| ConvertError::from_output_io(path, e))?;
    }

    temp_file.persist(path)?;
    debug!(path = %path.display(), words = record.words.len(), "chain file written");
    Ok(())
}

pub fn load_record(path: &Path) -> Result<ChainRecord> {
    let file = File::open(path).map_err(|e| ConvertError::from_io(path, e))?;
    let reader = BufReader::new(file);
    let record: ChainRecord = serde_json::from_reader(reader)?;
    Ok(record)
}
