//! Recorded sessions: one `HandsFrame` JSON object per line
//!
//! Blank lines are skipped on load. Parse errors report the 1-based line.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{GestureError, Result};
use crate::types::HandsFrame;

/// Parse a recording from JSON-lines text
pub fn parse_recording(text: &str) -> Result<Vec<HandsFrame>> {
    let mut frames = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let frame = serde_json::from_str(line).map_err(|source| GestureError::Json { line: i + 1, source })?;
        frames.push(frame);
    }
    Ok(frames)
}

/// Load a recording from disk
pub fn load_recording(path: impl AsRef<Path>) -> Result<Vec<HandsFrame>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| GestureError::io(path, e))?;
    let frames = parse_recording(&text)?;
    info!(path = %path.display(), frames = frames.len(), "recording loaded");
    Ok(frames)
}

/// Write a recording to disk, creating parent directories
pub fn save_recording(path: impl AsRef<Path>, frames: &[HandsFrame]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GestureError::io(parent, e))?;
    }

    let file = fs::File::create(path).map_err(|e| GestureError::io(path, e))?;
    let mut file = BufWriter::new(file);
    for (i, frame) in frames.iter().enumerate() {
        let json = serde_json::to_string(frame).map_err(|source| GestureError::Json { line: i + 1, source })?;
        writeln!(file, "{}", json).map_err(|e| GestureError::io(path, e))?;
    }
    file.flush().map_err(|e| GestureError::io(path, e))?;

    debug!(path = %path.display(), frames = frames.len(), "recording saved");
    Ok(())
}
