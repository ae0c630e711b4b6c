use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};

/// Read the stored high score. A missing file means no score yet; an
/// unreadable one is reported and treated the same way.
pub fn load(path: &Path) -> u32 {
    if !path.is_file() {
        debug!("no high score file at {}", path.display());
        return 0;
    }
    let parsed = fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|text| {
            let first = text.lines().next().unwrap_or("").trim();
            first.parse::<u32>().map_err(|e| format!("{first:?}: {e}"))
        });
    match parsed {
        Ok(score) => score,
        Err(e) => {
            warn!("high score file {} is incorrect: {e}", path.display());
            0
        }
    }
}

pub fn save(path: &Path, high_score: u32) -> Result<()> {
    fs::write(path, high_score.to_string())
        .with_context(|| format!("Failed to write high score to {}", path.display()))
}
