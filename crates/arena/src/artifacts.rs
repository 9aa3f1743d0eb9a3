//! Files shared with the external trainer.
//!
//! - the iteration counter: a text file holding one integer, the number of
//!   the last completed iteration
//! - training samples: one JSON object per line,
//!   `{"features": [...], "pi": [...], "z": 1.0}`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// One training example.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Evaluator input for the position, in the configured `[game] encoding`.
    pub features: Vec<f32>,

    /// Search policy target over the full action space.
    pub pi: Vec<f32>,

    /// Final result from the perspective of the player to move: +1, 0 or -1.
    pub z: f32,
}

/// Read the last completed iteration, or `None` if the file does not exist.
pub fn read_iteration(path: &Path) -> Result<Option<u64>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read iteration counter {}", path.display()))?;
    let first_line = content.lines().next().unwrap_or("").trim();
    let iteration = first_line
        .parse()
        .with_context(|| format!("iteration counter {} holds '{first_line}'", path.display()))?;
    Ok(Some(iteration))
}

/// The iteration to run next: one past the stored counter, 0 when there is none.
pub fn next_iteration(path: &Path) -> Result<u64> {
    Ok(read_iteration(path)?.map_or(0, |i| i + 1))
}

/// Record `iteration` as completed.
pub fn write_iteration(path: &Path, iteration: u64) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, iteration.to_string())
        .with_context(|| format!("failed to write iteration counter {}", path.display()))
}

/// Sample file for an iteration inside `dir`.
pub fn samples_path(dir: &Path, iteration: u64) -> PathBuf {
    dir.join(format!("selfplay_{iteration:04}.jsonl"))
}

/// Write samples as JSON lines, replacing any existing file.
pub fn write_samples(path: &Path, samples: &[Sample]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for (i, sample) in samples.iter().enumerate() {
        serde_json::to_writer(&mut writer, sample)
            .with_context(|| format!("failed to serialize sample {i}"))?;
        writer.write_all(b"\n")?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))
}

/// Read a JSON-lines sample file; blank lines are skipped.
pub fn read_samples(path: &Path) -> Result<Vec<Sample>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut samples = Vec::new();
    for (number, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let sample = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: malformed sample", path.display(), number + 1))?;
        samples.push(sample);
    }
    Ok(samples)
}
