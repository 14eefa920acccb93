use crate::models::Root;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use tokio::io::AsyncReadExt;

// Reads a Lighthouse JSON report into the typed document model. Anything
// that fails here (missing file, bad JSON) is a loader error, not a
// summarization error.
pub async fn load_report(path: &str) -> Result<Root> {
    let mut file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("Failed to open report file: {}", path))?;

    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .await
        .with_context(|| format!("Failed to read report file: {}", path))?;

    let report = serde_json::from_slice::<Root>(&buffer)
        .with_context(|| format!("Failed to parse report file: {}", path))?;

    Ok(report)
}

// Writes the rendered summary lines to a plain-text file
pub fn save_summary(output_path: &str, lines: &[String]) -> Result<()> {
    let mut file = File::create(output_path)
        .with_context(|| format!("Failed to create summary file: {}", output_path))?;
    for line in lines {
        writeln!(file, "{}", line)
            .with_context(|| format!("Failed to write summary file: {}", output_path))?;
    }
    Ok(())
}
