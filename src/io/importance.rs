use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::io::table::delimiter_for;
use crate::summary::ImportanceEntry;

/// Reads externally computed importance scores: a two-column TSV of
/// (feature name, score). '#' comments and blank lines are skipped.
pub fn read_importance(path: &Path) -> Result<Vec<(String, f64)>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read importance scores {}", path.display()))?;

    let mut scores = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = trimmed.split('\t').collect();
        if parts.len() != 2 {
            bail!(
                "{}:{} malformed TSV (expected 2 columns)",
                path.display(),
                line_no
            );
        }
        let feature = parts[0].trim();
        if feature.is_empty() {
            bail!("{}:{} empty feature name", path.display(), line_no);
        }
        let score: f64 = parts[1].trim().parse().with_context(|| {
            format!(
                "{}:{} unparseable importance score '{}'",
                path.display(),
                line_no,
                parts[1]
            )
        })?;
        if scores.iter().any(|(f, _)| f == feature) {
            bail!("{}:{} duplicate feature '{}'", path.display(), line_no, feature);
        }
        scores.push((feature.to_string(), score));
    }

    Ok(scores)
}

/// Writes the top-N rows of the ranked list as a small report CSV.
pub fn write_importance_csv(path: &Path, entries: &[ImportanceEntry], top_n: usize) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter_for(path))
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(["feature", "importance", "correlation"])?;
    for entry in entries.iter().take(top_n) {
        let importance = format!("{:.6}", entry.importance);
        let correlation = format!("{:.6}", entry.correlation);
        writer.write_record([entry.feature.as_str(), importance.as_str(), correlation.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}
