use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::io::table::delimiter_for;
use crate::labels::{ConsolidatedLabel, SurvLabel};

const HEADERS: [&str; 3] = ["gene", "cancer_type", "surv"];

pub fn write_labels(path: &Path, labels: &[ConsolidatedLabel]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter_for(path))
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(HEADERS)?;
    for label in labels {
        writer.write_record([
            label.gene.as_str(),
            label.cancer_type.as_str(),
            label.label.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads a consolidated-label table. Duplicate (gene, cancer type) keys
/// violate the one-label-per-key invariant and are fatal.
pub fn read_labels(path: &Path) -> Result<Vec<ConsolidatedLabel>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter_for(path))
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read header of {}", path.display()))?
        .clone();
    let gene_idx = position(&headers, HEADERS[0], path)?;
    let cancer_idx = position(&headers, HEADERS[1], path)?;
    let label_idx = position(&headers, HEADERS[2], path)?;

    let mut labels = Vec::new();
    let mut seen: HashSet<(String, String)> = HashSet::new();
    for (idx, result) in reader.records().enumerate() {
        let row_no = idx + 1;
        let record = result
            .with_context(|| format!("{}: failed to read row {}", path.display(), row_no))?;
        let gene = record.get(gene_idx).unwrap_or("").trim().to_string();
        let cancer_type = record.get(cancer_idx).unwrap_or("").trim().to_string();
        let label = SurvLabel::parse(record.get(label_idx).unwrap_or("").trim())
            .map_err(|err| anyhow::anyhow!("{}: row {}: {}", path.display(), row_no, err))?;
        if !seen.insert((gene.clone(), cancer_type.clone())) {
            bail!(
                "{}: row {} repeats key ({}, {})",
                path.display(),
                row_no,
                gene,
                cancer_type
            );
        }
        labels.push(ConsolidatedLabel {
            gene,
            cancer_type,
            label,
        });
    }

    Ok(labels)
}

fn position(headers: &csv::StringRecord, name: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| anyhow::anyhow!("{}: missing expected column '{}'", path.display(), name))
}
