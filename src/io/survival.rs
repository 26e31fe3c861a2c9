use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::cancers::CancerMap;
use crate::io::table::delimiter_for;
use crate::labels::SurvivalRecord;

/// Column names expected in the survival table. Defaults match the
/// PrognoScan export layout.
#[derive(Debug, Clone)]
pub struct SurvivalColumns {
    pub gene: String,
    pub cancer_type: String,
    pub hazard_ratio: String,
    pub p_value: String,
}

impl Default for SurvivalColumns {
    fn default() -> Self {
        Self {
            gene: "ID_NAME".to_string(),
            cancer_type: "CANCER TYPE".to_string(),
            hazard_ratio: "HR [95% CI-low CI-upp]".to_string(),
            p_value: "COX P-VALUE".to_string(),
        }
    }
}

/// Result of reading one survival table: cleaned records plus the count
/// of rows discarded by the cancer allow-list.
#[derive(Debug)]
pub struct SurvivalScan {
    pub records: Vec<SurvivalRecord>,
    pub discarded: usize,
}

pub fn read_survival_table(
    path: &Path,
    columns: &SurvivalColumns,
    cancers: &CancerMap,
) -> Result<SurvivalScan> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter_for(path))
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read header of {}", path.display()))?
        .clone();
    let gene_idx = column_index(&headers, &columns.gene, path)?;
    let cancer_idx = column_index(&headers, &columns.cancer_type, path)?;
    let hr_idx = column_index(&headers, &columns.hazard_ratio, path)?;
    let p_idx = column_index(&headers, &columns.p_value, path)?;

    let mut records = Vec::new();
    let mut discarded = 0usize;

    for (idx, result) in reader.records().enumerate() {
        let row_no = idx + 1;
        let record = result
            .with_context(|| format!("{}: failed to read row {}", path.display(), row_no))?;

        let cancer_type = record.get(cancer_idx).unwrap_or("").trim();
        if !cancers.contains(cancer_type) {
            discarded += 1;
            continue;
        }

        let gene = record.get(gene_idx).unwrap_or("").trim();
        if gene.is_empty() {
            bail!("{}: row {} has an empty gene identifier", path.display(), row_no);
        }

        let hr_raw = record.get(hr_idx).unwrap_or("");
        let hr_clean = strip_confidence_interval(hr_raw);
        let hazard_ratio: f64 = hr_clean.parse().with_context(|| {
            format!(
                "{}: row {} has unparseable hazard ratio '{}'",
                path.display(),
                row_no,
                hr_raw
            )
        })?;

        let p_raw = record.get(p_idx).unwrap_or("");
        let p_value: f64 = p_raw.trim().parse().with_context(|| {
            format!(
                "{}: row {} has unparseable p-value '{}'",
                path.display(),
                row_no,
                p_raw
            )
        })?;

        records.push(SurvivalRecord {
            gene: gene.to_string(),
            cancer_type: cancer_type.to_string(),
            hazard_ratio,
            p_value,
        });
    }

    Ok(SurvivalScan { records, discarded })
}

/// Hazard-ratio cells may carry a bracketed confidence interval, e.g.
/// "2.31 [1.80 2.96]". The bracketed portion is stripped before parsing.
pub fn strip_confidence_interval(raw: &str) -> &str {
    match raw.find('[') {
        Some(pos) => raw[..pos].trim(),
        None => raw.trim(),
    }
}

fn column_index(headers: &csv::StringRecord, name: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| {
            anyhow::anyhow!("{}: missing expected column '{}'", path.display(), name)
        })
}
