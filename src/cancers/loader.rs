use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::cancers::CancerEntry;

pub fn load_builtin_v1() -> Result<Vec<CancerEntry>> {
    let content = include_str!("../../assets/cancers/cancer_types_v1.tsv");
    parse_cancer_tsv(content, "built-in v1")
}

pub fn load_cancer_tsv(path: &Path) -> Result<Vec<CancerEntry>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read cancer map TSV {}", path.display()))?;
    parse_cancer_tsv(&content, &path.display().to_string())
}

/// User entries override built-ins by display name; unmatched user
/// entries are appended in their file order.
pub fn merge_entries(builtin: Vec<CancerEntry>, user: Vec<CancerEntry>) -> Vec<CancerEntry> {
    if user.is_empty() {
        return builtin;
    }
    let mut user = user;
    let mut merged = Vec::with_capacity(builtin.len() + user.len());
    for entry in builtin {
        if let Some(pos) = user.iter().position(|u| u.cancer_type == entry.cancer_type) {
            merged.push(user.remove(pos));
        } else {
            merged.push(entry);
        }
    }
    merged.extend(user);
    merged
}

fn parse_cancer_tsv(content: &str, source: &str) -> Result<Vec<CancerEntry>> {
    let mut entries: Vec<CancerEntry> = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = trimmed.split('\t').collect();
        if parts.len() != 2 {
            bail!("{}:{} malformed TSV (expected 2 columns)", source, line_no);
        }
        let cancer_type = parts[0].trim();
        let model_code = parts[1].trim();
        if cancer_type.is_empty() || model_code.is_empty() {
            bail!("{}:{} empty field in TSV", source, line_no);
        }
        if entries.iter().any(|e| e.cancer_type == cancer_type) {
            bail!(
                "{}:{} duplicate cancer type '{}'",
                source,
                line_no,
                cancer_type
            );
        }
        entries.push(CancerEntry {
            cancer_type: cancer_type.to_string(),
            model_code: model_code.to_string(),
        });
    }

    Ok(entries)
}
