use std::path::Path;

use anyhow::{bail, Context, Result};

/// In-memory delimited table: header row plus string cells. Numeric
/// interpretation is left to the consumer so that label and identifier
/// columns pass through untouched.
#[derive(Debug, Clone)]
pub struct FeatureTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl FeatureTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| anyhow::anyhow!("missing expected column '{}'", name))
    }

    /// Remove a column if present. Returns whether it existed.
    pub fn drop_column(&mut self, name: &str) -> bool {
        match self.column_index(name) {
            Some(idx) => {
                self.headers.remove(idx);
                for row in &mut self.rows {
                    row.remove(idx);
                }
                true
            }
            None => false,
        }
    }

    pub fn push_column(&mut self, name: &str, values: Vec<String>) -> Result<()> {
        if values.len() != self.rows.len() {
            bail!(
                "column '{}' length mismatch: {} != {}",
                name,
                values.len(),
                self.rows.len()
            );
        }
        self.headers.push(name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        Ok(())
    }

    pub fn rename_headers(&mut self, map: &[(String, String)]) {
        for header in &mut self.headers {
            if let Some((_, new)) = map.iter().find(|(old, _)| old == header) {
                *header = new.clone();
            }
        }
    }

    /// Parses one cell as f64. Non-finite values (NaN, inf) are rejected
    /// so downstream medians and correlations stay totally ordered.
    pub fn parse_numeric(&self, row: usize, col: usize) -> Result<f64> {
        let cell = &self.rows[row][col];
        let value: f64 = cell.trim().parse().with_context(|| {
            format!(
                "row {}: non-numeric value '{}' in column '{}'",
                row + 1,
                cell,
                self.headers[col]
            )
        })?;
        if !value.is_finite() {
            bail!(
                "row {}: non-finite value '{}' in column '{}'",
                row + 1,
                cell,
                self.headers[col]
            );
        }
        Ok(value)
    }
}

/// Tab for .tsv/.txt, comma otherwise.
pub fn delimiter_for(path: &Path) -> u8 {
    match path.extension().and_then(|s| s.to_str()) {
        Some("tsv") | Some("txt") => b'\t',
        _ => b',',
    }
}

pub fn read_table(path: &Path) -> Result<FeatureTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter_for(path))
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("failed to read header of {}", path.display()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.is_empty() {
        bail!("{} has no header row", path.display());
    }

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result
            .with_context(|| format!("{}: failed to read row {}", path.display(), idx + 1))?;
        if record.len() != headers.len() {
            bail!(
                "{}: row {} has {} fields, expected {}",
                path.display(),
                idx + 1,
                record.len(),
                headers.len()
            );
        }
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }

    Ok(FeatureTable { headers, rows })
}

pub fn write_table(path: &Path, table: &FeatureTable) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter_for(path))
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// One column name per line; '#' comments and blank lines skipped.
pub fn read_column_list(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read column list {}", path.display()))?;
    Ok(content
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(|l| l.to_string())
        .collect())
}

/// Two-column TSV of (original, replacement) header names.
pub fn read_rename_map(path: &Path) -> Result<Vec<(String, String)>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read rename map {}", path.display()))?;
    let mut map = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = trimmed.split('\t').collect();
        if parts.len() != 2 {
            bail!(
                "{}:{} malformed rename map (expected 2 columns)",
                path.display(),
                line_no
            );
        }
        map.push((parts[0].trim().to_string(), parts[1].trim().to_string()));
    }
    Ok(map)
}
