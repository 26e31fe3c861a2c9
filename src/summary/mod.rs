use std::collections::HashMap;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::io::table::FeatureTable;
use crate::math::stats::{median, pearson};

/// Which label column is the prediction target. The other label columns
/// are excluded from the feature set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Surv,
    Cnv,
    Tcga,
}

impl TargetKind {
    pub fn column_name(&self) -> &'static str {
        match self {
            TargetKind::Surv => "SURV",
            TargetKind::Cnv => "CNV",
            TargetKind::Tcga => "TCGA annotation",
        }
    }

    /// Class labels ordered (favorable, neutral, unfavorable), matching
    /// the ordinal encoding (+1, 0, -1).
    pub fn class_labels(&self) -> [&'static str; 3] {
        match self {
            TargetKind::Cnv => ["GAIN", "NEUT", "LOSS"],
            _ => ["UPREG", "NEUTRAL", "DOWNREG"],
        }
    }

    pub fn all_label_columns() -> [&'static str; 3] {
        ["SURV", "CNV", "TCGA annotation"]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportanceEntry {
    pub feature: String,
    pub importance: f64,
    pub correlation: f64,
    pub rank: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelFrequency {
    pub label: String,
    pub count: usize,
}

/// Everything the summarization pass produces, returned explicitly so
/// callers needing the per-class partitions or the full ranking take
/// them from here rather than from shared state.
#[derive(Debug, Clone)]
pub struct FeatureSummary {
    /// Full ranked list, importance descending. The top-N report is a
    /// prefix of this.
    pub entries: Vec<ImportanceEntry>,
    /// Target label counts over the input rows.
    pub label_frequencies: Vec<LabelFrequency>,
    /// Genes per class after the per-gene collapse, ordered
    /// (favorable, neutral, unfavorable).
    pub class_genes: [Vec<String>; 3],
    pub warnings: Vec<String>,
}

pub struct SummarizeOptions {
    pub target: TargetKind,
    pub gene_column: String,
    pub cell_line_column: String,
    pub exclude: Vec<String>,
}

/// Summarizes a feature table against an externally computed importance
/// ranking.
///
/// The table is collapsed to one row per (gene, target label) by taking
/// per-feature medians across cell lines, partitioned into the three
/// target classes, and each feature's class medians are correlated with
/// the ordinal class encoding. Features are then ranked by the supplied
/// importance scores, descending.
pub fn summarize_features(
    table: &FeatureTable,
    importance: &[(String, f64)],
    opts: &SummarizeOptions,
) -> Result<FeatureSummary> {
    let gene_idx = table.require_column(&opts.gene_column)?;
    let target_idx = table.require_column(opts.target.column_name())?;

    let mut warnings = Vec::new();

    // Label frequencies are evaluated on the raw rows, before any
    // collapsing, matching how threshold choices are compared.
    let label_frequencies = count_labels(table, target_idx);

    // Columns that are not features: identifiers, the target itself and
    // the other label columns, plus the caller's exclusion list.
    let mut dropped: Vec<String> = vec![opts.cell_line_column.clone()];
    for label_col in TargetKind::all_label_columns() {
        if label_col != opts.target.column_name() {
            dropped.push(label_col.to_string());
        }
    }
    dropped.extend(opts.exclude.iter().cloned());

    let feature_names: Vec<String> = table
        .headers
        .iter()
        .enumerate()
        .filter(|(i, h)| *i != gene_idx && *i != target_idx && !dropped.contains(*h))
        .map(|(_, h)| h.clone())
        .collect();
    if feature_names.is_empty() {
        bail!("no feature columns left after exclusions");
    }

    let collapsed = collapse_by_gene(table, gene_idx, target_idx, &feature_names)?;

    let class_labels = opts.target.class_labels();
    let mut class_genes: [Vec<String>; 3] = Default::default();
    for row in &collapsed {
        if let Some(slot) = class_labels.iter().position(|l| *l == row.label) {
            class_genes[slot].push(row.gene.clone());
        }
    }

    let correlations = class_correlations(&collapsed, &class_labels, &feature_names);

    // Importance entries must name real feature columns; table features
    // with no score are reported and left out of the ranking.
    let mut scored: Vec<(String, f64)> = Vec::with_capacity(importance.len());
    for (feature, score) in importance {
        if !feature_names.contains(feature) {
            bail!("importance entry '{}' does not match any feature column", feature);
        }
        scored.push((feature.clone(), *score));
    }
    for feature in &feature_names {
        if !scored.iter().any(|(f, _)| f == feature) {
            warnings.push(format!("feature '{}' has no importance score", feature));
        }
    }
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let entries = scored
        .into_iter()
        .enumerate()
        .map(|(i, (feature, score))| {
            let correlation = correlations.get(&feature).copied().unwrap_or(0.0);
            ImportanceEntry {
                feature,
                importance: score,
                correlation,
                rank: i + 1,
            }
        })
        .collect();

    Ok(FeatureSummary {
        entries,
        label_frequencies,
        class_genes,
        warnings,
    })
}

struct CollapsedRow {
    gene: String,
    label: String,
    values: Vec<f64>,
}

/// One row per (gene, target label): the median of each feature across
/// that gene's cell lines.
fn collapse_by_gene(
    table: &FeatureTable,
    gene_idx: usize,
    target_idx: usize,
    feature_names: &[String],
) -> Result<Vec<CollapsedRow>> {
    let feature_cols: Vec<usize> = feature_names
        .iter()
        .map(|name| table.require_column(name))
        .collect::<Result<_>>()?;

    let mut groups: HashMap<(String, String), Vec<Vec<f64>>> = HashMap::new();
    let mut order: Vec<(String, String)> = Vec::new();

    for (row_idx, row) in table.rows.iter().enumerate() {
        let key = (
            row[gene_idx].trim().to_string(),
            row[target_idx].trim().to_string(),
        );
        let mut values = Vec::with_capacity(feature_cols.len());
        for &col in &feature_cols {
            values.push(table.parse_numeric(row_idx, col)?);
        }
        let entry = groups.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            vec![Vec::new(); feature_cols.len()]
        });
        for (slot, value) in entry.iter_mut().zip(values) {
            slot.push(value);
        }
    }

    let mut out = Vec::with_capacity(order.len());
    for key in order {
        let mut columns = groups.remove(&key).unwrap_or_default();
        let values = columns.iter_mut().map(|c| median(c)).collect();
        out.push(CollapsedRow {
            gene: key.0,
            label: key.1,
            values,
        });
    }
    Ok(out)
}

/// Per feature: the median within each class, correlated against the
/// ordinal encoding (+1, 0, -1). Zero variance across the class medians,
/// or an empty class partition, yields 0.0 by policy.
fn class_correlations(
    collapsed: &[CollapsedRow],
    class_labels: &[&str; 3],
    feature_names: &[String],
) -> HashMap<String, f64> {
    const ORDINAL: [f64; 3] = [1.0, 0.0, -1.0];

    let mut correlations = HashMap::with_capacity(feature_names.len());
    for (feat_idx, feature) in feature_names.iter().enumerate() {
        let mut class_medians = [0.0f64; 3];
        let mut defined = true;
        for (slot, class) in class_labels.iter().enumerate() {
            let mut values: Vec<f64> = collapsed
                .iter()
                .filter(|row| row.label == *class)
                .map(|row| row.values[feat_idx])
                .collect();
            if values.is_empty() {
                defined = false;
                break;
            }
            class_medians[slot] = median(&mut values);
        }
        let r = if defined {
            pearson(&class_medians, &ORDINAL)
        } else {
            0.0
        };
        correlations.insert(feature.clone(), r);
    }
    correlations
}

fn count_labels(table: &FeatureTable, target_idx: usize) -> Vec<LabelFrequency> {
    let mut counts: Vec<LabelFrequency> = Vec::new();
    for row in &table.rows {
        let label = row[target_idx].trim();
        match counts.iter_mut().find(|c| c.label == label) {
            Some(entry) => entry.count += 1,
            None => counts.push(LabelFrequency {
                label: label.to_string(),
                count: 1,
            }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count).then(a.label.cmp(&b.label)));
    counts
}
