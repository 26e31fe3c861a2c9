use std::collections::HashMap;

use anyhow::Result;

use crate::cancers::CancerMap;
use crate::io::table::FeatureTable;
use crate::labels::{ConsolidatedLabel, SurvLabel};

pub const SURV_COLUMN: &str = "SURV";

/// Counts from one merge: rows that matched a label versus rows that
/// fell back to NEUTRAL.
#[derive(Debug, Clone, Copy)]
pub struct MergeOutcome {
    pub matched: usize,
    pub defaulted: usize,
}

/// Left-joins consolidated labels onto a feature table by gene.
///
/// Labels are filtered to one cancer model code first (display names are
/// mapped through `cancers`; a label whose cancer type already equals the
/// code is accepted as-is). Any pre-existing SURV column is dropped and
/// replaced. Every feature row is preserved; genes without a label get
/// NEUTRAL.
pub fn merge_labels(
    table: &mut FeatureTable,
    labels: &[ConsolidatedLabel],
    cancer_code: &str,
    cancers: &CancerMap,
    gene_column: &str,
) -> Result<MergeOutcome> {
    // Drop before resolving the gene index so positions do not shift.
    table.drop_column(SURV_COLUMN);
    let gene_idx = table.require_column(gene_column)?;

    let mut by_gene: HashMap<&str, SurvLabel> = HashMap::new();
    for label in labels {
        let code = cancers
            .model_code(&label.cancer_type)
            .unwrap_or(label.cancer_type.as_str());
        if code == cancer_code {
            by_gene.insert(label.gene.as_str(), label.label);
        }
    }

    let mut matched = 0usize;
    let mut defaulted = 0usize;
    let mut column = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let gene = row[gene_idx].trim();
        match by_gene.get(gene) {
            Some(label) => {
                matched += 1;
                column.push(label.as_str().to_string());
            }
            None => {
                defaulted += 1;
                column.push(SurvLabel::Neutral.as_str().to_string());
            }
        }
    }
    table.push_column(SURV_COLUMN, column)?;

    Ok(MergeOutcome { matched, defaulted })
}
