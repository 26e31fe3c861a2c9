use std::collections::HashMap;

use crate::labels::{ConsolidatedLabel, LabeledRecord, SurvLabel};

/// Reduce per-record labels to one label per (gene, cancer type) by
/// majority vote. Ties resolve by fixed label priority
/// UPREG > DOWNREG > NEUTRAL. Output is ordered by first appearance of
/// the key in the input.
pub fn consolidate(records: &[LabeledRecord]) -> Vec<ConsolidatedLabel> {
    let mut counts: HashMap<(String, String), [usize; 3]> = HashMap::new();
    let mut order: Vec<(String, String)> = Vec::new();

    for rec in records {
        let key = (rec.gene.clone(), rec.cancer_type.clone());
        let entry = counts.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            [0; 3]
        });
        entry[slot(rec.label)] += 1;
    }

    let mut out = Vec::with_capacity(order.len());
    for key in order {
        let tally = counts[&key];
        out.push(ConsolidatedLabel {
            gene: key.0,
            cancer_type: key.1,
            label: winner(&tally),
        });
    }
    out
}

fn slot(label: SurvLabel) -> usize {
    match label {
        SurvLabel::Upreg => 0,
        SurvLabel::Downreg => 1,
        SurvLabel::Neutral => 2,
    }
}

// Slots are already in priority order, so the first max wins ties.
fn winner(tally: &[usize; 3]) -> SurvLabel {
    const LABELS: [SurvLabel; 3] = [SurvLabel::Upreg, SurvLabel::Downreg, SurvLabel::Neutral];
    let mut best = 0;
    for i in 1..3 {
        if tally[i] > tally[best] {
            best = i;
        }
    }
    LABELS[best]
}
