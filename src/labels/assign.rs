use crate::labels::{LabeledRecord, SurvLabel, SurvivalRecord, Thresholds};

/// Derive the label for a single (hazard ratio, p-value) pair.
///
/// Rules, in precedence order, boundaries inclusive:
/// 1. hr >= hr_up and p <= cox_alpha  => UPREG
/// 2. hr <= hr_low and p <= cox_alpha => DOWNREG
/// 3. otherwise                       => NEUTRAL
pub fn assign_label(hr: f64, p: f64, thresholds: &Thresholds) -> SurvLabel {
    if hr >= thresholds.hr_up && p <= thresholds.cox_alpha {
        SurvLabel::Upreg
    } else if hr <= thresholds.hr_low && p <= thresholds.cox_alpha {
        SurvLabel::Downreg
    } else {
        SurvLabel::Neutral
    }
}

pub fn assign_labels(records: &[SurvivalRecord], thresholds: &Thresholds) -> Vec<LabeledRecord> {
    records
        .iter()
        .map(|r| LabeledRecord {
            gene: r.gene.clone(),
            cancer_type: r.cancer_type.clone(),
            label: assign_label(r.hazard_ratio, r.p_value, thresholds),
        })
        .collect()
}
