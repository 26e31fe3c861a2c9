mod assign;
mod consolidate;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

pub use assign::{assign_label, assign_labels};
pub use consolidate::consolidate;

/// Survival-association label for a gene in one cancer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SurvLabel {
    Upreg,
    Downreg,
    Neutral,
}

impl SurvLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SurvLabel::Upreg => "UPREG",
            SurvLabel::Downreg => "DOWNREG",
            SurvLabel::Neutral => "NEUTRAL",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "UPREG" => Ok(SurvLabel::Upreg),
            "DOWNREG" => Ok(SurvLabel::Downreg),
            "NEUTRAL" => Ok(SurvLabel::Neutral),
            other => bail!("unknown survival label '{}'", other),
        }
    }

    /// Ordinal encoding used by the correlation step: favorable +1,
    /// neutral 0, unfavorable -1.
    pub fn ordinal(&self) -> f64 {
        match self {
            SurvLabel::Upreg => 1.0,
            SurvLabel::Neutral => 0.0,
            SurvLabel::Downreg => -1.0,
        }
    }
}

/// Labeling thresholds. Invariant: hr_up > 1 > hr_low > 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Thresholds {
    pub cox_alpha: f64,
    pub hr_up: f64,
    pub hr_low: f64,
}

impl Thresholds {
    pub fn new(cox_alpha: f64, hr_up: f64, hr_low: f64) -> Result<Self> {
        if !(cox_alpha > 0.0 && cox_alpha < 1.0) {
            bail!("cox_alpha must be in (0, 1), got {}", cox_alpha);
        }
        if hr_up <= 1.0 {
            bail!("hr_up must be > 1, got {}", hr_up);
        }
        if hr_low >= 1.0 || hr_low <= 0.0 {
            bail!("hr_low must be in (0, 1), got {}", hr_low);
        }
        Ok(Self {
            cox_alpha,
            hr_up,
            hr_low,
        })
    }
}

/// One cleaned row of the survival table.
#[derive(Debug, Clone)]
pub struct SurvivalRecord {
    pub gene: String,
    pub cancer_type: String,
    pub hazard_ratio: f64,
    pub p_value: f64,
}

/// A per-record label paired with its source row.
#[derive(Debug, Clone)]
pub struct LabeledRecord {
    pub gene: String,
    pub cancer_type: String,
    pub label: SurvLabel,
}

/// Exactly one label per (gene, cancer type) key after consolidation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsolidatedLabel {
    pub gene: String,
    pub cancer_type: String,
    pub label: SurvLabel,
}
