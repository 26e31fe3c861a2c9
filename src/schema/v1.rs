use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub records: Option<u64>,
    pub discarded: Option<u64>,
    pub genes: Option<u64>,
    pub cancer_types: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdsMeta {
    pub cox_alpha: f64,
    pub hr_up: f64,
    pub hr_low: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelFrequency {
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportanceRow {
    pub feature: String,
    pub importance: f64,
    pub correlation: f64,
    pub rank: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeMeta {
    pub cancer: String,
    pub matched: u64,
    pub defaulted: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepReportV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input_meta: InputMeta,
    pub thresholds: Option<ThresholdsMeta>,
    pub label_frequencies: Vec<LabelFrequency>,
    pub merge: Option<MergeMeta>,
    pub importance: Option<Vec<ImportanceRow>>,
    pub warnings: Vec<String>,
}

impl PrepReportV1 {
    pub fn empty(tool_version: &str) -> Self {
        Self {
            tool: "oncoprep".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            input_meta: InputMeta {
                records: None,
                discarded: None,
                genes: None,
                cancer_types: None,
            },
            thresholds: None,
            label_frequencies: Vec::new(),
            merge: None,
            importance: None,
            warnings: Vec::new(),
        }
    }
}
