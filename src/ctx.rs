use std::path::PathBuf;

use crate::cancers::CancerMap;
use crate::io::survival::SurvivalColumns;
use crate::io::table::FeatureTable;
use crate::labels::{ConsolidatedLabel, LabeledRecord, SurvivalRecord, Thresholds};
use crate::merge::MergeOutcome;
use crate::schema::v1::PrepReportV1;
use crate::summary::{FeatureSummary, TargetKind};

#[derive(Debug, Clone)]
pub struct InputMeta {
    pub records: Option<u64>,
    pub discarded: Option<u64>,
    pub genes: Option<u64>,
    pub cancer_types: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub labels_path: PathBuf,
    pub importance_path: PathBuf,
    pub json_path: PathBuf,
}

/// Mutable state threaded through the pipeline stages: configuration,
/// loaded tables, intermediate results and the report being built.
#[derive(Debug)]
pub struct Ctx {
    // configuration
    pub survival_input: Option<PathBuf>,
    pub model_path: Option<PathBuf>,
    pub labels_path: Option<PathBuf>,
    pub importance_path: Option<PathBuf>,
    pub exclude_path: Option<PathBuf>,
    pub rename_path: Option<PathBuf>,
    pub thresholds: Option<Thresholds>,
    pub cancers: CancerMap,
    pub cancer_code: Option<String>,
    pub target: Option<TargetKind>,
    pub top_n: usize,
    pub survival_columns: SurvivalColumns,
    pub gene_column: String,
    pub cell_line_column: String,
    pub write_json: bool,

    // intermediate state
    pub records: Vec<SurvivalRecord>,
    pub labeled: Vec<LabeledRecord>,
    pub consolidated: Vec<ConsolidatedLabel>,
    pub model: Option<FeatureTable>,
    pub merge_outcome: Option<MergeOutcome>,
    pub summary: Option<FeatureSummary>,
    pub warnings: Vec<String>,

    pub input_meta: InputMeta,
    pub output: OutputPaths,
    pub report: PrepReportV1,
}

impl Ctx {
    pub fn new(out_dir: PathBuf, cancers: CancerMap, write_json: bool, tool_version: &str) -> Self {
        let labels_path = out_dir.join("labels.csv");
        let importance_path = out_dir.join("importance.csv");
        let json_path = out_dir.join("prep.json");
        let report = PrepReportV1::empty(tool_version);
        Self {
            survival_input: None,
            model_path: None,
            labels_path: None,
            importance_path: None,
            exclude_path: None,
            rename_path: None,
            thresholds: None,
            cancers,
            cancer_code: None,
            target: None,
            top_n: 10,
            survival_columns: SurvivalColumns::default(),
            gene_column: "Gene".to_string(),
            cell_line_column: "Cell Line".to_string(),
            write_json,
            records: Vec::new(),
            labeled: Vec::new(),
            consolidated: Vec::new(),
            model: None,
            merge_outcome: None,
            summary: None,
            warnings: Vec::new(),
            input_meta: InputMeta {
                records: None,
                discarded: None,
                genes: None,
                cancer_types: None,
            },
            output: OutputPaths {
                out_dir,
                labels_path,
                importance_path,
                json_path,
            },
            report,
        }
    }

    /// Output path for a merged per-cancer model file.
    pub fn merged_model_path(&self, cancer_code: &str) -> PathBuf {
        self.output.out_dir.join(format!("{}.csv", cancer_code))
    }
}
