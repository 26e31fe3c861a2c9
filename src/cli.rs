use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "oncoprep", version, about = "Survival-label preparation CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Label a survival table and consolidate per (gene, cancer type)
    Label(LabelArgs),
    /// Merge consolidated labels into a per-cancer feature table
    Merge(MergeArgs),
    /// Rank features by importance with class-median correlations
    Summarize(SummarizeArgs),
    /// Read a survival table and report what would be labeled
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct LabelArgs {
    #[arg(long, help = "Survival table (CSV or TSV)")]
    pub input: PathBuf,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, help = "Cox p-value significance threshold")]
    pub cox_alpha: f64,

    #[arg(long, help = "Upper hazard-ratio threshold (> 1)")]
    pub hr_up: f64,

    #[arg(long, help = "Lower hazard-ratio threshold (in (0, 1))")]
    pub hr_low: f64,

    #[arg(long, help = "Cancer-type map TSV overlaid on the built-in set")]
    pub cancer_map: Option<PathBuf>,

    #[arg(long, default_value_t = false, help = "Also write prep.json")]
    pub json: bool,

    #[command(flatten)]
    pub columns: SurvivalColumnArgs,
}

#[derive(Debug, Args)]
pub struct MergeArgs {
    #[arg(long, help = "Per-cancer feature table (CSV)")]
    pub model: PathBuf,

    #[arg(long, help = "Consolidated labels file from `label`")]
    pub labels: PathBuf,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, help = "Cancer model code (defaults to the model file stem)")]
    pub cancer: Option<String>,

    #[arg(long, help = "Cancer-type map TSV overlaid on the built-in set")]
    pub cancer_map: Option<PathBuf>,

    #[arg(long, default_value = "Gene", help = "Gene column in the model table")]
    pub gene_col: String,

    #[arg(long, default_value_t = false, help = "Also write prep.json")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct SummarizeArgs {
    #[arg(long, help = "Feature table with the target column (CSV)")]
    pub model: PathBuf,

    #[arg(long, value_enum)]
    pub target: TargetArg,

    #[arg(long, help = "Importance scores TSV (feature, score)")]
    pub importance: PathBuf,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, default_value_t = 10, help = "Number of top features to report")]
    pub top: usize,

    #[arg(long, help = "File listing feature columns to exclude, one per line")]
    pub exclude: Option<PathBuf>,

    #[arg(long, help = "Header rename map TSV (original, replacement)")]
    pub rename: Option<PathBuf>,

    #[arg(long, default_value = "Genes", help = "Gene column in the feature table")]
    pub gene_col: String,

    #[arg(long, default_value = "Cell Line", help = "Cell-line column in the feature table")]
    pub cell_line_col: String,

    #[arg(long, default_value_t = false, help = "Also write prep.json")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, help = "Survival table (CSV or TSV)")]
    pub input: PathBuf,

    #[arg(long, help = "Cancer-type map TSV overlaid on the built-in set")]
    pub cancer_map: Option<PathBuf>,

    #[command(flatten)]
    pub columns: SurvivalColumnArgs,
}

#[derive(Debug, Args)]
pub struct SurvivalColumnArgs {
    #[arg(long, default_value = "ID_NAME", help = "Gene identifier column")]
    pub gene_col: String,

    #[arg(long, default_value = "CANCER TYPE", help = "Cancer type column")]
    pub cancer_col: String,

    #[arg(
        long,
        default_value = "HR [95% CI-low CI-upp]",
        help = "Hazard-ratio column (may be bracket-annotated)"
    )]
    pub hr_col: String,

    #[arg(long, default_value = "COX P-VALUE", help = "Cox p-value column")]
    pub p_col: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TargetArg {
    Surv,
    Cnv,
    Tcga,
}
