use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{importance, table};
use crate::pipeline::Stage;
use crate::summary::{summarize_features, SummarizeOptions};

pub struct Stage5Summary;

impl Stage5Summary {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Summary {
    fn name(&self) -> &'static str {
        "stage5_summary"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let model_path = ctx.model_path.as_ref().context("model path not set")?.clone();
        let importance_path = ctx
            .importance_path
            .as_ref()
            .context("importance path not set")?
            .clone();
        let target = ctx.target.context("target not set")?;

        let mut model = table::read_table(&model_path)?;
        if let Some(rename_path) = &ctx.rename_path {
            let map = table::read_rename_map(rename_path)?;
            model.rename_headers(&map);
        }
        let exclude = match &ctx.exclude_path {
            Some(path) => table::read_column_list(path)?,
            None => Vec::new(),
        };

        let scores = importance::read_importance(&importance_path)?;

        let opts = SummarizeOptions {
            target,
            gene_column: ctx.gene_column.clone(),
            cell_line_column: ctx.cell_line_column.clone(),
            exclude,
        };
        let summary = summarize_features(&model, &scores, &opts)?;

        info!(
            features = summary.entries.len(),
            warnings = summary.warnings.len(),
            "features_summarized"
        );

        ctx.warnings.extend(summary.warnings.iter().cloned());
        ctx.summary = Some(summary);
        Ok(())
    }
}
