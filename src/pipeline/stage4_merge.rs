use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{labels, table};
use crate::merge::merge_labels;
use crate::pipeline::Stage;

pub struct Stage4Merge;

impl Stage4Merge {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Merge {
    fn name(&self) -> &'static str {
        "stage4_merge"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let model_path = ctx.model_path.as_ref().context("model path not set")?.clone();

        // Labels come from a labels file produced by a previous `label`
        // run.
        let labels_path = ctx.labels_path.as_ref().context("labels path not set")?;
        let consolidated = labels::read_labels(labels_path)?;

        // Cancer code defaults to the model file stem, the convention
        // used by per-cancer model files.
        let cancer_code = match &ctx.cancer_code {
            Some(code) => code.clone(),
            None => model_path
                .file_stem()
                .and_then(|s| s.to_str())
                .context("cannot derive cancer code from model path")?
                .to_string(),
        };

        let mut model = table::read_table(&model_path)?;
        let gene_column = ctx.gene_column.clone();
        let outcome = merge_labels(
            &mut model,
            &consolidated,
            &cancer_code,
            &ctx.cancers,
            &gene_column,
        )?;

        info!(
            cancer = %cancer_code,
            matched = outcome.matched,
            defaulted = outcome.defaulted,
            "labels_merged"
        );

        ctx.cancer_code = Some(cancer_code);
        ctx.merge_outcome = Some(outcome);
        ctx.model = Some(model);
        Ok(())
    }
}
