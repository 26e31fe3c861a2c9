use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{importance, labels, report, table};
use crate::pipeline::Stage;

pub struct Stage6Output;

impl Stage6Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Output {
    fn name(&self) -> &'static str {
        "stage6_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if !ctx.consolidated.is_empty() {
            labels::write_labels(&ctx.output.labels_path, &ctx.consolidated)?;
            info!(path = %ctx.output.labels_path.display(), "labels_written");
        }

        if let Some(model) = &ctx.model {
            let cancer = ctx
                .cancer_code
                .as_ref()
                .context("cancer code missing for merged model output")?;
            let path = ctx.merged_model_path(cancer);
            table::write_table(&path, model)?;
            info!(path = %path.display(), "model_written");
        }

        if let Some(summary) = &ctx.summary {
            importance::write_importance_csv(
                &ctx.output.importance_path,
                &summary.entries,
                ctx.top_n,
            )?;
            info!(path = %ctx.output.importance_path.display(), "importance_written");
        }

        let built = report::build_report(ctx)?;
        ctx.report = built;
        if ctx.write_json {
            report::write_json(&ctx.output.json_path, ctx)?;
            info!(path = %ctx.output.json_path.display(), "report_written");
        }

        info!("stage6_output_ready");
        Ok(())
    }
}
