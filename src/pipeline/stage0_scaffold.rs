use anyhow::Result;
use std::fs;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage0Scaffold;

impl Stage0Scaffold {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage0Scaffold {
    fn name(&self) -> &'static str {
        "stage0_scaffold"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        fs::create_dir_all(&ctx.output.out_dir)?;
        info!(
            out_dir = %ctx.output.out_dir.display(),
            "output_dir_ready"
        );

        if let Some(t) = ctx.thresholds {
            ctx.report.thresholds = Some(crate::schema::v1::ThresholdsMeta {
                cox_alpha: t.cox_alpha,
                hr_up: t.hr_up,
                hr_low: t.hr_low,
            });
        }

        Ok(())
    }
}
