use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::labels::assign_labels;
use crate::pipeline::Stage;

pub struct Stage2Label;

impl Stage2Label {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Label {
    fn name(&self) -> &'static str {
        "stage2_label"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let thresholds = ctx.thresholds.context("thresholds not set")?;
        ctx.labeled = assign_labels(&ctx.records, &thresholds);
        info!(labeled = ctx.labeled.len(), "labels_assigned");
        Ok(())
    }
}
