use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::labels::consolidate;
use crate::pipeline::Stage;

pub struct Stage3Consolidate;

impl Stage3Consolidate {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Consolidate {
    fn name(&self) -> &'static str {
        "stage3_consolidate"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        ctx.consolidated = consolidate(&ctx.labeled);
        info!(keys = ctx.consolidated.len(), "labels_consolidated");
        Ok(())
    }
}
