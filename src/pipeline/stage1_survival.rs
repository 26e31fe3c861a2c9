use std::collections::HashSet;

use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::survival;
use crate::pipeline::Stage;

pub struct Stage1Survival;

impl Stage1Survival {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Survival {
    fn name(&self) -> &'static str {
        "stage1_survival"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let input = ctx
            .survival_input
            .as_ref()
            .context("survival input not set")?
            .clone();

        let scan = survival::read_survival_table(&input, &ctx.survival_columns, &ctx.cancers)?;

        let genes: HashSet<&str> = scan.records.iter().map(|r| r.gene.as_str()).collect();
        let cancer_types: HashSet<&str> = scan
            .records
            .iter()
            .map(|r| r.cancer_type.as_str())
            .collect();

        info!(
            records = scan.records.len(),
            discarded = scan.discarded,
            genes = genes.len(),
            cancer_types = cancer_types.len(),
            "survival_table_loaded"
        );

        ctx.input_meta.records = Some(scan.records.len() as u64);
        ctx.input_meta.discarded = Some(scan.discarded as u64);
        ctx.input_meta.genes = Some(genes.len() as u64);
        ctx.input_meta.cancer_types = Some(cancer_types.len() as u64);

        ctx.report.input_meta.records = ctx.input_meta.records;
        ctx.report.input_meta.discarded = ctx.input_meta.discarded;
        ctx.report.input_meta.genes = ctx.input_meta.genes;
        ctx.report.input_meta.cancer_types = ctx.input_meta.cancer_types;

        ctx.records = scan.records;
        Ok(())
    }
}
