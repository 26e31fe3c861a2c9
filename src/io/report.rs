use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::schema::v1::{
    ImportanceRow, InputMeta, LabelFrequency, MergeMeta, PrepReportV1, ThresholdsMeta,
};

pub fn build_report(ctx: &Ctx) -> Result<PrepReportV1> {
    let input_meta = InputMeta {
        records: ctx.input_meta.records,
        discarded: ctx.input_meta.discarded,
        genes: ctx.input_meta.genes,
        cancer_types: ctx.input_meta.cancer_types,
    };

    let thresholds = ctx.thresholds.map(|t| ThresholdsMeta {
        cox_alpha: t.cox_alpha,
        hr_up: t.hr_up,
        hr_low: t.hr_low,
    });

    // Label frequencies come from whichever operation ran: consolidated
    // labels, the merged SURV column, or the summarized target column.
    let label_frequencies = if let Some(summary) = &ctx.summary {
        summary
            .label_frequencies
            .iter()
            .map(|f| LabelFrequency {
                label: f.label.clone(),
                count: f.count as u64,
            })
            .collect()
    } else if !ctx.consolidated.is_empty() {
        frequencies_of(ctx.consolidated.iter().map(|c| c.label.as_str()))
    } else if let Some(model) = &ctx.model {
        match model.column_index(crate::merge::SURV_COLUMN) {
            Some(idx) => frequencies_of(model.rows.iter().map(|r| r[idx].as_str())),
            None => Vec::new(),
        }
    } else {
        Vec::new()
    };

    let merge = match (&ctx.merge_outcome, &ctx.cancer_code) {
        (Some(outcome), Some(cancer)) => Some(MergeMeta {
            cancer: cancer.clone(),
            matched: outcome.matched as u64,
            defaulted: outcome.defaulted as u64,
        }),
        _ => None,
    };

    let importance = ctx.summary.as_ref().map(|summary| {
        summary
            .entries
            .iter()
            .map(|e| ImportanceRow {
                feature: e.feature.clone(),
                importance: e.importance,
                correlation: e.correlation,
                rank: e.rank as u64,
            })
            .collect()
    });

    Ok(PrepReportV1 {
        tool: ctx.report.tool.clone(),
        version: ctx.report.version.clone(),
        schema_version: ctx.report.schema_version.clone(),
        input_meta,
        thresholds,
        label_frequencies,
        merge,
        importance,
        warnings: ctx.warnings.clone(),
    })
}

pub fn write_json(path: &Path, ctx: &Ctx) -> Result<()> {
    let report = build_report(ctx)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &report)?;
    Ok(())
}

fn frequencies_of<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<LabelFrequency> {
    let mut counts: Vec<LabelFrequency> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|c| c.label == label) {
            Some(entry) => entry.count += 1,
            None => counts.push(LabelFrequency {
                label: label.to_string(),
                count: 1,
            }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count).then(a.label.cmp(&b.label)));
    counts
}
