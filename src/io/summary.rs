use anyhow::Result;

use crate::ctx::Ctx;

/// Human-readable run summary printed after a pipeline completes.
pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");

    let mut out = String::new();
    out.push_str(&format!("oncoprep v{}\n", version));

    if let Some(records) = ctx.input_meta.records {
        let discarded = ctx.input_meta.discarded.unwrap_or(0);
        let genes = ctx.input_meta.genes.unwrap_or(0);
        let cancer_types = ctx.input_meta.cancer_types.unwrap_or(0);
        out.push_str(&format!(
            "Input: {} records ({} discarded), {} genes, {} cancer types\n",
            records, discarded, genes, cancer_types
        ));
    }

    if !ctx.consolidated.is_empty() {
        out.push_str(&format!(
            "Labels: {} consolidated (gene, cancer type) pairs\n",
            ctx.consolidated.len()
        ));
    }

    if let (Some(outcome), Some(cancer)) = (&ctx.merge_outcome, &ctx.cancer_code) {
        out.push_str(&format!(
            "Merge [{}]: {} matched, {} defaulted to NEUTRAL\n",
            cancer, outcome.matched, outcome.defaulted
        ));
    }

    if let Some(summary) = &ctx.summary {
        let freq: Vec<String> = summary
            .label_frequencies
            .iter()
            .map(|f| format!("{}={}", f.label, f.count))
            .collect();
        out.push_str(&format!("Classes: {}\n", freq.join(", ")));
        out.push_str(&format!(
            "Features ranked: {} (top {} written)\n",
            summary.entries.len(),
            ctx.top_n.min(summary.entries.len())
        ));
        for entry in summary.entries.iter().take(ctx.top_n) {
            out.push_str(&format!(
                "{:>2}. {}\timportance={:.4}\tr={:+.4}\n",
                entry.rank, entry.feature, entry.importance, entry.correlation
            ));
        }
    }

    Ok(out)
}
