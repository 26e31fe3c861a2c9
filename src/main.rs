use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use oncoprep::cancers;
use oncoprep::cli::{Cli, Commands, SurvivalColumnArgs, TargetArg};
use oncoprep::ctx::Ctx;
use oncoprep::io;
use oncoprep::io::survival::SurvivalColumns;
use oncoprep::labels::Thresholds;
use oncoprep::pipeline::stage0_scaffold::Stage0Scaffold;
use oncoprep::pipeline::stage1_survival::Stage1Survival;
use oncoprep::pipeline::stage2_label::Stage2Label;
use oncoprep::pipeline::stage3_consolidate::Stage3Consolidate;
use oncoprep::pipeline::stage4_merge::Stage4Merge;
use oncoprep::pipeline::stage5_summary::Stage5Summary;
use oncoprep::pipeline::stage6_output::Stage6Output;
use oncoprep::pipeline::Pipeline;
use oncoprep::summary::TargetKind;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Label(args) => {
            let cancers = cancers::load_with_user(args.cancer_map.as_deref())?;
            let thresholds = Thresholds::new(args.cox_alpha, args.hr_up, args.hr_low)?;

            let mut ctx = Ctx::new(args.out, cancers, args.json, env!("CARGO_PKG_VERSION"));
            ctx.survival_input = Some(args.input);
            ctx.thresholds = Some(thresholds);
            ctx.survival_columns = survival_columns(&args.columns);

            let pipeline = Pipeline::new(vec![
                Box::new(Stage0Scaffold::new()),
                Box::new(Stage1Survival::new()),
                Box::new(Stage2Label::new()),
                Box::new(Stage3Consolidate::new()),
                Box::new(Stage6Output::new()),
            ]);
            pipeline.run(&mut ctx)?;
            print_summary(&ctx)?;
        }
        Commands::Merge(args) => {
            let cancers = cancers::load_with_user(args.cancer_map.as_deref())?;

            let mut ctx = Ctx::new(args.out, cancers, args.json, env!("CARGO_PKG_VERSION"));
            ctx.model_path = Some(args.model);
            ctx.labels_path = Some(args.labels);
            ctx.cancer_code = args.cancer;
            ctx.gene_column = args.gene_col;

            let pipeline = Pipeline::new(vec![
                Box::new(Stage0Scaffold::new()),
                Box::new(Stage4Merge::new()),
                Box::new(Stage6Output::new()),
            ]);
            pipeline.run(&mut ctx)?;
            print_summary(&ctx)?;
        }
        Commands::Summarize(args) => {
            let cancers = cancers::load_builtin()?;

            let mut ctx = Ctx::new(args.out, cancers, args.json, env!("CARGO_PKG_VERSION"));
            ctx.model_path = Some(args.model);
            ctx.importance_path = Some(args.importance);
            ctx.exclude_path = args.exclude;
            ctx.rename_path = args.rename;
            ctx.target = Some(target_kind(args.target));
            ctx.top_n = args.top;
            ctx.gene_column = args.gene_col;
            ctx.cell_line_column = args.cell_line_col;

            let pipeline = Pipeline::new(vec![
                Box::new(Stage0Scaffold::new()),
                Box::new(Stage5Summary::new()),
                Box::new(Stage6Output::new()),
            ]);
            pipeline.run(&mut ctx)?;
            print_summary(&ctx)?;
        }
        Commands::Validate(args) => {
            let cancers = cancers::load_with_user(args.cancer_map.as_deref())?;

            let mut ctx = Ctx::new(
                PathBuf::from("."),
                cancers,
                false,
                env!("CARGO_PKG_VERSION"),
            );
            ctx.survival_input = Some(args.input);
            ctx.survival_columns = survival_columns(&args.columns);

            let pipeline = Pipeline::new(vec![Box::new(Stage1Survival::new())]);
            pipeline.run(&mut ctx)?;
            print_validate_summary(&ctx);
        }
    }

    Ok(())
}

fn survival_columns(args: &SurvivalColumnArgs) -> SurvivalColumns {
    SurvivalColumns {
        gene: args.gene_col.clone(),
        cancer_type: args.cancer_col.clone(),
        hazard_ratio: args.hr_col.clone(),
        p_value: args.p_col.clone(),
    }
}

fn target_kind(arg: TargetArg) -> TargetKind {
    match arg {
        TargetArg::Surv => TargetKind::Surv,
        TargetArg::Cnv => TargetKind::Cnv,
        TargetArg::Tcga => TargetKind::Tcga,
    }
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

fn print_validate_summary(ctx: &Ctx) {
    println!("oncoprep validate ok");
    println!("records: {}", ctx.input_meta.records.unwrap_or(0));
    println!("discarded: {}", ctx.input_meta.discarded.unwrap_or(0));
    println!("genes: {}", ctx.input_meta.genes.unwrap_or(0));
    println!(
        "cancer types: {}",
        ctx.input_meta.cancer_types.unwrap_or(0)
    );
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}
