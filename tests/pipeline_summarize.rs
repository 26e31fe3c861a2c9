use std::fs;

use oncoprep::cancers;
use oncoprep::ctx::Ctx;
use oncoprep::pipeline::stage0_scaffold::Stage0Scaffold;
use oncoprep::pipeline::stage5_summary::Stage5Summary;
use oncoprep::pipeline::stage6_output::Stage6Output;
use oncoprep::pipeline::Pipeline;
use oncoprep::summary::TargetKind;
use tempfile::TempDir;

const MODEL: &str = "\
Genes,Cell Line,feat_a,feat_b,SURV
G1,CL1,2.0,7.0,UPREG
G1,CL2,4.0,7.0,UPREG
G2,CL1,2.0,7.0,NEUTRAL
G3,CL1,1.0,7.0,DOWNREG
";

const IMPORTANCE: &str = "feat_b\t0.62\nfeat_a\t0.38\n";

#[test]
fn summarize_pipeline_end_to_end() {
    let tmp = TempDir::new().unwrap();
    let model_path = tmp.path().join("breast.csv");
    let importance_path = tmp.path().join("importance.tsv");
    fs::write(&model_path, MODEL).unwrap();
    fs::write(&importance_path, IMPORTANCE).unwrap();
    let out_dir = tmp.path().join("out");

    let map = cancers::load_builtin().unwrap();
    let mut ctx = Ctx::new(out_dir.clone(), map, true, "0.0.0-test");
    ctx.model_path = Some(model_path);
    ctx.importance_path = Some(importance_path);
    ctx.target = Some(TargetKind::Surv);
    ctx.gene_column = "Genes".to_string();

    let pipeline = Pipeline::new(vec![
        Box::new(Stage0Scaffold::new()),
        Box::new(Stage5Summary::new()),
        Box::new(Stage6Output::new()),
    ]);
    pipeline.run(&mut ctx).unwrap();

    let content = fs::read_to_string(out_dir.join("importance.csv")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "feature,importance,correlation");
    assert!(lines[1].starts_with("feat_b,0.620000,0.000000"));
    assert!(lines[2].starts_with("feat_a,0.380000,1.000000"));

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("prep.json")).unwrap()).unwrap();
    let ranked = report["importance"].as_array().unwrap();
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0]["feature"], "feat_b");
    assert_eq!(ranked[0]["rank"], 1);
}

#[test]
fn summarize_pipeline_applies_rename_map() {
    let tmp = TempDir::new().unwrap();
    let model_path = tmp.path().join("breast.csv");
    let importance_path = tmp.path().join("importance.tsv");
    let rename_path = tmp.path().join("headers.tsv");
    fs::write(
        &model_path,
        MODEL.replace("feat_a", "raw_feature_a_name"),
    )
    .unwrap();
    fs::write(&importance_path, IMPORTANCE).unwrap();
    fs::write(&rename_path, "raw_feature_a_name\tfeat_a\n").unwrap();
    let out_dir = tmp.path().join("out");

    let map = cancers::load_builtin().unwrap();
    let mut ctx = Ctx::new(out_dir.clone(), map, false, "0.0.0-test");
    ctx.model_path = Some(model_path);
    ctx.importance_path = Some(importance_path);
    ctx.rename_path = Some(rename_path);
    ctx.target = Some(TargetKind::Surv);
    ctx.gene_column = "Genes".to_string();

    let pipeline = Pipeline::new(vec![
        Box::new(Stage0Scaffold::new()),
        Box::new(Stage5Summary::new()),
        Box::new(Stage6Output::new()),
    ]);
    pipeline.run(&mut ctx).unwrap();

    let content = fs::read_to_string(out_dir.join("importance.csv")).unwrap();
    assert!(content.contains("feat_a"));
}

#[test]
fn top_n_truncates_the_written_report_only() {
    let tmp = TempDir::new().unwrap();
    let model_path = tmp.path().join("breast.csv");
    let importance_path = tmp.path().join("importance.tsv");
    fs::write(&model_path, MODEL).unwrap();
    fs::write(&importance_path, IMPORTANCE).unwrap();
    let out_dir = tmp.path().join("out");

    let map = cancers::load_builtin().unwrap();
    let mut ctx = Ctx::new(out_dir.clone(), map, true, "0.0.0-test");
    ctx.model_path = Some(model_path);
    ctx.importance_path = Some(importance_path);
    ctx.target = Some(TargetKind::Surv);
    ctx.gene_column = "Genes".to_string();
    ctx.top_n = 1;

    let pipeline = Pipeline::new(vec![
        Box::new(Stage0Scaffold::new()),
        Box::new(Stage5Summary::new()),
        Box::new(Stage6Output::new()),
    ]);
    pipeline.run(&mut ctx).unwrap();

    let csv_lines = fs::read_to_string(out_dir.join("importance.csv"))
        .unwrap()
        .lines()
        .count();
    assert_eq!(csv_lines, 2);

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("prep.json")).unwrap()).unwrap();
    assert_eq!(report["importance"].as_array().unwrap().len(), 2);
}
