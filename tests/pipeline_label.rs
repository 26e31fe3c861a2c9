use std::fs;
use std::path::Path;

use oncoprep::cancers;
use oncoprep::ctx::Ctx;
use oncoprep::labels::Thresholds;
use oncoprep::pipeline::stage0_scaffold::Stage0Scaffold;
use oncoprep::pipeline::stage1_survival::Stage1Survival;
use oncoprep::pipeline::stage2_label::Stage2Label;
use oncoprep::pipeline::stage3_consolidate::Stage3Consolidate;
use oncoprep::pipeline::stage6_output::Stage6Output;
use oncoprep::pipeline::Pipeline;
use tempfile::TempDir;

const SURV_TABLE: &str = "\
ID_NAME,CANCER TYPE,HR [95% CI-low CI-upp],COX P-VALUE
TP53,Breast cancer,2.31 [1.80 2.96],0.01
TP53,Breast cancer,2.50,0.20
TP53,Breast cancer,3.00 [2.10 4.20],0.01
KRAS,Breast cancer,0.30,0.02
MYC,Pancreatic cancer,5.00,0.001
";

fn run_label(input: &Path, out_dir: &Path) -> Ctx {
    let map = cancers::load_builtin().unwrap();
    let mut ctx = Ctx::new(out_dir.to_path_buf(), map, true, "0.0.0-test");
    ctx.survival_input = Some(input.to_path_buf());
    ctx.thresholds = Some(Thresholds::new(0.05, 2.0, 0.5).unwrap());

    let pipeline = Pipeline::new(vec![
        Box::new(Stage0Scaffold::new()),
        Box::new(Stage1Survival::new()),
        Box::new(Stage2Label::new()),
        Box::new(Stage3Consolidate::new()),
        Box::new(Stage6Output::new()),
    ]);
    pipeline.run(&mut ctx).unwrap();
    ctx
}

#[test]
fn label_pipeline_end_to_end() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("surv.csv");
    fs::write(&input, SURV_TABLE).unwrap();
    let out_dir = tmp.path().join("out");

    let ctx = run_label(&input, &out_dir);

    assert_eq!(ctx.input_meta.records, Some(4));
    assert_eq!(ctx.input_meta.discarded, Some(1));
    assert_eq!(ctx.consolidated.len(), 2);

    let content = fs::read_to_string(out_dir.join("labels.csv")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "gene,cancer_type,surv");
    // Two UPREG records outvote the NEUTRAL one.
    assert_eq!(lines[1], "TP53,Breast cancer,UPREG");
    assert_eq!(lines[2], "KRAS,Breast cancer,DOWNREG");
}

#[test]
fn label_pipeline_writes_json_report() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("surv.csv");
    fs::write(&input, SURV_TABLE).unwrap();
    let out_dir = tmp.path().join("out");

    run_label(&input, &out_dir);

    let content = fs::read_to_string(out_dir.join("prep.json")).unwrap();
    let report: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(report["tool"], "oncoprep");
    assert_eq!(report["schema_version"], "v1");
    assert_eq!(report["input_meta"]["records"], 4);
    assert_eq!(report["thresholds"]["hr_up"], 2.0);
    let freqs = report["label_frequencies"].as_array().unwrap();
    assert_eq!(freqs.len(), 2);
}

#[test]
fn labeling_is_deterministic() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("surv.csv");
    fs::write(&input, SURV_TABLE).unwrap();

    let out_a = tmp.path().join("a");
    let out_b = tmp.path().join("b");
    run_label(&input, &out_a);
    run_label(&input, &out_b);

    let a = fs::read(out_a.join("labels.csv")).unwrap();
    let b = fs::read(out_b.join("labels.csv")).unwrap();
    assert_eq!(a, b);
}
