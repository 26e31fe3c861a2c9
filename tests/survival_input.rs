use std::fs;

use oncoprep::cancers;
use oncoprep::io::survival::{
    read_survival_table, strip_confidence_interval, SurvivalColumns,
};
use tempfile::TempDir;

const HEADER: &str = "ID_NAME,CANCER TYPE,HR [95% CI-low CI-upp],COX P-VALUE";

#[test]
fn strips_bracketed_confidence_interval() {
    assert_eq!(strip_confidence_interval("2.31 [1.80 2.96]"), "2.31");
    assert_eq!(strip_confidence_interval("0.55"), "0.55");
    assert_eq!(strip_confidence_interval("  1.10  "), "1.10");
}

#[test]
fn reads_and_filters_by_allow_list() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("surv.csv");
    let content = format!(
        "{}\nTP53,Breast cancer,2.31 [1.80 2.96],0.01\nKRAS,Pancreatic cancer,3.00,0.01\nMYC,Lung cancer,0.40,0.02\n",
        HEADER
    );
    fs::write(&path, content).unwrap();

    let map = cancers::load_builtin().unwrap();
    let scan = read_survival_table(&path, &SurvivalColumns::default(), &map).unwrap();

    assert_eq!(scan.records.len(), 2);
    assert_eq!(scan.discarded, 1);
    assert_eq!(scan.records[0].gene, "TP53");
    assert!((scan.records[0].hazard_ratio - 2.31).abs() < 1e-12);
    assert!((scan.records[1].hazard_ratio - 0.40).abs() < 1e-12);
}

#[test]
fn unparseable_hazard_ratio_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("surv.csv");
    let content = format!("{}\nTP53,Breast cancer,n/a,0.01\n", HEADER);
    fs::write(&path, content).unwrap();

    let map = cancers::load_builtin().unwrap();
    let err = read_survival_table(&path, &SurvivalColumns::default(), &map).unwrap_err();
    assert!(err.to_string().contains("unparseable hazard ratio"));
}

#[test]
fn unparseable_p_value_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("surv.csv");
    let content = format!("{}\nTP53,Breast cancer,2.0,significant\n", HEADER);
    fs::write(&path, content).unwrap();

    let map = cancers::load_builtin().unwrap();
    let err = read_survival_table(&path, &SurvivalColumns::default(), &map).unwrap_err();
    assert!(err.to_string().contains("unparseable p-value"));
}

#[test]
fn missing_column_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("surv.csv");
    let content = "ID_NAME,CANCER TYPE,HR [95% CI-low CI-upp]\nTP53,Breast cancer,2.0\n";
    fs::write(&path, content).unwrap();

    let map = cancers::load_builtin().unwrap();
    let err = read_survival_table(&path, &SurvivalColumns::default(), &map).unwrap_err();
    assert!(err.to_string().contains("missing expected column 'COX P-VALUE'"));
}

#[test]
fn rows_outside_allow_list_skip_parsing() {
    // A malformed HR on a discarded row must not abort the run.
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("surv.csv");
    let content = format!(
        "{}\nKRAS,Pancreatic cancer,not-a-number,0.01\nTP53,Breast cancer,2.0,0.01\n",
        HEADER
    );
    fs::write(&path, content).unwrap();

    let map = cancers::load_builtin().unwrap();
    let scan = read_survival_table(&path, &SurvivalColumns::default(), &map).unwrap();
    assert_eq!(scan.records.len(), 1);
    assert_eq!(scan.discarded, 1);
}
