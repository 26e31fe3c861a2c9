use assert_cmd::Command;

#[test]
fn cli_help_smoke() {
    let mut cmd = Command::cargo_bin("oncoprep").unwrap();
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn label_requires_thresholds() {
    let mut cmd = Command::cargo_bin("oncoprep").unwrap();
    cmd.args(["label", "--input", "surv.csv", "--out", "out"]);
    cmd.assert().failure();
}
