use assert_fs::prelude::*;
use predicates::prelude::*;

const HISTORY_CSV: &str = "2023-01-01,1
2023-01-05,3
2023-01-12,2
2023-01-20,1
2023-01-28,4
2023-02-02,1
2023-02-09,1
2023-02-17,1
2023-02-24,1
2023-03-01,1";

#[test]
fn simulate_writes_report_and_histogram() {
    let data_file = assert_fs::NamedTempFile::new("history.csv").unwrap();
    data_file.write_str(HISTORY_CSV).unwrap();
    let data_arg = data_file.path().to_str().unwrap();

    let output_file = assert_fs::NamedTempFile::new("output.yaml").unwrap();
    let output_arg = output_file.path().to_str().unwrap();
    let histogram_path = format!("{output_arg}.png");

    let mut cmd = assert_cmd::cargo_bin_cmd!("datecast");
    cmd.args([
        "simulate",
        "-d",
        data_arg,
        "-o",
        output_arg,
        "-i",
        "200",
        "-n",
        "5",
        "-s",
        "42",
    ]);

    cmd.assert().success().stdout(predicate::str::contains(
        format!("Forecast for 5 items written to {output_arg}"),
    ));

    let output = std::fs::read_to_string(output_arg).unwrap();
    assert!(output.contains("data_source:"));
    assert!(output.contains("last_date: 2023-03-01"));
    assert!(output.contains("trials: 200"));
    assert!(output.contains("forecast_items: 5"));
    assert!(output.contains("p50:"));
    assert!(output.contains("p85:"));
    assert!(output.contains("p95:"));

    assert!(std::path::Path::new(&histogram_path).exists());
    let _ = std::fs::remove_file(&histogram_path);
}

#[test]
fn simulate_is_reproducible_with_a_seed() {
    let data_file = assert_fs::NamedTempFile::new("history.csv").unwrap();
    data_file.write_str(HISTORY_CSV).unwrap();
    let data_arg = data_file.path().to_str().unwrap();

    let mut reports = Vec::new();
    for run in 0..2 {
        let output_file =
            assert_fs::NamedTempFile::new(format!("output-{run}.yaml")).unwrap();
        let output_arg = output_file.path().to_str().unwrap();

        let mut cmd = assert_cmd::cargo_bin_cmd!("datecast");
        cmd.args([
            "simulate", "-d", data_arg, "-o", output_arg, "-i", "500", "-n", "5", "-s",
            "7",
        ]);
        cmd.assert().success();

        reports.push(std::fs::read_to_string(output_arg).unwrap());
        let _ = std::fs::remove_file(format!("{output_arg}.png"));
    }

    assert_eq!(reports[0], reports[1]);
}

#[test]
fn simulate_fails_for_a_single_entry_history() {
    let data_file = assert_fs::NamedTempFile::new("history.csv").unwrap();
    data_file.write_str("2023-01-01,1").unwrap();
    let data_arg = data_file.path().to_str().unwrap();

    let output_file = assert_fs::NamedTempFile::new("output.yaml").unwrap();
    let output_arg = output_file.path().to_str().unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("datecast");
    cmd.args(["simulate", "-d", data_arg, "-o", output_arg, "-n", "5"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("at least two dated entries"));
}

#[test]
fn simulate_fails_for_out_of_order_history() {
    let data_file = assert_fs::NamedTempFile::new("history.csv").unwrap();
    data_file
        .write_str("2023-01-05,1\n2023-01-01,2")
        .unwrap();
    let data_arg = data_file.path().to_str().unwrap();

    let output_file = assert_fs::NamedTempFile::new("output.yaml").unwrap();
    let output_arg = output_file.path().to_str().unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("datecast");
    cmd.args(["simulate", "-d", data_arg, "-o", output_arg, "-n", "5"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not after the previous record"));
}
