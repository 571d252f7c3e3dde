use assert_cmd::Command;

mod common;

#[test]
fn outputs_tool_name() {
    let mut cmd = Command::cargo_bin("yoloset").unwrap();
    cmd.arg("-V");
    cmd.assert()
        .success()
        .stdout(predicates::str::starts_with("yoloset "));
}

#[test]
fn help_lists_both_directories() {
    let mut cmd = Command::cargo_bin("yoloset").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("--input_dir"))
        .stdout(predicates::str::contains("--output_dir"));
}

#[test]
fn unknown_flag_is_rejected() {
    let mut cmd = Command::cargo_bin("yoloset").unwrap();
    cmd.args(["--seed", "7"]);
    cmd.assert().failure();
}

#[test]
fn empty_input_dir_exits_cleanly_without_output() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let input = temp.path().join("input");
    std::fs::create_dir_all(&input).expect("create input");
    let output = temp.path().join("out");

    let mut cmd = Command::cargo_bin("yoloset").unwrap();
    cmd.env("RUST_LOG", "info");
    cmd.arg("--input_dir").arg(&input).arg("--output_dir").arg(&output);
    cmd.assert()
        .success()
        .stderr(predicates::str::contains("No LabelMe JSON files found"));

    assert!(!output.exists());
}

#[test]
fn converts_directory_and_prints_summary() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let input = temp.path().join("input");
    let output = temp.path().join("out");
    common::write_board_dataset(&input);

    let mut cmd = Command::cargo_bin("yoloset").unwrap();
    cmd.arg("--input_dir").arg(&input).arg("--output_dir").arg(&output);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Converted 10 of 10 record(s)"))
        .stdout(predicates::str::contains("train: 8 record(s)"))
        .stdout(predicates::str::contains("data.yaml"));

    assert!(output.join("data.yaml").is_file());
    assert!(output.join("val/labels").is_dir());
}

#[test]
fn bad_records_do_not_fail_the_run() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let input = temp.path().join("input");
    let output = temp.path().join("out");
    std::fs::create_dir_all(&input).expect("create input");
    std::fs::copy(
        "tests/fixtures/no_image_path.json",
        input.join("no_image_path.json"),
    )
    .expect("copy fixture");
    std::fs::write(input.join("garbage.json"), "not json").expect("write garbage");

    let mut cmd = Command::cargo_bin("yoloset").unwrap();
    cmd.env("RUST_LOG", "info");
    cmd.arg("--input_dir").arg(&input).arg("--output_dir").arg(&output);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Converted 0 of 2 record(s)"))
        .stdout(predicates::str::contains("Errors (2):"))
        .stderr(predicates::str::contains("imagePath"));
}
