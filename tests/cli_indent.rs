// tests/cli_indent.rs
use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::cargo_bin("textfix").unwrap()
}

#[test]
fn report_only_tallies_leading_whitespace() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("src.cs");
    std::fs::write(&file, "\t\t  x\n").unwrap();

    bin()
        .arg("indent")
        .arg(&file)
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("tabs=2, spaces=2"))
        .stdout(predicate::str::contains(" -> ").not());

    assert_eq!(std::fs::read(&file).unwrap(), b"\t\t  x\n");
}

#[test]
fn tabs_to_spaces_rewrites_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("src.cs");
    std::fs::write(&file, "\t\t  x\n").unwrap();

    bin()
        .arg("indent")
        .arg(&file)
        .args(["-m", "t2s", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tabs=2, spaces=2 -> tabs=0, spaces=10"));

    assert_eq!(std::fs::read(&file).unwrap(), b"          x\n");
}

#[test]
fn spaces_to_tabs_respects_tab_size() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("src.cs");
    std::fs::write(&file, "          x\n").unwrap();

    bin()
        .arg("indent")
        .arg(&file)
        .args(["-m", "s2t", "-s", "4", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-> tabs=2, spaces=2"));

    assert_eq!(std::fs::read(&file).unwrap(), b"\t\t  x\n");
}

#[test]
fn zero_tab_size_is_rejected_before_scanning() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("src.cs");
    std::fs::write(&file, "\tx\n").unwrap();

    bin()
        .arg("indent")
        .arg(&file)
        .args(["-m", "t2s", "-s", "0", "-q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive"));

    assert_eq!(std::fs::read(&file).unwrap(), b"\tx\n");
}

#[test]
fn verbatim_literal_interior_is_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("src.cs");
    let text = concat!(
        "\tvar s = @\"start\n",
        "\t\tkeeps\ttabs\n",
        "end\";\n",
        "\tafter\n",
    );
    std::fs::write(&file, text).unwrap();

    bin().arg("indent").arg(&file).args(["-m", "t2s", "-q"]).assert().success();

    let expected = concat!(
        "    var s = @\"start\n",
        "\t\tkeeps\ttabs\n",
        "end\";\n",
        "    after\n",
    );
    assert_eq!(std::fs::read_to_string(&file).unwrap(), expected);
}

#[test]
fn conversion_with_output_keeps_the_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.py");
    let output = dir.path().join("out.py");
    std::fs::write(&input, "    x\n").unwrap();

    bin()
        .arg("indent")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["-m", "s2t", "-q"])
        .assert()
        .success();

    assert_eq!(std::fs::read(&input).unwrap(), b"    x\n");
    assert_eq!(std::fs::read(&output).unwrap(), b"\tx\n");
}

#[test]
fn json_report_carries_both_tallies() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("src.cs");
    std::fs::write(&file, "\tx\n").unwrap();

    let assert =
        bin().arg("indent").arg(&file).args(["-m", "t2s", "--json", "-q"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["before"]["tabs"], 1);
    assert_eq!(value["rewrite"]["after"]["spaces"], 4);
}
