use assert_cmd::Command;
use predicates::prelude::*;

fn memopad(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("memopad").unwrap();
    cmd.env("MEMOPAD_HOME", home);
    cmd
}

#[test]
fn first_run_seeds_a_note() {
    let home = tempfile::tempdir().unwrap();

    memopad(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Note 1"));

    assert!(home.path().join("memo-data.json").exists());
}

#[test]
fn write_then_show_round_trips_content() {
    let home = tempfile::tempdir().unwrap();

    memopad(home.path())
        .args(["write", "pick up the dry cleaning"])
        .assert()
        .success();

    memopad(home.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicates::str::contains("pick up the dry cleaning"));
}

#[test]
fn write_reads_stdin_when_no_argument() {
    let home = tempfile::tempdir().unwrap();

    memopad(home.path())
        .arg("write")
        .write_stdin("piped in\nfrom stdin")
        .assert()
        .success();

    memopad(home.path())
        .arg("show")
        .assert()
        .stdout(predicates::str::contains("from stdin"));
}

#[test]
fn new_note_appears_in_the_list_and_is_selected() {
    let home = tempfile::tempdir().unwrap();

    memopad(home.path()).arg("new").assert().success();

    memopad(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Note 1").and(predicates::str::contains("Note 2")));

    // Selection survives across invocations.
    memopad(home.path())
        .arg("show")
        .assert()
        .stdout(predicates::str::contains("Note 2"));
}

#[test]
fn deleting_the_last_note_is_rejected() {
    let home = tempfile::tempdir().unwrap();

    memopad(home.path())
        .arg("delete")
        .assert()
        .success()
        .stdout(predicates::str::contains("last note cannot be deleted"));

    memopad(home.path())
        .arg("list")
        .assert()
        .stdout(predicates::str::contains("Note 1"));
}

#[test]
fn select_switches_by_list_position() {
    let home = tempfile::tempdir().unwrap();

    memopad(home.path()).arg("new").assert().success();
    memopad(home.path())
        .args(["select", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Switched to: Note 1"));

    memopad(home.path())
        .arg("show")
        .assert()
        .stdout(predicates::str::contains("Note 1"));
}

#[test]
fn rename_retitles_the_current_note() {
    let home = tempfile::tempdir().unwrap();

    memopad(home.path())
        .args(["rename", "Groceries"])
        .assert()
        .success();

    memopad(home.path())
        .arg("list")
        .assert()
        .stdout(predicates::str::contains("Groceries"));
}

#[test]
fn export_writes_a_parsable_document() {
    let home = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();

    memopad(home.path())
        .args(["write", "exported body"])
        .assert()
        .success();

    memopad(home.path())
        .arg("export")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("notes-export.json"));

    let exported = std::fs::read_to_string(out.path().join("notes-export.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&exported).unwrap();
    let note = parsed.as_object().unwrap().values().next().unwrap();
    assert_eq!(note["content"], "exported body");
}

#[test]
fn clear_with_yes_reseeds_a_single_note() {
    let home = tempfile::tempdir().unwrap();

    memopad(home.path()).arg("new").assert().success();
    memopad(home.path()).arg("new").assert().success();

    memopad(home.path())
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicates::str::contains("All notes cleared"));

    memopad(home.path())
        .arg("list")
        .assert()
        .stdout(predicates::str::contains("Note 1").and(predicates::str::contains("Note 2").not()));
}

#[test]
fn corrupt_snapshot_recovers_with_a_fresh_note() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("memo-data.json"), "{ definitely not json").unwrap();

    memopad(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Note 1"));
}

#[test]
fn config_round_trips_title_policy() {
    let home = tempfile::tempdir().unwrap();

    memopad(home.path())
        .args(["config", "title-policy", "timestamp"])
        .assert()
        .success();

    memopad(home.path())
        .args(["config", "title-policy"])
        .assert()
        .success()
        .stdout(predicates::str::contains("timestamp"));
}
