use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ruler_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("artboard-ruler").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

fn seeded_storage() -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("ruler.json"),
        r#"{"board-a":[{"id":"g1","axis":"vertical","position":120.0},{"id":"g1","axis":"vertical","position":5.0}],"board-b":[]}"#,
    )
    .unwrap();
    temp
}

#[test]
fn help_describes_tool() {
    let home = TempDir::new().unwrap();
    ruler_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Inspect artboard guide lines and ruler layout",
        ));
}

#[test]
fn no_flags_prints_usage() {
    let home = TempDir::new().unwrap();
    ruler_cmd(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("--delete-artboard <ARTBOARD>"));
}

#[test]
fn list_shows_each_artboard() {
    let home = TempDir::new().unwrap();
    let storage = seeded_storage();
    ruler_cmd(&home)
        .arg("--list")
        .arg("--storage-dir")
        .arg(storage.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("board-a\t2 guide line(s)"))
        .stdout(predicate::str::contains("board-b\t0 guide line(s)"));
}

#[test]
fn show_prints_deduplicated_lines() {
    let home = TempDir::new().unwrap();
    let storage = seeded_storage();
    ruler_cmd(&home)
        .args(["--show", "board-a", "--storage-dir"])
        .arg(storage.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"position\": 120.0"))
        .stdout(predicate::str::contains("5.0").not());
}

#[test]
fn delete_artboard_rewrites_storage() {
    let home = TempDir::new().unwrap();
    let storage = seeded_storage();
    ruler_cmd(&home)
        .args(["--delete-artboard", "board-a", "--storage-dir"])
        .arg(storage.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted guide lines for artboard board-a"));

    let contents = std::fs::read_to_string(storage.path().join("ruler.json")).unwrap();
    assert_eq!(contents, r#"{"board-b":[]}"#);
}

#[test]
fn list_with_empty_storage_dir() {
    let home = TempDir::new().unwrap();
    let storage = TempDir::new().unwrap();
    ruler_cmd(&home)
        .arg("--list")
        .arg("--storage-dir")
        .arg(storage.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No stored guide lines"));
}

#[test]
fn ticks_requires_zoom() {
    let home = TempDir::new().unwrap();
    ruler_cmd(&home)
        .arg("--ticks")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn ticks_prints_labels_for_viewport() {
    let home = TempDir::new().unwrap();
    ruler_cmd(&home)
        .args([
            "--ticks", "--zoom", "1", "--width", "300", "--height", "200",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("interval: 100"))
        .stdout(predicate::str::contains("x: 0 100 200\n"))
        .stdout(predicate::str::contains("y: 0 100\n"));
}

#[test]
fn ticks_follow_negative_pan() {
    let home = TempDir::new().unwrap();
    ruler_cmd(&home)
        .args([
            "--ticks", "--zoom", "2", "--pan-x", "-100", "--width", "100", "--height", "40",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("interval: 25"))
        .stdout(predicate::str::contains("x: 50 75\n"));
}

#[test]
fn zero_zoom_is_rejected() {
    let home = TempDir::new().unwrap();
    ruler_cmd(&home)
        .args(["--ticks", "--zoom", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot lay out ruler"));
}
