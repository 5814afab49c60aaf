use std::{path::PathBuf, process::Command};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_floorplan"))
        .args(args)
        .output()
        .expect("failed to launch floorplan binary");

    assert!(
        output.status.success(),
        "floorplan exited with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("output is utf-8")
}

#[test]
fn json_report_reflects_replayed_session() {
    let session = fixture("drag_session.toml");
    let stdout = run(&[
        session.to_str().expect("fixture path is utf-8"),
        "--format",
        "json",
    ]);
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");

    let rooms = report["rooms"].as_array().expect("rooms array");
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0]["name"], "Bathroom");
    assert_eq!(rooms[0]["rect"]["x"], 40.0);
    assert_eq!(rooms[0]["rect"]["y"], 60.0);
    assert_eq!(rooms[0]["id"], 0);
    assert_eq!(rooms[1]["id"], 1);
    assert_eq!(rooms[1]["vastu_compliant"], true);
    assert_eq!(report["selection"], 0);
    assert_eq!(report["compliance_score"], 72.5);
    assert!(report.get("frame").is_none(), "frame only on request");
}

#[test]
fn replay_is_deterministic() {
    let session = fixture("drag_session.toml");
    let path = session.to_str().expect("fixture path is utf-8");

    let first = run(&[path, "--format", "json", "--frame"]);
    let second = run(&[path, "--format", "json", "--frame"]);

    assert_eq!(first, second, "replay diverged between runs");
}

#[test]
fn summary_lists_rooms_and_selection() {
    let session = fixture("drag_session.toml");
    let stdout = run(&[session.to_str().expect("fixture path is utf-8")]);

    assert!(stdout.starts_with("plot 400 × 400, zoom 100%, 2 rooms"), "{stdout}");
    assert!(stdout.contains(", 1 compliant"), "{stdout}");
    assert!(stdout.contains("* #0 Bathroom at (40, 60) 80' × 80'"), "{stdout}");
    assert!(stdout.contains("  #1 Kitchen at (80, 0) 120' × 100' [ok]"), "{stdout}");
    assert!(stdout.contains("compliance score 72.5"), "{stdout}");
}

#[test]
fn missing_session_file_fails_with_context() {
    let output = Command::new(env!("CARGO_BIN_EXE_floorplan"))
        .arg(fixture("does_not_exist.toml"))
        .output()
        .expect("failed to launch floorplan binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read session file"), "{stderr}");
}
