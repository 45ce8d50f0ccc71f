// ABOUTME: Black-box tests for the territory binary - subcommands and config lookup.
// ABOUTME: Runs each command in a temp dir with HOME pointed at another temp dir.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

const GRANTS: &str = r#"{
    "distributors": {
        "DISTRIBUTOR1": {
            "include": ["INDIA", "UNITEDSTATES"],
            "exclude": ["KARNATAKA-INDIA"]
        },
        "DISTRIBUTOR3": { "include": ["HUBLI-KARNATAKA-INDIA"] }
    }
}"#;

const OTHER_GRANTS: &str = r#"{
    "distributors": {
        "DISTRIBUTOR1": { "exclude": ["INDIA"] }
    }
}"#;

fn territory_in(cwd: &Path, home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_territory"));
    // Keep ./.territory.json, ~/.territory.json and .env lookups inside temp dirs
    cmd.current_dir(cwd)
        .env("HOME", home)
        .env_remove("TERRITORY_GRANTS")
        .env_remove("RUST_LOG");
    cmd
}

fn territory(dir: &TempDir) -> Command {
    territory_in(dir.path(), dir.path())
}

fn write_grants(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("grants.json");
    std::fs::write(&path, GRANTS).expect("failed to write grants");
    path
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    let out = territory(&dir)
        .arg("--help")
        .output()
        .expect("failed to run --help");
    let s = String::from_utf8_lossy(&out.stdout);

    for sub in ["check", "list", "demo", "repl"] {
        assert!(s.contains(sub), "help should mention {}: {}", sub, s);
    }
}

#[test]
fn check_granted_region() {
    let dir = TempDir::new().unwrap();
    let grants = write_grants(&dir);
    let out = territory(&dir)
        .arg("--grants")
        .arg(&grants)
        .args(["check", "DISTRIBUTOR1", "INDIA"])
        .output()
        .expect("failed to run check");

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "true");
}

#[test]
fn check_does_not_infer_containment() {
    let dir = TempDir::new().unwrap();
    let grants = write_grants(&dir);
    let out = territory(&dir)
        .arg("--grants")
        .arg(&grants)
        .args(["check", "DISTRIBUTOR1", "CHICAGO-ILLINOIS-UNITEDSTATES"])
        .output()
        .expect("failed to run check");

    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "false");
}

#[test]
fn check_explain_reports_reason() {
    let dir = TempDir::new().unwrap();
    let grants = write_grants(&dir);

    let cases = [
        ("DISTRIBUTOR1", "INDIA", "granted"),
        ("DISTRIBUTOR1", "KARNATAKA-INDIA", "excluded"),
        ("DISTRIBUTOR3", "KARNATAKA-INDIA", "not-included"),
        ("NOBODY", "INDIA", "unknown-distributor"),
    ];
    for (distributor, region, expected) in cases {
        let out = territory(&dir)
            .arg("--grants")
            .arg(&grants)
            .args(["check", distributor, region, "--explain"])
            .output()
            .expect("failed to run check --explain");
        assert_eq!(
            String::from_utf8_lossy(&out.stdout).trim(),
            expected,
            "{} {}",
            distributor,
            region
        );
    }
}

#[test]
fn grants_from_environment() {
    let dir = TempDir::new().unwrap();
    let grants = write_grants(&dir);
    let out = territory(&dir)
        .env("TERRITORY_GRANTS", &grants)
        .args(["check", "DISTRIBUTOR3", "HUBLI-KARNATAKA-INDIA"])
        .output()
        .expect("failed to run check");

    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "true");
}

#[test]
fn grants_from_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".territory.json"), GRANTS).unwrap();
    let out = territory(&dir)
        .args(["check", "DISTRIBUTOR1", "UNITEDSTATES"])
        .output()
        .expect("failed to run check");

    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "true");
}

#[test]
fn missing_grant_file_fails() {
    let dir = TempDir::new().unwrap();
    let out = territory(&dir)
        .args(["--grants", "does-not-exist.json", "list"])
        .output()
        .expect("failed to run list");

    assert_ne!(out.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("does-not-exist.json"), "stderr was: {}", stderr);
}

#[test]
fn list_prints_sorted_json() {
    let dir = TempDir::new().unwrap();
    let grants = write_grants(&dir);
    let out = territory(&dir)
        .arg("--grants")
        .arg(&grants)
        .arg("list")
        .output()
        .expect("failed to run list");
    let stdout = String::from_utf8_lossy(&out.stdout);

    let first = stdout.find("DISTRIBUTOR1").expect("DISTRIBUTOR1 listed");
    let third = stdout.find("DISTRIBUTOR3").expect("DISTRIBUTOR3 listed");
    assert!(first < third, "stdout was: {}", stdout);
    assert!(stdout.contains("KARNATAKA-INDIA"));
}

#[test]
fn demo_prints_sample_checks() {
    let dir = TempDir::new().unwrap();
    let out = territory(&dir)
        .arg("demo")
        .output()
        .expect("failed to run demo");
    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<_> = stdout.lines().collect();

    assert_eq!(lines.len(), 7, "stdout was: {}", stdout);
    assert_eq!(lines[0], "DISTRIBUTOR1 CHICAGO-ILLINOIS-UNITEDSTATES false");
    assert_eq!(lines[5], "DISTRIBUTOR3 HUBLI-KARNATAKA-INDIA true");
    assert_eq!(lines.iter().filter(|l| l.ends_with(" true")).count(), 1);
}

#[test]
fn grants_flag_beats_environment() {
    let dir = TempDir::new().unwrap();
    let from_env = write_grants(&dir);
    let from_flag = dir.path().join("other.json");
    std::fs::write(&from_flag, OTHER_GRANTS).unwrap();

    let out = territory(&dir)
        .env("TERRITORY_GRANTS", &from_env)
        .arg("--grants")
        .arg(&from_flag)
        .args(["check", "DISTRIBUTOR1", "INDIA", "--explain"])
        .output()
        .expect("failed to run check");

    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "excluded");
}

#[test]
fn grants_from_dotenv_file() {
    let dir = TempDir::new().unwrap();
    let grants = write_grants(&dir);
    std::fs::write(
        dir.path().join(".env"),
        format!("TERRITORY_GRANTS={}\n", grants.display()),
    )
    .unwrap();

    let out = territory(&dir)
        .args(["check", "DISTRIBUTOR3", "HUBLI-KARNATAKA-INDIA"])
        .output()
        .expect("failed to run check");

    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "true");
}

#[test]
fn grants_from_home_directory() {
    let home = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();
    std::fs::write(home.path().join(".territory.json"), GRANTS).unwrap();

    let out = territory_in(cwd.path(), home.path())
        .args(["check", "DISTRIBUTOR1", "UNITEDSTATES"])
        .output()
        .expect("failed to run check");

    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "true");
}

#[test]
fn working_directory_beats_home_directory() {
    let home = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();
    std::fs::write(home.path().join(".territory.json"), GRANTS).unwrap();
    std::fs::write(cwd.path().join(".territory.json"), OTHER_GRANTS).unwrap();

    let out = territory_in(cwd.path(), home.path())
        .args(["check", "DISTRIBUTOR1", "INDIA", "--explain"])
        .output()
        .expect("failed to run check");

    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "excluded");
}

#[test]
fn no_grant_file_means_empty_registry() {
    let home = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();

    let out = territory_in(cwd.path(), home.path())
        .args(["check", "DISTRIBUTOR1", "INDIA", "--explain"])
        .output()
        .expect("failed to run check");

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout).trim(),
        "unknown-distributor"
    );
}
