use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const DECLARATION: &str = r#"import { createTroute } from "troute";
import { a, b } from "./x";
import { c } from "./y";

export const { GET, troute } = createTroute({ a, c });
"#;

const EXPECTED: &str =
    "\"use server\"\n\nimport { a } from \"../x\";\nimport { c } from \"../y\";\n\nexport { a, c }\n";

fn troute(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("troute").unwrap();
    cmd.current_dir(dir);
    cmd
}

fn project_with_src(content: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/troute.ts"), content).unwrap();
    dir
}

#[test]
fn test_generate_default_src_path() {
    let dir = project_with_src(DECLARATION);

    troute(dir.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found troute file at src/troute.ts"))
        .stdout(predicate::str::contains("Successfully generated"));

    let output = fs::read_to_string(dir.path().join("src/.troute/actions.ts")).unwrap();
    assert_eq!(output, EXPECTED);
}

#[test]
fn test_generate_default_root_path() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("troute.ts"), DECLARATION).unwrap();

    troute(dir.path()).arg("generate").assert().success();

    let output = fs::read_to_string(dir.path().join(".troute/actions.ts")).unwrap();
    assert_eq!(output, EXPECTED);
}

#[test]
fn test_generate_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("app")).unwrap();
    fs::write(dir.path().join("app/routes.tsx"), DECLARATION).unwrap();

    troute(dir.path())
        .args(["generate", "app/routes.tsx"])
        .assert()
        .success();

    assert!(dir.path().join("app/.troute/actions.tsx").exists());
}

#[test]
fn test_generate_is_idempotent() {
    let dir = project_with_src(DECLARATION);
    let output_path = dir.path().join("src/.troute/actions.ts");

    troute(dir.path()).arg("generate").assert().success();
    let first = fs::read(&output_path).unwrap();

    troute(dir.path()).arg("generate").assert().success();
    let second = fs::read(&output_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_generate_replaces_previous_output() {
    let dir = project_with_src(DECLARATION);
    fs::create_dir(dir.path().join("src/.troute")).unwrap();
    fs::write(dir.path().join("src/.troute/actions.ts"), "stale content\n").unwrap();

    troute(dir.path()).arg("generate").assert().success();

    let output = fs::read_to_string(dir.path().join("src/.troute/actions.ts")).unwrap();
    assert_eq!(output, EXPECTED);
}

#[test]
fn test_export_order_follows_factory_call() {
    let dir = project_with_src(
        r#"import { one } from "./first";
import { two, three } from "./second";
createTroute({ three, one, two })
"#,
    );

    troute(dir.path()).arg("generate").assert().success();

    let output = fs::read_to_string(dir.path().join("src/.troute/actions.ts")).unwrap();
    assert!(output.contains("import { one } from \"../first\";\nimport { two, three } from \"../second\";\n"));
    assert!(output.ends_with("export { three, one, two }\n"));
}

#[test]
fn test_missing_declaration_fails_without_writing() {
    let dir = project_with_src("");
    fs::remove_file(dir.path().join("src/troute.ts")).unwrap();

    troute(dir.path())
        .arg("generate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Troute file not found at src/troute.ts"));

    assert!(!dir.path().join("src/.troute").exists());
}

#[test]
fn test_missing_factory_call_fails() {
    let dir = project_with_src("import { a } from \"./x\";\n");

    troute(dir.path())
        .arg("generate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not find createTroute object"));

    assert!(!dir.path().join("src/.troute").exists());
}

#[test]
fn test_unbacked_entry_point_strict_and_lenient() {
    let dir = project_with_src("import { a } from \"./x\";\ncreateTroute({ a, ghost })\n");

    troute(dir.path())
        .arg("generate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ghost"));
    assert!(!dir.path().join("src/.troute").exists());

    troute(dir.path())
        .args(["generate", "--lenient"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Entry point"));

    let output = fs::read_to_string(dir.path().join("src/.troute/actions.ts")).unwrap();
    assert!(output.ends_with("export { a, ghost }\n"));
}

#[test]
fn test_dry_run_prints_without_writing() {
    let dir = project_with_src(DECLARATION);

    troute(dir.path())
        .args(["generate", "--dry-run"])
        .assert()
        .success()
        .stdout(EXPECTED);

    assert!(!dir.path().join("src/.troute").exists());
}

#[test]
fn test_json_report() {
    let dir = project_with_src(DECLARATION);

    let assert = troute(dir.path())
        .args(["generate", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["written"], true);
    assert_eq!(report["entry_points"], serde_json::json!(["a", "c"]));
    assert_eq!(report["dropped_imports"], serde_json::json!(["troute"]));
    assert_eq!(report["imports"][0]["names"], serde_json::json!(["a"]));
}

#[test]
fn test_check_reports_stale_then_fresh() {
    let dir = project_with_src(DECLARATION);

    troute(dir.path())
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("out of date"));
    assert!(!dir.path().join("src/.troute").exists());

    troute(dir.path()).arg("generate").assert().success();

    troute(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("is up to date"));
}

#[test]
fn test_config_overrides_factory_and_output() {
    let dir = project_with_src(
        "import { a } from \"./x\";\nexport default defineRoutes({ a });\n",
    );
    fs::write(
        dir.path().join("troute.toml"),
        "[generate]\nfactory = \"defineRoutes\"\noutput_dir = \".generated\"\n",
    )
    .unwrap();

    troute(dir.path()).arg("generate").assert().success();

    let output = fs::read_to_string(dir.path().join("src/.generated/actions.ts")).unwrap();
    assert_eq!(
        output,
        "\"use server\"\n\nimport { a } from \"../x\";\n\nexport { a }\n"
    );
}

#[test]
fn test_verbose_trace_does_not_change_output() {
    let dir = project_with_src(DECLARATION);

    troute(dir.path())
        .args(["generate", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Looking for troute file"));

    let output = fs::read_to_string(dir.path().join("src/.troute/actions.ts")).unwrap();
    assert_eq!(output, EXPECTED);
}

#[test]
fn test_missing_explicit_config_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("troute.ts"), DECLARATION).unwrap();

    troute(dir.path())
        .args(["--config", "typo.toml", "generate"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config file not found at typo.toml"));

    assert!(!dir.path().join(".troute").exists());
}

#[test]
fn test_verbose_trace_reports_failure() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("troute.ts"), "export const x = 1;\n").unwrap();

    troute(dir.path())
        .args(["generate", "--verbose"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Generation failed"));
}
