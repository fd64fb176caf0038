//! CLI end-to-end tests for `fix-imports`.
//!
//! These tests spawn the actual binary inside a temp workspace and check
//! stdout, exit codes, and the files on disk.
//!
//! Exit code expectations:
//! - 0: Pass completed (with or without changes)
//! - 2: Invalid arguments
//! - 3: `src/components/ui` not found
//! - 4: A component file cannot be written (read-only)
//! - 5: A component file is not UTF-8

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;

const CN_ALIAS: &str = r#"import { cn } from "@/lib/utils";"#;
const CN_RELATIVE: &str = r#"import { cn } from "../../lib/utils";"#;
const BUTTON_ALIAS: &str = r#"import { buttonVariants } from "@/components/ui/button";"#;
const BUTTON_RELATIVE: &str = r#"import { buttonVariants } from "./button";"#;

/// Run fix-imports in `cwd` and return (stdout, stderr, exit_code).
fn run_fix_imports(cwd: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_fix-imports"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute fix-imports");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Create a temp workspace with `src/components/ui` populated from `files`.
fn setup_workspace(files: &[(&str, &str)]) -> (tempfile::TempDir, PathBuf) {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let ui = temp.path().join("src/components/ui");
    fs::create_dir_all(&ui).expect("failed to create ui dir");
    for (name, content) in files {
        fs::write(ui.join(name), content).expect("failed to write component");
    }
    (temp, ui)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("failed to read file")
}

// ============================================================================
// Default run (relative directory)
// ============================================================================

#[test]
fn fixes_components_and_prints_relative_paths() {
    let (temp, ui) = setup_workspace(&[
        ("card.tsx", CN_ALIAS),
        ("pagination.tsx", BUTTON_ALIAS),
        ("dialog.tsx", &format!("{}\n{}\n", CN_ALIAS, BUTTON_ALIAS)),
        ("label.tsx", "export {}\n"),
    ]);

    let (stdout, _stderr, exit_code) = run_fix_imports(temp.path(), &[]);

    assert_eq!(exit_code, 0);
    assert_eq!(
        stdout,
        "Fixed imports in src/components/ui/card.tsx\n\
         Fixed imports in src/components/ui/dialog.tsx\n\
         Fixed imports in src/components/ui/pagination.tsx\n"
    );
    assert_eq!(read(&ui.join("card.tsx")), CN_RELATIVE);
    assert_eq!(read(&ui.join("pagination.tsx")), BUTTON_RELATIVE);
    assert_eq!(
        read(&ui.join("dialog.tsx")),
        format!("{}\n{}\n", CN_RELATIVE, BUTTON_RELATIVE)
    );
    assert_eq!(read(&ui.join("label.tsx")), "export {}\n");
}

#[test]
fn non_component_files_are_left_alone() {
    let (temp, ui) = setup_workspace(&[("utils.ts", CN_ALIAS), ("README.md", BUTTON_ALIAS)]);

    let (stdout, _stderr, exit_code) = run_fix_imports(temp.path(), &[]);

    assert_eq!(exit_code, 0);
    assert!(stdout.is_empty());
    assert_eq!(read(&ui.join("utils.ts")), CN_ALIAS);
    assert_eq!(read(&ui.join("README.md")), BUTTON_ALIAS);
}

#[test]
fn second_run_is_silent_and_changes_nothing() {
    let (temp, ui) = setup_workspace(&[("card.tsx", CN_ALIAS)]);

    let (first, _, code1) = run_fix_imports(temp.path(), &[]);
    let after_first = read(&ui.join("card.tsx"));
    let (second, _, code2) = run_fix_imports(temp.path(), &[]);

    assert_eq!((code1, code2), (0, 0));
    assert!(!first.is_empty());
    assert!(second.is_empty());
    assert_eq!(read(&ui.join("card.tsx")), after_first);
}

// ============================================================================
// --workspace and --format json
// ============================================================================

#[test]
fn workspace_flag_points_at_another_root() {
    let (temp, ui) = setup_workspace(&[("card.tsx", CN_ALIAS)]);
    let elsewhere = tempfile::tempdir().expect("failed to create temp dir");
    let root = temp.path().to_str().expect("utf-8 temp path");

    let (stdout, _stderr, exit_code) =
        run_fix_imports(elsewhere.path(), &["--workspace", root]);

    assert_eq!(exit_code, 0);
    assert_eq!(
        stdout,
        format!("Fixed imports in {}\n", ui.join("card.tsx").display())
    );
    assert_eq!(read(&ui.join("card.tsx")), CN_RELATIVE);
}

#[test]
fn json_format_reports_fixed_files() {
    let (temp, _ui) = setup_workspace(&[
        ("card.tsx", &format!("{}\n{}\n", CN_ALIAS, CN_ALIAS)),
        ("label.tsx", "export {}\n"),
    ]);

    let (stdout, _stderr, exit_code) = run_fix_imports(temp.path(), &["--format", "json"]);

    assert_eq!(exit_code, 0);
    let json: Value = serde_json::from_str(&stdout).expect("stdout should be valid JSON");
    assert_eq!(json["status"], "ok");
    assert_eq!(json["schema_version"], "1");
    assert_eq!(json["directory"], "src/components/ui");
    assert_eq!(json["scanned"], 2);
    assert_eq!(json["fixed"][0]["path"], "src/components/ui/card.tsx");
    assert_eq!(json["fixed"][0]["replacements"][0]["count"], 2);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn missing_directory_returns_exit_3() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");

    let (stdout, stderr, exit_code) = run_fix_imports(temp.path(), &[]);

    assert_eq!(exit_code, 3, "expected exit 3, stderr: {}", stderr);
    assert!(stdout.is_empty());
    assert!(stderr.contains("directory not found: src/components/ui"));
}

#[test]
fn missing_directory_in_json_mode_prints_error_response() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");

    let (stdout, _stderr, exit_code) = run_fix_imports(temp.path(), &["--format", "json"]);

    assert_eq!(exit_code, 3);
    let json: Value = serde_json::from_str(&stdout).expect("stdout should be valid JSON");
    assert_eq!(json["status"], "error");
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["path"], "src/components/ui");
}

#[test]
fn non_utf8_component_returns_exit_5_after_earlier_fixes() {
    let (temp, ui) = setup_workspace(&[("a.tsx", CN_ALIAS)]);
    fs::write(ui.join("b.tsx"), [0xff, 0xfe, 0x00]).expect("failed to write binary file");

    let (stdout, _stderr, exit_code) = run_fix_imports(temp.path(), &[]);

    assert_eq!(exit_code, 5);
    assert_eq!(stdout, "Fixed imports in src/components/ui/a.tsx\n");
    assert_eq!(read(&ui.join("a.tsx")), CN_RELATIVE);
}

#[cfg(unix)]
#[test]
fn read_only_component_returns_exit_4() {
    use std::os::unix::fs::PermissionsExt;

    let (temp, ui) = setup_workspace(&[("card.tsx", CN_ALIAS)]);
    fs::set_permissions(ui.join("card.tsx"), fs::Permissions::from_mode(0o444))
        .expect("failed to make component read-only");

    let (stdout, stderr, exit_code) = run_fix_imports(temp.path(), &[]);

    assert_eq!(exit_code, 4, "expected exit 4, stderr: {}", stderr);
    assert!(stdout.is_empty());
    assert!(
        stderr.contains("error: permission denied: src/components/ui/card.tsx"),
        "unexpected stderr: {}",
        stderr
    );
    assert_eq!(read(&ui.join("card.tsx")), CN_ALIAS);
}

#[cfg(unix)]
#[test]
fn symlinked_component_is_fixed_in_place() {
    let (temp, ui) = setup_workspace(&[]);
    let shared = temp.path().join("src/shared.tsx");
    fs::write(&shared, CN_ALIAS).expect("failed to write shared component");
    std::os::unix::fs::symlink("../../shared.tsx", ui.join("card.tsx"))
        .expect("failed to create symlink");

    let (stdout, _stderr, exit_code) = run_fix_imports(temp.path(), &[]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "Fixed imports in src/components/ui/card.tsx\n");
    let link_meta = fs::symlink_metadata(ui.join("card.tsx")).expect("link metadata");
    assert!(link_meta.file_type().is_symlink());
    assert_eq!(read(&shared), CN_RELATIVE);
}

#[test]
fn invalid_argument_returns_exit_2() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");

    let (_stdout, _stderr, exit_code) = run_fix_imports(temp.path(), &["--format", "xml"]);

    assert_eq!(exit_code, 2);
}

#[test]
fn logs_go_to_stderr_only() {
    let (temp, _ui) = setup_workspace(&[("card.tsx", CN_ALIAS)]);

    let (stdout, stderr, exit_code) =
        run_fix_imports(temp.path(), &["--log-level", "info"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "Fixed imports in src/components/ui/card.tsx\n");
    assert!(stderr.contains("fixed imports"));
}
