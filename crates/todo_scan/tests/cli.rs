// crates/todo_scan/tests/cli.rs

mod cli {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use std::fs;
    use std::path::Path;
    use tempfile::{tempdir, TempDir};

    const AUTH_RS: &str = "fn main() {\n    // TODO: add validation\n    let x = 1;\n    // FIXME: urgent null check!!!\n}\n";

    fn project() -> TempDir {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/auth.rs"), AUTH_RS).unwrap();
        dir
    }

    fn todo_scan(dir: &Path) -> Command {
        let mut cmd = Command::cargo_bin("todo-scan").unwrap();
        cmd.current_dir(dir).env_remove("TODO_MARKERS").env_remove("RUST_LOG");
        cmd
    }

    #[test]
    fn scan_lists_items_with_summary() {
        let dir = project();
        todo_scan(dir.path())
            .arg("scan")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "src/auth.rs:2:8 [medium] TODO // TODO: add validation",
            ))
            .stdout(predicate::str::contains(
                "src/auth.rs:4:8 [high] FIXME // FIXME: urgent null check!!!",
            ))
            .stdout(predicate::str::contains("2 TODOs in 1 file"));
    }

    #[test]
    fn scan_skips_hidden_and_build_directories() {
        let dir = project();
        fs::create_dir_all(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join(".git/notes"), "TODO: hidden\n").unwrap();
        fs::create_dir_all(dir.path().join("target")).unwrap();
        fs::write(dir.path().join("target/out.rs"), "// TODO: generated\n").unwrap();

        todo_scan(dir.path())
            .arg("scan")
            .assert()
            .success()
            .stdout(predicate::str::contains("hidden").not())
            .stdout(predicate::str::contains("generated").not())
            .stdout(predicate::str::contains("2 TODOs in 1 file"));
    }

    #[test]
    fn scan_with_context_marks_the_target_line() {
        let dir = project();
        todo_scan(dir.path())
            .args(["scan", "--context", "src/auth.rs"])
            .assert()
            .success()
            .stdout(predicate::str::contains("    >>>     // TODO: add validation"));
    }

    #[test]
    fn scan_json_is_an_array_of_items() {
        let dir = project();
        let output = todo_scan(dir.path())
            .args(["scan", "--json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let items: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let items = items.as_array().expect("expected a JSON array");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["pattern"], "TODO");
        assert_eq!(items[0]["line_number"], 1);
        assert_eq!(items[0]["priority"], "medium");
        assert_eq!(items[1]["pattern"], "FIXME");
        assert_eq!(items[1]["priority"], "high");
        assert!(items[1]["linked_issue_id"].is_null());
    }

    #[test]
    fn markers_flag_replaces_defaults() {
        let dir = project();
        fs::write(dir.path().join("src/notes.rs"), "// NOTE: remember this\n").unwrap();

        todo_scan(dir.path())
            .args(["--markers", "NOTE", "scan"])
            .assert()
            .success()
            .stdout(predicate::str::contains("src/notes.rs:1:4 [medium] NOTE"))
            .stdout(predicate::str::contains("TODO // TODO").not())
            .stdout(predicate::str::contains("1 TODO in 1 file"));
    }

    #[test]
    fn markers_env_is_used_without_flag() {
        let dir = project();
        todo_scan(dir.path())
            .env("TODO_MARKERS", "FIXME")
            .arg("scan")
            .assert()
            .success()
            .stdout(predicate::str::contains("FIXME // FIXME"))
            .stdout(predicate::str::contains("TODO // TODO").not())
            .stdout(predicate::str::contains("1 TODO in 1 file"));
    }

    #[test]
    fn link_rewrites_the_file_once() {
        let dir = project();
        todo_scan(dir.path())
            .args(["link", "src/auth.rs", "2", "ABC-123"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Linked src/auth.rs:2 to ABC-123"))
            .stdout(predicate::str::contains("// [ABC-123] TODO: add validation"));

        let content = fs::read_to_string(dir.path().join("src/auth.rs")).unwrap();
        assert_eq!(
            content,
            AUTH_RS.replace("// TODO: add", "// [ABC-123] TODO: add")
        );

        todo_scan(dir.path())
            .args(["link", "src/auth.rs", "2", "XYZ-9"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "src/auth.rs:2 is already linked to ABC-123",
            ));

        let unchanged = fs::read_to_string(dir.path().join("src/auth.rs")).unwrap();
        assert_eq!(unchanged, content);

        todo_scan(dir.path())
            .arg("scan")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "src/auth.rs:2:18 [medium] TODO // [ABC-123] TODO: add validation -> ABC-123",
            ));
    }

    #[test]
    fn link_rejects_malformed_issue_ids() {
        let dir = project();
        todo_scan(dir.path())
            .args(["link", "src/auth.rs", "2", "not-an-id"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid issue id 'not-an-id'"));

        let content = fs::read_to_string(dir.path().join("src/auth.rs")).unwrap();
        assert_eq!(content, AUTH_RS);
    }

    #[test]
    fn link_fails_on_a_line_without_marker() {
        let dir = project();
        todo_scan(dir.path())
            .args(["link", "src/auth.rs", "3", "ABC-1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No marker"));
    }

    #[test]
    fn line_zero_is_rejected() {
        let dir = project();
        todo_scan(dir.path())
            .args(["draft", "src/auth.rs", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Line numbers start at 1"));
    }

    #[test]
    fn draft_prints_title_priority_and_description() {
        let dir = project();
        todo_scan(dir.path())
            .args(["draft", "src/auth.rs", "4"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Title: urgent null check!!! • auth.rs:4",
            ))
            .stdout(predicate::str::contains("Priority: 2"))
            .stdout(predicate::str::contains("**Location:** `src/auth.rs:4`"))
            .stdout(predicate::str::contains("```rs"));
    }

    #[test]
    fn draft_impact_overrides_priority() {
        let dir = project();
        todo_scan(dir.path())
            .args(["draft", "src/auth.rs", "4", "--impact", "low", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"priority\": 4"));
    }

    #[test]
    fn missing_path_is_an_error() {
        let dir = project();
        todo_scan(dir.path())
            .args(["scan", "nowhere"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("does not exist"));
    }
}
