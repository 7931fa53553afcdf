mod common;

use common::{JAVA_SAMPLE, TestFixture};
use predicates::prelude::*;

const JAVA_REPORT: &str = "
--- Results for: Main.java ---
Blank Lines: 3
Comment Lines: 3
Code Lines: 6
  Imports: 1
  Class Declarations: 1
  Interface Declarations: 0
  Function/Method Declarations: 1
Total Lines: 12
";

#[test]
fn no_arguments_prints_usage_and_fails() {
    linetally!()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn single_java_file_matches_reference_report() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("Main.java", JAVA_SAMPLE);

    linetally!()
        .arg(&file)
        .arg("--no-config")
        .assert()
        .success()
        .stdout(JAVA_REPORT);
}

#[test]
fn single_file_report_has_no_files_processed_line() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("util.c", "int x;\n");

    linetally!()
        .arg(&file)
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Results for: util.c ---"))
        .stdout(predicate::str::contains("Files Processed").not());
}

#[test]
fn directory_argument_prints_aggregated_totals() {
    let fixture = TestFixture::new();
    fixture.create_file("src/Main.java", JAVA_SAMPLE);

    linetally!()
        .arg(fixture.path())
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "\n--- Aggregated Totals ---\nFiles Processed: 1\nBlank Lines: 3\n",
        ))
        .stdout(predicate::str::contains("Total Lines: 12\n"));
}

#[test]
fn mixed_python_and_c_files_are_summed() {
    let fixture = TestFixture::new();
    let py = fixture.create_file(
        "tool.py",
        "import os\nfrom sys import argv\n\n# entry point\nclass Tool:\n    def run(self):\n        pass\n",
    );
    let c = fixture.create_file("lib.c", "// helpers\n/* block\n   comment */\nint add(int a, int b) {\n  return a + b;\n}\n");

    // tool.py: 8 lines (1 blank + trailing), lib.c: 7 lines (trailing blank)
    linetally!()
        .arg(&py)
        .arg(&c)
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Files Processed: 2\n"))
        .stdout(predicate::str::contains("Blank Lines: 3\n"))
        .stdout(predicate::str::contains("Comment Lines: 4\n"))
        .stdout(predicate::str::contains("Code Lines: 8\n"))
        .stdout(predicate::str::contains("  Imports: 2\n"))
        .stdout(predicate::str::contains("  Class Declarations: 1\n"))
        .stdout(predicate::str::contains("  Function/Method Declarations: 1\n"))
        .stdout(predicate::str::contains("Total Lines: 15\n"));
}

#[test]
fn only_denylisted_directories_reports_zero_files() {
    let fixture = TestFixture::new();
    fixture.create_file("node_modules/pkg/index.js", "module.exports = 1;\n");
    fixture.create_file("__pycache__/mod.py", "x = 1\n");
    fixture.create_file(".vscode/settings.js", "x;\n");

    linetally!()
        .arg(fixture.path())
        .args(["--no-config", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Files Processed: 0\n"))
        .stdout(predicate::str::contains("Code Lines: 0\n"))
        .stdout(predicate::str::contains("Total Lines: 0\n"))
        .stderr(predicate::str::contains(
            "No processable files found in the specified paths.",
        ));
}

#[test]
fn missing_path_warns_and_continues() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("a.js", "const a = require('a');\n");
    let missing = fixture.path().join("does-not-exist");

    linetally!()
        .arg(&missing)
        .arg(&file)
        .args(["--no-config", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Files Processed: 1\n"))
        .stdout(predicate::str::contains("  Imports: 1\n"))
        .stderr(predicate::str::contains("⚠ Warning: Path not found"));
}

#[test]
fn quiet_suppresses_warnings() {
    let fixture = TestFixture::new();
    let missing = fixture.path().join("nothing-here");

    linetally!()
        .arg(&missing)
        .args(["--no-config", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Files Processed: 0\n"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn json_format_for_single_file() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("Main.java", JAVA_SAMPLE);

    let output = linetally!()
        .arg(&file)
        .args(["--no-config", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["title"], "Results for: Main.java");
    assert_eq!(value["blank"], 3);
    assert_eq!(value["comment"], 3);
    assert_eq!(value["code"], 6);
    assert_eq!(value["imports"], 1);
    assert_eq!(value["class_declarations"], 1);
    assert_eq!(value["function_declarations"], 1);
    assert_eq!(value["total"], 12);
}

#[test]
fn by_language_breakdown_lists_each_language() {
    let fixture = TestFixture::new();
    fixture.create_file("a.py", "x = 1\n");
    fixture.create_file("b.js", "let y = 2;\n");

    linetally!()
        .arg(fixture.path())
        .args(["--no-config", "--by-language"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- By Language ---"))
        .stdout(predicate::str::contains("Python (1 file):"))
        .stdout(predicate::str::contains("JavaScript (1 file):"));
}

#[test]
fn exclude_option_removes_matching_files() {
    let fixture = TestFixture::new();
    fixture.create_file("app.js", "let a = 1;\n");
    fixture.create_file("vendor.min.js", "let b = 2;\nlet c = 3;\n");

    linetally!()
        .arg(fixture.path())
        .args(["--no-config", "-x", "**/*.min.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Files Processed: 1\n"));
}

#[test]
fn invalid_exclude_pattern_is_config_error() {
    let fixture = TestFixture::new();
    fixture.create_file("app.js", "let a = 1;\n");

    linetally!()
        .arg(fixture.path())
        .args(["--no-config", "--color", "never", "-x", "[oops"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("✖ InvalidPattern"));
}

#[test]
fn empty_file_reports_all_zero() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("empty.py", "");

    linetally!()
        .arg(&file)
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Blank Lines: 0\n"))
        .stdout(predicate::str::contains("Total Lines: 0\n"));
}

#[test]
fn unterminated_block_comment_is_comment() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("open.c", "/* never closed");

    linetally!()
        .arg(&file)
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Comment Lines: 1\n"))
        .stdout(predicate::str::contains("Total Lines: 1\n"));
}
