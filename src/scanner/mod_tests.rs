use std::fs;
use std::path::Path;

use super::*;
use tempfile::TempDir;

struct AcceptAllFilter;

impl FileFilter for AcceptAllFilter {
    fn should_include(&self, _path: &Path) -> bool {
        true
    }
}

struct JavaOnlyFilter;

impl FileFilter for JavaOnlyFilter {
    fn should_include(&self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == "java")
    }
}

fn file_names(files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn scanner_finds_files_in_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.py"), "x = 1").unwrap();
    fs::write(temp_dir.path().join("b.c"), "int x;").unwrap();

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let result = scanner.scan(temp_dir.path());

    assert_eq!(file_names(&result.files), vec!["a.py", "b.c"]);
    assert!(result.warnings.is_empty());
}

#[test]
fn scanner_walks_subdirectories_in_name_order() {
    let temp_dir = TempDir::new().unwrap();
    let src = temp_dir.path().join("src");
    fs::create_dir_all(src.join("deep")).unwrap();
    fs::write(src.join("deep").join("z.js"), "").unwrap();
    fs::write(src.join("b.js"), "").unwrap();
    fs::write(temp_dir.path().join("a.js"), "").unwrap();

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let result = scanner.scan(temp_dir.path());

    assert_eq!(file_names(&result.files), vec!["a.js", "b.js", "z.js"]);
}

#[test]
fn scanner_respects_include_filter() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("Main.java"), "").unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "").unwrap();

    let scanner = DirectoryScanner::new(JavaOnlyFilter);
    let result = scanner.scan(temp_dir.path());

    assert_eq!(file_names(&result.files), vec!["Main.java"]);
}

#[test]
fn scanner_skips_denylisted_directories() {
    let temp_dir = TempDir::new().unwrap();
    for dir in [".git", "node_modules", "__pycache__", "build"] {
        let path = temp_dir.path().join(dir);
        fs::create_dir_all(&path).unwrap();
        fs::write(path.join("hidden.js"), "var x;").unwrap();
    }
    fs::write(temp_dir.path().join("kept.js"), "var y;").unwrap();

    let scanner = DirectoryScanner::new(PathFilter::default());
    let result = scanner.scan(temp_dir.path());

    assert_eq!(file_names(&result.files), vec!["kept.js"]);
}

#[test]
fn scanner_only_denylisted_content_yields_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let git = temp_dir.path().join(".git");
    fs::create_dir_all(git.join("objects")).unwrap();
    fs::write(git.join("HEAD"), "ref: refs/heads/main").unwrap();

    let scanner = DirectoryScanner::new(PathFilter::default());
    let result = scanner.scan(temp_dir.path());

    assert!(result.files.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn explicit_root_named_like_skip_dir_is_walked() {
    let temp_dir = TempDir::new().unwrap();
    let build = temp_dir.path().join("build");
    fs::create_dir_all(&build).unwrap();
    fs::write(build.join("gen.c"), "int x;").unwrap();

    let scanner = DirectoryScanner::new(PathFilter::default());
    let result = scanner.scan(&build);

    assert_eq!(file_names(&result.files), vec!["gen.c"]);
}

#[test]
fn scanning_a_file_returns_it() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("one.py");
    fs::write(&file, "pass").unwrap();

    let scanner = DirectoryScanner::new(PathFilter::default());
    let result = scanner.scan(&file);

    assert_eq!(result.files, vec![file]);
}

#[test]
fn missing_path_produces_warning() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    let scanner = DirectoryScanner::new(PathFilter::default());
    let result = scanner.scan(&missing);

    assert!(result.files.is_empty());
    assert_eq!(result.warnings.len(), 1);
    assert!(matches!(&result.warnings[0], ScanWarning::NotFound(p) if p == &missing));
    assert!(result.warnings[0].to_string().contains("Path not found"));
}

#[test]
fn scan_all_concatenates_in_input_order() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    fs::write(first.path().join("b.py"), "").unwrap();
    fs::write(second.path().join("a.py"), "").unwrap();
    let missing = first.path().join("nope");

    let scanner = DirectoryScanner::new(PathFilter::default());
    let result = scanner.scan_all(&[
        first.path().to_path_buf(),
        missing,
        second.path().to_path_buf(),
    ]);

    assert_eq!(file_names(&result.files), vec!["b.py", "a.py"]);
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn exclude_patterns_apply_to_walked_files() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("app.js"), "").unwrap();
    fs::write(temp_dir.path().join("app.min.js"), "").unwrap();

    let filter = PathFilter::new(&[], &["**/*.min.js".to_string()]).unwrap();
    let scanner = DirectoryScanner::new(filter);
    let result = scanner.scan(temp_dir.path());

    assert_eq!(file_names(&result.files), vec!["app.js"]);
}
