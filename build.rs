use std::path::{Path, PathBuf};
use std::process::Command;

const MAX_LINES: usize = 750;

/// Only the crate's own sources are checked.
const SOURCE_DIR: &str = "src";

const CHECKED_EXTENSIONS: &[&str] = &["rs", "yaml"];

type Violations = Vec<(PathBuf, Vec<(usize, String)>)>;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/main");
    println!("cargo:rerun-if-changed=.git/packed-refs");

    let sha = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=LPA_JOURNEY_GIT_SHA={}", sha);

    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set");
    let root = PathBuf::from(&manifest_dir);
    let files = collect_files(&root.join(SOURCE_DIR));
    for file in &files {
        println!("cargo:rerun-if-changed={}", file.display());
    }
    let sources: Vec<(PathBuf, String)> = files
        .iter()
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("rs"))
        .filter_map(|p| {
            let content = std::fs::read_to_string(p).ok()?;
            let rel = p.strip_prefix(&root).unwrap_or(p).to_path_buf();
            Some((rel, content))
        })
        .collect();

    enforce_line_limits(&root, &files);
    enforce_no_dead_code_allows(&sources);
    enforce_no_test_skips(&sources);
    enforce_serial_for_env_mutations(&sources);
}

fn collect_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    walk_directory(dir, &mut files);
    files.sort();
    files
}

fn walk_directory(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk_directory(&path, files);
        } else if path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| CHECKED_EXTENSIONS.contains(&ext))
        {
            files.push(path);
        }
    }
}

fn count_non_empty_lines(content: &str) -> usize {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .count()
}

/// Prints every violation and fails the build.
fn fail(title: &str, violations: &Violations, advice: &[&str]) -> ! {
    let total: usize = violations.iter().map(|(_, v)| v.len()).sum();

    eprintln!("\n========================================");
    eprintln!("{}", title);
    eprintln!("========================================");
    eprintln!();
    for (path, issues) in violations {
        for (line_num, msg) in issues {
            eprintln!("  {}:{}", path.display(), line_num);
            eprintln!("    {}", msg.trim());
            eprintln!();
        }
    }
    eprintln!("========================================");
    for line in advice {
        eprintln!("{}", line);
    }
    eprintln!("========================================\n");
    panic!("Build failed: {} ({} occurrence(s))", title, total);
}

fn enforce_line_limits(root: &Path, files: &[PathBuf]) {
    let mut violations: Violations = Vec::new();
    for file in files {
        let rel_path = file.strip_prefix(root).unwrap_or(file).to_path_buf();
        match std::fs::read_to_string(file) {
            Ok(content) => {
                let lines = count_non_empty_lines(&content);
                if lines > MAX_LINES {
                    violations.push((
                        rel_path,
                        vec![(lines, format!("exceeds {} lines by {}", MAX_LINES, lines - MAX_LINES))],
                    ));
                }
            }
            Err(e) => {
                println!(
                    "cargo:warning=Could not read file {}: {}",
                    rel_path.display(),
                    e
                );
            }
        }
    }

    if !violations.is_empty() {
        fail(
            "FILE LINE LIMIT EXCEEDED",
            &violations,
            &["Please split these files into smaller modules."],
        );
    }
}

fn enforce_no_dead_code_allows(sources: &[(PathBuf, String)]) {
    let mut violations: Violations = Vec::new();
    for (path, content) in sources {
        let found: Vec<(usize, String)> = content
            .lines()
            .enumerate()
            .filter(|(_, line)| {
                let trimmed = line.trim();
                (trimmed.starts_with("#[allow(") || trimmed.starts_with("#![allow("))
                    && trimmed.contains("dead_code")
            })
            .map(|(i, line)| (i + 1, line.to_string()))
            .collect();
        if !found.is_empty() {
            violations.push((path.clone(), found));
        }
    }

    if !violations.is_empty() {
        fail(
            "#[allow(dead_code)] IS NOT ALLOWED",
            &violations,
            &[
                "Delete unused code instead of silencing the warning.",
                "Code used only by tests belongs behind #[cfg(test)].",
            ],
        );
    }
}

/// One `#[test]` / `#[tokio::test]` function body at a time.
struct TestScanner {
    in_test_fn: bool,
    start: usize,
    name: String,
    depth: i32,
}

impl TestScanner {
    fn new() -> Self {
        Self {
            in_test_fn: false,
            start: 0,
            name: String::new(),
            depth: 0,
        }
    }

    /// Enters a test when `lines[i]` is a test attribute.
    fn enter(&mut self, lines: &[&str], i: usize) {
        let trimmed = lines[i].trim();
        if trimmed != "#[test]" && !trimmed.starts_with("#[tokio::test") {
            return;
        }
        for line in lines.iter().take(lines.len().min(i + 5)).skip(i + 1) {
            if let Some(fn_pos) = line.find("fn ") {
                let after_fn = &line[fn_pos + 3..];
                if let Some(paren) = after_fn.find('(') {
                    self.name = after_fn[..paren].trim().to_string();
                }
                self.start = i + 1;
                self.in_test_fn = true;
                self.depth = 0;
                return;
            }
        }
    }

    /// Tracks braces; returns false once the test body has closed.
    fn track(&mut self, line: &str) -> bool {
        for c in line.chars() {
            if c == '{' {
                self.depth += 1;
            } else if c == '}' {
                self.depth -= 1;
                if self.depth == 0 {
                    self.in_test_fn = false;
                }
            }
        }
        self.in_test_fn
    }
}

/// Bans tests that silently skip instead of failing.
fn enforce_no_test_skips(sources: &[(PathBuf, String)]) {
    let skip_patterns = ["Skipping test", "skipping test", "Test skipped", "test skipped"];

    let mut violations: Violations = Vec::new();
    for (path, content) in sources {
        let lines: Vec<&str> = content.lines().collect();
        let mut scanner = TestScanner::new();
        let mut found = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            scanner.enter(&lines, i);
            if !scanner.in_test_fn {
                continue;
            }
            scanner.track(line);

            if let Some(pattern) = skip_patterns.iter().find(|p| line.contains(*p)) {
                found.push((
                    scanner.start,
                    format!("test `{}` contains skip pattern: {}", scanner.name, pattern),
                ));
                scanner.in_test_fn = false;
            } else if line.trim() == "return;" && scanner.depth > 1 {
                found.push((
                    scanner.start,
                    format!("test `{}` has conditional early return (silent skip)", scanner.name),
                ));
                scanner.in_test_fn = false;
            }
        }

        if !found.is_empty() {
            violations.push((path.clone(), found));
        }
    }

    if !violations.is_empty() {
        fail(
            "SILENT TEST SKIPS ARE NOT ALLOWED",
            &violations,
            &["Tests must FAIL if they cannot run, not silently pass."],
        );
    }
}

fn enforce_serial_for_env_mutations(sources: &[(PathBuf, String)]) {
    let mut violations: Violations = Vec::new();
    for (path, content) in sources {
        let lines: Vec<&str> = content.lines().collect();
        let mut scanner = TestScanner::new();
        let mut has_serial = false;
        let mut found = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let trimmed = line.trim();
            if trimmed == "#[serial]" || trimmed == "#[serial_test::serial]" {
                has_serial = true;
            }
            scanner.enter(&lines, i);
            if !scanner.in_test_fn {
                continue;
            }
            if !scanner.track(line) {
                has_serial = false;
                continue;
            }

            let mutates = !trimmed.starts_with("//")
                && (trimmed.contains("env::set_var") || trimmed.contains("env::remove_var"));
            if mutates && !has_serial {
                found.push((
                    scanner.start,
                    format!("test `{}` mutates env without #[serial]", scanner.name),
                ));
                scanner.in_test_fn = false;
            }
        }

        if !found.is_empty() {
            violations.push((path.clone(), found));
        }
    }

    if !violations.is_empty() {
        fail(
            "ENV MUTATIONS REQUIRE #[serial]",
            &violations,
            &[
                "Tests that call std::env::set_var or std::env::remove_var",
                "modify global state and cause flaky failures in parallel.",
                "Add #[serial] from the serial_test crate.",
            ],
        );
    }
}
