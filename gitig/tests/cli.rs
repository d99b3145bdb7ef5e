//! End-to-end tests that run the gitig binary against temporary directories.
//!
//! `HOME` points at a scratch directory so the user's real configuration,
//! templates and backups are never touched.

use std::{fs, path::Path, process::Command};

use tempfile::TempDir;

struct Env {
    home: TempDir,
    project: TempDir,
}

impl Env {
    fn new() -> Self {
        Self {
            home: TempDir::new().expect("Failed to create home dir"),
            project: TempDir::new().expect("Failed to create project dir"),
        }
    }

    fn run(&self, args: &[&str]) -> std::process::Output {
        Command::new(env!("CARGO_BIN_EXE_gitig"))
            .arg("-C")
            .arg(self.project.path())
            .args(args)
            .env("HOME", self.home.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run gitig")
    }

    fn gitignore(&self) -> String {
        fs::read_to_string(self.project.path().join(".gitignore")).unwrap_or_default()
    }

    fn config(&self, content: &str) {
        let dir = self.home.path().join(".config/gitignore");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.conf"), content).unwrap();
    }
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            chars.by_ref().find(|c| c.is_ascii_alphabetic());
        } else {
            out.push(c);
        }
    }
    out
}

fn count_lines(content: &str, line: &str) -> usize {
    content.lines().filter(|l| *l == line).count()
}

#[test]
fn test_init_then_update_is_idempotent() {
    let env = Env::new();

    assert!(env.run(&["init", "rust", "Rust"]).status.success());
    let first = env.gitignore();
    assert!(first.starts_with("# Generated by gitig v"));
    assert_eq!(count_lines(&first, "target/"), 1);

    assert!(env.run(&["update", "rust"]).status.success());
    assert_eq!(count_lines(&env.gitignore(), "target/"), 1);

    assert!(env.run(&["append", "rust"]).status.success());
    assert_eq!(count_lines(&env.gitignore(), "target/"), 2);
}

#[test]
fn test_update_without_file_fails() {
    let env = Env::new();

    let output = env.run(&["update", "rust"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!env.project.path().join(".gitignore").exists());
}

#[test]
fn test_dry_run_writes_nothing() {
    let env = Env::new();

    let output = env.run(&["--dry-run", "init", "python"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Dry run"));
    assert!(!env.project.path().join(".gitignore").exists());
}

#[test]
fn test_bare_patterns_are_added_once() {
    let env = Env::new();

    assert!(env.run(&["node_modules/", "*.log"]).status.success());
    assert!(env.run(&["-a", "init", "*.log"]).status.success());

    let content = env.gitignore();
    assert_eq!(count_lines(&content, "node_modules/"), 1);
    assert_eq!(count_lines(&content, "*.log"), 1);
    assert_eq!(count_lines(&content, "init"), 1);
}

#[test]
fn test_local_template_overrides_builtin() {
    let env = Env::new();
    let templates = env.home.path().join(".config/gitignore/templates");
    fs::create_dir_all(&templates).unwrap();
    fs::write(templates.join("python.gitignore"), "company-venv/\n").unwrap();

    let shown = env.run(&["show", "python"]);
    assert_eq!(stdout(&shown), "company-venv/\n");

    let listed = stdout(&env.run(&["list", "py"]));
    assert!(listed.contains("Local templates:\n  python"));
    assert!(listed.contains("Built-in templates:\n  python"));
}

#[test]
fn test_auto_backup_and_restore() {
    let env = Env::new();
    env.config("auto_backup=true\n");
    fs::write(env.project.path().join(".gitignore"), "original/\n").unwrap();

    assert!(env.run(&["-q", "update", "go"]).status.success());
    assert_ne!(env.gitignore(), "original/\n");

    let listed = stdout(&env.run(&["backups"]));
    let name = listed
        .lines()
        .map(str::trim)
        .find(|l| l.starts_with("gitignore_") && l.ends_with(".bak"))
        .expect("a backup is listed")
        .to_string();

    assert!(env.run(&["restore", &name]).status.success());
    assert_eq!(env.gitignore(), "original/\n");
}

#[test]
fn test_malformed_config_is_reported() {
    let env = Env::new();
    env.config("auto_backup = maybe\n");

    let output = env.run(&["list"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("config"));
}

#[test]
fn test_verbose_config_error_shows_code() {
    let env = Env::new();
    env.config("auto_backup = maybe\n");

    let output = env.run(&["-V", "list"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = strip_ansi(&String::from_utf8_lossy(&output.stderr));
    assert!(stderr.contains("command failed code=9"), "{stderr}");
}

#[test]
fn test_global_init_and_add() {
    let env = Env::new();

    assert!(env.run(&["global", "add", "vim"]).status.code() == Some(1));
    assert!(env.run(&["global", "init"]).status.success());
    assert!(env.run(&["global", "add", "vim"]).status.success());

    let content = fs::read_to_string(env.home.path().join(".gitignore_global")).unwrap();
    assert!(content.contains("core.excludesfile"));
    assert!(content.contains("# ===== vim =====\n"));
}

fn assert_missing(path: &Path) {
    assert!(!path.exists(), "{} should not exist", path.display());
}

#[test]
fn test_cache_clear_on_empty_cache() {
    let env = Env::new();

    let output = env.run(&["cache", "clear"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Removed 0 cached template(s)"));
    assert_missing(&env.home.path().join(".config/gitignore/cache"));
}
