//! Timestamped copies of a project's `.gitignore`.

use std::path::{Path, PathBuf};

use gitig_core::{AppDirs, Error, Result, ensure_dir};

const PREFIX: &str = "gitignore_";
const EXTENSION: &str = "bak";

/// Copy `file` into the backup directory as `gitignore_<timestamp>.bak`.
///
/// A numeric suffix is added when a backup with the same timestamp exists.
pub fn create(dirs: &AppDirs, file: &Path) -> Result<PathBuf> {
    if !file.exists() {
        return Err(Error::not_found(file, "there is nothing to back up"));
    }

    let dir = dirs.backup_dir();
    ensure_dir(&dir)?;

    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
    let mut target = dir.join(format!("{PREFIX}{stamp}.{EXTENSION}"));
    let mut suffix = 1;
    while target.exists() {
        target = dir.join(format!("{PREFIX}{stamp}_{suffix}.{EXTENSION}"));
        suffix += 1;
    }

    std::fs::copy(file, &target).map_err(|e| Error::io(file, e))?;
    tracing::info!(from = %file.display(), to = %target.display(), "created backup");
    Ok(target)
}

/// Backup file names, oldest first. A missing directory has no backups.
pub fn list(dirs: &AppDirs) -> Result<Vec<String>> {
    let dir = dirs.backup_dir();
    let entries = match std::fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(Error::io(&dir, e)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::io(&dir, e))?.path();
        if !path.extension().is_some_and(|ext| ext == EXTENSION) {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// Copy the backup called `name` over `target`.
pub fn restore(dirs: &AppDirs, name: &str, target: &Path) -> Result<PathBuf> {
    if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(Error::invalid_argument(format!(
            "'{name}' is not a backup name"
        )));
    }

    let source = dirs.backup_dir().join(name);
    if !source.is_file() {
        return Err(Error::not_found(
            &source,
            "run 'gitig backups' to list available backups",
        ));
    }

    std::fs::copy(&source, target).map_err(|e| Error::io(target, e))?;
    tracing::info!(from = %source.display(), to = %target.display(), "restored backup");
    Ok(source)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_create_copies_into_backup_dir() {
        let home = TempDir::new().unwrap();
        let dirs = AppDirs::from_home(home.path());
        let file = home.path().join(".gitignore");
        fs::write(&file, "target/\n").unwrap();

        let backup = create(&dirs, &file).unwrap();

        assert!(backup.starts_with(dirs.backup_dir()));
        let name = backup.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("gitignore_") && name.ends_with(".bak"));
        assert_eq!(fs::read_to_string(&backup).unwrap(), "target/\n");
    }

    #[test]
    fn test_same_second_backups_do_not_collide() {
        let home = TempDir::new().unwrap();
        let dirs = AppDirs::from_home(home.path());
        let file = home.path().join(".gitignore");
        fs::write(&file, "a\n").unwrap();

        let first = create(&dirs, &file).unwrap();
        let second = create(&dirs, &file).unwrap();

        assert_ne!(first, second);
        assert_eq!(list(&dirs).unwrap().len(), 2);
    }

    #[test]
    fn test_create_requires_file() {
        let home = TempDir::new().unwrap();
        let dirs = AppDirs::from_home(home.path());

        let err = create(&dirs, &home.path().join(".gitignore")).unwrap_err();
        assert!(matches!(*err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_list_is_sorted_and_filtered() {
        let home = TempDir::new().unwrap();
        let dirs = AppDirs::from_home(home.path());
        fs::create_dir_all(dirs.backup_dir()).unwrap();
        for name in [
            "gitignore_20240102_000000.bak",
            "gitignore_20240101_000000.bak",
            "notes.txt",
        ] {
            fs::write(dirs.backup_dir().join(name), "").unwrap();
        }

        assert_eq!(
            list(&dirs).unwrap(),
            [
                "gitignore_20240101_000000.bak",
                "gitignore_20240102_000000.bak"
            ]
        );
    }

    #[test]
    fn test_list_without_dir_is_empty() {
        let home = TempDir::new().unwrap();
        assert!(list(&AppDirs::from_home(home.path())).unwrap().is_empty());
    }

    #[test]
    fn test_restore_overwrites_target() {
        let home = TempDir::new().unwrap();
        let dirs = AppDirs::from_home(home.path());
        fs::create_dir_all(dirs.backup_dir()).unwrap();
        fs::write(dirs.backup_dir().join("gitignore_1.bak"), "old/\n").unwrap();
        let target = home.path().join(".gitignore");
        fs::write(&target, "new/\n").unwrap();

        restore(&dirs, "gitignore_1.bak", &target).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "old/\n");
    }

    #[test]
    fn test_restore_rejects_missing_and_path_names() {
        let home = TempDir::new().unwrap();
        let dirs = AppDirs::from_home(home.path());
        let target = home.path().join(".gitignore");

        let err = restore(&dirs, "gitignore_nope.bak", &target).unwrap_err();
        assert!(matches!(*err, Error::FileNotFound { .. }));

        let err = restore(&dirs, "../secret", &target).unwrap_err();
        assert!(matches!(*err, Error::InvalidArgument { .. }));
    }
}
