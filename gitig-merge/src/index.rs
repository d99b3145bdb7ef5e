//! Index of the pattern lines already present in an ignore file.

use std::{collections::HashSet, path::Path};

use gitig_core::{Error, Result, lines};

/// Set of trimmed pattern lines. Comments and blank lines are never indexed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternIndex {
    patterns: HashSet<String>,
}

impl PatternIndex {
    /// Index the file at `path`. A missing file yields an empty index.
    ///
    /// Bytes that are not UTF-8 are replaced, so such lines never match a
    /// template pattern but do not stop the merge.
    pub fn build(path: &Path) -> Result<Self> {
        match std::fs::read(path) {
            Ok(bytes) => Ok(Self::from_text(&String::from_utf8_lossy(&bytes))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(Error::io(path, e)),
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            patterns: lines::patterns(text).map(str::to_string).collect(),
        }
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.patterns.contains(pattern)
    }

    /// Record `pattern`. Returns `false` if it was already present.
    pub fn insert(&mut self, pattern: &str) -> bool {
        self.patterns.insert(pattern.to_string())
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let index = PatternIndex::build(&temp.path().join(".gitignore")).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_indexes_trimmed_patterns_only() {
        let index = PatternIndex::from_text(
            "# Dependencies\nnode_modules/\n\n   \n  dist/  \r\n\t# indented comment\n*.log",
        );
        assert_eq!(index.len(), 3);
        assert!(index.contains("node_modules/"));
        assert!(index.contains("dist/"));
        assert!(index.contains("*.log"));
        assert!(!index.contains("# Dependencies"));
    }

    #[test]
    fn test_no_case_folding_or_glob_logic() {
        let index = PatternIndex::from_text("*.log\nBuild/\n");
        assert!(!index.contains("debug.log"));
        assert!(!index.contains("build/"));
    }

    #[test]
    fn test_build_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".gitignore");
        std::fs::write(&path, "target/\n# c\n").unwrap();

        let index = PatternIndex::build(&path).unwrap();
        assert_eq!(index.iter().collect::<Vec<_>>(), vec!["target/"]);
    }

    #[test]
    fn test_build_tolerates_latin1_bytes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".gitignore");
        std::fs::write(&path, b"caf\xe9/\nnode_modules/\n").unwrap();

        let index = PatternIndex::build(&path).unwrap();
        assert_eq!(index.len(), 2);
        assert!(index.contains("node_modules/"));
    }

    #[test]
    fn test_insert_reports_novelty() {
        let mut index = PatternIndex::default();
        assert!(index.insert(".env"));
        assert!(!index.insert(".env"));
    }
}
