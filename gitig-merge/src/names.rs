//! Normalization of user-supplied template name lists.

use indexmap::IndexMap;

/// Template names after case-insensitive deduplication and comment filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameList {
    names: Vec<String>,
    duplicates: Vec<String>,
    comments: Vec<String>,
}

impl NameList {
    /// Keep the first occurrence of each name (compared case-insensitively),
    /// dropping empty and `#`-prefixed entries. Order is first-seen order.
    pub fn normalize<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: IndexMap<String, String> = IndexMap::new();
        let mut duplicates = Vec::new();
        let mut comments = Vec::new();

        for name in raw {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            if name.starts_with('#') {
                tracing::debug!(name, "skipping comment");
                comments.push(name.to_string());
                continue;
            }

            let key = name.to_lowercase();
            if seen.contains_key(&key) {
                tracing::debug!(name, "skipping duplicate");
                duplicates.push(name.to_string());
            } else {
                seen.insert(key, name.to_string());
            }
        }

        Self {
            names: seen.into_values().collect(),
            duplicates,
            comments,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Entries dropped because an earlier entry had the same name.
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    /// Entries dropped because they start with `#`.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_is_case_insensitive_and_keeps_first() {
        let list = NameList::normalize(["Python", "node", "python", "NODE", "rust"]);
        assert_eq!(list.names(), ["Python", "node", "rust"]);
        assert_eq!(list.duplicates(), ["python", "NODE"]);
    }

    #[test]
    fn test_comments_are_dropped() {
        let list = NameList::normalize(["#python", "go", "# note"]);
        assert_eq!(list.names(), ["go"]);
        assert_eq!(list.comments(), ["#python", "# note"]);
    }

    #[test]
    fn test_blank_entries_are_ignored() {
        let list = NameList::normalize(["", "  ", "go"]);
        assert_eq!(list.names(), ["go"]);
        assert!(list.duplicates().is_empty());
    }

    #[test]
    fn test_empty_input() {
        let list = NameList::normalize(Vec::<String>::new());
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }
}
