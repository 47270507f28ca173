//! Persisted navigation index for generated documents.
//!
//! The index is the cumulative table of contents the reader site consumes:
//! one top-level entry per generation run, newest first, each holding the
//! run's clusters and their question documents. It lives in a single JSON
//! file that each run loads, prepends to, and writes back — there is no
//! in-memory carryover between runs.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::input::read_json_file;

/// One generated question document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavSection {
    /// Document identifier: the relative path without its `.md` extension.
    pub id: String,
    /// The original question text.
    pub title: String,
    /// Relative path to the document file.
    pub url: String,
}

/// One cluster's documents within a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavCluster {
    pub title: String,
    pub sections: Vec<NavSection>,
}

/// One generation run, titled by its period label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavEntry {
    pub title: String,
    pub sections: Vec<NavCluster>,
}

/// The whole persisted index.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavIndex {
    pub data: Vec<NavEntry>,
}

impl NavIndex {
    /// Loads the index from `path`, or returns an empty one if the file
    /// does not exist.
    ///
    /// A file that exists but lacks the top-level `data` list is malformed
    /// and fails the run rather than being silently reinitialized.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        read_json_file(path)
    }

    /// Prepends a new top-level entry; existing entries keep their order
    /// after it.
    pub fn prepend(&mut self, entry: NavEntry) {
        self.data.insert(0, entry);
    }

    /// Writes the index back pretty-printed with 4-space indentation.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)
            .map_err(|source| crate::ClaimbookError::Json { path: path.to_path_buf(), source })?;

        let mut file = fs::File::create(path)?;
        file.write_all(&buf)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(title: &str) -> NavEntry {
        NavEntry {
            title: title.to_string(),
            sections: vec![NavCluster {
                title: "Cluster".to_string(),
                sections: vec![NavSection {
                    id: "docs/q_1".to_string(),
                    title: "Question one?".to_string(),
                    url: "docs/q_1.md".to_string(),
                }],
            }],
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let index = NavIndex::load(&tmp.path().join("nav.json")).unwrap();
        assert!(index.data.is_empty());
    }

    #[test]
    fn test_load_without_data_list_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nav.json");
        fs::write(&path, r#"{"title": "oops"}"#).unwrap();

        assert!(NavIndex::load(&path).is_err());
    }

    #[test]
    fn test_prepend_puts_new_entry_first() {
        let mut index = NavIndex { data: vec![entry("older")] };
        index.prepend(entry("newer"));

        assert_eq!(index.data.len(), 2);
        assert_eq!(index.data[0].title, "newer");
        assert_eq!(index.data[1].title, "older");
    }

    #[test]
    fn test_save_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nav.json");

        let index = NavIndex { data: vec![entry("Sept 1st to 15th")] };
        index.save(&path).unwrap();

        let loaded = NavIndex::load(&path).unwrap();
        assert_eq!(loaded, index);
    }

    #[test]
    fn test_save_is_pretty_printed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nav.json");

        NavIndex { data: vec![entry("Run")] }.save(&path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\n    \"data\""));
        assert!(raw.contains("Question one?"));
    }
}
