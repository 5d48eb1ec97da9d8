//! File-backed runtime state for the CLI
//!
//! Each invocation is one session: the document root and the preference
//! store are loaded from the state directory, mutated, and written back.

use anyhow::{Context, Result};
use prism_theme::{DocumentRoot, FileStore, RootSnapshot};
use std::fs;
use std::path::{Path, PathBuf};

const DOCUMENT_FILE: &str = "document.json";
const PREFERENCES_FILE: &str = "preferences.json";

/// Directory holding `document.json` and `preferences.json`
pub struct StateDir {
    root: PathBuf,
}

impl StateDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn document_path(&self) -> PathBuf {
        self.root.join(DOCUMENT_FILE)
    }

    pub fn preferences(&self) -> FileStore {
        FileStore::new(self.root.join(PREFERENCES_FILE))
    }

    /// Load the saved document root; a missing file is an empty root
    pub fn load_document(&self) -> Result<DocumentRoot> {
        let path = self.document_path();
        if !path.exists() {
            return Ok(DocumentRoot::new());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let snapshot: RootSnapshot = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(DocumentRoot::from_snapshot(snapshot))
    }

    pub fn save_document(&self, document: &DocumentRoot) -> Result<()> {
        ensure_dir(&self.root)?;
        let path = self.document_path();
        let content = serde_json::to_string_pretty(&document.snapshot())?;
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).with_context(|| format!("Failed to create {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_theme::{PreferenceStore, RenderSurface};

    #[test]
    fn document_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let state = StateDir::new(dir.path().join("state"));

        let document = state.load_document().unwrap();
        assert_eq!(document.attribute("data-theme"), None);

        document.set_attribute("data-theme", "dark");
        document.add_class("dark");
        state.save_document(&document).unwrap();

        let reloaded = state.load_document().unwrap();
        assert_eq!(reloaded.attribute("data-theme").as_deref(), Some("dark"));
        assert!(reloaded.has_class("dark"));
    }

    #[test]
    fn preferences_live_in_state_dir() {
        let dir = tempfile::tempdir().unwrap();
        let state = StateDir::new(dir.path());
        state.preferences().set("theme", "purple").unwrap();
        assert!(dir.path().join(PREFERENCES_FILE).exists());
        assert_eq!(
            state.preferences().get("theme").unwrap().as_deref(),
            Some("purple")
        );
    }
}
