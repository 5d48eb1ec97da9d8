//! Rendering surfaces
//!
//! A [`RenderSurface`] is the element a theme is applied to: something with
//! string attributes and a class list, like a document root. Writes are
//! advisory UI state; concurrent writers are last-write-wins.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// Attribute and class access on the element themes are applied to
pub trait RenderSurface: Send + Sync {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn remove_attribute(&self, name: &str);

    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}

/// In-memory document root
#[derive(Debug, Default)]
pub struct DocumentRoot {
    attributes: RwLock<FxHashMap<String, String>>,
    classes: RwLock<FxHashSet<String>>,
    mutations: AtomicUsize,
}

/// Serializable copy of a [`DocumentRoot`]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootSnapshot {
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub classes: BTreeSet<String>,
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: RootSnapshot) -> Self {
        Self {
            attributes: RwLock::new(snapshot.attributes.into_iter().collect()),
            classes: RwLock::new(snapshot.classes.into_iter().collect()),
            mutations: AtomicUsize::new(0),
        }
    }

    pub fn snapshot(&self) -> RootSnapshot {
        RootSnapshot {
            attributes: self
                .attributes
                .read()
                .unwrap()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            classes: self.classes.read().unwrap().iter().cloned().collect(),
        }
    }

    /// Number of writes that changed the surface
    pub fn mutation_count(&self) -> usize {
        self.mutations.load(Ordering::SeqCst)
    }

    fn mutated(&self) {
        self.mutations.fetch_add(1, Ordering::SeqCst);
    }
}

impl RenderSurface for DocumentRoot {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.read().unwrap().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let previous = self
            .attributes
            .write()
            .unwrap()
            .insert(name.to_string(), value.to_string());
        if previous.as_deref() != Some(value) {
            self.mutated();
        }
    }

    fn remove_attribute(&self, name: &str) {
        if self.attributes.write().unwrap().remove(name).is_some() {
            self.mutated();
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.read().unwrap().contains(class)
    }

    fn add_class(&self, class: &str) {
        if self.classes.write().unwrap().insert(class.to_string()) {
            self.mutated();
        }
    }

    fn remove_class(&self, class: &str) {
        if self.classes.write().unwrap().remove(class) {
            self.mutated();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_round_trip() {
        let root = DocumentRoot::new();
        assert_eq!(root.attribute("data-theme"), None);
        root.set_attribute("data-theme", "dark");
        assert_eq!(root.attribute("data-theme").as_deref(), Some("dark"));
        root.remove_attribute("data-theme");
        assert_eq!(root.attribute("data-theme"), None);
        assert_eq!(root.mutation_count(), 2);
    }

    #[test]
    fn redundant_writes_do_not_count() {
        let root = DocumentRoot::new();
        root.set_attribute("data-theme", "light");
        root.set_attribute("data-theme", "light");
        root.add_class("dark");
        root.add_class("dark");
        root.remove_class("missing");
        assert_eq!(root.mutation_count(), 2);
    }

    #[test]
    fn snapshot_round_trip() {
        let root = DocumentRoot::new();
        root.set_attribute("data-theme", "purple");
        root.add_class("dark");

        let json = serde_json::to_string(&root.snapshot()).unwrap();
        let restored = DocumentRoot::from_snapshot(serde_json::from_str(&json).unwrap());
        assert_eq!(restored.attribute("data-theme").as_deref(), Some("purple"));
        assert!(restored.has_class("dark"));
    }
}
