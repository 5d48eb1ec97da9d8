//! First-load reconciliation and persisted user choice
//!
//! [`ThemeSession`] decides which theme a fresh surface starts with and keeps
//! the persisted choice in sync with explicit changes. Initialization runs
//! once per session:
//!
//! 1. the persisted choice, if it names a registered theme
//! 2. else the system color scheme (`light`/`dark`), if registered
//! 3. else the registry default, or the first registered theme when the
//!    default name is not in the catalog
//!
//! The result is written to the surface and to the store, and the session is
//! marked mounted. Only names the applier accepted are ever persisted.
//! Storage failures are logged and otherwise ignored.

use std::sync::{Arc, OnceLock};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::applier::{toggled_theme_name, ApplyOptions, ThemeApplier};
use crate::platform::ColorSchemeSource;
use crate::storage::{PreferenceStore, DEFAULT_STORAGE_KEY};

/// Where the initial theme came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceSource {
    Persisted,
    System,
    Default,
}

/// Outcome of session initialization
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AppliedThemeState {
    /// Applied theme; `None` only when the catalog is empty
    pub theme: Option<String>,
    pub source: PreferenceSource,
    pub mounted: bool,
}

/// Applier plus persistence and system preference
pub struct ThemeSession {
    applier: ThemeApplier,
    store: Arc<dyn PreferenceStore>,
    system: Arc<dyn ColorSchemeSource>,
    storage_key: String,
    options: ApplyOptions,
    state: OnceLock<AppliedThemeState>,
}

impl ThemeSession {
    pub fn new(
        applier: ThemeApplier,
        store: Arc<dyn PreferenceStore>,
        system: Arc<dyn ColorSchemeSource>,
    ) -> Self {
        Self {
            applier,
            store,
            system,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            options: ApplyOptions::default(),
            state: OnceLock::new(),
        }
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_options(mut self, options: ApplyOptions) -> Self {
        self.options = options;
        self
    }

    pub fn applier(&self) -> &ThemeApplier {
        &self.applier
    }

    pub fn options(&self) -> &ApplyOptions {
        &self.options
    }

    /// Reconcile and apply the starting theme. Later calls return the first result.
    pub fn initialize(&self) -> &AppliedThemeState {
        self.state.get_or_init(|| {
            let (theme, source) = self.resolve_initial();
            let theme = theme.filter(|name| self.apply_and_persist(name));
            match &theme {
                Some(name) => info!(theme = %name, ?source, "theme session initialized"),
                None => warn!("no registered theme to apply; surface left unset"),
            }
            AppliedThemeState {
                theme,
                source,
                mounted: true,
            }
        })
    }

    /// Whether [`ThemeSession::initialize`] has completed
    pub fn is_mounted(&self) -> bool {
        self.state.get().is_some_and(|s| s.mounted)
    }

    /// Initial state, if initialized
    pub fn state(&self) -> Option<&AppliedThemeState> {
        self.state.get()
    }

    /// Current theme on the surface
    pub fn current(&self) -> String {
        self.applier.current_theme(&self.options)
    }

    /// Apply and persist an explicit choice. Unknown names change nothing.
    pub fn select(&self, name: &str) -> bool {
        self.apply_and_persist(name)
    }

    /// Toggle light/dark and persist the result. Returns the theme now on the
    /// surface, which is unchanged when the target is not registered.
    pub fn toggle(&self) -> String {
        let next = toggled_theme_name(&self.current());
        self.apply_and_persist(next);
        self.current()
    }

    /// Remove the theme from the surface and forget the persisted choice
    pub fn reset(&self) {
        self.applier.remove_theme(&self.options);
        if let Err(e) = self.store.remove(&self.storage_key) {
            warn!(error = %e, "failed to clear persisted theme");
        }
    }

    fn resolve_initial(&self) -> (Option<String>, PreferenceSource) {
        let registry = self.applier.registry();

        match self.store.get(&self.storage_key) {
            Ok(Some(saved)) if registry.has_theme(&saved) => {
                return (Some(saved), PreferenceSource::Persisted);
            }
            Ok(Some(saved)) => {
                warn!(theme = %saved, "persisted theme is not registered; ignoring");
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "failed to read persisted theme"),
        }

        if let Some(scheme) = self.system.preferred_scheme() {
            if registry.has_theme(scheme.as_str()) {
                return (Some(scheme.as_str().to_string()), PreferenceSource::System);
            }
            debug!(%scheme, "system scheme has no registered theme");
        }

        (
            registry.initial_name().map(str::to_string),
            PreferenceSource::Default,
        )
    }

    fn apply_and_persist(&self, name: &str) -> bool {
        if !self.applier.apply_theme(name, &self.options) {
            return false;
        }
        self.persist(name);
        true
    }

    fn persist(&self, name: &str) {
        if let Err(e) = self.store.set(&self.storage_key, name) {
            warn!(error = %e, theme = name, "failed to persist theme");
        }
    }
}
