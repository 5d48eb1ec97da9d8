use std::sync::Arc;

use prism_theme::{
    AppliedTheme, ApplyOptions, ColorScheme, DocumentRoot, FileStore, FixedColorScheme,
    MemoryStore, PreferenceSource, PreferenceStore, RenderSurface, ThemeApplier, ThemeDescriptor,
    ThemeRecipe, ThemeRegistry, ThemeSession, Variant,
};

fn applier() -> (ThemeApplier, Arc<DocumentRoot>) {
    let root = Arc::new(DocumentRoot::new());
    (ThemeApplier::new(ThemeRegistry::global(), root.clone()), root)
}

fn session(
    store: Arc<dyn PreferenceStore>,
    system: Option<ColorScheme>,
) -> (ThemeSession, Arc<DocumentRoot>) {
    let (applier, root) = applier();
    let session = ThemeSession::new(applier, store, Arc::new(FixedColorScheme(system)));
    (session, root)
}

#[test]
fn apply_then_read() {
    let (applier, _root) = applier();
    let opts = ApplyOptions::default();

    assert!(applier.apply_theme("dark", &opts));
    assert_eq!(applier.current_theme(&opts), "dark");
    assert_eq!(applier.state(&opts), AppliedTheme::Applied("dark".to_string()));
}

#[test]
fn remove_falls_back_to_light() {
    let (applier, root) = applier();
    let opts = ApplyOptions::default();

    applier.apply_theme("dark", &opts);
    applier.remove_theme(&opts);
    assert_eq!(applier.current_theme(&opts), "light");
    assert_eq!(applier.state(&opts), AppliedTheme::Unset);
    assert!(!root.has_class("dark"));

    // Valid from the unset state too
    applier.remove_theme(&opts);
    assert_eq!(applier.state(&opts), AppliedTheme::Unset);
}

#[test]
fn toggle_round_trip() {
    let (applier, _root) = applier();
    let opts = ApplyOptions::default();

    applier.apply_theme("light", &opts);
    assert_eq!(applier.toggle_theme(&opts), "dark");
    assert_eq!(applier.toggle_theme(&opts), "light");
}

#[test]
fn toggle_from_unset_and_from_accent_theme() {
    let (applier, _root) = applier();
    let opts = ApplyOptions::default();

    assert_eq!(applier.toggle_theme(&opts), "dark");

    applier.apply_theme("purple", &opts);
    assert_eq!(applier.toggle_theme(&opts), "dark");
}

#[test]
fn unknown_theme_leaves_surface_unchanged() {
    let (applier, root) = applier();
    let opts = ApplyOptions::default();

    applier.apply_theme("emerald", &opts);
    let writes = root.mutation_count();

    assert!(!applier.apply_theme("not-a-real-theme", &opts));
    assert_eq!(applier.current_theme(&opts), "emerald");
    assert_eq!(root.mutation_count(), writes);
}

#[test]
fn session_prefers_persisted_choice() {
    let store = Arc::new(MemoryStore::with_value("theme", "purple"));
    let (session, root) = session(store.clone(), Some(ColorScheme::Dark));

    let state = session.initialize().clone();
    assert_eq!(state.theme.as_deref(), Some("purple"));
    assert_eq!(state.source, PreferenceSource::Persisted);
    assert!(state.mounted);
    assert_eq!(root.attribute("data-theme").as_deref(), Some("purple"));
}

#[test]
fn session_falls_back_to_system_scheme() {
    let store = Arc::new(MemoryStore::new());
    let (session, root) = session(store.clone(), Some(ColorScheme::Dark));

    assert!(!session.is_mounted());
    let state = session.initialize();
    assert_eq!(state.theme.as_deref(), Some("dark"));
    assert_eq!(state.source, PreferenceSource::System);
    assert!(session.is_mounted());
    assert!(root.has_class("dark"));
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn session_ignores_unregistered_persisted_value() {
    let store = Arc::new(MemoryStore::with_value("theme", "sepia"));
    let (session, _root) = session(store.clone(), None);

    let state = session.initialize();
    assert_eq!(state.theme.as_deref(), Some("light"));
    assert_eq!(state.source, PreferenceSource::Default);
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
}

#[test]
fn session_initializes_once() {
    let store = Arc::new(MemoryStore::new());
    let (session, _root) = session(store.clone(), Some(ColorScheme::Light));

    let first = session.initialize().clone();
    assert!(session.select("orange"));
    let second = session.initialize().clone();

    assert_eq!(first, second);
    assert_eq!(session.current(), "orange");
}

#[test]
fn session_persists_explicit_changes() {
    let store = Arc::new(MemoryStore::new());
    let (session, _root) = session(store.clone(), None);
    session.initialize();

    assert_eq!(session.toggle(), "dark");
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

    assert!(!session.select("not-a-real-theme"));
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

    session.reset();
    assert_eq!(store.get("theme").unwrap(), None);
    assert_eq!(session.current(), "light");
}

#[test]
fn session_with_file_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    {
        let (session, _root) = session(Arc::new(FileStore::new(&path)), None);
        session.initialize();
        session.select("emerald");
    }

    let (session, root) = session(Arc::new(FileStore::new(&path)), Some(ColorScheme::Dark));
    let state = session.initialize();
    assert_eq!(state.theme.as_deref(), Some("emerald"));
    assert_eq!(state.source, PreferenceSource::Persisted);
    assert_eq!(root.attribute("data-theme").as_deref(), Some("emerald"));
}

fn orange_only_session(store: Arc<dyn PreferenceStore>) -> (ThemeSession, Arc<DocumentRoot>) {
    let registry = ThemeRegistry::from_entries([(
        ThemeDescriptor::new("orange", "Orange"),
        ThemeRecipe::new(Variant::Orange, ColorScheme::Light),
    )])
    .unwrap();
    let root = Arc::new(DocumentRoot::new());
    let applier = ThemeApplier::new(Arc::new(registry), root.clone());
    let session = ThemeSession::new(applier, store, Arc::new(FixedColorScheme(None)));
    (session, root)
}

#[test]
fn session_without_registered_default_starts_from_first_theme() {
    let store = Arc::new(MemoryStore::new());
    let (session, root) = orange_only_session(store.clone());

    let state = session.initialize();
    assert_eq!(state.theme.as_deref(), Some("orange"));
    assert_eq!(state.source, PreferenceSource::Default);
    assert_eq!(root.attribute("data-theme").as_deref(), Some("orange"));
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("orange"));
}

#[test]
fn session_on_empty_catalog_applies_and_persists_nothing() {
    let store = Arc::new(MemoryStore::new());
    let root = Arc::new(DocumentRoot::new());
    let applier = ThemeApplier::new(Arc::new(ThemeRegistry::new()), root.clone());
    let session = ThemeSession::new(applier, store.clone(), Arc::new(FixedColorScheme(None)));

    let state = session.initialize();
    assert_eq!(state.theme, None);
    assert!(state.mounted);
    assert_eq!(root.attribute("data-theme"), None);
    assert_eq!(store.get("theme").unwrap(), None);
}

#[test]
fn toggle_to_unregistered_theme_persists_nothing() {
    let store = Arc::new(MemoryStore::new());
    let (session, root) = orange_only_session(store.clone());
    session.initialize();

    // orange toggles to dark, which this catalog does not have
    assert_eq!(session.toggle(), "orange");
    assert_eq!(root.attribute("data-theme").as_deref(), Some("orange"));
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("orange"));

    session.reset();
    assert_eq!(session.toggle(), "light");
    assert_eq!(root.attribute("data-theme"), None);
    assert_eq!(store.get("theme").unwrap(), None);
}
