//! Soft failures must be visible in the log

use std::io::Write;
use std::sync::{Arc, Mutex};

use prism_theme::{
    ApplyOptions, ColorScheme, DocumentRoot, ThemeApplier, ThemeDescriptor, ThemeRecipe,
    ThemeRegistry, Variant,
};
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted log output in memory
#[derive(Clone, Default)]
struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    fn logs(&self) -> Vec<String> {
        let buffer = self.buffer.lock().unwrap();
        String::from_utf8_lossy(&buffer)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

struct LogCaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for LogCaptureWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogCaptureWriter {
            buffer: Arc::clone(&self.buffer),
        }
    }
}

/// Run `f` with a WARN-level subscriber and return the captured lines
fn capture_warnings(f: impl FnOnce()) -> Vec<String> {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    capture.logs()
}

#[test]
fn applying_unknown_theme_warns() {
    let root = Arc::new(DocumentRoot::new());
    let applier = ThemeApplier::new(ThemeRegistry::global(), root);

    let logs = capture_warnings(|| {
        assert!(!applier.apply_theme("not-a-real-theme", &ApplyOptions::default()));
    });

    assert_eq!(logs.len(), 1, "{logs:?}");
    assert!(logs[0].contains("WARN"));
    assert!(logs[0].contains("theme not found"));
    assert!(logs[0].contains("not-a-real-theme"));
}

#[test]
fn applying_known_theme_is_quiet() {
    let root = Arc::new(DocumentRoot::new());
    let applier = ThemeApplier::new(ThemeRegistry::global(), root);

    let logs = capture_warnings(|| {
        assert!(applier.apply_theme("dark", &ApplyOptions::default()));
    });
    assert!(logs.is_empty(), "{logs:?}");
}

#[test]
fn missing_default_warns_on_fallback() {
    let registry = ThemeRegistry::from_entries([(
        ThemeDescriptor::new("purple", "Purple"),
        ThemeRecipe::new(Variant::Purple, ColorScheme::Light),
    )])
    .unwrap();

    let logs = capture_warnings(|| {
        assert_eq!(registry.get_default_theme().name(), "light");
    });

    assert_eq!(logs.len(), 1, "{logs:?}");
    assert!(logs[0].contains("WARN"));
    assert!(logs[0].contains("no theme flagged default"));
}
