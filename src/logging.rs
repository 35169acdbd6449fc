//! Log output routing.
//!
//! Without `--log-file`, events go to stderr. Stderr shares the tty with the
//! alternate screen, so it is muted while [`TerminalGuard`] is held.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

static TERMINAL_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Marks the TUI as owning the terminal until dropped.
#[derive(Debug)]
pub struct TerminalGuard {
    flag: &'static AtomicBool,
}

impl TerminalGuard {
    pub fn enter() -> Self {
        Self::enter_flag(&TERMINAL_ACTIVE)
    }

    fn enter_flag(flag: &'static AtomicBool) -> Self {
        flag.store(true, Ordering::Relaxed);
        Self { flag }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}

/// Wrap `make` so that nothing is written while `flag` is set.
fn muted_while<M>(make: M, flag: &'static AtomicBool) -> impl for<'a> MakeWriter<'a> + 'static
where
    M: for<'a> MakeWriter<'a> + 'static,
{
    make.with_filter(move |_| !flag.load(Ordering::Relaxed))
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if `log_file` cannot be opened for appending.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());
    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(muted_while(io::stderr, &TERMINAL_ACTIVE))
                .init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn flag() -> &'static AtomicBool {
        Box::leak(Box::new(AtomicBool::new(false)))
    }

    #[test]
    fn test_guard_sets_and_clears_flag() {
        let flag = flag();
        let guard = TerminalGuard::enter_flag(flag);
        assert!(flag.load(Ordering::Relaxed));
        drop(guard);
        assert!(!flag.load(Ordering::Relaxed));
    }

    #[test]
    fn test_warnings_are_dropped_while_terminal_is_active() {
        let flag = flag();
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(muted_while(move || writer.clone(), flag))
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("before screen");
            let guard = TerminalGuard::enter_flag(flag);
            tracing::warn!("reload failed on screen");
            drop(guard);
            tracing::warn!("after screen");
        });

        let text = capture.text();
        assert!(text.contains("before screen"), "log: {text}");
        assert!(!text.contains("reload failed on screen"), "log: {text}");
        assert!(text.contains("after screen"), "log: {text}");
    }
}
