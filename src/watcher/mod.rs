//! Live reload for the portfolio content file.
//!
//! Editors often save by writing a temporary file and renaming it over the
//! original, so the watch is placed on the parent directory and events are
//! matched by file name.
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use notify::event::{AccessKind, AccessMode, ModifyKind, RenameMode};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// What happened to the content file during the last quiet period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentChange {
    /// Written in place.
    Modified,
    /// A new file now sits at the path (rename-over, delete-and-recreate).
    Replaced,
    /// Nothing is left at the path.
    Removed,
}

/// Watches the portfolio file and reports debounced [`ContentChange`]s.
pub struct ContentWatcher {
    _watcher: RecommendedWatcher,
    events: Receiver<notify::Result<Event>>,
    file_name: OsString,
    debounce: Duration,
    pending: Option<(ContentChange, Instant)>,
}

impl ContentWatcher {
    /// Start watching the directory holding `path`.
    ///
    /// # Errors
    /// Returns an error if `path` has no file name or its directory cannot be watched.
    pub fn new(path: &Path, debounce: Duration) -> notify::Result<Self> {
        let file_name = path
            .file_name()
            .map(OsString::from)
            .ok_or_else(|| notify::Error::generic("content path has no file name"))?;
        let dir = content_dir(path);

        let (tx, events) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        tracing::debug!(dir = %dir.display(), file = ?file_name, "watching content");

        Ok(Self {
            _watcher: watcher,
            events,
            file_name,
            debounce,
            pending: None,
        })
    }

    /// The settled change, once no new event has arrived for the debounce period.
    pub fn poll(&mut self) -> Option<ContentChange> {
        self.poll_at(Instant::now())
    }

    fn poll_at(&mut self, now: Instant) -> Option<ContentChange> {
        while let Ok(res) = self.events.try_recv() {
            match res {
                Ok(event) => self.record(&event, now),
                Err(err) => tracing::warn!(%err, "content watch error"),
            }
        }
        let (change, since) = self.pending?;
        if now.saturating_duration_since(since) < self.debounce {
            return None;
        }
        self.pending = None;
        Some(change)
    }

    /// The latest event decides the outcome: a save that deletes and then
    /// recreates the file ends up as `Replaced`.
    fn record(&mut self, event: &Event, now: Instant) {
        if let Some(change) = self.classify(event) {
            tracing::trace!(?change, kind = ?event.kind, "content event");
            self.pending = Some((change, now));
        }
    }

    fn classify(&self, event: &Event) -> Option<ContentChange> {
        if !event.paths.iter().any(|path| self.is_content(path)) {
            return None;
        }
        let change = match event.kind {
            EventKind::Remove(_) | EventKind::Modify(ModifyKind::Name(RenameMode::From)) => {
                ContentChange::Removed
            }
            // Paths are [from, to]; renaming the file away leaves nothing behind.
            EventKind::Modify(ModifyKind::Name(RenameMode::Both))
                if !event.paths.last().is_some_and(|to| self.is_content(to)) =>
            {
                ContentChange::Removed
            }
            EventKind::Create(_) | EventKind::Modify(ModifyKind::Name(_)) => {
                ContentChange::Replaced
            }
            EventKind::Access(AccessKind::Close(AccessMode::Write)) => ContentChange::Modified,
            EventKind::Access(_) => return None,
            _ => ContentChange::Modified,
        };
        Some(change)
    }

    fn is_content(&self, path: &Path) -> bool {
        path.file_name() == Some(self.file_name.as_os_str())
    }
}

fn content_dir(path: &Path) -> PathBuf {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    dir.canonicalize().unwrap_or(dir)
}
