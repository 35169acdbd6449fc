use std::time::Duration;

use crate::app::{App, Message, Model, ToastLevel};
use crate::watcher::ContentWatcher;

/// Quiet period before a burst of content file writes triggers a reload.
const WATCH_DEBOUNCE: Duration = Duration::from_millis(200);

impl App {
    /// Start watching the content file, or explain why that is not possible.
    pub(super) fn start_watching(model: &mut Model) -> Option<ContentWatcher> {
        let Some(path) = model.content_path.clone() else {
            model.watch_enabled = false;
            model.show_toast(
                ToastLevel::Warning,
                "Nothing to watch: showing the bundled portfolio",
            );
            return None;
        };
        match ContentWatcher::new(&path, WATCH_DEBOUNCE) {
            Ok(watcher) => Some(watcher),
            Err(err) => {
                model.watch_enabled = false;
                model.show_toast(ToastLevel::Warning, format!("Watch unavailable: {err}"));
                tracing::warn!(path = %path.display(), %err, "failed to watch content file");
                None
            }
        }
    }

    pub(super) fn handle_message_side_effects(
        model: &mut Model,
        file_watcher: &mut Option<ContentWatcher>,
        msg: &Message,
    ) {
        match msg {
            Message::ToggleWatch => {
                if model.watch_enabled {
                    *file_watcher = Self::start_watching(model);
                    if file_watcher.is_some() {
                        model.show_toast(ToastLevel::Info, "Watching content changes");
                    }
                } else {
                    *file_watcher = None;
                    model.show_toast(ToastLevel::Info, "Watch disabled");
                }
            }
            Message::ForceReload | Message::ContentChanged => {
                if model.content_path.is_none() {
                    if matches!(msg, Message::ForceReload) {
                        model.show_toast(ToastLevel::Info, "Bundled portfolio has no file to reload");
                    }
                    return;
                }
                if let Err(err) = model.reload_content() {
                    model.show_toast(ToastLevel::Error, format!("Reload failed: {err}"));
                    tracing::warn!(%err, "content reload failed");
                } else if matches!(msg, Message::ForceReload) {
                    model.show_toast(ToastLevel::Info, "Reloaded");
                } else {
                    tracing::info!("content reloaded after change");
                }
            }
            Message::ContentRemoved => {
                model.show_toast(
                    ToastLevel::Warning,
                    "Content file removed: keeping the last loaded portfolio",
                );
            }
            _ => {}
        }
    }
}
