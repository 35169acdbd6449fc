use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, update};
use crate::logging::TerminalGuard;
use crate::watcher::{ContentChange, ContentWatcher};

/// Frame interval while a smooth scroll is in flight.
const ANIMATION_FRAME: Duration = Duration::from_millis(16);

pub(super) struct ResizeDebouncer {
    delay_ms: u64,
    pending: Option<(u16, u16, u64)>,
}

impl ResizeDebouncer {
    pub(super) const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub(super) const fn queue(&mut self, width: u16, height: u16, now_ms: u64) {
        self.pending = Some((width, height, now_ms));
    }

    pub(super) fn take_ready(&mut self, now_ms: u64) -> Option<(u16, u16)> {
        let (width, height, queued_at) = self.pending?;
        if now_ms.saturating_sub(queued_at) >= self.delay_ms {
            self.pending = None;
            Some((width, height))
        } else {
            None
        }
    }

    pub(super) const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or the event loop
    /// encounters an I/O failure.
    pub fn run(self) -> Result<()> {
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal: folio requires an interactive terminal")?;
        let size = terminal.size()?;
        tracing::debug!(width = size.width, height = size.height, "terminal initialized");
        let terminal_guard = TerminalGuard::enter();

        let mouse_enabled = self.mouse_enabled;
        let mut model = self.into_model((size.width, size.height));

        let result = if mouse_enabled {
            execute!(stdout(), EnableMouseCapture)
                .context("Failed to enable mouse capture")
                .and_then(|()| Self::event_loop(&mut terminal, &mut model))
        } else {
            Self::event_loop(&mut terminal, &mut model)
        };

        // Restore terminal
        if mouse_enabled {
            let _ = execute!(stdout(), DisableMouseCapture);
        }
        ratatui::restore();
        drop(terminal_guard);

        result
    }

    /// Build the initial model for a terminal of `size` (columns, rows).
    pub(super) fn into_model(self, size: (u16, u16)) -> Model {
        let mut model = Model::new(self.portfolio, size, self.theme);
        model.content_path = self.content_path;
        model.watch_enabled = self.watch_enabled;
        model.config_global_path = self.config_global_path;
        model.config_local_path = self.config_local_path;
        model
    }

    fn apply(model: &mut Model, file_watcher: &mut Option<ContentWatcher>, msg: Message) {
        tracing::trace!(?msg, "message");
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        Self::handle_message_side_effects(model, file_watcher, &side_msg);
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let start = Instant::now();
        let mut resize_debouncer = ResizeDebouncer::new(100);
        let mut file_watcher = if model.watch_enabled {
            Self::start_watching(model)
        } else {
            None
        };
        let mut last_frame = Instant::now();
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            let now_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

            if let Some((width, height)) = resize_debouncer.take_ready(now_ms) {
                tracing::debug!(width, height, "resize applied");
                Self::apply(model, &mut file_watcher, Message::Resize(width, height));
                needs_render = true;
            }

            let change = if model.watch_enabled {
                file_watcher.as_mut().and_then(ContentWatcher::poll)
            } else {
                None
            };
            if let Some(change) = change {
                let msg = match change {
                    ContentChange::Removed => Message::ContentRemoved,
                    ContentChange::Modified | ContentChange::Replaced => Message::ContentChanged,
                };
                Self::apply(model, &mut file_watcher, msg);
                needs_render = true;
            }

            if model.viewport.is_animating() && last_frame.elapsed() >= ANIMATION_FRAME {
                Self::apply(model, &mut file_watcher, Message::SmoothScrollTick);
                last_frame = Instant::now();
                needs_render = true;
            }

            // Handle events
            let poll = if needs_render {
                Duration::ZERO
            } else if model.viewport.is_animating() {
                ANIMATION_FRAME.saturating_sub(last_frame.elapsed())
            } else if resize_debouncer.is_pending() {
                Duration::from_millis(10)
            } else {
                Duration::from_millis(250)
            };
            if event::poll(poll)? {
                // Coalesce key repeat bursts into a single render.
                loop {
                    let event_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                    if let Some(msg) =
                        Self::handle_event(&event::read()?, model, event_ms, &mut resize_debouncer)
                    {
                        if msg == Message::Redraw {
                            terminal.clear()?;
                        }
                        Self::apply(model, &mut file_watcher, msg);
                        needs_render = true;
                    }
                    if !event::poll(Duration::ZERO)? {
                        break;
                    }
                }
            }

            if needs_render {
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }
}
