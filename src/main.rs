//! Folio - a single-page developer portfolio for the terminal.
//!
//! # Usage
//!
//! ```bash
//! folio
//! folio --content me.json --watch
//! folio --theme dark
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use folio::app::App;
use folio::config::{
    ConfigFlags, ThemeMode, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, parse_flag_tokens, save_config_flags,
};
use folio::page::Portfolio;
use folio::storage::{FileStore, PreferenceStore, preferences_path};
use folio::theme::{self, THEME_KEY, ThemeToggle};

/// A single-page developer portfolio for the terminal
#[derive(Parser, Debug)]
#[command(name = "folio", version, about, long_about = None)]
struct Cli {
    /// Portfolio JSON file (defaults to the bundled sample)
    #[arg(long, value_name = "PATH")]
    content: Option<PathBuf>,

    /// Watch the content file for changes and auto-reload
    #[arg(short, long)]
    watch: bool,

    /// System theme preference used when no theme has been chosen yet
    #[arg(long, value_enum, default_value = "auto")]
    theme: ThemeMode,

    /// Disable mouse capture
    #[arg(long)]
    no_mouse: bool,

    /// Write log events to a file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Forget the stored theme choice before starting
    #[arg(long)]
    forget_theme: bool,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    folio::logging::init(effective.log_file.as_deref())?;
    tracing::debug!(?effective, "effective flags");

    let (portfolio, content_path) = match effective.content {
        Some(path) => {
            let portfolio = Portfolio::from_path(&path)
                .with_context(|| format!("Failed to load portfolio {}", path.display()))?;
            (portfolio, Some(path))
        }
        None => (
            Portfolio::bundled().context("Bundled portfolio is invalid")?,
            None,
        ),
    };

    let mut store = FileStore::open(preferences_path());
    tracing::debug!(path = %store.path().display(), "preferences opened");
    if cli.forget_theme {
        store
            .remove(THEME_KEY)
            .context("Failed to forget stored theme")?;
    }

    // Detection talks to the terminal, so it must finish before the TUI starts.
    let system = theme::detect::system_preference(effective.theme.unwrap_or(ThemeMode::Auto));
    let theme = ThemeToggle::init(Box::new(store), system, theme::document());

    let app = App::new(portfolio, theme)
        .with_content_path(content_path)
        .with_watch(effective.watch)
        .with_mouse(!effective.no_mouse)
        .with_config_paths(
            Some(global_path),
            if local_path.exists() {
                Some(local_path)
            } else {
                None
            },
        );

    app.run().context("Application error")
}
