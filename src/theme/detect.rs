//! System color-scheme detection.
//!
//! Terminals have no `prefers-color-scheme`, so the background color is
//! queried with OSC 11 and classified by luma. `COLORFGBG` is the fallback.

use std::time::Duration;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use super::Theme;
use crate::config::ThemeMode;

/// Resolve the system preference, honoring an explicit override.
pub fn system_preference(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Light => Theme::Light,
        ThemeMode::Dark => Theme::Dark,
        ThemeMode::Auto => query_background()
            .or_else(|| std::env::var("COLORFGBG").ok().as_deref().and_then(theme_from_colorfgbg))
            .unwrap_or_default(),
    }
}

fn query_background() -> Option<Theme> {
    let _raw = enable_raw_mode();
    let result = query_terminal_background();
    let _ = disable_raw_mode();
    match result {
        Ok(rgb) => rgb.map(|(r, g, b)| theme_from_rgb(r, g, b)),
        Err(err) => {
            tracing::debug!("terminal background query failed: {err}");
            None
        }
    }
}

// Query the terminal background using OSC 11.
// We talk to /dev/tty so the terminal responds even when stdout is piped.
// On non-Unix platforms the query is skipped: the stdin fallback would leave
// a reader thread blocking console input.
#[cfg(not(unix))]
fn query_terminal_background() -> std::io::Result<Option<(u8, u8, u8)>> {
    Ok(None)
}

#[cfg(unix)]
fn query_terminal_background() -> std::io::Result<Option<(u8, u8, u8)>> {
    use std::io::{Read, Write};
    use std::sync::mpsc;

    let (tx, rx) = mpsc::channel();

    let mut io = std::fs::OpenOptions::new()
        .read(true)
        .write(true)
        .open("/dev/tty")?;
    let reader = io.try_clone()?;

    // ESC ] 11 ; ? BEL
    io.write_all(b"\x1b]11;?\x07")?;
    io.flush()?;

    std::thread::spawn(move || {
        let mut reader = reader;
        let mut buf = [0u8; 256];
        let mut collected: Vec<u8> = Vec::new();
        loop {
            match reader.read(&mut buf) {
                Ok(0) => {}
                Ok(n) => {
                    collected.extend_from_slice(&buf[..n]);
                    if collected.contains(&b'\x07') || collected.windows(2).any(|w| w == b"\x1b\\")
                    {
                        let _ = tx.send(collected);
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });

    let Ok(bytes) = rx.recv_timeout(Duration::from_millis(75)) else {
        return Ok(None);
    };
    Ok(parse_osc11_reply(&String::from_utf8_lossy(&bytes)))
}

fn theme_from_rgb(r: u8, g: u8, b: u8) -> Theme {
    let luma = 0.0722f32.mul_add(
        f32::from(b),
        0.2126f32.mul_add(f32::from(r), 0.7152 * f32::from(g)),
    );
    if luma >= 140.0 {
        Theme::Light
    } else {
        Theme::Dark
    }
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`); backgrounds 7 and 15 are light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg = value.rsplit(';').next()?.trim().parse::<u8>().ok()?;
    Some(if matches!(bg, 7 | 15) {
        Theme::Light
    } else {
        Theme::Dark
    })
}

fn parse_osc11_reply(reply: &str) -> Option<(u8, u8, u8)> {
    // Expect: ESC ] 11 ; rgb:RRRR/GGGG/BBBB BEL or ST
    let start = reply.find("rgb:")?;
    let data = &reply[start + 4..];
    let mut parts = data.split(['/', '\x07', '\x1b']);
    let r = parts.next()?;
    let g = parts.next()?;
    let b = parts.next()?;
    Some((
        parse_osc_component(r)?,
        parse_osc_component(g)?,
        parse_osc_component(b)?,
    ))
}

fn parse_osc_component(s: &str) -> Option<u8> {
    let hex = s.trim();
    if hex.len() >= 4 {
        let v = u16::from_str_radix(&hex[..4], 16).ok()?;
        u8::try_from(v >> 8).ok()
    } else if hex.len() == 2 {
        u8::from_str_radix(hex, 16).ok()
    } else {
        None
    }
}
