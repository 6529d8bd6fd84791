use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(json: bool) {
    JSON_MODE.store(json, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

/// Human output implemented by every command result.
pub trait Render {
    fn render(&self, out: &mut StandardStream) -> io::Result<()>;
}

pub fn print<T: Serialize + Render>(value: &T) -> anyhow::Result<()> {
    if is_json() {
        let s = serde_json::to_string_pretty(value)?;
        println!("{s}");
        return Ok(());
    }
    let mut out = stdout();
    value.render(&mut out)?;
    out.flush()?;
    Ok(())
}

/// `label: value` line with a dimmed label.
pub fn field(out: &mut StandardStream, label: &str, value: impl std::fmt::Display) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_dimmed(true))?;
    write!(out, "{label}: ")?;
    out.reset()?;
    writeln!(out, "{value}")
}

/// Green or red status word.
pub fn status(out: &mut StandardStream, ok: bool, yes: &str, no: &str) -> io::Result<()> {
    let (color, word) = if ok { (Color::Green, yes) } else { (Color::Red, no) };
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    writeln!(out, "{word}")?;
    out.reset()
}

pub fn stdout() -> StandardStream {
    StandardStream::stdout(ColorChoice::Auto)
}
