//! Status lines for the blockforge CLI. Human output goes to stderr so
//! stdout stays free for `--json`.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const VERB_WIDTH: usize = 12;

/// Colour of the verb column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Status,
    Info,
}

impl Tone {
    fn code(self) -> &'static str {
        match self {
            Tone::Status => "\x1b[32m",
            Tone::Info => "\x1b[36m",
        }
    }
}

/// Right-aligned verb, then the message. Colour only when stderr is a tty.
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// `  Generating terrain/classic flat 512x512`
    pub fn status(&self, verb: &str, message: &str) {
        self.emit(Tone::Status, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.emit(Tone::Info, verb, message);
    }

    pub fn dim(&self, text: &str) -> String {
        match self.color {
            true => format!("{DIM}{text}{RESET}"),
            false => text.to_string(),
        }
    }

    fn line(&self, tone: Tone, verb: &str, message: &str) -> String {
        match self.color {
            true => format!("{BOLD}{}{verb:>VERB_WIDTH$}{RESET} {message}", tone.code()),
            false => format!("{verb:>VERB_WIDTH$} {message}"),
        }
    }

    fn emit(&self, tone: Tone, verb: &str, message: &str) {
        let _ = writeln!(io::stderr().lock(), "{}", self.line(tone, verb, message));
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Path relative to the working directory when it sits beneath it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}

/// `format_bytes(2048)` is `"2.0 KiB"`.
pub fn format_bytes(n: usize) -> String {
    const KIB: f64 = 1024.0;
    match n {
        0..=1023 => format!("{} B", n),
        _ if (n as f64) < KIB * KIB => format!("{:.1} KiB", n as f64 / KIB),
        _ => format!("{:.1} MiB", n as f64 / (KIB * KIB)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KiB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MiB");
    }

    #[test]
    fn test_display_path_outside_cwd() {
        let p = Path::new("/nonexistent/path/to/file");
        assert_eq!(display_path(p), "/nonexistent/path/to/file");
    }

    #[test]
    fn test_display_path_cwd_itself() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(display_path(&cwd), ".");
        assert_eq!(display_path(&cwd.join("dist/a.png")), "dist/a.png");
    }

    #[test]
    fn test_plain_line_alignment() {
        let printer = Printer { color: false };
        assert_eq!(printer.dim("x"), "x");
        assert_eq!(
            printer.line(Tone::Status, "Wrote", "dist/a.png"),
            "       Wrote dist/a.png"
        );
    }

    #[test]
    fn test_coloured_line_uses_tone() {
        let printer = Printer { color: true };
        let line = printer.line(Tone::Info, "classic", "8 entries");
        assert!(line.starts_with("\x1b[1m\x1b[36m"));
        assert!(line.ends_with("\x1b[0m 8 entries"));
    }
}
