//! Terminal output: the `log!` macro and an in-place progress line.
//!
//! ```ignore
//! log!("page"; "services: {err}");
//!
//! let progress = Progress::new("check", DocumentName::ALL.len());
//! progress.inc();
//! progress.finish();
//! ```

use colored::{ColoredString, Colorize};
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType, size},
};
use parking_lot::Mutex;
use std::{
    io::{Write, stderr},
    sync::{
        OnceLock,
        atomic::{AtomicUsize, Ordering},
    },
};

static TERMINAL_WIDTH: OnceLock<u16> = OnceLock::new();

// ============================================================================
// Layout
// ============================================================================
//
// "[check] [████░░░░] 4/11"
//  ^-----^ ^-------^ ^--^
//  prefix  bar       count

/// "[" + "]" + " "
const PREFIX_OVERHEAD: usize = 3;
/// " []" around the bar plus the space before the count.
const BAR_OVERHEAD: usize = 4;
const MIN_BAR_WIDTH: usize = 10;
const MAX_BAR_WIDTH: usize = 40;

#[inline]
const fn prefix_len(module_len: usize) -> usize {
    module_len + PREFIX_OVERHEAD
}

fn terminal_width() -> usize {
    *TERMINAL_WIDTH.get_or_init(|| size().map(|(w, _)| w).unwrap_or(120)) as usize
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix.
///
/// Log lines go to stderr so `qsite fetch` output stays pipeable.
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::utils::log::log($module, &format!($($arg)*))
    }};
}

/// Write one prefixed line, truncated to the terminal width.
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let max_len = terminal_width().saturating_sub(prefix_len(module.len()));
    let message = truncate_str(message, max_len);

    let mut out = stderr().lock();
    execute!(out, Clear(ClearType::UntilNewLine)).ok();
    writeln!(out, "{prefix} {message}").ok();
    out.flush().ok();
}

fn colorize_prefix(module: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "serve" => prefix.bright_blue().bold(),
        "check" => prefix.bright_green().bold(),
        "contact" => prefix.bright_magenta().bold(),
        "error" => prefix.bright_red().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

/// Cut `s` to at most `max_len` bytes on a char boundary.
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

// ============================================================================
// Progress
// ============================================================================

/// A single progress line redrawn in place.
///
/// Safe to advance from worker threads.
pub struct Progress {
    prefix: ColoredString,
    prefix_len: usize,
    total: usize,
    current: AtomicUsize,
    lock: Mutex<()>,
}

impl Progress {
    pub fn new(module: &'static str, total: usize) -> Self {
        let mut out = stderr().lock();
        writeln!(out).ok();
        out.flush().ok();

        Self {
            prefix: colorize_prefix(module),
            prefix_len: prefix_len(module.len()),
            total,
            current: AtomicUsize::new(0),
            lock: Mutex::new(()),
        }
    }

    pub fn inc(&self) {
        let current = self.current.fetch_add(1, Ordering::Relaxed) + 1;
        self.display(current);
    }

    fn display(&self, current: usize) {
        let _guard = self.lock.lock();

        let count = format!("{current}/{}", self.total);
        let available = terminal_width().saturating_sub(self.prefix_len + BAR_OVERHEAD + count.len());
        let bar = render_bar(current, self.total, available.clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH));

        let mut out = stderr().lock();
        execute!(out, cursor::MoveUp(1), Clear(ClearType::CurrentLine)).ok();
        writeln!(out, "{} [{bar}] {count}", self.prefix).ok();
        out.flush().ok();
    }

    /// Clear the progress line.
    pub fn finish(&self) {
        let _guard = self.lock.lock();
        let mut out = stderr().lock();
        execute!(out, cursor::MoveUp(1), Clear(ClearType::CurrentLine)).ok();
        out.flush().ok();
    }
}

fn render_bar(current: usize, total: usize, width: usize) -> String {
    let filled = if total > 0 {
        (current.min(total) * width) / total
    } else {
        0
    };
    "█".repeat(filled) + &"░".repeat(width - filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_len() {
        // "[check] "
        assert_eq!(prefix_len(5), 8);
        assert_eq!(prefix_len(0), 3);
    }

    #[test]
    fn test_truncate_str_ascii() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello", 5), "hello");
        assert_eq!(truncate_str("hello world", 5), "hello");
        assert_eq!(truncate_str("hello", 0), "");
    }

    #[test]
    fn test_truncate_str_unicode_boundary() {
        // "⟳" is 3 bytes
        assert_eq!(truncate_str("⟳ loading", 2), "");
        assert_eq!(truncate_str("⟳ loading", 4), "⟳ ");
        assert_eq!(truncate_str("a•b", 3), "a");
    }

    #[test]
    fn test_render_bar() {
        assert_eq!(render_bar(0, 4, 4), "░░░░");
        assert_eq!(render_bar(2, 4, 4), "██░░");
        assert_eq!(render_bar(9, 4, 4), "████");
        assert_eq!(render_bar(1, 0, 2), "░░");
    }
}
