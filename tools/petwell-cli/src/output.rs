//! Terminal output.
//!
//! Human mode styles text with `console`; JSON mode keeps stdout for the
//! command's JSON document and sends only errors to stderr.

use std::fmt::Display;

use console::{style, StyledObject};
use petwell_commerce::card::Badge;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Human { verbose: bool },
    Json,
}

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    mode: Mode,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        let mode = if json { Mode::Json } else { Mode::Human { verbose } };
        Self { mode }
    }

    pub fn is_json(&self) -> bool {
        self.mode == Mode::Json
    }

    fn line(&self, marker: StyledObject<&str>, msg: impl Display) {
        if !self.is_json() {
            println!("{} {}", marker, msg);
        }
    }

    pub fn info(&self, msg: &str) {
        self.line(style("ℹ").blue(), msg);
    }

    pub fn success(&self, msg: &str) {
        self.line(style("✓").green(), msg);
    }

    /// Warnings go to stderr so piped listings stay clean.
    pub fn warn(&self, msg: &str) {
        if !self.is_json() {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    pub fn error(&self, msg: &str) {
        match self.mode {
            Mode::Json => eprintln!("{}", serde_json::json!({ "error": msg })),
            Mode::Human { .. } => eprintln!("{} {}", style("✗").red(), style(msg).red()),
        }
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if let Mode::Human { verbose: true } = self.mode {
            eprintln!("{} {}", style("→").dim(), style(msg).dim());
        }
    }

    pub fn header(&self, msg: &str) {
        if !self.is_json() {
            println!("\n{}", style(msg).bold().underlined());
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if !self.is_json() {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    pub fn list_item(&self, item: &str) {
        self.line(style("  •").dim(), item);
    }

    /// Left-aligned columns padded to `widths`.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.is_json() {
            return;
        }
        let cells: Vec<String> = cols
            .iter()
            .zip(widths)
            .map(|(col, &width)| format!("{:width$}", col))
            .collect();
        println!("  {}", cells.join("  ").trim_end());
    }

    /// Pretty-print a JSON document to stdout.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => self.error(&format!("Failed to encode output: {}", e)),
        }
    }
}

/// Styled card badge.
pub fn badge(badge: &Badge) -> String {
    match badge {
        Badge::Discount(_) => style(badge).red().bold().to_string(),
        Badge::Featured => style(badge).cyan().to_string(),
        Badge::OutOfStock => style(badge).dim().to_string(),
    }
}

/// Badges joined by spaces.
pub fn badges(list: &[Badge]) -> String {
    list.iter().map(badge).collect::<Vec<_>>().join(" ")
}

pub fn stock_status(in_stock: bool) -> String {
    if in_stock {
        style("in stock").green().to_string()
    } else {
        style("out of stock").red().to_string()
    }
}
