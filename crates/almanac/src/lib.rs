//! Almanac - field-report logging for the Cropsight tools
//!
//! Small, dependency-light terminal reporting: colored level-prefixed
//! messages plus banner helpers for load/success/warning moments.
//!
//! All output goes to stderr so stdout stays clean for data (tables,
//! insight text) that callers may want to pipe elsewhere.

use colored::*;

/// Write a message to stderr, one line at a time
pub fn log(message: &str) {
  for line in message.lines() {
    eprintln!("{line}");
  }
}

/// Build the colored, width-aligned level tag for a message.
/// Padding is computed from the raw level name since the colored form
/// carries escape codes that defeat format-width alignment.
fn level_tag(color: Color, level: &str) -> String {
  format!("[{}]{:width$}", level.color(color).bold(), "", width = 6_usize.saturating_sub(level.len()))
}

/// Info level - general progress reporting
pub fn info(message: &str) {
  let tag = level_tag(Color::Blue, "info");
  for line in message.lines() {
    log(&format!("{tag} {line}"));
  }
}

/// Warning level - something needs attention but work continues
pub fn warn(message: &str) {
  let tag = level_tag(Color::Yellow, "warn");
  for line in message.lines() {
    log(&format!("{tag} {line}"));
  }
}

/// Error level - something went wrong
pub fn error(message: &str) {
  let tag = level_tag(Color::Red, "error");
  for line in message.lines() {
    log(&format!("{tag} {line}"));
  }
}

/// Success level - a step completed cleanly
pub fn success(message: &str) {
  let tag = level_tag(Color::Green, "done");
  for line in message.lines() {
    log(&format!("{tag} {line}"));
  }
}

/// Debug level - diagnostic detail
pub fn debug(message: &str) {
  let tag = level_tag(Color::Magenta, "debug");
  for line in message.lines() {
    log(&format!("{tag} {line}"));
  }
}

/// Build a horizontal rule of `length` repetitions of `char`
pub fn banner_line(length: usize, char: char) -> String {
  char.to_string().repeat(length)
}

/// Log a message framed above and below by a banner rule
pub fn as_banner<F>(log_fn: F, message: &str, width: Option<usize>, border_char: Option<char>)
where
  F: Fn(&str),
{
  let width = width.unwrap_or(50);
  let border_char = border_char.unwrap_or('=');

  let rule = banner_line(width, border_char);

  log_fn(&rule);
  log_fn(message);
  log_fn(&rule);
}
