// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! iCalendar (RFC 5545) formatter module.
//!
//! This module renders the entity graph to the RFC 5545 text format,
//! writing to any `std::io::Write` implementer. Content lines end with CRLF
//! and are folded into physical lines of at most 75 octets by default.
//!
//! # Example
//!
//! ```
//! use icsgen::{Calendar, FormatOptions, formatter};
//!
//! let calendar = Calendar::new();
//!
//! // Format with the default options
//! let ics = formatter::format(&calendar)?;
//! assert!(ics.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n"));
//!
//! // Or disable folding
//! let ics = FormatOptions::default().folding(None).write_to_string(&calendar)?;
//! assert!(ics.ends_with("END:VCALENDAR\r\n"));
//! # Ok::<(), icsgen::Error>(())
//! ```

mod component;
mod property;

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::semantic::Calendar;

pub(crate) use component::{write_valarm, write_vevent};
pub(crate) use property::write_attendee;

use component::write_icalendar;

/// Convenience function to format a [`Calendar`] to a `String` (uses default options).
///
/// # Errors
///
/// Returns an error if a required field is missing anywhere in the graph.
/// Nothing is returned on failure; rendering is all-or-nothing.
pub fn format(calendar: &Calendar) -> Result<String> {
    FormatOptions::default().write_to_string(calendar)
}

/// Formatting options for the iCalendar formatter.
///
/// Deserializable from a host configuration file:
///
/// ```toml
/// folding = 75
/// folding-style = "space"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FormatOptions {
    /// Maximum line length in octets before folding.
    /// - `None` or `Some(0)`: no line folding
    /// - `Some(n)`: fold lines longer than n octets
    ///
    /// Default: `Some(75)` for RFC 5545 compliance.
    pub folding: Option<usize>,

    /// Line folding style.
    ///
    /// Default: `FoldingStyle::Space` (CRLF + SPACE).
    pub folding_style: FoldingStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            folding: Some(75),
            folding_style: FoldingStyle::default(),
        }
    }
}

impl FormatOptions {
    /// Set the line folding option.
    #[must_use]
    pub fn folding(mut self, folding: Option<usize>) -> Self {
        self.folding = folding;
        self
    }

    /// Set the line folding style.
    #[must_use]
    pub const fn folding_style(mut self, style: FoldingStyle) -> Self {
        self.folding_style = style;
        self
    }

    /// Convenience method to write a [`Calendar`] to any `Write` implementer.
    ///
    /// The calendar is rendered completely before the first byte reaches `w`.
    ///
    /// # Errors
    /// Returns an error if rendering or writing fails.
    pub fn write(&self, calendar: &Calendar, w: &mut impl Write) -> Result<()> {
        let text = self.write_to_string(calendar)?;
        w.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Convenience method to write a [`Calendar`] to a `String`.
    ///
    /// # Errors
    /// Returns an error if a required field is missing anywhere in the graph.
    pub fn write_to_string(&self, calendar: &Calendar) -> Result<String> {
        tracing::debug!(events = calendar.len(), "formatting calendar");
        render(*self, |f| write_icalendar(f, calendar))
    }
}

/// Line folding style for RFC 5545 formatting.
///
/// RFC 5545 specifies that folded lines should start with CRLF followed by
/// a whitespace character (SPACE or TAB).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoldingStyle {
    /// CRLF + SPACE (RFC 5545 default)
    #[default]
    Space,
    /// CRLF + TAB
    Tab,
}

impl FoldingStyle {
    /// Get the folding sequence for this style.
    #[must_use]
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Space => "\r\n ",
            Self::Tab => "\r\n\t",
        }
    }

    /// Get the length of the continuation character after CRLF.
    #[must_use]
    pub(crate) const fn continuation_len() -> usize {
        1 // Both SPACE and TAB are 1 byte
    }
}

/// iCalendar formatter that writes to any `Write` implementer.
///
/// Bytes written through the `Write` impl are collected into the current
/// content line; [`Formatter::writeln`] folds the line and terminates it
/// with CRLF.
#[derive(Debug)]
pub struct Formatter<W: Write> {
    /// The underlying writer.
    writer: W,
    /// Formatting options.
    options: FormatOptions,
    /// The current, not yet terminated, content line.
    line: Vec<u8>,
}

impl<W: Write> Formatter<W> {
    /// Create a new formatter with options.
    #[must_use]
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            line: Vec::new(),
        }
    }

    /// Get a reference to the underlying writer.
    #[must_use]
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consumes this formatter, returning the underlying writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write a [`Calendar`] to the underlying writer.
    ///
    /// # Errors
    /// Returns an error if rendering or writing fails.
    pub fn write_calendar(&mut self, calendar: &Calendar) -> Result<()> {
        write_icalendar(self, calendar)
    }

    /// Terminate the current content line with CRLF, folding it first.
    pub(crate) fn writeln(&mut self) -> io::Result<()> {
        let line = std::str::from_utf8(&self.line)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut folded = String::with_capacity(line.len() + line.len() / 32 + 2);
        fold_line(line, self.options, &mut folded);
        folded.push_str("\r\n");

        self.writer.write_all(folded.as_bytes())?;
        self.line.clear();
        Ok(())
    }
}

impl<W: Write> Write for Formatter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.line.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Render into a fresh buffer. Nothing is returned unless `write` succeeds.
pub(crate) fn render<F>(options: FormatOptions, write: F) -> Result<String>
where
    F: FnOnce(&mut Formatter<&mut Vec<u8>>) -> Result<()>,
{
    let mut buffer = Vec::new();
    let mut formatter = Formatter::new(&mut buffer, options);
    write(&mut formatter)?;
    let text = String::from_utf8(buffer)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(text)
}

/// Fold every CRLF-separated logical line of `text` into physical lines of
/// at most 75 octets, continuation lines starting with a single space.
///
/// Multi-byte characters are never split.
#[must_use]
pub fn fold_lines(text: &str) -> String {
    let options = FormatOptions::default();
    let mut out = String::with_capacity(text.len() + text.len() / 32);
    for (i, line) in text.split("\r\n").enumerate() {
        if i > 0 {
            out.push_str("\r\n");
        }
        fold_line(line, options, &mut out);
    }
    out
}

/// Reverse [`fold_lines`]: join continuation lines with their predecessor.
#[must_use]
pub fn unfold_lines(text: &str) -> String {
    text.replace("\r\n ", "").replace("\r\n\t", "")
}

/// Append `line` to `out`, inserting a fold before any character that would
/// push the physical line past the limit.
fn fold_line(line: &str, options: FormatOptions, out: &mut String) {
    let limit = match options.folding {
        Some(limit) if limit > 0 => limit,
        _ => {
            out.push_str(line);
            return;
        }
    };

    // Room after the continuation character, also applied to the first line
    let max = limit
        .saturating_sub(FoldingStyle::continuation_len())
        .max(1);
    let mut len = 0;
    for c in line.chars() {
        let width = c.len_utf8();
        if len > 0 && len + width > max {
            out.push_str(options.folding_style.as_str());
            len = 0;
        }
        out.push(c);
        len += width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn physical_lines(text: &str) -> Vec<&str> {
        text.split("\r\n").collect()
    }

    #[test]
    fn keeps_short_lines() {
        let text = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n";
        assert_eq!(fold_lines(text), text);
    }

    #[test]
    fn folds_long_lines() {
        let line = format!("DESCRIPTION:{}", "x".repeat(200));
        let folded = fold_lines(&line);

        let lines = physical_lines(&folded);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 74);
        assert!(lines[1].starts_with(' '));
        assert!(lines.iter().all(|l| l.len() <= 75));
        assert_eq!(unfold_lines(&folded), line);
    }

    #[test]
    fn never_splits_characters() {
        let line = format!("SUMMARY:{}", "日本語テキスト".repeat(20));
        let folded = fold_lines(&line);

        for l in physical_lines(&folded) {
            assert!(l.len() <= 75, "line too long: {l:?}");
        }
        assert_eq!(unfold_lines(&folded), line);
    }

    #[test]
    fn folds_with_tab() {
        let options = FormatOptions::default()
            .folding(Some(10))
            .folding_style(FoldingStyle::Tab);
        let mut out = String::new();
        fold_line("SUMMARY:abcdefghij", options, &mut out);
        assert_eq!(out, "SUMMARY:a\r\n\tbcdefghij");
        assert_eq!(unfold_lines(&out), "SUMMARY:abcdefghij");
    }

    #[test]
    fn disables_folding() {
        let line = "x".repeat(100);
        for folding in [None, Some(0)] {
            let mut out = String::new();
            fold_line(&line, FormatOptions::default().folding(folding), &mut out);
            assert_eq!(out, line);
        }
    }

    #[test]
    fn formatter_folds_each_line() {
        let options = FormatOptions::default().folding(Some(10));
        let mut buffer = Vec::new();
        let mut f = Formatter::new(&mut buffer, options);
        write!(f, "SUMMARY:abcdefghij").unwrap();
        f.writeln().unwrap();
        write!(f, "A:b").unwrap();
        f.writeln().unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "SUMMARY:a\r\n bcdefghij\r\nA:b\r\n"
        );
    }

    #[test]
    fn deserializes_options() {
        let options: FormatOptions =
            serde_json::from_str(r#"{"folding": 60, "folding-style": "tab"}"#).unwrap();
        assert_eq!(options.folding, Some(60));
        assert_eq!(options.folding_style, FoldingStyle::Tab);

        let options: FormatOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, FormatOptions::default());
    }
}
