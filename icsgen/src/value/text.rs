// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Text escaping as defined in RFC 5545 Section 3.3.11.
//!
//! ```txt
//! ESCAPED-CHAR = ("\\" / "\;" / "\," / "\N" / "\n")
//!    ; \\ encodes \, \N or \n encodes newline
//!    ; \; encodes ;, \, encodes ,
//! ```

use std::borrow::Cow;

/// Escape a text value for output.
///
/// Backslash, semicolon, comma and double quote are prefixed with a
/// backslash, and every line break (`\r\n`, `\r` or `\n`) becomes the two
/// characters `\n`. With `in_quotes` the value is going inside a quoted
/// parameter, so colons are escaped as well.
#[must_use]
pub fn escape(text: &str, in_quotes: bool) -> Cow<'_, str> {
    let needs_escape = |c: char| {
        matches!(c, '\\' | ';' | ',' | '"' | '\r' | '\n') || (in_quotes && c == ':')
    };
    if !text.contains(needs_escape) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\\n");
            }
            '\n' => out.push_str("\\n"),
            c if needs_escape(c) => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Reverse [`escape`]: `\n`/`\N` become a line feed, any other escaped
/// character stands for itself.
#[must_use]
pub fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains('\\') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n' | 'N') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    Cow::Owned(out)
}
