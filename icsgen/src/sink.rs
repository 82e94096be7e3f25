// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Consumers of rendered calendars.
//!
//! Sinks only ever see the finished text; the formatter never calls them.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::semantic::Calendar;

/// Media type of iCalendar files.
pub const CONTENT_TYPE: &str = "text/calendar; charset=utf-8";

/// Render `calendar` and write it to `path`, replacing any existing file.
///
/// Nothing is written when rendering fails.
///
/// # Errors
///
/// Returns an error if rendering fails or the file cannot be written.
pub fn write_to_path(calendar: &Calendar, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let content = calendar.to_ical_string()?;
    fs::write(path, &content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "calendar written");
    Ok(())
}

/// Response headers for serving a rendered calendar as a download.
///
/// Quotes and backslashes in `filename` are escaped for the quoted-string.
#[must_use]
pub fn http_headers(filename: &str) -> [(&'static str, String); 2] {
    let filename = filename.replace('\\', "\\\\").replace('"', "\\\"");
    [
        ("Content-Type", CONTENT_TYPE.to_owned()),
        (
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        ),
    ]
}
