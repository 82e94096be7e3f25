// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the file and HTTP sinks.

use std::fs;

use icsgen::sink::{http_headers, write_to_path};
use icsgen::{Calendar, EventData};

#[test]
fn test_write_to_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("team.ics");

    let mut calendar = Calendar::new();
    calendar.set_name("Team");
    let event = calendar.create_event(EventData::default()).unwrap();
    event
        .set_start("2024-05-01T09:00:00Z".parse().unwrap())
        .set_summary("Standup");

    write_to_path(&calendar, &path).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, calendar.to_ical_string().unwrap());
}

#[test]
fn test_write_to_path_leaves_no_file_on_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.ics");

    let mut calendar = Calendar::new();
    calendar.create_event(EventData::default()).unwrap();

    assert!(write_to_path(&calendar, &path).is_err());
    assert!(!path.exists());
}

#[test]
fn test_write_to_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("team.ics");
    let err = write_to_path(&Calendar::new(), &path).unwrap_err();
    assert!(matches!(err, icsgen::Error::Io(_)));
}

#[test]
fn test_http_headers() {
    let headers = http_headers("team.ics");
    assert_eq!(headers[0].0, "Content-Type");
    assert_eq!(headers[0].1, "text/calendar; charset=utf-8");
    assert_eq!(headers[1].0, "Content-Disposition");
    assert_eq!(headers[1].1, "attachment; filename=\"team.ics\"");
}
