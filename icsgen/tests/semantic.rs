// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for entity behavior and validation.

use icsgen::{
    Alarm, AlarmType, Attendee, AttendeeData, Calendar, CalendarData, Category, Error, Event,
    EventData, Inherited, ParticipationStatus, RecurrenceFrequency, RepeatingOptions,
};
use jiff::Timestamp;

fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

#[test]
fn test_alarm_trigger_before_and_after() {
    let alarm = Alarm::new(AlarmType::Display, 300);
    let text = alarm.to_ical_string().unwrap();
    assert!(text.contains("\r\nTRIGGER:-PT5M\r\n"));

    let mut alarm = Alarm::new(AlarmType::Display, 0);
    alarm.set_trigger_after(300);
    let text = alarm.to_ical_string().unwrap();
    assert!(text.contains("\r\nTRIGGER;RELATED=END:PT5M\r\n"));

    let mut alarm = Alarm::new(AlarmType::Display, 0);
    alarm.set_trigger(-300);
    assert_eq!(
        alarm.to_ical_string().unwrap(),
        Alarm::new(AlarmType::Display, 0)
            .set_trigger_after(300)
            .to_ical_string()
            .unwrap()
    );
}

#[test]
fn test_alarm_takes_event_summary() {
    let alarm = Alarm::new(AlarmType::Email, 60);
    let inherited = Inherited {
        summary: Some("Retro"),
        ..Inherited::default()
    };
    let text = alarm.to_ical_string_in(inherited).unwrap();
    assert!(text.contains("\r\nDESCRIPTION:Retro\r\nSUMMARY:Retro\r\n"));
}

#[test]
fn test_attendee_delegation_status() {
    let mut attendee = Attendee::new("me@example.com");
    attendee.set_delegated_to("foo@example.com");
    assert_eq!(attendee.status(), Some(ParticipationStatus::Delegated));

    attendee.clear_delegated_to();
    assert_eq!(attendee.status(), None);
    assert_eq!(attendee.delegated_to(), None);
}

#[test]
fn test_attendee_keeps_explicit_status() {
    let mut attendee = Attendee::new("me@example.com");
    attendee.set_delegated_to("foo@example.com");
    attendee.set_status(Some(ParticipationStatus::Accepted));
    attendee.clear_delegated_to();
    assert_eq!(attendee.status(), Some(ParticipationStatus::Accepted));
}

#[test]
fn test_event_delegation_links_both_sides() {
    let mut event = Event::new();
    event
        .create_attendee("Matt <matt@example.com>".parse().unwrap())
        .unwrap();
    let delegate = event
        .delegates_to(0, AttendeeData::with_email("anna@example.com"))
        .unwrap();
    assert_eq!(delegate.delegated_from(), Some("matt@example.com"));

    let matt = event.attendee_by_email("MATT@example.com").unwrap();
    assert_eq!(matt.status(), Some(ParticipationStatus::Delegated));
    let target = event.attendee_by_email(matt.delegated_to().unwrap()).unwrap();
    assert_eq!(target.email(), Some("anna@example.com"));

    event.set_start(ts("2024-01-01T10:00:00Z"));
    let text = event.to_ical_string().unwrap();
    assert!(text.contains(
        "ATTENDEE;ROLE=REQ-PARTICIPANT;PARTSTAT=DELEGATED;\
DELEGATED-TO=\"mailto:anna@example.com\";CN=\"Matt\":MAILTO:matt@example.com\r\n"
    ));
    assert!(text.contains(
        "ATTENDEE;ROLE=REQ-PARTICIPANT;\
DELEGATED-FROM=\"mailto:matt@example.com\":MAILTO:anna@example.com\r\n"
    ));
}

#[test]
fn test_delegation_needs_existing_attendee() {
    let mut event = Event::new();
    let err = event
        .delegates_to(0, AttendeeData::with_email("anna@example.com"))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidValue { field: "attendees", .. }));
    assert!(event.attendees().is_empty());
}

#[test]
fn test_category_without_name() {
    let err = Category::default().to_ical_string().unwrap_err();
    assert!(err.to_string().contains("name"));

    let mut calendar = Calendar::new();
    let event = calendar.create_event(EventData::default()).unwrap();
    event.set_start(ts("2024-01-01T10:00:00Z"));
    event.create_category("".into()).unwrap();
    assert!(calendar.to_ical_string().is_err());
}

#[test]
fn test_event_monthly_rule() {
    let mut event = Event::new();
    event.set_start(ts("2024-01-15T10:00:00Z"));
    event
        .set_repeating(RepeatingOptions {
            by_month: vec![1, 12, 7],
            ..RepeatingOptions::new(RecurrenceFrequency::Monthly)
        })
        .unwrap();

    let text = event.to_ical_string().unwrap();
    assert!(text.contains("\r\nRRULE:FREQ=MONTHLY;BYMONTH=1,12,7\r\n"));
}

#[test]
fn test_event_raw_rule() {
    let mut event = Event::new();
    event.set_start(ts("2024-01-15T10:00:00Z"));
    event
        .set_repeating("DTSTART:20240115T100000Z\nRRULE:FREQ=DAILY;COUNT=2")
        .unwrap();
    let text = event.to_ical_string().unwrap();
    assert!(text.contains("\r\nRRULE:FREQ=DAILY;COUNT=2\r\n"));
    assert_eq!(text.matches("DTSTART").count(), 1);

    event.set_repeating("FREQ=WEEKLY").unwrap();
    let text = event.to_ical_string().unwrap();
    assert!(text.contains("\r\nRRULE:FREQ=WEEKLY\r\n"));
}

#[test]
fn test_event_swaps_start_and_end() {
    let mut event = Event::new();
    event
        .set_start(ts("2024-05-02T00:00:00Z"))
        .set_end(Some(ts("2024-05-01T00:00:00Z")));
    assert!(event.start() <= event.end());
    assert_eq!(event.start(), Some(ts("2024-05-01T00:00:00Z")));
}

#[test]
fn test_event_floating_and_timezone_are_exclusive() {
    let mut event = Event::new();
    event.set_timezone(Some("Asia/Tokyo")).unwrap();
    event.set_floating(true);
    assert!(event.floating());
    assert_eq!(event.timezone(), None);

    event.set_timezone(Some("Asia/Tokyo")).unwrap();
    assert!(!event.floating());
    assert_eq!(event.timezone(), Some("Asia/Tokyo"));
}

#[test]
fn test_event_rejects_unknown_timezone() {
    let mut event = Event::new();
    assert!(event.set_timezone(Some("Mars/Olympus")).is_err());
    assert_eq!(event.timezone(), None);
}

#[test]
fn test_event_inherits_calendar_timezone() {
    let mut calendar = Calendar::new();
    calendar.set_timezone(Some("America/New_York")).unwrap();
    let event = calendar.create_event(EventData::default()).unwrap();
    event.set_start(ts("2024-01-15T15:00:00Z"));

    let text = calendar.to_ical_string().unwrap();
    assert!(text.contains("\r\nDTSTART:20240115T100000Z\r\n"));
}

#[test]
fn test_calendar_rejects_closed_set_tokens() {
    let data = CalendarData {
        method: Some("SHOUT".to_owned()),
        ..CalendarData::default()
    };
    let err = Calendar::from_data(data).unwrap_err();
    assert!(matches!(err, Error::NotInSet { field: "method", .. }));
    assert!(err.to_string().contains("PUBLISH"));
}

#[test]
fn test_x_properties_need_prefix() {
    let mut calendar = Calendar::new();
    assert!(calendar.push_x("CUSTOM", "1").is_err());
    calendar.push_x("x-custom", "a;b").unwrap();

    let text = calendar.to_ical_string().unwrap();
    assert!(text.ends_with("X-CUSTOM:a;b\r\nEND:VCALENDAR\r\n"));
}

#[test]
fn test_x_properties_render_verbatim() {
    let mut calendar = Calendar::new();
    calendar.push_x("X-LINK", "geo:1,2;x").unwrap();
    calendar
        .push_x("X-APPLE-STRUCTURED-LOCATION;VALUE=URI", "geo:52.5,13.3")
        .unwrap();
    assert!(calendar.push_x("X-BAD", "a\r\nMETHOD:CANCEL").is_err());

    let event = calendar.create_event(EventData::default()).unwrap();
    event.set_start(ts("2024-01-01T10:00:00Z"));
    let attendee = event
        .create_attendee(AttendeeData::with_email("m@example.com"))
        .unwrap();
    attendee.push_x("X-RESPONSE", "maybe,later").unwrap();

    let text = calendar.to_ical_string().unwrap();
    assert!(text.contains("\r\nX-LINK:geo:1,2;x\r\n"));
    assert!(text.contains("\r\nX-APPLE-STRUCTURED-LOCATION;VALUE=URI:geo:52.5,13.3\r\n"));
    assert!(text.contains(";X-RESPONSE=maybe,later:MAILTO:m@example.com\r\n"));
}

#[test]
fn test_calendar_clear() {
    let mut calendar = Calendar::new();
    calendar.create_event(EventData::default()).unwrap();
    calendar.create_event(EventData::default()).unwrap();
    assert_eq!(calendar.len(), 2);

    calendar.clear();
    assert!(calendar.is_empty());
}
