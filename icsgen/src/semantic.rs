// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The calendar entity graph.
//!
//! Entities are mutable value holders: every field has a getter and a
//! validating `set_*` method, and every entity converts to and from a
//! serde-friendly `*Data` representation. Back-references are not stored;
//! the values a child borrows from its parent (time zone, domain, summary)
//! are handed down as [`Inherited`] while rendering.

mod attendee;
mod category;
mod enums;
mod icalendar;
mod mailbox;
mod properties;
mod valarm;
mod vevent;

use std::str::FromStr;

use strum::VariantNames;

pub use attendee::{Attendee, AttendeeData};
pub use category::{Category, CategoryData};
pub use enums::{
    AlarmType, BusyStatus, CalendarMethod, Classification, EventStatus, TimeTransparency,
};
pub use icalendar::{Calendar, CalendarData};
pub use properties::{Description, Geo, Location, Organizer, ProductId, XProperties};
pub use valarm::{Alarm, AlarmAttachment, AlarmData, AlarmRepeat, AlarmTrigger, AlarmTriggerData};
pub use vevent::{Event, EventData};

pub(crate) use attendee::{Delegation, delegate};
pub(crate) use mailbox::parse_mailbox;
pub(crate) use properties::reject_line_breaks;

use crate::error::{Error, Result};

/// Values a child entity takes from its parent when rendered.
#[derive(Debug, Clone, Copy, Default)]
pub struct Inherited<'a> {
    /// Time zone of the calendar, used when an event has none of its own
    pub timezone: Option<&'a str>,
    /// Domain of the calendar, appended to event UIDs
    pub domain: Option<&'a str>,
    /// Summary of the event, the fallback text of its alarms
    pub summary: Option<&'a str>,
}

/// Parse a token of a closed set, reporting every accepted token on failure.
pub(crate) fn parse_closed<T>(field: &'static str, value: &str) -> Result<T>
where
    T: FromStr + VariantNames,
{
    value.trim().parse().map_err(|_| Error::NotInSet {
        field,
        value: value.to_owned(),
        accepted: T::VARIANTS,
    })
}

/// Parse an optional closed-set token.
pub(crate) fn parse_closed_opt<T>(field: &'static str, value: Option<&str>) -> Result<Option<T>>
where
    T: FromStr + VariantNames,
{
    value.map(|v| parse_closed(field, v)).transpose()
}
