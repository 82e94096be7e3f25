// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Build calendars in memory and render them as iCalendar (RFC 5545) text.
//!
//! The entity graph is [`Calendar`] → [`Event`] → {[`Attendee`], [`Alarm`],
//! [`Category`]}. Every entity validates its fields when they are set and
//! renders itself on demand; [`Calendar::to_ical_string`] walks the whole
//! graph and folds the result into 75-octet physical lines.
//!
//! ```
//! use icsgen::{Calendar, EventData};
//!
//! let mut calendar = Calendar::new();
//! calendar.set_name("Team");
//! let event = calendar.create_event(EventData::default())?;
//! event
//!     .set_start("2024-05-01T09:00:00Z".parse()?)
//!     .set_end(Some("2024-05-01T10:00:00Z".parse()?))
//!     .set_summary("Standup");
//!
//! let ics = calendar.to_ical_string()?;
//! assert!(ics.contains("SUMMARY:Standup\r\n"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(
    clippy::option_option,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::match_bool,
    clippy::return_self_not_must_use
)]

mod error;
pub mod formatter;
pub mod keyword;
pub mod parameter;
pub mod semantic;
pub mod sink;
pub mod value;

pub use crate::error::{Error, Result};
pub use crate::formatter::{FoldingStyle, FormatOptions, fold_lines, format, unfold_lines};
pub use crate::parameter::{
    AlarmTriggerRelationship, CalendarUserType, ParticipationRole, ParticipationStatus,
};
pub use crate::semantic::{
    Alarm, AlarmAttachment, AlarmData, AlarmRepeat, AlarmTrigger, AlarmTriggerData, AlarmType,
    Attendee, AttendeeData, BusyStatus, Calendar, CalendarData, CalendarMethod, Category,
    CategoryData, Classification, Description, Event, EventData, EventStatus, Geo, Inherited,
    Location, Organizer, ProductId, TimeTransparency, XProperties,
};
pub use crate::value::{
    DateFlags, RecurrenceFrequency, Repeating, RepeatingData, RepeatingOptions,
    RepeatingOptionsData, ToRecurrenceString, WeekDay, WeekDayNum, escape, format_date,
    format_date_tz, to_duration_string, unescape,
};
