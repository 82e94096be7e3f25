// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Scalar encoders for iCalendar property values.
//!
//! These are the leaves every component formatter is built on: date-time
//! projection (RFC 5545 Section 3.3.5), durations (Section 3.3.6), text
//! escaping (Section 3.3.11) and recurrence rules (Section 3.3.10).

mod datetime;
mod duration;
mod rrule;
mod text;

pub use datetime::{DateFlags, format_date, format_date_tz, resolve_time_zone};
pub use duration::to_duration_string;
pub use rrule::{
    RecurrenceFrequency, Repeating, RepeatingData, RepeatingOptions, RepeatingOptionsData,
    ToRecurrenceString, WeekDay, WeekDayNum,
};
pub use text::{escape, unescape};

pub(crate) use rrule::recurrence_lines;
