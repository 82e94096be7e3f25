// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property formatting for iCalendar properties.
//!
//! Every function writes exactly one content line (or, for recurrences, the
//! lines of one rule) and terminates it.

use std::fmt::Display;
use std::io::Write;

use jiff::Timestamp;

use crate::error::{Error, Result};
use crate::formatter::Formatter;
use crate::keyword::{
    KW_ATTENDEE, KW_CN, KW_CUTYPE, KW_DATE, KW_DELEGATED_FROM, KW_DELEGATED_TO, KW_EMAIL,
    KW_EXDATE, KW_GEO, KW_LOCATION, KW_MAILTO, KW_MAILTO_UPPER, KW_ORGANIZER, KW_PARTSTAT,
    KW_ROLE, KW_RRULE, KW_RSVP, KW_RSVP_FALSE, KW_RSVP_TRUE, KW_SENT_BY, KW_TZID, KW_URI,
    KW_VALUE, KW_X_ADDRESS, KW_X_APPLE_RADIUS, KW_X_APPLE_STRUCTURED_LOCATION, KW_X_TITLE,
};
use crate::semantic::{Attendee, Location, Organizer, XProperties, reject_line_breaks};
use crate::value::{
    DateFlags, Repeating, RepeatingOptions, escape, format_date, format_date_tz, recurrence_lines,
};

/// Write `NAME:value` with the value as is.
pub fn write_prop<W: Write>(f: &mut Formatter<W>, name: &str, value: impl Display) -> Result<()> {
    write!(f, "{name}:{value}")?;
    f.writeln()?;
    Ok(())
}

/// Borrow a value that is written without escaping, rejecting line breaks.
pub fn single_line<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    reject_line_breaks(field, value)?;
    Ok(value)
}

/// Write `NAME:value` with the value escaped as text.
pub fn write_prop_text<W: Write>(f: &mut Formatter<W>, name: &str, text: &str) -> Result<()> {
    write_prop(f, name, escape(text, false))
}

/// Write a date-time property in UTC, e.g. `DTSTAMP:20240101T120000Z`.
pub fn write_prop_utc<W: Write>(f: &mut Formatter<W>, name: &str, value: Timestamp) -> Result<()> {
    write_prop(f, name, format_date(None, value, false, false)?)
}

/// Write a date property, e.g. `DTSTART;VALUE=DATE:20240101`.
pub fn write_prop_date<W: Write>(
    f: &mut Formatter<W>,
    name: &str,
    timezone: Option<&str>,
    value: Timestamp,
) -> Result<()> {
    let date = format_date(timezone, value, true, false)?;
    write!(f, "{name};{KW_VALUE}={KW_DATE}:{date}")?;
    f.writeln()?;
    Ok(())
}

/// Write a date-time property under the owner's time zone rules, e.g.
/// `DTSTART;TZID=Europe/Berlin:20240101T090000`.
pub fn write_prop_date_time<W: Write>(
    f: &mut Formatter<W>,
    name: &str,
    timezone: Option<&str>,
    value: Timestamp,
    owner: DateFlags<'_>,
) -> Result<()> {
    let line = format_date_tz(timezone, name, value, owner)?;
    f.write_all(line.as_bytes())?;
    f.writeln()?;
    Ok(())
}

/// Write custom properties as `KEY:value`, keys uppercased, values verbatim.
pub fn write_x_properties<W: Write>(f: &mut Formatter<W>, x: &XProperties) -> Result<()> {
    for (key, value) in x.iter() {
        write_prop(f, &key.to_ascii_uppercase(), value)?;
    }
    Ok(())
}

/// Write an `ATTENDEE` line.
///
/// ```txt
/// ATTENDEE;ROLE=..[;CUTYPE=..][;PARTSTAT=..][;RSVP=..][;SENT-BY=".."]
///   [;DELEGATED-TO=".."][;DELEGATED-FROM=".."][;CN=".."][;EMAIL=..]
///   [;X-..=..]:MAILTO:..
/// ```
pub fn write_attendee<W: Write>(f: &mut Formatter<W>, attendee: &Attendee) -> Result<()> {
    let email = attendee
        .email()
        .ok_or_else(|| Error::missing("attendee", "email"))?;
    let email = single_line("attendee", email)?;

    write!(f, "{KW_ATTENDEE};{KW_ROLE}={}", attendee.role())?;
    if let Some(user_type) = attendee.user_type() {
        write!(f, ";{KW_CUTYPE}={user_type}")?;
    }
    if let Some(status) = attendee.status() {
        write!(f, ";{KW_PARTSTAT}={status}")?;
    }
    if let Some(rsvp) = attendee.rsvp() {
        let rsvp = if rsvp { KW_RSVP_TRUE } else { KW_RSVP_FALSE };
        write!(f, ";{KW_RSVP}={rsvp}")?;
    }
    if let Some(sent_by) = attendee.sent_by() {
        let sent_by = single_line("attendee", sent_by)?;
        write!(f, ";{KW_SENT_BY}=\"{KW_MAILTO}{sent_by}\"")?;
    }
    if let Some(to) = attendee.delegated_to() {
        let to = single_line("attendee", to)?;
        write!(f, ";{KW_DELEGATED_TO}=\"{KW_MAILTO}{to}\"")?;
    }
    if let Some(from) = attendee.delegated_from() {
        let from = single_line("attendee", from)?;
        write!(f, ";{KW_DELEGATED_FROM}=\"{KW_MAILTO}{from}\"")?;
    }
    if let Some(name) = attendee.name() {
        write!(f, ";{KW_CN}=\"{}\"", escape(name, true))?;
    }
    if attendee.mailto().is_some() {
        write!(f, ";{KW_EMAIL}={email}")?;
    }
    for (key, value) in attendee.x_properties().iter() {
        write!(f, ";{}={value}", key.to_ascii_uppercase())?;
    }
    let address = single_line("attendee", attendee.mailto().unwrap_or(email))?;
    write!(f, ":{KW_MAILTO_UPPER}{address}")?;
    f.writeln()?;
    Ok(())
}

/// Write an `ORGANIZER` line.
pub fn write_organizer<W: Write>(f: &mut Formatter<W>, organizer: &Organizer) -> Result<()> {
    organizer.validate()?;
    write!(f, "{KW_ORGANIZER};{KW_CN}=\"{}\"", escape(&organizer.name, true))?;
    if let Some(sent_by) = &organizer.sent_by {
        write!(f, ";{KW_SENT_BY}=\"{KW_MAILTO}{sent_by}\"")?;
    }
    if organizer.mailto.is_some() {
        write!(f, ";{KW_EMAIL}={}", organizer.email)?;
    }
    let address = organizer.mailto.as_deref().unwrap_or(&organizer.email);
    write!(f, ":{KW_MAILTO}{address}")?;
    f.writeln()?;
    Ok(())
}

/// Write `LOCATION`, the Apple structured location when both radius and
/// coordinates are known, and `GEO`.
pub fn write_location<W: Write>(f: &mut Formatter<W>, location: &Location) -> Result<()> {
    let mut text = location.title.clone();
    if let Some(address) = &location.address {
        text.push('\n');
        text.push_str(address);
    }
    write_prop_text(f, KW_LOCATION, &text)?;

    if let (Some(radius), Some(geo)) = (location.radius, location.geo) {
        write!(f, "{KW_X_APPLE_STRUCTURED_LOCATION};{KW_VALUE}={KW_URI}")?;
        if let Some(address) = &location.address {
            write!(f, ";{KW_X_ADDRESS}={}", escape(address, false))?;
        }
        write!(
            f,
            ";{KW_X_APPLE_RADIUS}={radius};{KW_X_TITLE}={}:geo:{},{}",
            escape(&location.title, false),
            geo.lat,
            geo.lon
        )?;
        f.writeln()?;
    }

    if let Some(geo) = location.geo {
        write_prop(f, KW_GEO, format_args!("{};{}", geo.lat, geo.lon))?;
    }
    Ok(())
}

/// Write the recurrence of an event.
///
/// `timezone` projects `UNTIL` and `EXDATE` values; `owner` carries the
/// event's own time zone and floating flag.
pub fn write_repeating<W: Write>(
    f: &mut Formatter<W>,
    repeating: &Repeating,
    all_day: bool,
    timezone: Option<&str>,
    owner: DateFlags<'_>,
) -> Result<()> {
    match repeating {
        Repeating::Options(options) => write_repeating_options(f, options, all_day, timezone, owner),
        Repeating::Rule(rule) => write_recurrence_text(f, &rule.to_recurrence_string()),
        Repeating::Raw(raw) => write_recurrence_text(f, raw),
    }
}

fn write_repeating_options<W: Write>(
    f: &mut Formatter<W>,
    options: &RepeatingOptions,
    all_day: bool,
    timezone: Option<&str>,
    owner: DateFlags<'_>,
) -> Result<()> {
    options.validate()?;
    // A TZID-qualified start keeps UNTIL in UTC.
    let floating = owner.floating && owner.timezone.is_none();
    write_prop(f, KW_RRULE, options.to_rule_string(all_day, floating, timezone)?)?;
    if options.exclude.is_empty() {
        return Ok(());
    }

    let dates = if all_day {
        write!(f, "{KW_EXDATE};{KW_VALUE}={KW_DATE}:")?;
        options
            .exclude
            .iter()
            .map(|d| format_date(timezone, *d, true, false))
            .collect::<Result<Vec<_>>>()?
    } else if let Some(tzid) = owner.timezone {
        write!(f, "{KW_EXDATE};{KW_TZID}={tzid}:")?;
        options
            .exclude
            .iter()
            .map(|d| format_date(Some(tzid), *d, false, true))
            .collect::<Result<Vec<_>>>()?
    } else {
        write!(f, "{KW_EXDATE}:")?;
        options
            .exclude
            .iter()
            .map(|d| format_date(timezone, *d, false, owner.floating))
            .collect::<Result<Vec<_>>>()?
    };
    f.write_all(dates.join(",").as_bytes())?;
    f.writeln()?;
    Ok(())
}

fn write_recurrence_text<W: Write>(f: &mut Formatter<W>, text: &str) -> Result<()> {
    for line in recurrence_lines(text) {
        f.write_all(line.as_bytes())?;
        f.writeln()?;
    }
    Ok(())
}
