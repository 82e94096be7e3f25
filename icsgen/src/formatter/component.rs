// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Component formatting for iCalendar components.
//!
//! Components are written depth first in a fixed property order; repeated
//! children (attendees, alarms, categories, custom properties) keep their
//! insertion order.

use std::io::Write;

use crate::error::{Error, Result};
use crate::formatter::Formatter;
use crate::formatter::property::{
    single_line, write_attendee, write_location, write_organizer, write_prop, write_prop_date,
    write_prop_date_time, write_prop_text, write_prop_utc, write_repeating, write_x_properties,
};
use crate::keyword::{
    KW_ACTION, KW_ATTACH, KW_BEGIN, KW_CALSCALE, KW_CATEGORIES, KW_CLASS, KW_CREATED, KW_DATETIME,
    KW_DEFAULT_ALARM_SOUND, KW_DESCRIPTION, KW_DTEND, KW_DTSTAMP, KW_DTSTART, KW_DURATION, KW_END,
    KW_FMTTYPE, KW_LAST_MODIFIED, KW_METHOD, KW_NAME, KW_PRIORITY, KW_PRODID, KW_RECURRENCE_ID,
    KW_REFRESH_INTERVAL, KW_RELATED, KW_RELATED_END, KW_REPEAT, KW_SEQUENCE, KW_STATUS,
    KW_SUMMARY, KW_TEXT_HTML, KW_TIMEZONE_ID, KW_TRANSP, KW_TRIGGER, KW_TRUE, KW_UID, KW_URI,
    KW_URL, KW_VALARM, KW_VALUE, KW_VCALENDAR, KW_VERSION, KW_VERSION_2_0, KW_VEVENT,
    KW_X_ALT_DESC, KW_X_MS_ALLDAY, KW_X_MS_BUSYSTATUS, KW_X_MSN_ALLDAY, KW_X_PUBLISHED_TTL,
    KW_X_WR_CALDESC, KW_X_WR_CALNAME, KW_X_WR_TIMEZONE,
};
use crate::semantic::{Alarm, AlarmTrigger, AlarmType, Calendar, Event, Inherited};
use crate::value::{DateFlags, escape, format_date, to_duration_string};

/// Format the `VCALENDAR` object.
pub fn write_icalendar<W: Write>(f: &mut Formatter<W>, calendar: &Calendar) -> Result<()> {
    with_block(f, KW_VCALENDAR, |f| {
        write_prop(f, KW_VERSION, KW_VERSION_2_0)?;
        write_prop(f, KW_PRODID, format_args!("-{}", calendar.prod_id()))?;

        if let Some(url) = calendar.url() {
            write_prop_text(f, KW_URL, url)?;
        }
        if let Some(scale) = calendar.scale() {
            write_prop_text(f, KW_CALSCALE, scale)?;
        }
        if let Some(method) = calendar.method() {
            write_prop(f, KW_METHOD, method)?;
        }
        if let Some(name) = calendar.name() {
            write_prop_text(f, KW_NAME, name)?;
            write_prop_text(f, KW_X_WR_CALNAME, name)?;
        }
        if let Some(description) = calendar.description() {
            write_prop_text(f, KW_X_WR_CALDESC, description)?;
        }
        if let Some(timezone) = calendar.timezone() {
            write_prop(f, KW_TIMEZONE_ID, timezone)?;
            write_prop(f, KW_X_WR_TIMEZONE, timezone)?;
        }
        if let Some(ttl) = calendar.ttl() {
            let ttl = to_duration_string(ttl);
            write_prop(f, &format!("{KW_REFRESH_INTERVAL};{KW_VALUE}={KW_DURATION}"), &ttl)?;
            write_prop(f, KW_X_PUBLISHED_TTL, &ttl)?;
        }

        let inherited = calendar.inherited();
        for event in calendar.events() {
            write_vevent(f, event, inherited)?;
        }

        write_x_properties(f, calendar.x_properties())
    })
}

/// Format a `VEVENT` component.
pub fn write_vevent<W: Write>(
    f: &mut Formatter<W>,
    event: &Event,
    inherited: Inherited<'_>,
) -> Result<()> {
    let start = event
        .start()
        .ok_or_else(|| Error::missing("event", "start"))?;
    let timezone = event.effective_timezone(inherited.timezone);
    let owner = DateFlags {
        timezone: event.timezone(),
        floating: event.floating(),
    };

    with_block(f, KW_VEVENT, |f| {
        let id = single_line("id", event.id())?;
        match inherited.domain {
            Some(domain) => {
                let domain = single_line("domain", domain)?;
                write_prop(f, KW_UID, format_args!("{id}@{domain}"))?;
            }
            None => write_prop(f, KW_UID, id)?,
        }
        write_prop(f, KW_SEQUENCE, event.sequence())?;
        write_prop_utc(f, KW_DTSTAMP, event.stamp())?;

        if event.all_day() {
            write_prop_date(f, KW_DTSTART, timezone, start)?;
            if let Some(end) = event.end() {
                write_prop_date(f, KW_DTEND, timezone, end)?;
            }
            write_prop(f, KW_X_MS_ALLDAY, KW_TRUE)?;
            write_prop(f, KW_X_MSN_ALLDAY, KW_TRUE)?;
        } else {
            write_prop_date_time(f, KW_DTSTART, timezone, start, owner)?;
            if let Some(end) = event.end() {
                write_prop_date_time(f, KW_DTEND, timezone, end, owner)?;
            }
        }

        if let Some(repeating) = event.repeating() {
            write_repeating(f, repeating, event.all_day(), timezone, owner)?;
        }
        if let Some(recurrence_id) = event.recurrence_id() {
            if event.all_day() {
                write_prop_date(f, KW_RECURRENCE_ID, timezone, recurrence_id)?;
            } else {
                write_prop_date_time(f, KW_RECURRENCE_ID, timezone, recurrence_id, owner)?;
            }
        }

        write_prop_text(f, KW_SUMMARY, event.summary())?;
        if let Some(transparency) = event.transparency() {
            write_prop(f, KW_TRANSP, transparency)?;
        }
        if let Some(location) = event.location() {
            write_location(f, location)?;
        }
        if let Some(description) = event.description() {
            write_prop_text(f, KW_DESCRIPTION, &description.plain)?;
            if let Some(html) = &description.html {
                write_prop_text(
                    f,
                    &format!("{KW_X_ALT_DESC};{KW_FMTTYPE}={KW_TEXT_HTML}"),
                    html,
                )?;
            }
        }
        if let Some(organizer) = event.organizer() {
            write_organizer(f, organizer)?;
        }
        for attendee in event.attendees() {
            write_attendee(f, attendee)?;
        }

        let alarm_inherited = Inherited {
            timezone,
            domain: inherited.domain,
            summary: Some(event.summary()),
        };
        for alarm in event.alarms() {
            write_valarm(f, alarm, alarm_inherited)?;
        }

        if !event.categories().is_empty() {
            let names = event
                .categories()
                .iter()
                .map(|c| c.to_ical_string())
                .collect::<Result<Vec<_>>>()?;
            write_prop(f, KW_CATEGORIES, names.join(","))?;
        }
        if let Some(url) = event.url() {
            write_prop_text(f, &format!("{KW_URL};{KW_VALUE}={KW_URI}"), url)?;
        }
        for attachment in event.attachments() {
            write_prop_text(f, KW_ATTACH, attachment)?;
        }
        if let Some(status) = event.status() {
            write_prop(f, KW_STATUS, status)?;
        }
        if let Some(busy_status) = event.busy_status() {
            write_prop(f, KW_X_MS_BUSYSTATUS, busy_status)?;
        }
        if let Some(priority) = event.priority() {
            write_prop(f, KW_PRIORITY, priority)?;
        }
        if let Some(class) = event.class() {
            write_prop(f, KW_CLASS, class)?;
        }

        write_x_properties(f, event.x_properties())?;

        if let Some(created) = event.created() {
            write_prop_utc(f, KW_CREATED, created)?;
        }
        if let Some(last_modified) = event.last_modified() {
            write_prop_utc(f, KW_LAST_MODIFIED, last_modified)?;
        }
        Ok(())
    })
}

/// Format a `VALARM` component.
pub fn write_valarm<W: Write>(
    f: &mut Formatter<W>,
    alarm: &Alarm,
    inherited: Inherited<'_>,
) -> Result<()> {
    let kind = alarm.kind().ok_or_else(|| Error::missing("alarm", "type"))?;
    let trigger = alarm
        .trigger()
        .ok_or_else(|| Error::missing("alarm", "trigger"))?;
    let fallback = inherited.summary.unwrap_or_default();

    with_block(f, KW_VALARM, |f| {
        write_prop(f, KW_ACTION, kind.action())?;

        match trigger {
            AlarmTrigger::Offset(offset) => {
                let duration = to_duration_string(offset);
                match alarm.relates_to() {
                    Some(related) => write!(f, "{KW_TRIGGER};{KW_RELATED}={related}:{duration}")?,
                    None if offset > 0 => {
                        write!(f, "{KW_TRIGGER};{KW_RELATED}={KW_RELATED_END}:{duration}")?;
                    }
                    None => write!(f, "{KW_TRIGGER}:{duration}")?,
                }
                f.writeln()?;
            }
            AlarmTrigger::At(at) => {
                let at = format_date(None, at, false, false)?;
                write_prop(f, &format!("{KW_TRIGGER};{KW_VALUE}={KW_DATETIME}"), at)?;
            }
        }

        if let Some(repeat) = alarm.repeat() {
            write_prop(f, KW_REPEAT, repeat.times)?;
            write_prop(
                f,
                KW_DURATION,
                to_duration_string(i64::from(repeat.interval)),
            )?;
        }

        if kind == AlarmType::Audio {
            match alarm.attachment() {
                Some(attachment) => {
                    let uri = escape(&attachment.uri, false);
                    match &attachment.mime {
                        Some(mime) => {
                            let mime = single_line("attachment", mime)?;
                            write!(f, "{KW_ATTACH};{KW_FMTTYPE}={mime}:{uri}")?;
                        }
                        None => write!(f, "{KW_ATTACH};{KW_VALUE}={KW_URI}:{uri}")?,
                    }
                }
                None => write!(f, "{KW_ATTACH};{KW_VALUE}={KW_URI}:{KW_DEFAULT_ALARM_SOUND}")?,
            }
            f.writeln()?;
        } else {
            let description = alarm.description().unwrap_or(fallback);
            write_prop_text(f, KW_DESCRIPTION, description)?;
        }

        if kind == AlarmType::Email {
            write_prop_text(f, KW_SUMMARY, alarm.summary().unwrap_or(fallback))?;
            for attendee in alarm.attendees() {
                write_attendee(f, attendee)?;
            }
        }

        write_x_properties(f, alarm.x_properties())
    })
}

fn with_block<W: Write, F: FnOnce(&mut Formatter<W>) -> Result<()>>(
    f: &mut Formatter<W>,
    name: &str,
    write_content: F,
) -> Result<()> {
    write!(f, "{KW_BEGIN}:{name}")?;
    f.writeln()?;

    write_content(f)?;

    write!(f, "{KW_END}:{name}")?;
    f.writeln()?;
    Ok(())
}
