// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Alarm component (VALARM) of an event.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::formatter::{FormatOptions, render, write_valarm};
use crate::parameter::AlarmTriggerRelationship;
use crate::semantic::{
    AlarmType, Attendee, AttendeeData, Delegation, Inherited, XProperties, delegate,
    parse_closed_opt,
};

/// When an alarm fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmTrigger {
    /// Signed offset in seconds: negative before the start, positive after
    Offset(i64),
    /// Absolute point in time, written in UTC
    At(Timestamp),
}

/// Repetition of an alarm after it first fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmRepeat {
    /// Number of additional repetitions
    pub times: u32,
    /// Delay between repetitions in seconds
    pub interval: u32,
}

/// Sound or file attached to an audio alarm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmAttachment {
    /// Location of the attachment
    pub uri: String,
    /// Media type, written as `FMTTYPE`
    #[serde(default)]
    pub mime: Option<String>,
}

impl From<&str> for AlarmAttachment {
    fn from(uri: &str) -> Self {
        Self {
            uri: uri.to_owned(),
            mime: None,
        }
    }
}

/// Alarm of an event (RFC 5545 Section 3.6.6).
///
/// Type and trigger are required for rendering. Description and summary fall
/// back to the summary of the owning event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Alarm {
    kind: Option<AlarmType>,
    trigger: Option<AlarmTrigger>,
    relates_to: Option<AlarmTriggerRelationship>,
    repeat: Option<AlarmRepeat>,
    attachment: Option<AlarmAttachment>,
    description: Option<String>,
    summary: Option<String>,
    attendees: Vec<Attendee>,
    x: XProperties,
}

impl Alarm {
    /// Create an alarm of the given type, firing `seconds` before the start.
    #[must_use]
    pub fn new(kind: AlarmType, seconds: i64) -> Self {
        let mut alarm = Self::default();
        alarm.set_kind(kind).set_trigger(seconds);
        alarm
    }

    /// Alarm type.
    #[must_use]
    pub fn kind(&self) -> Option<AlarmType> {
        self.kind
    }

    /// Set the alarm type.
    pub fn set_kind(&mut self, kind: AlarmType) -> &mut Self {
        self.kind = Some(kind);
        self
    }

    /// When the alarm fires.
    #[must_use]
    pub fn trigger(&self) -> Option<AlarmTrigger> {
        self.trigger
    }

    /// Fire `seconds` before the start. Negative values fire after it.
    pub fn set_trigger(&mut self, seconds: i64) -> &mut Self {
        self.trigger = Some(AlarmTrigger::Offset(flip(seconds)));
        self
    }

    /// Fire `seconds` before the start.
    pub fn set_trigger_before(&mut self, seconds: i64) -> &mut Self {
        self.set_trigger(seconds)
    }

    /// Fire `seconds` after the start.
    pub fn set_trigger_after(&mut self, seconds: i64) -> &mut Self {
        self.trigger = Some(AlarmTrigger::Offset(seconds.max(-i64::MAX)));
        self
    }

    /// Fire at an absolute point in time.
    pub fn set_trigger_at(&mut self, at: Timestamp) -> &mut Self {
        self.trigger = Some(AlarmTrigger::At(at));
        self
    }

    /// Whether an offset trigger is relative to the start or the end.
    #[must_use]
    pub fn relates_to(&self) -> Option<AlarmTriggerRelationship> {
        self.relates_to
    }

    /// Set what an offset trigger is relative to. Ignored for absolute
    /// triggers.
    pub fn set_relates_to(&mut self, relates_to: Option<AlarmTriggerRelationship>) -> &mut Self {
        self.relates_to = relates_to;
        self
    }

    /// Repetition after the alarm first fires.
    #[must_use]
    pub fn repeat(&self) -> Option<AlarmRepeat> {
        self.repeat
    }

    /// Set the repetition.
    pub fn set_repeat(&mut self, repeat: Option<AlarmRepeat>) -> &mut Self {
        self.repeat = repeat;
        self
    }

    /// Attachment of an audio alarm.
    #[must_use]
    pub fn attachment(&self) -> Option<&AlarmAttachment> {
        self.attachment.as_ref()
    }

    /// Set the attachment of an audio alarm.
    ///
    /// # Errors
    ///
    /// Returns an error if the URI is empty.
    pub fn set_attachment(&mut self, attachment: Option<AlarmAttachment>) -> Result<&mut Self> {
        if let Some(attachment) = &attachment
            && attachment.uri.is_empty()
        {
            return Err(Error::missing("attachment", "uri"));
        }
        self.attachment = attachment;
        Ok(self)
    }

    /// Description, used by display and e-mail alarms.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Set the description.
    pub fn set_description(&mut self, description: Option<String>) -> &mut Self {
        self.description = description;
        self
    }

    /// Summary, the subject of e-mail alarms.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Set the summary.
    pub fn set_summary(&mut self, summary: Option<String>) -> &mut Self {
        self.summary = summary;
        self
    }

    /// Recipients of an e-mail alarm.
    #[must_use]
    pub fn attendees(&self) -> &[Attendee] {
        &self.attendees
    }

    /// Mutable access to the recipients.
    pub fn attendees_mut(&mut self) -> &mut [Attendee] {
        &mut self.attendees
    }

    /// Append a recipient and return it.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` does not describe a valid attendee.
    pub fn create_attendee(&mut self, data: AttendeeData) -> Result<&mut Attendee> {
        let attendee = Attendee::from_data(data)?;
        self.attendees.push(attendee);
        self.attendees
            .last_mut()
            .ok_or_else(|| Error::invalid("attendees", "attendee list is empty"))
    }

    /// Replace every recipient.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry does not describe a valid attendee; the
    /// current recipients are kept in that case.
    pub fn set_attendees(&mut self, attendees: Vec<AttendeeData>) -> Result<&mut Self> {
        self.attendees = attendees
            .into_iter()
            .map(Attendee::from_data)
            .collect::<Result<_>>()?;
        Ok(self)
    }

    /// Add a recipient the one at `index` delegates to.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no recipient at `index`, or either side
    /// has no e-mail address.
    pub fn delegates_to(&mut self, index: usize, data: AttendeeData) -> Result<&mut Attendee> {
        delegate(&mut self.attendees, index, data, Delegation::To)
    }

    /// Add a recipient the one at `index` was delegated from.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no recipient at `index`, or either side
    /// has no e-mail address.
    pub fn delegates_from(&mut self, index: usize, data: AttendeeData) -> Result<&mut Attendee> {
        delegate(&mut self.attendees, index, data, Delegation::From)
    }

    /// Custom properties.
    #[must_use]
    pub fn x_properties(&self) -> &XProperties {
        &self.x
    }

    /// Append a custom `X-` property.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` does not start with `X-`.
    pub fn push_x(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<&mut Self> {
        self.x.push(key, value)?;
        Ok(self)
    }

    /// Replace every custom `X-` property.
    pub fn set_x_properties(&mut self, x: XProperties) -> &mut Self {
        self.x = x;
        self
    }

    /// Render the `VALARM` block on its own, unfolded.
    ///
    /// # Errors
    ///
    /// Returns an error if the type or trigger is unset, or an attendee has
    /// no e-mail address.
    pub fn to_ical_string(&self) -> Result<String> {
        self.to_ical_string_in(Inherited::default())
    }

    /// Render the `VALARM` block with values taken from the owning event.
    ///
    /// # Errors
    ///
    /// Same as [`Alarm::to_ical_string`].
    pub fn to_ical_string_in(&self, inherited: Inherited<'_>) -> Result<String> {
        render(FormatOptions::default().folding(None), |f| {
            write_valarm(f, self, inherited)
        })
    }

    /// Build an alarm from its structured representation.
    ///
    /// # Errors
    ///
    /// Returns an error if a token is not recognized, only one of `repeat`
    /// and `interval` is given, or a nested value is invalid.
    pub fn from_data(data: AlarmData) -> Result<Self> {
        let repeat = match (data.repeat, data.interval) {
            (Some(times), Some(interval)) => Some(AlarmRepeat { times, interval }),
            (None, None) => None,
            _ => {
                return Err(Error::invalid(
                    "repeat",
                    "`repeat` and `interval` must be given together",
                ));
            }
        };

        let mut alarm = Self {
            kind: parse_closed_opt("type", data.kind.as_deref())?,
            trigger: data.trigger.map(|trigger| match trigger {
                AlarmTriggerData::Seconds(seconds) => AlarmTrigger::Offset(flip(seconds)),
                AlarmTriggerData::At(at) => AlarmTrigger::At(at),
            }),
            relates_to: parse_closed_opt("relatesTo", data.relates_to.as_deref())?,
            repeat,
            attachment: None,
            description: data.description,
            summary: data.summary,
            attendees: Vec::new(),
            x: XProperties::from_pairs(data.x)?,
        };
        alarm.set_attachment(data.attachment)?;
        alarm.set_attendees(data.attendees)?;
        Ok(alarm)
    }

    /// Convert to the structured representation.
    #[must_use]
    pub fn to_data(&self) -> AlarmData {
        AlarmData {
            kind: self.kind.map(|k| k.to_string()),
            trigger: self.trigger.map(|trigger| match trigger {
                AlarmTrigger::Offset(offset) => AlarmTriggerData::Seconds(flip(offset)),
                AlarmTrigger::At(at) => AlarmTriggerData::At(at),
            }),
            relates_to: self.relates_to.map(|r| r.to_string()),
            repeat: self.repeat.map(|r| r.times),
            interval: self.repeat.map(|r| r.interval),
            attachment: self.attachment.clone(),
            description: self.description.clone(),
            summary: self.summary.clone(),
            attendees: self.attendees.iter().map(Attendee::to_data).collect(),
            x: self.x.to_vec(),
        }
    }
}

/// Structured representation of an [`Alarm`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[expect(missing_docs)]
pub struct AlarmData {
    /// `display`, `audio` or `email`
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub trigger: Option<AlarmTriggerData>,
    pub relates_to: Option<String>,
    /// Number of repetitions, given together with `interval`
    pub repeat: Option<u32>,
    /// Seconds between repetitions, given together with `repeat`
    pub interval: Option<u32>,
    pub attachment: Option<AlarmAttachment>,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub attendees: Vec<AttendeeData>,
    pub x: Vec<(String, String)>,
}

/// Structured representation of an [`AlarmTrigger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AlarmTriggerData {
    /// Seconds before the start; negative values fire after it
    Seconds(i64),
    /// Absolute point in time
    At(Timestamp),
}

/// Switch between "seconds before" and the signed offset. Offsets are kept
/// within `-i64::MAX..=i64::MAX` so the switch is its own inverse.
const fn flip(seconds: i64) -> i64 {
    if seconds == i64::MIN { i64::MAX } else { -seconds }
}
