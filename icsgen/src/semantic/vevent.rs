// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Event component (VEVENT) for iCalendar semantic components.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::formatter::{FormatOptions, render, write_vevent};
use crate::semantic::{
    Alarm, AlarmData, Attendee, AttendeeData, BusyStatus, Category, CategoryData, Classification,
    Delegation, Description, EventStatus, Inherited, Location, Organizer, TimeTransparency,
    XProperties, delegate, parse_closed_opt, reject_line_breaks,
};
use crate::value::{Repeating, RepeatingData, resolve_time_zone};

/// Event component (VEVENT)
///
/// Two invariants hold after every mutation:
/// - `start <= end`: setting either side so that the order inverts swaps
///   the two values.
/// - floating and time zone are exclusive: enabling floating clears the
///   time zone, and setting a time zone other than `UTC` disables floating.
#[derive(Debug, Clone)]
pub struct Event {
    /// Unique identifier, the local part of `UID`
    id: String,

    /// Revision counter
    sequence: u32,

    /// Date/time the event starts, required for rendering
    start: Option<Timestamp>,

    /// Date/time the event ends
    end: Option<Timestamp>,

    /// Original start of the occurrence this event overrides
    recurrence_id: Option<Timestamp>,

    /// Time zone of the event, overriding the calendar's
    timezone: Option<String>,

    /// Date/time the event object was created
    stamp: Timestamp,

    all_day: bool,
    floating: bool,

    repeating: Option<Repeating>,

    /// Summary/title of the event, possibly empty
    summary: String,

    location: Option<Location>,
    description: Option<Description>,
    organizer: Option<Organizer>,

    attendees: Vec<Attendee>,
    alarms: Vec<Alarm>,
    categories: Vec<Category>,

    status: Option<EventStatus>,
    busy_status: Option<BusyStatus>,

    /// Priority, 0 (undefined) to 9 (lowest)
    priority: Option<u8>,

    url: Option<String>,

    /// URIs of attached documents
    attachments: Vec<String>,

    transparency: Option<TimeTransparency>,
    created: Option<Timestamp>,
    last_modified: Option<Timestamp>,
    class: Option<Classification>,

    x: XProperties,
}

impl Default for Event {
    fn default() -> Self {
        Self::new()
    }
}

impl Event {
    /// Create an event with a random id, stamped now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sequence: 0,
            start: None,
            end: None,
            recurrence_id: None,
            timezone: None,
            stamp: Timestamp::now(),
            all_day: false,
            floating: false,
            repeating: None,
            summary: String::new(),
            location: None,
            description: None,
            organizer: None,
            attendees: Vec::new(),
            alarms: Vec::new(),
            categories: Vec::new(),
            status: None,
            busy_status: None,
            priority: None,
            url: None,
            attachments: Vec::new(),
            transparency: None,
            created: None,
            last_modified: None,
            class: None,
            x: XProperties::new(),
        }
    }

    /// Unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Set the unique identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is empty or contains a line break.
    pub fn set_id(&mut self, id: impl Into<String>) -> Result<&mut Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::missing("event", "id"));
        }
        reject_line_breaks("id", &id)?;
        self.id = id;
        Ok(self)
    }

    /// Revision counter.
    #[must_use]
    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    /// Set the revision counter.
    pub fn set_sequence(&mut self, sequence: u32) -> &mut Self {
        self.sequence = sequence;
        self
    }

    /// Start of the event.
    #[must_use]
    pub fn start(&self) -> Option<Timestamp> {
        self.start
    }

    /// Set the start, swapping with the end if it would come after it.
    pub fn set_start(&mut self, start: Timestamp) -> &mut Self {
        self.start = Some(start);
        self.order_range();
        self
    }

    /// End of the event.
    #[must_use]
    pub fn end(&self) -> Option<Timestamp> {
        self.end
    }

    /// Set or clear the end, swapping with the start if it would come
    /// before it.
    pub fn set_end(&mut self, end: Option<Timestamp>) -> &mut Self {
        self.end = end;
        self.order_range();
        self
    }

    fn order_range(&mut self) {
        if let (Some(start), Some(end)) = (self.start, self.end)
            && start > end
        {
            tracing::debug!(%start, %end, id = %self.id, "start after end, swapping");
            self.start = Some(end);
            self.end = Some(start);
        }
    }

    /// Original start of the overridden occurrence.
    #[must_use]
    pub fn recurrence_id(&self) -> Option<Timestamp> {
        self.recurrence_id
    }

    /// Set or clear the recurrence id.
    pub fn set_recurrence_id(&mut self, recurrence_id: Option<Timestamp>) -> &mut Self {
        self.recurrence_id = recurrence_id;
        self
    }

    /// Time zone of the event.
    #[must_use]
    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    /// Set or clear the time zone.
    ///
    /// Any zone other than `UTC` turns floating off.
    ///
    /// # Errors
    ///
    /// Returns an error if the zone is unknown.
    pub fn set_timezone(&mut self, timezone: Option<&str>) -> Result<&mut Self> {
        if let Some(name) = timezone {
            resolve_time_zone(name)?;
            if name != "UTC" && self.floating {
                tracing::debug!(timezone = name, id = %self.id, "time zone set, disabling floating");
                self.floating = false;
            }
        }
        self.timezone = timezone.map(str::to_owned);
        Ok(self)
    }

    /// Time zone used to project date-times: the event's own, else the
    /// calendar's.
    #[must_use]
    pub fn effective_timezone<'a>(&'a self, calendar_timezone: Option<&'a str>) -> Option<&'a str> {
        self.timezone.as_deref().or(calendar_timezone)
    }

    /// Creation stamp, written as `DTSTAMP`.
    #[must_use]
    pub fn stamp(&self) -> Timestamp {
        self.stamp
    }

    /// Set the creation stamp.
    pub fn set_stamp(&mut self, stamp: Timestamp) -> &mut Self {
        self.stamp = stamp;
        self
    }

    /// Whether the event spans whole days.
    #[must_use]
    pub fn all_day(&self) -> bool {
        self.all_day
    }

    /// Mark the event as spanning whole days.
    pub fn set_all_day(&mut self, all_day: bool) -> &mut Self {
        self.all_day = all_day;
        self
    }

    /// Whether date-times are written as wall-clock time.
    #[must_use]
    pub fn floating(&self) -> bool {
        self.floating
    }

    /// Enable or disable floating time. Enabling clears the time zone.
    pub fn set_floating(&mut self, floating: bool) -> &mut Self {
        self.floating = floating;
        if floating && let Some(timezone) = self.timezone.take() {
            tracing::debug!(%timezone, id = %self.id, "floating enabled, clearing time zone");
        }
        self
    }

    /// Recurrence of the event.
    #[must_use]
    pub fn repeating(&self) -> Option<&Repeating> {
        self.repeating.as_ref()
    }

    /// Set the recurrence.
    ///
    /// # Errors
    ///
    /// Returns an error if structured options are out of range.
    pub fn set_repeating(&mut self, repeating: impl Into<Repeating>) -> Result<&mut Self> {
        let repeating = repeating.into();
        if let Repeating::Options(options) = &repeating {
            options.validate()?;
        }
        self.repeating = Some(repeating);
        Ok(self)
    }

    /// Remove the recurrence.
    pub fn clear_repeating(&mut self) -> &mut Self {
        self.repeating = None;
        self
    }

    /// Summary of the event.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Set the summary.
    pub fn set_summary(&mut self, summary: impl Into<String>) -> &mut Self {
        self.summary = summary.into();
        self
    }

    /// Location of the event.
    #[must_use]
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// Set or clear the location.
    ///
    /// # Errors
    ///
    /// Returns an error if the title is empty or the radius or coordinates
    /// are out of range.
    pub fn set_location(&mut self, location: Option<Location>) -> Result<&mut Self> {
        if let Some(location) = &location {
            location.validate()?;
        }
        self.location = location;
        Ok(self)
    }

    /// Description of the event.
    #[must_use]
    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    /// Set or clear the description.
    pub fn set_description(&mut self, description: Option<Description>) -> &mut Self {
        self.description = description;
        self
    }

    /// Organizer of the event.
    #[must_use]
    pub fn organizer(&self) -> Option<&Organizer> {
        self.organizer.as_ref()
    }

    /// Set or clear the organizer.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or e-mail address is empty.
    pub fn set_organizer(&mut self, organizer: Option<Organizer>) -> Result<&mut Self> {
        if let Some(organizer) = &organizer {
            organizer.validate()?;
        }
        self.organizer = organizer;
        Ok(self)
    }

    /// Attendees in insertion order.
    #[must_use]
    pub fn attendees(&self) -> &[Attendee] {
        &self.attendees
    }

    /// Mutable access to the attendees.
    pub fn attendees_mut(&mut self) -> &mut [Attendee] {
        &mut self.attendees
    }

    /// Find the attendee with the given e-mail address, e.g. to resolve a
    /// delegation.
    #[must_use]
    pub fn attendee_by_email(&self, email: &str) -> Option<&Attendee> {
        self.attendees
            .iter()
            .find(|a| a.email().is_some_and(|e| e.eq_ignore_ascii_case(email)))
    }

    /// Append an attendee and return it.
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

    /// Replace every attendee.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry does not describe a valid attendee; the
    /// current attendees are kept in that case.
    pub fn set_attendees(&mut self, attendees: Vec<AttendeeData>) -> Result<&mut Self> {
        self.attendees = attendees
            .into_iter()
            .map(Attendee::from_data)
            .collect::<Result<_>>()?;
        Ok(self)
    }

    /// Add an attendee the one at `index` delegates to, linking both.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no attendee at `index`, or either side
    /// has no e-mail address.
    pub fn delegates_to(&mut self, index: usize, data: AttendeeData) -> Result<&mut Attendee> {
        delegate(&mut self.attendees, index, data, Delegation::To)
    }

    /// Add an attendee the one at `index` was delegated from, linking both.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no attendee at `index`, or either side
    /// has no e-mail address.
    pub fn delegates_from(&mut self, index: usize, data: AttendeeData) -> Result<&mut Attendee> {
        delegate(&mut self.attendees, index, data, Delegation::From)
    }

    /// Alarms in insertion order.
    #[must_use]
    pub fn alarms(&self) -> &[Alarm] {
        &self.alarms
    }

    /// Mutable access to the alarms.
    pub fn alarms_mut(&mut self) -> &mut [Alarm] {
        &mut self.alarms
    }

    /// Append an alarm and return it.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` does not describe a valid alarm.
    pub fn create_alarm(&mut self, data: AlarmData) -> Result<&mut Alarm> {
        let alarm = Alarm::from_data(data)?;
        self.alarms.push(alarm);
        self.alarms
            .last_mut()
            .ok_or_else(|| Error::invalid("alarms", "alarm list is empty"))
    }

    /// Replace every alarm.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry does not describe a valid alarm.
    pub fn set_alarms(&mut self, alarms: Vec<AlarmData>) -> Result<&mut Self> {
        self.alarms = alarms
            .into_iter()
            .map(Alarm::from_data)
            .collect::<Result<_>>()?;
        Ok(self)
    }

    /// Categories in insertion order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Append a category and return it.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` does not describe a valid category.
    pub fn create_category(&mut self, data: CategoryData) -> Result<&mut Category> {
        let category = Category::from_data(data)?;
        self.categories.push(category);
        self.categories
            .last_mut()
            .ok_or_else(|| Error::invalid("categories", "category list is empty"))
    }

    /// Replace every category.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry does not describe a valid category.
    pub fn set_categories(&mut self, categories: Vec<CategoryData>) -> Result<&mut Self> {
        self.categories = categories
            .into_iter()
            .map(Category::from_data)
            .collect::<Result<_>>()?;
        Ok(self)
    }

    /// Status of the event.
    #[must_use]
    pub fn status(&self) -> Option<EventStatus> {
        self.status
    }

    /// Set or clear the status.
    pub fn set_status(&mut self, status: Option<EventStatus>) -> &mut Self {
        self.status = status;
        self
    }

    /// Busy status shown by Microsoft clients.
    #[must_use]
    pub fn busy_status(&self) -> Option<BusyStatus> {
        self.busy_status
    }

    /// Set or clear the busy status.
    pub fn set_busy_status(&mut self, busy_status: Option<BusyStatus>) -> &mut Self {
        self.busy_status = busy_status;
        self
    }

    /// Priority, 0 to 9.
    #[must_use]
    pub fn priority(&self) -> Option<u8> {
        self.priority
    }

    /// Set or clear the priority.
    ///
    /// # Errors
    ///
    /// Returns an error if `priority` is greater than 9.
    pub fn set_priority(&mut self, priority: Option<u8>) -> Result<&mut Self> {
        if let Some(p) = priority
            && p > 9
        {
            return Err(Error::invalid(
                "priority",
                format!("`{p}` is not between 0 and 9"),
            ));
        }
        self.priority = priority;
        Ok(self)
    }

    /// URL of the event.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Set or clear the URL.
    pub fn set_url(&mut self, url: Option<String>) -> &mut Self {
        self.url = url;
        self
    }

    /// URIs of attached documents.
    #[must_use]
    pub fn attachments(&self) -> &[String] {
        &self.attachments
    }

    /// Attach a document by URI.
    ///
    /// # Errors
    ///
    /// Returns an error if `uri` is empty.
    pub fn push_attachment(&mut self, uri: impl Into<String>) -> Result<&mut Self> {
        let uri = uri.into();
        if uri.is_empty() {
            return Err(Error::missing("attachment", "uri"));
        }
        self.attachments.push(uri);
        Ok(self)
    }

    /// Replace every attachment.
    ///
    /// # Errors
    ///
    /// Returns an error if a URI is empty.
    pub fn set_attachments(&mut self, attachments: Vec<String>) -> Result<&mut Self> {
        if attachments.iter().any(String::is_empty) {
            return Err(Error::missing("attachment", "uri"));
        }
        self.attachments = attachments;
        Ok(self)
    }

    /// Time transparency.
    #[must_use]
    pub fn transparency(&self) -> Option<TimeTransparency> {
        self.transparency
    }

    /// Set or clear the time transparency.
    pub fn set_transparency(&mut self, transparency: Option<TimeTransparency>) -> &mut Self {
        self.transparency = transparency;
        self
    }

    /// When the event was created in the calendar store.
    #[must_use]
    pub fn created(&self) -> Option<Timestamp> {
        self.created
    }

    /// Set or clear the creation time.
    pub fn set_created(&mut self, created: Option<Timestamp>) -> &mut Self {
        self.created = created;
        self
    }

    /// When the event was last modified.
    #[must_use]
    pub fn last_modified(&self) -> Option<Timestamp> {
        self.last_modified
    }

    /// Set or clear the last modification time.
    pub fn set_last_modified(&mut self, last_modified: Option<Timestamp>) -> &mut Self {
        self.last_modified = last_modified;
        self
    }

    /// Access classification.
    #[must_use]
    pub fn class(&self) -> Option<Classification> {
        self.class
    }

    /// Set or clear the access classification.
    pub fn set_class(&mut self, class: Option<Classification>) -> &mut Self {
        self.class = class;
        self
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

    /// Render the `VEVENT` block on its own, unfolded.
    ///
    /// # Errors
    ///
    /// Returns an error if the start is unset or a child entity is missing
    /// a required field.
    pub fn to_ical_string(&self) -> Result<String> {
        self.to_ical_string_in(Inherited::default())
    }

    /// Render the `VEVENT` block with values taken from the owning calendar.
    ///
    /// # Errors
    ///
    /// Same as [`Event::to_ical_string`].
    pub fn to_ical_string_in(&self, inherited: Inherited<'_>) -> Result<String> {
        render(FormatOptions::default().folding(None), |f| {
            write_vevent(f, self, inherited)
        })
    }

    /// Build an event from its structured representation.
    ///
    /// Missing `id` and `stamp` get fresh values.
    ///
    /// # Errors
    ///
    /// Returns an error if any field or nested entity is invalid.
    pub fn from_data(data: EventData) -> Result<Self> {
        let mut event = Self::new();
        if let Some(id) = data.id {
            event.set_id(id)?;
        }
        if let Some(stamp) = data.stamp {
            event.set_stamp(stamp);
        }
        if let Some(start) = data.start {
            event.set_start(start);
        }
        event
            .set_sequence(data.sequence.unwrap_or_default())
            .set_end(data.end)
            .set_recurrence_id(data.recurrence_id)
            .set_floating(data.floating)
            .set_timezone(data.timezone.as_deref())?
            .set_all_day(data.all_day)
            .set_summary(data.summary.unwrap_or_default())
            .set_description(data.description)
            .set_url(data.url)
            .set_created(data.created)
            .set_last_modified(data.last_modified)
            .set_status(parse_closed_opt("status", data.status.as_deref())?)
            .set_busy_status(parse_closed_opt("busyStatus", data.busy_status.as_deref())?)
            .set_transparency(parse_closed_opt(
                "transparency",
                data.transparency.as_deref(),
            )?)
            .set_class(parse_closed_opt("class", data.class.as_deref())?)
            .set_x_properties(XProperties::from_pairs(data.x)?);

        if let Some(repeating) = data.repeating {
            event.set_repeating(Repeating::from_data(repeating)?)?;
        }
        event
            .set_location(data.location)?
            .set_organizer(data.organizer)?
            .set_priority(data.priority)?
            .set_attachments(data.attachments)?
            .set_attendees(data.attendees)?
            .set_alarms(data.alarms)?
            .set_categories(data.categories)?;
        Ok(event)
    }

    /// Convert to the structured representation.
    #[must_use]
    pub fn to_data(&self) -> EventData {
        EventData {
            id: Some(self.id.clone()),
            sequence: Some(self.sequence),
            start: self.start,
            end: self.end,
            recurrence_id: self.recurrence_id,
            timezone: self.timezone.clone(),
            stamp: Some(self.stamp),
            all_day: self.all_day,
            floating: self.floating,
            repeating: self.repeating.as_ref().map(Repeating::to_data),
            summary: Some(self.summary.clone()),
            location: self.location.clone(),
            description: self.description.clone(),
            organizer: self.organizer.clone(),
            attendees: self.attendees.iter().map(Attendee::to_data).collect(),
            alarms: self.alarms.iter().map(Alarm::to_data).collect(),
            categories: self.categories.iter().map(Category::to_data).collect(),
            status: self.status.map(|s| s.to_string()),
            busy_status: self.busy_status.map(|s| s.to_string()),
            priority: self.priority,
            url: self.url.clone(),
            attachments: self.attachments.clone(),
            transparency: self.transparency.map(|t| t.to_string()),
            created: self.created,
            last_modified: self.last_modified,
            class: self.class.map(|c| c.to_string()),
            x: self.x.to_vec(),
        }
    }
}

/// Structured representation of an [`Event`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[expect(missing_docs)]
pub struct EventData {
    pub id: Option<String>,
    pub sequence: Option<u32>,
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
    pub recurrence_id: Option<Timestamp>,
    pub timezone: Option<String>,
    pub stamp: Option<Timestamp>,
    pub all_day: bool,
    pub floating: bool,
    pub repeating: Option<RepeatingData>,
    pub summary: Option<String>,
    pub location: Option<Location>,
    pub description: Option<Description>,
    pub organizer: Option<Organizer>,
    pub attendees: Vec<AttendeeData>,
    pub alarms: Vec<AlarmData>,
    pub categories: Vec<CategoryData>,
    pub status: Option<String>,
    pub busy_status: Option<String>,
    pub priority: Option<u8>,
    pub url: Option<String>,
    pub attachments: Vec<String>,
    pub transparency: Option<String>,
    pub created: Option<Timestamp>,
    pub last_modified: Option<Timestamp>,
    pub class: Option<String>,
    pub x: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{RecurrenceFrequency, RepeatingOptions};

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn swaps_inverted_range() {
        let (a, b) = (ts("2024-01-02T10:00:00Z"), ts("2024-01-01T10:00:00Z"));

        let mut event = Event::new();
        event.set_start(a).set_end(Some(b));
        assert_eq!(event.start(), Some(b));
        assert_eq!(event.end(), Some(a));

        let mut event = Event::new();
        event.set_end(Some(b)).set_start(a);
        assert_eq!(event.start(), Some(b));
        assert_eq!(event.end(), Some(a));
    }

    #[test]
    fn floating_and_timezone_are_exclusive() {
        let mut event = Event::new();
        event.set_timezone(Some("Europe/Berlin")).unwrap();
        event.set_floating(true);
        assert!(event.floating());
        assert_eq!(event.timezone(), None);

        event.set_timezone(Some("America/New_York")).unwrap();
        assert!(!event.floating());
        assert_eq!(event.timezone(), Some("America/New_York"));
    }

    #[test]
    fn utc_keeps_floating() {
        let mut event = Event::new();
        event.set_floating(true);
        event.set_timezone(Some("UTC")).unwrap();
        assert!(event.floating());

        let restored = Event::from_data(event.to_data()).unwrap();
        assert!(restored.floating());
        assert_eq!(restored.timezone(), Some("UTC"));
    }

    #[test]
    fn rejects_unknown_timezone() {
        let mut event = Event::new();
        assert!(event.set_timezone(Some("Mars/Olympus_Mons")).is_err());
        assert_eq!(event.timezone(), None);
    }

    #[test]
    fn validates_priority_range() {
        let mut event = Event::new();
        event.set_priority(Some(9)).unwrap();
        let err = event.set_priority(Some(10)).unwrap_err();
        assert!(err.to_string().contains("`priority`"));
        assert_eq!(event.priority(), Some(9));
    }

    #[test]
    fn validates_repeating_options() {
        let mut options = RepeatingOptions::new(RecurrenceFrequency::Monthly);
        options.by_set_pos = vec![1];
        let err = Event::new().set_repeating(options).unwrap_err();
        assert!(err.to_string().contains("`bySetPos`"));
    }

    #[test]
    fn requires_start() {
        let err = Event::new().to_ical_string().unwrap_err();
        assert!(matches!(
            err,
            Error::MissingField {
                entity: "event",
                field: "start"
            }
        ));
    }

    #[test]
    fn finds_attendee_by_email() {
        let mut event = Event::new();
        event
            .create_attendee(AttendeeData::with_email("a@example.com"))
            .unwrap();
        event
            .delegates_to(0, AttendeeData::with_email("b@example.com"))
            .unwrap();

        let delegator = event.attendee_by_email("A@example.com").unwrap();
        let delegate = event.attendee_by_email(delegator.delegated_to().unwrap());
        assert_eq!(
            delegate.and_then(Attendee::delegated_from),
            Some("a@example.com")
        );
    }

    #[test]
    fn effective_timezone_prefers_own() {
        let mut event = Event::new();
        assert_eq!(event.effective_timezone(Some("Asia/Tokyo")), Some("Asia/Tokyo"));
        event.set_timezone(Some("Europe/Berlin")).unwrap();
        assert_eq!(
            event.effective_timezone(Some("Asia/Tokyo")),
            Some("Europe/Berlin")
        );
    }

    #[test]
    fn fills_missing_id_and_stamp() {
        let event = Event::from_data(EventData::default()).unwrap();
        assert!(!event.id().is_empty());
        assert_eq!(event.summary(), "");
    }
}
