// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! iCalendar object (VCALENDAR), the root of the entity graph.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::formatter::format;
use crate::semantic::{
    CalendarMethod, Event, EventData, Inherited, ProductId, XProperties, parse_closed_opt,
};
use crate::value::resolve_time_zone;

/// Main iCalendar object that contains events and calendar metadata.
#[derive(Debug, Clone, Default)]
pub struct Calendar {
    /// Domain appended to event UIDs
    domain: Option<String>,

    /// Product identifier, always present
    prod_id: ProductId,

    /// Method for the iCalendar object (e.g., PUBLISH, REQUEST)
    method: Option<CalendarMethod>,

    name: Option<String>,
    description: Option<String>,

    /// Time zone inherited by events without one of their own
    timezone: Option<String>,

    url: Option<String>,

    /// Calendar scale, e.g. GREGORIAN
    scale: Option<String>,

    /// Suggested refresh interval in seconds
    ttl: Option<i64>,

    events: Vec<Event>,
    x: XProperties,
}

impl Calendar {
    /// Create an empty calendar with the default product identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Domain appended to event UIDs as `id@domain`.
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// Set or clear the UID domain.
    pub fn set_domain(&mut self, domain: Option<String>) -> &mut Self {
        self.domain = domain;
        self
    }

    /// Product identifier.
    #[must_use]
    pub fn prod_id(&self) -> &ProductId {
        &self.prod_id
    }

    /// Set the product identifier from a `//company//product//LANG` string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not have that shape.
    pub fn set_prod_id(&mut self, prod_id: &str) -> Result<&mut Self> {
        self.prod_id = prod_id.parse()?;
        Ok(self)
    }

    /// Set the product identifier from its parts.
    ///
    /// # Errors
    ///
    /// Returns an error if a part is empty or the language is malformed.
    pub fn set_prod_id_parts(&mut self, prod_id: ProductId) -> Result<&mut Self> {
        let prod_id = ProductId::new(prod_id.company, prod_id.product, prod_id.language);
        prod_id.validate()?;
        self.prod_id = prod_id;
        Ok(self)
    }

    /// Method of the calendar.
    #[must_use]
    pub fn method(&self) -> Option<CalendarMethod> {
        self.method
    }

    /// Set or clear the method.
    pub fn set_method(&mut self, method: Option<CalendarMethod>) -> &mut Self {
        self.method = method;
        self
    }

    /// Name of the calendar.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the name.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    /// Remove the name.
    pub fn clear_name(&mut self) -> &mut Self {
        self.name = None;
        self
    }

    /// Description of the calendar.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Set or clear the description.
    pub fn set_description(&mut self, description: Option<String>) -> &mut Self {
        self.description = description;
        self
    }

    /// Time zone of the calendar.
    #[must_use]
    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    /// Set or clear the time zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the zone is unknown.
    pub fn set_timezone(&mut self, timezone: Option<&str>) -> Result<&mut Self> {
        if let Some(name) = timezone {
            resolve_time_zone(name)?;
        }
        self.timezone = timezone.map(str::to_owned);
        Ok(self)
    }

    /// URL of the calendar feed.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Set or clear the URL.
    pub fn set_url(&mut self, url: Option<String>) -> &mut Self {
        self.url = url;
        self
    }

    /// Calendar scale.
    #[must_use]
    pub fn scale(&self) -> Option<&str> {
        self.scale.as_deref()
    }

    /// Set or clear the calendar scale; stored uppercase.
    pub fn set_scale(&mut self, scale: Option<&str>) -> &mut Self {
        self.scale = scale.map(str::to_ascii_uppercase);
        self
    }

    /// Suggested refresh interval in seconds.
    #[must_use]
    pub fn ttl(&self) -> Option<i64> {
        self.ttl
    }

    /// Set or clear the refresh interval.
    ///
    /// # Errors
    ///
    /// Returns an error if `ttl` is negative.
    pub fn set_ttl(&mut self, ttl: Option<i64>) -> Result<&mut Self> {
        if let Some(seconds) = ttl
            && seconds < 0
        {
            return Err(Error::invalid(
                "ttl",
                format!("`{seconds}` must not be negative"),
            ));
        }
        self.ttl = ttl;
        Ok(self)
    }

    /// Events in insertion order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Mutable access to the events.
    pub fn events_mut(&mut self) -> &mut [Event] {
        &mut self.events
    }

    /// Append an event and return it.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` does not describe a valid event.
    pub fn create_event(&mut self, data: EventData) -> Result<&mut Event> {
        let event = Event::from_data(data)?;
        self.events.push(event);
        self.events
            .last_mut()
            .ok_or_else(|| Error::invalid("events", "event list is empty"))
    }

    /// Replace every event.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry does not describe a valid event; the
    /// current events are kept in that case.
    pub fn set_events(&mut self, events: Vec<EventData>) -> Result<&mut Self> {
        self.events = events
            .into_iter()
            .map(Event::from_data)
            .collect::<Result<_>>()?;
        Ok(self)
    }

    /// Remove every event.
    pub fn clear(&mut self) -> &mut Self {
        self.events.clear();
        self
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the calendar has no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
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

    /// Values the events of this calendar inherit when rendered.
    #[must_use]
    pub fn inherited(&self) -> Inherited<'_> {
        Inherited {
            timezone: self.timezone.as_deref(),
            domain: self.domain.as_deref(),
            summary: None,
        }
    }

    /// Render the calendar as folded iCalendar text with default options.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing anywhere in the graph.
    pub fn to_ical_string(&self) -> Result<String> {
        format(self)
    }

    /// Build a calendar from its structured representation.
    ///
    /// # Errors
    ///
    /// Returns an error if any field or nested entity is invalid.
    pub fn from_data(data: CalendarData) -> Result<Self> {
        let mut calendar = Self::new();
        if let Some(prod_id) = data.prod_id.as_deref() {
            calendar.set_prod_id(prod_id)?;
        }
        calendar
            .set_domain(data.domain)
            .set_method(parse_closed_opt("method", data.method.as_deref())?)
            .set_description(data.description)
            .set_url(data.url)
            .set_scale(data.scale.as_deref())
            .set_timezone(data.timezone.as_deref())?
            .set_ttl(data.ttl)?
            .set_x_properties(XProperties::from_pairs(data.x)?)
            .set_events(data.events)?;
        if let Some(name) = data.name {
            calendar.set_name(name);
        }
        Ok(calendar)
    }

    /// Convert to the structured representation.
    #[must_use]
    pub fn to_data(&self) -> CalendarData {
        CalendarData {
            domain: self.domain.clone(),
            prod_id: Some(self.prod_id.to_string()),
            method: self.method.map(|m| m.to_string()),
            name: self.name.clone(),
            description: self.description.clone(),
            timezone: self.timezone.clone(),
            url: self.url.clone(),
            scale: self.scale.clone(),
            ttl: self.ttl,
            events: self.events.iter().map(Event::to_data).collect(),
            x: self.x.to_vec(),
        }
    }

    /// Encode the structured representation as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_data())?)
    }

    /// Build a calendar from JSON produced by [`Calendar::to_json`].
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or describes an invalid
    /// calendar.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: CalendarData = serde_json::from_str(json)?;
        Self::from_data(data)
    }
}

/// Structured representation of a [`Calendar`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[expect(missing_docs)]
pub struct CalendarData {
    pub domain: Option<String>,
    /// `//company//product//LANG`
    pub prod_id: Option<String>,
    pub method: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub timezone: Option<String>,
    pub url: Option<String>,
    pub scale: Option<String>,
    /// Refresh interval in seconds
    pub ttl: Option<i64>,
    pub events: Vec<EventData>,
    pub x: Vec<(String, String)>,
}
