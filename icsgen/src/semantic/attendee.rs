// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Attendee of an event or an e-mail alarm.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::formatter::{FormatOptions, render, write_attendee};
use crate::parameter::{CalendarUserType, ParticipationRole, ParticipationStatus};
use crate::semantic::{XProperties, parse_closed_opt, parse_mailbox};

/// Attendee of an event or an e-mail alarm (RFC 5545 Section 3.8.4.1).
///
/// Delegation links point at other attendees by their e-mail address; use
/// [`crate::Event::attendee_by_email`] to resolve them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attendee {
    name: Option<String>,
    email: Option<String>,
    mailto: Option<String>,
    sent_by: Option<String>,
    role: ParticipationRole,
    rsvp: Option<bool>,
    status: Option<ParticipationStatus>,
    user_type: Option<CalendarUserType>,
    delegated_to: Option<String>,
    delegated_from: Option<String>,
    x: XProperties,
}

impl Attendee {
    /// Create an attendee with an e-mail address and nothing else.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }

    /// Common name, written as `CN`.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the common name.
    pub fn set_name(&mut self, name: Option<String>) -> &mut Self {
        self.name = name;
        self
    }

    /// E-mail address, required for rendering.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Set the e-mail address.
    pub fn set_email(&mut self, email: impl Into<String>) -> &mut Self {
        self.email = Some(email.into());
        self
    }

    /// Address written after `MAILTO:` instead of the e-mail address.
    #[must_use]
    pub fn mailto(&self) -> Option<&str> {
        self.mailto.as_deref()
    }

    /// Set the `MAILTO:` override.
    pub fn set_mailto(&mut self, mailto: Option<String>) -> &mut Self {
        self.mailto = mailto;
        self
    }

    /// Address of the user acting on behalf of the attendee.
    #[must_use]
    pub fn sent_by(&self) -> Option<&str> {
        self.sent_by.as_deref()
    }

    /// Set the `SENT-BY` address.
    pub fn set_sent_by(&mut self, sent_by: Option<String>) -> &mut Self {
        self.sent_by = sent_by;
        self
    }

    /// Participation role, `REQ-PARTICIPANT` by default.
    #[must_use]
    pub fn role(&self) -> ParticipationRole {
        self.role
    }

    /// Set the participation role.
    pub fn set_role(&mut self, role: ParticipationRole) -> &mut Self {
        self.role = role;
        self
    }

    /// Whether a reply is expected; `None` leaves `RSVP` out.
    #[must_use]
    pub fn rsvp(&self) -> Option<bool> {
        self.rsvp
    }

    /// Set the reply expectation.
    pub fn set_rsvp(&mut self, rsvp: Option<bool>) -> &mut Self {
        self.rsvp = rsvp;
        self
    }

    /// Participation status.
    #[must_use]
    pub fn status(&self) -> Option<ParticipationStatus> {
        self.status
    }

    /// Set the participation status.
    pub fn set_status(&mut self, status: Option<ParticipationStatus>) -> &mut Self {
        self.status = status;
        self
    }

    /// Calendar user type, written as `CUTYPE`.
    #[must_use]
    pub fn user_type(&self) -> Option<CalendarUserType> {
        self.user_type
    }

    /// Set the calendar user type.
    pub fn set_user_type(&mut self, user_type: Option<CalendarUserType>) -> &mut Self {
        self.user_type = user_type;
        self
    }

    /// E-mail address of the attendee this one delegated to.
    #[must_use]
    pub fn delegated_to(&self) -> Option<&str> {
        self.delegated_to.as_deref()
    }

    /// Delegate to the attendee with the given e-mail address.
    ///
    /// The participation status becomes `DELEGATED`.
    pub fn set_delegated_to(&mut self, email: impl Into<String>) -> &mut Self {
        self.delegated_to = Some(email.into());
        self.status = Some(ParticipationStatus::Delegated);
        self
    }

    /// Remove the delegation. A `DELEGATED` status is cleared with it; any
    /// other status is kept.
    pub fn clear_delegated_to(&mut self) -> &mut Self {
        self.delegated_to = None;
        if self.status == Some(ParticipationStatus::Delegated) {
            self.status = None;
        }
        self
    }

    /// E-mail address of the attendee this one was delegated from.
    #[must_use]
    pub fn delegated_from(&self) -> Option<&str> {
        self.delegated_from.as_deref()
    }

    /// Set or clear the delegator.
    pub fn set_delegated_from(&mut self, email: Option<String>) -> &mut Self {
        self.delegated_from = email;
        self
    }

    /// Custom properties, written as `X-` parameters.
    #[must_use]
    pub fn x_properties(&self) -> &XProperties {
        &self.x
    }

    /// Append a custom `X-` parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` does not start with `X-`.
    pub fn push_x(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<&mut Self> {
        self.x.push(key, value)?;
        Ok(self)
    }

    /// Replace every custom `X-` parameter.
    pub fn set_x_properties(&mut self, x: XProperties) -> &mut Self {
        self.x = x;
        self
    }

    /// Render the `ATTENDEE` content line, unfolded and without CRLF.
    ///
    /// # Errors
    ///
    /// Returns an error if the e-mail address is unset.
    pub fn to_ical_string(&self) -> Result<String> {
        let text = render(FormatOptions::default().folding(None), |f| {
            write_attendee(f, self)
        })?;
        Ok(text.trim_end_matches("\r\n").to_owned())
    }

    /// Build an attendee from its structured representation.
    ///
    /// # Errors
    ///
    /// Returns an error if a closed-set token is not recognized or an `X-`
    /// key is malformed. A delegation without an explicit status implies
    /// `DELEGATED`.
    pub fn from_data(data: AttendeeData) -> Result<Self> {
        let mut status = parse_closed_opt("status", data.status.as_deref())?;
        if status.is_none() && data.delegated_to.is_some() {
            status = Some(ParticipationStatus::Delegated);
        }
        Ok(Self {
            name: data.name,
            email: data.email,
            mailto: data.mailto,
            sent_by: data.sent_by,
            role: parse_closed_opt("role", data.role.as_deref())?.unwrap_or_default(),
            rsvp: data.rsvp,
            status,
            user_type: parse_closed_opt("type", data.user_type.as_deref())?,
            delegated_to: data.delegated_to,
            delegated_from: data.delegated_from,
            x: XProperties::from_pairs(data.x)?,
        })
    }

    /// Convert to the structured representation.
    #[must_use]
    pub fn to_data(&self) -> AttendeeData {
        AttendeeData {
            name: self.name.clone(),
            email: self.email.clone(),
            mailto: self.mailto.clone(),
            sent_by: self.sent_by.clone(),
            role: Some(self.role.to_string()),
            rsvp: self.rsvp,
            status: self.status.map(|s| s.to_string()),
            user_type: self.user_type.map(|t| t.to_string()),
            delegated_to: self.delegated_to.clone(),
            delegated_from: self.delegated_from.clone(),
            x: self.x.to_vec(),
        }
    }
}

/// Structured representation of an [`Attendee`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[expect(missing_docs)]
pub struct AttendeeData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mailto: Option<String>,
    pub sent_by: Option<String>,
    pub role: Option<String>,
    pub rsvp: Option<bool>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub user_type: Option<String>,
    /// E-mail address of the delegate
    pub delegated_to: Option<String>,
    /// E-mail address of the delegator
    pub delegated_from: Option<String>,
    pub x: Vec<(String, String)>,
}

impl AttendeeData {
    /// Data for an attendee with only an e-mail address.
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }
}

impl FromStr for AttendeeData {
    type Err = Error;

    /// Parse `Name <email>`.
    fn from_str(s: &str) -> Result<Self> {
        let mailbox = parse_mailbox("attendee", s)?;
        Ok(Self {
            name: Some(mailbox.name),
            email: Some(mailbox.email),
            ..Self::default()
        })
    }
}

/// Direction of a delegation between two attendees of the same owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Delegation {
    /// The existing attendee delegates to the new one
    To,
    /// The existing attendee was delegated from the new one
    From,
}

/// Append a delegation sibling to `attendees` and link it with the attendee
/// at `index`.
pub(crate) fn delegate(
    attendees: &mut Vec<Attendee>,
    index: usize,
    data: AttendeeData,
    direction: Delegation,
) -> Result<&mut Attendee> {
    let existing_email = attendees
        .get(index)
        .ok_or_else(|| {
            Error::invalid(
                "attendees",
                format!("no attendee at index {index} to delegate"),
            )
        })?
        .email()
        .map(str::to_owned)
        .ok_or_else(|| Error::missing("attendee", "email"))?;

    let mut sibling = Attendee::from_data(data)?;
    let sibling_email = sibling
        .email()
        .map(str::to_owned)
        .ok_or_else(|| Error::missing("attendee", "email"))?;

    if let Some(existing) = attendees.get_mut(index) {
        match direction {
            Delegation::To => {
                existing.set_delegated_to(sibling_email);
                sibling.set_delegated_from(Some(existing_email));
            }
            Delegation::From => {
                existing.set_delegated_from(Some(sibling_email));
                sibling.set_delegated_to(existing_email);
            }
        }
    }

    tracing::trace!(index, ?direction, "created delegation sibling");
    attendees.push(sibling);
    attendees
        .last_mut()
        .ok_or_else(|| Error::invalid("attendees", "attendee list is empty"))
}
