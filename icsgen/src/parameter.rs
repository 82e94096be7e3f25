// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Closed value sets of the property parameters this crate writes, as
//! defined in RFC 5545 Section 3.2.
//!
//! Every enum displays as its RFC token and parses from it without regard
//! to ASCII case.

/// Participation role for calendar user (RFC 5545 Section 3.2.16)
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[strum(ascii_case_insensitive)]
pub enum ParticipationRole {
    /// Indicates chair of the calendar entity
    #[strum(serialize = "CHAIR")]
    Chair,

    /// Indicates a participant whose participation is required
    #[default]
    #[strum(serialize = "REQ-PARTICIPANT")]
    ReqParticipant,

    /// Indicates a participant whose participation is optional
    #[strum(serialize = "OPT-PARTICIPANT")]
    OptParticipant,

    /// Indicates a participant who is copied for information purposes only
    #[strum(serialize = "NON-PARTICIPANT")]
    NonParticipant,
}

/// Participation status for calendar user (RFC 5545 Section 3.2.12)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[strum(ascii_case_insensitive)]
#[expect(missing_docs)]
pub enum ParticipationStatus {
    #[strum(serialize = "ACCEPTED")]
    Accepted,
    #[strum(serialize = "TENTATIVE")]
    Tentative,
    #[strum(serialize = "DECLINED")]
    Declined,
    #[strum(serialize = "DELEGATED")]
    Delegated,
    #[strum(serialize = "NEEDS-ACTION")]
    NeedsAction,
}

/// Calendar user type (RFC 5545 Section 3.2.3)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum CalendarUserType {
    /// An individual
    Individual,
    /// A group of individuals
    Group,
    /// A physical resource
    Resource,
    /// A room resource
    Room,
    /// Otherwise not known
    Unknown,
}

/// Alarm trigger relationship (RFC 5545 Section 3.2.14)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum AlarmTriggerRelationship {
    /// Trigger off of start
    Start,
    /// Trigger off of end
    End,
}

#[cfg(test)]
mod tests {
    use strum::VariantNames;

    use super::*;

    #[test]
    fn parses_tokens_case_insensitively() {
        assert_eq!(
            "req-participant".parse::<ParticipationRole>().unwrap(),
            ParticipationRole::ReqParticipant
        );
        assert_eq!(
            "Needs-Action".parse::<ParticipationStatus>().unwrap(),
            ParticipationStatus::NeedsAction
        );
        assert_eq!(
            "room".parse::<CalendarUserType>().unwrap(),
            CalendarUserType::Room
        );
        assert!("SPEAKER".parse::<ParticipationRole>().is_err());
    }

    #[test]
    fn displays_rfc_tokens() {
        assert_eq!(ParticipationRole::default().to_string(), "REQ-PARTICIPANT");
        assert_eq!(ParticipationStatus::NeedsAction.to_string(), "NEEDS-ACTION");
        assert_eq!(AlarmTriggerRelationship::End.to_string(), "END");
        assert_eq!(
            ParticipationRole::VARIANTS,
            ["CHAIR", "REQ-PARTICIPANT", "OPT-PARTICIPANT", "NON-PARTICIPANT"]
        );
    }
}
