// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Closed value sets of calendar, event and alarm properties.

/// Method type for iCalendar objects (RFC 5546 Section 1.4)
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
#[expect(missing_docs)]
pub enum CalendarMethod {
    Publish,
    Request,
    Reply,
    Add,
    Cancel,
    Refresh,
    Counter,
    DeclineCounter,
}

/// Event status (RFC 5545 Section 3.8.1.11)
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
pub enum EventStatus {
    /// Event is confirmed
    Confirmed,
    /// Event is tentative
    Tentative,
    /// Event is cancelled
    Cancelled,
}

/// Busy status as understood by Microsoft clients
/// (`X-MICROSOFT-CDO-BUSYSTATUS`).
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
#[expect(missing_docs)]
pub enum BusyStatus {
    Free,
    Tentative,
    Busy,
    /// Out of office
    Oof,
}

/// Time transparency (RFC 5545 Section 3.8.2.7)
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
pub enum TimeTransparency {
    /// Event does not block other events
    Transparent,
    /// Event blocks time
    Opaque,
}

/// Classification of calendar data (RFC 5545 Section 3.8.1.3)
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
#[expect(missing_docs)]
pub enum Classification {
    Public,
    Private,
    Confidential,
}

/// Alarm action.
///
/// Displays in lowercase, as it appears in the structured representation;
/// the formatter writes the uppercase `ACTION` token.
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
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[expect(missing_docs)]
pub enum AlarmType {
    Display,
    Audio,
    Email,
}

impl AlarmType {
    /// The `ACTION` token of this alarm type.
    #[must_use]
    pub const fn action(self) -> &'static str {
        match self {
            Self::Display => "DISPLAY",
            Self::Audio => "AUDIO",
            Self::Email => "EMAIL",
        }
    }
}
