// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords emitted by the formatter, as named in RFC 5545 and the common
//! vendor extensions.

pub const KW_BEGIN: &str = "BEGIN";
pub const KW_END: &str = "END";

pub const KW_VCALENDAR: &str = "VCALENDAR";
pub const KW_VEVENT: &str = "VEVENT";
pub const KW_VALARM: &str = "VALARM";

// Section 3.2 - Property Parameters
pub const KW_CN: &str = "CN";
pub const KW_CUTYPE: &str = "CUTYPE";
pub const KW_DELEGATED_FROM: &str = "DELEGATED-FROM";
pub const KW_DELEGATED_TO: &str = "DELEGATED-TO";
pub const KW_EMAIL: &str = "EMAIL";
pub const KW_FMTTYPE: &str = "FMTTYPE";
pub const KW_PARTSTAT: &str = "PARTSTAT";
pub const KW_RELATED: &str = "RELATED";
pub const KW_RELATED_END: &str = "END";
pub const KW_ROLE: &str = "ROLE";
pub const KW_RSVP: &str = "RSVP";
pub const KW_RSVP_TRUE: &str = "TRUE";
pub const KW_RSVP_FALSE: &str = "FALSE";
pub const KW_SENT_BY: &str = "SENT-BY";
pub const KW_TZID: &str = "TZID";
pub const KW_VALUE: &str = "VALUE";

// Section 3.3 - Property Value Data Types
pub const KW_DATE: &str = "DATE";
pub const KW_DATETIME: &str = "DATE-TIME";
pub const KW_DURATION: &str = "DURATION";
pub const KW_URI: &str = "URI";

// Section 3.7 - Calendar Properties
pub const KW_CALSCALE: &str = "CALSCALE";
pub const KW_METHOD: &str = "METHOD";
pub const KW_PRODID: &str = "PRODID";
pub const KW_VERSION: &str = "VERSION";
pub const KW_VERSION_2_0: &str = "2.0";

// Section 3.8.1 - Descriptive Component Properties
pub const KW_ATTACH: &str = "ATTACH";
pub const KW_CATEGORIES: &str = "CATEGORIES";
pub const KW_CLASS: &str = "CLASS";
pub const KW_DESCRIPTION: &str = "DESCRIPTION";
pub const KW_GEO: &str = "GEO";
pub const KW_LOCATION: &str = "LOCATION";
pub const KW_PRIORITY: &str = "PRIORITY";
pub const KW_STATUS: &str = "STATUS";
pub const KW_SUMMARY: &str = "SUMMARY";

// Section 3.8.2 - Date and Time Component Properties
pub const KW_DTSTART: &str = "DTSTART";
pub const KW_DTEND: &str = "DTEND";
pub const KW_TRANSP: &str = "TRANSP";

// Section 3.8.4 - Relationship Component Properties
pub const KW_ATTENDEE: &str = "ATTENDEE";
pub const KW_ORGANIZER: &str = "ORGANIZER";
pub const KW_RECURRENCE_ID: &str = "RECURRENCE-ID";
pub const KW_URL: &str = "URL";
pub const KW_UID: &str = "UID";

// Section 3.8.5 - Recurrence Component Properties
pub const KW_EXDATE: &str = "EXDATE";
pub const KW_RRULE: &str = "RRULE";

// Section 3.8.6 - Alarm Component Properties
pub const KW_ACTION: &str = "ACTION";
pub const KW_REPEAT: &str = "REPEAT";
pub const KW_TRIGGER: &str = "TRIGGER";

// Section 3.8.7 - Change Management Component Properties
pub const KW_CREATED: &str = "CREATED";
pub const KW_DTSTAMP: &str = "DTSTAMP";
pub const KW_LAST_MODIFIED: &str = "LAST-MODIFIED";
pub const KW_SEQUENCE: &str = "SEQUENCE";

// Section 3.3.10 - Recurrence Rule parts
pub const KW_RRULE_FREQ: &str = "FREQ";
pub const KW_RRULE_COUNT: &str = "COUNT";
pub const KW_RRULE_INTERVAL: &str = "INTERVAL";
pub const KW_RRULE_UNTIL: &str = "UNTIL";
pub const KW_RRULE_BYDAY: &str = "BYDAY";
pub const KW_RRULE_BYMONTH: &str = "BYMONTH";
pub const KW_RRULE_BYMONTHDAY: &str = "BYMONTHDAY";
pub const KW_RRULE_BYSETPOS: &str = "BYSETPOS";
pub const KW_RRULE_WKST: &str = "WKST";

// Weekdays
pub const KW_DAY_SU: &str = "SU";
pub const KW_DAY_MO: &str = "MO";
pub const KW_DAY_TU: &str = "TU";
pub const KW_DAY_WE: &str = "WE";
pub const KW_DAY_TH: &str = "TH";
pub const KW_DAY_FR: &str = "FR";
pub const KW_DAY_SA: &str = "SA";

// Vendor extensions
pub const KW_X_ALT_DESC: &str = "X-ALT-DESC";
pub const KW_X_APPLE_STRUCTURED_LOCATION: &str = "X-APPLE-STRUCTURED-LOCATION";
pub const KW_X_ADDRESS: &str = "X-ADDRESS";
pub const KW_X_APPLE_RADIUS: &str = "X-APPLE-RADIUS";
pub const KW_X_TITLE: &str = "X-TITLE";
pub const KW_X_MS_ALLDAY: &str = "X-MICROSOFT-CDO-ALLDAYEVENT";
pub const KW_X_MSN_ALLDAY: &str = "X-MICROSOFT-MSNCALENDAR-ALLDAYEVENT";
pub const KW_X_MS_BUSYSTATUS: &str = "X-MICROSOFT-CDO-BUSYSTATUS";
pub const KW_X_WR_CALNAME: &str = "X-WR-CALNAME";
pub const KW_X_WR_CALDESC: &str = "X-WR-CALDESC";
pub const KW_X_WR_TIMEZONE: &str = "X-WR-TIMEZONE";
pub const KW_X_PUBLISHED_TTL: &str = "X-PUBLISHED-TTL";
pub const KW_NAME: &str = "NAME";
pub const KW_TIMEZONE_ID: &str = "TIMEZONE-ID";
pub const KW_REFRESH_INTERVAL: &str = "REFRESH-INTERVAL";

// Defaults
pub const KW_MAILTO: &str = "mailto:";
pub const KW_MAILTO_UPPER: &str = "MAILTO:";
pub const KW_DEFAULT_ALARM_SOUND: &str = "Basso";
pub const KW_TEXT_HTML: &str = "text/html";
pub const KW_TRUE: &str = "TRUE";
