// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Date and date-time formatting under time zone and floating rules.

use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::error::{Error, Result};
use crate::keyword::KW_TZID;

/// Resolve an IANA time zone name.
///
/// A single leading `/` is tolerated, as some producers prefix zone names
/// with it.
///
/// # Errors
///
/// Returns an error if the zone is not present in the time zone database.
pub fn resolve_time_zone(name: &str) -> Result<TimeZone> {
    let name = name.strip_prefix('/').unwrap_or(name);
    TimeZone::get(name).map_err(|e| Error::invalid("timezone", format!("`{name}`: {e}")))
}

/// Format an instant as `YYYYMMDD` or `YYYYMMDDTHHMMSS[Z]`.
///
/// The instant is projected into `timezone` when given, otherwise into UTC.
/// The trailing `Z` is appended unless `floating` is set; `date_only`
/// truncates to the date part regardless of the other flags.
///
/// # Errors
///
/// Returns an error if `timezone` is not a known zone.
pub fn format_date(
    timezone: Option<&str>,
    value: Timestamp,
    date_only: bool,
    floating: bool,
) -> Result<String> {
    let tz = match timezone {
        Some(name) => resolve_time_zone(name)?,
        None => TimeZone::UTC,
    };
    let zoned = value.to_zoned(tz);
    if date_only {
        return Ok(zoned.strftime("%Y%m%d").to_string());
    }

    let mut s = zoned.strftime("%Y%m%dT%H%M%S").to_string();
    if !floating {
        s.push('Z');
    }
    Ok(s)
}

/// Time zone state of the component that owns a date-time property.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateFlags<'a> {
    /// Time zone set explicitly on the owner, emitted as `TZID`
    pub timezone: Option<&'a str>,
    /// Whether the owner uses floating (wall-clock) time
    pub floating: bool,
}

/// Format a date-time property as `NAME[;TZID=zone]:value`.
///
/// An owner with its own time zone gets a `TZID` parameter and its value is
/// written as local time (no `Z`), sharing the floating encoding.
///
/// # Errors
///
/// Returns an error if `timezone` is not a known zone.
pub fn format_date_tz(
    timezone: Option<&str>,
    property: &str,
    value: Timestamp,
    owner: DateFlags<'_>,
) -> Result<String> {
    let mut floating = owner.floating;
    let mut out = String::from(property);
    if let Some(tzid) = owner.timezone {
        out.push(';');
        out.push_str(KW_TZID);
        out.push('=');
        out.push_str(tzid);
        floating = true;
    }
    out.push(':');
    out.push_str(&format_date(timezone, value, false, floating)?);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant() -> Timestamp {
        "2018-07-05T18:24:00.052Z".parse().unwrap()
    }

    #[test]
    fn formats_utc_date_time() {
        let s = format_date(None, instant(), false, false).unwrap();
        assert_eq!(s, "20180705T182400Z");
    }

    #[test]
    fn projects_into_time_zone() {
        let s = format_date(Some("Europe/Berlin"), instant(), false, false).unwrap();
        assert_eq!(s, "20180705T202400Z");

        let s = format_date(Some("/Europe/Berlin"), instant(), false, true).unwrap();
        assert_eq!(s, "20180705T202400");
    }

    #[test]
    fn formats_date_only() {
        #[rustfmt::skip]
        let cases = [
            (None,                    false, "20180705"),
            (None,                    true,  "20180705"),
            (Some("Europe/Berlin"),   false, "20180705"),
            (Some("Pacific/Auckland"), false, "20180706"),
        ];
        for (tz, floating, expected) in cases {
            assert_eq!(format_date(tz, instant(), true, floating).unwrap(), expected);
        }
    }

    #[test]
    fn formats_floating_without_zone() {
        let s = format_date(None, instant(), false, true).unwrap();
        assert_eq!(s, "20180705T182400");
    }

    #[test]
    fn rejects_unknown_zone() {
        let err = format_date(Some("Mars/Olympus"), instant(), false, false).unwrap_err();
        assert!(err.to_string().contains("timezone"));
    }

    #[test]
    fn formats_property_with_tzid() {
        let owner = DateFlags {
            timezone: Some("Europe/Berlin"),
            floating: false,
        };
        let s = format_date_tz(Some("Europe/Berlin"), "DTSTART", instant(), owner).unwrap();
        assert_eq!(s, "DTSTART;TZID=Europe/Berlin:20180705T202400");
    }

    #[test]
    fn formats_property_without_tzid() {
        let s = format_date_tz(None, "DTEND", instant(), DateFlags::default()).unwrap();
        assert_eq!(s, "DTEND:20180705T182400Z");

        let owner = DateFlags {
            timezone: None,
            floating: true,
        };
        let s = format_date_tz(None, "DTEND", instant(), owner).unwrap();
        assert_eq!(s, "DTEND:20180705T182400");
    }
}
