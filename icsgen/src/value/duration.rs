// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Duration rendering as defined in RFC 5545 Section 3.3.6.

use std::fmt::Write;

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Render a signed number of seconds as `[-]P[nD][T[nH][nM][nS]]`.
///
/// Zero renders as `PT0S`; a whole number of days omits the time part.
#[must_use]
pub fn to_duration_string(seconds: i64) -> String {
    let mut out = String::new();
    if seconds < 0 {
        out.push('-');
    }
    out.push('P');

    let mut rest = seconds.unsigned_abs();
    if rest >= SECONDS_PER_DAY {
        let _ = write!(out, "{}D", rest / SECONDS_PER_DAY);
        rest %= SECONDS_PER_DAY;
        if rest == 0 {
            return out;
        }
    }

    out.push('T');
    if rest >= SECONDS_PER_HOUR {
        let _ = write!(out, "{}H", rest / SECONDS_PER_HOUR);
        rest %= SECONDS_PER_HOUR;
    }
    if rest >= SECONDS_PER_MINUTE {
        let _ = write!(out, "{}M", rest / SECONDS_PER_MINUTE);
        rest %= SECONDS_PER_MINUTE;
    }
    if rest > 0 {
        let _ = write!(out, "{rest}S");
    } else if out.ends_with('T') {
        out.push_str("0S");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_durations() {
        #[rustfmt::skip]
        let cases = [
            (0,        "PT0S"),
            (1,        "PT1S"),
            (300,      "PT5M"),
            (-300,     "-PT5M"),
            (3_600,    "PT1H"),
            (-5_400,   "-PT1H30M"),
            (86_400,   "P1D"),
            (90_061,   "P1DT1H1M1S"),
            (-172_800, "-P2D"),
            (86_430,   "P1DT30S"),
        ];
        for (seconds, expected) in cases {
            assert_eq!(to_duration_string(seconds), expected, "seconds = {seconds}");
        }
    }
}
