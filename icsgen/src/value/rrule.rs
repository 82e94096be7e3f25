// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence rule encoding (RFC 5545 Section 3.3.10).
//!
//! A rule can be supplied in three shapes: structured [`RepeatingOptions`],
//! any value implementing [`ToRecurrenceString`], or a raw string. Only the
//! structured shape is validated; the other two are emitted as given.

use std::fmt::{self, Display, Write};
use std::sync::Arc;

use chumsky::extra::ParserExtra;
use chumsky::input::{Input, Stream};
use chumsky::prelude::*;
use chumsky::span::SimpleSpan;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use strum::VariantNames;

use crate::error::{Error, Result};
use crate::keyword::{
    KW_DAY_FR, KW_DAY_MO, KW_DAY_SA, KW_DAY_SU, KW_DAY_TH, KW_DAY_TU, KW_DAY_WE, KW_DTSTART,
    KW_RRULE, KW_RRULE_BYDAY, KW_RRULE_BYMONTH, KW_RRULE_BYMONTHDAY, KW_RRULE_BYSETPOS,
    KW_RRULE_COUNT, KW_RRULE_FREQ, KW_RRULE_INTERVAL, KW_RRULE_UNTIL, KW_RRULE_WKST,
};
use crate::semantic::parse_closed;
use crate::value::datetime::format_date;

/// Recurrence frequency
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
pub enum RecurrenceFrequency {
    Secondly,
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Day of the week
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
pub enum WeekDay {
    #[strum(serialize = "SU")]
    Sunday,
    #[strum(serialize = "MO")]
    Monday,
    #[strum(serialize = "TU")]
    Tuesday,
    #[strum(serialize = "WE")]
    Wednesday,
    #[strum(serialize = "TH")]
    Thursday,
    #[strum(serialize = "FR")]
    Friday,
    #[strum(serialize = "SA")]
    Saturday,
}

/// Day of week with optional occurrence, e.g. `MO`, `2FR` or `-1SU`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekDayNum {
    /// Day of the week
    pub day: WeekDay,
    /// Occurrence within the month or year (1 to 53, negative counts from the end)
    pub occurrence: Option<i8>,
}

impl From<WeekDay> for WeekDayNum {
    fn from(day: WeekDay) -> Self {
        Self {
            day,
            occurrence: None,
        }
    }
}

impl Display for WeekDayNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(n) = self.occurrence {
            write!(f, "{n}")?;
        }
        write!(f, "{}", self.day)
    }
}

impl std::str::FromStr for WeekDayNum {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_week_day_num(s)
    }
}

/// Parse a BYDAY token such as `TU`, `+3WE` or `-1SU`.
pub(crate) fn parse_week_day_num(src: &str) -> Result<WeekDayNum> {
    let not_in_set = || Error::NotInSet {
        field: "byDay",
        value: src.to_owned(),
        accepted: WeekDay::VARIANTS,
    };

    let upper = src.trim().to_ascii_uppercase();
    let stream = Stream::from_iter(upper.chars());
    let parsed = week_day_num::<'_, _, extra::Err<Rich<'_, char>>>()
        .then_ignore(end())
        .parse(stream)
        .into_result()
        .map_err(|_| not_in_set())?;

    if let Some(n) = parsed.occurrence
        && !(1..=53).contains(&n.unsigned_abs())
    {
        return Err(Error::invalid(
            "byDay",
            format!("occurrence in `{src}` must be between 1 and 53"),
        ));
    }
    Ok(parsed)
}

/// ```txt
/// weekdaynum  = [[plus / minus] ordwk] weekday
/// ```
fn week_day_num<'src, I, E>() -> impl Parser<'src, I, WeekDayNum, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    is_positive()
        .then(ordwk())
        .map(|(positive, n)| if positive { n } else { -n })
        .or_not()
        .then(weekday())
        .map(|(occurrence, day)| WeekDayNum { day, occurrence })
}

/// ```txt
/// ordwk       = 1*2DIGIT       ;1 to 53
/// ```
fn ordwk<'src, I, E>() -> impl Parser<'src, I, i8, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    // Out-of-range ordinals are rejected after parsing
    select! { c @ '0'..='9' => c }
        .repeated()
        .at_least(1)
        .at_most(2)
        .collect::<String>()
        .map(|digits| digits.parse::<i8>().unwrap_or(0))
}

/// ```txt
/// weekday     = "SU" / "MO" / "TU" / "WE" / "TH" / "FR" / "SA"
/// ```
fn weekday<'src, I, E>() -> impl Parser<'src, I, WeekDay, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    choice((
        just(KW_DAY_SU).to(WeekDay::Sunday),
        just(KW_DAY_MO).to(WeekDay::Monday),
        just(KW_DAY_TU).to(WeekDay::Tuesday),
        just(KW_DAY_WE).to(WeekDay::Wednesday),
        just(KW_DAY_TH).to(WeekDay::Thursday),
        just(KW_DAY_FR).to(WeekDay::Friday),
        just(KW_DAY_SA).to(WeekDay::Saturday),
    ))
}

fn is_positive<'src, I, E>() -> impl Parser<'src, I, bool, E> + Copy
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    select! { c @ ('+' | '-') => c }
        .or_not()
        .map(|c| !matches!(c, Some('-')))
}

/// A recurrence rule object that already knows its canonical string form.
///
/// The returned text may be a bare rule (`FREQ=DAILY;COUNT=3`) or one or
/// more full property lines (`RRULE:...`, `EXDATE:...`). Any `DTSTART`
/// line is dropped, since the event always writes its own.
pub trait ToRecurrenceString {
    /// The canonical RRULE text of this rule.
    fn to_recurrence_string(&self) -> String;
}

/// Structured recurrence rule options.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatingOptions {
    /// Frequency of recurrence
    pub freq: RecurrenceFrequency,
    /// Number of occurrences
    pub count: Option<u32>,
    /// Interval between recurrences
    pub interval: Option<u32>,
    /// Last occurrence
    pub until: Option<Timestamp>,
    /// Day of week specifier
    pub by_day: Vec<WeekDayNum>,
    /// Month specifier, 1 to 12
    pub by_month: Vec<u8>,
    /// Day of month specifier, -31 to 31 except 0
    pub by_month_day: Vec<i8>,
    /// Position within the set, -366 to 366 except 0; requires `by_day`
    pub by_set_pos: Vec<i16>,
    /// Occurrences removed from the set, written as `EXDATE`
    pub exclude: Vec<Timestamp>,
    /// Start day of week
    pub start_of_week: Option<WeekDay>,
}

impl RepeatingOptions {
    /// Create options with only a frequency set.
    #[must_use]
    pub const fn new(freq: RecurrenceFrequency) -> Self {
        Self {
            freq,
            count: None,
            interval: None,
            until: None,
            by_day: Vec::new(),
            by_month: Vec::new(),
            by_month_day: Vec::new(),
            by_set_pos: Vec::new(),
            exclude: Vec::new(),
            start_of_week: None,
        }
    }

    /// Check every range constraint on the rule parts.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first part that is out of range.
    pub fn validate(&self) -> Result<()> {
        for day in &self.by_day {
            if let Some(n) = day.occurrence
                && !(1..=53).contains(&n.unsigned_abs())
            {
                return Err(Error::invalid(
                    "byDay",
                    format!("occurrence in `{day}` must be between 1 and 53"),
                ));
            }
        }

        if let Some(month) = self.by_month.iter().find(|m| !(1..=12).contains(*m)) {
            return Err(Error::invalid(
                "byMonth",
                format!("`{month}` is not between 1 and 12"),
            ));
        }

        if let Some(day) = self
            .by_month_day
            .iter()
            .find(|d| **d == 0 || !(-31..=31).contains(*d))
        {
            return Err(Error::invalid(
                "byMonthDay",
                format!("`{day}` is not between -31 and 31 (excluding 0)"),
            ));
        }

        if !self.by_set_pos.is_empty() {
            if self.by_day.is_empty() {
                return Err(Error::invalid(
                    "bySetPos",
                    "requires `byDay` to be set as well",
                ));
            }
            if let Some(pos) = self
                .by_set_pos
                .iter()
                .find(|p| **p == 0 || !(-366..=366).contains(*p))
            {
                return Err(Error::invalid(
                    "bySetPos",
                    format!("`{pos}` is not between -366 and 366 (excluding 0)"),
                ));
            }
        }

        Ok(())
    }

    /// Render the rule parts, without the `RRULE:` prefix.
    ///
    /// Parts are written in the order FREQ, COUNT, INTERVAL, UNTIL, BYDAY,
    /// BYMONTH, BYMONTHDAY, BYSETPOS, WKST. `UNTIL` is a date when
    /// `date_only` is set, a local date-time projected into `timezone` when
    /// `floating` is set, and a UTC date-time otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the `UNTIL` value cannot be formatted.
    pub fn to_rule_string(
        &self,
        date_only: bool,
        floating: bool,
        timezone: Option<&str>,
    ) -> Result<String> {
        let mut s = format!("{KW_RRULE_FREQ}={}", self.freq);
        if let Some(count) = self.count {
            let _ = write!(s, ";{KW_RRULE_COUNT}={count}");
        }
        if let Some(interval) = self.interval {
            let _ = write!(s, ";{KW_RRULE_INTERVAL}={interval}");
        }
        if let Some(until) = self.until {
            let until = if floating && !date_only {
                format_date(timezone, until, false, true)?
            } else {
                format_date(None, until, date_only, false)?
            };
            let _ = write!(s, ";{KW_RRULE_UNTIL}={until}");
        }
        if !self.by_day.is_empty() {
            let _ = write!(s, ";{KW_RRULE_BYDAY}={}", join(&self.by_day));
        }
        if !self.by_month.is_empty() {
            let _ = write!(s, ";{KW_RRULE_BYMONTH}={}", join(&self.by_month));
        }
        if !self.by_month_day.is_empty() {
            let _ = write!(s, ";{KW_RRULE_BYMONTHDAY}={}", join(&self.by_month_day));
        }
        if !self.by_set_pos.is_empty() {
            let _ = write!(s, ";{KW_RRULE_BYSETPOS}={}", join(&self.by_set_pos));
        }
        if let Some(wkst) = self.start_of_week {
            let _ = write!(s, ";{KW_RRULE_WKST}={wkst}");
        }
        Ok(s)
    }

    /// Build options from their structured representation.
    ///
    /// # Errors
    ///
    /// Returns an error if a token is not recognized or a part is out of range.
    pub fn from_data(data: RepeatingOptionsData) -> Result<Self> {
        let options = Self {
            freq: parse_closed("freq", &data.freq)?,
            count: data.count,
            interval: data.interval,
            until: data.until,
            by_day: data
                .by_day
                .iter()
                .map(|d| parse_week_day_num(d))
                .collect::<Result<_>>()?,
            by_month: data.by_month,
            by_month_day: data.by_month_day,
            by_set_pos: data.by_set_pos,
            exclude: data.exclude,
            start_of_week: data
                .start_of_week
                .as_deref()
                .map(|s| parse_closed("startOfWeek", s))
                .transpose()?,
        };
        options.validate()?;
        Ok(options)
    }

    /// Convert to the structured representation.
    #[must_use]
    pub fn to_data(&self) -> RepeatingOptionsData {
        RepeatingOptionsData {
            freq: self.freq.to_string(),
            count: self.count,
            interval: self.interval,
            until: self.until,
            by_day: self.by_day.iter().map(ToString::to_string).collect(),
            by_month: self.by_month.clone(),
            by_month_day: self.by_month_day.clone(),
            by_set_pos: self.by_set_pos.clone(),
            exclude: self.exclude.clone(),
            start_of_week: self.start_of_week.map(|d| d.to_string()),
        }
    }
}

fn join<T: Display>(values: &[T]) -> String {
    let mut s = String::new();
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            s.push(',');
        }
        let _ = write!(s, "{v}");
    }
    s
}

/// The recurrence of an event.
#[derive(Clone)]
pub enum Repeating {
    /// Structured options, validated when set
    Options(RepeatingOptions),
    /// A rule object that renders itself
    Rule(Arc<dyn ToRecurrenceString + Send + Sync>),
    /// Raw RRULE text
    Raw(String),
}

impl fmt::Debug for Repeating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Options(options) => f.debug_tuple("Options").field(options).finish(),
            Self::Rule(rule) => f
                .debug_tuple("Rule")
                .field(&rule.to_recurrence_string())
                .finish(),
            Self::Raw(raw) => f.debug_tuple("Raw").field(raw).finish(),
        }
    }
}

impl From<RepeatingOptions> for Repeating {
    fn from(options: RepeatingOptions) -> Self {
        Self::Options(options)
    }
}

impl From<String> for Repeating {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

impl From<&str> for Repeating {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_owned())
    }
}

impl Repeating {
    /// Wrap a rule object that renders itself.
    pub fn rule(rule: impl ToRecurrenceString + Send + Sync + 'static) -> Self {
        Self::Rule(Arc::new(rule))
    }

    /// Build a recurrence from its structured representation.
    ///
    /// # Errors
    ///
    /// Returns an error if structured options fail validation.
    pub fn from_data(data: RepeatingData) -> Result<Self> {
        match data {
            RepeatingData::Options(options) => {
                RepeatingOptions::from_data(*options).map(Self::Options)
            }
            RepeatingData::Raw(raw) => Ok(Self::Raw(raw)),
        }
    }

    /// Convert to the structured representation. Rule objects collapse to
    /// their string form.
    #[must_use]
    pub fn to_data(&self) -> RepeatingData {
        match self {
            Self::Options(options) => RepeatingData::Options(Box::new(options.to_data())),
            Self::Rule(rule) => RepeatingData::Raw(rule.to_recurrence_string()),
            Self::Raw(raw) => RepeatingData::Raw(raw.clone()),
        }
    }
}

/// Property lines for a rule given as text.
///
/// `DTSTART` lines are removed. A single remaining line without a property
/// name gets an `RRULE:` prefix.
pub(crate) fn recurrence_lines(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.to_ascii_uppercase().starts_with(KW_DTSTART))
        .collect();

    match lines.as_slice() {
        [line] if !has_property_name(line) => vec![format!("{KW_RRULE}:{line}")],
        _ => lines.into_iter().map(str::to_owned).collect(),
    }
}

/// Whether a content line starts with a property name, i.e. the text before
/// the first `:` or `;` is a bare name such as `RRULE` or `EXDATE`.
fn has_property_name(line: &str) -> bool {
    let Some(end) = line.find([':', ';']) else {
        return false;
    };
    let (name, _) = line.split_at(end);
    line.contains(':')
        && !name.is_empty()
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Structured representation of a recurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RepeatingData {
    /// Structured options
    Options(Box<RepeatingOptionsData>),
    /// RRULE text
    Raw(String),
}

/// Structured representation of [`RepeatingOptions`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[expect(missing_docs)]
pub struct RepeatingOptionsData {
    pub freq: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub by_day: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub by_month: Vec<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub by_month_day: Vec<i8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub by_set_pos: Vec<i16>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_of_week: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_week_day_num() {
        #[rustfmt::skip]
        let success_cases = [
            ("MO",   WeekDayNum { day: WeekDay::Monday,   occurrence: None }),
            ("su",   WeekDayNum { day: WeekDay::Sunday,   occurrence: None }),
            ("2FR",  WeekDayNum { day: WeekDay::Friday,   occurrence: Some(2) }),
            ("+3WE", WeekDayNum { day: WeekDay::Wednesday, occurrence: Some(3) }),
            ("-1SU", WeekDayNum { day: WeekDay::Sunday,   occurrence: Some(-1) }),
            ("53TH", WeekDayNum { day: WeekDay::Thursday, occurrence: Some(53) }),
        ];
        for (src, expected) in success_cases {
            assert_eq!(parse_week_day_num(src).unwrap(), expected, "src = {src}");
        }

        for src in ["XX", "MON", "2", "", "0MO", "54MO", "1-MO", "123MO"] {
            assert!(parse_week_day_num(src).is_err(), "parse {src} should fail");
        }
    }

    #[test]
    fn rejects_unknown_weekday_with_accepted_list() {
        let err = parse_week_day_num("XX").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("byDay"));
        assert!(msg.contains("SU, MO, TU, WE, TH, FR, SA"));
    }

    #[test]
    fn displays_week_day_num() {
        let day = WeekDayNum {
            day: WeekDay::Friday,
            occurrence: Some(-2),
        };
        assert_eq!(day.to_string(), "-2FR");
        assert_eq!(WeekDayNum::from(WeekDay::Monday).to_string(), "MO");
    }

    #[test]
    fn renders_rule_parts_in_order() {
        let options = RepeatingOptions {
            count: Some(5),
            interval: Some(2),
            until: Some("2019-01-01T00:00:00Z".parse().unwrap()),
            by_day: vec![WeekDay::Monday.into(), WeekDay::Friday.into()],
            by_month: vec![1, 12],
            by_month_day: vec![1, -1],
            by_set_pos: vec![3],
            start_of_week: Some(WeekDay::Sunday),
            ..RepeatingOptions::new(RecurrenceFrequency::Monthly)
        };
        options.validate().unwrap();
        assert_eq!(
            options.to_rule_string(false, false, None).unwrap(),
            "FREQ=MONTHLY;COUNT=5;INTERVAL=2;UNTIL=20190101T000000Z;BYDAY=MO,FR;\
             BYMONTH=1,12;BYMONTHDAY=1,-1;BYSETPOS=3;WKST=SU"
        );
        assert!(
            options
                .to_rule_string(true, false, None)
                .unwrap()
                .contains("UNTIL=20190101;")
        );

        let local = options
            .to_rule_string(false, true, Some("Europe/Berlin"))
            .unwrap();
        assert!(local.contains(";UNTIL=20190101T010000;"), "{local}");
    }

    #[test]
    fn validates_ranges() {
        let base = RepeatingOptions::new(RecurrenceFrequency::Weekly);

        let bad_month = RepeatingOptions {
            by_month: vec![13],
            ..base.clone()
        };
        assert!(bad_month.validate().unwrap_err().to_string().contains("byMonth"));

        let bad_month_day = RepeatingOptions {
            by_month_day: vec![0],
            ..base.clone()
        };
        assert!(bad_month_day.validate().is_err());

        let set_pos_without_by_day = RepeatingOptions {
            by_set_pos: vec![1],
            ..base.clone()
        };
        let msg = set_pos_without_by_day.validate().unwrap_err().to_string();
        assert!(msg.contains("bySetPos"));

        let set_pos_out_of_range = RepeatingOptions {
            by_day: vec![WeekDay::Monday.into()],
            by_set_pos: vec![367],
            ..base
        };
        assert!(set_pos_out_of_range.validate().is_err());
    }

    #[test]
    fn parses_frequency_case_insensitively() {
        let freq: RecurrenceFrequency = "monthly".parse().unwrap();
        assert_eq!(freq, RecurrenceFrequency::Monthly);

        let err = RepeatingOptions::from_data(RepeatingOptionsData {
            freq: "FORTNIGHTLY".to_owned(),
            ..RepeatingOptionsData::default()
        })
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("freq"));
        assert!(msg.contains("SECONDLY, MINUTELY, HOURLY, DAILY, WEEKLY, MONTHLY, YEARLY"));
    }

    #[test]
    fn splits_raw_rule_text() {
        #[rustfmt::skip]
        let cases: [(&str, &[&str]); 4] = [
            ("FREQ=DAILY;COUNT=3", &["RRULE:FREQ=DAILY;COUNT=3"]),
            ("RRULE:FREQ=DAILY", &["RRULE:FREQ=DAILY"]),
            ("DTSTART:20200101T000000Z\nRRULE:FREQ=WEEKLY", &["RRULE:FREQ=WEEKLY"]),
            (
                "RRULE:FREQ=WEEKLY\r\nEXDATE;TZID=Europe/Berlin:20200108T100000",
                &["RRULE:FREQ=WEEKLY", "EXDATE;TZID=Europe/Berlin:20200108T100000"],
            ),
        ];
        for (text, expected) in cases {
            assert_eq!(recurrence_lines(text), expected, "text = {text:?}");
        }
    }

    #[test]
    fn rule_objects_collapse_to_text() {
        struct Daily;
        impl ToRecurrenceString for Daily {
            fn to_recurrence_string(&self) -> String {
                "FREQ=DAILY".to_owned()
            }
        }

        let repeating = Repeating::rule(Daily);
        assert_eq!(repeating.to_data(), RepeatingData::Raw("FREQ=DAILY".to_owned()));
    }
}
