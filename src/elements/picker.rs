//! Date, time and date-time pickers.
//!
//! Initial values are typed with `chrono`. Dates serialise as
//! `YYYY-MM-DD`, times as `HH:mm` and date-times as Unix seconds.

use super::builder::{Common, ElementBuilder};
use crate::{
    error::{Constraint, ValidationResult},
    render::Render,
    validation::{limits, rules},
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Serialize, Serializer};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";
const DATE_WIDTH: usize = 10;
const TIME_WIDTH: usize = 5;

/// Parses `raw` only when it has the zero-padded width of `format`.
fn parse_exact<T>(
    raw: &str,
    format: &str,
    width: usize,
    parse: fn(&str, &str) -> chrono::ParseResult<T>,
) -> Option<T> {
    if raw.len() != width {
        return None;
    }
    parse(raw, format).ok()
}

/// Fields collected for a [`DatePicker`].
#[derive(Debug, Clone, Default)]
pub struct DatePickerDraft {
    initial_date: Option<String>,
}

/// A calendar for picking a single date.
///
/// # Examples
///
/// ```
/// use blockkit::elements::DatePicker;
/// use blockkit::render::Render;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 2, 29).expect("leap day");
/// let picker = DatePicker::builder("due")
///     .with_initial_date(date)
///     .build()
///     .expect("valid picker");
/// let json = picker.to_value().expect("serialisable");
/// assert_eq!(json["initial_date"], "2024-02-29");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "datepicker")]
pub struct DatePicker {
    #[serde(flatten)]
    common: Common,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_date: Option<NaiveDate>,
}

impl DatePicker {
    /// Starts building a date picker.
    #[must_use]
    pub fn builder(action_id: impl Into<String>) -> ElementBuilder<DatePickerDraft> {
        ElementBuilder::new(action_id)
    }

    /// Returns the date selected when the picker first renders.
    #[must_use]
    pub const fn initial_date(&self) -> Option<NaiveDate> {
        self.initial_date
    }
}

impl Render for DatePicker {}

impl ElementBuilder<DatePickerDraft> {
    /// Sets the initially selected date.
    #[must_use]
    pub fn with_initial_date(mut self, date: NaiveDate) -> Self {
        self.draft.initial_date = Some(date.format(DATE_FORMAT).to_string());
        self
    }

    /// Sets the initially selected date from a zero-padded `YYYY-MM-DD`
    /// string.
    #[must_use]
    pub fn with_initial_date_str(mut self, date: impl Into<String>) -> Self {
        self.draft.initial_date = Some(date.into());
        self
    }

    /// Validates the fields and builds the picker.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the action identifier or placeholder
    /// is invalid, or when the initial date is not a `YYYY-MM-DD` date.
    pub fn build(self) -> ValidationResult<DatePicker> {
        let (common, draft) = self.finish()?;
        let initial_date = draft
            .initial_date
            .map(|raw| {
                parse_exact(&raw, DATE_FORMAT, DATE_WIDTH, NaiveDate::parse_from_str).ok_or_else(
                    || {
                        rules::reject(
                            "initial_date",
                            Constraint::InvalidFormat {
                                value: raw,
                                expected: "YYYY-MM-DD",
                            },
                        )
                    },
                )
            })
            .transpose()?;
        Ok(DatePicker {
            common,
            initial_date,
        })
    }
}

/// Fields collected for a [`TimePicker`].
#[derive(Debug, Clone, Default)]
pub struct TimePickerDraft {
    initial_time: Option<String>,
    timezone: Option<String>,
}

/// A clock for picking a time of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "timepicker")]
pub struct TimePicker {
    #[serde(flatten)]
    common: Common,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_time: Option<ClockTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timezone: Option<String>,
}

impl TimePicker {
    /// Starts building a time picker.
    #[must_use]
    pub fn builder(action_id: impl Into<String>) -> ElementBuilder<TimePickerDraft> {
        ElementBuilder::new(action_id)
    }

    /// Returns the time selected when the picker first renders.
    #[must_use]
    pub fn initial_time(&self) -> Option<NaiveTime> {
        self.initial_time.map(|time| time.0)
    }
}

impl Render for TimePicker {}

impl ElementBuilder<TimePickerDraft> {
    /// Sets the initially selected time. Seconds are discarded.
    #[must_use]
    pub fn with_initial_time(mut self, time: NaiveTime) -> Self {
        self.draft.initial_time = Some(time.format(TIME_FORMAT).to_string());
        self
    }

    /// Sets the initially selected time from a zero-padded `HH:mm` string.
    #[must_use]
    pub fn with_initial_time_str(mut self, time: impl Into<String>) -> Self {
        self.draft.initial_time = Some(time.into());
        self
    }

    /// Sets the IANA time zone the time is shown in, such as
    /// `Europe/London`.
    #[must_use]
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.draft.timezone = Some(timezone.into());
        self
    }

    /// Validates the fields and builds the picker.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the action identifier or placeholder
    /// is invalid, when the initial time is not an `HH:mm` time, or when the
    /// time zone is empty or contains whitespace.
    pub fn build(self) -> ValidationResult<TimePicker> {
        let (common, draft) = self.finish()?;
        let initial_time = draft
            .initial_time
            .map(|raw| {
                parse_exact(&raw, TIME_FORMAT, TIME_WIDTH, NaiveTime::parse_from_str)
                    .map(ClockTime)
                    .ok_or_else(|| {
                        rules::reject(
                            "initial_time",
                            Constraint::InvalidFormat {
                                value: raw,
                                expected: "HH:mm",
                            },
                        )
                    })
            })
            .transpose()?;
        let timezone = rules::bounded_opt("timezone", draft.timezone, 1, limits::IDENTIFIER)?;
        if let Some(zone) = &timezone
            && zone.chars().any(char::is_whitespace)
        {
            return Err(rules::reject(
                "timezone",
                Constraint::InvalidFormat {
                    value: zone.clone(),
                    expected: "an IANA time zone name",
                },
            ));
        }
        Ok(TimePicker {
            common,
            initial_time,
            timezone,
        })
    }
}

/// Fields collected for a [`DateTimePicker`].
#[derive(Debug, Clone, Default)]
pub struct DateTimePickerDraft {
    initial_date_time: Option<DateTime<Utc>>,
}

/// A combined date and time picker.
///
/// The initial value is a UTC instant emitted as Unix seconds.
///
/// # Examples
///
/// ```
/// use blockkit::elements::DateTimePicker;
/// use blockkit::render::Render;
/// use chrono::{TimeZone, Utc};
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("valid instant");
/// let picker = DateTimePicker::builder("starts_at")
///     .with_initial_date_time(start)
///     .build()
///     .expect("valid picker");
/// let json = picker.to_value().expect("serialisable");
/// assert_eq!(json["type"], "datetimepicker");
/// assert_eq!(json["initial_date_time"], 1_704_067_200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "datetimepicker")]
pub struct DateTimePicker {
    #[serde(flatten)]
    common: Common,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    initial_date_time: Option<DateTime<Utc>>,
}

impl DateTimePicker {
    /// Starts building a date-time picker.
    #[must_use]
    pub fn builder(action_id: impl Into<String>) -> ElementBuilder<DateTimePickerDraft> {
        ElementBuilder::new(action_id)
    }

    /// Returns the instant selected when the picker first renders.
    #[must_use]
    pub const fn initial_date_time(&self) -> Option<DateTime<Utc>> {
        self.initial_date_time
    }
}

impl Render for DateTimePicker {}

impl ElementBuilder<DateTimePickerDraft> {
    /// Sets the initially selected instant.
    #[must_use]
    pub const fn with_initial_date_time(mut self, instant: DateTime<Utc>) -> Self {
        self.draft.initial_date_time = Some(instant);
        self
    }

    /// Validates the fields and builds the picker.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the action identifier or placeholder
    /// is invalid.
    pub fn build(self) -> ValidationResult<DateTimePicker> {
        let (common, draft) = self.finish()?;
        Ok(DateTimePicker {
            common,
            initial_date_time: draft.initial_date_time,
        })
    }
}

/// A time of day rendered as `HH:mm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockTime(NaiveTime);

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0.format(TIME_FORMAT))
    }
}
