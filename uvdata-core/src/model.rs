use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    city::resolve_coordinates,
    date::{date_from_ymd, parse_date},
    error::UvError,
};

/// One minute of UV readings.
///
/// `forecast` and `measured` are `None` when the upstream has no value,
/// e.g. for times still in the future or dates before records began.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UvSample {
    /// Local Australian time, `YYYY-MM-DD HH:mm`.
    pub timestamp: String,
    pub forecast: Option<f64>,
    pub measured: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GraphEntry {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Forecast")]
    pub forecast: Option<f64>,
    #[serde(rename = "Measured")]
    pub measured: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UvLevelResponse {
    #[serde(rename = "GraphData")]
    pub graph_data: Vec<GraphEntry>,
}

/// Rename upstream fields. Values and order are left untouched.
pub(crate) fn transform(graph_data: Vec<GraphEntry>) -> Vec<UvSample> {
    graph_data
        .into_iter()
        .map(|entry| UvSample {
            timestamp: entry.date,
            forecast: entry.forecast,
            measured: entry.measured,
        })
        .collect()
}

/// A date as supplied by a caller, validated only when a request is made.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    Date(NaiveDate),
    /// Year, 1-based month, day.
    Ymd(i32, u32, u32),
    /// Strict `YYYY-MM-DD`.
    Text(String),
}

impl DateInput {
    pub fn resolve(&self) -> Result<NaiveDate, UvError> {
        match self {
            DateInput::Date(date) => Ok(*date),
            DateInput::Ymd(year, month, day) => date_from_ymd(*year, *month, *day),
            DateInput::Text(text) => parse_date(text),
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

/// Takes the calendar date in the value's own time zone.
impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(value: DateTime<Tz>) -> Self {
        DateInput::Date(value.date_naive())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UvRequest {
    pub location: String,
    pub date: DateInput,
}

impl UvRequest {
    pub fn new(location: impl Into<String>, date: impl Into<DateInput>) -> Self {
        Self { location: location.into(), date: date.into() }
    }
}

/// Build a request from loosely typed JSON such as
/// `{"location": "Sydney", "date": "2024-12-01"}` or
/// `{"location": "Sydney", "date": {"year": 2024, "month": 12, "day": 1}}`.
impl TryFrom<Value> for UvRequest {
    type Error = UvError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let location = match value.get("location") {
            Some(Value::String(s)) => s.clone(),
            _ => return Err(UvError::InvalidLocation),
        };
        resolve_coordinates(&location)?;

        let date = match value.get("date") {
            Some(Value::String(s)) => DateInput::Text(s.clone()),
            Some(Value::Object(fields)) => {
                let component = |key: &str| fields.get(key).and_then(Value::as_i64);
                match (component("year"), component("month"), component("day")) {
                    (Some(y), Some(m), Some(d)) => {
                        let year = i32::try_from(y).ok();
                        let month = u32::try_from(m).ok();
                        let day = u32::try_from(d).ok();
                        match (year, month, day) {
                            (Some(y), Some(m), Some(d)) => DateInput::Ymd(y, m, d),
                            _ => return Err(invalid_date(&value)),
                        }
                    }
                    _ => return Err(invalid_date(&value)),
                }
            }
            _ => return Err(invalid_date(&value)),
        };

        Ok(Self { location, date })
    }
}

fn invalid_date(request: &Value) -> UvError {
    let input = request.get("date").map(Value::to_string).unwrap_or_default();
    UvError::InvalidDate { input }
}
