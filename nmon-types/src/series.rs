//! Series - a named sequence of timestamped points.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::COLUMNS;

/// A named, time-ordered sequence of points.
///
/// Names are dotted paths such as `server1.CPU_ALL.UserPercent`. Points keep
/// the order in which they were produced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Series {
    /// Dotted series name.
    pub name: String,

    /// Column names, always `["time", "value"]`.
    pub columns: Vec<String>,

    /// Points in production order.
    pub points: Vec<Point>,
}

impl Series {
    /// Create an empty series with the standard columns.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
            points: Vec::new(),
        }
    }

    /// Create a builder for a series.
    pub fn builder(name: impl Into<String>) -> SeriesBuilder {
        SeriesBuilder::new(name)
    }

    /// Append a point.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Check if the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Iterate over the points.
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Iterate over the dot-separated segments of the name.
    pub fn name_segments(&self) -> impl Iterator<Item = &str> {
        self.name.split('.')
    }

    /// Earliest timestamp among the points, if any.
    pub fn first_timestamp(&self) -> Option<i64> {
        self.points.iter().map(|p| p.timestamp_ms).min()
    }
}

/// A single sample: milliseconds since the Unix epoch plus a value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "(i64, Value)", into = "(i64, Value)")
)]
pub struct Point {
    /// Unix timestamp in milliseconds.
    pub timestamp_ms: i64,

    /// Sampled value.
    pub value: Value,
}

impl Point {
    /// Create a point.
    pub fn new(timestamp_ms: i64, value: impl Into<Value>) -> Self {
        Self {
            timestamp_ms,
            value: value.into(),
        }
    }
}

impl From<(i64, Value)> for Point {
    fn from((timestamp_ms, value): (i64, Value)) -> Self {
        Self {
            timestamp_ms,
            value,
        }
    }
}

impl From<Point> for (i64, Value) {
    fn from(point: Point) -> Self {
        (point.timestamp_ms, point.value)
    }
}

/// A point value. Metric tables produce numbers, message sections text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    /// The numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    /// The text value, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Number(_) => None,
            Value::Text(s) => Some(s),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for `Series`.
#[derive(Debug)]
pub struct SeriesBuilder {
    series: Series,
}

impl SeriesBuilder {
    /// Create a new builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            series: Series::new(name),
        }
    }

    /// Add a numeric point.
    pub fn number(mut self, timestamp_ms: i64, value: f64) -> Self {
        self.series.push(Point::new(timestamp_ms, value));
        self
    }

    /// Add a text point.
    pub fn text(mut self, timestamp_ms: i64, value: impl Into<String>) -> Self {
        self.series
            .push(Point::new(timestamp_ms, Value::Text(value.into())));
        self
    }

    /// Build the series.
    pub fn build(self) -> Series {
        self.series
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_series_has_standard_columns() {
        let s = Series::new("host.CPU_ALL.User");
        assert_eq!(s.columns, ["time", "value"]);
        assert!(s.is_empty());
    }

    #[test]
    fn builder_keeps_point_order() {
        let s = Series::builder("x")
            .number(2000, 1.0)
            .number(1000, 2.0)
            .build();

        assert_eq!(s.len(), 2);
        assert_eq!(s.points[0], Point::new(2000, 1.0));
        assert_eq!(s.points[1], Point::new(1000, 2.0));
        assert_eq!(s.first_timestamp(), Some(1000));
    }

    #[test]
    fn name_segments_split_on_dots() {
        let s = Series::new("prefix.host.MESSAGES.AAA");
        let segments: Vec<&str> = s.name_segments().collect();
        assert_eq!(segments, ["prefix", "host", "MESSAGES", "AAA"]);
    }

    #[test]
    fn value_accessors() {
        assert_eq!(Value::from(2.5).as_number(), Some(2.5));
        assert_eq!(Value::from("hi").as_text(), Some("hi"));
        assert!(Value::from("hi").as_number().is_none());
        assert_eq!(Value::from(10.5).to_string(), "10.5");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_shape() {
        let s = Series::builder("h.MESSAGES.AAA")
            .text(1000, "host: h\n")
            .build();
        let n = Series::builder("h.CPU_ALL.User").number(1000, 10.5).build();

        let json = serde_json::to_value(&[&s, &n]).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"name": "h.MESSAGES.AAA", "columns": ["time", "value"], "points": [[1000, "host: h\n"]]},
                {"name": "h.CPU_ALL.User", "columns": ["time", "value"], "points": [[1000, 10.5]]},
            ])
        );

        let parsed: Vec<Series> = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, vec![s, n]);
    }
}
