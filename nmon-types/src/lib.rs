//! # nmon-types
//!
//! Output types for nmon2series. A converted nmon report is a flat list of
//! [`Series`], each one a dotted name plus an ordered list of
//! `(timestamp, value)` [`Point`]s, the shape most time-series stores accept
//! for bulk ingestion.
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `serde`: JSON serialization via serde. A series serializes as
//!   `{"name": .., "columns": ["time", "value"], "points": [[ts, value], ..]}`
//!
//! ## Example
//!
//! ```rust
//! use nmon_types::{Series, Value};
//!
//! let series = Series::builder("server1.CPU_ALL.UserPercent")
//!     .number(1577887200000, 10.5)
//!     .number(1577887260000, 12.0)
//!     .build();
//!
//! assert_eq!(series.len(), 2);
//! assert_eq!(series.points[0].value, Value::Number(10.5));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod series;

pub use series::*;

/// Column names carried by every series, in point order.
pub const COLUMNS: [&str; 2] = ["time", "value"];
