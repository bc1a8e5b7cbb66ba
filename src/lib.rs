//! Beacon exclusion zone: sensors report their nearest beacon, so every
//! position closer than that beacon is known to be empty. This crate counts
//! those positions along a row and finds the single position in a bounded
//! square that no sensor can see.

pub mod coverage;
pub mod error;
pub mod geometry;
pub mod parse;
pub mod scan;

pub use coverage::{merge_and_find_gap, Interval, MergeOutcome};
pub use error::{Error, Result};
pub use geometry::{Bounds, Point, Sensor};
pub use parse::{parse_sensor, read_sensors, read_sensors_from_path};
pub use scan::{scan_row, tuning_frequency, RowResult, ScanStrategy, Survey};
