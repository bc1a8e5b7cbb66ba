use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use once_cell::sync::Lazy;
use regex_lite::Regex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::geometry::{Point, Sensor, COORD_LIMIT};

static LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^Sensor at x=(-?[0-9]+), y=(-?[0-9]+): closest beacon is at x=(-?[0-9]+), y=(-?[0-9]+)$"#).unwrap()
});

/// Parses one sensor report. `line` is the 1-based line number used in
/// errors.
pub fn parse_sensor(text: &str, line: usize) -> Result<Sensor> {
    let Some(caps) = LINE_RE.captures(text) else {
        return Err(Error::Format { line, text: text.to_owned() });
    };
    let coords: Vec<i64> = (1..=4)
        .map(|i| caps[i].parse::<i64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|source| Error::Number { line, source })?;
    Sensor::try_new(Point::new(coords[0], coords[1]), Point::new(coords[2], coords[3]))
        .ok_or(Error::OutOfRange { line, limit: COORD_LIMIT })
}

/// Reads sensor reports up to the end of input or the first blank line.
pub fn read_sensors(r: impl BufRead) -> Result<Vec<Sensor>> {
    let mut sensors: Vec<Sensor> = Vec::new();
    for (i, line) in r.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        sensors.push(parse_sensor(line, i + 1)?);
    }
    debug!(count = sensors.len(), "read sensors");
    Ok(sensors)
}

pub fn read_sensors_from_path(path: &Path) -> Result<Vec<Sensor>> {
    let file = File::open(path)?;
    read_sensors(BufReader::new(file))
}
