use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::OnceLock;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{debug, info};

use crate::coverage::{merge_and_find_gap, Interval};
use crate::error::Result;
use crate::geometry::{Bounds, Point, Sensor};

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct RowResult {
    /// Positions covered by at least one sensor, beacons included.
    pub covered: i64,
    pub beacons_on_row: i64,
    pub gap: Option<i64>,
}

impl RowResult {
    /// Covered positions that are known not to hold a beacon.
    pub fn usable_covered(&self) -> i64 {
        self.covered - self.beacons_on_row
    }
}

/// Scans row `y` within `[scan_min, scan_max]`.
pub fn scan_row(
    sensors: &[Sensor],
    beacons: &HashSet<Point>,
    y: i64,
    scan_min: i64,
    scan_max: i64,
) -> RowResult {
    let outcome = merge_and_find_gap(
        sensors.iter()
            .map(|s| s.coverage_on_row(y, scan_min, scan_max))
            .filter(|i| !i.is_empty())
    );
    let span = Interval::new(scan_min, scan_max);
    let beacons_on_row = beacons.iter()
        .filter(|b| b.y == y && span.contains(b.x))
        .count() as i64;
    RowResult {
        covered: outcome.covered(),
        beacons_on_row,
        gap: outcome.gap,
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ScanStrategy {
    Sequential,
    /// Rows are spread over a rayon pool: the global one when `threads` is
    /// `None`, otherwise a dedicated pool of that size.
    Parallel { threads: Option<usize> },
}

impl Default for ScanStrategy {
    fn default() -> Self {
        ScanStrategy::Parallel { threads: None }
    }
}

/// Sensor readings and the distinct beacons they report. Read-only once
/// built, so rows can be scanned from any number of threads.
#[derive(Clone, Debug, Default)]
pub struct Survey {
    sensors: Vec<Sensor>,
    beacons: HashSet<Point>,
}

impl Survey {
    pub fn new(sensors: Vec<Sensor>) -> Self {
        let beacons = sensors.iter().map(Sensor::nearest_beacon).collect();
        Survey { sensors, beacons }
    }

    pub fn sensors(&self) -> &[Sensor] {
        &self.sensors
    }

    pub fn beacons(&self) -> &HashSet<Point> {
        &self.beacons
    }

    /// Box enclosing every sensor's area of influence.
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::default();
        for s in &self.sensors {
            bounds.merge(s.bounds());
        }
        bounds
    }

    pub fn scan_row(&self, y: i64, scan_min: i64, scan_max: i64) -> RowResult {
        scan_row(&self.sensors, &self.beacons, y, scan_min, scan_max)
    }

    /// Positions on row `y` where a beacon cannot be, without any bound on x.
    pub fn positions_without_beacon(&self, y: i64) -> i64 {
        self.scan_row(y, i64::MIN, i64::MAX).usable_covered()
    }

    /// Searches the square `[scan_min, scan_max]²` for the one position no
    /// sensor covers.
    ///
    /// Only holes exactly one cell wide with coverage on both sides are
    /// found, and the first row holding one ends the search. Both rest on
    /// the puzzle's promise that exactly one such cell exists; in parallel
    /// mode any row holding a hole may win if that promise is broken.
    pub fn find_gap(&self, scan_min: i64, scan_max: i64, strategy: ScanStrategy) -> Result<Option<Point>> {
        info!(scan_min, scan_max, ?strategy, sensors = self.sensors.len(), "scanning rows");
        let (found, rows_scanned) = match strategy {
            ScanStrategy::Sequential => self.find_gap_sequential(scan_min, scan_max),
            ScanStrategy::Parallel { threads: None } => self.find_gap_parallel(scan_min, scan_max),
            ScanStrategy::Parallel { threads: Some(n) } => {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()?;
                pool.install(|| self.find_gap_parallel(scan_min, scan_max))
            }
        };
        info!(?found, rows_scanned, "scan finished");
        Ok(found)
    }

    /// Returns the gap, if any, and how many rows were scanned.
    fn find_gap_sequential(&self, scan_min: i64, scan_max: i64) -> (Option<Point>, u64) {
        let mut rows_scanned = 0;
        let found = (scan_min..=scan_max).find_map(|y| {
            rows_scanned += 1;
            self.scan_row(y, scan_min, scan_max).gap.map(|x| Point::new(x, y))
        });
        (found, rows_scanned)
    }

    fn find_gap_parallel(&self, scan_min: i64, scan_max: i64) -> (Option<Point>, u64) {
        let cancelled = AtomicBool::new(false);
        let rows_scanned = AtomicU64::new(0);
        let found = OnceLock::new();
        // Err only ever means "stop"; the answer travels through `found`.
        let _ = (scan_min..=scan_max).into_par_iter().try_for_each(|y| {
            if cancelled.load(Ordering::Relaxed) {
                return Err(());
            }
            rows_scanned.fetch_add(1, Ordering::Relaxed);
            let Some(x) = self.scan_row(y, scan_min, scan_max).gap else {
                return Ok(());
            };
            if found.set(Point::new(x, y)).is_ok() {
                debug!(x, y, "found gap");
            }
            cancelled.store(true, Ordering::Relaxed);
            Err(())
        });
        (found.into_inner(), rows_scanned.into_inner())
    }
}

/// Packs a position into one number, `x * multiplier + y`, or `None` on
/// overflow.
pub fn tuning_frequency(p: Point, multiplier: i64) -> Option<i64> {
    p.x.checked_mul(multiplier)?.checked_add(p.y)
}
