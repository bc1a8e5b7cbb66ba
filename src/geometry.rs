use crate::coverage::Interval;

#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, Debug)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }

    pub fn manhattan(&self, o: &Self) -> u64 {
        self.x.abs_diff(o.x).saturating_add(self.y.abs_diff(o.y))
    }
}

/// Largest coordinate magnitude a sensor's area may reach. Keeps widths,
/// row counts and their sums inside `i64`.
pub const COORD_LIMIT: i64 = i64::MAX / 4;

/// Axis-aligned box. A fresh `Bounds` is inverted (left > right) until the
/// first update.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Bounds {
    pub left: i64,
    pub right: i64,
    pub top: i64,
    pub bottom: i64,
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds {
            left: i64::MAX,
            right: i64::MIN,
            top: i64::MAX,
            bottom: i64::MIN,
        }
    }
}

impl Bounds {
    pub fn is_empty(&self) -> bool {
        self.left > self.right || self.top > self.bottom
    }

    pub fn include(&mut self, p: Point) {
        self.left = self.left.min(p.x);
        self.right = self.right.max(p.x);
        self.top = self.top.min(p.y);
        self.bottom = self.bottom.max(p.y);
    }

    pub fn merge(&mut self, o: &Bounds) {
        if o.is_empty() {
            return;
        }
        self.include(Point::new(o.left, o.top));
        self.include(Point::new(o.right, o.bottom));
    }

    pub fn width(&self) -> i64 {
        self.right - self.left
    }

    pub fn height(&self) -> i64 {
        self.bottom - self.top
    }

    /// Number of cells inside the box, edges included.
    pub fn area(&self) -> u128 {
        if self.is_empty() {
            return 0;
        }
        (self.width() as u128 + 1) * (self.height() as u128 + 1)
    }
}

/// A sensor and the beacon closest to it. Every position no farther than
/// the beacon, in Manhattan distance, holds no other beacon.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Sensor {
    position: Point,
    nearest_beacon: Point,
    range: i64,
    bounds: Bounds,
}

impl Sensor {
    /// Never fails; range and box saturate at the `i64` limits. Use
    /// `try_new` to reject sensors whose area leaves `±COORD_LIMIT`.
    pub fn new(position: Point, nearest_beacon: Point) -> Self {
        let range = i64::try_from(position.manhattan(&nearest_beacon)).unwrap_or(i64::MAX);
        let bounds = Bounds {
            left: position.x.saturating_sub(range),
            right: position.x.saturating_add(range),
            top: position.y.saturating_sub(range),
            bottom: position.y.saturating_add(range),
        };
        Sensor { position, nearest_beacon, range, bounds }
    }

    pub fn try_new(position: Point, nearest_beacon: Point) -> Option<Self> {
        let sensor = Self::new(position, nearest_beacon);
        let b = sensor.bounds;
        let inside = |v: i64| (-COORD_LIMIT..=COORD_LIMIT).contains(&v);
        (inside(b.left) && inside(b.right) && inside(b.top) && inside(b.bottom)).then_some(sensor)
    }

    pub fn from_coords(sensor_x: i64, sensor_y: i64, beacon_x: i64, beacon_y: i64) -> Self {
        Self::new(Point::new(sensor_x, sensor_y), Point::new(beacon_x, beacon_y))
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn nearest_beacon(&self) -> Point {
        self.nearest_beacon
    }

    pub fn range(&self) -> i64 {
        self.range
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// The x-coordinates this sensor covers on row `y`, clamped to
    /// `[clamp_min, clamp_max]`. Rows out of reach give `Interval::EMPTY`; a
    /// clamp that excludes the whole span also gives an empty interval.
    pub fn coverage_on_row(&self, y: i64, clamp_min: i64, clamp_max: i64) -> Interval {
        let row_distance = y.abs_diff(self.position.y);
        if row_distance > self.range as u64 {
            return Interval::EMPTY;
        }
        let remaining = self.range - row_distance as i64;
        Interval::new(
            clamp_min.max(self.position.x.saturating_sub(remaining)),
            clamp_max.min(self.position.x.saturating_add(remaining)),
        )
    }
}
