//! Branch tables for unwrapping camera angles onto the 0-360 scale.
//!
//! Each (direction, mounting) combination owns an ordered table of interval
//! rules over the actuator disambiguator plus a fallback transform. The bound
//! values are calibration data from the rig and are kept as literals here.
//! The clockwise and anticlockwise tables are not mirror images of each other
//! (the camera mounting is not symmetric); do not symmetrize them.

/// Transform applied to a wrapped camera angle once its branch is known.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Transform {
    /// The camera angle is already on the target branch.
    Keep,
    /// Reflect about +180: x -> -(x - 180).
    ReflectHigh,
    /// Reflect about -180: x -> -(x + 180).
    ReflectLow,
    /// Shift by a constant number of degrees.
    Shift(f64),
}

impl Transform {
    pub(crate) fn apply(self, angle: f64) -> f64 {
        match self {
            Transform::Keep => angle,
            Transform::ReflectHigh => -(angle - 180.0),
            Transform::ReflectLow => -(angle + 180.0),
            Transform::Shift(delta) => angle + delta,
        }
    }
}

/// Interval over the disambiguator with per-bound inclusivity.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Interval {
    lo: f64,
    lo_closed: bool,
    hi: f64,
    hi_closed: bool,
}

impl Interval {
    const fn new(lo: f64, lo_closed: bool, hi: f64, hi_closed: bool) -> Self {
        Self {
            lo,
            lo_closed,
            hi,
            hi_closed,
        }
    }

    fn contains(&self, value: f64) -> bool {
        let above = if self.lo_closed {
            value >= self.lo
        } else {
            value > self.lo
        };
        let below = if self.hi_closed {
            value <= self.hi
        } else {
            value < self.hi
        };
        above && below
    }
}

/// Ordered rules plus a fallback for one (direction, mounting) combination.
pub(crate) struct BranchTable {
    rules: [(Interval, Transform); 2],
    fallback: Transform,
}

impl BranchTable {
    /// Applies the first rule whose interval contains the disambiguator, or
    /// the fallback if none does.
    pub(crate) fn map(&self, camera_angle: f64, disambiguator: f64) -> f64 {
        for (interval, transform) in &self.rules {
            if interval.contains(disambiguator) {
                return transform.apply(camera_angle);
            }
        }
        self.fallback.apply(camera_angle)
    }
}

/// Clockwise, straight-on mounting.
pub(crate) const CLOCKWISE: BranchTable = BranchTable {
    rules: [
        (Interval::new(0.0, true, 90.0, true), Transform::Keep),
        (Interval::new(90.0, false, 270.0, true), Transform::ReflectHigh),
    ],
    fallback: Transform::Shift(360.0),
};

/// Anticlockwise, straight-on mounting. The keep interval reaches -91, not
/// -90; calibration data, not a typo.
pub(crate) const ANTICLOCKWISE: BranchTable = BranchTable {
    rules: [
        (Interval::new(-91.0, true, 0.0, true), Transform::Keep),
        (Interval::new(-270.0, true, -91.0, false), Transform::ReflectLow),
    ],
    fallback: Transform::Shift(-360.0),
};

/// Clockwise, offset mounting.
pub(crate) const CLOCKWISE_OFFSET: BranchTable = BranchTable {
    rules: [
        (Interval::new(0.0, true, 136.0, false), Transform::Keep),
        (Interval::new(136.0, true, 315.0, true), Transform::Shift(-270.0)),
    ],
    fallback: Transform::Shift(360.0),
};

/// Anticlockwise, offset mounting.
pub(crate) const ANTICLOCKWISE_OFFSET: BranchTable = BranchTable {
    rules: [
        (Interval::new(-46.0, false, 0.0, true), Transform::Keep),
        (Interval::new(-225.0, true, -46.0, false), Transform::Shift(90.0)),
    ],
    fallback: Transform::Shift(-360.0),
};
