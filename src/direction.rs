//! Run direction: the mode selector and the actuator-sequence classifier.

use crate::util::{AngleMapError, AngleMapResult};

/// Overall rotation direction of a run.
///
/// The discriminants match the mode selectors used by the recording tooling
/// (1 = anticlockwise, 2 = clockwise, 3 = mixed; 4 is reserved and rejected).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectionMode {
    /// The stage only rotated anticlockwise (selector 1).
    AntiClockwise = 1,
    /// The stage only rotated clockwise (selector 2).
    Clockwise = 2,
    /// The stage changed direction; each frame is resolved from the sign of
    /// its disambiguator (selector 3).
    Mixed = 3,
}

impl DirectionMode {
    /// Parses a mode selector, rejecting anything outside {1, 2, 3}.
    pub fn from_selector(value: i64) -> AngleMapResult<Self> {
        match value {
            1 => Ok(DirectionMode::AntiClockwise),
            2 => Ok(DirectionMode::Clockwise),
            3 => Ok(DirectionMode::Mixed),
            other => Err(AngleMapError::ReservedMode { value: other }),
        }
    }

    /// Returns the integer selector for this mode.
    pub fn selector(self) -> i64 {
        self as i64
    }
}

impl TryFrom<i64> for DirectionMode {
    type Error = AngleMapError;

    fn try_from(value: i64) -> AngleMapResult<Self> {
        DirectionMode::from_selector(value)
    }
}

/// Classifies the overall motion by scanning consecutive disambiguator pairs.
///
/// A value greater than its successor counts as anticlockwise evidence,
/// anything else (including equal neighbours, a stationary stage) counts as
/// clockwise evidence. Both kinds present classify the run as mixed. The
/// label is convention-internal: it only matters relative to the branch table
/// selected afterwards, so the comparison must stay exactly as written.
///
/// A sequence with fewer than two records yields no evidence and classifies
/// as anticlockwise.
pub fn classify_direction(disambiguators: &[f64]) -> DirectionMode {
    let mut clockwise = false;
    let mut anticlockwise = false;
    for pair in disambiguators.windows(2) {
        if pair[0] > pair[1] {
            anticlockwise = true;
        } else {
            clockwise = true;
        }
    }

    match (clockwise, anticlockwise) {
        (true, true) => DirectionMode::Mixed,
        (true, false) => DirectionMode::Clockwise,
        _ => DirectionMode::AntiClockwise,
    }
}
