//! Per-frame angle mapping: branch selection and arithmetic.

mod branch;

use crate::direction::DirectionMode;
use branch::{ANTICLOCKWISE, ANTICLOCKWISE_OFFSET, CLOCKWISE, CLOCKWISE_OFFSET};

/// Rotation direction effective for a single frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FrameDirection {
    Clockwise,
    AntiClockwise,
}

/// Maps one wrapped camera angle onto the continuous 0-360 scale.
///
/// Stateless: each frame is mapped from its own camera angle and actuator
/// disambiguator alone. With a fixed mode that direction applies to every
/// frame; in mixed mode the frame is clockwise iff its disambiguator is
/// non-negative (a stationary stage reads as clockwise). `offset` selects the
/// offset-mounting branch tables.
///
/// The result is deliberately not normalized back into [0, 360): a camera
/// angle of 10 on the +360 branch maps to 370.
pub fn map_angle(camera_angle: f64, disambiguator: f64, offset: bool, mode: DirectionMode) -> f64 {
    let direction = match mode {
        DirectionMode::Clockwise => FrameDirection::Clockwise,
        DirectionMode::AntiClockwise => FrameDirection::AntiClockwise,
        DirectionMode::Mixed => {
            if disambiguator >= 0.0 {
                FrameDirection::Clockwise
            } else {
                FrameDirection::AntiClockwise
            }
        }
    };

    let table = match (direction, offset) {
        (FrameDirection::Clockwise, false) => &CLOCKWISE,
        (FrameDirection::AntiClockwise, false) => &ANTICLOCKWISE,
        (FrameDirection::Clockwise, true) => &CLOCKWISE_OFFSET,
        (FrameDirection::AntiClockwise, true) => &ANTICLOCKWISE_OFFSET,
    };
    table.map(camera_angle, disambiguator)
}
