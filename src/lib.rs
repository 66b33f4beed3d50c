//! Anglemap reconstructs continuous 0-360 degree orientations from
//! motion-tracking recordings.
//!
//! A tracking rig produces two synchronized delimited files per run: camera
//! pose estimates whose orientation angle wraps at +-90 degrees, and actuator
//! commands driving a continuously rotating stage. Reading the camera angle
//! naively jumps at every wrap boundary; this crate uses the actuator's
//! commanded angle to pick the rotation branch each frame and rewrites the
//! camera file with unwrapped angles.

pub mod align;
pub mod direction;
pub mod mapper;
pub mod pipeline;
pub mod table;
pub(crate) mod trace;
pub mod util;

pub use align::align_actuator;
pub use direction::{classify_direction, DirectionMode};
pub use mapper::map_angle;
pub use pipeline::{map_angles, output_path};
pub use table::{read_table, write_table, COMMA, TAB};
pub use util::{AngleMapError, AngleMapResult};
