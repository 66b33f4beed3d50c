//! Error types for anglemap.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for anglemap operations.
pub type AngleMapResult<T> = std::result::Result<T, AngleMapError>;

/// Errors that can occur while remapping a recording.
///
/// Every variant is fatal for the run; there is no internal recovery. Variants
/// carry the file path and row index where applicable so a failure can be
/// diagnosed without re-running the pipeline.
#[derive(Debug, Error, PartialEq)]
pub enum AngleMapError {
    /// A source path does not resolve to a readable file.
    #[error("input not found: {path:?}")]
    InputNotFound {
        /// Path that failed to open.
        path: PathBuf,
    },
    /// A row in an input file could not be parsed as all-numeric fields.
    #[error("malformed row {row} in {path:?}: {reason}")]
    MalformedRow {
        /// File containing the bad row.
        path: PathBuf,
        /// Zero-based row index.
        row: usize,
        /// Parser detail for the offending field.
        reason: String,
    },
    /// A record is too short to contain a required column.
    #[error("row {row} in {path:?} has no column {column}")]
    MissingColumn {
        /// File containing the short record.
        path: PathBuf,
        /// Zero-based row index.
        row: usize,
        /// Column index that was requested.
        column: usize,
    },
    /// The actuator sequence is longer than the camera sequence.
    ///
    /// The only defined alignment rule pads a shorter actuator sequence; the
    /// reverse direction has no rule and is rejected instead of silently
    /// dropping actuator rows.
    #[error("actuator sequence ({actuator}) longer than camera sequence ({camera})")]
    LengthMismatch {
        /// Camera record count after trailing-record cleanup.
        camera: usize,
        /// Actuator record count.
        actuator: usize,
    },
    /// The actuator file produced zero records.
    #[error("actuator sequence is empty")]
    EmptyActuatorSequence,
    /// The camera file produced zero records.
    #[error("camera sequence is empty")]
    EmptyCameraSequence,
    /// A direction mode selector outside {1, 2, 3}.
    ///
    /// Selector 4 exists in the recording tooling but is reserved; it is
    /// rejected here rather than silently treated as mixed.
    #[error("reserved or unknown direction mode selector: {value}")]
    ReservedMode {
        /// The rejected selector value.
        value: i64,
    },
    /// The output file could not be written.
    #[error("failed to write {path:?}: {reason}")]
    WriteFailed {
        /// Destination path.
        path: PathBuf,
        /// I/O detail.
        reason: String,
    },
}
