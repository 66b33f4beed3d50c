//! End-to-end remapping of one camera/actuator file pair.

use std::path::{Path, PathBuf};

use crate::align::align_actuator;
use crate::direction::{classify_direction, DirectionMode};
use crate::mapper::map_angle;
use crate::table::{read_table, write_table, COMMA, TAB};
use crate::trace::{trace_event, trace_span};
use crate::util::{AngleMapError, AngleMapResult};

/// Column of the camera pose record holding the wrapped y-axis rotation.
const CAMERA_ANGLE_COLUMN: usize = 1;
/// Column of the actuator record holding the commanded z rotation.
const ACTUATOR_ANGLE_COLUMN: usize = 0;
/// Extension of the remapped output file.
const OUTPUT_EXTENSION: &str = "csv";

/// Remaps every camera angle in `camera_path` onto the 0-360 scale and
/// writes the result next to the input.
///
/// The camera file is parsed tab-delimited with a comma fallback; the
/// actuator file is always comma-delimited. A trailing empty camera record is
/// discarded, a short actuator sequence is front-padded to the camera length,
/// and each frame's angle (column 1) is remapped using the paired actuator
/// command (column 0) as the disambiguator. All non-angle columns pass
/// through unchanged. The mutated records are written comma-delimited to the
/// camera path with its extension replaced by `.csv`.
///
/// `mode` fixes the run direction when supplied; otherwise the direction is
/// classified from the actuator sequence. Returns the mode actually used.
pub fn map_angles(
    camera_path: &Path,
    actuator_path: &Path,
    offset: bool,
    mode: Option<DirectionMode>,
) -> AngleMapResult<DirectionMode> {
    let _span = trace_span!("map_angles", offset = offset).entered();

    let mut camera = read_camera(camera_path)?;
    let actuator = read_table(actuator_path, COMMA)?;

    // Some recordings end with a degenerate empty record when the grabber
    // closes the file mid-frame.
    if camera.last().is_some_and(|record| record.is_empty()) {
        camera.pop();
    }
    if camera.is_empty() {
        return Err(AngleMapError::EmptyCameraSequence);
    }

    let actuator = align_actuator(actuator, camera.len())?;
    let disambiguators = extract_column(&actuator, ACTUATOR_ANGLE_COLUMN, actuator_path)?;

    let mode_used = match mode {
        Some(mode) => mode,
        None => classify_direction(&disambiguators),
    };
    trace_event!(
        "run",
        frames = camera.len(),
        mode = mode_used.selector(),
        offset = offset
    );

    for (row, record) in camera.iter_mut().enumerate() {
        let angle = record.get(CAMERA_ANGLE_COLUMN).copied().ok_or_else(|| {
            AngleMapError::MissingColumn {
                path: camera_path.to_path_buf(),
                row,
                column: CAMERA_ANGLE_COLUMN,
            }
        })?;
        record[CAMERA_ANGLE_COLUMN] = map_angle(angle, disambiguators[row], offset, mode_used);
    }

    write_table(&camera, &output_path(camera_path))?;
    Ok(mode_used)
}

/// Derives the output path: the camera path with its extension replaced.
pub fn output_path(camera_path: &Path) -> PathBuf {
    camera_path.with_extension(OUTPUT_EXTENSION)
}

/// Camera files are tab-delimited; older recordings are comma-delimited, so a
/// failed tab parse falls back to comma before giving up.
fn read_camera(path: &Path) -> AngleMapResult<Vec<Vec<f64>>> {
    match read_table(path, TAB) {
        Ok(records) => Ok(records),
        Err(AngleMapError::MalformedRow { .. }) => read_table(path, COMMA),
        Err(err) => Err(err),
    }
}

fn extract_column(
    records: &[Vec<f64>],
    column: usize,
    path: &Path,
) -> AngleMapResult<Vec<f64>> {
    records
        .iter()
        .enumerate()
        .map(|(row, record)| {
            record
                .get(column)
                .copied()
                .ok_or_else(|| AngleMapError::MissingColumn {
                    path: path.to_path_buf(),
                    row,
                    column,
                })
        })
        .collect()
}
