//! Length reconciliation between the camera and actuator sequences.

use crate::util::{AngleMapError, AngleMapResult};

/// Pads a short actuator sequence to the camera sequence length.
///
/// The actuator log often starts a few frames after the camera; the missing
/// frames are filled by repeating the first actuator record at the front, so
/// the stage appears to hold its initial position. Original record order is
/// preserved after the padding.
///
/// An empty actuator sequence and an actuator sequence longer than the camera
/// sequence are both rejected: neither has a defined alignment rule.
pub fn align_actuator(
    actuator: Vec<Vec<f64>>,
    camera_len: usize,
) -> AngleMapResult<Vec<Vec<f64>>> {
    if actuator.is_empty() {
        return Err(AngleMapError::EmptyActuatorSequence);
    }
    if actuator.len() > camera_len {
        return Err(AngleMapError::LengthMismatch {
            camera: camera_len,
            actuator: actuator.len(),
        });
    }
    if actuator.len() == camera_len {
        return Ok(actuator);
    }

    let pad = camera_len - actuator.len();
    let mut aligned = Vec::with_capacity(camera_len);
    aligned.extend(std::iter::repeat_with(|| actuator[0].clone()).take(pad));
    aligned.extend(actuator);
    Ok(aligned)
}

#[cfg(test)]
mod tests {
    use super::align_actuator;
    use crate::util::AngleMapError;

    #[test]
    fn pads_front_with_first_record() {
        let actuator: Vec<Vec<f64>> = (0..7).map(|i| vec![i as f64, 0.0]).collect();
        let aligned = align_actuator(actuator.clone(), 10).unwrap();

        assert_eq!(aligned.len(), 10);
        for record in &aligned[..3] {
            assert_eq!(record, &actuator[0]);
        }
        assert_eq!(&aligned[3..], actuator.as_slice());
    }

    #[test]
    fn equal_lengths_pass_through() {
        let actuator = vec![vec![1.0], vec![2.0]];
        assert_eq!(align_actuator(actuator.clone(), 2).unwrap(), actuator);
    }

    #[test]
    fn empty_actuator_is_rejected() {
        assert_eq!(
            align_actuator(Vec::new(), 5).err().unwrap(),
            AngleMapError::EmptyActuatorSequence
        );
    }

    #[test]
    fn longer_actuator_is_rejected() {
        let actuator = vec![vec![0.0]; 6];
        assert_eq!(
            align_actuator(actuator, 4).err().unwrap(),
            AngleMapError::LengthMismatch {
                camera: 4,
                actuator: 6,
            }
        );
    }
}
