use cammatch_imgproc::analyzer::ContourAnalysis;

use crate::types::{CameraTransform, SolveInputs, SolverError};

/// Recover the camera placement that produced a fitted bounding box.
///
/// Inverts the pinhole projection. The box's pixel height fixes the angular
/// size of the object and with it the camera distance; the box center's
/// offset from the image center then fixes the lateral displacement inside
/// the view frustum at that distance. The object sits at the origin of a
/// right-handed frame with X forward, Y right and Z up, and the camera looks
/// back at it.
///
/// Both pixel offsets are scaled by the frustum height over the image
/// height, so horizontal displacement is expressed in the vertical angular
/// resolution as well.
///
/// # Errors
///
/// Returns [`SolverError::InvalidInput`] for out-of-range scene parameters,
/// [`SolverError::DegenerateBoundingBox`] when the box has zero height and
/// [`SolverError::InvalidAngle`] when the subtended angle has a non-positive
/// tangent.
pub fn solve(
    inputs: &SolveInputs,
    analysis: &ContourAnalysis,
) -> Result<CameraTransform, SolverError> {
    inputs.validate()?;

    let bbox = &analysis.bounding_box;
    if bbox.height == 0 {
        return Err(SolverError::DegenerateBoundingBox);
    }

    let image_width = analysis.image_size.width as f64;
    let image_height = analysis.image_size.height as f64;

    let fov_v = inputs.vertical_fov_deg.to_radians();
    let angular_height = bbox.height as f64 / image_height * fov_v;
    let half_tangent = (angular_height / 2.0).tan();
    if half_tangent <= 0.0 {
        return Err(SolverError::InvalidAngle {
            tangent: half_tangent,
        });
    }

    let distance = inputs.object_height_cm / 2.0 / half_tangent;
    let frustum_height = 2.0 * distance * (fov_v / 2.0).tan();
    let world_per_pixel = frustum_height / image_height;

    let offset_right = (bbox.center_x as f64 - image_width / 2.0) * world_per_pixel;
    let offset_up = (bbox.center_y as f64 - image_height / 2.0) * world_per_pixel;

    let location = [-distance, -offset_right, -offset_up];
    let forward = normalize([distance, offset_right, offset_up]);

    let yaw = forward[1].atan2(forward[0]).to_degrees();
    let pitch = forward[2].atan2(forward[0].hypot(forward[1])).to_degrees();
    let roll = -bbox.angle_deg;

    Ok(CameraTransform {
        location,
        rotation: [roll, pitch, yaw],
    })
}

fn normalize(v: [f64; 3]) -> [f64; 3] {
    let norm = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if norm == 0.0 {
        return v;
    }
    [v[0] / norm, v[1] / norm, v[2] / norm]
}
