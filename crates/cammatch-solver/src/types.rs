//! Common data types shared by the camera solver.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for the camera solver.
#[derive(Debug, Error, PartialEq)]
pub enum SolverError {
    /// A scene parameter is outside its valid range.
    #[error("invalid value {value} for {parameter}")]
    InvalidInput {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The bounding box has no vertical extent, so no distance can be
    /// inferred from it.
    #[error("bounding box height must be positive to infer a distance")]
    DegenerateBoundingBox,

    /// The angular size subtended by the box produced a non-positive
    /// tangent.
    #[error("angular height yields a non-positive tangent ({tangent})")]
    InvalidAngle {
        /// The rejected tangent of the half angle.
        tangent: f64,
    },
}

/// Scene parameters required to invert the projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolveInputs {
    /// Real-world height of the photographed object, in centimeters.
    pub object_height_cm: f64,
    /// Vertical field of view of the camera, in degrees.
    pub vertical_fov_deg: f64,
}

impl SolveInputs {
    /// Check that both scene parameters are inside their valid ranges.
    ///
    /// The object height must be a positive finite number and the field of
    /// view must lie strictly between 0 and 180 degrees.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !self.object_height_cm.is_finite() || self.object_height_cm <= 0.0 {
            return Err(SolverError::InvalidInput {
                parameter: "height",
                value: self.object_height_cm,
            });
        }
        if !self.vertical_fov_deg.is_finite()
            || self.vertical_fov_deg <= 0.0
            || self.vertical_fov_deg >= 180.0
        {
            return Err(SolverError::InvalidInput {
                parameter: "fov",
                value: self.vertical_fov_deg,
            });
        }
        Ok(())
    }
}

/// Camera placement recovered by the solver.
///
/// Expressed in a right-handed frame centered on the photographed object,
/// with X pointing forward, Y right and Z up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraTransform {
    /// Camera position as `[x, y, z]`, in centimeters.
    pub location: [f64; 3],
    /// Camera orientation as `[roll, pitch, yaw]` about the X, Y and Z
    /// axes, in degrees.
    pub rotation: [f64; 3],
}
