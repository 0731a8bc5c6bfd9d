use thiserror::Error;

use cammatch_imgproc::ContourError;
use cammatch_io::IoError;
use cammatch_solver::SolverError;

use crate::segment::SegmentError;

/// Errors surfaced by the photo matching pipeline, tagged by the stage that
/// produced them.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The segmentation stage failed.
    #[error("segmentation failed: {0}")]
    Segmentation(#[from] SegmentError),

    /// The contour analysis stage failed.
    #[error("contour analysis failed: {0}")]
    Analysis(#[from] ContourError),

    /// Scene parameter validation or the camera solve failed.
    #[error("camera solve failed: {0}")]
    Solve(#[from] SolverError),

    /// Reading the photo or writing the debug overlay failed.
    #[error(transparent)]
    Io(#[from] IoError),
}
