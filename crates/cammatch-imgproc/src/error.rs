use cammatch_image::ImageError;
use thiserror::Error;

/// Errors that can occur while fitting a contour box to an image.
#[derive(Debug, Error)]
pub enum ContourError {
    /// No pixel exceeded the alpha threshold, so there is no region to fit.
    #[error("no foreground pixels remain after thresholding")]
    NoForegroundFound,

    /// Error creating or traversing an image container.
    #[error(transparent)]
    Image(#[from] ImageError),
}
