use cammatch_image::{Image, ImageError, ImageSize};
use thiserror::Error;

/// Errors produced while separating the photographed object from its
/// background.
#[derive(Debug, Error)]
pub enum SegmentError {
    /// The decoded photo carries no alpha plane to read a matte from.
    #[error("image carries no alpha channel (color type {color:?})")]
    NoAlphaChannel {
        /// Color layout of the offending image.
        color: image::ColorType,
    },

    /// The segmentation backend reported a failure.
    #[error("matting backend error: {0}")]
    Model(String),

    /// Error creating the segmented image container.
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// Strategy separating the photographed object from its background.
///
/// Implementations return an RGBA matte whose alpha plane encodes the
/// foreground: opaque pixels belong to the object.
pub trait Segmenter {
    /// Produce the RGBA matte for a decoded photograph.
    fn segment(&self, photo: &image::DynamicImage) -> Result<Image<u8, 4>, SegmentError>;
}

/// Segmenter that trusts the photograph's own alpha matte.
///
/// Photos without an alpha channel are rejected, since they carry no
/// foreground mask to read.
#[derive(Debug, Clone, Default)]
pub struct AlphaMatteSegmenter;

impl Segmenter for AlphaMatteSegmenter {
    fn segment(&self, photo: &image::DynamicImage) -> Result<Image<u8, 4>, SegmentError> {
        if !photo.color().has_alpha() {
            return Err(SegmentError::NoAlphaChannel {
                color: photo.color(),
            });
        }
        let rgba = photo.to_rgba8();
        let size = ImageSize {
            width: rgba.width() as usize,
            height: rgba.height() as usize,
        };
        Ok(Image::new(size, rgba.into_raw())?)
    }
}
