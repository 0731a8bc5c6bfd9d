/// An error type for the image module.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// The pixel data length does not match the image shape.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Source and destination image sizes do not match.
    #[error("Image size mismatch: src is {0}x{1}, dst is {2}x{3}")]
    InvalidImageSize(usize, usize, usize, usize),

    /// A pixel coordinate lies outside the image.
    #[error("Pixel index ({0}, {1}) out of bounds for image of size {2}x{3}")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// A channel index lies outside the pixel.
    #[error("Channel index {0} out of bounds for image with {1} channels")]
    ChannelIndexOutOfBounds(usize, usize),

    /// A pixel value could not be converted to the requested type.
    #[error("Failed to cast image data")]
    CastError,
}
