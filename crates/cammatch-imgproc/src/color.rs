use cammatch_image::{Image, ImageError};

use crate::parallel;

/// Extract the alpha plane of an RGBA image into a single channel image.
///
/// # Arguments
///
/// * `src` - The input RGBA image.
/// * `dst` - The output image with a single channel holding the alpha values.
///
/// Both images must have the same size.
///
/// # Examples
///
/// ```
/// use cammatch_image::{Image, ImageSize};
/// use cammatch_imgproc::color::alpha_from_rgba;
///
/// let image = Image::<u8, 4>::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     vec![10, 20, 30, 255, 40, 50, 60, 0],
/// )
/// .unwrap();
///
/// let mut alpha = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
/// alpha_from_rgba(&image, &mut alpha).unwrap();
///
/// assert_eq!(alpha.as_slice(), &[255, 0]);
/// ```
pub fn alpha_from_rgba(src: &Image<u8, 4>, dst: &mut Image<u8, 1>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        dst_pixel[0] = src_pixel[3];
    });

    Ok(())
}

/// Drop the alpha plane of an RGBA image, keeping the color channels.
///
/// # Arguments
///
/// * `src` - The input RGBA image.
/// * `dst` - The output RGB image.
///
/// Both images must have the same size.
pub fn rgb_from_rgba(src: &Image<u8, 4>, dst: &mut Image<u8, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        dst_pixel.copy_from_slice(&src_pixel[..3]);
    });

    Ok(())
}
