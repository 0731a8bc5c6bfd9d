use num_traits::Zero;
use std::cmp::PartialOrd;

use cammatch_image::{Image, ImageError};

use crate::parallel;

/// Apply a binary threshold to an image.
///
/// Values strictly greater than `threshold` become `max_value`, everything
/// else becomes zero.
///
/// # Arguments
///
/// * `src` - The input image of an arbitrary number of channels and type.
/// * `dst` - The output image of the same shape as the input.
/// * `threshold` - The threshold value. Must be the same type as the image.
/// * `max_value` - The value assigned to pixels above the threshold.
///
/// # Examples
///
/// ```
/// use cammatch_image::{Image, ImageSize};
/// use cammatch_imgproc::threshold::threshold_binary;
///
/// let data = vec![100u8, 200, 50, 150, 200, 250];
/// let image = Image::<_, 1>::new(ImageSize { width: 2, height: 3 }, data).unwrap();
///
/// let mut thresholded = Image::<_, 1>::from_size_val(image.size(), 0).unwrap();
///
/// threshold_binary(&image, &mut thresholded, 100, 255).unwrap();
/// assert_eq!(thresholded.as_slice(), &[0, 255, 0, 255, 255, 255]);
/// ```
pub fn threshold_binary<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    threshold: T,
    max_value: T,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync + PartialOrd + Zero,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows_val(src, dst, |src_val, dst_val| {
        *dst_val = if *src_val > threshold {
            max_value
        } else {
            T::zero()
        };
    });

    Ok(())
}
