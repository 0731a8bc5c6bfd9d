use cammatch_image::Image;

/// Helper function to set a pixel's color, handling bounds checking.
#[inline]
fn set_pixel<const C: usize>(img: &mut Image<u8, C>, x: i64, y: i64, color: [u8; C]) {
    if x >= 0 && x < img.cols() as i64 && y >= 0 && y < img.rows() as i64 {
        let start = (y as usize * img.cols() + x as usize) * C;
        img.as_slice_mut()[start..start + C].copy_from_slice(&color);
    }
}

/// Draws a line on an image inplace using Bresenham's line algorithm.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `p0` - The start point of the line as a tuple of (x, y).
/// * `p1` - The end point of the line as a tuple of (x, y).
/// * `color` - The color of the line as an array of `C` elements.
/// * `thickness` - The thickness of the line. (Note: thickness > 1 is approximate).
pub fn draw_line<const C: usize>(
    img: &mut Image<u8, C>,
    p0: (i64, i64),
    p1: (i64, i64),
    color: [u8; C],
    thickness: usize,
) {
    let (mut x0, mut y0) = p0;
    let (x1, y1) = p1;

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut err = dx - dy;
    let half_thickness = thickness as i64 / 2;

    loop {
        if thickness <= 1 {
            set_pixel(img, x0, y0, color);
        } else {
            // approximate thickness with a filled square centered on the point
            for i in -half_thickness..=half_thickness {
                for j in -half_thickness..=half_thickness {
                    set_pixel(img, x0 + i, y0 + j, color);
                }
            }
        }

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Draws a closed polygon outline on an image inplace.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `points` - The polygon vertices as (x, y) tuples. The last vertex is
///   connected back to the first one.
/// * `color` - The color of the outline.
/// * `thickness` - The thickness of the outline.
pub fn draw_polygon<const C: usize>(
    img: &mut Image<u8, C>,
    points: &[(i64, i64)],
    color: [u8; C],
    thickness: usize,
) {
    if points.len() < 2 {
        if let Some(&(x, y)) = points.first() {
            set_pixel(img, x, y, color);
        }
        return;
    }
    for (i, &p0) in points.iter().enumerate() {
        let p1 = points[(i + 1) % points.len()];
        draw_line(img, p0, p1, color, thickness);
    }
}

/// Draws a filled circle on an image inplace.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `center` - The center of the circle as a tuple of (x, y).
/// * `radius` - The radius of the circle in pixels.
/// * `color` - The fill color.
pub fn draw_filled_circle<const C: usize>(
    img: &mut Image<u8, C>,
    center: (i64, i64),
    radius: usize,
    color: [u8; C],
) {
    let (cx, cy) = center;
    let r = radius as i64;
    let r_squared = r * r;
    for y in (cy - r)..=(cy + r) {
        for x in (cx - r)..=(cx + r) {
            let dx = x - cx;
            let dy = y - cy;
            if dx * dx + dy * dy <= r_squared {
                set_pixel(img, x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cammatch_image::{Image, ImageError, ImageSize};

    #[rustfmt::skip]
    #[test]
    fn test_draw_line() -> Result<(), ImageError> {
        let mut img = Image::new(
            ImageSize { width: 5, height: 5 }, vec![0u8; 25],
        )?;
        draw_line(&mut img, (0, 0), (4, 4), [255], 1);
        assert_eq!(
            img.as_slice(),
            &[
                255,   0,   0,   0,   0,
                  0, 255,   0,   0,   0,
                  0,   0, 255,   0,   0,
                  0,   0,   0, 255,   0,
                  0,   0,   0,   0, 255,
            ]
        );
        Ok(())
    }

    #[rustfmt::skip]
    #[test]
    fn test_draw_polygon() -> Result<(), ImageError> {
        let mut img = Image::new(
            ImageSize { width: 5, height: 5 }, vec![0u8; 25],
        )?;
        draw_polygon(&mut img, &[(1, 1), (3, 1), (3, 3), (1, 3)], [128], 1);
        assert_eq!(
            img.as_slice(),
            &[
                  0,   0,   0,   0,   0,
                  0, 128, 128, 128,   0,
                  0, 128,   0, 128,   0,
                  0, 128, 128, 128,   0,
                  0,   0,   0,   0,   0,
            ]
        );
        Ok(())
    }

    #[rustfmt::skip]
    #[test]
    fn test_draw_filled_circle() -> Result<(), ImageError> {
        let mut img = Image::new(
            ImageSize { width: 5, height: 5 }, vec![0u8; 25],
        )?;
        draw_filled_circle(&mut img, (2, 2), 1, [200]);
        assert_eq!(
            img.as_slice(),
            &[
                  0,   0,   0,   0,   0,
                  0,   0, 200,   0,   0,
                  0, 200, 200, 200,   0,
                  0,   0, 200,   0,   0,
                  0,   0,   0,   0,   0,
            ]
        );
        Ok(())
    }

    #[test]
    fn test_draw_filled_circle_clips_at_border() -> Result<(), ImageError> {
        let mut img = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            0u8,
        )?;
        draw_filled_circle(&mut img, (0, 0), 2, [255, 0, 0]);
        assert_eq!(img.get_pixel(0, 0, 0)?, 255);
        assert_eq!(img.get_pixel(2, 0, 0)?, 255);
        assert_eq!(img.get_pixel(0, 2, 0)?, 255);
        assert_eq!(img.get_pixel(3, 3, 0)?, 0);
        Ok(())
    }

    #[test]
    fn test_draw_thick_line_covers_neighbors() -> Result<(), ImageError> {
        let mut img = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 7,
                height: 5,
            },
            0u8,
        )?;
        draw_line(&mut img, (1, 2), (5, 2), [255], 2);
        for x in 1..=5 {
            assert_eq!(img.get_pixel(x, 1, 0)?, 255);
            assert_eq!(img.get_pixel(x, 2, 0)?, 255);
            assert_eq!(img.get_pixel(x, 3, 0)?, 255);
        }
        assert_eq!(img.get_pixel(0, 0, 0)?, 0);
        Ok(())
    }
}
