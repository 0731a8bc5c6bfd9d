use cammatch_image::{Image, ImageSize};

use crate::error::ContourError;
use crate::rect::{self, MinAreaRect};
use crate::{color, contours, draw, threshold};

/// Integer-rounded summary of a fitted oriented box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBoundingBox {
    /// Horizontal pixel coordinate of the box center.
    pub center_x: i32,
    /// Vertical pixel coordinate of the box center.
    pub center_y: i32,
    /// Box extent along the width direction, in pixels.
    pub width: u32,
    /// Box extent along the height direction, in pixels.
    pub height: u32,
    /// Rotation of the width direction from the positive x axis, in degrees
    /// within `[0, 90)`.
    pub angle_deg: f64,
}

/// Result of fitting one oriented box around all foreground regions of an
/// image.
#[derive(Debug, Clone)]
pub struct ContourAnalysis {
    /// Size of the analyzed image.
    pub image_size: ImageSize,
    /// Integer-rounded summary of the fitted box.
    pub bounding_box: OrientedBoundingBox,
    /// The fitted rectangle with sub-pixel precision.
    pub rect: MinAreaRect,
}

/// Fit one oriented bounding box around the foreground of an RGBA image.
///
/// A pixel is foreground when its alpha value is strictly greater than
/// `alpha_threshold`. The external boundaries of all foreground regions are
/// merged into a single point set before the box is fitted, so disjoint
/// regions are summarized by one box and holes inside a region are ignored.
///
/// # Arguments
///
/// * `src` - The input RGBA image.
/// * `alpha_threshold` - Alpha values above this count as foreground.
///
/// # Errors
///
/// Returns [`ContourError::NoForegroundFound`] when no pixel crosses the
/// threshold.
pub fn analyze_rgba(
    src: &Image<u8, 4>,
    alpha_threshold: u8,
) -> Result<ContourAnalysis, ContourError> {
    let mut alpha = Image::from_size_val(src.size(), 0u8)?;
    color::alpha_from_rgba(src, &mut alpha)?;

    let mut mask = Image::from_size_val(src.size(), 0u8)?;
    threshold::threshold_binary(&alpha, &mut mask, alpha_threshold, 255)?;

    let boundary: Vec<[i32; 2]> = contours::find_external_contours(&mask)
        .into_iter()
        .flatten()
        .collect();
    let rect = rect::min_area_rect(&boundary).ok_or(ContourError::NoForegroundFound)?;

    let bounding_box = OrientedBoundingBox {
        center_x: rect.center[0].round() as i32,
        center_y: rect.center[1].round() as i32,
        width: rect.size[0].round() as u32,
        height: rect.size[1].round() as u32,
        angle_deg: rect.angle_deg,
    };

    Ok(ContourAnalysis {
        image_size: src.size(),
        bounding_box,
        rect,
    })
}

/// Render a debug view of a fitted box over the source image.
///
/// The alpha plane is dropped, the box outline is drawn in green and the box
/// center is marked with a filled red circle.
pub fn render_overlay(
    src: &Image<u8, 4>,
    rect: &MinAreaRect,
) -> Result<Image<u8, 3>, ContourError> {
    let mut canvas = Image::from_size_val(src.size(), 0u8)?;
    color::rgb_from_rgba(src, &mut canvas)?;

    let outline: Vec<(i64, i64)> = rect
        .corner_points()
        .iter()
        .map(|c| (c[0].round() as i64, c[1].round() as i64))
        .collect();
    draw::draw_polygon(&mut canvas, &outline, [0, 255, 0], 2);
    draw::draw_filled_circle(
        &mut canvas,
        (rect.center[0].round() as i64, rect.center[1].round() as i64),
        5,
        [255, 0, 0],
    );

    Ok(canvas)
}
