#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// high-level analysis fitting one oriented box around the image foreground.
pub mod analyzer;

/// operations to extract color planes from images.
pub mod color;

/// external contour extraction from binary masks.
pub mod contours;

/// utilities to draw shapes on images.
pub mod draw;

/// error types for the crate.
pub mod error;

/// parallel row iteration helpers shared by the pixelwise operations.
pub mod parallel;

/// convex hull and minimum-area oriented rectangle fitting.
pub mod rect;

/// image thresholding operations.
pub mod threshold;

/// disjoint-set forest used to label connected pixels.
pub mod union_find;

pub use crate::error::ContourError;
