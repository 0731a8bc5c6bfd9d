#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access, encoding/decoding failures,
/// and format-specific errors.
pub mod error;

/// High-level image reading functions.
///
/// See [`functional::read_image_any`] for automatic format detection.
pub mod functional;

/// PNG image encoding and decoding.
///
/// Read and write 8-bit PNG images in grayscale, RGB and RGBA layouts.
pub mod png;

/// JPEG image encoding and decoding.
///
/// Pure Rust JPEG codec for reading and writing JPEG images.
pub mod jpeg;

pub use crate::error::IoError;
