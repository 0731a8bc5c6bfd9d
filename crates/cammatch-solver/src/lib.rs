#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Recovers where a camera stood when it took a photograph, from nothing but
//! the oriented bounding box of the photographed object and two scene
//! parameters: the object's real-world height and the camera's vertical
//! field of view.
//!
//! ## Example
//!
//! ```rust
//! use cammatch_image::ImageSize;
//! use cammatch_imgproc::analyzer::{ContourAnalysis, OrientedBoundingBox};
//! use cammatch_imgproc::rect::MinAreaRect;
//! use cammatch_solver::{solve, SolveInputs};
//!
//! let analysis = ContourAnalysis {
//!     image_size: ImageSize {
//!         width: 1920,
//!         height: 1080,
//!     },
//!     bounding_box: OrientedBoundingBox {
//!         center_x: 960,
//!         center_y: 540,
//!         width: 420,
//!         height: 540,
//!         angle_deg: 0.0,
//!     },
//!     rect: MinAreaRect {
//!         center: [960.0, 540.0],
//!         size: [420.0, 540.0],
//!         angle_deg: 0.0,
//!     },
//! };
//!
//! let inputs = SolveInputs {
//!     object_height_cm: 180.0,
//!     vertical_fov_deg: 55.0,
//! };
//!
//! let transform = solve(&inputs, &analysis)?;
//! // the camera backs away along the forward axis
//! assert!(transform.location[0] < 0.0);
//! # Ok::<(), cammatch_solver::SolverError>(())
//! ```

/// Inverse pinhole projection from one bounding box to a camera placement.
pub mod projection;

/// Common data types and errors shared by the solver.
pub mod types;

pub use projection::solve;
pub use types::{CameraTransform, SolveInputs, SolverError};
