#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use cammatch_image as image;

#[doc(inline)]
pub use cammatch_imgproc as imgproc;

#[doc(inline)]
pub use cammatch_io as io;

#[doc(inline)]
pub use cammatch_pipeline as pipeline;

#[doc(inline)]
pub use cammatch_solver as solver;
