#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Chains the three steps that recover a camera placement from a single
//! photograph: segmenting the photographed object, fitting one oriented
//! bounding box around the segmented foreground and inverting the pinhole
//! projection. Each stage reports its outcome to a configurable observer,
//! and the segmentation strategy is pluggable.

/// error type tagging failures with the pipeline stage that produced them.
pub mod errors;

/// progress observation hooks for the pipeline stages.
pub mod observer;

/// strategies separating the photographed object from its background.
pub mod segment;

pub use crate::errors::PipelineError;
pub use crate::observer::{NullObserver, Stage, StageObserver, StageStatus};
pub use crate::segment::{AlphaMatteSegmenter, SegmentError, Segmenter};

use std::path::{Path, PathBuf};

use cammatch_image::Image;
use cammatch_imgproc::analyzer::{self, ContourAnalysis};
use cammatch_io::functional::read_image_any;
use cammatch_io::jpeg::write_image_jpeg_rgb8;
use cammatch_io::png::write_image_png_rgb8;
use cammatch_io::IoError;
use cammatch_solver::{solve, CameraTransform, SolveInputs};

/// Default alpha threshold separating foreground from background.
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 100;

/// Quality used when the debug overlay is encoded as JPEG.
const OVERLAY_JPEG_QUALITY: u8 = 90;

/// Configuration of the photo matching pipeline.
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Alpha values above this count as foreground.
    pub alpha_threshold: u8,
    /// Optional path where the fitted box overlay is written.
    pub debug_image: Option<PathBuf>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
            debug_image: None,
        }
    }
}

/// Pipeline matching a camera placement to a single photograph.
pub struct CameraMatcher {
    config: MatcherConfig,
    segmenter: Box<dyn Segmenter>,
    observer: Box<dyn StageObserver>,
}

impl CameraMatcher {
    /// Create a matcher with the given configuration.
    ///
    /// The matcher reads mattes from the photo's own alpha channel and
    /// reports progress to nobody; see [`CameraMatcher::with_segmenter`] and
    /// [`CameraMatcher::with_observer`] to change either.
    pub fn new(config: MatcherConfig) -> Self {
        Self {
            config,
            segmenter: Box::new(AlphaMatteSegmenter),
            observer: Box::new(NullObserver),
        }
    }

    /// Replace the segmentation strategy.
    pub fn with_segmenter(mut self, segmenter: Box<dyn Segmenter>) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Replace the progress observer.
    pub fn with_observer(mut self, observer: Box<dyn StageObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The configuration the matcher runs with.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Match a camera placement to the photograph at `path`.
    ///
    /// Validates the scene parameters, loads and segments the photo, fits
    /// one oriented box around the segmented foreground and inverts the
    /// projection. When a debug image path is configured, the fitted box is
    /// rendered over the photo and written there during the analysis stage.
    ///
    /// # Errors
    ///
    /// Out-of-range scene parameters are rejected before the photo is read.
    /// Any stage failure aborts the run after reporting it to the observer.
    pub fn match_photo(
        &self,
        inputs: &SolveInputs,
        path: impl AsRef<Path>,
    ) -> Result<CameraTransform, PipelineError> {
        inputs.validate().map_err(PipelineError::Solve)?;

        let photo = read_image_any(path)?;
        let segmented =
            self.run_stage(Stage::Segmentation, || Ok(self.segmenter.segment(&photo)?))?;
        self.match_matte(inputs, &segmented)
    }

    /// Match a camera placement to an already segmented RGBA image.
    ///
    /// Skips photo loading and segmentation; the alpha plane of `segmented`
    /// is taken as the foreground matte.
    pub fn match_segmented(
        &self,
        inputs: &SolveInputs,
        segmented: &Image<u8, 4>,
    ) -> Result<CameraTransform, PipelineError> {
        inputs.validate().map_err(PipelineError::Solve)?;
        self.match_matte(inputs, segmented)
    }

    fn match_matte(
        &self,
        inputs: &SolveInputs,
        segmented: &Image<u8, 4>,
    ) -> Result<CameraTransform, PipelineError> {
        let analysis: ContourAnalysis = self.run_stage(Stage::ContourAnalysis, || {
            let analysis = analyzer::analyze_rgba(segmented, self.config.alpha_threshold)?;
            if let Some(path) = &self.config.debug_image {
                let overlay = analyzer::render_overlay(segmented, &analysis.rect)?;
                write_overlay(&overlay, path)?;
            }
            Ok(analysis)
        })?;

        self.run_stage(Stage::CameraSolve, || Ok(solve(inputs, &analysis)?))
    }

    fn run_stage<T>(
        &self,
        stage: Stage,
        f: impl FnOnce() -> Result<T, PipelineError>,
    ) -> Result<T, PipelineError> {
        match f() {
            Ok(value) => {
                self.observer.on_stage(stage, StageStatus::Completed);
                Ok(value)
            }
            Err(err) => {
                self.observer.on_stage(stage, StageStatus::Failed);
                Err(err)
            }
        }
    }
}

fn write_overlay(overlay: &Image<u8, 3>, path: &Path) -> Result<(), IoError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("png") => write_image_png_rgb8(path, overlay),
        Some(ext) if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") => {
            write_image_jpeg_rgb8(path, overlay, OVERLAY_JPEG_QUALITY)
        }
        _ => Err(IoError::InvalidFileExtension(path.to_path_buf())),
    }
}
