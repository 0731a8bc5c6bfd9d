use std::fmt;

/// Pipeline stages reported to a [`StageObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Separating the object from the background.
    Segmentation,
    /// Fitting the oriented bounding box.
    ContourAnalysis,
    /// Recovering the camera placement.
    CameraSolve,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Segmentation => "segmentation",
            Stage::ContourAnalysis => "contour analysis",
            Stage::CameraSolve => "camera solve",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of a pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    /// The stage completed.
    Completed,
    /// The stage failed.
    Failed,
}

/// Callback receiving a notification after each pipeline stage.
pub trait StageObserver {
    /// Called once per executed stage with its outcome.
    fn on_stage(&self, stage: Stage, status: StageStatus);
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Default)]
pub struct NullObserver;

impl StageObserver for NullObserver {
    fn on_stage(&self, _stage: Stage, _status: StageStatus) {}
}

#[cfg(test)]
mod tests {
    use super::Stage;

    #[test]
    fn stage_names_are_human_readable() {
        assert_eq!(Stage::Segmentation.to_string(), "segmentation");
        assert_eq!(Stage::ContourAnalysis.to_string(), "contour analysis");
        assert_eq!(Stage::CameraSolve.to_string(), "camera solve");
    }
}
