//! cammatch CLI — match a camera placement to a single photograph.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use cammatch::pipeline::{CameraMatcher, MatcherConfig, Stage, StageObserver, StageStatus};
use cammatch::solver::{CameraTransform, SolveInputs};

#[derive(Parser, Debug)]
#[command(name = "cammatch")]
#[command(about = "Place a virtual camera so a render frames an object exactly like a photograph")]
#[command(version)]
struct Args {
    /// Path to the source photograph.
    #[arg(long)]
    input: PathBuf,

    /// Real-world height of the photographed object, in centimeters.
    #[arg(long)]
    height: f64,

    /// Vertical field of view of the target camera, in degrees.
    #[arg(long)]
    fov: f64,

    /// Path to write the fitted bounding box rendered over the photo.
    #[arg(long = "debug_image")]
    debug_image: Option<PathBuf>,

    /// Print the transform as JSON instead of the labeled report.
    #[arg(long)]
    json: bool,
}

/// Observer forwarding stage outcomes to the `log` facade.
///
/// Progress never goes to stdout; the labeled report must stay the only
/// thing printed there.
struct LogObserver;

impl StageObserver for LogObserver {
    fn on_stage(&self, stage: Stage, status: StageStatus) {
        match status {
            StageStatus::Completed => log::info!("{} completed", stage),
            StageStatus::Failed => log::error!("{} failed", stage),
        }
    }
}

/// Format the transform as the labeled report consumed by callers.
///
/// Four decimal digits per value under fixed labels, so the six numbers can
/// be parsed back out of stdout with a line-based expression.
fn format_report(transform: &CameraTransform) -> String {
    let [x, y, z] = transform.location;
    let [roll, pitch, yaw] = transform.rotation;
    format!(
        "Location (cm):\n\
         \x20   X = {x:.4}\n\
         \x20   Y = {y:.4}\n\
         \x20   Z = {z:.4}\n\
         \n\
         Rotation (deg):\n\
         \x20   X (Roll)  = {roll:.4}\n\
         \x20   Y (Pitch) = {pitch:.4}\n\
         \x20   Z (Yaw)   = {yaw:.4}\n"
    )
}

fn run(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let inputs = SolveInputs {
        object_height_cm: args.height,
        vertical_fov_deg: args.fov,
    };

    log::info!("matching camera for {}", args.input.display());
    let matcher = CameraMatcher::new(MatcherConfig {
        debug_image: args.debug_image.clone(),
        ..MatcherConfig::default()
    })
    .with_observer(Box::new(LogObserver));

    let transform = matcher.match_photo(&inputs, &args.input)?;
    if let Some(path) = &args.debug_image {
        log::info!("debug overlay written to {}", path.display());
    }

    if args.json {
        let mut report = serde_json::to_string_pretty(&transform)?;
        report.push('\n');
        Ok(report)
    } else {
        Ok(format_report(&transform))
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    // the report is assembled in full before anything reaches stdout, so a
    // failure never prints a partial transform
    match run(&args) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_keeps_the_fixed_labels_and_four_decimals() {
        let transform = CameraTransform {
            location: [-193.2213, 0.0, 0.0],
            rotation: [-0.0, 0.0, 0.0],
        };
        assert_eq!(
            format_report(&transform),
            "Location (cm):\n\
             \x20   X = -193.2213\n\
             \x20   Y = 0.0000\n\
             \x20   Z = 0.0000\n\
             \n\
             Rotation (deg):\n\
             \x20   X (Roll)  = -0.0000\n\
             \x20   Y (Pitch) = 0.0000\n\
             \x20   Z (Yaw)   = 0.0000\n"
        );
    }

    #[test]
    fn report_rounds_to_four_decimals() {
        let transform = CameraTransform {
            location: [2.0 / 3.0, -1.23456789, 100.0],
            rotation: [0.0, 0.0, 0.0],
        };
        let report = format_report(&transform);
        assert!(report.contains("X = 0.6667\n"));
        assert!(report.contains("Y = -1.2346\n"));
        assert!(report.contains("Z = 100.0000\n"));
    }

    #[test]
    fn flags_parse_with_exact_names() {
        let args = Args::try_parse_from([
            "cammatch",
            "--input",
            "rocket.png",
            "--height",
            "182.5",
            "--fov",
            "50",
            "--debug_image",
            "overlay.png",
            "--json",
        ])
        .unwrap();

        assert_eq!(args.input, PathBuf::from("rocket.png"));
        assert_eq!(args.height, 182.5);
        assert_eq!(args.fov, 50.0);
        assert_eq!(args.debug_image, Some(PathBuf::from("overlay.png")));
        assert!(args.json);
    }

    #[test]
    fn debug_image_flag_keeps_its_underscore() {
        let res = Args::try_parse_from([
            "cammatch",
            "--input",
            "rocket.png",
            "--height",
            "182.5",
            "--fov",
            "50",
            "--debug-image",
            "overlay.png",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn input_height_and_fov_are_required() {
        assert!(Args::try_parse_from(["cammatch"]).is_err());
        assert!(Args::try_parse_from(["cammatch", "--input", "rocket.png"]).is_err());
        assert!(Args::try_parse_from([
            "cammatch", "--input", "rocket.png", "--height", "182.5"
        ])
        .is_err());
    }
}
