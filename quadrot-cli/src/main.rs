use clap::error::ErrorKind;
use clap::Parser;
use quadrot::io::{load_rgb_grid, save_rgb_grid};
use quadrot::{
    marked_path, ComposeMode, Execution, Harness, HarnessConfig, HarnessReport, Mismatch, RotateError,
    RotationAngle,
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const EXIT_USAGE: u8 = 1;
const EXIT_BAD_INPUT: u8 = 2;
const EXIT_WRITE: u8 = 3;
const EXIT_ROTATE: u8 = 4;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Rotate an image by a multiple of 90 degrees and time two rotators",
    after_help = "ROTATION is 1, 2 or 3: 270, 180 or 90 degrees clockwise \
                  (equivalently 90, 180 or 270 degrees anti-clockwise)."
)]
struct Cli {
    /// Source image file.
    src: PathBuf,
    /// Rotation code (1, 2 or 3).
    #[arg(allow_hyphen_values = true)]
    rotation: String,
    /// Destination image file; the compose result is written next to it
    /// with a `+` before the extension.
    dest: PathBuf,
    /// Run the direct rotator on a single thread.
    #[arg(long)]
    sequential: bool,
    /// Rotate the compose output by the requested angle instead of 90 degrees.
    #[arg(long)]
    compose_same_angle: bool,
    /// Skip the pixel-by-pixel comparison of both outputs.
    #[arg(long)]
    no_verify: bool,
    /// Write a JSON timing report to this file.
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    source: String,
    angle_deg: u32,
    compose_angle_deg: u32,
    out_rows: usize,
    out_cols: usize,
    parallel: bool,
    direct_ms: f64,
    compose_ms: f64,
    verified: bool,
    mismatch: Option<String>,
}

impl Report {
    fn new(cli: &Cli, execution: Execution, report: &HarnessReport) -> Self {
        let [direct, compose] = report.durations();
        Self {
            source: cli.src.display().to_string(),
            angle_deg: report.angle.degrees(),
            compose_angle_deg: if cli.compose_same_angle {
                report.angle.degrees()
            } else {
                RotationAngle::Cw90.degrees()
            },
            out_rows: report.direct.grid.rows(),
            out_cols: report.direct.grid.cols(),
            parallel: execution.is_parallel(),
            direct_ms: millis_f64(direct),
            compose_ms: millis_f64(compose),
            verified: report.verified,
            mismatch: report.mismatch.map(describe_mismatch),
        }
    }
}

fn millis_f64(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

fn describe_mismatch(m: Mismatch) -> String {
    match m {
        Mismatch::Shape { left, right } => format!(
            "shape {}x{}x{} vs {}x{}x{}",
            left.0, left.1, left.2, right.0, right.1, right.2
        ),
        Mismatch::Pixel { row, col } => format!("pixel ({row}, {col})"),
    }
}

fn exit_code(err: &RotateError) -> u8 {
    match err {
        RotateError::InvalidArgument { .. } | RotateError::Load { .. } => EXIT_BAD_INPUT,
        RotateError::Write { .. } => EXIT_WRITE,
        RotateError::UnsupportedFormat { .. }
        | RotateError::InvalidDimensions { .. }
        | RotateError::DimensionMismatch { .. } => EXIT_ROTATE,
    }
}

fn parse_rotation(code: &str) -> Result<RotationAngle, RotateError> {
    let code: u32 = code.trim().parse().map_err(|_| RotateError::InvalidArgument {
        reason: format!("rotation code '{code}', only [1,2,3] permitted"),
    })?;
    RotationAngle::from_code(code)
}

fn write_report(path: &Path, report: &Report) -> Result<(), RotateError> {
    let to_write_err = |reason: String| RotateError::Write {
        path: path.display().to_string(),
        reason,
    };
    let json = serde_json::to_string_pretty(report).map_err(|e| to_write_err(e.to_string()))?;
    fs::write(path, json).map_err(|e| to_write_err(e.to_string()))
}

fn run(cli: &Cli) -> Result<(), RotateError> {
    let angle = parse_rotation(&cli.rotation)?;
    let grid = load_rgb_grid(&cli.src)?;

    let execution = if cli.sequential {
        Execution::Sequential
    } else {
        Execution::Parallel
    };
    let harness = Harness::new().with_config(HarnessConfig {
        execution,
        compose: if cli.compose_same_angle {
            ComposeMode::MatchAngle
        } else {
            ComposeMode::Ninety
        },
        verify: !cli.no_verify,
    });
    let report = harness.run(&grid, angle)?;
    drop(grid);

    for elapsed in report.durations() {
        println!("{}ms", elapsed.as_millis());
    }
    if let Some(m) = report.mismatch {
        println!("Result is wrong: first mismatch at {}", describe_mismatch(m));
    }

    save_rgb_grid(&report.direct.grid, &cli.dest)?;
    save_rgb_grid(&report.compose.grid, marked_path(&cli.dest))?;

    if let Some(path) = &cli.report {
        write_report(path, &Report::new(cli, execution, &report))?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EXIT_USAGE,
            };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    if cli.trace {
        let filter = match "quadrot=info".parse() {
            Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
            Err(_) => EnvFilter::from_default_env(),
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            tracing::debug!(error = %err, "quadrot failed");
            ExitCode::from(exit_code(&err))
        }
    }
}
