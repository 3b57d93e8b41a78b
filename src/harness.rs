//! Timing harness comparing the direct and compose rotators.
//!
//! Each rotator is timed on its own: the clock starts immediately before the
//! call and stops immediately after it, so neither input allocation nor any
//! I/O is included. Cross-validation is diagnostic only and never fails a run.
//!
//! By default the compose rotator always produces its 90° result, whatever
//! angle the direct rotator was asked for; the comparison then only agrees
//! for 90°. [`ComposeMode::MatchAngle`] rotates both by the same angle.

use crate::grid::{Mismatch, PixelGrid};
use crate::rotate::{ComposeRotator, DirectRotator, Execution, RotationAngle};
use crate::trace::{trace_event, trace_span, trace_warn};
use crate::util::RotateResult;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Marker inserted before the extension of the compose output path.
pub const COMPOSE_MARKER: char = '+';

/// Which rotation the compose rotator performs during a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ComposeMode {
    /// Always 90° clockwise (`rotate_ninety`).
    #[default]
    Ninety,
    /// The same angle as the direct rotator (`compose_rotate`).
    MatchAngle,
}

/// Harness configuration.
#[derive(Clone, Copy, Debug)]
pub struct HarnessConfig {
    /// Strategy used by the direct rotator.
    pub execution: Execution,
    /// Rotation performed by the compose rotator.
    pub compose: ComposeMode,
    /// Compare both outputs pixel by pixel after timing.
    pub verify: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            execution: Execution::default(),
            compose: ComposeMode::default(),
            verify: true,
        }
    }
}

/// A rotated grid together with the time its rotator took.
#[derive(Clone, Debug)]
pub struct Timed {
    pub grid: PixelGrid,
    pub elapsed: Duration,
}

/// Outcome of one harness run.
#[derive(Clone, Debug)]
pub struct HarnessReport {
    pub angle: RotationAngle,
    pub direct: Timed,
    pub compose: Timed,
    /// First difference between the outputs; `None` if they agree or
    /// verification was disabled.
    pub mismatch: Option<Mismatch>,
    pub verified: bool,
}

impl HarnessReport {
    /// Durations of the direct and compose calls, in call order.
    pub fn durations(&self) -> [Duration; 2] {
        [self.direct.elapsed, self.compose.elapsed]
    }

    /// Returns `true` if verification ran and found no difference.
    pub fn outputs_agree(&self) -> bool {
        self.verified && self.mismatch.is_none()
    }
}

/// Runs both rotators on one grid and records their timings.
#[derive(Clone, Copy, Debug, Default)]
pub struct Harness {
    direct: DirectRotator,
    compose: ComposeRotator,
    cfg: HarnessConfig,
}

impl Harness {
    /// Creates a harness with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, cfg: HarnessConfig) -> Self {
        self.direct = self.direct.with_execution(cfg.execution);
        self.cfg = cfg;
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &HarnessConfig {
        &self.cfg
    }

    /// Rotates `grid` by `angle` with the direct rotator, then runs the
    /// compose rotator as selected by [`ComposeMode`], timing each call.
    pub fn run(&self, grid: &PixelGrid, angle: RotationAngle) -> RotateResult<HarnessReport> {
        let _span = trace_span!(
            "harness_run",
            degrees = angle.degrees(),
            rows = grid.rows(),
            cols = grid.cols()
        )
        .entered();

        let start = Instant::now();
        let direct = self.direct.rotate(grid, angle)?;
        let direct_elapsed = start.elapsed();
        trace_event!(
            "direct_timing",
            micros = direct_elapsed.as_micros() as u64
        );

        let start = Instant::now();
        let compose = match self.cfg.compose {
            ComposeMode::Ninety => self.compose.rotate_ninety(grid)?,
            ComposeMode::MatchAngle => self.compose.rotate(grid, angle)?,
        };
        let compose_elapsed = start.elapsed();
        trace_event!(
            "compose_timing",
            micros = compose_elapsed.as_micros() as u64
        );

        let mismatch = if self.cfg.verify {
            direct.first_mismatch(&compose)
        } else {
            None
        };
        if let Some(found) = mismatch {
            trace_warn!("rotators_disagree", at = format!("{found:?}").as_str());
        }

        Ok(HarnessReport {
            angle,
            direct: Timed {
                grid: direct,
                elapsed: direct_elapsed,
            },
            compose: Timed {
                grid: compose,
                elapsed: compose_elapsed,
            },
            mismatch,
            verified: self.cfg.verify,
        })
    }
}

/// Derives the compose output path by inserting [`COMPOSE_MARKER`] before the
/// file extension (`out.png` -> `out+.png`). Without an extension the marker
/// is appended.
pub fn marked_path<P: AsRef<Path>>(dest: P) -> PathBuf {
    let dest = dest.as_ref();
    let stem = dest
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match dest.extension() {
        Some(ext) => format!("{stem}{COMPOSE_MARKER}.{}", ext.to_string_lossy()),
        None => format!("{stem}{COMPOSE_MARKER}"),
    };
    dest.with_file_name(name)
}
