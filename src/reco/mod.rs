//! Conversion seam between the CLI driver and the reconstruction engine.
//!
//! The driver collects everything the engine needs into a [`ConversionRequest`]
//! and hands it to a [`Dl1Converter`] in a single call. Keeping the engine
//! behind a trait lets the driver be exercised in tests without touching real
//! R0 data, and makes the telescope allow-list an explicit request field
//! instead of process-wide state.
use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::Result;

pub mod pipeline;
pub use pipeline::RecoPipeline;

/// Telescope ids processed by default: LST-1 through LST-4.
pub const DEFAULT_ALLOWED_TELS: [u16; 4] = [1, 2, 3, 4];

/// Timestamp/counter anchors for event time reconstruction.
///
/// `None` means "no anchor supplied"; the engine then falls back to the
/// start-of-run timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TimingAnchors {
    /// UCTS timestamp (ns, unix/TAI) of the first event with a valid Dragon
    /// timestamp.
    pub ucts_t0_dragon: Option<f64>,
    /// Dragon counter (pps + 10MHz, ns) matching `ucts_t0_dragon`.
    pub dragon_counter0: Option<f64>,
    /// UCTS timestamp (ns, unix/TAI) of the first event with a valid TIB
    /// timestamp.
    pub ucts_t0_tib: Option<f64>,
    /// First valid TIB counter (pps + 10MHz, ns) matching `ucts_t0_tib`.
    pub tib_counter0: Option<f64>,
}

impl TimingAnchors {
    pub fn is_empty(&self) -> bool {
        self.ucts_t0_dragon.is_none()
            && self.dragon_counter0.is_none()
            && self.ucts_t0_tib.is_none()
            && self.tib_counter0.is_none()
    }
}

/// Everything forwarded to the engine for one R0 -> DL1 run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Raw events (R0) input file.
    pub input_file: PathBuf,
    /// DL1 output file the engine writes.
    pub output_file: PathBuf,
    /// Engine configuration mapping, `max_events` already overlaid.
    pub config: Config,
    pub pedestal_file: PathBuf,
    pub calibration_file: PathBuf,
    pub time_calibration_file: PathBuf,
    /// Drive log with pointing information, if available.
    pub pointing_file: Option<PathBuf>,
    pub anchors: TimingAnchors,
    /// Telescope ids whose events are kept; events from other ids are dropped.
    pub allowed_tels: BTreeSet<u16>,
}

/// The single delegating call the driver makes.
pub trait Dl1Converter {
    fn convert(&self, request: &ConversionRequest) -> Result<()>;
}
