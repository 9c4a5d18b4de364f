use clap::Parser;
use std::path::PathBuf;

/// Flag names keep the underscore spelling of the observatory's existing
/// tooling; the historical single-dash long options survive as aliases
/// (`--pedestal`, `--calib`, ...).
#[derive(Parser, Debug)]
#[command(name = "r0dl1", version, about = "R0 to DL1")]
pub struct CliArgs {
    /// Path to the .fits.fz file with the raw events
    #[arg(short = 'f', long = "input_file")]
    pub input_file: PathBuf,

    /// Path where to store the reco dl1 events
    #[arg(short = 'o', long = "output_dir", default_value = "./dl1_data/")]
    pub output_dir: PathBuf,

    /// Path to a pedestal file
    #[arg(long = "pedestal_file", alias = "pedestal")]
    pub pedestal_file: PathBuf,

    /// Path to a calibration file
    #[arg(long = "calibration_file", alias = "calib")]
    pub calibration_file: PathBuf,

    /// Path to a calibration file for pulse time correction
    #[arg(long = "time_calibration_file", alias = "time_calib")]
    pub time_calibration_file: PathBuf,

    /// Path to a configuration file. If none is given, a standard
    /// configuration is applied
    #[arg(long = "config_file", alias = "conf")]
    pub config_file: Option<PathBuf>,

    /// Path to the Drive log file with the pointing information
    #[arg(long = "pointing_file_file", alias = "pointing")]
    pub pointing_file: Option<PathBuf>,

    /// UCTS timestamp in nsecs (unix format, TAI scale) of the first event
    /// of the run with a valid timestamp. If none is passed, the
    /// start-of-the-run timestamp is used and the Dragon timestamp is not
    /// reliable
    #[arg(long = "ucts_t0_dragon")]
    pub ucts_t0_dragon: Option<f64>,

    /// Dragon counter (pps + 10MHz) in nsecs corresponding to the first
    /// reliable UCTS of the run. To be provided along with --ucts_t0_dragon
    #[arg(long = "dragon_counter0")]
    pub dragon_counter0: Option<f64>,

    /// UCTS timestamp in nsecs (unix format, TAI scale) of the first event
    /// of the run with a valid TIB timestamp
    #[arg(long = "ucts_t0_tib")]
    pub ucts_t0_tib: Option<f64>,

    /// First valid TIB counter (pps + 10MHz) in nsecs corresponding to the
    /// first reliable UCTS of the run when TIB is available. To be provided
    /// along with --ucts_t0_tib
    #[arg(long = "tib_counter0")]
    pub tib_counter0: Option<f64>,

    /// Maximum number of events to be processed
    #[arg(long = "max_events", alias = "maxevts", default_value_t = 1_000_000_000_000_000)]
    pub max_events: u64,
}
