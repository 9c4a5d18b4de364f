use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use r0dl1::config::Config;
use r0dl1::reco::{
    ConversionRequest, DEFAULT_ALLOWED_TELS, Dl1Converter, RecoPipeline, TimingAnchors,
};

use super::args::CliArgs;
use super::errors::AppError;

/// DL1 output path: `dl1_` + the input base name with its last extension
/// stripped + `.h5`, inside `output_dir`.
pub fn dl1_output_path(output_dir: &Path, input_file: &Path) -> PathBuf {
    let name = input_file.file_name().unwrap_or_default().to_string_lossy();
    let stem = match name.rfind('.') {
        Some(i) => &name[..i],
        None => name.as_ref(),
    };
    output_dir.join(format!("dl1_{stem}.h5"))
}

/// Orchestrate one conversion against an injected converter.
///
/// The configuration mapping is built fresh here on every call; the
/// `max_events` overlay never survives into the next invocation.
pub fn run_with<C: Dl1Converter>(args: CliArgs, converter: &C) -> Result<(), AppError> {
    fs::create_dir_all(&args.output_dir)?;
    let output_file = dl1_output_path(&args.output_dir, &args.input_file);

    let mut config = match &args.config_file {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    config.set_max_events(args.max_events);

    let request = ConversionRequest {
        input_file: args.input_file,
        output_file,
        config,
        pedestal_file: args.pedestal_file,
        calibration_file: args.calibration_file,
        time_calibration_file: args.time_calibration_file,
        pointing_file: args.pointing_file,
        anchors: TimingAnchors {
            ucts_t0_dragon: args.ucts_t0_dragon,
            dragon_counter0: args.dragon_counter0,
            ucts_t0_tib: args.ucts_t0_tib,
            tib_counter0: args.tib_counter0,
        },
        allowed_tels: DEFAULT_ALLOWED_TELS.into(),
    };

    info!(
        "Processing: {:?} -> {:?}",
        request.input_file, request.output_file
    );
    converter.convert(&request)?;
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    run_with(args, &RecoPipeline::new())
}
