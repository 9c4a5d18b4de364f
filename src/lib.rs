#![doc = r#"
r0dl1 — driver for converting raw LST telescope data (R0) to DL1.

This crate provides the glue around the observatory's reconstruction engine:
a typed CLI, JSON configuration handling, deterministic DL1 output naming,
and a packaging-time registrar for console-script entry points. Calibration,
pulse-time correction and image parameterization are the engine's business;
everything the driver collects is forwarded in one [`reco::ConversionRequest`].

Quick start: run a conversion programmatically
----------------------------------------------
```rust,no_run
use std::path::PathBuf;
use r0dl1::{
    Config, ConversionRequest, Dl1Converter, RecoPipeline, TimingAnchors,
    DEFAULT_ALLOWED_TELS,
};

fn main() -> r0dl1::Result<()> {
    let mut config = Config::default();
    config.set_max_events(1_000_000);

    let request = ConversionRequest {
        input_file: PathBuf::from("/data/run1.fits.fz"),
        output_file: PathBuf::from("/out/dl1_run1.fits.h5"),
        config,
        pedestal_file: PathBuf::from("/calib/pedestal.fits"),
        calibration_file: PathBuf::from("/calib/calibration.hdf5"),
        time_calibration_file: PathBuf::from("/calib/time_calibration.hdf5"),
        pointing_file: None,
        anchors: TimingAnchors::default(),
        allowed_tels: DEFAULT_ALLOWED_TELS.into(),
    };

    RecoPipeline::new().convert(&request)
}
```

Timing anchors
--------------
UCTS/TIB/Dragon anchors are optional; an omitted anchor is `None` end to end,
never a NaN sentinel, so "absent" survives comparison and serialization.

Entry-point registrar
---------------------
```rust,no_run
use std::path::Path;

fn main() -> std::io::Result<()> {
    for entry in r0dl1::registrar::console_scripts(Path::new("."))? {
        println!("{entry}");
    }
    Ok(())
}
```

Error handling
--------------
Fallible functions return [`Result`]; match on [`Error`] to handle specific
cases, e.g. an unreadable calibration input. Configuration loading has its
own [`ConfigError`] distinguishing read from parse failures.

Useful modules
--------------
- [`config`] — the key/value mapping handed to the engine.
- [`reco`] — the conversion seam (`ConversionRequest`, `Dl1Converter`).
- [`registrar`] — packaging-time entry-point scanning.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod config;
pub mod error;
pub mod reco;
pub mod registrar;

// Curated public API surface
pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use reco::{
    ConversionRequest, DEFAULT_ALLOWED_TELS, Dl1Converter, RecoPipeline, TimingAnchors,
};
