//! Calculate indicators over an OHLCV file and print the results as JSON.
//!
//! Usage:
//!     ta_calc <ohlcv.json> <indicator>...
//!     ta_calc <ohlcv.json> --config <set.json>
//!     ta_calc --list
//!
//! The data file holds `{"ohlcv": {"open": [...], "high": [...], ...}}` or the
//! columns directly. `open` and `volume` may be omitted when no requested
//! indicator reads them. Each result carries only the valid positions of
//! every output, keyed by output name.

use std::error::Error as StdError;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ta_core::prelude::*;
use ta_core::{codec, ConfigError, IndicatorSet};
use ta_indicators::Builtin;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const USAGE: &str = "\
Usage:
    ta_calc <ohlcv.json> <indicator>...
    ta_calc <ohlcv.json> --config <set.json>
    ta_calc --list";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid arguments")]
    Usage,

    #[error("failed to read {path}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid OHLCV data in {path}")]
    Data {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid indicator set")]
    Config(#[from] ConfigError),

    #[error("failed to initialize the math library")]
    Init(#[from] CalcError),

    #[error("{label}")]
    Indicator {
        label: String,
        #[source]
        source: Error,
    },

    #[error("failed to encode results")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write to stdout")]
    Write(#[from] io::Error),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DataFile {
    Wrapped { ohlcv: Ohlcv },
    Bare(Ohlcv),
}

impl From<DataFile> for Ohlcv {
    fn from(file: DataFile) -> Self {
        match file {
            DataFile::Wrapped { ohlcv } | DataFile::Bare(ohlcv) => ohlcv,
        }
    }
}

#[derive(Serialize)]
struct Report {
    #[serde(flatten)]
    result: CalcResult,
    outputs: IndexMap<&'static str, SeriesBuf>,
}

impl Report {
    fn new(indicator: &Indicator, result: CalcResult, buffers: &[SeriesBuf]) -> Self {
        let outputs = indicator
            .shape()
            .outputs
            .iter()
            .zip(buffers)
            .filter_map(|(spec, buffer)| Some((spec.name, buffer.slice(result.range())?)))
            .collect();
        Self { result, outputs }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run(std::env::args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Usage) => {
            eprintln!("{USAGE}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("error: {}", chain(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> Result<(), CliError> {
    let (first, rest) = args.split_first().ok_or(CliError::Usage)?;
    if first == "--list" {
        return list();
    }

    let set = match rest {
        [] => return Err(CliError::Usage),
        [flag, path] if flag == "--config" => IndicatorSet::from_path(path)?,
        specs => parse_specs(specs)?,
    };
    let data = load_ohlcv(first)?;
    tracing::info!(bars = data.len(), indicators = set.len(), "loaded {first}");

    ta_indicators::initialize()?;
    let mut reports = IndexMap::with_capacity(set.len());
    for (label, indicator) in set.iter() {
        let (result, buffers) =
            ta_indicators::calculate_ohlcv(*indicator, &data).map_err(|source| CliError::Indicator {
                label: label.to_owned(),
                source,
            })?;
        tracing::debug!(label, start = result.valid_start_index, count = result.valid_count, "calculated");
        reports.insert(label.to_owned(), Report::new(indicator, result, &buffers));
    }

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &reports)?;
    writeln!(stdout)?;
    Ok(())
}

/// Parse positional indicator texts, labelling each by its canonical form.
fn parse_specs(specs: &[String]) -> Result<IndicatorSet, CliError> {
    let mut set = IndicatorSet::new();
    for spec in specs {
        let indicator = codec::parse(spec).map_err(|source| CliError::Indicator {
            label: spec.clone(),
            source: source.into(),
        })?;
        set.insert(codec::render(&indicator), indicator);
    }
    Ok(set)
}

fn load_ohlcv(path: &str) -> Result<Ohlcv, CliError> {
    let json = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })?;
    let file: DataFile = serde_json::from_str(&json).map_err(|source| CliError::Data {
        path: path.to_owned(),
        source,
    })?;
    let data = Ohlcv::from(file);
    if !data.is_aligned() {
        tracing::warn!(path, "OHLCV columns differ in length; indicators reading short columns will fail");
    }
    Ok(data)
}

fn list() -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    for kind in IndicatorKind::ALL {
        let marker = if Builtin::supports(*kind) { ' ' } else { '-' };
        writeln!(
            stdout,
            "{marker} {:<20} {:<16} {}  {}",
            kind.function_name(),
            kind.group().name(),
            codec::expected_form(*kind),
            kind.shape()
        )?;
    }
    Ok(())
}

/// An error followed by each of its causes.
fn chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
