//! Time engine dispatch for every built-in indicator.
//!
//! Usage:
//!     ta_bench [iterations] [candles]
//!
//! Each supported catalogue entry runs with its default parameters over a
//! seeded random walk. Timings cover binding plus calculation and are
//! printed to stdout as a JSON array.

use std::process::ExitCode;
use std::time::Instant;

use serde::Serialize;
use ta_core::prelude::*;
use ta_indicators::Builtin;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_ITERATIONS: usize = 20;
const DEFAULT_CANDLES: usize = 10_000;
const SEED: u64 = 12_345;

#[derive(Debug, Serialize)]
struct BenchmarkResult {
    name: &'static str,
    function: &'static str,
    candles: usize,
    iterations: usize,
    total_time_ms: f64,
    avg_time_ms: f64,
    min_time_ms: f64,
    max_time_ms: f64,
    throughput_candles_per_sec: f64,
}

/// Random-walk bars from a 64-bit LCG, so runs are comparable.
fn synthetic(candles: usize, seed: u64) -> Ohlcv {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    };

    let mut close = 100.0_f64;
    (0..candles)
        .map(|_| {
            let open = close;
            close = (open * (1.0 + (next() - 0.5) * 0.04)).max(0.01);
            let high = open.max(close) * (1.0 + next() * 0.01);
            let low = open.min(close) * (1.0 - next() * 0.01);
            Bar::new(open, high, low, close, 1_000.0 + next() * 9_000.0)
        })
        .collect()
}

fn benchmark(indicator: Indicator, data: &Ohlcv, iterations: usize) -> Result<BenchmarkResult, Error> {
    let shape = indicator.shape();
    let mut buffers = shape.allocate_outputs(data.len());
    let mut times = Vec::with_capacity(iterations);

    for _ in 0..iterations {
        let start = Instant::now();
        let call = bind(indicator, data.inputs_for(shape), buffers.iter_mut().map(SeriesBuf::as_output))?;
        ta_indicators::calculate(call)?;
        times.push(start.elapsed().as_secs_f64() * 1000.0);
    }

    let total_time: f64 = times.iter().sum();
    let avg_time = total_time / iterations as f64;
    let min_time = times.iter().copied().fold(f64::INFINITY, f64::min);
    let max_time = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let throughput = if avg_time > 0.0 {
        (data.len() as f64 / avg_time) * 1000.0
    } else {
        0.0
    };

    Ok(BenchmarkResult {
        name: indicator.name(),
        function: indicator.kind().function_name(),
        candles: data.len(),
        iterations,
        total_time_ms: total_time,
        avg_time_ms: avg_time,
        min_time_ms: min_time,
        max_time_ms: max_time,
        throughput_candles_per_sec: throughput,
    })
}

fn count_arg(arg: Option<String>, default: usize) -> Option<usize> {
    match arg {
        None => Some(default),
        Some(text) => text.parse().ok().filter(|n| *n > 0),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(iterations), Some(candles)) = (
        count_arg(args.next(), DEFAULT_ITERATIONS),
        count_arg(args.next(), DEFAULT_CANDLES),
    ) else {
        eprintln!("Usage: ta_bench [iterations] [candles]");
        return ExitCode::from(2);
    };

    if let Err(err) = ta_indicators::initialize() {
        tracing::error!(%err, "initialization failed");
        return ExitCode::FAILURE;
    }

    let data = synthetic(candles, SEED);
    tracing::info!(candles, iterations, "benchmarking built-in indicators");

    let mut results = Vec::new();
    for kind in IndicatorKind::ALL {
        if !Builtin::supports(*kind) {
            tracing::debug!(indicator = kind.name(), "not built in, skipped");
            continue;
        }
        match benchmark(kind.default_indicator(), &data, iterations) {
            Ok(result) => {
                tracing::debug!(indicator = result.name, avg_ms = result.avg_time_ms, "timed");
                results.push(result);
            }
            Err(err) => tracing::warn!(indicator = kind.name(), %err, "benchmark failed"),
        }
    }
    tracing::info!(timed = results.len(), "done");

    match serde_json::to_string(&results) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "failed to serialize results");
            ExitCode::FAILURE
        }
    }
}
