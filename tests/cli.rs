//! Runs the `ta_calc` binary against files written to a scratch directory.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use indexmap::IndexMap;
use serde_json::Value;

fn scratch(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ta-dispatch-cli-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn ta_calc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ta_calc"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .unwrap()
}

fn sample_data(test: &str) -> PathBuf {
    let close: Vec<f64> = (1..=10).map(f64::from).collect();
    let json = serde_json::json!({
        "ohlcv": {
            "open": close,
            "high": close.iter().map(|c| c + 1.0).collect::<Vec<_>>(),
            "low": close.iter().map(|c| c - 1.0).collect::<Vec<_>>(),
            "close": close,
            "volume": vec![100.0; 10],
        }
    });
    scratch(&format!("{test}-ohlcv.json"), &json.to_string())
}

#[test]
fn test_positional_indicators() {
    let data = sample_data("positional");
    let output = ta_calc(&[data.to_str().unwrap(), "sma{timeperiod=3}", "Minmaxindex { timeperiod = 4 }"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    let sma = &report["Sma { timeperiod = 3 }"];
    assert_eq!(sma["valid_start_index"], 2);
    assert_eq!(sma["valid_count"], 8);
    assert_eq!(sma["outputs"]["real"][0], 2.0);
    assert_eq!(sma["outputs"]["real"].as_array().map(Vec::len), Some(8));

    let minmax = &report["Minmaxindex { timeperiod = 4 }"];
    assert_eq!(minmax["outputs"]["maxidx"][0], 3);
}

#[test]
fn test_config_file() {
    let data = sample_data("config");
    let config = scratch(
        "config-set.json",
        r#"{"indicators": {"slow": "Sma { timeperiod = 5 }", "fast": "Ema { timeperiod = 2 }"}}"#,
    );
    let output = ta_calc(&[data.to_str().unwrap(), "--config", config.to_str().unwrap()]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let report: IndexMap<String, Value> = serde_json::from_slice(&output.stdout).unwrap();
    let labels: Vec<_> = report.keys().map(String::as_str).collect();
    assert_eq!(labels, ["slow", "fast"]);
    assert_eq!(report["slow"]["valid_start_index"], 4);
}

#[test]
fn test_bad_indicator_text_fails() {
    let data = sample_data("bad");
    let output = ta_calc(&[data.to_str().unwrap(), "Sma { invalid_field = 20 }"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown field 'invalid_field' for Sma"), "{stderr}");
}

#[test]
fn test_usage_and_list() {
    assert_eq!(ta_calc(&[]).status.code(), Some(2));

    let output = ta_calc(&["--list"]);
    assert!(output.status.success());
    let listing = String::from_utf8_lossy(&output.stdout);
    assert_eq!(listing.lines().count(), 161);
    assert!(listing.contains("Sma { timeperiod = int }"));
}
