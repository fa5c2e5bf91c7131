//! Named indicator sets loaded from JSON.
//!
//! ```json
//! {
//!   "indicators": {
//!     "fast": "Ema { timeperiod = 12 }",
//!     "bands": "Bbands { timeperiod = 20; nbdevup = 2.0; nbdevdn = 2.0; matype = SMA }"
//!   }
//! }
//! ```
//!
//! Entries keep their file order. Every entry is parsed with the textual
//! codec; the first invalid entry fails the whole load.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalogue::Indicator;
use crate::codec;
use crate::error::ConfigError;

#[derive(Deserialize)]
struct RawSet {
    indicators: IndexMap<String, String>,
}

#[derive(Serialize)]
struct RenderedSet<'a> {
    indicators: IndexMap<&'a str, String>,
}

/// An ordered set of labelled indicators.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IndicatorSet {
    entries: IndexMap<String, Indicator>,
}

impl IndicatorSet {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a set from JSON text.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] for malformed JSON, [`ConfigError::Indicator`]
    /// for the first entry whose text does not parse.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: RawSet = serde_json::from_str(json)?;
        let mut entries = IndexMap::with_capacity(raw.indicators.len());
        for (label, text) in raw.indicators {
            match codec::parse(&text) {
                Ok(indicator) => {
                    entries.insert(label, indicator);
                }
                Err(source) => return Err(ConfigError::Indicator { label, source }),
            }
        }
        tracing::debug!(count = entries.len(), "indicator set loaded");
        Ok(Self { entries })
    }

    /// Read and parse a set from a JSON file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] when the file cannot be read, otherwise as
    /// [`from_json_str`](Self::from_json_str).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Canonical JSON, one rendered indicator per label.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] if serialisation fails.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        let rendered = RenderedSet {
            indicators: self
                .entries
                .iter()
                .map(|(label, indicator)| (label.as_str(), codec::render(indicator)))
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&rendered)?)
    }

    /// Add or replace an entry, returning the previous indicator.
    pub fn insert(&mut self, label: impl Into<String>, indicator: Indicator) -> Option<Indicator> {
        self.entries.insert(label.into(), indicator)
    }

    /// Indicator stored under `label`.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&Indicator> {
        self.entries.get(label)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Indicator)> {
        self.entries.iter().map(|(label, indicator)| (label.as_str(), indicator))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Indicator)> for IndicatorSet {
    fn from_iter<I: IntoIterator<Item = (S, Indicator)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(label, indicator)| (label.into(), indicator)).collect(),
        }
    }
}
