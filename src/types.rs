//! Core configuration types
//!
//! [`PfnetConfig`] carries the three tunables of the network construction
//! (co-occurrence window, relay bound, Minkowski exponent) plus optional
//! runtime limits. It is serde-friendly so it can be loaded from a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PfnetError, Result};

/// Default co-occurrence window width
pub const DEFAULT_WINDOW: usize = 5;

/// Default Minkowski exponent (ordinary path-length addition)
pub const DEFAULT_MINKOWSKI_EXPONENT: f64 = 1.0;

/// Configuration for Pathfinder network construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PfnetConfig {
    /// Number of following tokens counted as co-occurring with a token
    pub window: usize,
    /// Largest vocabulary index allowed to act as a relay (`None` = `n - 1`)
    pub relay_bound: Option<usize>,
    /// Minkowski exponent `r` used to combine two path legs (`r >= 1`)
    #[serde(with = "exponent_serde")]
    pub minkowski_exponent: f64,
    /// Fail-fast guards checked before the quadratic stages
    pub limits: RuntimeLimits,
}

impl Default for PfnetConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            relay_bound: None,
            minkowski_exponent: DEFAULT_MINKOWSKI_EXPONENT,
            limits: RuntimeLimits::default(),
        }
    }
}

impl PfnetConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the co-occurrence window width
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Set the relay bound `q`
    pub fn with_relay_bound(mut self, relay_bound: usize) -> Self {
        self.relay_bound = Some(relay_bound);
        self
    }

    /// Set the Minkowski exponent `r`
    pub fn with_minkowski_exponent(mut self, exponent: f64) -> Self {
        self.minkowski_exponent = exponent;
        self
    }

    /// Set the runtime limits
    pub fn with_limits(mut self, limits: RuntimeLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Relay bound for a vocabulary of `n` items
    pub fn effective_relay_bound(&self, n: usize) -> usize {
        self.relay_bound.unwrap_or_else(|| n.saturating_sub(1))
    }

    /// Check every parameter against its contract
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(PfnetError::invalid("window", "must be at least 1"));
        }
        validate_exponent(self.minkowski_exponent)
    }

    /// Parse a configuration from a JSON document
    ///
    /// Omitted fields take their default values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// Reject exponents for which the Minkowski combination is undefined
pub(crate) fn validate_exponent(exponent: f64) -> Result<()> {
    if exponent.is_nan() || exponent < 1.0 {
        return Err(PfnetError::invalid(
            "minkowski_exponent",
            format!("must be >= 1, got {exponent}"),
        ));
    }
    Ok(())
}

/// Runtime execution limits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeLimits {
    /// Maximum number of input tokens (after preprocessing)
    pub max_tokens: Option<usize>,
    /// Maximum vocabulary size, i.e. matrix dimension
    pub max_nodes: Option<usize>,
}

impl RuntimeLimits {
    pub fn check_tokens(&self, actual: usize) -> Result<()> {
        check_limit("token", self.max_tokens, actual)
    }

    pub fn check_nodes(&self, actual: usize) -> Result<()> {
        check_limit("node", self.max_nodes, actual)
    }
}

fn check_limit(what: &'static str, limit: Option<usize>, actual: usize) -> Result<()> {
    match limit {
        Some(limit) if actual > limit => Err(PfnetError::LimitExceeded {
            what,
            limit,
            actual,
        }),
        _ => Ok(()),
    }
}

/// JSON has no infinity, so an infinite exponent round-trips as `"inf"`.
mod exponent_serde {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_infinite() {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| D::Error::custom(format!("invalid exponent `{text}`"))),
        }
    }
}
