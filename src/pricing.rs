//! # Pricing Module
//!
//! Blended per-token rates used for the cost estimate line.
//!
//! The profile mixes models, so the estimate uses flat averaged rates rather
//! than a per-model table: cache writes are billed at the input rate and
//! cache reads at a 90% discount.
//!
//! Rates can be overridden individually via environment variables:
//! - `NFOGEN_RATE_INPUT`
//! - `NFOGEN_RATE_OUTPUT`
//! - `NFOGEN_RATE_CACHE_READ`

use std::env;

/// Averaged input rate in USD per token ($10 / 1M).
pub const DEFAULT_INPUT_RATE: f64 = 10e-6;
/// Averaged output rate in USD per token ($30 / 1M).
pub const DEFAULT_OUTPUT_RATE: f64 = 30e-6;
/// Cache read rate in USD per token ($1 / 1M).
pub const DEFAULT_CACHE_READ_RATE: f64 = 1e-6;

#[derive(Clone, Copy, Debug)]
pub struct Rates {
    pub input_per_tok: f64,
    pub output_per_tok: f64,
    pub cache_read_per_tok: f64,
}

impl Default for Rates {
    fn default() -> Self {
        Rates {
            input_per_tok: DEFAULT_INPUT_RATE,
            output_per_tok: DEFAULT_OUTPUT_RATE,
            cache_read_per_tok: DEFAULT_CACHE_READ_RATE,
        }
    }
}

impl Rates {
    /// Resolve rates from the environment, falling back to the defaults
    /// for any variable that is unset or unparsable.
    pub fn from_env() -> Self {
        let mut rates = Rates::default();
        if let Some(v) = parse_rate_env("NFOGEN_RATE_INPUT") {
            rates.input_per_tok = v;
        }
        if let Some(v) = parse_rate_env("NFOGEN_RATE_OUTPUT") {
            rates.output_per_tok = v;
        }
        if let Some(v) = parse_rate_env("NFOGEN_RATE_CACHE_READ") {
            rates.cache_read_per_tok = v;
        }
        rates
    }

    /// Cost estimate in USD. Cache creation tokens bill like input tokens.
    pub fn estimate(&self, input: u64, output: u64, cache_creation: u64, cache_read: u64) -> f64 {
        (input + cache_creation) as f64 * self.input_per_tok
            + output as f64 * self.output_per_tok
            + cache_read as f64 * self.cache_read_per_tok
    }
}

fn parse_rate_env(var: &str) -> Option<f64> {
    env::var(var)
        .ok()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
}
