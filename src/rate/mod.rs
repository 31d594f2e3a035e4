// SPDX-License-Identifier: MPL-2.0
//! BTC/USD exchange rate state and the remote price feed.
//!
//! The rate starts absent and is overwritten whole by whichever source
//! succeeds last, remote fetch or manual entry. A failed fetch or an
//! invalid manual entry leaves the previous value untouched.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::time::Duration;

/// Fixed price endpoint; the response carries the rate under
/// `bitcoin.usd`. Overridable through `settings.toml`.
pub const DEFAULT_ENDPOINT: &str =
    "https://api.coingecko.com/api/v3/simple/price?ids=bitcoin&vs_currencies=usd";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("SatNotes/", env!("CARGO_PKG_VERSION"));

/// The currently known exchange rate, if any.
#[derive(Debug, Clone, Default)]
pub struct RateState {
    current: Option<f64>,
}

impl RateState {
    /// The latest successfully set rate, absent until one arrives.
    #[must_use]
    pub fn current(&self) -> Option<f64> {
        self.current
    }

    /// Parses free-form text as a manual rate entry.
    ///
    /// A value that fails to parse, is non-finite, or is not strictly
    /// positive leaves the existing rate unchanged and reports failure.
    pub fn set_manual(&mut self, text: &str) -> bool {
        match text.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => {
                self.current = Some(value);
                true
            }
            _ => false,
        }
    }

    /// Applies the outcome of a remote fetch. `None` (a failed fetch)
    /// keeps the prior rate.
    pub fn apply_fetched(&mut self, fetched: Option<f64>) {
        if let Some(rate) = fetched {
            self.current = Some(rate);
        }
    }
}

#[derive(Debug, Deserialize)]
struct PriceResponse {
    bitcoin: BitcoinPrice,
}

#[derive(Debug, Deserialize)]
struct BitcoinPrice {
    usd: f64,
}

/// Fetches the current BTC/USD rate from `endpoint`.
///
/// Every failure mode (client build, network, HTTP status, body shape,
/// non-positive value) logs a warning and resolves to `None`; nothing is
/// thrown past this boundary.
pub async fn fetch_remote(endpoint: &str) -> Option<f64> {
    match request_rate(endpoint).await {
        Ok(rate) => Some(rate),
        Err(err) => {
            eprintln!("Rate fetch failed: {err}");
            None
        }
    }
}

async fn request_rate(endpoint: &str) -> Result<f64> {
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|err| Error::Fetch(err.to_string()))?;

    let response = client
        .get(endpoint)
        .send()
        .await
        .map_err(|err| Error::Fetch(err.to_string()))?;

    if !response.status().is_success() {
        return Err(Error::Fetch(format!("HTTP status {}", response.status())));
    }

    let parsed: PriceResponse = response
        .json()
        .await
        .map_err(|err| Error::Fetch(format!("unexpected response shape: {err}")))?;

    let rate = parsed.bitcoin.usd;
    if !rate.is_finite() || rate <= 0.0 {
        return Err(Error::Fetch(format!("non-positive rate: {rate}")));
    }

    Ok(rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_starts_absent() {
        assert_eq!(RateState::default().current(), None);
    }

    #[test]
    fn manual_entry_sets_positive_rate() {
        let mut state = RateState::default();
        assert!(state.set_manual("45000"));
        assert_eq!(state.current(), Some(45_000.0));
    }

    #[test]
    fn manual_entry_trims_whitespace() {
        let mut state = RateState::default();
        assert!(state.set_manual("  102.5 "));
        assert_eq!(state.current(), Some(102.5));
    }

    #[test]
    fn invalid_manual_entry_keeps_prior_rate() {
        let mut state = RateState::default();
        state.set_manual("45000");

        for bad in ["abc", "", "0", "-1", "NaN", "inf"] {
            assert!(!state.set_manual(bad), "{bad:?} should be rejected");
            assert_eq!(state.current(), Some(45_000.0));
        }
    }

    #[test]
    fn invalid_manual_entry_on_empty_state_stays_absent() {
        let mut state = RateState::default();
        assert!(!state.set_manual("not a number"));
        assert_eq!(state.current(), None);
    }

    #[test]
    fn fetched_rate_overwrites_manual_rate() {
        let mut state = RateState::default();
        state.set_manual("45000");
        state.apply_fetched(Some(47_123.5));
        assert_eq!(state.current(), Some(47_123.5));
    }

    #[test]
    fn failed_fetch_keeps_prior_rate() {
        let mut state = RateState::default();
        state.set_manual("45000");
        state.apply_fetched(None);
        assert_eq!(state.current(), Some(45_000.0));
    }

    #[test]
    fn response_shape_parses_nested_field() {
        let parsed: PriceResponse =
            serde_json::from_str(r#"{"bitcoin":{"usd":67890.12}}"#).expect("valid shape");
        assert!((parsed.bitcoin.usd - 67_890.12).abs() < f64::EPSILON);

        assert!(serde_json::from_str::<PriceResponse>(r#"{"bitcoin":{}}"#).is_err());
        assert!(serde_json::from_str::<PriceResponse>(r#"{"usd":1.0}"#).is_err());
    }

    #[tokio::test]
    async fn fetch_against_unreachable_endpoint_is_absent() {
        // Port 1 is reserved and closed; the fetch must swallow the error.
        let rate = fetch_remote("http://127.0.0.1:1/price").await;
        assert_eq!(rate, None);
    }
}
