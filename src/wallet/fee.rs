// Bitcoin Dev Kit
//
// Copyright (c) 2020-2021 Bitcoin Dev Kit Developers
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Fee policy
//!
//! Resolves the fee rate a transaction should pay from the overrides of a [`CoinControl`] and a
//! [`FeeEstimator`].

use log::debug;

use super::coin_control::CoinControl;
use crate::error::Error;
use crate::types::{FeeEstimateMode, FeeRate};

/// Source of fee rate estimates, usually backed by a node or an indexer
pub trait FeeEstimator {
    /// Estimate the fee rate required to confirm within `confirm_target` blocks
    ///
    /// A `None` target lets the estimator use its own default.
    fn estimate_fee(
        &self,
        confirm_target: Option<u32>,
        mode: FeeEstimateMode,
    ) -> Result<FeeRate, Error>;
}

/// A constant estimate
impl FeeEstimator for FeeRate {
    fn estimate_fee(&self, _: Option<u32>, _: FeeEstimateMode) -> Result<FeeRate, Error> {
        Ok(*self)
    }
}

impl CoinControl {
    /// Fail with [`Error::FeeRateRequired`] if `override_fee_rate` is set without a `fee_rate`
    pub fn check_fee_policy(&self) -> Result<(), Error> {
        if self.override_fee_rate && self.fee_rate.is_none() {
            return Err(Error::FeeRateRequired);
        }
        Ok(())
    }

    /// Fee rate the transaction should pay
    ///
    /// An overridden fee rate is returned verbatim and `estimator` is not queried. Otherwise the
    /// explicit `fee_rate`, or the estimate for `confirm_target` and `fee_estimate_mode`, is
    /// used, raised to at least [`FeeRate::default_min_relay_fee`].
    pub fn resolve_fee_rate<E: FeeEstimator>(&self, estimator: &E) -> Result<FeeRate, Error> {
        self.check_fee_policy()?;

        let fee_rate = match (self.override_fee_rate, self.fee_rate) {
            (true, Some(fee_rate)) => return Ok(fee_rate),
            (_, Some(fee_rate)) => fee_rate,
            (_, None) => estimator.estimate_fee(self.confirm_target, self.fee_estimate_mode)?,
        };

        let min_relay = FeeRate::default_min_relay_fee();
        if fee_rate < min_relay {
            debug!(
                "fee rate {} sat/vbyte below min relay fee, using {} sat/vbyte",
                fee_rate.as_sat_per_vb(),
                min_relay.as_sat_per_vb()
            );
            return Ok(min_relay);
        }

        Ok(fee_rate)
    }

    /// Fee rate below which change is dropped and added to the fee
    pub fn resolve_discard_fee_rate(&self, default: FeeRate) -> FeeRate {
        self.discard_fee_rate.unwrap_or(default)
    }
}
