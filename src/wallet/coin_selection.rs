// Bitcoin Dev Kit
//
// Copyright (c) 2020-2021 Bitcoin Dev Kit Developers
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Coin selection inputs
//!
//! The coin selection algorithm is not part of this crate. What it receives from a
//! [`CoinControl`] is computed here: the wallet's coins are split into the ones that *must* be
//! spent and the ones that *may* be spent, according to the pinned outputs and the filters.
//!
//! ## Example
//!
//! ```
//! # use std::str::FromStr;
//! # use bitcoin::OutPoint;
//! use coin_control::{Candidate, CoinClass, CoinControl};
//!
//! let pinned = OutPoint::from_str(
//!     "ebd9813ecebc57ff8f30797de7c205e3c7498ca950ea4341ee51a685ff2fa30a:0",
//! )?;
//! let other = OutPoint::from_str(
//!     "65d92ddff6b6dc72c89624a6491997714b90f6004f928d875bc0fd53f264fa85:0",
//! )?;
//! let candidates = vec![
//!     Candidate::new(pinned, 100_000, 1, CoinClass::Standard),
//!     Candidate::new(other, 50_000, 0, CoinClass::Standard),
//! ];
//!
//! let mut coin_control = CoinControl::new();
//! coin_control.select(pinned);
//! coin_control.min_depth = 1;
//!
//! let split = coin_control.split_candidates(candidates)?;
//! assert_eq!(split.must_use.len(), 1);
//! // the unconfirmed coin is filtered out
//! assert!(split.may_use.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::HashSet;

use bitcoin::OutPoint;
use log::debug;
use serde::{Deserialize, Serialize};

use super::coin_control::{CoinControl, InputPolicy};
use super::pinned::PinnedOutputs;
use crate::error::Error;
use crate::types::CoinClass;

/// A wallet coin that can be considered for spending
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    /// Reference to the output
    pub outpoint: OutPoint,
    /// Value of the output (sats)
    pub value: u64,
    /// Number of confirmations, `0` means unconfirmed
    pub depth: u32,
    /// Classification of the coin
    pub class: CoinClass,
    /// The wallet can solve but not sign for this output
    pub watch_only: bool,
    /// Asset carried by the output, `None` for the base asset
    pub asset: Option<String>,
}

impl Candidate {
    /// Create a base asset [`Candidate`] the wallet can sign for
    pub fn new(outpoint: OutPoint, value: u64, depth: u32, class: CoinClass) -> Self {
        Candidate {
            outpoint,
            value,
            depth,
            class,
            watch_only: false,
            asset: None,
        }
    }
}

/// Coins handed to the coin selection algorithm
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitCandidates {
    /// Coins that have to be spent
    pub must_use: Vec<Candidate>,
    /// Coins that can be spent if needed, pinned ones first
    pub may_use: Vec<Candidate>,
    /// Spend every output of an address together
    pub avoid_partial_spends: bool,
}

impl SplitCandidates {
    /// Value of the coins that have to be spent
    pub fn must_use_value(&self) -> u64 {
        sum_values(&self.must_use)
    }

    /// Value of every coin available to the algorithm, saturating at `u64::MAX`
    pub fn total_value(&self) -> u64 {
        self.must_use_value()
            .saturating_add(sum_values(&self.may_use))
    }

    /// Fail with [`Error::InsufficientFunds`] if the available coins can't cover `needed`
    pub fn ensure_covers(&self, needed: u64) -> Result<(), Error> {
        let available = self.total_value();
        if available < needed {
            return Err(Error::InsufficientFunds { needed, available });
        }
        Ok(())
    }
}

fn sum_values(coins: &[Candidate]) -> u64 {
    coins
        .iter()
        .fold(0u64, |sum, c| sum.saturating_add(c.value))
}

impl CoinControl {
    /// Split the wallet's base asset coins into must-use and may-use coins
    ///
    /// Only coins without an asset are considered, pinned or not, and an outpoint listed more than
    /// once is only kept the first time. Pinned outputs skip the other filters. With
    /// [`InputPolicy::PinnedRequired`] they have to be spent, with [`InputPolicy::PinnedPreferred`]
    /// they come first among the coins that may be spent. Other coins are only considered if the
    /// policy allows it and if they pass the depth, watch-only and coin type filters.
    ///
    /// Returns [`Error::UnknownUtxo`] if a pinned outpoint is not among the base asset
    /// `candidates`, and [`Error::NoUtxosSelected`] if only pinned outputs may be spent but none
    /// is pinned.
    pub fn split_candidates<I>(&self, candidates: I) -> Result<SplitCandidates, Error>
    where
        I: IntoIterator<Item = Candidate>,
    {
        self.split_pinned(self.pinned(), candidates, |c| c.asset.is_none())
    }

    /// Same as [`CoinControl::split_candidates`] for the outputs of the selected asset
    ///
    /// Only coins carrying the selected asset are considered, so pinned asset outputs are reported
    /// as [`Error::UnknownUtxo`] while no asset is selected.
    pub fn split_asset_candidates<I>(&self, candidates: I) -> Result<SplitCandidates, Error>
    where
        I: IntoIterator<Item = Candidate>,
    {
        let asset = self.selected_asset();
        self.split_pinned(self.pinned_assets(), candidates, |c| {
            !asset.is_empty() && c.asset.as_deref() == Some(asset)
        })
    }

    fn split_pinned<L, I, F>(
        &self,
        pinned: &PinnedOutputs<L>,
        candidates: I,
        same_asset: F,
    ) -> Result<SplitCandidates, Error>
    where
        L: Default,
        I: IntoIterator<Item = Candidate>,
        F: Fn(&Candidate) -> bool,
    {
        let policy = self.input_policy();
        if policy == InputPolicy::OnlyPinned && pinned.is_empty() {
            return Err(Error::NoUtxosSelected);
        }

        let mut seen = HashSet::new();
        let mut pinned_coins = vec![];
        let mut other_coins = vec![];
        for candidate in candidates {
            // coins of another asset never cross over, even when pinned
            if !same_asset(&candidate) || !seen.insert(candidate.outpoint) {
                continue;
            }

            if pinned.contains(&candidate.outpoint) {
                pinned_coins.push(candidate);
            } else if policy != InputPolicy::OnlyPinned && self.is_eligible(&candidate) {
                other_coins.push(candidate);
            }
        }

        if let Some(missing) = pinned.iter().find(|outpoint| !seen.contains(*outpoint)) {
            return Err(Error::UnknownUtxo(*missing));
        }

        let (must_use, may_use) = match policy {
            InputPolicy::OnlyPinned => (pinned_coins, vec![]),
            InputPolicy::PinnedRequired => (pinned_coins, other_coins),
            InputPolicy::PinnedPreferred => {
                pinned_coins.extend(other_coins);
                (vec![], pinned_coins)
            }
        };

        debug!(
            "{:?}: {} must use, {} may use",
            policy,
            must_use.len(),
            may_use.len()
        );

        Ok(SplitCandidates {
            must_use,
            may_use,
            avoid_partial_spends: self.avoid_partial_spends,
        })
    }

    /// Whether an unpinned coin passes the filters
    fn is_eligible(&self, candidate: &Candidate) -> bool {
        if candidate.depth < self.min_depth {
            return false;
        }

        if candidate.watch_only && !self.allow_watch_only {
            return false;
        }

        self.coin_type.admits(candidate.class)
    }
}
