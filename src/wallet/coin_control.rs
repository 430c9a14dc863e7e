// Bitcoin Dev Kit
//
// Copyright (c) 2020-2021 Bitcoin Dev Kit Developers
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Coin control
//!
//! This module defines [`CoinControl`], the set of overrides a caller hands to the wallet when
//! building a transaction: which coins are pinned for spending, whether other coins may be added,
//! which fee policy applies and where change is returned.
//!
//! A [`CoinControl`] is owned by a single transaction building request. It is a plain value: it
//! never fails and never performs any I/O. The checks that depend on how it is consumed live in
//! [`coin_selection`](super::coin_selection) and [`fee`](super::fee).

use bitcoin::{OutPoint, Script};
use log::trace;
use serde::{Deserialize, Serialize};

use super::pinned::PinnedOutputs;
use crate::types::{CoinType, FeeEstimateMode, FeeRate};

/// How pinned outputs relate to the rest of the wallet's coins
///
/// This is a read-only view over [`CoinControl::allow_other_inputs`] and
/// [`CoinControl::require_all_inputs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputPolicy {
    /// Only the pinned outputs can be spent
    OnlyPinned,
    /// Every pinned output must be spent, other coins can be added
    PinnedRequired,
    /// Pinned outputs are preferred but only as many as necessary are spent, other coins can be
    /// added
    PinnedPreferred,
}

/// Coin selection constraints for a single transaction
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CoinControl {
    /// Where change is sent, the wallet picks a change address if `None`
    pub change_destination: Option<Script>,
    /// Where asset change is sent, the wallet picks a change address if `None`
    pub asset_change_destination: Option<Script>,
    /// If `false`, only the pinned outputs can be spent
    pub allow_other_inputs: bool,
    /// If `false`, only as many pinned outputs as necessary are spent. Only meaningful together
    /// with `allow_other_inputs`
    pub require_all_inputs: bool,
    /// Include watch-only outputs that the wallet knows how to solve
    pub allow_watch_only: bool,
    /// Use `fee_rate` verbatim and skip the min/max checks, `fee_rate` must be set if `true`
    pub override_fee_rate: bool,
    /// Override the wallet's fee rate if set
    pub fee_rate: Option<FeeRate>,
    /// Override the discard fee rate if set
    pub discard_fee_rate: Option<FeeRate>,
    /// Override the default confirmation target if set
    pub confirm_target: Option<u32>,
    /// Avoid partial use of funds sent to a given address
    pub avoid_partial_spends: bool,
    /// Mode passed to the fee estimator
    pub fee_estimate_mode: FeeEstimateMode,
    /// Minimum number of confirmations for a coin to be available
    pub min_depth: u32,
    /// Kind of coins that can be used
    pub coin_type: CoinType,
    pinned: PinnedOutputs<()>,
    // labelled with the selected asset id
    pinned_assets: PinnedOutputs<String>,
}

impl Default for CoinControl {
    fn default() -> Self {
        CoinControl {
            change_destination: None,
            asset_change_destination: None,
            allow_other_inputs: true,
            require_all_inputs: true,
            allow_watch_only: false,
            override_fee_rate: false,
            fee_rate: None,
            discard_fee_rate: None,
            confirm_target: None,
            avoid_partial_spends: false,
            fee_estimate_mode: FeeEstimateMode::default(),
            min_depth: 0,
            coin_type: CoinType::default(),
            pinned: PinnedOutputs::new(),
            pinned_assets: PinnedOutputs::new(),
        }
    }
}

impl CoinControl {
    /// Create a new [`CoinControl`] with every option set to its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every option to its default
    ///
    /// The coin type filter is only reset if `reset_coin_type` is `true`.
    pub fn reset(&mut self, reset_coin_type: bool) {
        let coin_type = self.coin_type;
        *self = CoinControl::default();
        if !reset_coin_type {
            self.coin_type = coin_type;
        }

        trace!("coin control reset, coin type {:?}", self.coin_type);
    }

    /// Whether any output has been pinned
    pub fn has_selected(&self) -> bool {
        !self.pinned.is_empty()
    }

    /// Whether any asset output has been pinned
    pub fn has_asset_selected(&self) -> bool {
        !self.pinned_assets.is_empty()
    }

    /// Whether `outpoint` is pinned
    pub fn is_selected(&self, outpoint: &OutPoint) -> bool {
        self.pinned.contains(outpoint)
    }

    /// Whether `outpoint` is pinned as an asset output
    pub fn is_asset_selected(&self, outpoint: &OutPoint) -> bool {
        self.pinned_assets.contains(outpoint)
    }

    /// Pin `outpoint` for spending
    pub fn select(&mut self, outpoint: OutPoint) {
        if self.pinned.insert(outpoint) {
            trace!("pinned {}", outpoint);
        }
    }

    /// Pin `outpoint` as an output of the selected asset
    pub fn select_asset(&mut self, outpoint: OutPoint) {
        if self.pinned_assets.insert(outpoint) {
            trace!("pinned asset output {}", outpoint);
        }
    }

    /// Unpin `outpoint`
    pub fn unselect(&mut self, outpoint: &OutPoint) {
        if self.pinned.remove(outpoint) {
            trace!("unpinned {}", outpoint);
        }
    }

    /// Unpin the asset output `outpoint`
    ///
    /// Once no asset output is left pinned the selected asset is cleared as well.
    pub fn unselect_asset(&mut self, outpoint: &OutPoint) {
        if self.pinned_assets.remove(outpoint) {
            trace!("unpinned asset output {}", outpoint);
        }
    }

    /// Unpin every output, including asset outputs, and clear the selected asset
    pub fn unselect_all(&mut self) {
        self.pinned.clear();
        self.pinned_assets.clear();
    }

    /// List the pinned outputs, in no particular order
    pub fn list_selected(&self) -> Vec<OutPoint> {
        self.pinned.to_vec()
    }

    /// List the pinned asset outputs, in no particular order
    pub fn list_selected_assets(&self) -> Vec<OutPoint> {
        self.pinned_assets.to_vec()
    }

    /// Id of the asset whose outputs are pinned, empty if none
    pub fn selected_asset(&self) -> &str {
        self.pinned_assets.label()
    }

    /// Set the id of the asset whose outputs are pinned
    pub fn set_selected_asset<S: Into<String>>(&mut self, asset_id: S) -> &mut Self {
        self.pinned_assets.set_label(asset_id.into());
        self
    }

    /// Only allow fully mixed coins if `enable`, otherwise allow every coin
    pub fn set_mixing_only(&mut self, enable: bool) -> &mut Self {
        self.coin_type = if enable {
            CoinType::OnlyFullyMixed
        } else {
            CoinType::AllCoins
        };
        self
    }

    /// Whether only fully mixed coins are allowed
    pub fn is_mixing_only(&self) -> bool {
        self.coin_type == CoinType::OnlyFullyMixed
    }

    /// Force `fee_rate`, skipping fee estimation
    pub fn set_fee_rate_override(&mut self, fee_rate: FeeRate) -> &mut Self {
        self.override_fee_rate = true;
        self.fee_rate = Some(fee_rate);
        self
    }

    /// How pinned outputs combine with the rest of the wallet's coins
    pub fn input_policy(&self) -> InputPolicy {
        match (self.allow_other_inputs, self.require_all_inputs) {
            (false, _) => InputPolicy::OnlyPinned,
            (true, true) => InputPolicy::PinnedRequired,
            (true, false) => InputPolicy::PinnedPreferred,
        }
    }

    pub(crate) fn pinned(&self) -> &PinnedOutputs<()> {
        &self.pinned
    }

    pub(crate) fn pinned_assets(&self) -> &PinnedOutputs<String> {
        &self.pinned_assets
    }
}
