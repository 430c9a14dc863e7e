// Bitcoin Dev Kit
//
// Copyright (c) 2020-2021 Bitcoin Dev Kit Developers
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Value types shared by [`CoinControl`](crate::CoinControl) and its consumers

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Fee rate
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, PartialOrd)]
// Internally stored as satoshi/vbyte
pub struct FeeRate(f32);

impl FeeRate {
    /// Create a new instance of [`FeeRate`] given a float fee rate in btc/kvbytes
    pub fn from_btc_per_kvb(btc_per_kvb: f32) -> Self {
        FeeRate(btc_per_kvb * 1e5)
    }

    /// Create a new instance of [`FeeRate`] given a float fee rate in satoshi/vbyte
    pub const fn from_sat_per_vb(sat_per_vb: f32) -> Self {
        FeeRate(sat_per_vb)
    }

    /// Create a new [`FeeRate`] with the default min relay fee value
    pub const fn default_min_relay_fee() -> Self {
        FeeRate(1.0)
    }

    /// Return the value as satoshi/vbyte
    pub fn as_sat_per_vb(&self) -> f32 {
        self.0
    }
}

impl std::default::Default for FeeRate {
    fn default() -> Self {
        FeeRate::default_min_relay_fee()
    }
}

/// Strategy the fee estimator should use when no fee rate is forced
///
/// Serialized through [`Display`](fmt::Display) and parsed through [`FromStr`], which ignores
/// case.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum FeeEstimateMode {
    /// Let the estimator pick its own default
    Unset,
    /// Faster reacting estimate, may be lower
    Economical,
    /// Estimate over a longer window, less likely to underpay
    Conservative,
}

impl Default for FeeEstimateMode {
    fn default() -> Self {
        FeeEstimateMode::Unset
    }
}

impl fmt::Display for FeeEstimateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FeeEstimateMode::Unset => "unset",
            FeeEstimateMode::Economical => "economical",
            FeeEstimateMode::Conservative => "conservative",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for FeeEstimateMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unset" => Ok(FeeEstimateMode::Unset),
            "economical" => Ok(FeeEstimateMode::Economical),
            "conservative" => Ok(FeeEstimateMode::Conservative),
            _ => Err(Error::InvalidFeeEstimateMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for FeeEstimateMode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        FeeEstimateMode::from_str(&value)
    }
}

impl From<FeeEstimateMode> for String {
    fn from(mode: FeeEstimateMode) -> Self {
        mode.to_string()
    }
}

/// Restricts the coins eligible for selection to a subset of the wallet
///
/// Serialized as its numeric value; values outside of the known range are rejected with
/// [`Error::InvalidCoinType`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum CoinType {
    /// Every coin (default)
    AllCoins,
    /// Only coins that completed the required mixing rounds
    OnlyFullyMixed,
    /// Only denominated coins that are still waiting to be mixed
    OnlyReadyToMix,
    /// Only coins that are not denominated
    OnlyNonDenominated,
    /// Only coins that lock a service node collateral, including locked ones
    OnlySpecialCollateral,
    /// Only coins suitable as mixing collateral
    OnlyJoinCollateral,
}

impl CoinType {
    /// Every variant, ordered by numeric value
    pub const ALL: [CoinType; 6] = [
        CoinType::AllCoins,
        CoinType::OnlyFullyMixed,
        CoinType::OnlyReadyToMix,
        CoinType::OnlyNonDenominated,
        CoinType::OnlySpecialCollateral,
        CoinType::OnlyJoinCollateral,
    ];

    /// Whether a coin of class `class` is eligible under this filter
    pub fn admits(&self, class: CoinClass) -> bool {
        match self {
            CoinType::AllCoins => true,
            CoinType::OnlyFullyMixed => class == CoinClass::FullyMixed,
            CoinType::OnlyReadyToMix => class == CoinClass::Denominated,
            // collateral amounts are not denominations
            CoinType::OnlyNonDenominated => {
                matches!(class, CoinClass::Standard | CoinClass::JoinCollateral)
            }
            CoinType::OnlySpecialCollateral => class == CoinClass::SpecialCollateral,
            CoinType::OnlyJoinCollateral => class == CoinClass::JoinCollateral,
        }
    }
}

impl Default for CoinType {
    fn default() -> Self {
        CoinType::AllCoins
    }
}

impl TryFrom<u8> for CoinType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        CoinType::ALL
            .get(value as usize)
            .copied()
            .ok_or(Error::InvalidCoinType(value))
    }
}

impl From<CoinType> for u8 {
    fn from(coin_type: CoinType) -> Self {
        coin_type as u8
    }
}

/// Classification of a single coin, as determined by the wallet
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoinClass {
    /// Regular, non-denominated coin
    Standard,
    /// Denominated coin that hasn't completed mixing yet
    Denominated,
    /// Denominated coin that completed mixing
    FullyMixed,
    /// Service node collateral
    SpecialCollateral,
    /// Mixing collateral
    JoinCollateral,
}

impl Default for CoinClass {
    fn default() -> Self {
        CoinClass::Standard
    }
}
