// Bitcoin Dev Kit
//
// Copyright (c) 2020-2021 Bitcoin Dev Kit Developers
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

use std::fmt;

use bitcoin::OutPoint;

/// Errors raised where a [`CoinControl`](crate::CoinControl) is consumed or parsed
///
/// The coin control itself never fails: these are returned by the validation helpers used by
/// coin selection and fee estimation, and by the parsing of its enumerations.
#[derive(Debug)]
pub enum Error {
    /// `override_fee_rate` is set but no `fee_rate` has been provided
    FeeRateRequired,
    /// `allow_other_inputs` is disabled but no utxo has been pinned
    NoUtxosSelected,
    /// A pinned outpoint is not among the coins available to the wallet
    UnknownUtxo(OutPoint),
    /// The coins that may be spent are not enough to cover the requested amount
    InsufficientFunds {
        /// Sats needed for some transaction
        needed: u64,
        /// Sats available for spending
        available: u64,
    },
    /// The fee estimator doesn't have data to estimate a fee rate
    FeeRateUnavailable,
    /// Numeric value that doesn't map to any [`CoinType`](crate::CoinType)
    InvalidCoinType(u8),
    /// String that doesn't map to any [`FeeEstimateMode`](crate::FeeEstimateMode)
    InvalidFeeEstimateMode(String),
    /// Error serializing or deserializing JSON data
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FeeRateRequired => write!(f, "Fee rate override requested without a fee rate"),
            Self::NoUtxosSelected => write!(f, "No UTXO selected"),
            Self::UnknownUtxo(outpoint) => write!(f, "Pinned UTXO not available: {}", outpoint),
            Self::InsufficientFunds { needed, available } => write!(
                f,
                "Insufficient funds: {} sat available of {} sat needed",
                available, needed
            ),
            Self::FeeRateUnavailable => write!(f, "Fee rate unavailable"),
            Self::InvalidCoinType(value) => write!(f, "Invalid coin type: {}", value),
            Self::InvalidFeeEstimateMode(mode) => {
                write!(f, "Invalid fee estimate mode: {}", mode)
            }
            Self::Json(err) => write!(f, "Serialize/Deserialize JSON error: {}", err),
        }
    }
}

impl std::error::Error for Error {}

macro_rules! impl_error {
    ( $from:ty, $to:ident ) => {
        impl_error!($from, $to, Error);
    };
    ( $from:ty, $to:ident, $impl_for:ty ) => {
        impl std::convert::From<$from> for $impl_for {
            fn from(err: $from) -> Self {
                <$impl_for>::$to(err)
            }
        }
    };
}

impl_error!(serde_json::Error, Json);
