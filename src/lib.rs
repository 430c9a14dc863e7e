// Bitcoin Dev Kit
//
// Copyright (c) 2020-2021 Bitcoin Dev Kit Developers
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.
//
// rustdoc will warn if there are missing docs
#![warn(missing_docs)]
// only enables the `doc_cfg` feature when
// the `docsrs` configuration attribute is defined
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Coin control options for wallet transaction building.
//!
//! # About
//!
//! A [`CoinControl`] describes which coins a wallet may or must spend when building a
//! transaction, where change goes, and which fee policy applies. It performs no selection and no
//! fee computation itself: it is read by the coin selection algorithm, the fee estimator and the
//! transaction builder.
//!
//! ## Example
//!
//! ```
//! use std::str::FromStr;
//!
//! use bitcoin::OutPoint;
//! use coin_control::{CoinControl, FeeRate};
//!
//! let mut coin_control = CoinControl::new();
//! let outpoint = OutPoint::from_str(
//!     "ebd9813ecebc57ff8f30797de7c205e3c7498ca950ea4341ee51a685ff2fa30a:0",
//! )
//! .unwrap();
//!
//! coin_control.select(outpoint);
//! coin_control.allow_other_inputs = false;
//! coin_control.set_fee_rate_override(FeeRate::from_sat_per_vb(5.0));
//!
//! assert!(coin_control.is_selected(&outpoint));
//! assert!(coin_control.check_fee_policy().is_ok());
//! ```

pub extern crate bitcoin;
extern crate log;
extern crate serde;
extern crate serde_json;

#[macro_use]
pub(crate) mod error;
pub mod types;
pub mod wallet;

pub use error::Error;
pub use types::*;
pub use wallet::coin_control::{CoinControl, InputPolicy};
pub use wallet::coin_selection::{Candidate, SplitCandidates};
pub use wallet::fee::FeeEstimator;
pub use wallet::pinned::PinnedOutputs;
