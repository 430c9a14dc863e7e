// Bitcoin Dev Kit
//
// Copyright (c) 2020-2021 Bitcoin Dev Kit Developers
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Wallet-side coin control
//!
//! [`CoinControl`](coin_control::CoinControl) holds the options, [`coin_selection`] and [`fee`]
//! turn them into the inputs of the coin selection algorithm and of the fee computation.

pub mod coin_control;
pub mod coin_selection;
pub mod fee;
pub mod pinned;
