// Bitcoin Dev Kit
//
// Copyright (c) 2020-2021 Bitcoin Dev Kit Developers
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Pinned outputs
//!
//! A set of outpoints explicitly chosen for spending, together with a label describing what the
//! set contains. The label only has a meaning while the set holds at least one outpoint, so it is
//! reset to its default whenever the set is emptied.

use std::collections::HashSet;

use bitcoin::OutPoint;
use serde::{Deserialize, Serialize};

/// Set of pinned outpoints with a co-maintained label
///
/// The iteration order of the outpoints is unspecified.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct PinnedOutputs<L> {
    outpoints: HashSet<OutPoint>,
    label: L,
}

impl<L: Default> PinnedOutputs<L> {
    /// Create an empty set with a default label
    pub fn new() -> Self {
        PinnedOutputs {
            outpoints: HashSet::new(),
            label: L::default(),
        }
    }

    /// Pin `outpoint`, returns `false` if it was already pinned
    pub fn insert(&mut self, outpoint: OutPoint) -> bool {
        self.outpoints.insert(outpoint)
    }

    /// Unpin `outpoint`, returns `false` if it wasn't pinned
    ///
    /// The label is reset if the set is empty afterwards.
    pub fn remove(&mut self, outpoint: &OutPoint) -> bool {
        let removed = self.outpoints.remove(outpoint);
        if self.outpoints.is_empty() {
            self.label = L::default();
        }
        removed
    }

    /// Unpin every outpoint and reset the label
    pub fn clear(&mut self) {
        self.outpoints.clear();
        self.label = L::default();
    }

    /// Whether `outpoint` is pinned
    pub fn contains(&self, outpoint: &OutPoint) -> bool {
        self.outpoints.contains(outpoint)
    }

    /// Whether no outpoint is pinned
    pub fn is_empty(&self) -> bool {
        self.outpoints.is_empty()
    }

    /// Number of pinned outpoints
    pub fn len(&self) -> usize {
        self.outpoints.len()
    }

    /// Iterate over the pinned outpoints
    pub fn iter(&self) -> impl Iterator<Item = &OutPoint> {
        self.outpoints.iter()
    }

    /// Snapshot of the pinned outpoints
    pub fn to_vec(&self) -> Vec<OutPoint> {
        self.outpoints.iter().copied().collect()
    }

    /// Label of the set
    pub fn label(&self) -> &L {
        &self.label
    }

    /// Replace the label of the set
    pub fn set_label(&mut self, label: L) {
        self.label = label;
    }
}
