// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Running joint and marginal counts of `(left, right)` code pairs.
///
/// This is the accounting core shared by every discrete estimator in the crate:
/// mutual information counts `(x_t, y_t)`, predictive information counts
/// `(past block, future block)` and active information storage counts
/// `(past block, next value)`. Probabilities are derived on demand as `count / n`.
///
/// Ordered maps keep the summation order of the information sums fixed, so two
/// tables holding the same counts produce bit-identical results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbabilityTable {
    joint: BTreeMap<(u64, u64), usize>,
    left: BTreeMap<u64, usize>,
    right: BTreeMap<u64, usize>,
    n: usize,
}

impl ProbabilityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from two aligned code slices.
    pub fn from_pairs(left: &[u64], right: &[u64]) -> Result<Self> {
        if left.len() != right.len() {
            return Err(Error::shape(
                format!("{} right codes", left.len()),
                right.len(),
            ));
        }
        let mut table = Self::new();
        for (&l, &r) in left.iter().zip(right.iter()) {
            table.add(l, r);
        }
        Ok(table)
    }

    /// Count one observation of the pair `(left, right)`.
    pub fn add(&mut self, left: u64, right: u64) {
        *self.joint.entry((left, right)).or_insert(0) += 1;
        *self.left.entry(left).or_insert(0) += 1;
        *self.right.entry(right).or_insert(0) += 1;
        self.n += 1;
    }

    /// Drop all counts.
    pub fn clear(&mut self) {
        self.joint.clear();
        self.left.clear();
        self.right.clear();
        self.n = 0;
    }

    pub fn num_observations(&self) -> usize {
        self.n
    }

    pub fn joint_count(&self, left: u64, right: u64) -> usize {
        self.joint.get(&(left, right)).copied().unwrap_or(0)
    }

    pub fn left_count(&self, left: u64) -> usize {
        self.left.get(&left).copied().unwrap_or(0)
    }

    pub fn right_count(&self, right: u64) -> usize {
        self.right.get(&right).copied().unwrap_or(0)
    }

    /// Plug-in mutual information in bits:
    /// I = Σ p(l,r) log2( p(l,r) / (p(l) p(r)) ).
    ///
    /// An empty table yields 0.0.
    pub fn mutual_information(&self) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        let n_f = self.n as f64;
        let mut mi = 0.0_f64;
        for (&(l, r), &cnt) in self.joint.iter() {
            let c = cnt as f64;
            let c_l = self.left[&l] as f64;
            let c_r = self.right[&r] as f64;
            // p(l,r) / (p(l) p(r)) expressed on raw counts
            let ratio = (c * n_f) / (c_l * c_r);
            mi += (c / n_f) * ratio.log2();
        }
        mi
    }

    /// Shannon entropy of the left marginal in bits.
    pub fn left_entropy(&self) -> f64 {
        entropy_bits(self.left.values().copied(), self.n)
    }

    /// Shannon entropy of the right marginal in bits.
    pub fn right_entropy(&self) -> f64 {
        entropy_bits(self.right.values().copied(), self.n)
    }

    /// Shannon entropy of the joint distribution in bits.
    pub fn joint_entropy(&self) -> f64 {
        entropy_bits(self.joint.values().copied(), self.n)
    }

    /// Reconstruct the counted observations as two aligned code vectors.
    ///
    /// The original temporal order is not stored; pairs come out grouped by
    /// joint state, which is all a re-pairing surrogate needs.
    pub fn observations(&self) -> (Vec<u64>, Vec<u64>) {
        let mut left = Vec::with_capacity(self.n);
        let mut right = Vec::with_capacity(self.n);
        for (&(l, r), &cnt) in self.joint.iter() {
            for _ in 0..cnt {
                left.push(l);
                right.push(r);
            }
        }
        (left, right)
    }
}

fn entropy_bits(counts: impl Iterator<Item = usize>, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let n_f = n as f64;
    let mut h = 0.0_f64;
    for cnt in counts {
        let p = (cnt as f64) / n_f;
        h -= if p > 0.0 { p * p.log2() } else { 0.0 };
    }
    h
}

/// Validate that `value` is a symbol of an alphabet of size `base`.
pub fn check_symbol(value: i32, base: usize) -> Result<u64> {
    if value < 0 || (value as usize) >= base {
        return Err(Error::SymbolOutOfRange {
            symbol: value as i64,
            base,
        });
    }
    Ok(value as u64)
}

/// Validate an alphabet size.
pub fn check_base(base: usize) -> Result<()> {
    if base < 1 {
        return Err(Error::InvalidParameter(format!(
            "alphabet base must be >= 1, got {base}"
        )));
    }
    Ok(())
}
