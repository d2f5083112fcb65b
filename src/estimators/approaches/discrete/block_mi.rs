// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2, ArrayView1};
use rand::Rng;

use crate::error::{Error, Result};
use crate::estimators::approaches::discrete::discrete_utils::{ProbabilityTable, check_base};
use crate::estimators::traits::{
    DiscreteInformationEstimator, GlobalValue, OptionalLocalValues, SignificanceTest,
};
use crate::estimators::utils::block_slicing::{block_alphabet_size, block_slices};
use crate::estimators::utils::significance::{
    EmpiricalMeasurementDistribution, random_orderings, surrogate_distribution,
};

/// Mutual information between a past block and the adjacent future block of a
/// discrete process, in bits.
///
/// For each time point `s` this counts the pair
/// `(x[s-k+1 ..= s], x[s+1 ..= s+l])` with `k = past_len`, `l = future_len`,
/// pooled over every valid `s` of every series added.
///
/// - Predictive information `PI_k` is the `(k, k)` case ([`Self::predictive`]).
/// - Active information storage `AI_k` is the `(k, 1)` case ([`Self::active`]).
///
/// `PI_1` and `AI_1` therefore both reduce to the `(1, 1)` configuration and count
/// exactly the same pairs.
#[derive(Debug, Clone)]
pub struct BlockMutualInformation {
    base: usize,
    past_len: usize,
    future_len: usize,
    table: ProbabilityTable,
    last_average: f64,
}

impl BlockMutualInformation {
    pub fn new(base: usize, past_len: usize, future_len: usize) -> Result<Self> {
        check_base(base)?;
        if past_len < 1 || future_len < 1 {
            return Err(Error::InvalidParameter(format!(
                "block lengths must be >= 1, got past {past_len} and future {future_len}"
            )));
        }
        // Both block alphabets must be representable as u64 codes
        block_alphabet_size(base, past_len)?;
        block_alphabet_size(base, future_len)?;
        Ok(Self {
            base,
            past_len,
            future_len,
            table: ProbabilityTable::new(),
            last_average: 0.0,
        })
    }

    /// Predictive information with history and future length `k`.
    pub fn predictive(base: usize, k: usize) -> Result<Self> {
        Self::new(base, k, k)
    }

    /// Active information storage with history length `k`.
    pub fn active(base: usize, k: usize) -> Result<Self> {
        Self::new(base, k, 1)
    }

    pub fn base(&self) -> usize {
        self.base
    }

    pub fn past_len(&self) -> usize {
        self.past_len
    }

    pub fn future_len(&self) -> usize {
        self.future_len
    }

    /// Accumulate the windows of a single series.
    pub fn add_observations(&mut self, series: &Array1<i32>) -> Result<()> {
        let (past, future) = block_slices(series.view(), self.base, self.past_len, self.future_len)?;
        self.count(&past, &future);
        Ok(())
    }

    /// Accumulate the windows of several parallel series.
    ///
    /// Rows are time steps and each column is one series; windows never
    /// cross from one column into another. The whole batch is validated
    /// before anything is counted.
    pub fn add_parallel_observations(&mut self, states: &Array2<i32>) -> Result<()> {
        let mut batches = Vec::with_capacity(states.ncols());
        for col in states.columns() {
            batches.push(self.slices(col)?);
        }
        for (past, future) in batches.iter() {
            self.count(past, future);
        }
        Ok(())
    }

    /// Read-only view of the accumulated counts.
    pub fn table(&self) -> &ProbabilityTable {
        &self.table
    }

    fn slices(&self, series: ArrayView1<i32>) -> Result<(Vec<u64>, Vec<u64>)> {
        block_slices(series, self.base, self.past_len, self.future_len)
    }

    fn count(&mut self, past: &[u64], future: &[u64]) {
        for (&p, &f) in past.iter().zip(future.iter()) {
            self.table.add(p, f);
        }
        tracing::trace!(
            added = past.len(),
            total = self.table.num_observations(),
            past_len = self.past_len,
            future_len = self.future_len,
            "block observations added"
        );
    }
}

impl GlobalValue for BlockMutualInformation {
    fn global_value(&self) -> f64 {
        self.table.mutual_information()
    }
}

impl OptionalLocalValues for BlockMutualInformation {
    fn supports_local(&self) -> bool {
        false
    }

    fn local_values_opt(&self) -> Result<Array1<f64>> {
        Err(Error::NotImplemented(
            "local predictive/storage values are not provided",
        ))
    }
}

impl DiscreteInformationEstimator for BlockMutualInformation {
    fn initialise(&mut self) {
        self.table.clear();
        self.last_average = 0.0;
    }

    fn num_observations(&self) -> usize {
        self.table.num_observations()
    }

    fn last_average(&self) -> f64 {
        self.last_average
    }

    fn compute_average_local_of_observations(&mut self) -> f64 {
        self.last_average = self.global_value();
        self.last_average
    }
}

impl SignificanceTest for BlockMutualInformation {
    fn compute_significance_with_rng<R: Rng + ?Sized>(
        &self,
        num_permutations: usize,
        rng: &mut R,
    ) -> Result<EmpiricalMeasurementDistribution> {
        let orderings = random_orderings(num_permutations, self.num_observations(), rng);
        self.compute_significance_with_orderings(&orderings)
    }

    /// Each ordering re-pairs the future blocks against the fixed past blocks.
    fn compute_significance_with_orderings(
        &self,
        orderings: &Array2<usize>,
    ) -> Result<EmpiricalMeasurementDistribution> {
        surrogate_distribution(&self.table, orderings)
    }
}
