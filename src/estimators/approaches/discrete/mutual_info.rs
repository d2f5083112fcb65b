// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2};
use rand::Rng;

use crate::error::{Error, Result};
use crate::estimators::approaches::discrete::discrete_utils::{ProbabilityTable, check_base};
use crate::estimators::traits::{
    DiscreteInformationEstimator, GlobalValue, OptionalLocalValues, SignificanceTest,
};
use crate::estimators::utils::block_slicing::lagged_pairs;
use crate::estimators::utils::significance::{
    EmpiricalMeasurementDistribution, random_orderings, surrogate_distribution,
};

/// Plug-in mutual information I(X; Y) between two discrete series, in bits.
///
/// Pairs `x[t]` with `y[t + time_diff]`. Observations accumulate over repeated
/// `add_observations` calls until `initialise` is called.
///
/// The two alphabets may differ; `new` uses the same base for both.
#[derive(Debug, Clone)]
pub struct MutualInformationCalculator {
    base_x: usize,
    base_y: usize,
    time_diff: usize,
    table: ProbabilityTable,
    last_average: f64,
}

impl MutualInformationCalculator {
    /// Square alphabet: both variables take values in `0..base`.
    pub fn new(base: usize, time_diff: usize) -> Result<Self> {
        Self::with_bases(base, base, time_diff)
    }

    pub fn with_bases(base_x: usize, base_y: usize, time_diff: usize) -> Result<Self> {
        check_base(base_x)?;
        check_base(base_y)?;
        Ok(Self {
            base_x,
            base_y,
            time_diff,
            table: ProbabilityTable::new(),
            last_average: 0.0,
        })
    }

    pub fn base_x(&self) -> usize {
        self.base_x
    }

    pub fn base_y(&self) -> usize {
        self.base_y
    }

    pub fn time_diff(&self) -> usize {
        self.time_diff
    }

    /// Accumulate paired observations. Both series must have equal length.
    ///
    /// The batch is validated completely before anything is counted, so a
    /// rejected batch leaves the counts unchanged.
    pub fn add_observations(&mut self, x: &Array1<i32>, y: &Array1<i32>) -> Result<()> {
        let (xs, ys) = lagged_pairs(x.view(), y.view(), self.base_x, self.base_y, self.time_diff)?;
        for (&a, &b) in xs.iter().zip(ys.iter()) {
            self.table.add(a, b);
        }
        tracing::trace!(
            added = xs.len(),
            total = self.table.num_observations(),
            "mutual information observations added"
        );
        Ok(())
    }

    /// Read-only view of the accumulated counts.
    pub fn table(&self) -> &ProbabilityTable {
        &self.table
    }
}

impl GlobalValue for MutualInformationCalculator {
    fn global_value(&self) -> f64 {
        self.table.mutual_information()
    }
}

impl OptionalLocalValues for MutualInformationCalculator {
    fn supports_local(&self) -> bool {
        false
    }

    fn local_values_opt(&self) -> Result<Array1<f64>> {
        Err(Error::NotImplemented(
            "local mutual information values are not provided",
        ))
    }
}

impl DiscreteInformationEstimator for MutualInformationCalculator {
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

impl SignificanceTest for MutualInformationCalculator {
    fn compute_significance_with_rng<R: Rng + ?Sized>(
        &self,
        num_permutations: usize,
        rng: &mut R,
    ) -> Result<EmpiricalMeasurementDistribution> {
        let orderings = random_orderings(num_permutations, self.num_observations(), rng);
        self.compute_significance_with_orderings(&orderings)
    }

    fn compute_significance_with_orderings(
        &self,
        orderings: &Array2<usize>,
    ) -> Result<EmpiricalMeasurementDistribution> {
        surrogate_distribution(&self.table, orderings)
    }
}
