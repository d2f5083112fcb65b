// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2};
use rand::Rng;

use crate::error::Result;
use crate::estimators::utils::significance::EmpiricalMeasurementDistribution;

pub trait GlobalValue {
    /// Compute and return the global value of the measure from the current counts.
    fn global_value(&self) -> f64;
}

/// Optional interface for estimators that may not support local values.
///
/// Estimators without per-observation values return `supports_local() = false`
/// and an `Error::NotImplemented` from `local_values_opt`.
pub trait OptionalLocalValues {
    fn supports_local(&self) -> bool;
    fn local_values_opt(&self) -> Result<Array1<f64>>;
}

/// Common interface of the histogram-based estimators (MI, PI, AIS).
///
/// Observations accumulate until `initialise` is called again; the measure is
/// always recomputed from the accumulated counts.
pub trait DiscreteInformationEstimator: GlobalValue + OptionalLocalValues {
    /// Discard all accumulated counts.
    fn initialise(&mut self);

    /// Number of (past, future) or (x, y) tuples counted so far.
    fn num_observations(&self) -> usize;

    /// Value returned by the most recent `compute_average_local_of_observations`.
    fn last_average(&self) -> f64;

    /// Compute the average measure in bits and remember it as the last average.
    fn compute_average_local_of_observations(&mut self) -> f64;
}

/// Surrogate-based significance testing against re-paired observations.
///
/// Implementations take `&self`: evaluating surrogates never touches the
/// accumulated observations.
pub trait SignificanceTest {
    /// Evaluate `num_permutations` surrogates drawn from `rng`.
    fn compute_significance_with_rng<R: Rng + ?Sized>(
        &self,
        num_permutations: usize,
        rng: &mut R,
    ) -> Result<EmpiricalMeasurementDistribution>;

    /// Evaluate one surrogate per row of `orderings`; each row reorders the
    /// second variable's observations.
    fn compute_significance_with_orderings(
        &self,
        orderings: &Array2<usize>,
    ) -> Result<EmpiricalMeasurementDistribution>;

    /// Evaluate `num_permutations` surrogates using the thread-local RNG.
    fn compute_significance(
        &self,
        num_permutations: usize,
    ) -> Result<EmpiricalMeasurementDistribution> {
        let mut rng = rand::thread_rng();
        self.compute_significance_with_rng(num_permutations, &mut rng)
    }
}
