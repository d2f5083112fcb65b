use ndarray::Array2;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::estimators::approaches::discrete::discrete_utils::ProbabilityTable;

/// Distribution of a measure over surrogate datasets, next to the observed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmpiricalMeasurementDistribution {
    /// Measure evaluated on each surrogate, in evaluation order.
    pub values: Vec<f64>,
    /// Measure evaluated on the original observations.
    pub actual_value: f64,
    /// Fraction of surrogates whose value is at least `actual_value`.
    pub p_value: f64,
}

impl EmpiricalMeasurementDistribution {
    pub fn new(values: Vec<f64>, actual_value: f64) -> Self {
        let at_least = values.iter().filter(|&&v| v >= actual_value).count();
        let p_value = if values.is_empty() {
            f64::NAN
        } else {
            at_least as f64 / values.len() as f64
        };
        Self {
            values,
            actual_value,
            p_value,
        }
    }

    pub fn num_surrogates(&self) -> usize {
        self.values.len()
    }

    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return f64::NAN;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Sample standard deviation (n - 1 denominator); 0.0 for fewer than two surrogates.
    pub fn std_dev(&self) -> f64 {
        let n = self.values.len();
        if n < 2 {
            return 0.0;
        }
        let mean = self.mean();
        let ss: f64 = self.values.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (n - 1) as f64).sqrt()
    }

    /// Number of standard deviations the actual value lies above the surrogate mean.
    pub fn t_score(&self) -> f64 {
        (self.actual_value - self.mean()) / self.std_dev()
    }
}

/// Draw `num_permutations` independent shuffles of `0..len`, one per row.
pub fn random_orderings<R: Rng + ?Sized>(
    num_permutations: usize,
    len: usize,
    rng: &mut R,
) -> Array2<usize> {
    let mut orderings = Array2::zeros((num_permutations, len));
    let mut indices: Vec<usize> = (0..len).collect();
    for mut row in orderings.rows_mut() {
        indices.shuffle(rng);
        for (slot, &idx) in row.iter_mut().zip(indices.iter()) {
            *slot = idx;
        }
    }
    orderings
}

/// Check that every row of `orderings` is a permutation of `0..len`.
pub fn validate_orderings(orderings: &Array2<usize>, len: usize) -> Result<()> {
    if orderings.nrows() == 0 {
        return Err(Error::InvalidParameter(
            "at least one surrogate ordering is required".to_string(),
        ));
    }
    if orderings.ncols() != len {
        return Err(Error::shape(
            format!("orderings with {len} columns"),
            orderings.ncols(),
        ));
    }
    let mut seen = vec![false; len];
    for (row_idx, row) in orderings.rows().into_iter().enumerate() {
        seen.iter_mut().for_each(|s| *s = false);
        for &idx in row.iter() {
            if idx >= len {
                return Err(Error::InvalidOrdering {
                    row: row_idx,
                    reason: format!("index {idx} out of range for {len} observations"),
                });
            }
            if seen[idx] {
                return Err(Error::InvalidOrdering {
                    row: row_idx,
                    reason: format!("duplicate index {idx}"),
                });
            }
            seen[idx] = true;
        }
    }
    Ok(())
}

/// Evaluate the mutual information of `table` under each re-pairing in `orderings`.
///
/// The left-hand observations keep their positions while the right-hand ones
/// are reordered, destroying the pairing but preserving both marginals. The
/// surrogates are built into fresh tables; `table` is only read.
pub fn surrogate_distribution(
    table: &ProbabilityTable,
    orderings: &Array2<usize>,
) -> Result<EmpiricalMeasurementDistribution> {
    let n = table.num_observations();
    validate_orderings(orderings, n)?;

    let (left, right) = table.observations();
    let mut permuted_right = vec![0u64; n];
    let mut values = Vec::with_capacity(orderings.nrows());
    for row in orderings.rows() {
        for (slot, &idx) in permuted_right.iter_mut().zip(row.iter()) {
            *slot = right[idx];
        }
        let surrogate = ProbabilityTable::from_pairs(&left, &permuted_right)?;
        values.push(surrogate.mutual_information());
    }

    let dist = EmpiricalMeasurementDistribution::new(values, table.mutual_information());
    tracing::debug!(
        surrogates = dist.num_surrogates(),
        actual = dist.actual_value,
        p_value = dist.p_value,
        "evaluated surrogate distribution"
    );
    Ok(dist)
}
