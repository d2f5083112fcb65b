// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use ndarray::{Array1, Array2};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::estimators::approaches::discrete::mutual_info::MutualInformationCalculator;
use crate::estimators::approaches::ordinal::ordinal_utils::symbolize_rows;
use crate::estimators::approaches::ordinal::permutation_indexer::{
    DEFAULT_MAX_DIMENSIONS, PermutationIndexer,
};
use crate::estimators::traits::{DiscreteInformationEstimator, SignificanceTest};
use crate::estimators::utils::normalise::standardise_columns;
use crate::estimators::utils::significance::EmpiricalMeasurementDistribution;

/// Property name toggling per-column standardisation before symbolisation.
pub const PROP_NORMALISE: &str = "NORMALISE";

/// Settings of [`SymbolicMutualInformation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolicConfig {
    /// Standardise each continuous column (zero mean, unit variance) before
    /// computing ordinal patterns.
    pub normalise: bool,
    /// Largest accepted number of continuous dimensions.
    pub max_dimensions: usize,
}

impl Default for SymbolicConfig {
    fn default() -> Self {
        Self {
            normalise: true,
            max_dimensions: DEFAULT_MAX_DIMENSIONS,
        }
    }
}

#[derive(Debug, Clone)]
struct Initialised {
    indexer: Arc<PermutationIndexer>,
    mi: MutualInformationCalculator,
}

/// Mutual information between a multivariate continuous series and a discrete
/// series, estimated by replacing each continuous observation with its ordinal
/// pattern symbol.
///
/// Both the pattern symbols and the discrete values share one alphabet of size
/// `max(d!, base)`.
#[derive(Debug, Clone, Default)]
pub struct SymbolicMutualInformation {
    config: SymbolicConfig,
    state: Option<Initialised>,
}

impl SymbolicMutualInformation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SymbolicConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }

    pub fn config(&self) -> &SymbolicConfig {
        &self.config
    }

    /// Build the permutation table for `dimensions` continuous variables and a
    /// fresh estimator over `max(dimensions!, base)` symbols.
    ///
    /// Discards every observation added before.
    pub fn initialise(&mut self, dimensions: usize, base: usize) -> Result<()> {
        let indexer = PermutationIndexer::with_max_dimensions(dimensions, self.config.max_dimensions)?;
        self.initialise_with_indexer(Arc::new(indexer), base)
    }

    /// Like [`Self::initialise`] but reusing an already built permutation table.
    pub fn initialise_with_indexer(&mut self, indexer: Arc<PermutationIndexer>, base: usize) -> Result<()> {
        let alphabet = indexer.num_permutations().max(base);
        let mi = MutualInformationCalculator::new(alphabet, 0)?;
        tracing::debug!(
            dimensions = indexer.dimensions(),
            base,
            alphabet,
            normalise = self.config.normalise,
            "initialised symbolic mutual information"
        );
        self.state = Some(Initialised { indexer, mi });
        Ok(())
    }

    /// Set a named option from a string value.
    ///
    /// Recognised: `NORMALISE` = `true` | `false` (case-insensitive).
    pub fn set_property(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            PROP_NORMALISE => {
                self.config.normalise = parse_bool(value).ok_or_else(|| Error::InvalidProperty {
                    name: name.to_string(),
                    value: value.to_string(),
                })?;
                Ok(())
            }
            _ => Err(Error::UnknownProperty(name.to_string())),
        }
    }

    /// Add one batch of paired observations.
    ///
    /// `continuous` is `T x d` (rows are time steps), `discrete` has length `T`.
    /// May be called repeatedly to pool batches.
    pub fn set_observations(&mut self, continuous: &Array2<f64>, discrete: &Array1<i32>) -> Result<()> {
        let normalise = self.config.normalise;
        let state = self.state.as_mut().ok_or(Error::NotInitialised)?;
        let d = state.indexer.dimensions();
        if continuous.ncols() != d {
            return Err(Error::shape(
                format!("{d} continuous columns"),
                format!("{} columns", continuous.ncols()),
            ));
        }
        if continuous.nrows() != discrete.len() {
            return Err(Error::shape(
                format!("{} discrete observations", continuous.nrows()),
                discrete.len(),
            ));
        }

        let symbols = if normalise {
            symbolize_rows(&standardise_columns(continuous), &state.indexer)?
        } else {
            symbolize_rows(continuous, &state.indexer)?
        };
        state.mi.add_observations(&symbols, discrete)?;
        tracing::debug!(
            rows = continuous.nrows(),
            total = state.mi.num_observations(),
            "symbolic observations added"
        );
        Ok(())
    }

    /// Mutual information in bits over all observations added so far.
    pub fn compute_average_local_of_observations(&mut self) -> Result<f64> {
        Ok(self.initialised_mut()?.mi.compute_average_local_of_observations())
    }

    /// Per-observation values are not provided by this estimator.
    pub fn compute_local_using_previous_observations(
        &self,
        _continuous: &Array2<f64>,
        _discrete: &Array1<i32>,
    ) -> Result<Array1<f64>> {
        Err(Error::NotImplemented(
            "local symbolic mutual information values are not provided",
        ))
    }

    pub fn compute_significance(&self, num_permutations: usize) -> Result<EmpiricalMeasurementDistribution> {
        self.initialised()?.mi.compute_significance(num_permutations)
    }

    pub fn compute_significance_with_rng<R: Rng + ?Sized>(
        &self,
        num_permutations: usize,
        rng: &mut R,
    ) -> Result<EmpiricalMeasurementDistribution> {
        self.initialised()?
            .mi
            .compute_significance_with_rng(num_permutations, rng)
    }

    pub fn compute_significance_with_orderings(
        &self,
        orderings: &Array2<usize>,
    ) -> Result<EmpiricalMeasurementDistribution> {
        self.initialised()?.mi.compute_significance_with_orderings(orderings)
    }

    pub fn last_average(&self) -> Result<f64> {
        Ok(self.initialised()?.mi.last_average())
    }

    pub fn num_observations(&self) -> Result<usize> {
        Ok(self.initialised()?.mi.num_observations())
    }

    /// Shared alphabet size, `max(d!, base)`.
    pub fn alphabet_base(&self) -> Result<usize> {
        Ok(self.initialised()?.mi.base_x())
    }

    pub fn indexer(&self) -> Result<&Arc<PermutationIndexer>> {
        Ok(&self.initialised()?.indexer)
    }

    fn initialised(&self) -> Result<&Initialised> {
        self.state.as_ref().ok_or(Error::NotInitialised)
    }

    fn initialised_mut(&mut self) -> Result<&mut Initialised> {
        self.state.as_mut().ok_or(Error::NotInitialised)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
