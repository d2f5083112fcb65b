use crate::error::Result;
use crate::estimators::approaches::discrete::mutual_info::MutualInformationCalculator;
use crate::estimators::approaches::ordinal::symbolic_mi::{SymbolicConfig, SymbolicMutualInformation};

/// Mutual information estimators for discrete data and for ordinal symbols of
/// continuous data.
///
/// This struct provides static constructors; every returned estimator is ready
/// to accept observations.
pub struct MutualInformation;

impl MutualInformation {
    /// Discrete MI between two series over the alphabet `0..base`.
    ///
    /// # Arguments
    ///
    /// * `base` - Alphabet size shared by both variables
    /// * `time_diff` - Lag applied to the second variable: pairs are `(x[t], y[t + time_diff])`
    pub fn new_discrete(base: usize, time_diff: usize) -> Result<MutualInformationCalculator> {
        MutualInformationCalculator::new(base, time_diff)
    }

    /// Discrete MI with a separate alphabet for each variable.
    pub fn new_discrete_with_bases(
        base_x: usize,
        base_y: usize,
        time_diff: usize,
    ) -> Result<MutualInformationCalculator> {
        MutualInformationCalculator::with_bases(base_x, base_y, time_diff)
    }

    /// MI between `dimensions` continuous variables (via ordinal patterns) and a
    /// discrete variable over `0..base`, with default settings.
    pub fn new_symbolic(dimensions: usize, base: usize) -> Result<SymbolicMutualInformation> {
        Self::new_symbolic_with_config(dimensions, base, SymbolicConfig::default())
    }

    /// Same as [`Self::new_symbolic`] with explicit settings.
    pub fn new_symbolic_with_config(
        dimensions: usize,
        base: usize,
        config: SymbolicConfig,
    ) -> Result<SymbolicMutualInformation> {
        let mut calc = SymbolicMutualInformation::with_config(config);
        calc.initialise(dimensions, base)?;
        Ok(calc)
    }
}
