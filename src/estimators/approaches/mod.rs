pub mod discrete;
pub mod ordinal;

// Unified re-exports for common estimators so tests and users can import
// infodynamics::estimators::approaches::* ergonomically.
pub use discrete::block_mi::BlockMutualInformation;
pub use discrete::discrete_utils::ProbabilityTable;
pub use discrete::mutual_info::MutualInformationCalculator;

pub use ordinal::permutation_indexer::PermutationIndexer;
pub use ordinal::symbolic_mi::{SymbolicConfig, SymbolicMutualInformation};
