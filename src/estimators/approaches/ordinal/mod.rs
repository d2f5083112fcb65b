// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Ordinal (permutation) symbolisation module
// This module contains the permutation table, the row symboliser and the
// symbolic continuous-vs-discrete mutual information estimator.

pub mod ordinal_utils;
pub mod permutation_indexer;
pub mod symbolic_mi;

pub use permutation_indexer::{DEFAULT_MAX_DIMENSIONS, PermutationIndexer};
pub use symbolic_mi::{PROP_NORMALISE, SymbolicConfig, SymbolicMutualInformation};
