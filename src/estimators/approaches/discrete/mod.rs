// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Discrete estimators module: the shared probability table and the
// histogram-based measures built on it.

pub mod discrete_utils;

pub mod block_mi;
pub mod mutual_info;

pub use block_mi::BlockMutualInformation;
pub use discrete_utils::ProbabilityTable;
pub use mutual_info::MutualInformationCalculator;
