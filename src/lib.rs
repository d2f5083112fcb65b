// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # infodynamics
//!
//! Information-dynamics measures for discrete time series and ordinal symbolisation
//! of multivariate continuous observations.
//!
//! ## Quick Start
//!
//! ```rust
//! use infodynamics::estimators::information_storage::InformationStorage;
//! use infodynamics::estimators::traits::DiscreteInformationEstimator;
//! use ndarray::Array1;
//!
//! // Alternating binary process: one bit of predictive information
//! let x: Array1<i32> = (0..101).map(|t| (t % 2) as i32).collect();
//! let mut pi = InformationStorage::predictive(2, 1).unwrap();
//! pi.add_observations(&x).unwrap();
//! assert!((pi.compute_average_local_of_observations() - 1.0).abs() < 1e-9);
//! ```
//!
//! Continuous-versus-discrete mutual information via ordinal patterns:
//!
//! ```rust
//! use infodynamics::estimators::mutual_information::MutualInformation;
//! use ndarray::{array, Array1};
//!
//! let continuous = array![[0.1, 0.9], [0.8, 0.2], [0.3, 0.7], [0.9, 0.4]];
//! let discrete: Array1<i32> = array![0, 1, 0, 1];
//! let mut calc = MutualInformation::new_symbolic(2, 2).unwrap();
//! calc.set_observations(&continuous, &discrete).unwrap();
//! let mi = calc.compute_average_local_of_observations().unwrap();
//! assert!((mi - 1.0).abs() < 1e-9);
//! ```
//!
//! ## Measures
//!
//! | Measure | Discrete | Ordinal symbols × discrete |
//! |---------|----------|----------------------------|
//! | Mutual Information | ✅ | ✅ |
//! | Predictive Information | ✅ | ❌ |
//! | Active Information Storage | ✅ | ❌ |
//!
//! All measures are plug-in (maximum likelihood) estimates reported in bits.
//!
//! ## Architecture
//!
//! 1. **Public API Layer**: Factory types (`MutualInformation`, `InformationStorage`)
//! 2. **Estimation Approaches**: discrete histogram estimators and ordinal symbolisation
//! 3. **Core Infrastructure**: shared traits, the pair probability table and significance testing

pub mod error;
pub mod estimators;

pub use error::{Error, Result};
