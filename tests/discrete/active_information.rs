// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use infodynamics::estimators::information_storage::InformationStorage;
use infodynamics::estimators::traits::{DiscreteInformationEstimator, OptionalLocalValues};
use infodynamics::Error;
use ndarray::Array1;
use rstest::rstest;

use crate::test_helpers::{alternating_series, assert_abs_diff_eq, copy_or_redraw_states};

#[rstest]
#[case(0.5, 1)]
#[case(0.5, 2)]
#[case(0.9, 3)]
#[case(0.1, 4)]
fn predictive_equals_active_at_history_one(#[case] p_copy: f64, #[case] seed: u64) {
    let x = copy_or_redraw_states(100, 100, p_copy, seed);

    let mut pi = InformationStorage::predictive(2, 1).unwrap();
    pi.add_parallel_observations(&x).unwrap();
    let pi_value = pi.compute_average_local_of_observations();

    let mut ai = InformationStorage::active(2, 1).unwrap();
    ai.add_parallel_observations(&x).unwrap();
    let ai_value = ai.compute_average_local_of_observations();

    println!("PI: {pi_value:.5} == AI: {ai_value:.5}");
    assert_abs_diff_eq!(ai_value, pi_value, epsilon = 1e-9);
    assert_eq!(pi.num_observations(), ai.num_observations());
    assert!(pi_value > 0.0);
}

#[test]
fn copying_process_stores_information() {
    // Stronger copying leaves more of the past in the present
    let weak = copy_or_redraw_states(500, 20, 0.2, 11);
    let strong = copy_or_redraw_states(500, 20, 0.9, 11);

    let mut ai = InformationStorage::active(2, 1).unwrap();
    ai.add_parallel_observations(&weak).unwrap();
    let weak_ai = ai.compute_average_local_of_observations();

    ai.initialise();
    ai.add_parallel_observations(&strong).unwrap();
    let strong_ai = ai.compute_average_local_of_observations();

    assert!(strong_ai > weak_ai, "strong {strong_ai} <= weak {weak_ai}");
}

#[test]
fn longer_history_on_alternating_series() {
    let mut ai = InformationStorage::active(2, 3).unwrap();
    ai.add_observations(&alternating_series(51)).unwrap();
    assert_eq!(ai.num_observations(), 48);
    assert_abs_diff_eq!(ai.compute_average_local_of_observations(), 1.0, epsilon = 1e-9);
}

#[test]
fn constant_series_stores_nothing() {
    let mut ai = InformationStorage::active(2, 2).unwrap();
    ai.add_observations(&Array1::ones(30)).unwrap();
    assert_abs_diff_eq!(ai.compute_average_local_of_observations(), 0.0, epsilon = 1e-9);
}

#[test]
fn local_values_are_unsupported() {
    let ai = InformationStorage::active(2, 1).unwrap();
    assert!(!ai.supports_local());
    assert!(matches!(ai.local_values_opt(), Err(Error::NotImplemented(_))));
}
