// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use infodynamics::Error;
use infodynamics::estimators::information_storage::InformationStorage;
use infodynamics::estimators::mutual_information::MutualInformation;
use infodynamics::estimators::traits::{DiscreteInformationEstimator, SignificanceTest};
use infodynamics::estimators::utils::significance::random_orderings;
use ndarray::{Array2, array};

use crate::test_helpers::{
    SeedableRng, StdRng, assert_abs_diff_eq, copy_or_redraw_states, generate_random_discrete,
    init_tracing,
};

#[test]
fn significance_leaves_counts_untouched() {
    init_tracing();
    let x = generate_random_discrete(200, 3, 10);
    let y = generate_random_discrete(200, 3, 11);
    let mut mi = MutualInformation::new_discrete(3, 0).unwrap();
    mi.add_observations(&x, &y).unwrap();

    let before = mi.compute_average_local_of_observations();
    let table_before = mi.table().clone();
    let dist = mi.compute_significance(50).unwrap();
    let after = mi.compute_average_local_of_observations();

    assert_eq!(before, after);
    assert_eq!(&table_before, mi.table());
    assert_eq!(mi.num_observations(), 200);
    assert_eq!(dist.num_surrogates(), 50);
    assert_eq!(dist.actual_value, before);
}

#[test]
fn dependent_data_is_significant() {
    let x = generate_random_discrete(200, 2, 3);
    let mut mi = MutualInformation::new_discrete(2, 0).unwrap();
    mi.add_observations(&x, &x).unwrap();
    let mut rng = StdRng::seed_from_u64(99);
    let dist = mi.compute_significance_with_rng(100, &mut rng).unwrap();
    assert_eq!(dist.p_value, 0.0);
    assert!(dist.mean() < 0.1);
    assert!(dist.t_score() > 10.0);
}

#[test]
fn seeded_runs_are_reproducible() {
    let x = generate_random_discrete(100, 2, 4);
    let y = generate_random_discrete(100, 2, 5);
    let mut mi = MutualInformation::new_discrete(2, 0).unwrap();
    mi.add_observations(&x, &y).unwrap();

    let a = mi
        .compute_significance_with_rng(20, &mut StdRng::seed_from_u64(1))
        .unwrap();
    let b = mi
        .compute_significance_with_rng(20, &mut StdRng::seed_from_u64(1))
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn explicit_orderings_match_their_row_count() {
    let x = generate_random_discrete(60, 2, 6);
    let y = generate_random_discrete(60, 2, 7);
    let mut mi = MutualInformation::new_discrete(2, 0).unwrap();
    mi.add_observations(&x, &y).unwrap();

    let orderings = random_orderings(7, mi.num_observations(), &mut StdRng::seed_from_u64(2));
    let first = mi.compute_significance_with_orderings(&orderings).unwrap();
    let second = mi.compute_significance_with_orderings(&orderings).unwrap();
    assert_eq!(first.num_surrogates(), 7);
    assert_eq!(first, second);

    // identity ordering reproduces the observed measure
    let identity = Array2::from_shape_fn((1, 60), |(_, j)| j);
    let dist = mi.compute_significance_with_orderings(&identity).unwrap();
    assert_abs_diff_eq!(dist.values[0], dist.actual_value, epsilon = 1e-12);
}

#[test]
fn malformed_orderings_are_rejected() {
    let mut mi = MutualInformation::new_discrete(2, 0).unwrap();
    mi.add_observations(&array![0, 1, 1], &array![1, 0, 1]).unwrap();
    assert!(matches!(
        mi.compute_significance_with_orderings(&array![[0usize, 1]]),
        Err(Error::ShapeMismatch { .. })
    ));
    assert!(matches!(
        mi.compute_significance_with_orderings(&array![[0usize, 2, 2]]),
        Err(Error::InvalidOrdering { row: 0, .. })
    ));
    assert!(matches!(
        mi.compute_significance(0),
        Err(Error::InvalidParameter(_))
    ));
}

#[test]
fn predictive_information_surrogates_destroy_dependence() {
    let x = copy_or_redraw_states(200, 10, 0.9, 8);
    let mut pi = InformationStorage::predictive(2, 1).unwrap();
    pi.add_parallel_observations(&x).unwrap();
    let before = pi.compute_average_local_of_observations();

    let dist = pi
        .compute_significance_with_rng(30, &mut StdRng::seed_from_u64(3))
        .unwrap();
    assert_eq!(pi.compute_average_local_of_observations(), before);
    assert!(dist.mean() < before);
    assert_eq!(dist.p_value, 0.0);
}
