// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array2, ArrayView1};

use crate::error::{Error, Result};

/// Default ceiling on the number of ordinal dimensions.
///
/// The id table has `d^d` entries: 7 dimensions need 823 543 entries, 8 already
/// need 16.7 million. Use [`PermutationIndexer::with_max_dimensions`] to go higher.
pub const DEFAULT_MAX_DIMENSIONS: usize = 7;

// Table entry for ids that do not correspond to a permutation.
const INVALID_INDEX: u32 = u32::MAX;

/// Dense bijection between the `d!` orderings of `d` items and `0..d!`.
///
/// Permutations are enumerated in lexicographic order, so a permutation's
/// index equals its lexicographic rank. Each permutation `p` also has an id,
/// the base-`d` number with digits `p[0] p[1] .. p[d-1]`; a table of length
/// `d^d` maps ids back to indices.
///
/// Built once and immutable afterwards, so it can be shared between
/// estimators (e.g. behind an `Arc`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationIndexer {
    dimensions: usize,
    /// One permutation per row, `d!` rows of length `d`.
    permutations: Array2<usize>,
    permutation_ids: Vec<usize>,
    id_to_index: Vec<u32>,
}

impl PermutationIndexer {
    /// Build the indexer with the default dimension ceiling.
    pub fn new(dimensions: usize) -> Result<Self> {
        Self::with_max_dimensions(dimensions, DEFAULT_MAX_DIMENSIONS)
    }

    /// Build the indexer, rejecting `dimensions` above `max_dimensions`.
    pub fn with_max_dimensions(dimensions: usize, max_dimensions: usize) -> Result<Self> {
        if dimensions < 1 {
            return Err(Error::InvalidDimensions(dimensions));
        }
        if dimensions > max_dimensions {
            return Err(Error::Capacity(format!(
                "{dimensions} dimensions exceed the configured maximum of {max_dimensions}"
            )));
        }
        let num_permutations = factorial(dimensions)
            .filter(|&f| f <= i32::MAX as usize)
            .ok_or_else(|| {
                Error::Capacity(format!(
                    "{dimensions}! permutations do not fit into i32 symbols"
                ))
            })?;
        let table_len = u32::try_from(dimensions)
            .ok()
            .and_then(|exp| dimensions.checked_pow(exp))
            .ok_or_else(|| {
                Error::Capacity(format!(
                    "id table of {dimensions}^{dimensions} entries does not fit into memory"
                ))
            })?;

        let mut permutations = Array2::zeros((num_permutations, dimensions));
        let mut current: Vec<usize> = (0..dimensions).collect();
        let mut row = 0;
        loop {
            for (slot, &v) in permutations.row_mut(row).iter_mut().zip(current.iter()) {
                *slot = v;
            }
            row += 1;
            if !next_permutation(&mut current) {
                break;
            }
        }
        debug_assert_eq!(row, num_permutations);

        let permutation_ids: Vec<usize> = permutations
            .rows()
            .into_iter()
            .map(|p| encode_digits(p, dimensions))
            .collect();

        let mut id_to_index = vec![INVALID_INDEX; table_len];
        for (index, &id) in permutation_ids.iter().enumerate() {
            id_to_index[id] = index as u32;
        }

        tracing::debug!(
            dimensions,
            permutations = num_permutations,
            table_len,
            "built permutation index table"
        );

        Ok(Self {
            dimensions,
            permutations,
            permutation_ids,
            id_to_index,
        })
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of permutations, `d!`.
    pub fn num_permutations(&self) -> usize {
        self.permutation_ids.len()
    }

    /// All permutations, one per row in index order.
    pub fn permutations(&self) -> &Array2<usize> {
        &self.permutations
    }

    /// The permutation with dense index `index`.
    pub fn permutation(&self, index: usize) -> Option<ArrayView1<'_, usize>> {
        (index < self.num_permutations()).then(|| self.permutations.row(index))
    }

    /// Permutation ids in index order.
    pub fn permutation_ids(&self) -> &[usize] {
        &self.permutation_ids
    }

    /// Length of the id table, `d^d`.
    pub fn table_len(&self) -> usize {
        self.id_to_index.len()
    }

    /// Dense index for a permutation id, or `None` if the id is not a permutation.
    pub fn index_of_id(&self, id: usize) -> Option<usize> {
        match self.id_to_index.get(id) {
            Some(&idx) if idx != INVALID_INDEX => Some(idx as usize),
            _ => None,
        }
    }

    /// Base-`d` id of a digit sequence of length `d` with digits in `0..d`.
    ///
    /// The sequence need not be a permutation; see [`Self::index_of`].
    pub fn permutation_id(&self, values: &[usize]) -> Result<usize> {
        if values.len() != self.dimensions {
            return Err(Error::EncodingInvariant(format!(
                "expected {} values, got {}",
                self.dimensions,
                values.len()
            )));
        }
        if let Some(&bad) = values.iter().find(|&&v| v >= self.dimensions) {
            return Err(Error::EncodingInvariant(format!(
                "value {bad} is not an index in 0..{}",
                self.dimensions
            )));
        }
        Ok(values
            .iter()
            .fold(0usize, |id, &v| id * self.dimensions + v))
    }

    /// Dense index of `values`, which must be a permutation of `0..d`.
    ///
    /// Anything else is an encoding invariant violation.
    pub fn index_of(&self, values: &[usize]) -> Result<usize> {
        let id = self.permutation_id(values)?;
        self.index_of_id(id).ok_or_else(|| {
            Error::EncodingInvariant(format!(
                "{values:?} (id {id}) is not a permutation of 0..{}",
                self.dimensions
            ))
        })
    }
}

fn factorial(n: usize) -> Option<usize> {
    (1..=n).try_fold(1usize, |acc, k| acc.checked_mul(k))
}

fn encode_digits(digits: ArrayView1<usize>, base: usize) -> usize {
    digits.iter().fold(0usize, |id, &v| id * base + v)
}

/// Advance `perm` to the next permutation in lexicographic order.
/// Returns false (leaving `perm` untouched) when it is already the last one.
fn next_permutation(perm: &mut [usize]) -> bool {
    let n = perm.len();
    if n < 2 {
        return false;
    }
    let mut i = n - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = n - 1;
    while perm[j] <= perm[i - 1] {
        j -= 1;
    }
    perm.swap(i - 1, j);
    perm[i..].reverse();
    true
}
