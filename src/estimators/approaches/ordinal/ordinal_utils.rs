use core::cmp::Ordering;

use ndarray::{Array1, Array2};

use crate::error::{Error, Result};
use crate::estimators::approaches::ordinal::permutation_indexer::PermutationIndexer;

/// Stable argsort for f64 values.
///
/// Writes into `idx` the indices that would sort `values` ascending. Ties keep
/// ascending index order, and NaN sorts after every number (NaNs among
/// themselves by index), so the result is always a total, deterministic order.
pub fn argsort(values: &[f64], idx: &mut [usize]) {
    for (i, val) in idx.iter_mut().enumerate() {
        *val = i;
    }
    idx.sort_by(|&i, &j| {
        let a = values[i];
        let b = values[j];
        match a.partial_cmp(&b) {
            Some(Ordering::Equal) => i.cmp(&j),
            Some(ord) => ord,
            None => {
                if a.is_nan() && b.is_nan() {
                    i.cmp(&j)
                } else if a.is_nan() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
        }
    });
}

/// Convert each row of a `T x d` matrix into its ordinal-pattern symbol.
///
/// The symbol of row `t` is the dense index of the permutation of dimension
/// indices that sorts the row's values ascending. Symbols lie in `0..d!`.
pub fn symbolize_rows(observations: &Array2<f64>, indexer: &PermutationIndexer) -> Result<Array1<i32>> {
    let d = indexer.dimensions();
    if observations.ncols() != d {
        return Err(Error::shape(
            format!("{d} columns"),
            format!("{} columns", observations.ncols()),
        ));
    }

    // Reuse buffers to avoid per-row allocations
    let mut row_values: Vec<f64> = vec![0.0; d];
    let mut idx: Vec<usize> = vec![0; d];
    let mut out: Vec<i32> = Vec::with_capacity(observations.nrows());

    for row in observations.rows() {
        for (slot, &v) in row_values.iter_mut().zip(row.iter()) {
            *slot = v;
        }
        argsort(&row_values, &mut idx);
        // A sorted index vector is always a permutation; failure here is a bug
        let symbol = indexer.index_of(&idx)?;
        out.push(symbol as i32);
    }
    Ok(Array1::from(out))
}
