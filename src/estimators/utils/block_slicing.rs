use ndarray::ArrayView1;

use crate::error::{Error, Result};
use crate::estimators::approaches::discrete::discrete_utils::check_symbol;

/// Number of distinct codes of a block of `len` symbols over `base`, if it fits a u64.
pub fn block_alphabet_size(base: usize, len: usize) -> Result<u64> {
    let exp = u32::try_from(len)
        .map_err(|_| Error::Capacity(format!("block length {len} too large")))?;
    (base as u64).checked_pow(exp).ok_or_else(|| {
        Error::Capacity(format!(
            "alphabet of {base}^{len} block states does not fit into u64"
        ))
    })
}

/// Encode a block as a base-`base` number, oldest value most significant.
pub fn encode_block(block: &[u64], base: u64) -> u64 {
    block.iter().fold(0u64, |code, &v| code * base + v)
}

/// Slice a series into aligned past and future block codes.
///
/// For every time point `s` with a full past window `x[s-past_len+1 ..= s]`
/// and a full future window `x[s+1 ..= s+future_len]`, returns one code for
/// each window. Series shorter than `past_len + future_len` yield no pairs.
///
/// Returns (past_codes, future_codes).
pub fn block_slices(
    series: ArrayView1<i32>,
    base: usize,
    past_len: usize,
    future_len: usize,
) -> Result<(Vec<u64>, Vec<u64>)> {
    // Validate every symbol once, up front
    let symbols: Vec<u64> = series
        .iter()
        .map(|&v| check_symbol(v, base))
        .collect::<Result<_>>()?;

    let n = symbols.len();
    let span = past_len + future_len;
    if n < span {
        return Ok((Vec::new(), Vec::new()));
    }

    let n_samples = n - span + 1;
    let base_u = base as u64;
    let mut past = Vec::with_capacity(n_samples);
    let mut future = Vec::with_capacity(n_samples);
    for start in 0..n_samples {
        let split = start + past_len;
        past.push(encode_block(&symbols[start..split], base_u));
        future.push(encode_block(&symbols[split..split + future_len], base_u));
    }
    Ok((past, future))
}

/// Pair `x[t]` with `y[t + time_diff]` for every valid `t`.
///
/// Returns (x_codes, y_codes).
pub fn lagged_pairs(
    x: ArrayView1<i32>,
    y: ArrayView1<i32>,
    base_x: usize,
    base_y: usize,
    time_diff: usize,
) -> Result<(Vec<u64>, Vec<u64>)> {
    if x.len() != y.len() {
        return Err(Error::shape(
            format!("series of equal length ({})", x.len()),
            y.len(),
        ));
    }
    let n = x.len();
    if time_diff >= n {
        return Ok((Vec::new(), Vec::new()));
    }
    let mut xs = Vec::with_capacity(n - time_diff);
    let mut ys = Vec::with_capacity(n - time_diff);
    for t in 0..(n - time_diff) {
        xs.push(check_symbol(x[t], base_x)?);
        ys.push(check_symbol(y[t + time_diff], base_y)?);
    }
    Ok((xs, ys))
}
