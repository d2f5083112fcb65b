use ndarray::Array2;

/// Standardise each column to zero mean and unit sample standard deviation.
///
/// Returns a new array; the input is left untouched. Columns with zero spread
/// (or a single row) are only centred.
pub fn standardise_columns(data: &Array2<f64>) -> Array2<f64> {
    let mut out = data.clone();
    let n = data.nrows();
    if n == 0 {
        return out;
    }
    for mut col in out.columns_mut() {
        let mean = col.iter().sum::<f64>() / n as f64;
        let std = if n > 1 {
            let ss: f64 = col.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (n - 1) as f64).sqrt()
        } else {
            0.0
        };
        if std > 0.0 {
            col.mapv_inplace(|v| (v - mean) / std);
        } else {
            col.mapv_inplace(|v| v - mean);
        }
    }
    out
}
