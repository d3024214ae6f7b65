use crate::{
    error::{Error, Result},
    util::ensure_finite,
};

/// Normalize `values` into a distribution that sums to 1
///
/// Uses the max-subtraction trick, so every output is in `(0, 1]` even for very large or very
/// negative inputs.
///
/// Fails with [`Error::ContractViolation`] if `values` is empty or contains a non-finite value.
pub fn softmax(values: &[f32]) -> Result<Vec<f32>> {
    if values.is_empty() {
        return Err(Error::contract("softmax of an empty action-value vector"));
    }
    ensure_finite("action-value vector", values)?;

    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exponentials = values.iter().map(|x| (x - max).exp());
    let sum: f32 = exponentials.clone().sum();
    Ok(exponentials.map(|x| x / sum).collect())
}

/// Index of the largest value, taking the first index on ties
///
/// **Panics** if `values` is empty
pub fn argmax(values: &[f32]) -> usize {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f32)>, (i, &x)| match best {
            Some((_, b)) if b >= x => best,
            _ => Some((i, x)),
        })
        .map(|(i, _)| i)
        .expect("`values` is not empty")
}
