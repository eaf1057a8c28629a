//! Small numeric helpers.

/// Arithmetic mean of `xs`, or `0.0` when `xs` is empty.
pub fn mean<T>(xs: &[T]) -> f64
where
    T: Copy + Into<f64>,
{
    if xs.is_empty() {
        return 0.0;
    }

    let sum: f64 = xs.iter().map(|&x| x.into()).sum();
    sum / xs.len() as f64
}
