/// Arithmetic mean. Callers always hand in at least one sample.
pub fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Sample standard deviation with Bessel's correction (n - 1). Below
/// two samples the estimator is undefined, so 0 by convention.
pub fn std_dev(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let avg = mean(samples);
    let variance = samples.iter().map(|s| (s - avg).powi(2)).sum::<f64>()
        / (samples.len() - 1) as f64;
    variance.sqrt()
}
