//! Numeric helpers shared by the classifiers

/// Index of the largest value; ties resolve to the first occurrence
pub fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (index, &value) in values.iter().enumerate() {
        if value.is_nan() {
            continue;
        }

        if best.is_none_or(|(_, current)| value > current) {
            best = Some((index, value));
        }
    }

    best.map(|(index, _)| index)
}

pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Numerically stable softmax
pub fn softmax(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if !max.is_finite() {
        return uniform(values.len());
    }

    let exps: Vec<f64> = values.iter().map(|v| (v - max).exp()).collect();
    let sum: f64 = exps.iter().sum();

    exps.into_iter().map(|e| e / sum).collect()
}

/// Scale non-negative scores so they sum to one
pub fn normalize(values: Vec<f64>) -> Vec<f64> {
    let sum: f64 = values.iter().sum();

    if sum > 0.0 && sum.is_finite() {
        values.into_iter().map(|v| v / sum).collect()
    } else {
        uniform(values.len())
    }
}

fn uniform(len: usize) -> Vec<f64> {
    if len == 0 {
        return Vec::new();
    }
    vec![1.0 / len as f64; len]
}
