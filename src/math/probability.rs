//! Log-space probability helpers and information measures

use crate::io::configuration::PROBABILITY_FLOOR;

/// Natural log of a weight, substituting the probability floor for
/// missing or non-positive entries
///
/// Keeps every symbol reachable after blending and avoids `ln(0)`.
pub fn floored_ln(weight: Option<f64>) -> f64 {
    match weight {
        Some(w) if w > 0.0 => w.ln(),
        _ => PROBABILITY_FLOOR.ln(),
    }
}

/// Numerically stable softmax
///
/// Subtracts the maximum logit before exponentiating. An empty input yields
/// an empty output.
pub fn stable_softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        return vec![0.0; logits.len()];
    }

    let shifted: Vec<f64> = logits.iter().map(|&l| (l - max).exp()).collect();
    let z: f64 = shifted.iter().sum();

    shifted.into_iter().map(|e| e / z).collect()
}

/// Information content of an outcome in nats
pub fn surprise(probability: f64) -> f64 {
    -probability.ln()
}

/// Shannon entropy in nats, ignoring non-positive entries
///
/// Weights are normalized first, so unnormalized rows are accepted.
pub fn shannon_entropy(weights: &[f64]) -> f64 {
    let total: f64 = weights.iter().filter(|&&w| w > 0.0).sum();
    if total <= 0.0 {
        return 0.0;
    }

    weights
        .iter()
        .filter(|&&w| w > 0.0)
        .map(|&w| {
            let p = w / total;
            -p * p.ln()
        })
        .sum()
}
