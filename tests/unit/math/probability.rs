//! Tests for log-space helpers and information measures

#[cfg(test)]
mod tests {
    use phonodrift::io::configuration::PROBABILITY_FLOOR;
    use phonodrift::math::probability::{floored_ln, shannon_entropy, stable_softmax, surprise};

    #[test]
    fn test_floored_ln_substitutes_floor() {
        let floor = PROBABILITY_FLOOR.ln();

        assert!((floored_ln(None) - floor).abs() < f64::EPSILON);
        assert!((floored_ln(Some(0.0)) - floor).abs() < f64::EPSILON);
        assert!((floored_ln(Some(-2.0)) - floor).abs() < f64::EPSILON);
        assert!((floored_ln(Some(0.5)) - 0.5_f64.ln()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_softmax_is_distribution() {
        let probabilities = stable_softmax(&[0.0, 1.0, 2.0]);
        let sum: f64 = probabilities.iter().sum();

        assert!((sum - 1.0).abs() < 1e-12);
        assert!(probabilities.windows(2).all(|w| w[0] < w[1]));
    }

    // Large logits would overflow without the max shift
    #[test]
    fn test_softmax_stable_for_large_logits() {
        let probabilities = stable_softmax(&[1000.0, 1000.0]);
        assert_eq!(probabilities.len(), 2);
        for p in probabilities {
            assert!((p - 0.5).abs() < 1e-12);
        }

        let tiny = stable_softmax(&[-1000.0, -1001.0]);
        assert!(tiny.iter().all(|p| p.is_finite()));
        assert!((tiny.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_softmax_empty() {
        assert!(stable_softmax(&[]).is_empty());
    }

    #[test]
    fn test_softmax_inverts_log() {
        let weights = [0.5, 0.3, 0.2];
        let logits: Vec<f64> = weights.iter().map(|w: &f64| w.ln()).collect();
        for (p, w) in stable_softmax(&logits).iter().zip(weights) {
            assert!((p - w).abs() < 1e-12);
        }
    }

    #[test]
    fn test_surprise() {
        assert!(surprise(1.0).abs() < f64::EPSILON);
        assert!((surprise(0.5) - std::f64::consts::LN_2).abs() < 1e-12);
        assert!(surprise(0.1) > surprise(0.5));
    }

    #[test]
    fn test_shannon_entropy() {
        assert!((shannon_entropy(&[1.0, 1.0, 1.0, 1.0]) - 4.0_f64.ln()).abs() < 1e-12);
        assert!(shannon_entropy(&[1.0, 0.0]).abs() < 1e-12);
        assert!(shannon_entropy(&[]).abs() < f64::EPSILON);
        assert!((shannon_entropy(&[2.0, 2.0, 0.0, -1.0]) - std::f64::consts::LN_2).abs() < 1e-12);
    }
}
