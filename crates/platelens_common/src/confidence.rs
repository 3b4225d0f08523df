//! Confidence arithmetic.
//!
//! Pure function scoring with test-locked behavior. Confidence values
//! combine by unweighted arithmetic mean; no reweighting.

use crate::food::FoodItem;

/// Clamp a confidence value into [0,1]. NaN clamps to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Unweighted arithmetic mean. Empty input yields 0.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Pre-verification aggregate confidence: mean of per-item confidences,
/// 0.5 when no items were detected.
pub fn aggregate_item_confidence(items: &[FoodItem]) -> f64 {
    if items.is_empty() {
        return 0.5;
    }
    let scores: Vec<f64> = items.iter().map(|i| i.confidence).collect();
    clamp_unit(mean(&scores))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(confidence: f64) -> FoodItem {
        FoodItem {
            name: "rice".to_string(),
            category: "grain".to_string(),
            portion_size: "100g".to_string(),
            confidence,
            preparation_method: "steamed".to_string(),
            estimated_weight: 100.0,
        }
    }

    #[test]
    fn clamp_unit_bounds() {
        assert_eq!(clamp_unit(-0.2), 0.0);
        assert_eq!(clamp_unit(0.45), 0.45);
        assert_eq!(clamp_unit(1.7), 1.0);
        assert_eq!(clamp_unit(f64::NAN), 0.0);
    }

    #[test]
    fn aggregate_is_mean_of_item_confidences() {
        let items = vec![item(0.8), item(0.6), item(1.0)];
        let agg = aggregate_item_confidence(&items);
        assert!((agg - 0.8).abs() < 1e-12);
    }

    #[test]
    fn aggregate_defaults_to_half_on_empty_list() {
        assert_eq!(aggregate_item_confidence(&[]), 0.5);
    }
}
