//! Aggregate nutrition data for one analyzed meal.

use serde::{Deserialize, Serialize};

/// Comprehensive nutrition information for the whole meal.
///
/// One record per analysis, produced by the nutrition stage and immutable
/// afterwards. Every field is expected to be finite and non-negative;
/// violations are reported as verification issues, never hard errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionData {
    /// grams
    pub protein: f64,
    /// grams
    pub carbohydrates: f64,
    /// grams
    pub fats: f64,
    /// grams
    pub fiber: f64,
    /// kcal
    pub calories: f64,
    /// mg
    pub sodium: f64,
    /// grams
    pub sugar: f64,
    /// mg
    pub cholesterol: f64,
    /// mg
    pub vitamin_c: f64,
    /// mg
    pub calcium: f64,
    /// mg
    pub iron: f64,
}

impl NutritionData {
    /// Expected calories from the macro split (4/4/9 kcal per gram).
    pub fn expected_calories(&self) -> f64 {
        self.protein * 4.0 + self.carbohydrates * 4.0 + self.fats * 9.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_calories_uses_4_4_9_factors() {
        let n = NutritionData {
            protein: 20.0,
            carbohydrates: 30.0,
            fats: 15.0,
            fiber: 5.0,
            calories: 300.0,
            sodium: 500.0,
            sugar: 5.0,
            cholesterol: 50.0,
            vitamin_c: 10.0,
            calcium: 100.0,
            iron: 2.5,
        };
        assert_eq!(n.expected_calories(), 335.0);
    }
}
