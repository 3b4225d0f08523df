//! Detected food items and complementary food suggestions.

use serde::{Deserialize, Serialize};

/// One food item detected by the planning stage.
///
/// Read-only after planning; confidence is in [0,1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub category: String,
    /// Textual portion description, e.g. "150g".
    pub portion_size: String,
    pub confidence: f64,
    pub preparation_method: String,
    /// grams
    pub estimated_weight: f64,
}

/// Complementary food suggested by the meal planning stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSuggestion {
    pub food_name: String,
    pub category: String,
    pub reason: String,
    pub nutritional_benefit: String,
}
