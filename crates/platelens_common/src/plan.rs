//! Analysis plan produced by the planning stage.

use crate::food::FoodItem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealComplexity {
    Simple,
    Moderate,
    Complex,
}

impl MealComplexity {
    /// Lenient mapping from model output; defaults to `Moderate`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "simple" => Self::Simple,
            "complex" => Self::Complex,
            _ => Self::Moderate,
        }
    }
}

/// Strategy record from the planning stage.
///
/// The food item list drives every downstream stage; the remaining fields
/// are advisory context carried along for the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPlan {
    pub food_items: Vec<FoodItem>,
    pub complexity: MealComplexity,
    pub analysis_focus: Vec<String>,
    pub special_considerations: Vec<String>,
    pub recommended_agents: Vec<String>,
}
