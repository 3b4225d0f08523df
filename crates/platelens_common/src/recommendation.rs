//! Personalized health recommendations.

use serde::{Deserialize, Serialize};

/// Fixed recommendation taxonomy.
///
/// Unknown strings from the model map to `NutrientBalance` rather than
/// failing extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    PortionControl,
    NutrientBalance,
    Timing,
    Optimization,
}

impl RecommendationCategory {
    /// Lenient mapping from model output.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "portion_control" => Self::PortionControl,
            "timing" => Self::Timing,
            "optimization" => Self::Optimization,
            _ => Self::NutrientBalance,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Lenient mapping from model output; defaults to `Medium`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "high" => Self::High,
            "low" => Self::Low,
            _ => Self::Medium,
        }
    }
}

/// One actionable dietary recommendation from the health stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecommendation {
    pub category: RecommendationCategory,
    pub message: String,
    pub priority: Priority,
    pub reasoning: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_map_leniently() {
        assert_eq!(
            RecommendationCategory::from_label("portion_control"),
            RecommendationCategory::PortionControl
        );
        assert_eq!(
            RecommendationCategory::from_label("TIMING"),
            RecommendationCategory::Timing
        );
        assert_eq!(
            RecommendationCategory::from_label("something else"),
            RecommendationCategory::NutrientBalance
        );
    }

    #[test]
    fn priority_defaults_to_medium() {
        assert_eq!(Priority::from_label("high"), Priority::High);
        assert_eq!(Priority::from_label("urgent"), Priority::Medium);
    }
}
