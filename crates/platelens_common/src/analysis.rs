//! Final analysis result, coordination log and verification outcome.

use crate::food::{FoodItem, MealSuggestion};
use crate::nutrition::NutritionData;
use crate::recommendation::HealthRecommendation;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Ordered, timestamped record of pipeline progress.
///
/// Owned by one analysis invocation; never shared across invocations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoordinationLog {
    entries: Vec<String>,
}

impl CoordinationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one `[HH:MM:SS] message` entry.
    pub fn push(&mut self, message: impl AsRef<str>) {
        let timestamp = Local::now().format("%H:%M:%S");
        self.entries.push(format!("[{}] {}", timestamp, message.as_ref()));
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Complete analysis result assembled by the pipeline.
///
/// Immutable once returned; verification reads it and yields an adjusted
/// confidence rather than mutating it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub food_items: Vec<FoodItem>,
    pub nutrition: NutritionData,
    pub health_recommendations: Vec<HealthRecommendation>,
    pub meal_suggestions: Vec<MealSuggestion>,
    /// Aggregate confidence in [0,1].
    pub confidence_score: f64,
    pub analysis_timestamp: DateTime<Utc>,
    pub coordination_log: CoordinationLog,
}

/// Result of the self-verification stage.
///
/// Ephemeral: the pipeline folds only the numeric confidence back into the
/// final result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationOutcome {
    /// True iff the overall confidence strictly exceeds 0.7.
    pub verified: bool,
    pub confidence: f64,
    pub summary: String,
    pub issues: Vec<String>,
    pub improvement_suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_entries_carry_timestamps_in_order() {
        let mut log = CoordinationLog::new();
        log.push("PlanningAgent: starting");
        log.push("NutritionAgent: starting");
        assert_eq!(log.entries().len(), 2);
        assert!(log.entries()[0].contains("PlanningAgent: starting"));
        assert!(log.entries()[0].starts_with('['));
        assert!(log.entries()[1].contains("NutritionAgent"));
    }
}
