//! Pipeline orchestrator.
//!
//! Owns the five-stage sequence Planning -> Nutrition -> (Health ||
//! MealPlanning) -> Verification, threads typed outputs between stages and
//! maintains the per-invocation coordination log. Health and meal planning
//! only depend on nutrition, so they run concurrently; their log entries
//! are appended in logical order before the join, keeping the log
//! deterministic regardless of completion order.

use crate::agents::{HealthAgent, MealPlanningAgent, NutritionAgent, PlanningAgent};
use crate::client::{GenerationClient, OpenAiClient};
use crate::verify;
use chrono::Utc;
use platelens_common::{
    aggregate_item_confidence, clamp_unit, mean, AnalysisResult, CoordinationLog, GenerationError,
    UserProfile,
};
use std::sync::Arc;
use tracing::{error, info};

const DEFAULT_MODEL: &str = "gpt-4-vision-preview";

/// Multi-stage food analysis pipeline over one shared generation client.
///
/// Holds no per-call state: concurrent analyses each own their log and
/// intermediate values.
pub struct Pipeline {
    planning: PlanningAgent,
    nutrition: NutritionAgent,
    health: HealthAgent,
    meal_planning: MealPlanningAgent,
}

impl Pipeline {
    /// Production pipeline against the real generation service. The
    /// credential is supplied once and shared by every stage.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_client(Arc::new(OpenAiClient::new(api_key)), DEFAULT_MODEL)
    }

    /// Pipeline over any client implementation (fakes in tests, alternate
    /// gateways in production).
    pub fn with_client(client: Arc<dyn GenerationClient>, model: impl Into<String>) -> Self {
        let model = model.into();
        Self {
            planning: PlanningAgent::new(client.clone(), model.clone()),
            nutrition: NutritionAgent::new(client.clone(), model.clone()),
            health: HealthAgent::new(client.clone(), model.clone()),
            meal_planning: MealPlanningAgent::new(client, model),
        }
    }

    /// Run the complete analysis for one image.
    ///
    /// Returns the assembled result, or the first stage's generation error;
    /// there is no partial success state. Extraction failures inside stages
    /// are absorbed by fallbacks and only lower confidence.
    pub async fn analyze_food_image(
        &self,
        image_base64: &str,
        user_profile: Option<&UserProfile>,
    ) -> Result<AnalysisResult, GenerationError> {
        let start_time = Utc::now();
        let mut log = CoordinationLog::new();

        match self
            .run_stages(image_base64, user_profile, &mut log, start_time)
            .await
        {
            Ok(result) => Ok(result),
            Err(e) => {
                log.push(format!("Error in workflow: {}", e));
                error!("analysis aborted: {}", e);
                Err(e)
            }
        }
    }

    async fn run_stages(
        &self,
        image_base64: &str,
        user_profile: Option<&UserProfile>,
        log: &mut CoordinationLog,
        start_time: chrono::DateTime<Utc>,
    ) -> Result<AnalysisResult, GenerationError> {
        log.push("Planning Agent: Analyzing image and creating analysis strategy");
        let plan = self.planning.run(image_base64).await?;
        let food_items = plan.food_items;

        log.push("Nutrition Agent: Calculating comprehensive nutrition data");
        let nutrition = self.nutrition.run(&food_items).await?;

        // Both remaining analysis stages depend only on nutrition; log them
        // in logical order, then run them concurrently.
        log.push("Health Agent: Generating personalized health recommendations");
        log.push("Meal Planning Agent: Suggesting complementary foods");
        let (health_recommendations, meal_suggestions) = tokio::join!(
            self.health.run(&nutrition, &food_items, user_profile),
            self.meal_planning.run(&nutrition, &food_items),
        );
        let health_recommendations = health_recommendations?;
        let meal_suggestions = meal_suggestions?;

        let overall_confidence = aggregate_item_confidence(&food_items);

        let preliminary = AnalysisResult {
            food_items,
            nutrition,
            health_recommendations,
            meal_suggestions,
            confidence_score: overall_confidence,
            analysis_timestamp: start_time,
            coordination_log: log.clone(),
        };

        log.push("Verification Agent: Validating analysis results");
        let verification = verify::verify_analysis(&preliminary);

        let final_confidence = clamp_unit(mean(&[overall_confidence, verification.confidence]));
        log.push(format!(
            "Analysis completed with confidence: {:.2}",
            final_confidence
        ));
        info!(
            "analysis complete: confidence {:.2}, verified {}, {} issue(s)",
            final_confidence,
            verification.verified,
            verification.issues.len()
        );

        Ok(AnalysisResult {
            confidence_score: final_confidence,
            coordination_log: log.clone(),
            ..preliminary
        })
    }
}
