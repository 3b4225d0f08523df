//! Health stage: nutrition + items + optional profile -> recommendations.

use crate::agents::STAGE_TEMPERATURE;
use crate::client::GenerationClient;
use crate::extract::{extract, JsonShape};
use platelens_common::{
    prompts, ChatMessage, ChatRequest, FoodItem, GenerationError, HealthRecommendation,
    NutritionData, Priority, RecommendationCategory, UserProfile,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

const MAX_TOKENS: u32 = 600;

pub struct HealthAgent {
    client: Arc<dyn GenerationClient>,
    model: String,
}

impl HealthAgent {
    pub fn new(client: Arc<dyn GenerationClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Produce an ordered recommendation list (typically 3-5, not
    /// enforced). The item list is part of the stage contract but the
    /// prompt is driven by the aggregate nutrition alone.
    pub async fn run(
        &self,
        nutrition: &NutritionData,
        _items: &[FoodItem],
        profile: Option<&UserProfile>,
    ) -> Result<Vec<HealthRecommendation>, GenerationError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompts::health_prompt(nutrition, profile))],
            max_tokens: MAX_TOKENS,
            temperature: STAGE_TEMPERATURE,
        };

        let response = self.client.complete(request).await?;
        let extracted = extract(&response, JsonShape::Array, fallback_recommendations_value());
        if extracted.used_fallback {
            warn!("health response unparseable, using fallback recommendation");
        }
        Ok(map_recommendations(&extracted.value))
    }
}

/// Safe default: one conservative, clearly-generic recommendation.
fn fallback_recommendations_value() -> Value {
    json!([{
        "category": "nutrient_balance",
        "message": "Consider adding more vegetables to increase fiber and micronutrients.",
        "priority": "medium",
        "reasoning": "Current fiber content could be higher for optimal digestive health."
    }])
}

fn map_recommendations(v: &Value) -> Vec<HealthRecommendation> {
    v.as_array()
        .map(|recs| {
            recs.iter()
                .filter(|r| r.is_object())
                .map(|r| HealthRecommendation {
                    category: RecommendationCategory::from_label(
                        r.get("category").and_then(Value::as_str).unwrap_or(""),
                    ),
                    message: r
                        .get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .to_string(),
                    priority: Priority::from_label(
                        r.get("priority").and_then(Value::as_str).unwrap_or(""),
                    ),
                    reasoning: r
                        .get("reasoning")
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}
