//! Meal planning stage: nutrition + items -> complementary food suggestions.

use crate::agents::STAGE_TEMPERATURE;
use crate::client::GenerationClient;
use crate::extract::{extract, JsonShape};
use platelens_common::{
    prompts, ChatMessage, ChatRequest, FoodItem, GenerationError, MealSuggestion, NutritionData,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

const MAX_TOKENS: u32 = 500;

pub struct MealPlanningAgent {
    client: Arc<dyn GenerationClient>,
    model: String,
}

impl MealPlanningAgent {
    pub fn new(client: Arc<dyn GenerationClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Suggest complementary foods (typically 3-4, not enforced).
    pub async fn run(
        &self,
        nutrition: &NutritionData,
        items: &[FoodItem],
    ) -> Result<Vec<MealSuggestion>, GenerationError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompts::meal_planning_prompt(
                nutrition, items,
            ))],
            max_tokens: MAX_TOKENS,
            temperature: STAGE_TEMPERATURE,
        };

        let response = self.client.complete(request).await?;
        let extracted = extract(&response, JsonShape::Array, fallback_suggestions_value());
        if extracted.used_fallback {
            warn!("meal planning response unparseable, using fallback suggestion");
        }
        Ok(map_suggestions(&extracted.value))
    }
}

/// Safe default: one broadly applicable suggestion.
fn fallback_suggestions_value() -> Value {
    json!([{
        "food_name": "Mixed green salad",
        "category": "vegetable",
        "reason": "Adds fiber and micronutrients",
        "nutritional_benefit": "Vitamins A, C, K and folate"
    }])
}

fn map_suggestions(v: &Value) -> Vec<MealSuggestion> {
    v.as_array()
        .map(|suggestions| {
            suggestions
                .iter()
                .filter(|s| s.is_object())
                .map(|s| MealSuggestion {
                    food_name: s
                        .get("food_name")
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .to_string(),
                    category: s
                        .get("category")
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .to_string(),
                    reason: s
                        .get("reason")
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .to_string(),
                    nutritional_benefit: s
                        .get("nutritional_benefit")
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_map_in_order() {
        let v = json!([
            {"food_name": "Steamed broccoli", "category": "vegetable",
             "reason": "Adds fiber", "nutritional_benefit": "Vitamin C and K"},
            {"food_name": "Greek yogurt", "category": "dairy",
             "reason": "Adds protein", "nutritional_benefit": "Calcium and probiotics"}
        ]);
        let suggestions = map_suggestions(&v);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].food_name, "Steamed broccoli");
        assert_eq!(suggestions[1].category, "dairy");
    }

    #[test]
    fn fallback_is_a_single_salad_suggestion() {
        let suggestions = map_suggestions(&fallback_suggestions_value());
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].food_name, "Mixed green salad");
    }
}
