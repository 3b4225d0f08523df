//! Nutrition stage: planned food items -> one aggregate nutrition record.

use crate::agents::STAGE_TEMPERATURE;
use crate::client::GenerationClient;
use crate::extract::{extract, JsonShape};
use platelens_common::{
    prompts, ChatMessage, ChatRequest, FoodItem, GenerationError, NutritionData,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

const MAX_TOKENS: u32 = 400;

pub struct NutritionAgent {
    client: Arc<dyn GenerationClient>,
    model: String,
}

impl NutritionAgent {
    pub fn new(client: Arc<dyn GenerationClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Aggregate nutrition across all detected items. An empty item list is
    /// valid input and must not fail.
    pub async fn run(&self, items: &[FoodItem]) -> Result<NutritionData, GenerationError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompts::nutrition_prompt(items))],
            max_tokens: MAX_TOKENS,
            temperature: STAGE_TEMPERATURE,
        };

        let response = self.client.complete(request).await?;
        let extracted = extract(&response, JsonShape::Object, fallback_nutrition_value());
        if extracted.used_fallback {
            warn!("nutrition response unparseable, using fallback nutrition data");
        }
        Ok(map_nutrition(&extracted.value))
    }
}

/// Safe default nutrition record for a typical mixed meal.
fn fallback_nutrition_value() -> Value {
    json!({
        "protein": 20.0, "carbohydrates": 30.0, "fats": 15.0, "fiber": 5.0,
        "calories": 300.0, "sodium": 500.0, "sugar": 5.0, "cholesterol": 50.0,
        "vitamin_c": 10.0, "calcium": 100.0, "iron": 2.5
    })
}

fn field(v: &Value, key: &str) -> f64 {
    v.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

fn map_nutrition(v: &Value) -> NutritionData {
    NutritionData {
        protein: field(v, "protein"),
        carbohydrates: field(v, "carbohydrates"),
        fats: field(v, "fats"),
        fiber: field(v, "fiber"),
        calories: field(v, "calories"),
        sodium: field(v, "sodium"),
        sugar: field(v, "sugar"),
        cholesterol: field(v, "cholesterol"),
        vitamin_c: field(v, "vitamin_c"),
        calcium: field(v, "calcium"),
        iron: field(v, "iron"),
    }
}
