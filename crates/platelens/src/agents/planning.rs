//! Planning stage: image -> analysis plan.
//!
//! The only stage that embeds the image in its request.

use crate::agents::STAGE_TEMPERATURE;
use crate::client::GenerationClient;
use crate::extract::{extract, JsonShape};
use platelens_common::{
    clamp_unit, prompts, AnalysisPlan, ChatMessage, ChatRequest, FoodItem, GenerationError,
    MealComplexity,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

const MAX_TOKENS: u32 = 800;

pub struct PlanningAgent {
    client: Arc<dyn GenerationClient>,
    model: String,
}

impl PlanningAgent {
    pub fn new(client: Arc<dyn GenerationClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Analyze the food image and produce an analysis plan.
    pub async fn run(&self, image_base64: &str) -> Result<AnalysisPlan, GenerationError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user_with_image(
                prompts::planning_prompt(),
                image_base64,
            )],
            max_tokens: MAX_TOKENS,
            temperature: STAGE_TEMPERATURE,
        };

        let response = self.client.complete(request).await?;
        let extracted = extract(&response, JsonShape::Object, fallback_plan_value());
        if extracted.used_fallback {
            warn!("planning response unparseable, using fallback plan");
        }
        let plan = map_plan(&extracted.value);
        debug!(
            "planning stage produced {} item(s), complexity {:?}",
            plan.food_items.len(),
            plan.complexity
        );
        Ok(plan)
    }
}

/// Safe default plan when the planning response cannot be parsed: a single
/// clearly-labeled placeholder item rather than an empty pipeline.
fn fallback_plan_value() -> Value {
    json!({
        "food_items": [{
            "name": "unknown_food",
            "category": "mixed",
            "estimated_weight": 150,
            "preparation": "unknown",
            "confidence": 0.5
        }],
        "complexity": "moderate",
        "analysis_focus": ["nutrition", "health"],
        "special_considerations": [],
        "recommended_agents": ["nutrition", "health", "verification"]
    })
}

fn map_plan(v: &Value) -> AnalysisPlan {
    let food_items = v
        .get("food_items")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(map_food_item).collect())
        .unwrap_or_default();

    AnalysisPlan {
        food_items,
        complexity: MealComplexity::from_label(
            v.get("complexity").and_then(Value::as_str).unwrap_or(""),
        ),
        analysis_focus: string_list(v.get("analysis_focus")),
        special_considerations: string_list(v.get("special_considerations")),
        recommended_agents: string_list(v.get("recommended_agents")),
    }
}

fn map_food_item(v: &Value) -> Option<FoodItem> {
    if !v.is_object() {
        return None;
    }
    let estimated_weight = v
        .get("estimated_weight")
        .and_then(Value::as_f64)
        .unwrap_or(150.0);
    Some(FoodItem {
        name: v
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("unknown_food")
            .to_string(),
        category: v
            .get("category")
            .and_then(Value::as_str)
            .unwrap_or("mixed")
            .to_string(),
        portion_size: format!("{}g", estimated_weight),
        confidence: clamp_unit(v.get("confidence").and_then(Value::as_f64).unwrap_or(0.5)),
        preparation_method: v
            .get("preparation")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string(),
        estimated_weight,
    })
}

fn string_list(v: Option<&Value>) -> Vec<String> {
    v.and_then(Value::as_array)
        .map(|a| {
            a.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_maps_items_and_complexity() {
        let v = json!({
            "food_items": [
                {"name": "grilled salmon", "category": "protein",
                 "estimated_weight": 180.0, "preparation": "grilled", "confidence": 0.92},
                {"name": "rice", "category": "grain",
                 "estimated_weight": 120.0, "preparation": "steamed", "confidence": 0.85}
            ],
            "complexity": "complex",
            "analysis_focus": ["nutrition"],
            "recommended_agents": ["nutrition", "health"]
        });
        let plan = map_plan(&v);
        assert_eq!(plan.food_items.len(), 2);
        assert_eq!(plan.food_items[0].portion_size, "180g");
        assert_eq!(plan.complexity, MealComplexity::Complex);
        assert_eq!(plan.recommended_agents, vec!["nutrition", "health"]);
        assert!(plan.special_considerations.is_empty());
    }

    #[test]
    fn missing_item_fields_get_defaults_and_clamped_confidence() {
        let v = json!({"food_items": [{"confidence": 1.8}]});
        let plan = map_plan(&v);
        assert_eq!(plan.food_items[0].name, "unknown_food");
        assert_eq!(plan.food_items[0].estimated_weight, 150.0);
        assert_eq!(plan.food_items[0].confidence, 1.0);
        assert_eq!(plan.complexity, MealComplexity::Moderate);
    }

    #[test]
    fn fallback_plan_carries_one_placeholder_item() {
        let plan = map_plan(&fallback_plan_value());
        assert_eq!(plan.food_items.len(), 1);
        assert_eq!(plan.food_items[0].name, "unknown_food");
        assert_eq!(plan.food_items[0].confidence, 0.5);
    }
}
