//! Per-stage prompt builders.
//!
//! Each stage sends exactly one user prompt; the expected response format is
//! strict JSON, but callers must still treat the output as untrusted and run
//! it through the structured extractor.

use crate::food::FoodItem;
use crate::nutrition::NutritionData;
use crate::profile::UserProfile;

/// Planning stage prompt. The image travels alongside this text as a
/// separate content block.
pub fn planning_prompt() -> String {
    r#"You are a Planning Agent for food analysis. Examine this image and create a comprehensive analysis plan.

Identify:
1. All visible food items
2. Portion sizes and serving estimates
3. Preparation methods (grilled, fried, raw, etc.)
4. Food categories (protein, vegetables, grains, etc.)
5. Complexity level (simple single item vs. complex meal)
6. Special considerations (dietary restrictions, allergens)

Return a JSON object with your analysis plan:
{
    "food_items": [
        {
            "name": "item_name",
            "category": "category",
            "estimated_weight": weight_in_grams,
            "preparation": "method",
            "confidence": confidence_score
        }
    ],
    "complexity": "simple|moderate|complex",
    "analysis_focus": ["nutrition", "health", "meal_planning"],
    "special_considerations": ["allergen_info", "dietary_restrictions"],
    "recommended_agents": ["nutrition", "health", "meal_planning", "verification"]
}"#
    .to_string()
}

/// Nutrition stage prompt over the planned food item list.
pub fn nutrition_prompt(items: &[FoodItem]) -> String {
    let food_descriptions = items
        .iter()
        .map(|item| {
            format!(
                "- {}: {}g, {}",
                item.name, item.estimated_weight, item.preparation_method
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are a Nutrition Agent specializing in detailed macro and micronutrient analysis.

Based on the Planning Agent's analysis, calculate comprehensive nutrition data for:
{food_descriptions}

Consider:
- Preparation method effects on nutrients
- Portion sizes and weights
- Food interactions and bioavailability
- Cooking losses (vitamins, minerals)

Return detailed nutrition data as JSON:
{{
    "protein": grams,
    "carbohydrates": grams,
    "fats": grams,
    "fiber": grams,
    "calories": kcal,
    "sodium": mg,
    "sugar": grams,
    "cholesterol": mg,
    "vitamin_c": mg,
    "calcium": mg,
    "iron": mg
}}

Provide accurate estimates based on USDA nutrition database values."#
    )
}

/// Health stage prompt over nutrition data plus optional user context.
pub fn health_prompt(
    nutrition: &NutritionData,
    profile: Option<&UserProfile>,
) -> String {
    let nutrition_summary = format!(
        r#"Nutrition Analysis:
- Calories: {} kcal
- Protein: {}g
- Carbohydrates: {}g
- Fats: {}g
- Fiber: {}g
- Sodium: {}mg
- Sugar: {}g"#,
        nutrition.calories,
        nutrition.protein,
        nutrition.carbohydrates,
        nutrition.fats,
        nutrition.fiber,
        nutrition.sodium,
        nutrition.sugar,
    );

    let user_context = match profile {
        Some(p) => format!(
            r#"
User Profile:
- Age: {}
- Gender: {}
- Activity Level: {}
- Health Goals: {}
- Dietary Restrictions: {}"#,
            p.age.map(|a| a.to_string()).unwrap_or_else(|| "unknown".to_string()),
            p.gender.as_deref().unwrap_or("unknown"),
            p.activity_level.as_deref().unwrap_or("moderate"),
            if p.goals.is_empty() {
                "general wellness".to_string()
            } else {
                p.goals.join(", ")
            },
            p.restrictions.join(", "),
        ),
        None => String::new(),
    };

    format!(
        r#"You are a Health Agent providing personalized dietary recommendations.

{nutrition_summary}
{user_context}

Analyze this meal and provide 3-5 specific health recommendations. Consider:
- Nutritional balance and adequacy
- Portion appropriateness
- Timing considerations
- Health optimization opportunities
- Risk factors (sodium, sugar, saturated fat)

Return recommendations as JSON array:
[
    {{
        "category": "portion_control|nutrient_balance|timing|optimization",
        "message": "clear, actionable recommendation",
        "priority": "high|medium|low",
        "reasoning": "scientific basis for recommendation"
    }}
]"#
    )
}

/// Meal planning stage prompt over the current meal and its profile.
pub fn meal_planning_prompt(nutrition: &NutritionData, items: &[FoodItem]) -> String {
    let current_foods = items
        .iter()
        .map(|i| i.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"You are a Meal Planning Agent. Analyze the current meal and suggest complementary foods.

Current meal includes: {current_foods}

Nutritional profile:
- Protein: {}g
- Carbohydrates: {}g
- Fats: {}g
- Fiber: {}g
- Vitamin C: {}mg
- Calcium: {}mg
- Iron: {}mg

Suggest 3-4 complementary foods that would:
1. Balance the nutritional profile
2. Enhance nutrient absorption
3. Provide missing nutrients
4. Create a well-rounded meal

Return suggestions as JSON:
[
    {{
        "food_name": "specific food item",
        "category": "vegetable|fruit|grain|protein|dairy|fat",
        "reason": "why this food complements the meal",
        "nutritional_benefit": "specific nutrient benefits"
    }}
]"#,
        nutrition.protein,
        nutrition.carbohydrates,
        nutrition.fats,
        nutrition.fiber,
        nutrition.vitamin_c,
        nutrition.calcium,
        nutrition.iron,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_nutrition() -> NutritionData {
        NutritionData {
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
        }
    }

    #[test]
    fn nutrition_prompt_lists_each_item() {
        let items = vec![FoodItem {
            name: "salmon".to_string(),
            category: "protein".to_string(),
            portion_size: "180g".to_string(),
            confidence: 0.9,
            preparation_method: "grilled".to_string(),
            estimated_weight: 180.0,
        }];
        let prompt = nutrition_prompt(&items);
        assert!(prompt.contains("- salmon: 180g, grilled"));
    }

    #[test]
    fn health_prompt_omits_profile_when_absent() {
        let prompt = health_prompt(&sample_nutrition(), None);
        assert!(!prompt.contains("User Profile"));
        assert!(prompt.contains("Sodium: 500mg"));
    }

    #[test]
    fn health_prompt_defaults_missing_profile_fields() {
        let profile = UserProfile {
            age: Some(34),
            ..Default::default()
        };
        let prompt = health_prompt(&sample_nutrition(), Some(&profile));
        assert!(prompt.contains("Age: 34"));
        assert!(prompt.contains("Gender: unknown"));
        assert!(prompt.contains("Activity Level: moderate"));
        assert!(prompt.contains("Health Goals: general wellness"));
    }
}
