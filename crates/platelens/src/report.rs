//! Plain-text report rendering.
//!
//! Presentation only; the core never prints.

use platelens_common::{AnalysisResult, Priority};
use std::fmt::Write;

const RULE: &str = "============================================================";

/// Render the complete analysis as a human-readable report.
pub fn render(result: &AnalysisResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "FOOD ANALYSIS RESULTS");
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(
        out,
        "Analysis Confidence: {:.1}%",
        result.confidence_score * 100.0
    );
    let _ = writeln!(
        out,
        "Analysis Time: {}",
        result.analysis_timestamp.format("%Y-%m-%d %H:%M:%S")
    );

    let _ = writeln!(out, "\nIdentified Foods:");
    for item in &result.food_items {
        let _ = writeln!(
            out,
            "  - {} ({}) - {:.1}% confidence",
            item.name,
            item.portion_size,
            item.confidence * 100.0
        );
    }

    let n = &result.nutrition;
    let _ = writeln!(out, "\nNutrition Analysis:");
    let _ = writeln!(out, "  Calories: {} kcal", n.calories);
    let _ = writeln!(out, "  Protein: {}g", n.protein);
    let _ = writeln!(out, "  Carbohydrates: {}g", n.carbohydrates);
    let _ = writeln!(out, "  Fats: {}g", n.fats);
    let _ = writeln!(out, "  Fiber: {}g", n.fiber);
    let _ = writeln!(out, "  Sodium: {}mg", n.sodium);
    let _ = writeln!(out, "  Sugar: {}g", n.sugar);
    let _ = writeln!(out, "  Cholesterol: {}mg", n.cholesterol);
    let _ = writeln!(out, "  Vitamin C: {}mg", n.vitamin_c);
    let _ = writeln!(out, "  Calcium: {}mg", n.calcium);
    let _ = writeln!(out, "  Iron: {}mg", n.iron);

    let _ = writeln!(out, "\nHealth Recommendations:");
    for rec in &result.health_recommendations {
        let marker = match rec.priority {
            Priority::High => "[!]",
            Priority::Medium => "[~]",
            Priority::Low => "[.]",
        };
        let _ = writeln!(out, "  {} {}", marker, rec.message);
        let _ = writeln!(out, "      Reasoning: {}", rec.reasoning);
    }

    let _ = writeln!(out, "\nMeal Suggestions:");
    for suggestion in &result.meal_suggestions {
        let _ = writeln!(out, "  - {}: {}", suggestion.food_name, suggestion.reason);
        let _ = writeln!(out, "    Benefit: {}", suggestion.nutritional_benefit);
    }

    let _ = writeln!(out, "\nAgent Coordination Log:");
    for entry in result.coordination_log.entries() {
        let _ = writeln!(out, "  {}", entry);
    }

    let _ = writeln!(out, "{}", RULE);
    out
}
