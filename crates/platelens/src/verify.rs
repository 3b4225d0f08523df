//! Self-verification of the assembled analysis.
//!
//! Pure local checks, no external call. Consistency findings are advisory:
//! they lower confidence but never abort the analysis.

use platelens_common::{
    clamp_unit, mean, AnalysisResult, HealthRecommendation, NutritionData, VerificationOutcome,
};

/// Absolute kcal difference tolerated between stated calories and the
/// 4/4/9 macro estimate.
const CALORIE_TOLERANCE_KCAL: f64 = 50.0;
/// Sodium above this is flagged as an extreme value (mg).
const SODIUM_EXTREME_MG: f64 = 2000.0;
/// Sodium above this should be addressed by a recommendation (mg).
const SODIUM_ADVISORY_MG: f64 = 800.0;
/// Fiber below this should be addressed by a recommendation (g).
const FIBER_LOW_G: f64 = 5.0;
/// Overall confidence must strictly exceed this to count as verified.
const VERIFIED_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CheckStatus {
    Pass,
    Warnings,
}

impl CheckStatus {
    fn as_str(self) -> &'static str {
        match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Warnings => "WARNINGS",
        }
    }
}

#[derive(Debug)]
struct CheckReport {
    confidence: f64,
    status: CheckStatus,
    issues: Vec<String>,
}

impl CheckReport {
    fn from_issues(issues: Vec<String>, clean_confidence: f64, dirty_confidence: f64) -> Self {
        if issues.is_empty() {
            Self {
                confidence: clean_confidence,
                status: CheckStatus::Pass,
                issues,
            }
        } else {
            Self {
                confidence: dirty_confidence,
                status: CheckStatus::Warnings,
                issues,
            }
        }
    }
}

/// Cross-check the complete analysis and compute the overall verification
/// confidence: the unweighted mean of the nutrition check, the
/// recommendation check, and the result's pre-verification confidence.
pub fn verify_analysis(result: &AnalysisResult) -> VerificationOutcome {
    let nutrition_check = verify_nutrition_values(&result.nutrition);
    let recommendation_check =
        verify_recommendations(&result.health_recommendations, &result.nutrition);

    let overall_confidence = clamp_unit(mean(&[
        nutrition_check.confidence,
        recommendation_check.confidence,
        result.confidence_score,
    ]));

    let mut issues = nutrition_check.issues.clone();
    issues.extend(recommendation_check.issues.iter().cloned());

    let summary = format!(
        "Verification Results:\n- Nutrition Data: {}\n- Recommendations: {}\n- Overall Confidence: {:.2}\n\nIssues Found: {:?}",
        nutrition_check.status.as_str(),
        recommendation_check.status.as_str(),
        overall_confidence,
        issues,
    );

    VerificationOutcome {
        verified: overall_confidence > VERIFIED_THRESHOLD,
        confidence: overall_confidence,
        summary,
        issues,
        improvement_suggestions: suggest_improvements(result),
    }
}

/// Nutrition consistency: negative macros, 4/4/9 calorie mismatch beyond
/// tolerance, extreme sodium.
fn verify_nutrition_values(nutrition: &NutritionData) -> CheckReport {
    let mut issues = Vec::new();

    if nutrition.protein < 0.0 || nutrition.carbohydrates < 0.0 || nutrition.fats < 0.0 {
        issues.push("Negative macronutrient values detected".to_string());
    }
    if !macro_fields_finite(nutrition) {
        issues.push("Non-finite nutrient values detected".to_string());
    }

    let calculated = nutrition.expected_calories();
    if (nutrition.calories - calculated).abs() > CALORIE_TOLERANCE_KCAL {
        issues.push(format!(
            "Calorie calculation mismatch: {} vs {}",
            nutrition.calories, calculated
        ));
    }

    if nutrition.sodium > SODIUM_EXTREME_MG {
        issues.push("Very high sodium content detected".to_string());
    }

    CheckReport::from_issues(issues, 0.9, 0.6)
}

fn macro_fields_finite(n: &NutritionData) -> bool {
    [
        n.protein,
        n.carbohydrates,
        n.fats,
        n.fiber,
        n.calories,
        n.sodium,
        n.sugar,
        n.cholesterol,
        n.vitamin_c,
        n.calcium,
        n.iron,
    ]
    .iter()
    .all(|v| v.is_finite())
}

/// Recommendation relevance: list must not be empty, and notable sodium or
/// fiber findings must be mentioned by at least one message.
fn verify_recommendations(
    recommendations: &[HealthRecommendation],
    nutrition: &NutritionData,
) -> CheckReport {
    let mut issues = Vec::new();

    if recommendations.is_empty() {
        issues.push("No health recommendations provided".to_string());
    }

    let mentions = |needle: &str| {
        recommendations
            .iter()
            .any(|rec| rec.message.to_lowercase().contains(needle))
    };

    if nutrition.sodium > SODIUM_ADVISORY_MG && !mentions("sodium") {
        issues.push("High sodium not addressed in recommendations".to_string());
    }
    if nutrition.fiber < FIBER_LOW_G && !mentions("fiber") {
        issues.push("Low fiber not addressed in recommendations".to_string());
    }

    CheckReport::from_issues(issues, 0.8, 0.5)
}

/// Advisory text only; no behavioral effect on the pipeline.
fn suggest_improvements(result: &AnalysisResult) -> Vec<String> {
    let mut suggestions = Vec::new();

    if result.confidence_score < 0.8 {
        suggestions
            .push("Consider requesting clearer food images for better identification".to_string());
    }
    if result.health_recommendations.len() < 3 {
        suggestions.push("Generate more comprehensive health recommendations".to_string());
    }
    if result.meal_suggestions.is_empty() {
        suggestions.push("Include meal planning suggestions for complete nutrition".to_string());
    }

    suggestions
}
