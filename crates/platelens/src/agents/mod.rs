//! Stage agents.
//!
//! Each agent is one pure transform: build prompt -> call the generation
//! client -> run the output through the structured extractor with a local
//! fallback -> map the extracted value into typed records, tolerating
//! missing fields. A transport/response error from the client propagates
//! uncaught; an extraction failure never does.

pub mod health;
pub mod meal_planning;
pub mod nutrition;
pub mod planning;

pub use health::HealthAgent;
pub use meal_planning::MealPlanningAgent;
pub use nutrition::NutritionAgent;
pub use planning::PlanningAgent;

/// Sampling temperature shared by every stage.
pub(crate) const STAGE_TEMPERATURE: f64 = 0.1;
