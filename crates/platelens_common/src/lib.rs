//! Platelens Common - Shared types and schemas for the food analysis pipeline.
//!
//! Pure data model, error taxonomy, chat wire types, prompt builders and
//! confidence arithmetic. No I/O lives in this crate.

pub mod analysis;
pub mod chat;
pub mod confidence;
pub mod error;
pub mod food;
pub mod nutrition;
pub mod plan;
pub mod profile;
pub mod prompts;
pub mod recommendation;

pub use analysis::{AnalysisResult, CoordinationLog, VerificationOutcome};
pub use chat::{ChatMessage, ChatRequest, ChatResponse, ContentBlock, MessageContent};
pub use confidence::{aggregate_item_confidence, clamp_unit, mean};
pub use error::{GenerationError, PlateError};
pub use food::{FoodItem, MealSuggestion};
pub use nutrition::NutritionData;
pub use plan::{AnalysisPlan, MealComplexity};
pub use profile::UserProfile;
pub use recommendation::{HealthRecommendation, Priority, RecommendationCategory};
