//! Platelens - agentic food image analysis pipeline.
//!
//! Five-stage workflow over one external generation service:
//! Planning -> Nutrition -> (Health || MealPlanning) -> Verification.
//! Each stage recovers typed records from free-form model output through
//! the structured extractor, falling back to safe defaults on parse
//! failure. Transport and response errors abort the whole analysis.

pub mod agents;
pub mod client;
pub mod extract;
pub mod fake;
pub mod imageio;
pub mod pipeline;
pub mod report;
pub mod verify;

pub use client::{GenerationClient, OpenAiClient};
pub use fake::{FakeGenerationClient, FakeGenerationClientBuilder};
pub use pipeline::Pipeline;
pub use verify::verify_analysis;
