//! Platelens CLI - analyze one food image end to end.

use anyhow::{Context, Result};
use clap::Parser;
use platelens::{imageio, report, OpenAiClient, Pipeline};
use platelens_common::UserProfile;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_MODEL: &str = "gpt-4-vision-preview";

#[derive(Parser, Debug)]
#[command(name = "platelens", version, about = "Agentic food image analysis")]
struct Args {
    /// Path to the food image file
    #[arg(long)]
    image: PathBuf,

    /// Generation service API key (falls back to OPENAI_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Path to a JSON file with the user profile
    #[arg(long)]
    user_profile: Option<PathBuf>,

    /// Path to save the analysis result as JSON
    #[arg(long)]
    output: Option<PathBuf>,

    /// Vision-capable model identifier
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let api_key = match args.api_key {
        Some(key) => key,
        None => std::env::var("OPENAI_API_KEY")
            .context("no API key: pass --api-key or set OPENAI_API_KEY")?,
    };

    let user_profile = args.user_profile.as_deref().and_then(|path| {
        match std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|s| serde_json::from_str::<UserProfile>(&s).map_err(|e| e.to_string()))
        {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!("failed to load user profile {}: {}", path.display(), e);
                None
            }
        }
    });

    info!("loading image: {}", args.image.display());
    let image_base64 = imageio::load_image_as_base64(&args.image)?;

    let pipeline = Pipeline::with_client(Arc::new(OpenAiClient::new(api_key)), args.model);

    info!("starting multi-agent food analysis");
    let result = pipeline
        .analyze_food_image(&image_base64, user_profile.as_ref())
        .await
        .context("analysis failed")?;

    print!("{}", report::render(&result));

    if let Some(output) = args.output {
        let json = serde_json::to_string_pretty(&result)?;
        std::fs::write(&output, json)
            .with_context(|| format!("failed to write {}", output.display()))?;
        info!("results saved to {}", output.display());
    }

    Ok(())
}
