//! CLI module for the disease predictor
//!
//! Provides subcommands:
//! - `serve`: HTTP prediction server (default)
//! - `predict`: one-off prediction printed as JSON
//! - `inspect`: summary of the loaded artifacts

pub mod inspect;
pub mod predict;
pub mod serve;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::AppConfig;

/// Disease Predictor - symptom text classification over HTTP
#[derive(Parser)]
#[command(name = "disease-predictor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP prediction server
    Serve(serve::ServeArgs),

    /// Predict a disease for the given symptoms and print the JSON response
    Predict(predict::PredictArgs),

    /// Print a summary of the model and vectorizer artifacts
    Inspect(ArtifactArgs),
}

impl Default for Command {
    fn default() -> Self {
        Self::Serve(serve::ServeArgs::default())
    }
}

/// Overrides for the artifact locations
#[derive(Args, Debug, Clone, Default)]
pub struct ArtifactArgs {
    /// Path of the classifier artifact
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Path of the vectorizer artifact
    #[arg(long)]
    pub vectorizer: Option<PathBuf>,
}

impl ArtifactArgs {
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(model) = &self.model {
            config.artifacts.model_path = model.clone();
        }
        if let Some(vectorizer) = &self.vectorizer {
            config.artifacts.vectorizer_path = vectorizer.clone();
        }
    }
}

/// Load `.env` and the layered configuration
pub fn load_config() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();
    Ok(AppConfig::load()?)
}
