use anyhow::{bail, Context, Result};

use crate::scoring::weights::ScoringWeights;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub s3_bucket: String,
    pub s3_endpoint: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub port: u16,
    pub rust_log: String,
    pub scoring_weights: ScoringWeights,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let scoring_weights = match std::env::var("SCORING_WEIGHTS") {
            Ok(raw) => parse_scoring_weights(&raw)?,
            Err(_) => ScoringWeights::default(),
        };

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            s3_bucket: require_env("S3_BUCKET")?,
            s3_endpoint: require_env("S3_ENDPOINT")?,
            aws_access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
            aws_secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            scoring_weights,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Parses `SCORING_WEIGHTS` in the form `skills,interests,personality`.
fn parse_scoring_weights(raw: &str) -> Result<ScoringWeights> {
    let parts = raw
        .split(',')
        .map(|p| {
            p.trim()
                .parse::<f64>()
                .with_context(|| format!("SCORING_WEIGHTS component '{}' is not a number", p.trim()))
        })
        .collect::<Result<Vec<f64>>>()?;

    let &[skills, interests, personality] = parts.as_slice() else {
        bail!("SCORING_WEIGHTS must have exactly three components, got {}", parts.len());
    };

    if parts.iter().any(|w| !w.is_finite() || *w < 0.0) {
        bail!("SCORING_WEIGHTS components must be non-negative");
    }
    if skills + interests + personality <= 0.0 {
        bail!("SCORING_WEIGHTS must have a positive sum");
    }

    Ok(ScoringWeights {
        skills,
        interests,
        personality,
    })
}
