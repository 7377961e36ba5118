use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    pub store: StoreBackend,
    pub static_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Mongo,
    Memory,
}

impl ExerciseConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let mut common = core_config::Config::load()?;

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        if let Ok(port) = env::var("PORT") {
            common.port = parse_port(&port)?;
        }
        if let Ok(level) = env::var("LOG_LEVEL") {
            common.log_level = level;
        }
        if let Ok(endpoint) = env::var("OTLP_ENDPOINT") {
            common.otlp_endpoint = Some(endpoint).filter(|e| !e.is_empty());
        }

        let store: StoreBackend = get_env("STORE_BACKEND", Some("mongo"), false)?
            .parse()
            .map_err(|e: String| AppError::ConfigError(anyhow::anyhow!(e)))?;

        // The database URI is only mandatory when MongoDB backs the store
        let uri = match store {
            StoreBackend::Mongo => get_env("MONGO_URI", None, is_prod)?,
            StoreBackend::Memory => env::var("MONGO_URI").unwrap_or_default(),
        };

        Ok(ExerciseConfig {
            common,
            mongodb: MongoConfig {
                uri,
                database: get_env("MONGO_DATABASE", Some("exercise_tracker"), is_prod)?,
            },
            store,
            static_dir: get_env("STATIC_DIR", Some("public"), false)?,
        })
    }

    /// Configuration for an in-process store, no database required.
    pub fn in_memory() -> Self {
        ExerciseConfig {
            common: core_config::Config::default(),
            mongodb: MongoConfig {
                uri: String::new(),
                database: "exercise_tracker".to_string(),
            },
            store: StoreBackend::Memory,
            static_dir: "public".to_string(),
        }
    }
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreBackend::Mongo),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(format!("Invalid store backend: {}", s)),
        }
    }
}

fn parse_port(raw: &str) -> Result<u16, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::ConfigError(anyhow::anyhow!("Invalid PORT value: {}", raw)))
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required in production but not set",
                    key
                ))))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required but not set",
                    key
                ))))
            }
        }
    }
}
