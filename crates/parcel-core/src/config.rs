//! Configuration module
//!
//! Settings for the URL-issuing function: target bucket, signing backend, key policy,
//! server port and logging. Everything comes from the process environment (after
//! loading an optional `.env` file).

use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::keys::KeyPolicy;
use crate::storage_types::SignerBackend;

const SERVER_PORT: u16 = 3000;
const DEFAULT_ENVIRONMENT: &str = "development";

/// Console log format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Single-line human readable output
    Compact,
    /// One JSON object per event (CloudWatch friendly)
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" | "text" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(anyhow::anyhow!("Invalid log format: {}", s)),
        }
    }
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            LogFormat::Compact => write!(f, "compact"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Bucket receiving uploads. Absence is only an error when a URL is requested.
    pub uploads_bucket: Option<String>,
    pub aws_region: Option<String>,
    /// Custom endpoint for S3-compatible providers (MinIO, R2, ...)
    pub s3_endpoint: Option<String>,
    pub signer_backend: SignerBackend,
    pub key_policy: KeyPolicy,
    pub server_port: u16,
    pub environment: String,
    pub log_format: LogFormat,
    /// Set when running inside the Lambda runtime
    pub lambda_runtime: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(var: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let environment = non_empty("ENVIRONMENT")
            .or_else(|| non_empty("APP_ENV"))
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        let lambda_runtime = non_empty("AWS_LAMBDA_RUNTIME_API").is_some();

        let signer_backend = match non_empty("SIGNER_BACKEND") {
            Some(value) => value.parse()?,
            None => SignerBackend::default(),
        };

        let key_policy = match non_empty("UNIQUE_KEY_SUFFIX") {
            Some(value) => {
                let enabled: bool = value
                    .to_lowercase()
                    .parse()
                    .map_err(|_| anyhow::anyhow!("UNIQUE_KEY_SUFFIX must be true or false"))?;
                if enabled {
                    KeyPolicy::RandomSuffix
                } else {
                    KeyPolicy::Timestamp
                }
            }
            None => KeyPolicy::Timestamp,
        };

        let server_port = match non_empty("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            None => SERVER_PORT,
        };

        let log_format = match non_empty("LOG_FORMAT") {
            Some(value) => value.parse()?,
            None if lambda_runtime => LogFormat::Json,
            None => LogFormat::Compact,
        };

        Ok(Config {
            uploads_bucket: non_empty("UPLOADS_BUCKET"),
            aws_region: non_empty("AWS_REGION").or_else(|| non_empty("AWS_DEFAULT_REGION")),
            s3_endpoint: non_empty("S3_ENDPOINT"),
            signer_backend,
            key_policy,
            server_port,
            environment,
            log_format,
            lambda_runtime,
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn uploads_bucket(&self) -> Option<&str> {
        self.uploads_bucket.as_deref()
    }

    pub fn aws_region(&self) -> Option<&str> {
        self.aws_region.as_deref()
    }

    pub fn s3_endpoint(&self) -> Option<&str> {
        self.s3_endpoint.as_deref()
    }
}
