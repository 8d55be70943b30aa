use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Bucket receiving synthesized audio and task output
    pub audio_bucket: String,
    /// Region used in public object URLs; `None` selects the global endpoint
    pub region: Option<String>,
    /// Region the AWS clients are built for
    pub aws_region: String,
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    /// Where audio is staged between synthesis and upload
    pub temp_dir: PathBuf,
    pub runtime_mode: RuntimeMode,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// How the function is hosted
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    /// AWS Lambda custom runtime
    Lambda,
    /// Standalone HTTP server
    Http,
}

const DEFAULT_AWS_REGION: &str = "us-east-1";

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let runtime_mode = match non_empty("AWS_LAMBDA_RUNTIME_API") {
            Some(_) => RuntimeMode::Lambda,
            None => RuntimeMode::Http,
        };

        let region = non_empty("region");

        let default_log_format = match runtime_mode {
            RuntimeMode::Lambda => "json",
            RuntimeMode::Http => "pretty",
        };

        let config = Config {
            audio_bucket: non_empty("audioBucket").ok_or("audioBucket is not set")?,
            aws_region: non_empty("AWS_REGION")
                .or_else(|| region.clone())
                .unwrap_or_else(|| DEFAULT_AWS_REGION.to_string()),
            region,
            host: non_empty("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: non_empty("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()?,
            log_format: match non_empty("LOG_FORMAT")
                .unwrap_or_else(|| default_log_format.to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            temp_dir: non_empty("AUDIO_TEMP_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(env::temp_dir),
            runtime_mode,
        };

        Ok(config)
    }
}
