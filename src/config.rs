use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_UPLOAD_MAX_BYTES: u64 = 2 * 1024 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable {0} not set")]
    Missing(&'static str),
    #[error("Environment variable {key} has invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub stack: StackConfig,
    pub access: AccessConfig,
    pub uploads: UploadConfig,
}

#[derive(Clone, Debug)]
pub struct StackConfig {
    pub api_url: String,
    pub project_id: String,
    pub secret_server_key: String,
}

#[derive(Clone, Debug, Default)]
pub struct AccessConfig {
    pub teacher_emails: Vec<String>,
    pub student_emails: Vec<String>,
    pub student_domains: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct UploadConfig {
    pub dir: PathBuf,
    pub public_prefix: String,
    pub max_bytes: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("public/uploads/footage"),
            public_prefix: "/uploads/footage".to_string(),
            max_bytes: DEFAULT_UPLOAD_MAX_BYTES,
        }
    }
}

/// Comma separated list, trimmed, lowercased, blanks dropped.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

impl EnvConfig {
    fn get_env(key: &'static str) -> Result<String, ConfigError> {
        env::var(key).map_err(|_| ConfigError::Missing(key))
    }

    fn get_env_or(key: &'static str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    fn parse_env<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
        match env::var(key) {
            Ok(v) => v.trim().parse().map_err(|_| ConfigError::Invalid { key, value: v }),
            Err(_) => Ok(default),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let upload_defaults = UploadConfig::default();

        Ok(EnvConfig {
            port: Self::parse_env("PORT", 8080)?,
            db_url: Self::get_env("POSTGRES_URI")?,
            stack: StackConfig {
                api_url: Self::get_env_or("STACK_API_URL", "https://api.stack-auth.com/api/v1"),
                project_id: Self::get_env("STACK_PROJECT_ID")?,
                secret_server_key: Self::get_env("STACK_SECRET_SERVER_KEY")?,
            },
            access: AccessConfig {
                teacher_emails: parse_list(&Self::get_env_or("TEACHER_EMAILS", "")),
                student_emails: parse_list(&Self::get_env_or("STUDENT_EMAILS", "")),
                student_domains: parse_list(&Self::get_env_or("STUDENT_EMAIL_DOMAINS", "franklinsabers.org")),
            },
            uploads: UploadConfig {
                dir: PathBuf::from(Self::get_env_or("UPLOAD_DIR", "public/uploads/footage")),
                public_prefix: Self::get_env_or("UPLOAD_PUBLIC_PREFIX", &upload_defaults.public_prefix)
                    .trim_end_matches('/')
                    .to_string(),
                max_bytes: Self::parse_env("UPLOAD_MAX_BYTES", upload_defaults.max_bytes)?,
            },
        })
    }
}
