use gateway_core::config as core_config;
use gateway_core::error::AppError;
use std::env;

/// Default lifetime of an issued access token.
const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Prod,
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub common: core_config::Config,
    pub environment: Environment,
    pub log_level: String,
    pub token: TokenConfig,
    pub ollama: OllamaConfig,
    pub users: UsersConfig,
}

/// Signing key and lifetime for issued bearer tokens.
///
/// The key is provisioned once at startup and never rotated while the
/// process runs.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub signing_key: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone)]
pub struct OllamaConfig {
    pub base_url: String,
    /// Model identifier passed to the completion runtime (e.g. phi3).
    pub model: String,
    /// Sampling temperature. Zero keeps generation deterministic.
    pub temperature: f32,
}

/// Static user records seeded into the credential store at startup.
#[derive(Debug, Clone)]
pub struct UsersConfig {
    /// JSON array of user records; `None` in dev seeds a demo user.
    pub seed_json: Option<String>,
}

impl GatewayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let environment =
            match env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()).as_str() {
                "prod" => Environment::Prod,
                _ => Environment::Dev,
            };
        let is_prod = environment == Environment::Prod;

        Ok(GatewayConfig {
            common,
            environment,
            log_level: get_env("LOG_LEVEL", Some("info"), is_prod)?,
            token: TokenConfig {
                signing_key: get_env(
                    "TOKEN_SIGNING_KEY",
                    Some("dev-signing-key-do-not-use-in-prod"),
                    is_prod,
                )?,
                ttl_minutes: get_env(
                    "ACCESS_TOKEN_TTL_MINUTES",
                    Some(&DEFAULT_TOKEN_TTL_MINUTES.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_TOKEN_TTL_MINUTES),
            },
            ollama: OllamaConfig {
                base_url: get_env("OLLAMA_BASE_URL", Some("http://localhost:11434"), is_prod)?,
                model: get_env("OLLAMA_MODEL", Some("phi3"), is_prod)?,
                temperature: get_env("OLLAMA_TEMPERATURE", Some("0"), is_prod)?
                    .parse()
                    .unwrap_or(0.0),
            },
            users: UsersConfig {
                seed_json: match env::var("GATEWAY_USERS") {
                    Ok(json) => Some(json),
                    Err(_) if is_prod => {
                        return Err(AppError::ConfigError(anyhow::anyhow!(
                            "GATEWAY_USERS is required in production but not set"
                        )));
                    }
                    Err(_) => None,
                },
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
