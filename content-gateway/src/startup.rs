//! Application startup and lifecycle management.

use std::net::SocketAddr;
use std::sync::Arc;

use gateway_core::error::AppError;
use tokio::net::TcpListener;
use tokio::signal;

use crate::config::{Environment, GatewayConfig};
use crate::models::User;
use crate::services::providers::TextProvider;
use crate::services::providers::ollama::OllamaProvider;
use crate::services::{AuthService, ContentService, JwtService, StaticCredentialStore};
use crate::{AppState, build_router};

/// Application container owning the bound listener and shared state.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application: seed the credential store, construct the
    /// provider, and bind the listener (port 0 = random, for tests).
    pub async fn build(config: GatewayConfig) -> Result<Self, AppError> {
        let users = seed_users(&config)?;
        tracing::info!(count = users.len(), "Seeded credential store");

        let store = Arc::new(StaticCredentialStore::new(users));
        let jwt = JwtService::new(&config.token);
        let auth = AuthService::new(store, jwt);

        let provider: Arc<dyn TextProvider> =
            Arc::new(OllamaProvider::new(config.ollama.clone())?);
        tracing::info!(
            model = %config.ollama.model,
            base_url = %config.ollama.base_url,
            "Initialized Ollama text provider"
        );
        let content = ContentService::new(provider, config.ollama.temperature);

        let state = AppState {
            config: config.clone(),
            auth,
            content,
        };

        let addr: SocketAddr = format!("{}:{}", config.common.host, config.common.port)
            .parse()
            .map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!("Invalid listen address: {}", e))
            })?;
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the server until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        tracing::info!("Content gateway listening on port {}", self.port);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

/// Resolve the startup user table.
///
/// `GATEWAY_USERS` holds a JSON array of user records with Argon2
/// hashes. Without it (dev only; prod refuses to start), a single
/// demo user is seeded so the service is usable out of the box.
fn seed_users(config: &GatewayConfig) -> Result<Vec<User>, AppError> {
    match &config.users.seed_json {
        Some(json) => serde_json::from_str(json).map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("Failed to parse GATEWAY_USERS: {}", e))
        }),
        None => {
            debug_assert!(config.environment == Environment::Dev);
            tracing::warn!(
                "GATEWAY_USERS not set; seeding demo user 'johndoe' (dev only)"
            );
            Ok(vec![User {
                username: "johndoe".to_string(),
                display_name: "John Doe".to_string(),
                hashed_secret: crate::utils::hash_secret("secret")
                    .map_err(AppError::InternalError)?,
                disabled: false,
            }])
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
