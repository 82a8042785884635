//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::config::{Settings, StorageBackend};
use crate::infrastructure::database;
use crate::infrastructure::repositories::Repositories;
use crate::presentation::http::{create_router, handlers};
use crate::presentation::middleware::{create_cors_layer, create_trace_layer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub repositories: Repositories,
    /// Present only with the postgres backend; used by the readiness probe
    pub db: Option<PgPool>,
}

impl AppState {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            repositories: Repositories::postgres(pool.clone()),
            db: Some(pool),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            repositories: Repositories::in_memory(),
            db: None,
        }
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        handlers::health::init_server_start();

        let state = match settings.storage.backend {
            StorageBackend::Postgres => {
                let db = database::create_pool(&settings.database)
                    .await
                    .context("failed to connect to PostgreSQL")?;
                tracing::info!("Database connection pool created");

                if settings.database.run_migrations {
                    database::run_migrations(&db).await?;
                    tracing::info!("Database migrations applied");
                }

                AppState::postgres(db)
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; data is lost on restart");
                AppState::in_memory()
            }
        };

        // Build router with middleware
        let router = create_router(state)
            .layer(create_trace_layer())
            .layer(create_cors_layer(&settings.cors));

        // Bind to address
        let addr: SocketAddr = settings
            .server_addr()
            .parse()
            .with_context(|| format!("invalid server address {}", settings.server_addr()))?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!(backend = %settings.storage.backend, "Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}
