//! Test helpers for integration tests
//!
//! Provides a service context over in-memory or PostgreSQL adapters, user
//! seeding, and error assertions.

use std::sync::Arc;

use anyhow::{Context, Result};
use chat_common::{AppConfig, TracingConfig};
use chat_core::DomainError;
use chat_db::{
    create_pool, ensure_schema, InMemoryChatRepository, InMemoryUserDirectory, PgPool,
};
use chat_service::{
    ChatService, InvitationService, MemberService, ServiceContext, ServiceError, ServiceResult,
};
use uuid::Uuid;

/// Where test users are registered
enum Users {
    Memory(Arc<InMemoryUserDirectory>),
    Postgres(PgPool),
}

/// Service context plus the means to seed users
pub struct TestEnv {
    pub ctx: ServiceContext,
    pub chats: Option<Arc<InMemoryChatRepository>>,
    users: Users,
}

impl TestEnv {
    /// Environment backed by the in-memory adapters
    pub fn in_memory() -> Self {
        init_test_tracing();

        let chats = Arc::new(InMemoryChatRepository::new());
        let users = Arc::new(InMemoryUserDirectory::new());
        let ctx = ServiceContext::new(chats.clone(), users.clone());

        Self {
            ctx,
            chats: Some(chats),
            users: Users::Memory(users),
        }
    }

    /// Environment backed by PostgreSQL, if DATABASE_URL is set
    pub async fn postgres() -> Result<Option<Self>> {
        if !check_test_env() {
            return Ok(None);
        }
        init_test_tracing();

        let config = test_config()?;
        let pool = create_pool(&config.database)
            .await
            .context("connect to DATABASE_URL")?;
        ensure_schema(&pool).await?;
        sqlx::query("CREATE TABLE IF NOT EXISTS users (id UUID PRIMARY KEY)")
            .execute(&pool)
            .await?;

        Ok(Some(Self {
            ctx: ServiceContext::postgres(pool.clone()),
            chats: None,
            users: Users::Postgres(pool),
        }))
    }

    /// Register a fresh user and return its ID as callers pass it
    pub async fn user(&self) -> Result<String> {
        let id = Uuid::new_v4();
        match &self.users {
            Users::Memory(directory) => directory.add_user(id),
            Users::Postgres(pool) => {
                sqlx::query("INSERT INTO users (id) VALUES ($1)")
                    .bind(id)
                    .execute(pool)
                    .await?;
            }
        }
        Ok(id.to_string())
    }

    pub fn chat_service(&self) -> ChatService<'_> {
        ChatService::new(&self.ctx)
    }

    pub fn invitation_service(&self) -> InvitationService<'_> {
        InvitationService::new(&self.ctx)
    }

    pub fn member_service(&self) -> MemberService<'_> {
        MemberService::new(&self.ctx)
    }
}

/// Create a test configuration
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();
    AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Helper to check if the PostgreSQL test environment is available
pub fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }
    true
}

/// Install a debug subscriber once per test binary
pub fn init_test_tracing() {
    let _ = chat_common::try_init_tracing_with_config(&TracingConfig::development());
}

/// Unwrap the domain error of a failed operation
///
/// # Panics
/// Panics if the operation succeeded or failed without a domain error.
pub fn domain_err<T: std::fmt::Debug>(result: ServiceResult<T>) -> DomainError {
    match result {
        Ok(value) => panic!("expected an error, got {value:?}"),
        Err(ServiceError::Domain(e) | ServiceError::InvalidInput { source: e, .. }) => e,
        Err(other) => panic!("expected a domain error, got {other:?}"),
    }
}

/// Unwrap the offending field of a failed operation
///
/// # Panics
/// Panics unless the operation failed with an input error.
pub fn invalid_field<T: std::fmt::Debug>(result: ServiceResult<T>) -> &'static str {
    match result {
        Err(ServiceError::InvalidInput { field, .. }) => field,
        other => panic!("expected an input error, got {other:?}"),
    }
}
