//! Database connection pool management

mod postgres;

pub use postgres::{create_pool, create_pool_with_timeouts, ensure_schema, PoolTimeouts, SCHEMA};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
