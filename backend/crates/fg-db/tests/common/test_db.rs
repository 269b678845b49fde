#![allow(dead_code)]

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    // In-memory needs a single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    fg_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Overwrites the stored descriptor bytes for an identity
pub async fn corrupt_descriptor(pool: &SqlitePool, id: &str, bytes: Vec<u8>) {
    sqlx::query("UPDATE identities SET descriptor = ? WHERE id = ?")
        .bind(bytes)
        .bind(id)
        .execute(pool)
        .await
        .expect("Failed to overwrite descriptor");
}
