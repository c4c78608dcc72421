use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

pub async fn init_db(database_url: &str) -> SqlitePool {
    let options = SqliteConnectOptions::from_str(database_url)
        .expect("Invalid DATABASE_URL")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .expect("Failed to connect to database");

    migrate(&pool)
        .await
        .expect("Failed to run schema migration");

    pool
}

/// Creates the schema if absent and seeds the demo account. Safe to run on
/// every startup; never drops or rewrites existing rows.
pub async fn migrate(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nip TEXT UNIQUE,
            name TEXT,
            password TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS presensi (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER,
            jenis TEXT,
            waktu TEXT,
            tanggal TEXT,
            FOREIGN KEY(user_id) REFERENCES users(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    seed_default_user(pool).await?;

    Ok(())
}

async fn seed_default_user(pool: &SqlitePool) -> anyhow::Result<()> {
    let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE nip = ?")
        .bind("12345")
        .fetch_optional(pool)
        .await?;

    if existing.is_none() {
        sqlx::query("INSERT INTO users (nip, name, password) VALUES (?, ?, ?)")
            .bind("12345")
            .bind("User Demo")
            .bind("123")
            .execute(pool)
            .await?;
        info!("Seeded default user -> NIP: 12345, Password: 123");
    }

    Ok(())
}

#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    // one connection so every statement sees the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite should connect");
    migrate(&pool).await.expect("migration should succeed");
    pool
}
