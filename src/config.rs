use std::env;
use dotenvy::dotenv;
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string()),
            // sqlite file colocated with the process, created on first start
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://presensi.db".to_string()),
        }
    }
}
