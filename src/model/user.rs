use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub nip: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password: String,
}
