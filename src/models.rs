use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct LoginReqDto {
    #[schema(example = "12345")]
    pub nip: String,
    #[schema(example = "123")]
    pub password: String,
}

/// Projection of a user that is safe to echo back; never carries the password.
#[derive(Serialize, FromRow, ToSchema)]
pub struct UserPublic {
    pub id: i64,
    pub nip: String,
    pub name: String,
}
