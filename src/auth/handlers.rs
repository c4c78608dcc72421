use crate::{
    auth::password::verify_credential,
    model::user::User,
    models::{LoginReqDto, UserPublic},
};
use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use sqlx::SqlitePool;
use tracing::{debug, error, info, instrument};

/// Login with NIP + password
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginReqDto,
    responses(
        (status = 200, description = "Login verdict", body = Object, example = json!({
            "success": true,
            "user": { "id": 1, "nip": "12345", "name": "User Demo" }
        })),
        (status = 500, description = "Database error", body = Object, example = json!({
            "success": false,
            "message": "error returned from database"
        }))
    ),
    tag = "Auth"
)]
#[instrument(name = "login", skip(pool, body), fields(nip = %body.nip))]
pub async fn login(body: web::Json<LoginReqDto>, pool: web::Data<SqlitePool>) -> impl Responder {
    debug!("Fetching user from database");

    let user = match sqlx::query_as::<_, User>(
        r#"
        SELECT id, nip, name, password
        FROM users
        WHERE nip = ?
        "#,
    )
    .bind(&body.nip)
    .fetch_optional(pool.get_ref())
    .await
    {
        Ok(found) => found,
        Err(e) => {
            error!(error = %e, "Database error while fetching user");
            return HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": e.to_string()
            }));
        }
    };

    // Unknown NIP and wrong password get the same answer; both are a normal
    // business outcome, not a server error.
    match user {
        Some(u) if verify_credential(&body.password, &u.password) => {
            info!(user_id = u.id, "Login successful");
            let user = UserPublic {
                id: u.id,
                nip: u.nip,
                name: u.name,
            };
            HttpResponse::Ok().json(json!({
                "success": true,
                "user": user
            }))
        }
        _ => {
            info!("Login failed: invalid credentials");
            HttpResponse::Ok().json(json!({
                "success": false,
                "message": "Login gagal"
            }))
        }
    }
}
