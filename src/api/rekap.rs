use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use serde_json::json;
use sqlx::SqlitePool;
use tracing::error;
use utoipa::ToSchema;

/// One roster line: a user and their pivoted morning/evening check-in times
/// for the requested date. Times are null when no matching record exists.
#[derive(Serialize, sqlx::FromRow, ToSchema)]
pub struct RekapRow {
    #[schema(example = "12345")]
    pub nip: String,
    #[schema(example = "User Demo")]
    pub name: String,
    #[schema(example = "07:58:21")]
    pub apel_pagi: Option<String>,
    #[schema(example = "17:02:43")]
    pub apel_sore: Option<String>,
}

/// Daily roster for every user
///
/// Users without any check-in on the date still appear, with both times null.
/// When a user checked in twice with the same jenis that day, the MAX time
/// value wins.
#[utoipa::path(
    get,
    path = "/rekap/{tanggal}",
    params(
        ("tanggal", Path, description = "Date in YYYY-MM-DD form")
    ),
    responses(
        (status = 200, description = "One row per user, ordered by NIP", body = [RekapRow]),
        (status = 500, description = "Database error")
    ),
    tag = "Presensi"
)]
pub async fn rekap_harian(path: web::Path<String>, pool: web::Data<SqlitePool>) -> impl Responder {
    let tanggal = path.into_inner();

    let rows = sqlx::query_as::<_, RekapRow>(
        r#"
        SELECT u.nip, u.name,
          MAX(CASE WHEN p.jenis = 'pagi' THEN p.waktu END) AS apel_pagi,
          MAX(CASE WHEN p.jenis = 'sore' THEN p.waktu END) AS apel_sore
        FROM users u
        LEFT JOIN presensi p ON u.id = p.user_id AND p.tanggal = ?
        GROUP BY u.id
        ORDER BY u.nip
        "#,
    )
    .bind(&tanggal)
    .fetch_all(pool.get_ref())
    .await;

    match rows {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => {
            error!(error = %e, %tanggal, "Failed to build daily roster");
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": e.to_string()
            }))
        }
    }
}
