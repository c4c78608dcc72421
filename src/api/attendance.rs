use crate::model::attendance::Jenis;
use actix_web::{HttpResponse, Responder, web};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::SqlitePool;
use tracing::error;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct PresensiReq {
    #[schema(example = 1)]
    pub user_id: i64,
    #[schema(example = "pagi")]
    pub jenis: String,
}

#[derive(Serialize, sqlx::FromRow, ToSchema)]
pub struct RiwayatRow {
    pub id: i64,
    #[schema(example = "pagi")]
    pub jenis: String,
    #[schema(example = "07:58:21")]
    pub waktu: String,
    #[schema(example = "2024-01-01", format = "date")]
    pub tanggal: String,
}

/// Record a check-in (apel pagi/sore)
///
/// Date and time are taken from the server clock; the client cannot supply
/// them. Repeated check-ins on the same day each create a new row.
#[utoipa::path(
    post,
    path = "/presensi",
    request_body = PresensiReq,
    responses(
        (status = 200, description = "Check-in recorded", body = Object, example = json!({
            "success": true, "waktu": "07:58:21", "tanggal": "2024-01-01", "id": 7
        })),
        (status = 400, description = "Unknown jenis value", body = Object, example = json!({
            "success": false, "message": "Jenis tidak valid"
        })),
        (status = 500, description = "Database error")
    ),
    tag = "Presensi"
)]
pub async fn record(body: web::Json<PresensiReq>, pool: web::Data<SqlitePool>) -> impl Responder {
    // fail-fast before touching storage
    let jenis: Jenis = match body.jenis.parse() {
        Ok(j) => j,
        Err(_) => {
            return HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": "Jenis tidak valid"
            }));
        }
    };

    // wall-clock date and time as the server would show them, not UTC
    let now = Local::now();
    let tanggal = now.format("%Y-%m-%d").to_string();
    let waktu = now.format("%H:%M:%S").to_string();

    let result = sqlx::query(
        r#"
        INSERT INTO presensi (user_id, jenis, waktu, tanggal)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(body.user_id)
    .bind(jenis.to_string())
    .bind(&waktu)
    .bind(&tanggal)
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(res) => HttpResponse::Ok().json(json!({
            "success": true,
            "waktu": waktu,
            "tanggal": tanggal,
            "id": res.last_insert_rowid()
        })),
        Err(e) => {
            error!(error = %e, user_id = body.user_id, "Failed to record check-in");
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": e.to_string()
            }))
        }
    }
}

/// Personal check-in history, newest first
#[utoipa::path(
    get,
    path = "/riwayat/{user_id}",
    params(
        ("user_id", Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "All check-ins for the user, id descending", body = [RiwayatRow]),
        (status = 500, description = "Database error")
    ),
    tag = "Presensi"
)]
pub async fn riwayat(path: web::Path<i64>, pool: web::Data<SqlitePool>) -> impl Responder {
    let user_id = path.into_inner();

    let rows = sqlx::query_as::<_, RiwayatRow>(
        r#"
        SELECT id, jenis, waktu, tanggal
        FROM presensi
        WHERE user_id = ?
        ORDER BY id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool.get_ref())
    .await;

    match rows {
        // empty history is a normal answer, including for unknown users
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => {
            error!(error = %e, user_id, "Failed to fetch history");
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": e.to_string()
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use crate::model::attendance::Presensi;
    use actix_web::{App, test};
    use serde_json::Value;

    macro_rules! presensi_app {
        ($pool:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($pool))
                    .route("/presensi", web::post().to(record))
                    .route("/riwayat/{user_id}", web::get().to(riwayat)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn invalid_jenis_is_rejected_without_a_write() {
        let pool = test_pool().await;
        let app = presensi_app!(pool.clone());

        let req = test::TestRequest::post()
            .uri("/presensi")
            .set_json(json!({ "user_id": 1, "jenis": "siang" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Jenis tidak valid");

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM presensi")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[actix_web::test]
    async fn recorded_check_in_shows_up_first_in_history() {
        let pool = test_pool().await;
        let app = presensi_app!(pool.clone());

        let req = test::TestRequest::post()
            .uri("/presensi")
            .set_json(json!({ "user_id": 1, "jenis": "pagi" }))
            .to_request();
        let recorded: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(recorded["success"], true);
        let id = recorded["id"].as_i64().unwrap();

        let stored = sqlx::query_as::<_, Presensi>(
            "SELECT id, user_id, jenis, waktu, tanggal FROM presensi WHERE id = ?",
        )
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(stored.user_id, 1);
        assert_eq!(stored.jenis, "pagi");

        let req = test::TestRequest::get().uri("/riwayat/1").to_request();
        let history: Vec<Value> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(history[0]["id"].as_i64().unwrap(), id);
        assert_eq!(history[0]["jenis"], "pagi");
        assert_eq!(history[0]["waktu"], recorded["waktu"]);
        assert_eq!(history[0]["tanggal"], recorded["tanggal"]);
    }

    #[actix_web::test]
    async fn duplicate_same_day_check_ins_are_all_kept() {
        let app = presensi_app!(test_pool().await);

        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri("/presensi")
                .set_json(json!({ "user_id": 1, "jenis": "pagi" }))
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body["success"], true);
        }

        let req = test::TestRequest::get().uri("/riwayat/1").to_request();
        let history: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(history.len(), 2);
    }

    #[actix_web::test]
    async fn history_is_ordered_by_id_descending() {
        let app = presensi_app!(test_pool().await);

        for jenis in ["pagi", "sore", "pagi"] {
            let req = test::TestRequest::post()
                .uri("/presensi")
                .set_json(json!({ "user_id": 1, "jenis": jenis }))
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get().uri("/riwayat/1").to_request();
        let history: Vec<Value> = test::call_and_read_body_json(&app, req).await;

        let ids: Vec<i64> = history.iter().map(|r| r["id"].as_i64().unwrap()).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids.windows(2).all(|w| w[0] > w[1]));
    }

    #[actix_web::test]
    async fn unknown_user_has_an_empty_history() {
        let app = presensi_app!(test_pool().await);

        let req = test::TestRequest::get().uri("/riwayat/42").to_request();
        let history: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert!(history.is_empty());
    }
}
