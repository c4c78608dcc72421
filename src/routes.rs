use crate::{
    api::{attendance, rekap},
    auth::handlers,
};
use actix_web::{HttpResponse, Responder, web};
use serde_json::json;

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = Object, example = json!({ "ok": true }))
    ),
    tag = "Health"
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "ok": true }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(health)))
        .service(web::resource("/login").route(web::post().to(handlers::login)))
        .service(web::resource("/presensi").route(web::post().to(attendance::record)))
        // /riwayat/{user_id}
        .service(web::resource("/riwayat/{user_id}").route(web::get().to(attendance::riwayat)))
        // /rekap/{tanggal}
        .service(web::resource("/rekap/{tanggal}").route(web::get().to(rekap::rekap_harian)));
}
