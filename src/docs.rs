use crate::api::attendance::{PresensiReq, RiwayatRow};
use crate::api::rekap::RekapRow;
use crate::model::attendance::Jenis;
use crate::models::{LoginReqDto, UserPublic};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Presensi API",
        version = "1.0.0",
        description = r#"
## Presensi (Attendance) Backend

Minimal attendance tracking: log in with NIP + password, record a morning
("pagi") or evening ("sore") check-in, and read personal or per-date history.

### 🔹 Endpoints
- **Login** — verify NIP + password
- **Presensi** — record a check-in with server-side date/time
- **Riwayat** — personal check-in history, newest first
- **Rekap** — daily roster of every user's pagi/sore times

### 📦 Response Format
JSON-based RESTful responses; business-negative outcomes (failed login, empty
history) are 200s with a negative payload.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::routes::health,
        crate::auth::handlers::login,
        crate::api::attendance::record,
        crate::api::attendance::riwayat,
        crate::api::rekap::rekap_harian
    ),
    components(
        schemas(
            LoginReqDto,
            UserPublic,
            Jenis,
            PresensiReq,
            RiwayatRow,
            RekapRow
        )
    ),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Auth", description = "Login APIs"),
        (name = "Presensi", description = "Check-in, history and roster APIs"),
    )
)]
pub struct ApiDoc;
