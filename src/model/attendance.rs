use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// One check-in event. `waktu`/`tanggal` are stored as display strings
/// computed from the server clock at insert time.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Presensi {
    pub id: i64,
    pub user_id: i64,
    pub jenis: String,
    pub waktu: String,
    pub tanggal: String,
}

/// Check-in kind: morning roll call ("pagi") or evening ("sore").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Jenis {
    Pagi,
    Sore,
}
