pub mod attendance;
pub mod rekap;
