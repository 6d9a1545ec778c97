pub mod extract;
pub mod henrik;
pub mod profile;
pub mod wrapper;
