pub mod catcher;
pub mod cors;
pub mod logger;
