pub mod access;
pub mod errors;
pub mod models;
