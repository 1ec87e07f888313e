pub mod controller;
pub mod cors;
pub mod envy;
pub mod errors;
pub mod models;
