//! Application logic for the wavebench benchmark driver.

pub mod app;
pub mod config;
pub mod errors;
