//! Application service layer - config, scenarios, period runs, export, logging

pub mod app;
pub mod config;
pub mod export;
pub mod logger;
pub mod scenario;
