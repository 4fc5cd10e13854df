pub mod api_error;
pub mod config;
pub mod db;
pub mod engine;
pub mod http;
pub mod middleware;
pub mod models;
pub mod service;
pub mod store;
pub mod telemetry;
