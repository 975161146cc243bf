//! `cloudom-server` exposes the Cloudom Systems AI support chat proxy.
//! It validates browser chat requests and forwards them to DeepSeek.

pub mod chat;
pub mod config;
pub mod protocol;
pub mod server;
pub mod telemetry;

pub use config::ServerConfig;
pub use server::{AppState, app_router, run_server};
