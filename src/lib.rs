//! A small HTTP service answering `/mean`, `/median` and `/mode` for a
//! comma-separated `nums` query parameter.

pub mod config;
pub mod error;
pub mod numbers;
pub mod routes;
pub mod server;
pub mod stats;

pub use config::Config;
pub use error::{Result, ServiceError};
pub use numbers::NumberSequence;
pub use server::Server;
pub use stats::Statistic;
