pub mod config;
pub mod constants;
pub mod error;
pub mod explorer;
pub mod export;
pub mod ipc;
pub mod report;
pub mod schema;
