pub mod app;
pub mod error;
pub mod features;
pub mod log_store;
pub mod parser;
pub mod reader;
pub mod record;
pub mod report;
