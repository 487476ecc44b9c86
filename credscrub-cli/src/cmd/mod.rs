pub mod config;
pub mod redact;
pub mod scan;
