//! HTTP Adapter
//!
//! Transport to the remote drafting engine over JSON/HTTP

pub mod client;
pub mod models;
