//! # DTO
//!
//! Application層のData Transfer Object

pub mod session_config;
