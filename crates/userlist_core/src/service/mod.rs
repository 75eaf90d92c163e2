//! Core use-case services.
//!
//! # Responsibility
//! - Compose repositories with event publication into caller-facing APIs.
//! - Keep CLI callers decoupled from storage details.

pub mod user_list;
