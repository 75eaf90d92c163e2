//! Domain model for user-list records.
//!
//! # Responsibility
//! - Define the record shapes shared by the repository and store layers.
//!
//! # Invariants
//! - Record identity is assigned by the repository, never by callers.

pub mod user;
