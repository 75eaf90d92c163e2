//! Repository layer abstractions and in-memory implementations.
//!
//! # Responsibility
//! - Define the data access contract used by the store service.
//! - Own id assignment so identity cannot be forged by callers.
//!
//! # Invariants
//! - Ids are strictly increasing in insertion order.
//! - Stored records are never removed or rewritten.

pub mod user_repo;
