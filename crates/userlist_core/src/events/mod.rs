//! In-process publish/subscribe primitives.
//!
//! # Responsibility
//! - Map event names to ordered listener lists.
//! - Dispatch payloads synchronously on the caller's thread.
//!
//! # Invariants
//! - Listeners for one event run in registration order.
//! - Dispatch never suspends; `emit` returns after every listener ran.

pub mod bus;
