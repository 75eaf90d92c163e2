//! User record model.
//!
//! # Responsibility
//! - Define the insert-side (`NewUser`) and stored (`User`) record shapes.
//! - Provide the demo seed used by the CLI and scenario tests.
//!
//! # Invariants
//! - `id` is unique within one store and never reused.
//! - `NewUser` carries no identity; the store is the sole id authority.

use serde::{Deserialize, Serialize};

/// Store-assigned record identifier, starting at 1 per store instance.
pub type UserId = u64;

/// Record submitted for insertion, before an id has been assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub occupation: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, occupation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            occupation: occupation.into(),
        }
    }

    /// Finalizes this record with a store-assigned id.
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            occupation: self.occupation,
        }
    }
}

/// Stored user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub occupation: String,
}

/// Seed records of the demo user list, in insertion order.
pub fn demo_seed() -> Vec<NewUser> {
    vec![
        NewUser::new("Teresa Mcadams", "Sr. Software Engineer"),
        NewUser::new("Hunter Joe", "Data Analyst"),
        NewUser::new("Cathy Alonso", "Devops Engineer"),
    ]
}
