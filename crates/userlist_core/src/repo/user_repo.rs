//! User repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Append user records in insertion order.
//! - Assign sequential ids from a counter owned by the repository instance.
//!
//! # Invariants
//! - `next_id` starts at 1 and only grows.
//! - `list()` order equals insertion order.

use crate::model::user::{NewUser, User, UserId};

/// Repository interface for user record storage.
pub trait UserRepository {
    /// Assigns the next id to `user`, appends it and returns the stored copy.
    fn insert(&mut self, user: NewUser) -> User;
    fn list(&self) -> &[User];
    fn get(&self, id: UserId) -> Option<&User>;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

/// Process-memory user repository.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: Vec<User>,
    next_id: UserId,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    /// Id the next insert will receive.
    pub fn next_id(&self) -> UserId {
        self.next_id
    }
}

impl UserRepository for InMemoryUserRepository {
    fn insert(&mut self, user: NewUser) -> User {
        let id = self.next_id;
        self.next_id += 1;

        let user = user.with_id(id);
        self.users.push(user.clone());
        user
    }

    fn list(&self) -> &[User] {
        &self.users
    }

    fn get(&self, id: UserId) -> Option<&User> {
        // Ids are dense and start at 1, so the slot is `id - 1`.
        let index = usize::try_from(id.checked_sub(1)?).ok()?;
        self.users.get(index).filter(|user| user.id == id)
    }
}
