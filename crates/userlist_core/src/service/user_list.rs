//! Observable user-list service.
//!
//! # Responsibility
//! - Persist records through a `UserRepository`.
//! - Publish `saved-user` to registered listeners after every save.
//!
//! # Invariants
//! - Listeners observe the record only after it is stored with its final id.
//! - `save` returns after every listener has run.
//! - Seeding does not emit events.

use crate::events::bus::{EventBus, EventError, ListenerId};
use crate::model::user::{demo_seed, NewUser, User, UserId};
use crate::repo::user_repo::{InMemoryUserRepository, UserRepository};
use log::info;

/// Event name published after a record is saved.
pub const SAVED_USER_EVENT: &str = "saved-user";

/// User store that notifies listeners on insertion.
#[derive(Debug)]
pub struct UserList<R: UserRepository = InMemoryUserRepository> {
    repo: R,
    events: EventBus<User>,
}

impl UserList<InMemoryUserRepository> {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::with_repository(InMemoryUserRepository::new())
    }

    /// Creates an in-memory store pre-populated with `seed`, ids from 1.
    pub fn with_seed(seed: impl IntoIterator<Item = NewUser>) -> Self {
        let mut repo = InMemoryUserRepository::new();
        for user in seed {
            repo.insert(user);
        }
        Self::with_repository(repo)
    }

    /// Creates the demo store holding the three seed records (ids 1-3).
    pub fn seeded_demo() -> Self {
        Self::with_seed(demo_seed())
    }
}

impl Default for UserList<InMemoryUserRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: UserRepository> UserList<R> {
    /// Creates a store over the provided repository implementation.
    pub fn with_repository(repo: R) -> Self {
        Self {
            repo,
            events: EventBus::new(),
        }
    }

    /// Stores `user` under the next id, then notifies `saved-user` listeners.
    ///
    /// # Contract
    /// - Listeners run synchronously, in registration order, once each.
    /// - Returns the finalized record.
    pub fn save(&mut self, user: NewUser) -> User {
        let saved = self.repo.insert(user);
        let notified = self.events.emit(SAVED_USER_EVENT, &saved);
        info!(
            "event=user_saved module=service status=ok id={} listeners={}",
            saved.id, notified
        );
        saved
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[User] {
        self.repo.list()
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.repo.get(id)
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    /// Registers `listener` for `event_name`.
    ///
    /// Only `saved-user` is ever published by this store; listeners for
    /// other names are accepted and never invoked.
    pub fn subscribe(
        &mut self,
        event_name: &str,
        listener: impl FnMut(&User) + 'static,
    ) -> Result<ListenerId, EventError> {
        self.events.subscribe(event_name, listener)
    }

    /// Registers `listener` for `saved-user`.
    pub fn on_saved(&mut self, listener: impl FnMut(&User) + 'static) -> ListenerId {
        self.events.register(SAVED_USER_EVENT, listener)
    }

    pub fn listener_count(&self, event_name: &str) -> usize {
        self.events.listener_count(event_name)
    }
}

/// Demo listener output for the saved name and id.
pub fn saved_name_line(user: &User) -> String {
    format!("user name saved: {} ({})", user.name, user.id)
}

/// Demo listener output for the saved occupation.
pub fn saved_occupation_line(user: &User) -> String {
    format!("user occupation: {}", user.occupation)
}
