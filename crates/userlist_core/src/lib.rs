//! Core logic for the user-list workspace.
//! Holds the observable user store and the file-backed accumulator.

pub mod accumulator;
pub mod events;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use accumulator::{read_value, Accumulator, AccumulatorError, AccumulatorResult};
pub use events::bus::{EventBus, EventError, Listener, ListenerId};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::user::{demo_seed, NewUser, User, UserId};
pub use repo::user_repo::{InMemoryUserRepository, UserRepository};
pub use service::user_list::{saved_name_line, saved_occupation_line, UserList, SAVED_USER_EVENT};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
