//! Named-event listener registry.

use log::debug;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

/// Stable handle returned for every registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Boxed listener invoked with a borrowed payload.
pub type Listener<P> = Box<dyn FnMut(&P)>;

/// Listener registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    InvalidEventName(String),
}

impl Display for EventError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEventName(value) => write!(f, "event name is invalid: `{value}`"),
        }
    }
}

impl Error for EventError {}

struct Registration<P> {
    id: ListenerId,
    listener: Listener<P>,
}

/// Synchronous event bus keyed by event name.
///
/// There is no unsubscribe: a registration lives as long as the bus.
pub struct EventBus<P> {
    listeners: BTreeMap<String, Vec<Registration<P>>>,
    next_listener_id: u64,
}

impl<P> Default for EventBus<P> {
    fn default() -> Self {
        Self {
            listeners: BTreeMap::new(),
            next_listener_id: 1,
        }
    }
}

impl<P> Debug for EventBus<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let counts: BTreeMap<&str, usize> = self
            .listeners
            .iter()
            .map(|(name, registrations)| (name.as_str(), registrations.len()))
            .collect();
        f.debug_struct("EventBus")
            .field("listeners", &counts)
            .field("next_listener_id", &self.next_listener_id)
            .finish()
    }
}

impl<P> EventBus<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` for every future `emit` of `event_name`.
    ///
    /// # Errors
    /// - Returns `EventError::InvalidEventName` for empty or blank names.
    pub fn subscribe(
        &mut self,
        event_name: &str,
        listener: impl FnMut(&P) + 'static,
    ) -> Result<ListenerId, EventError> {
        let name = event_name.trim();
        if name.is_empty() {
            return Err(EventError::InvalidEventName(event_name.to_string()));
        }

        Ok(self.register(name, listener))
    }

    /// Registers `listener` under an already-normalized, non-empty name.
    pub(crate) fn register(
        &mut self,
        name: &str,
        listener: impl FnMut(&P) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;

        let registrations = self.listeners.entry(name.to_string()).or_default();
        registrations.push(Registration {
            id,
            listener: Box::new(listener),
        });
        debug!(
            "event=listener_registered module=events status=ok event_name={} listener_id={} listener_count={}",
            name,
            id.get(),
            registrations.len()
        );

        id
    }

    /// Invokes every listener registered for `event_name`, in registration
    /// order, and returns how many ran. Unknown names are a no-op.
    pub fn emit(&mut self, event_name: &str, payload: &P) -> usize {
        let Some(registrations) = self.listeners.get_mut(event_name.trim()) else {
            return 0;
        };

        for registration in registrations.iter_mut() {
            (registration.listener)(payload);
        }
        registrations.len()
    }

    pub fn listener_count(&self, event_name: &str) -> usize {
        self.listeners.get(event_name.trim()).map_or(0, Vec::len)
    }

    /// Listener ids for `event_name`, in dispatch order.
    pub fn listener_ids(&self, event_name: &str) -> Vec<ListenerId> {
        self.listeners
            .get(event_name.trim())
            .map(|registrations| registrations.iter().map(|r| r.id).collect())
            .unwrap_or_default()
    }

    /// Event names that have at least one listener, sorted.
    pub fn event_names(&self) -> Vec<&str> {
        self.listeners.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{EventBus, EventError};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn emit_runs_listeners_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::<u32>::new();

        for tag in ["first", "second", "third"] {
            let seen = Rc::clone(&seen);
            bus.subscribe("tick", move |value: &u32| {
                seen.borrow_mut().push(format!("{tag}:{value}"));
            })
            .unwrap();
        }

        assert_eq!(bus.emit("tick", &7), 3);
        assert_eq!(*seen.borrow(), vec!["first:7", "second:7", "third:7"]);
    }

    #[test]
    fn emit_unknown_event_is_noop() {
        let mut bus = EventBus::<u32>::new();
        bus.subscribe("tick", |_| panic!("must not run")).unwrap();

        assert_eq!(bus.emit("tock", &1), 0);
    }

    #[test]
    fn subscribe_rejects_blank_event_name() {
        let mut bus = EventBus::<u32>::new();
        let err = bus.subscribe("   ", |_| {}).unwrap_err();

        assert_eq!(err, EventError::InvalidEventName("   ".to_string()));
        assert!(bus.event_names().is_empty());
    }

    #[test]
    fn listener_ids_are_unique_across_events() {
        let mut bus = EventBus::<u32>::new();
        let a = bus.subscribe("a", |_| {}).unwrap();
        let b = bus.subscribe("b", |_| {}).unwrap();
        let c = bus.subscribe("a", |_| {}).unwrap();

        assert!(a < b && b < c);
        assert_eq!(bus.listener_ids("a"), vec![a, c]);
        assert_eq!(bus.listener_count("b"), 1);
        assert_eq!(bus.event_names(), vec!["a", "b"]);
    }
}
