//! Quest lifecycle events and the listener bus that delivers them.

use quest_rules::Quest;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// A quest changed status. Each event carries a copy of the quest as it is
/// right after the transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum QuestEvent {
    Started(Quest),
    Completed(Quest),
    /// Reserved. Declared for listeners but not emitted by the registry.
    Failed(Quest),
}

impl QuestEvent {
    /// The quest carried by this event.
    pub fn quest(&self) -> &Quest {
        match self {
            QuestEvent::Started(quest)
            | QuestEvent::Completed(quest)
            | QuestEvent::Failed(quest) => quest,
        }
    }

    pub fn quest_id(&self) -> &str {
        &self.quest().id
    }

    /// Get event type as string (for logging/debugging).
    pub fn event_type(&self) -> &'static str {
        match self {
            QuestEvent::Started(_) => "quest_started",
            QuestEvent::Completed(_) => "quest_completed",
            QuestEvent::Failed(_) => "quest_failed",
        }
    }
}

/// Handle returned by [`QuestEventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub Uuid);

impl ListenerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ListenerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

type Listener = Box<dyn FnMut(&QuestEvent)>;

/// Synchronous, in-process broadcast of quest events.
///
/// `emit` calls every listener, in subscription order, before it returns.
#[derive(Default)]
pub struct QuestEventBus {
    listeners: Vec<(ListenerId, Listener)>,
}

impl QuestEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for all future events.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&QuestEvent) + 'static,
    {
        let id = ListenerId::new();
        self.listeners.push((id, Box::new(listener)));
        debug!(listener = %id, "quest listener subscribed");
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        let removed = self.listeners.len() != before;
        if removed {
            debug!(listener = %id, "quest listener unsubscribed");
        }
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver an event to every listener.
    pub fn emit(&mut self, event: &QuestEvent) {
        debug!(
            event = event.event_type(),
            quest_id = event.quest_id(),
            listeners = self.listeners.len(),
            "emitting quest event"
        );
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }
}

impl std::fmt::Debug for QuestEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuestEventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_event_accessors() {
        let event = QuestEvent::Completed(Quest::new("quest_1", "Lost Lantern"));
        assert_eq!(event.quest_id(), "quest_1");
        assert_eq!(event.quest().name, "Lost Lantern");
        assert_eq!(event.event_type(), "quest_completed");
        assert_eq!(
            QuestEvent::Failed(Quest::default()).event_type(),
            "quest_failed"
        );
    }

    #[test]
    fn test_emit_reaches_listeners_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = QuestEventBus::new();

        let first = Rc::clone(&log);
        bus.subscribe(move |e| first.borrow_mut().push(format!("ui:{}", e.quest_id())));
        let second = Rc::clone(&log);
        bus.subscribe(move |e| second.borrow_mut().push(format!("audio:{}", e.quest_id())));

        bus.emit(&QuestEvent::Started(Quest::new("q1", "Neon Alley")));

        assert_eq!(*log.borrow(), vec!["ui:q1", "audio:q1"]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut bus = QuestEventBus::new();

        let counter = Rc::clone(&count);
        let id = bus.subscribe(move |_| *counter.borrow_mut() += 1);
        assert_eq!(bus.listener_count(), 1);

        bus.emit(&QuestEvent::Started(Quest::default()));
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.emit(&QuestEvent::Started(Quest::default()));

        assert_eq!(*count.borrow(), 1);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn test_listener_ids_are_unique() {
        let mut bus = QuestEventBus::new();
        let a = bus.subscribe(|_| {});
        let b = bus.subscribe(|_| {});
        assert_ne!(a, b);
    }
}
