//! Rendering surface: the host's global pointer-down channel
//!
//! Widgets that need to observe clicks outside their own bounds subscribe
//! here. A subscription is a guard: dropping it deregisters the listener,
//! so a listener can never outlive the state that acquired it.
//!
//! Subscriptions are armed lazily. [`Surface::subscribe_deferred`] registers
//! a pending listener that only starts receiving pointer-downs after the
//! host calls [`Surface::end_turn`], i.e. from the next event-loop turn on.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::debug;

/// Identifies one registered pointer-down listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arming {
    /// Registered this turn, not yet receiving events
    Pending,
    /// Receiving pointer-downs
    Armed,
}

#[derive(Debug, Default)]
struct Listeners {
    next_id: u64,
    turn: u64,
    /// Registration order is dispatch order.
    entries: Vec<(ListenerId, Arming)>,
}

impl Listeners {
    fn register(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Arming::Pending));
        id
    }

    fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    fn arming(&self, id: ListenerId) -> Option<Arming> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|&(_, arming)| arming)
    }
}

/// Handle to the host's pointer-event channel
///
/// Cloning yields another handle to the same channel.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    inner: Rc<RefCell<Listeners>>,
}

impl Surface {
    /// Create an empty surface
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pointer-down listener that becomes live on the next turn
    ///
    /// Dropping the returned guard before then cancels the pending arming.
    pub fn subscribe_deferred(&self) -> Subscription {
        let mut listeners = self.inner.borrow_mut();
        let id = listeners.register();
        debug!(listener = id.0, turn = listeners.turn, "Pointer listener pending");
        Subscription {
            id,
            listeners: Rc::downgrade(&self.inner),
        }
    }

    /// Finish the current event-loop turn, arming every pending listener
    ///
    /// Returns how many listeners were armed.
    pub fn end_turn(&self) -> usize {
        let mut listeners = self.inner.borrow_mut();
        listeners.turn += 1;
        let mut armed = 0;
        for (_, arming) in &mut listeners.entries {
            if *arming == Arming::Pending {
                *arming = Arming::Armed;
                armed += 1;
            }
        }
        if armed > 0 {
            debug!(armed, turn = listeners.turn, "Pointer listeners armed");
        }
        armed
    }

    /// Deliver a pointer-down, returning the listeners it reaches
    ///
    /// Only armed listeners are notified, in registration order. The host
    /// routes the event to whichever widgets own the returned ids.
    #[must_use]
    pub fn pointer_down(&self) -> Vec<ListenerId> {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|(_, arming)| *arming == Arming::Armed)
            .map(|&(id, _)| id)
            .collect()
    }

    /// Number of registered listeners, pending or armed
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Number of listeners currently receiving pointer-downs
    #[must_use]
    pub fn armed_count(&self) -> usize {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|(_, arming)| *arming == Arming::Armed)
            .count()
    }

    /// Number of completed turns
    #[must_use]
    pub fn turn(&self) -> u64 {
        self.inner.borrow().turn
    }
}

/// Guard for one registered listener; deregisters on drop
#[derive(Debug)]
#[must_use = "dropping a subscription deregisters its listener"]
pub struct Subscription {
    id: ListenerId,
    listeners: Weak<RefCell<Listeners>>,
}

impl Subscription {
    /// The listener id this guard owns
    #[must_use]
    pub const fn id(&self) -> ListenerId {
        self.id
    }

    /// Whether the listener is receiving pointer-downs yet
    #[must_use]
    pub fn is_armed(&self) -> bool {
        let Some(listeners) = self.listeners.upgrade() else {
            return false;
        };
        let arming = listeners.borrow().arming(self.id);
        arming == Some(Arming::Armed)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // The surface may already be gone; nothing to release then.
        let Some(listeners) = self.listeners.upgrade() else {
            return;
        };
        let removed = listeners.borrow_mut().remove(self.id);
        if removed {
            debug!(listener = self.id.0, "Pointer listener released");
        }
    }
}
