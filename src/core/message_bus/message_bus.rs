//=========================================================================
// Message Bus
//=========================================================================
//
// Synchronous publish/subscribe router keyed by MessageKind.
//
// Architecture:
//   subscribe(kinds, handler) → HashMap<MessageKind, Vec<Subscriber>>
//                                          ↓
//   publish(message) ──────→ handlers of message.kind, in order
//                                          ↓
//   dead (dropped) handlers ──→ pruned at the end of the call
//
// Pattern: subscribe once → publish N times, on one thread
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, Weak};

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::{
    DispatchError, HandlerError, HandlerFailure, Message, MessageHandler, MessageKind,
    SharedHandler,
};

//=== Public API ==========================================================

/// Identifies one `subscribe` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(crate) u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How `publish` reacts to a failing handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaultPolicy {
    /// Stop at the first failure and return it. Handlers after the
    /// failing one do not see the message.
    ///
    /// A fault only affects the publish that hit it. A handler whose lock
    /// was poisoned is reported once, then recovered.
    #[default]
    Propagate,

    /// Deliver to every handler and report all failures together.
    Isolate,
}

//=========================================================================

#[derive(Clone)]
struct Subscriber {
    id: SubscriptionId,
    handler: Weak<Mutex<dyn MessageHandler>>,
}

/// Routes published messages to every handler registered for their kind.
///
/// Dispatch is synchronous, on the caller's thread, in registration
/// order. The bus only holds weak handles: consumers own their handlers
/// and a dropped handler is skipped and forgotten.
///
/// ```rust
/// use roll_a_ball::prelude::*;
///
/// let mut bus = MessageBus::new();
/// let camera = shared(CameraFollow::new(Vector3::new(0.0, 10.0, -10.0)));
/// bus.subscribe(&[MessageKind::PlayerPosition], &camera);
///
/// let msg = Message::new(MessageKind::PlayerPosition).with_vector(Vector3::new(1.0, 0.0, 0.0));
/// bus.publish(msg).unwrap();
///
/// assert_eq!(camera.lock().unwrap().position(), Vector3::new(1.0, 10.0, -10.0));
/// ```
pub struct MessageBus {
    subscribers: HashMap<MessageKind, Vec<Subscriber>>,
    next_id: u64,
    policy: FaultPolicy,
}

impl MessageBus {
    /// Creates an empty bus with `FaultPolicy::Propagate`.
    pub fn new() -> Self {
        Self::with_fault_policy(FaultPolicy::default())
    }

    /// Creates an empty bus with the given fault policy.
    pub fn with_fault_policy(policy: FaultPolicy) -> Self {
        MessageBus {
            subscribers: HashMap::new(),
            next_id: 0,
            policy,
        }
    }

    pub fn fault_policy(&self) -> FaultPolicy {
        self.policy
    }

    //--- Subscription -----------------------------------------------------

    /// Registers `handler` for every kind in `kinds`.
    ///
    /// Appends to each kind's sequence. A kind listed twice in one call is
    /// registered once; registering the same handler in a second call adds
    /// a second entry, so it is invoked once per registration. An empty
    /// `kinds` slice registers nothing.
    pub fn subscribe<H>(
        &mut self,
        kinds: &[MessageKind],
        handler: &SharedHandler<H>,
    ) -> SubscriptionId
    where
        H: MessageHandler + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let strong: Arc<Mutex<dyn MessageHandler>> = handler.clone();
        let weak = Arc::downgrade(&strong);

        let mut registered: Vec<MessageKind> = Vec::with_capacity(kinds.len());
        for &kind in kinds {
            if registered.contains(&kind) {
                continue;
            }
            registered.push(kind);

            self.subscribers.entry(kind).or_default().push(Subscriber {
                id,
                handler: weak.clone(),
            });
        }

        debug!("Subscription {} registered for {:?}", id, registered);
        id
    }

    /// Removes every entry created by the given subscription.
    ///
    /// Returns `true` if anything was removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let mut removed = 0;
        for sequence in self.subscribers.values_mut() {
            let before = sequence.len();
            sequence.retain(|s| s.id != id);
            removed += before - sequence.len();
        }

        if removed > 0 {
            debug!("Subscription {} removed ({} entries)", id, removed);
        }
        removed > 0
    }

    //--- Dispatch ---------------------------------------------------------

    /// Delivers `message` to all live handlers registered for its kind.
    ///
    /// A kind nobody subscribed to is a silent no-op. Failure handling
    /// follows the bus [`FaultPolicy`].
    pub fn publish(&mut self, message: Message) -> Result<(), DispatchError> {
        let kind = message.kind;
        let Some(sequence) = self.subscribers.get(&kind) else {
            return Ok(());
        };

        trace!("Dispatching {:?} to {} subscriber(s)", kind, sequence.len());

        let mut dead: Vec<SubscriptionId> = Vec::new();
        let mut failures: Vec<HandlerFailure> = Vec::new();
        let mut aborted: Option<DispatchError> = None;

        for subscriber in sequence {
            let Some(handler) = subscriber.handler.upgrade() else {
                dead.push(subscriber.id);
                continue;
            };

            let fault = match handler.lock() {
                Ok(mut guard) => match guard.handle_message(message) {
                    Ok(()) => continue,
                    Err(err) => Fault::Handler(err),
                },
                Err(_) => {
                    // Reported once; the next publish delivers to it again.
                    handler.clear_poison();
                    Fault::Poisoned
                }
            };

            match self.policy {
                FaultPolicy::Propagate => {
                    aborted = Some(fault.into_dispatch_error(kind, subscriber.id));
                    break;
                }
                FaultPolicy::Isolate => failures.push(fault.into_failure(subscriber.id)),
            }
        }

        if !dead.is_empty() {
            self.prune(&dead);
        }

        if let Some(err) = aborted {
            return Err(err);
        }
        if !failures.is_empty() {
            return Err(DispatchError::Isolated { kind, failures });
        }
        Ok(())
    }

    //--- Query API --------------------------------------------------------

    /// Number of live entries registered for `kind`.
    pub fn subscriber_count(&self, kind: MessageKind) -> usize {
        self.subscribers
            .get(&kind)
            .map(|seq| seq.iter().filter(|s| s.handler.strong_count() > 0).count())
            .unwrap_or(0)
    }

    /// Returns true if at least one live handler is registered for `kind`.
    pub fn has_subscribers(&self, kind: MessageKind) -> bool {
        self.subscriber_count(kind) > 0
    }

    /// Returns true once anything has ever subscribed to `kind`.
    ///
    /// The entry survives unsubscription and pruning.
    pub fn is_registered(&self, kind: MessageKind) -> bool {
        self.subscribers.contains_key(&kind)
    }

    /// Returns true if no live handler is registered for any kind.
    pub fn is_empty(&self) -> bool {
        self.subscribers.keys().all(|&kind| !self.has_subscribers(kind))
    }

    //--- Internal Helpers -------------------------------------------------

    fn prune(&mut self, dead: &[SubscriptionId]) {
        for sequence in self.subscribers.values_mut() {
            sequence.retain(|s| !dead.contains(&s.id));
        }
        debug!("Pruned dropped subscriptions {:?}", dead);
    }
}

impl Default for MessageBus {
    fn default() -> Self {
        Self::new()
    }
}

//=== Fault ===============================================================

enum Fault {
    Handler(HandlerError),
    Poisoned,
}

impl Fault {
    fn into_dispatch_error(self, kind: MessageKind, subscription: SubscriptionId) -> DispatchError {
        match self {
            Fault::Handler(source) => DispatchError::Handler {
                kind,
                subscription,
                source,
            },
            Fault::Poisoned => DispatchError::Poisoned { kind, subscription },
        }
    }

    fn into_failure(self, subscription: SubscriptionId) -> HandlerFailure {
        let error = match self {
            Fault::Handler(err) => err,
            Fault::Poisoned => HandlerError::new("handler lock poisoned"),
        };
        HandlerFailure {
            subscription,
            error,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
