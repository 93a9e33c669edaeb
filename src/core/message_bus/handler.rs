//=========================================================================
// Message Handler
//=========================================================================
//
// Capability trait for bus subscribers.
//
// Ownership:
//   Consumer ── owns ──> Arc<Mutex<H>>
//                             ↑
//   MessageBus ── holds ──> Weak<Mutex<dyn MessageHandler>>
//
// The bus never keeps a handler alive; dropping the consumer's `Arc`
// retires the subscription.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::{Arc, Mutex};

//=== Internal Dependencies ===============================================

use super::{HandlerError, Message};

//=== Public API ==========================================================

/// Result returned by a handler for one delivered message.
pub type HandlerResult = Result<(), HandlerError>;

/// Consumer-owned handle to a handler, as accepted by `MessageBus::subscribe`.
pub type SharedHandler<H> = Arc<Mutex<H>>;

/// Anything that can receive dispatched messages.
///
/// Handlers get their own copy of the message; mutating it has no effect
/// outside the call.
pub trait MessageHandler: Send {
    fn handle_message(&mut self, message: Message) -> HandlerResult;
}

/// Wraps a handler into the shared, consumer-owned form.
pub fn shared<H: MessageHandler>(handler: H) -> SharedHandler<H> {
    Arc::new(Mutex::new(handler))
}

//=== FnHandler ===========================================================

/// Adapts a closure into a [`MessageHandler`].
///
/// ```rust
/// use roll_a_ball::prelude::*;
///
/// let mut bus = MessageBus::new();
/// let counter = shared(handler_fn(|_msg| Ok(())));
/// bus.subscribe(&[MessageKind::PointAdded], &counter);
/// assert_eq!(bus.subscriber_count(MessageKind::PointAdded), 1);
/// ```
pub struct FnHandler<F> {
    f: F,
}

/// Builds an [`FnHandler`] from a closure.
pub fn handler_fn<F>(f: F) -> FnHandler<F>
where
    F: FnMut(Message) -> HandlerResult + Send,
{
    FnHandler { f }
}

impl<F> MessageHandler for FnHandler<F>
where
    F: FnMut(Message) -> HandlerResult + Send,
{
    fn handle_message(&mut self, message: Message) -> HandlerResult {
        (self.f)(message)
    }
}

//=========================================================================
// Tests
//=========================================================================
