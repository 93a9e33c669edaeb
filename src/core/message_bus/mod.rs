//=========================================================================
// Message Bus System
//=========================================================================
//
// Decouples event producers (player, scoreboard) from consumers (camera,
// score and win text).
//
// Architecture:
//   Producer ── publish(Message) ──> MessageBus
//                                       │ kind → [Subscriber, ...]
//                                       ↓
//                   MessageHandler::handle_message(copy), in order
//
//=========================================================================

//=== Module Declarations =================================================

mod error;
mod handler;
mod message;
mod message_bus;

//=== Public API ==========================================================

pub use error::{DispatchError, HandlerError, HandlerFailure};
pub use handler::{handler_fn, shared, FnHandler, HandlerResult, MessageHandler, SharedHandler};
pub use message::{Message, MessageKind, ObjectId};
pub use message_bus::{FaultPolicy, MessageBus, SubscriptionId};
