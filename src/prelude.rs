//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use roll_a_ball::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder, EngineError, EngineHandle};

// Global systems and context
pub use crate::core::config::GameConfig;
pub use crate::core::globals::{GameSnapshot, GlobalContext, GlobalSystems};
pub use crate::core::host_bridge::HostEvent;

// Message bus
pub use crate::core::message_bus::{
    handler_fn, shared, DispatchError, FaultPolicy, HandlerError, HandlerResult, Message,
    MessageBus, MessageHandler, MessageKind, ObjectId, SharedHandler, SubscriptionId,
};

// Level
pub use crate::core::handlers::{CameraFollow, CountText, WinText, WIN_MESSAGE};
pub use crate::core::math::Vector3;
pub use crate::core::pickups::{Collection, PickupField};
pub use crate::core::player::PlayerController;
pub use crate::core::scoreboard::Scoreboard;
