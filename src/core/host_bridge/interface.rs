//=========================================================================
// Host Bridge Interface
//=========================================================================
//
// Host-to-core event contract.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::math::Vector3;
use crate::core::message_bus::ObjectId;

//=== HostEvent ===========================================================

/// Events sent from the host to the core thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// The host's physics moved the player to this position.
    PlayerMoved(Vector3),

    /// The player touched the pickup with this id.
    PickupCollected(ObjectId),

    /// The host is shutting down.
    Shutdown,
}
