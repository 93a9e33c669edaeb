//=========================================================================
// Player Controller
//=========================================================================
//
// Publishes the player's position once per tick.
//
// Movement itself is simulated by the host; the controller only keeps the
// last position the host reported and announces it. One message is built
// up front and reused every tick.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::math::Vector3;
use crate::core::message_bus::{DispatchError, Message, MessageBus, MessageKind};

//=== PlayerController ====================================================

/// Position producer for the player sphere.
#[derive(Debug, Clone)]
pub struct PlayerController {
    position_message: Message,
}

impl PlayerController {
    /// Creates a controller whose player starts at `start`.
    pub fn new(start: Vector3) -> Self {
        Self {
            position_message: Message::new(MessageKind::PlayerPosition).with_vector(start),
        }
    }

    /// Records the latest position reported by the host.
    pub fn set_position(&mut self, position: Vector3) {
        self.position_message.vector_value = position;
    }

    pub fn position(&self) -> Vector3 {
        self.position_message.vector_value
    }

    /// Publishes the current position as a `PlayerPosition` message.
    pub fn tick(&mut self, bus: &mut MessageBus) -> Result<(), DispatchError> {
        bus.publish(self.position_message)
    }
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new(Vector3::ZERO)
    }
}

//=========================================================================
// Tests
//=========================================================================
