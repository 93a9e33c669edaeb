//=========================================================================
// Camera Follow
//=========================================================================
//
// Keeps the camera at a fixed offset from the player.
//
// The offset is the camera's starting position, which assumes the player
// spawns at the origin.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::math::Vector3;
use crate::core::message_bus::{HandlerResult, Message, MessageHandler};

//=== CameraFollow ========================================================

/// Moves the camera to `player position + offset` on every position message.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraFollow {
    offset: Vector3,
    position: Vector3,
}

impl CameraFollow {
    /// Creates a camera at `initial_position`, remembering it as the offset.
    pub fn new(initial_position: Vector3) -> Self {
        Self {
            offset: initial_position,
            position: initial_position,
        }
    }

    pub fn offset(&self) -> Vector3 {
        self.offset
    }

    /// Current camera position, for the host to apply to its transform.
    pub fn position(&self) -> Vector3 {
        self.position
    }
}

impl MessageHandler for CameraFollow {
    fn handle_message(&mut self, message: Message) -> HandlerResult {
        self.position = message.vector_value + self.offset;
        Ok(())
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message_bus::MessageKind;

    #[test]
    fn starts_at_initial_position() {
        let camera = CameraFollow::new(Vector3::new(0.0, 10.0, -10.0));
        assert_eq!(camera.position(), Vector3::new(0.0, 10.0, -10.0));
        assert_eq!(camera.offset(), Vector3::new(0.0, 10.0, -10.0));
    }

    #[test]
    fn follows_player_with_offset() {
        let mut camera = CameraFollow::new(Vector3::new(0.0, 10.0, -10.0));

        let msg =
            Message::new(MessageKind::PlayerPosition).with_vector(Vector3::new(3.0, 0.5, 2.0));
        camera.handle_message(msg).unwrap();
        assert_eq!(camera.position(), Vector3::new(3.0, 10.5, -8.0));

        let msg = Message::new(MessageKind::PlayerPosition).with_vector(Vector3::ZERO);
        camera.handle_message(msg).unwrap();
        assert_eq!(camera.position(), Vector3::new(0.0, 10.0, -10.0));
    }
}
