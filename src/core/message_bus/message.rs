//=========================================================================
// Message
//=========================================================================
//
// Tagged event value routed by the MessageBus.
//
// A message carries one discriminant (`MessageKind`) and a fixed set of
// payload slots. Only the slots the kind's consumers read are meaningful;
// the rest keep their defaults. Messages are `Copy`, so every handler
// receives its own value and cannot disturb the publisher or its peers.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::math::Vector3;

//=== MessageKind =========================================================

/// Discriminant identifying what an event represents.
///
/// The bus routes purely on this tag; adding a variant requires no bus
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageKind {
    #[default]
    None,
    LevelStart,
    LevelEnd,
    PlayerPosition,
    PointAdded,
}

impl MessageKind {
    /// Every kind, in declaration order.
    pub const ALL: [MessageKind; 5] = [
        MessageKind::None,
        MessageKind::LevelStart,
        MessageKind::LevelEnd,
        MessageKind::PlayerPosition,
        MessageKind::PointAdded,
    ];
}

//=== ObjectId ============================================================

/// Opaque handle to a host-side object (pickup, player, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

//=== Message =============================================================

/// One discrete event occurrence and its payload.
///
/// No validation ties payload to kind; producers fill the slots their
/// kind's consumers expect.
///
/// ```rust
/// use roll_a_ball::prelude::*;
///
/// let msg = Message::new(MessageKind::PlayerPosition)
///     .with_vector(Vector3::new(1.0, 2.0, 3.0));
///
/// assert_eq!(msg.kind, MessageKind::PlayerPosition);
/// assert_eq!(msg.int_value, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Message {
    pub kind: MessageKind,
    pub int_value: i32,
    pub float_value: f32,
    pub vector_value: Vector3,
    pub object_ref: Option<ObjectId>,
}

impl Message {
    /// Creates a message of the given kind with default payload.
    pub fn new(kind: MessageKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn with_int(mut self, value: i32) -> Self {
        self.int_value = value;
        self
    }

    pub fn with_float(mut self, value: f32) -> Self {
        self.float_value = value;
        self
    }

    pub fn with_vector(mut self, value: Vector3) -> Self {
        self.vector_value = value;
        self
    }

    pub fn with_object(mut self, object: ObjectId) -> Self {
        self.object_ref = Some(object);
        self
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_kind_is_none() {
        assert_eq!(MessageKind::default(), MessageKind::None);
        assert_eq!(Message::default().kind, MessageKind::None);
    }

    #[test]
    fn new_leaves_payload_at_defaults() {
        let msg = Message::new(MessageKind::PointAdded);

        assert_eq!(msg.kind, MessageKind::PointAdded);
        assert_eq!(msg.int_value, 0);
        assert_eq!(msg.float_value, 0.0);
        assert_eq!(msg.vector_value, Vector3::ZERO);
        assert_eq!(msg.object_ref, None);
    }

    #[test]
    fn builder_sets_payload_slots() {
        let msg = Message::new(MessageKind::LevelEnd)
            .with_int(7)
            .with_float(0.5)
            .with_vector(Vector3::new(1.0, 2.0, 3.0))
            .with_object(ObjectId(42));

        assert_eq!(msg.int_value, 7);
        assert_eq!(msg.float_value, 0.5);
        assert_eq!(msg.vector_value, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(msg.object_ref, Some(ObjectId(42)));
    }

    #[test]
    fn copies_are_independent() {
        let original = Message::new(MessageKind::PlayerPosition).with_int(1);
        let mut copy = original;
        copy.int_value = 99;

        assert_eq!(original.int_value, 1);
        assert_eq!(copy.int_value, 99);
    }
}
