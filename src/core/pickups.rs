//=========================================================================
// Pickups
//=========================================================================
//
// Collectible objects placed in the level.
//
// The host detects the player touching a pickup and reports its id. An
// active pickup is deactivated (the host hides it) and scores one point;
// reports for inactive or unknown pickups are ignored.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeMap;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::message_bus::{DispatchError, MessageBus, ObjectId};
use crate::core::scoreboard::Scoreboard;

//=== Collection ==========================================================

/// Outcome of a collision report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// The pickup was active and a point was scored.
    Scored,
    /// The pickup had already been collected.
    AlreadyCollected,
    /// No pickup with this id exists.
    Unknown,
}

//=== PickupField =========================================================

/// Set of pickups and their active flags.
#[derive(Debug, Clone, Default)]
pub struct PickupField {
    active: BTreeMap<ObjectId, bool>,
}

impl PickupField {
    /// Creates `count` active pickups with ids `0..count`.
    pub fn with_count(count: u64) -> Self {
        Self::from_ids((0..count).map(ObjectId))
    }

    /// Creates active pickups for the given ids.
    pub fn from_ids(ids: impl IntoIterator<Item = ObjectId>) -> Self {
        Self {
            active: ids.into_iter().map(|id| (id, true)).collect(),
        }
    }

    /// Handles the player touching pickup `id`.
    ///
    /// On `Scored`, the scoreboard has published `PointAdded`; a dispatch
    /// failure is returned after the pickup was deactivated and counted.
    pub fn collect(
        &mut self,
        id: ObjectId,
        scoreboard: &Scoreboard,
        bus: &mut MessageBus,
    ) -> Result<Collection, DispatchError> {
        let Some(active) = self.active.get_mut(&id) else {
            warn!("Collision reported for unknown pickup {:?}", id);
            return Ok(Collection::Unknown);
        };

        if !*active {
            debug!("Pickup {:?} already collected", id);
            return Ok(Collection::AlreadyCollected);
        }

        *active = false;
        debug!("Pickup {:?} collected", id);
        scoreboard.add_point(bus)?;
        Ok(Collection::Scored)
    }

    pub fn is_active(&self, id: ObjectId) -> bool {
        self.active.get(&id).copied().unwrap_or(false)
    }

    /// Number of pickups not yet collected.
    pub fn remaining(&self) -> usize {
        self.active.values().filter(|&&a| a).count()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_count_creates_active_pickups() {
        let field = PickupField::with_count(3);
        assert_eq!(field.len(), 3);
        assert_eq!(field.remaining(), 3);
        assert!(field.is_active(ObjectId(2)));
        assert!(!field.is_active(ObjectId(3)));
    }

    #[test]
    fn each_pickup_scores_once() {
        let mut field = PickupField::with_count(2);
        let board = Scoreboard::new(2);
        let mut bus = MessageBus::new();

        assert_eq!(field.collect(ObjectId(0), &board, &mut bus), Ok(Collection::Scored));
        assert_eq!(
            field.collect(ObjectId(0), &board, &mut bus),
            Ok(Collection::AlreadyCollected)
        );
        assert_eq!(board.points(), 1);
        assert_eq!(field.remaining(), 1);
        assert!(!field.is_active(ObjectId(0)));
    }

    #[test]
    fn unknown_pickup_is_ignored() {
        let mut field = PickupField::from_ids([ObjectId(10)]);
        let board = Scoreboard::default();
        let mut bus = MessageBus::new();

        assert_eq!(field.collect(ObjectId(11), &board, &mut bus), Ok(Collection::Unknown));
        assert_eq!(board.points(), 0);
    }

    #[test]
    fn empty_field() {
        let field = PickupField::default();
        assert!(field.is_empty());
        assert_eq!(field.remaining(), 0);
    }
}
