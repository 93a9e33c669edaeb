//=========================================================================
// Global Context
//=========================================================================
//
// Shared data container for systems.
//
// Contains the state every system reads or publishes through:
// - message_bus: the single bus instance for this world
// - scoreboard: point counter shared with display handlers
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

//=== Internal Dependencies ===============================================

use crate::core::config::GameConfig;
use crate::core::message_bus::MessageBus;
use crate::core::scoreboard::Scoreboard;

//=== GlobalContext =======================================================

/// Shared context handed to systems during updates.
///
/// Replaces process-wide singletons: one bus and one scoreboard are built
/// here and passed by reference to whatever needs them.
pub struct GlobalContext {
    /// Bus carrying position, score and level messages.
    pub message_bus: MessageBus,

    /// Score for the current level.
    ///
    /// Shared through `Arc` with the handlers that display it.
    pub scoreboard: Arc<Scoreboard>,
}

impl GlobalContext {
    /// Creates a context with an empty bus and a zeroed scoreboard.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            message_bus: MessageBus::with_fault_policy(config.fault_policy),
            scoreboard: Arc::new(Scoreboard::new(config.points_to_win)),
        }
    }
}

impl Default for GlobalContext {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

//=========================================================================
// Tests
//=========================================================================
