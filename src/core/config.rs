//=========================================================================
// Game Configuration
//=========================================================================
//
// Level parameters consumed when the world is wired up.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::math::Vector3;
use crate::core::message_bus::FaultPolicy;
use crate::core::scoreboard::DEFAULT_POINTS_TO_WIN;

//=== GameConfig ==========================================================

/// Level setup used by [`crate::core::GlobalSystems`].
///
/// # Default Values
///
/// - **points_to_win**: 14
/// - **pickup_count**: 14
/// - **camera_position**: (0, 10, -10)
/// - **player_start**: origin
/// - **fault_policy**: `Propagate`
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub points_to_win: u32,
    pub pickup_count: u64,
    pub camera_position: Vector3,
    pub player_start: Vector3,
    pub fault_policy: FaultPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            points_to_win: DEFAULT_POINTS_TO_WIN,
            pickup_count: DEFAULT_POINTS_TO_WIN as u64,
            camera_position: Vector3::new(0.0, 10.0, -10.0),
            player_start: Vector3::ZERO,
            fault_policy: FaultPolicy::Propagate,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
