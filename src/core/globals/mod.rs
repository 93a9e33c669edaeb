//=========================================================================
// Global Engine State
//=========================================================================
//
// Separates systems (logic components) from context (shared data).
//
// Architecture:
//   GlobalSystems: player, pickups, display handlers (owned by orchestrator)
//   GlobalContext: MessageBus + Scoreboard (passed to every system)
//
//=========================================================================

//=== Module Declarations =================================================

mod global_context;
mod global_systems;

//=== Public API ==========================================================

pub use global_context::GlobalContext;
pub use global_systems::{GameSnapshot, GlobalSystems};
