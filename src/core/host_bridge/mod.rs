//=========================================================================
// Host Bridge
//=========================================================================
//
// Bridges the embedding host (physics, rendering, input) with the core
// logic thread.
//
// Components:
// - `interface`: Event types the host sends (the contract)
// - `event_collector`: Core-side per-tick event collection
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Public API ==========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub use interface::HostEvent;
