//=========================================================================
// Roll-a-ball — Library Root
//
// This crate defines the game core of a roll-a-ball level: a sphere
// collects pickups, a counter and win message are displayed, and every
// component talks through a typed, synchronous message bus.
//
// Responsibilities:
// - Expose the message bus (`core::message_bus`) as a standalone API
// - Expose the level's producers and consumers (player, scoreboard,
//   pickups, camera and text handlers)
// - Provide a fixed-rate runtime (`Engine`) fed by host events
//
// Physics, rendering and input belong to the embedding host, which
// reports what happened through `HostEvent`s and reads back a
// `GameSnapshot`.
//
// Typical usage:
// ```no_run
// use roll_a_ball::prelude::*;
//
// let snapshot = EngineBuilder::new()
//     .build()
//     .run(|handle| {
//         handle.send(HostEvent::PickupCollected(ObjectId(0))).unwrap();
//     })
//     .unwrap();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the bus, the level systems and the orchestrator. It is
// public so the bus can be used on its own, without the runtime.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `engine` defines the runtime entry point and its builder.
//
mod engine;

//--- Public Exports ------------------------------------------------------
pub use engine::{Engine, EngineBuilder, EngineError, EngineHandle};
