//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for the game systems running on the logic
// (non-host) thread.
//
// Responsibilities:
// - Own the world: GlobalContext (bus, scoreboard) + GlobalSystems
// - Receive host events via a bounded crossbeam channel
// - Maintain deterministic pacing using a fixed tick rate (TPS)
// - Log dispatch faults without interrupting the loop
//
// Notes:
// Everything that touches the bus lives on the logic thread. The host
// only talks to it through `HostEvent`s, so the bus itself never needs
// to be shared between threads.
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================
use crossbeam_channel::Receiver;
use log::{error, info};

//=== Public Modules ======================================================
pub mod config;
pub mod globals;
pub mod handlers;
pub mod host_bridge;
pub mod math;
pub mod message_bus;
pub mod pickups;
pub mod player;
pub mod scoreboard;

//=== Re-exports ==========================================================
pub use config::GameConfig;
pub use globals::{GameSnapshot, GlobalContext, GlobalSystems};
pub use host_bridge::HostEvent;

//=== Internal Imports ====================================================
use host_bridge::{EventCollector, TickControl};

//=== CoreSystemsOrchestrator =============================================
//
// Owns the world and schedules its ticks.
//
pub(crate) struct CoreSystemsOrchestrator {
    context: GlobalContext,
    systems: GlobalSystems,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------
    //
    // Builds and wires the world but does not yet start the logic thread.
    //
    pub fn new(config: &GameConfig) -> Self {
        let mut context = GlobalContext::new(config);
        let systems = GlobalSystems::new(&mut context, config);
        Self { context, systems }
    }

    //--- init_systems() --------------------------------------------------
    //
    // Gives the embedder a chance to subscribe extra handlers before the
    // first tick.
    //
    pub fn init_systems<F>(&mut self, init_fn: F)
    where
        F: FnOnce(&mut GlobalSystems, &mut GlobalContext),
    {
        init_fn(&mut self.systems, &mut self.context);
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread, ticking at `tps` until the host sends
    // `Shutdown` or drops its sender.
    //
    // Each tick:
    //  1. Collects host events
    //  2. Updates systems (faults are logged)
    //  3. Sleeps to maintain fixed pacing
    //  4. Exits after applying the final batch on shutdown
    //
    // The thread returns the last displayed state.
    //
    pub fn spawn_core_thread(
        self,
        receiver: Receiver<HostEvent>,
        tps: f64,
    ) -> thread::JoinHandle<GameSnapshot> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut context = self.context;
            let mut systems = self.systems;
            let mut collector = EventCollector::new(receiver);

            if let Err(e) = systems.start(&mut context) {
                error!("Level start dispatch failed: {}", e);
            }

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather host events ----------------------------
                let control = collector.collect_frame();

                //--- Step 2: Update systems --------------------------------
                for fault in systems.update(&mut context, collector.events()) {
                    error!("Dispatch fault: {}", fault);
                }

                if control == TickControl::Exit {
                    info!("Core thread exiting.");
                    break;
                }

                //--- Step 3: Maintain deterministic pacing ----------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }

            systems.snapshot(&context)
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
