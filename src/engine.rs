//=========================================================================
// Roll-a-ball Engine
//
// Main entry point and coordinator for the game core.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──start()──>  EngineHandle
//         │                          │                       │
//         ├─ with_tps()              └─ init()               ├─ send(HostEvent)
//         ├─ with_channel_capacity()                         └─ shutdown()
//         └─ with_points_to_win() ...
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread::JoinHandle;
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::math::Vector3;
use crate::core::message_bus::FaultPolicy;
use crate::core::{
    CoreSystemsOrchestrator, GameConfig, GameSnapshot, GlobalContext, GlobalSystems, HostEvent,
};

//=== EngineError =========================================================

/// Runtime errors between the host and the logic thread.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The logic thread is gone and no longer receives events.
    #[error("core thread is no longer receiving host events")]
    ChannelClosed,

    /// The logic thread panicked.
    #[error("core thread panicked: {0}")]
    CoreThreadPanicked(String),
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Level**: see [`GameConfig`]
///
/// # Examples
///
/// ```no_run
/// use roll_a_ball::prelude::*;
///
/// let handle = EngineBuilder::new()
///     .with_tps(120.0)
///     .with_points_to_win(3)
///     .with_pickup_count(3)
///     .build()
///     .start();
///
/// handle.send(HostEvent::PickupCollected(ObjectId(0))).unwrap();
/// let snapshot = handle.shutdown().unwrap();
/// println!("{}", snapshot.count_text);
/// ```
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    config: GameConfig,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            config: GameConfig::default(),
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`, or if it is so small that a tick would not
    /// fit in a `Duration`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        assert!(
            Duration::try_from_secs_f64(1.0 / tps).is_ok(),
            "TPS too small for a representable tick, got {}",
            tps
        );
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for host → core communication.
    ///
    /// When the channel is full, `EngineHandle::send` blocks until the
    /// logic thread catches up.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the score that wins the level.
    ///
    /// Default: 14
    ///
    /// # Panics
    ///
    /// Panics if `points == 0`.
    pub fn with_points_to_win(mut self, points: u32) -> Self {
        assert!(points > 0, "Points to win must be positive");
        self.config.points_to_win = points;
        self
    }

    /// Sets how many pickups the level holds (ids `0..count`).
    ///
    /// Default: 14
    pub fn with_pickup_count(mut self, count: u64) -> Self {
        self.config.pickup_count = count;
        self
    }

    /// Sets the camera's starting position, which becomes its follow offset.
    ///
    /// Default: (0, 10, -10)
    pub fn with_camera_position(mut self, position: Vector3) -> Self {
        self.config.camera_position = position;
        self
    }

    /// Sets where the player spawns.
    ///
    /// Default: origin
    pub fn with_player_start(mut self, position: Vector3) -> Self {
        self.config.player_start = position;
        self
    }

    /// Sets how the bus reacts to failing handlers.
    ///
    /// Default: [`FaultPolicy::Propagate`]
    pub fn with_fault_policy(mut self, policy: FaultPolicy) -> Self {
        self.config.fault_policy = policy;
        self
    }

    /// Builds the engine instance with its world wired up.
    pub fn build(self) -> Engine {
        info!(
            "Building engine (TPS: {}, channel: {}, points to win: {})",
            self.tps, self.channel_capacity, self.config.points_to_win
        );

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(&self.config),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Roll-a-ball runtime, built but not yet running.
///
/// ```text
/// Host (caller's thread)                Logic Thread @ TPS
///   physics, rendering, input    ──►      GlobalSystems::update()
///   EngineHandle::send(HostEvent)           └─► MessageBus dispatch
///
/// Communication: bounded crossbeam channel (HostEvent)
/// ```
pub struct Engine {
    orchestrator: CoreSystemsOrchestrator,
    tps: f64,
    channel_capacity: usize,
}

impl Engine {
    //--- Initialization ---------------------------------------------------

    /// Configures systems before the first tick.
    ///
    /// Typical use is subscribing extra handlers. The bus holds handlers
    /// weakly, so handlers created here must be kept alive with
    /// [`GlobalSystems::retain`] or stored by the caller.
    ///
    /// ```no_run
    /// use roll_a_ball::prelude::*;
    ///
    /// let engine = EngineBuilder::new().build().init(|systems, context| {
    ///     let on_end = shared(handler_fn(|_| {
    ///         println!("level over");
    ///         Ok(())
    ///     }));
    ///     context.message_bus.subscribe(&[MessageKind::LevelEnd], &on_end);
    ///     systems.retain(on_end);
    /// });
    /// ```
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut GlobalSystems, &mut GlobalContext),
    {
        info!("Initializing engine systems");

        self.orchestrator.init_systems(init_fn);

        info!("Engine initialization complete");
        self
    }

    //--- Execution --------------------------------------------------------

    /// Starts the logic thread and returns the host's handle to it.
    pub fn start(self) -> EngineHandle {
        info!("Starting engine runtime (TPS: {})", self.tps);

        let (tx, rx): (Sender<HostEvent>, Receiver<HostEvent>) = bounded(self.channel_capacity);
        info!("Host channel created (capacity: {})", self.channel_capacity);

        let core = self.orchestrator.spawn_core_thread(rx, self.tps);
        info!("Core logic thread spawned");

        EngineHandle { sender: tx, core }
    }

    /// Runs the engine with `host` driving it from the calling thread.
    ///
    /// Blocks until `host` returns, then shuts the logic thread down and
    /// returns the final displayed state.
    pub fn run<F>(self, host: F) -> Result<GameSnapshot, EngineError>
    where
        F: FnOnce(&EngineHandle),
    {
        let handle = self.start();
        host(&handle);
        handle.shutdown()
    }
}

//=== EngineHandle ========================================================

/// Host-side handle to a running engine.
pub struct EngineHandle {
    sender: Sender<HostEvent>,
    core: JoinHandle<GameSnapshot>,
}

impl EngineHandle {
    /// Sends one event to the logic thread.
    pub fn send(&self, event: HostEvent) -> Result<(), EngineError> {
        self.sender.send(event).map_err(|_| EngineError::ChannelClosed)
    }

    /// Returns a sender for hosts that feed events from several places.
    pub fn sender(&self) -> Sender<HostEvent> {
        self.sender.clone()
    }

    /// Stops the logic thread after it applies pending events, and returns
    /// the final displayed state.
    pub fn shutdown(self) -> Result<GameSnapshot, EngineError> {
        if self.sender.send(HostEvent::Shutdown).is_err() {
            info!("Core thread already stopped");
        }

        match self.core.join() {
            Ok(snapshot) => {
                info!("Engine shutdown complete");
                Ok(snapshot)
            }
            Err(panic) => {
                let reason = panic
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                error!("Core thread panicked: {}", reason);
                Err(EngineError::CoreThreadPanicked(reason))
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
