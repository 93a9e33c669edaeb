//=========================================================================
// Global Systems
//=========================================================================
//
// Container for the level's logic systems.
//
// Wires producers and consumers to the bus once, at construction, then
// runs one synchronous tick per `update()` call. Systems operate on
// GlobalContext data.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::GlobalContext;
use crate::core::config::GameConfig;
use crate::core::handlers::{CameraFollow, CountText, WinText};
use crate::core::host_bridge::HostEvent;
use crate::core::math::Vector3;
use crate::core::message_bus::{
    shared, DispatchError, Message, MessageHandler, MessageKind, SharedHandler,
};
use crate::core::pickups::{Collection, PickupField};
use crate::core::player::PlayerController;

//=== GameSnapshot ========================================================

/// Displayed state after a tick, as the host would render it.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub points: u32,
    pub has_won: bool,
    pub count_text: String,
    pub win_text: String,
    pub camera_position: Vector3,
    pub player_position: Vector3,
    pub remaining_pickups: usize,
}

//=== GlobalSystems =======================================================

/// Container for the level's logic systems.
///
/// # Available Systems
///
/// - `player`: publishes `PlayerPosition` every tick
/// - `pickups`: turns collisions into points
/// - `camera`, `count_text`, `win_text`: display handlers subscribed on
///   construction
pub struct GlobalSystems {
    pub player: PlayerController,
    pub pickups: PickupField,
    pub camera: SharedHandler<CameraFollow>,
    pub count_text: SharedHandler<CountText>,
    pub win_text: SharedHandler<WinText>,
    retained: Vec<Arc<Mutex<dyn MessageHandler>>>,
    level_ended: bool,
}

impl GlobalSystems {
    /// Builds the level and subscribes its handlers on `context`'s bus.
    pub fn new(context: &mut GlobalContext, config: &GameConfig) -> Self {
        let camera = shared(CameraFollow::new(config.camera_position));
        let count_text = shared(CountText::new(Arc::clone(&context.scoreboard)));
        let win_text = shared(WinText::new(Arc::clone(&context.scoreboard)));

        let bus = &mut context.message_bus;
        bus.subscribe(&[MessageKind::PlayerPosition], &camera);
        bus.subscribe(&[MessageKind::PointAdded], &count_text);
        bus.subscribe(&[MessageKind::PointAdded], &win_text);

        debug!(
            "Level wired: {} pickups, {} points to win",
            config.pickup_count, config.points_to_win
        );

        Self {
            player: PlayerController::new(config.player_start),
            pickups: PickupField::with_count(config.pickup_count),
            camera,
            count_text,
            win_text,
            retained: Vec::new(),
            level_ended: false,
        }
    }

    /// Keeps `handler` alive for as long as these systems exist.
    ///
    /// The bus only holds weak handles, so a handler created during
    /// initialization and not stored anywhere else must be retained here.
    pub fn retain<H>(&mut self, handler: SharedHandler<H>)
    where
        H: MessageHandler + 'static,
    {
        self.retained.push(handler);
    }

    //--- Update Loop ------------------------------------------------------

    /// Announces the start of the level.
    pub fn start(&mut self, context: &mut GlobalContext) -> Result<(), DispatchError> {
        info!("Level started");
        context.message_bus.publish(Message::new(MessageKind::LevelStart))
    }

    /// Runs one tick.
    ///
    /// # Processing Pipeline
    ///
    /// 1. **Host events**: applies player moves and pickup collisions
    /// 2. **Level end**: publishes `LevelEnd` the first time the score wins
    /// 3. **Position**: publishes the player's position
    ///
    /// Dispatch faults do not stop the tick; they are returned in the
    /// order they happened.
    pub fn update(
        &mut self,
        context: &mut GlobalContext,
        events: &[HostEvent],
    ) -> Vec<DispatchError> {
        let mut faults = Vec::new();

        for event in events {
            match *event {
                HostEvent::PlayerMoved(position) => self.player.set_position(position),
                HostEvent::PickupCollected(id) => {
                    match self.pickups.collect(id, &context.scoreboard, &mut context.message_bus) {
                        Ok(Collection::Scored) => self.check_level_end(context, &mut faults),
                        Ok(_) => {}
                        Err(err) => {
                            faults.push(err);
                            self.check_level_end(context, &mut faults);
                        }
                    }
                }
                HostEvent::Shutdown => {}
            }
        }

        if let Err(err) = self.player.tick(&mut context.message_bus) {
            faults.push(err);
        }

        faults
    }

    /// Returns true once `LevelEnd` has been published.
    pub fn level_ended(&self) -> bool {
        self.level_ended
    }

    /// Captures the displayed state.
    pub fn snapshot(&self, context: &GlobalContext) -> GameSnapshot {
        GameSnapshot {
            points: context.scoreboard.points(),
            has_won: context.scoreboard.has_won(),
            count_text: lock(&self.count_text).text().to_string(),
            win_text: lock(&self.win_text).text().to_string(),
            camera_position: lock(&self.camera).position(),
            player_position: self.player.position(),
            remaining_pickups: self.pickups.remaining(),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn check_level_end(&mut self, context: &mut GlobalContext, faults: &mut Vec<DispatchError>) {
        if self.level_ended || !context.scoreboard.has_won() {
            return;
        }

        self.level_ended = true;
        info!("Level ended with {} points", context.scoreboard.points());

        if let Err(err) = context.message_bus.publish(Message::new(MessageKind::LevelEnd)) {
            faults.push(err);
        }
    }
}

fn lock<T>(handler: &SharedHandler<T>) -> MutexGuard<'_, T> {
    handler.lock().unwrap_or_else(PoisonError::into_inner)
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::handlers::WIN_MESSAGE;
    use crate::core::message_bus::{handler_fn, HandlerError, ObjectId};

    fn level(points_to_win: u32, pickups: u64) -> (GlobalContext, GlobalSystems) {
        let config = GameConfig {
            points_to_win,
            pickup_count: pickups,
            ..GameConfig::default()
        };
        let mut context = GlobalContext::new(&config);
        let systems = GlobalSystems::new(&mut context, &config);
        (context, systems)
    }

    fn kinds_seen(
        context: &mut GlobalContext,
        systems: &mut GlobalSystems,
    ) -> Arc<Mutex<Vec<MessageKind>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let handler = shared(handler_fn(move |msg: Message| {
            sink.lock().unwrap().push(msg.kind);
            Ok(())
        }));
        context
            .message_bus
            .subscribe(&[MessageKind::LevelStart, MessageKind::LevelEnd], &handler);
        systems.retain(handler);
        seen
    }

    #[test]
    fn new_subscribes_display_handlers() {
        let (context, systems) = level(14, 14);

        assert_eq!(context.message_bus.subscriber_count(MessageKind::PlayerPosition), 1);
        assert_eq!(context.message_bus.subscriber_count(MessageKind::PointAdded), 2);

        let snapshot = systems.snapshot(&context);
        assert_eq!(snapshot.count_text, "Count: 0");
        assert_eq!(snapshot.win_text, "");
        assert_eq!(snapshot.camera_position, Vector3::new(0.0, 10.0, -10.0));
        assert_eq!(snapshot.remaining_pickups, 14);
    }

    #[test]
    fn player_move_drives_camera() {
        let (mut context, mut systems) = level(14, 14);

        let moved = HostEvent::PlayerMoved(Vector3::new(2.0, 0.5, 1.0));
        let faults = systems.update(&mut context, &[moved]);

        assert!(faults.is_empty());
        let snapshot = systems.snapshot(&context);
        assert_eq!(snapshot.player_position, Vector3::new(2.0, 0.5, 1.0));
        assert_eq!(snapshot.camera_position, Vector3::new(2.0, 10.5, -9.0));
    }

    #[test]
    fn collecting_all_pickups_wins() {
        let (mut context, mut systems) = level(3, 3);
        let seen = kinds_seen(&mut context, &mut systems);

        systems.update(&mut context, &[HostEvent::PickupCollected(ObjectId(0))]);
        systems.update(&mut context, &[HostEvent::PickupCollected(ObjectId(0))]);
        let snapshot = systems.snapshot(&context);
        assert_eq!(snapshot.count_text, "Count: 1");
        assert_eq!(snapshot.win_text, "");

        systems.update(
            &mut context,
            &[HostEvent::PickupCollected(ObjectId(1)), HostEvent::PickupCollected(ObjectId(2))],
        );
        let snapshot = systems.snapshot(&context);
        assert_eq!(snapshot.points, 3);
        assert!(snapshot.has_won);
        assert_eq!(snapshot.count_text, "Count: 3");
        assert_eq!(snapshot.win_text, WIN_MESSAGE);
        assert_eq!(snapshot.remaining_pickups, 0);
        assert!(systems.level_ended());
        assert_eq!(*seen.lock().unwrap(), vec![MessageKind::LevelEnd]);
    }

    #[test]
    fn start_publishes_level_start_once() {
        let (mut context, mut systems) = level(14, 14);
        let seen = kinds_seen(&mut context, &mut systems);

        systems.start(&mut context).unwrap();
        systems.update(&mut context, &[]);

        assert_eq!(*seen.lock().unwrap(), vec![MessageKind::LevelStart]);
    }

    #[test]
    fn faults_are_reported_without_stopping_the_tick() {
        let (mut context, mut systems) = level(14, 14);
        let broken = shared(handler_fn(|_| Err(HandlerError::new("broken"))));
        context.message_bus.subscribe(&[MessageKind::PointAdded], &broken);
        systems.retain(broken);

        let faults = systems.update(
            &mut context,
            &[
                HostEvent::PickupCollected(ObjectId(0)),
                HostEvent::PlayerMoved(Vector3::new(1.0, 0.0, 0.0)),
            ],
        );

        assert_eq!(faults.len(), 1);
        assert_eq!(faults[0].kind(), MessageKind::PointAdded);
        let snapshot = systems.snapshot(&context);
        assert_eq!(snapshot.points, 1);
        assert_eq!(snapshot.player_position, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn retained_handlers_outlive_their_creator() {
        let (mut context, mut systems) = level(14, 14);
        {
            let handler = shared(handler_fn(|_| Ok(())));
            context.message_bus.subscribe(&[MessageKind::LevelEnd], &handler);
            systems.retain(handler);
        }
        assert!(context.message_bus.has_subscribers(MessageKind::LevelEnd));
    }
}
