//=========================================================================
// Scoreboard
//=========================================================================
//
// Point counter and win condition.
//
// Every point is announced on the bus as a payload-less `PointAdded`
// message. Display handlers hold an `Arc<Scoreboard>` and read the count
// back while handling that message, so the counter is atomic and all
// methods take `&self`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::atomic::{AtomicU32, Ordering};

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::message_bus::{DispatchError, Message, MessageBus, MessageKind};

//=== Scoreboard ==========================================================

/// Points needed to win when nothing else is configured.
pub const DEFAULT_POINTS_TO_WIN: u32 = 14;

/// Tracks collected points against a fixed win threshold.
#[derive(Debug)]
pub struct Scoreboard {
    points: AtomicU32,
    points_to_win: u32,
}

impl Scoreboard {
    /// Creates a scoreboard at zero points.
    ///
    /// # Panics
    ///
    /// Panics if `points_to_win == 0`.
    pub fn new(points_to_win: u32) -> Self {
        assert!(points_to_win > 0, "Points to win must be positive");
        Self {
            points: AtomicU32::new(0),
            points_to_win,
        }
    }

    /// Adds one point and publishes `PointAdded`.
    ///
    /// The point is counted before dispatch, so handlers observe the new
    /// total. A dispatch failure is returned but the point stays counted.
    pub fn add_point(&self, bus: &mut MessageBus) -> Result<(), DispatchError> {
        let points = self.points.fetch_add(1, Ordering::SeqCst).wrapping_add(1);

        if points == self.points_to_win {
            info!("Win threshold reached ({} points)", points);
        }

        bus.publish(Message::new(MessageKind::PointAdded))
    }

    pub fn points(&self) -> u32 {
        self.points.load(Ordering::SeqCst)
    }

    pub fn points_to_win(&self) -> u32 {
        self.points_to_win
    }

    /// True exactly while the count equals the threshold.
    pub fn has_won(&self) -> bool {
        self.points() == self.points_to_win
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new(DEFAULT_POINTS_TO_WIN)
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message_bus::{handler_fn, shared, HandlerError};
    use std::sync::{Arc, Mutex};

    #[test]
    fn starts_at_zero_with_default_threshold() {
        let board = Scoreboard::default();
        assert_eq!(board.points(), 0);
        assert_eq!(board.points_to_win(), 14);
        assert!(!board.has_won());
    }

    #[test]
    #[should_panic(expected = "Points to win must be positive")]
    fn zero_threshold_panics() {
        Scoreboard::new(0);
    }

    #[test]
    fn wins_only_on_third_point_and_notifies_each_time() {
        let board = Scoreboard::new(3);
        let mut bus = MessageBus::new();
        let notified = Arc::new(Mutex::new(0u32));
        let counter = Arc::clone(&notified);
        let handler = shared(handler_fn(move |_| {
            *counter.lock().unwrap() += 1;
            Ok(())
        }));
        bus.subscribe(&[MessageKind::PointAdded], &handler);

        board.add_point(&mut bus).unwrap();
        assert!(!board.has_won());
        board.add_point(&mut bus).unwrap();
        assert!(!board.has_won());
        board.add_point(&mut bus).unwrap();
        assert!(board.has_won());

        assert_eq!(*notified.lock().unwrap(), 3);
    }

    #[test]
    fn win_requires_exact_threshold() {
        let board = Scoreboard::new(1);
        let mut bus = MessageBus::new();

        board.add_point(&mut bus).unwrap();
        assert!(board.has_won());
        board.add_point(&mut bus).unwrap();
        assert!(!board.has_won());
    }

    #[test]
    fn handlers_see_updated_count() {
        let board = Arc::new(Scoreboard::new(5));
        let mut bus = MessageBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let reader = Arc::clone(&board);
        let sink = Arc::clone(&seen);
        let handler = shared(handler_fn(move |_| {
            sink.lock().unwrap().push(reader.points());
            Ok(())
        }));
        bus.subscribe(&[MessageKind::PointAdded], &handler);

        board.add_point(&mut bus).unwrap();
        board.add_point(&mut bus).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn dispatch_failure_still_counts_point() {
        let board = Scoreboard::new(2);
        let mut bus = MessageBus::new();
        let handler = shared(handler_fn(|_| Err(HandlerError::new("display gone"))));
        bus.subscribe(&[MessageKind::PointAdded], &handler);

        assert!(board.add_point(&mut bus).is_err());
        assert_eq!(board.points(), 1);
    }

    #[test]
    fn add_point_at_counter_limit_does_not_panic() {
        let board = Scoreboard {
            points: AtomicU32::new(u32::MAX),
            points_to_win: 3,
        };
        let mut bus = MessageBus::new();

        board.add_point(&mut bus).unwrap();

        assert_eq!(board.points(), 0);
        assert!(!board.has_won());
    }
}
