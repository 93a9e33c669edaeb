//=========================================================================
// Event Collector
//=========================================================================
//
// Host event collector with bounded polling and shutdown detection.
//
// Architecture:
//   Receiver<HostEvent> → collect_frame() → events → TickControl
//
// Bounded polling prevents a flooding host from starving the tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::HostEvent;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Collects host events for one tick.
pub(crate) struct EventCollector {
    receiver: Receiver<HostEvent>,
    events: Vec<HostEvent>,
}

impl EventCollector {
    pub(crate) const MAX_EVENTS_PER_FRAME: usize = 100;

    pub(crate) fn new(receiver: Receiver<HostEvent>) -> Self {
        Self {
            receiver,
            events: Vec::with_capacity(16),
        }
    }

    /// Collects pending host events (bounded to prevent starvation).
    ///
    /// Events received before a shutdown stay available through
    /// `events()` so the final tick can still apply them.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.events.clear();
        let mut drained = 0;

        while drained < Self::MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(HostEvent::Shutdown) => return TickControl::Exit,
                Ok(event) => {
                    self.events.push(event);
                    drained += 1;
                }
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= Self::MAX_EVENTS_PER_FRAME {
            warn!("Host event backlog: drained {} events this frame", drained);
        }

        TickControl::Continue
    }

    /// Returns events collected this frame.
    pub(crate) fn events(&self) -> &[HostEvent] {
        &self.events
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::Vector3;
    use crate::core::message_bus::ObjectId;
    use crossbeam_channel::unbounded;

    #[test]
    fn collect_handles_empty_queue() {
        let (_tx, rx) = unbounded::<HostEvent>();
        let mut collector = EventCollector::new(rx);

        let result = collector.collect_frame();

        assert_eq!(result, TickControl::Continue);
        assert!(collector.events().is_empty());
    }

    #[test]
    fn collect_aggregates_multiple_events() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(HostEvent::PlayerMoved(Vector3::new(1.0, 0.0, 0.0))).unwrap();
        tx.send(HostEvent::PickupCollected(ObjectId(4))).unwrap();

        let result = collector.collect_frame();

        assert_eq!(result, TickControl::Continue);
        assert_eq!(
            collector.events(),
            &[
                HostEvent::PlayerMoved(Vector3::new(1.0, 0.0, 0.0)),
                HostEvent::PickupCollected(ObjectId(4)),
            ]
        );
    }

    #[test]
    fn collect_returns_exit_on_shutdown_keeping_prior_events() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(HostEvent::PickupCollected(ObjectId(1))).unwrap();
        tx.send(HostEvent::Shutdown).unwrap();

        let result = collector.collect_frame();

        assert_eq!(result, TickControl::Exit);
        assert_eq!(collector.events(), &[HostEvent::PickupCollected(ObjectId(1))]);
    }

    #[test]
    fn collect_clears_previous_events() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(HostEvent::PlayerMoved(Vector3::ZERO)).unwrap();
        collector.collect_frame();
        assert_eq!(collector.events().len(), 1);

        collector.collect_frame();
        assert!(collector.events().is_empty());
    }

    #[test]
    fn collect_is_bounded_per_frame() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        for _ in 0..(EventCollector::MAX_EVENTS_PER_FRAME + 5) {
            tx.send(HostEvent::PlayerMoved(Vector3::ZERO)).unwrap();
        }

        collector.collect_frame();
        assert_eq!(collector.events().len(), EventCollector::MAX_EVENTS_PER_FRAME);

        collector.collect_frame();
        assert_eq!(collector.events().len(), 5);
    }

    #[test]
    fn collect_returns_exit_on_disconnect() {
        let (tx, rx) = unbounded::<HostEvent>();
        let mut collector = EventCollector::new(rx);

        drop(tx);

        let result = collector.collect_frame();

        assert_eq!(result, TickControl::Exit);
    }
}
