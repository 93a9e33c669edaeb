//=========================================================================
// Count Text
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

//=== Internal Dependencies ===============================================

use crate::core::message_bus::{HandlerResult, Message, MessageHandler};
use crate::core::scoreboard::Scoreboard;

//=== CountText ===========================================================

/// Score label, refreshed from the scoreboard on every notification.
#[derive(Debug)]
pub struct CountText {
    scoreboard: Arc<Scoreboard>,
    text: String,
}

impl CountText {
    pub fn new(scoreboard: Arc<Scoreboard>) -> Self {
        Self {
            scoreboard,
            text: format_count(0),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl MessageHandler for CountText {
    fn handle_message(&mut self, _message: Message) -> HandlerResult {
        self.text = format_count(self.scoreboard.points());
        Ok(())
    }
}

fn format_count(points: u32) -> String {
    format!("Count: {}", points)
}

//=========================================================================
// Tests
//=========================================================================
