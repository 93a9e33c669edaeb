//=========================================================================
// Win Text
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

//=== Internal Dependencies ===============================================

use crate::core::message_bus::{HandlerResult, Message, MessageHandler};
use crate::core::scoreboard::Scoreboard;

//=== WinText =============================================================

/// Text shown once the player has won.
pub const WIN_MESSAGE: &str = "YOU WIN!";

/// Win label: empty until a notification arrives while the scoreboard
/// reports a win, then stays set.
#[derive(Debug)]
pub struct WinText {
    scoreboard: Arc<Scoreboard>,
    text: String,
}

impl WinText {
    pub fn new(scoreboard: Arc<Scoreboard>) -> Self {
        Self {
            scoreboard,
            text: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl MessageHandler for WinText {
    fn handle_message(&mut self, _message: Message) -> HandlerResult {
        if self.scoreboard.has_won() {
            self.text = WIN_MESSAGE.to_string();
        }
        Ok(())
    }
}

//=========================================================================
// Tests
//=========================================================================
