//=========================================================================
// Message Handlers
//=========================================================================
//
// Bus consumers that turn messages into displayed state.
//
//   PlayerPosition ──> CameraFollow   (position = player + offset)
//   PointAdded     ──> CountText      ("Count: N")
//   PointAdded     ──> WinText        ("YOU WIN!" once won)
//
// The host reads the resulting state each frame and renders it.
//
//=========================================================================

//=== Module Declarations =================================================

mod camera;
mod count_text;
mod win_text;

//=== Public API ==========================================================

pub use camera::CameraFollow;
pub use count_text::CountText;
pub use win_text::{WinText, WIN_MESSAGE};
