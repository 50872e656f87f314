//! Editor state

mod gesture;
mod menu;
mod session;

pub use gesture::{Gesture, GestureMode};
pub use menu::{MenuChange, MenuState};
pub use session::EditorSession;
