//! Pause and help menu visibility

/// Result of pressing the menu key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChange {
    Pause(bool),
    Help(bool),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pause_open: bool,
    help_open: bool,
}

impl MenuState {
    /// Scene input is blocked while the pause menu is open
    pub fn is_paused(&self) -> bool {
        self.pause_open
    }

    pub fn is_help_open(&self) -> bool {
        self.help_open
    }

    /// Escape closes help if it is open on top of the pause menu,
    /// otherwise it toggles the pause menu.
    pub fn handle_escape(&mut self) -> MenuChange {
        if self.pause_open && self.help_open {
            self.help_open = false;
            MenuChange::Help(false)
        } else {
            self.toggle_pause()
        }
    }

    pub fn toggle_pause(&mut self) -> MenuChange {
        self.pause_open = !self.pause_open;
        if !self.pause_open {
            self.help_open = false;
        }
        MenuChange::Pause(self.pause_open)
    }

    /// Help is only reachable from the pause menu; returns None otherwise
    pub fn toggle_help(&mut self) -> Option<MenuChange> {
        if !self.pause_open {
            return None;
        }
        self.help_open = !self.help_open;
        Some(MenuChange::Help(self.help_open))
    }
}
