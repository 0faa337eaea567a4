//! Open/closed state of a profile menu.

/// User interactions the profile menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// The avatar was clicked.
    AvatarClicked,
    /// The logout button was clicked.
    LogoutClicked,
}

/// Work the host component must carry out after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEffect {
    /// Invoke the caller's logout callback.
    Logout,
}

/// Dropdown visibility for a single menu instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileMenuState {
    open: bool,
}

impl ProfileMenuState {
    /// Creates a state with the given initial visibility.
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    /// Whether the dropdown is shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips dropdown visibility.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        tracing::debug!(open = self.open, "Profile menu toggled");
    }

    /// Applies an action and returns the effect the host must perform, if any.
    ///
    /// Logout leaves visibility untouched; the caller decides what happens
    /// to the menu afterwards.
    pub fn dispatch(&mut self, action: MenuAction) -> Option<MenuEffect> {
        match action {
            MenuAction::AvatarClicked => {
                self.toggle();
                None
            }
            MenuAction::LogoutClicked => {
                tracing::debug!("Logout requested from profile menu");
                Some(MenuEffect::Logout)
            }
        }
    }
}
