//! Open/closed state of the header's mobile menu.

/// Menu visibility. Starts closed; `toggle` is the only transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Value for the toggle button's `aria-expanded`
    pub fn aria_expanded(&self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }
}
