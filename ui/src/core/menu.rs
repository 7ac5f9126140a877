//! Open/closed state of the narrow-viewport menu.

/// Two-valued toggle owned by the shell. Starts closed; only the hamburger flips it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenuState {
    is_open: bool,
}

impl MobileMenuState {
    pub fn closed() -> Self {
        Self { is_open: false }
    }

    pub fn open() -> Self {
        Self { is_open: true }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// `aria-expanded` value for the toggle button.
    pub fn aria_expanded(&self) -> &'static str {
        if self.is_open {
            "true"
        } else {
            "false"
        }
    }
}
