#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Default)]
pub struct NavigationMenu {
    state: MenuState,
}

impl NavigationMenu {
    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    pub fn toggle(&mut self) -> MenuState {
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        self.state
    }

    pub fn on_link_click(&mut self) -> MenuState {
        self.state = MenuState::Closed;
        self.state
    }

    /// Closes an open menu when the click landed outside the navbar.
    /// Returns whether the state changed.
    pub fn on_document_click(&mut self, inside_navbar: bool) -> bool {
        if inside_navbar || !self.is_open() {
            return false;
        }

        self.state = MenuState::Closed;
        true
    }
}
