/// The two controls that act on the side menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuControl {
    Bars,
    Close,
}

/// Open/closed flag for the narrow-viewport navigation panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SideMenu {
    open: bool,
}

impl SideMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Both controls flip the flag. Pressing close on a closed menu opens it.
    pub fn press(&mut self, control: MenuControl) {
        log::trace!("Side menu control pressed: {:?}", control);
        match control {
            MenuControl::Bars | MenuControl::Close => self.toggle(),
        }
    }
}
