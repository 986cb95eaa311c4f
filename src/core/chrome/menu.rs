use crate::domain::ports::MenuView;

pub const MENU_BREAKPOINT_PX: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    TriggerClick,
    /// Click anywhere outside both the menu and its trigger.
    OutsideClick,
    LinkClick,
    Resize { width: u32 },
}

pub struct MobileMenu<V: MenuView> {
    open: bool,
    breakpoint: u32,
    view: V,
}

impl<V: MenuView> MobileMenu<V> {
    pub fn new(view: V, breakpoint: u32) -> Self {
        Self {
            open: false,
            breakpoint,
            view,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn handle(&mut self, event: MenuEvent) {
        match event {
            MenuEvent::TriggerClick => self.set_open(!self.open),
            MenuEvent::OutsideClick | MenuEvent::LinkClick if self.open => self.set_open(false),
            MenuEvent::Resize { width } if self.open && width > self.breakpoint => {
                self.set_open(false)
            }
            _ => {}
        }
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
        self.view.set_menu_open(open);
        self.view
            .set_trigger_icon(if open { "fas fa-times" } else { "fas fa-bars" });
    }
}
