//! Site-wide page chrome shared by every page.

pub mod accordion;
pub mod menu;
pub mod modal;
pub mod scroll;
pub mod theme;

pub use accordion::Accordion;
pub use menu::{MenuEvent, MobileMenu};
pub use modal::{Modal, ModalEvent};
pub use scroll::{anchor_target, CounterAnimation, HeaderScroll, RevealTracker, StatsCounter};
pub use theme::ThemeManager;
