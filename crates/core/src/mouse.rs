//! Listen to mouse events.
use crate::menu::MenuId;

/// A mouse event, already routed to the element it concerns.
///
/// The host environment owns hit testing; by the time an event reaches
/// the engine it names its [`Target`] directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The pointer entered the target.
    Entered(Target),

    /// The pointer left the target.
    Exited(Target),

    /// The target was clicked.
    Clicked(Target),
}

/// An interactive element a pointer event can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A menu item row.
    Item(MenuId),

    /// A top-level trigger of a menu bar, by index.
    Root(usize),

    /// The "scroll up" affordance of a scrollable menu.
    ScrollUp,

    /// The "scroll down" affordance of a scrollable menu.
    ScrollDown,
}

impl Event {
    /// Creates a click on the item with the given id.
    pub fn click_item(id: MenuId) -> Self {
        Self::Clicked(Target::Item(id))
    }

    /// Creates a hover entry on the item with the given id.
    pub fn enter_item(id: MenuId) -> Self {
        Self::Entered(Target::Item(id))
    }
}
