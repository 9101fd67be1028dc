//! Handle events of a user interface.
use smol_str::SmolStr;

use crate::keyboard;
use crate::mouse;

/// A user interface event.
///
/// Components only react to events while they are open; a closed
/// component leaves every event [`Status::Ignored`] so that input
/// meant for unrelated UI passes through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event
    Keyboard(keyboard::Event),

    /// A mouse event
    Mouse(mouse::Event),

    /// The text of a search box changed.
    ///
    /// The payload is the full query, not a delta.
    InputChanged(SmolStr),
}

impl Event {
    /// Creates an [`Event::InputChanged`] from anything string-like.
    pub fn input(query: impl Into<SmolStr>) -> Self {
        Self::InputChanged(query.into())
    }
}

/// The status of an [`Event`] after being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The [`Event`] was **NOT** handled by any component.
    Ignored,

    /// The [`Event`] was handled and processed by a component.
    Captured,
}

impl Status {
    /// Merges two [`Status`] into one.
    ///
    /// `Captured` takes precedence over `Ignored`:
    ///
    /// ```
    /// use menuflow_core::event::Status;
    ///
    /// assert_eq!(Status::Ignored.merge(Status::Ignored), Status::Ignored);
    /// assert_eq!(Status::Ignored.merge(Status::Captured), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Ignored), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Captured), Status::Captured);
    /// ```
    pub fn merge(self, b: Self) -> Self {
        match self {
            Status::Ignored => b,
            Status::Captured => Status::Captured,
        }
    }
}
