//! Listen to keyboard events.
use smol_str::SmolStr;

/// A keyboard event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    KeyPressed {
        /// The key pressed.
        key: Key,
    },
}

/// A key on the keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A key with an established name.
    Named(key::Named),

    /// A key string that corresponds to the character typed by the
    /// user, taking into account the user's current locale.
    Character(SmolStr),
}

impl Key {
    /// Creates a [`Key::Character`] from anything string-like.
    pub fn character(c: impl Into<SmolStr>) -> Self {
        Self::Character(c.into())
    }
}

impl From<key::Named> for Key {
    fn from(named: key::Named) -> Self {
        Self::Named(named)
    }
}

pub mod key {
    //! The names of keys relevant to menu navigation.

    /// A key with an established name.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Named {
        /// The down arrow key.
        ArrowDown,
        /// The left arrow key.
        ArrowLeft,
        /// The right arrow key.
        ArrowRight,
        /// The up arrow key.
        ArrowUp,
        /// The enter/return key.
        Enter,
        /// The escape key.
        Escape,
        /// The home key.
        Home,
        /// The end key.
        End,
    }
}

/// Creates a [`Event::KeyPressed`] for the given key.
pub fn key_pressed(key: impl Into<Key>) -> Event {
    Event::KeyPressed { key: key.into() }
}
