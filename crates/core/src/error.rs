use crate::menu::MenuId;

/// A usage error of the engine.
///
/// These indicate a structural wiring bug by the integrating
/// developer and surface immediately at call time. Missing or empty
/// data (an empty level, a query with no matches, a stale committed
/// value) is never an error; components degrade to placeholder and
/// empty states instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The referenced item does not exist in the addressed level.
    #[error("no menu item with id {0:?} exists in this level")]
    UnknownItem(MenuId),

    /// The referenced item exists but is not a submenu trigger.
    #[error("menu item {0:?} is not a submenu trigger")]
    NotASubmenu(MenuId),

    /// A menu bar root index was out of bounds.
    #[error("menu root index {index} is out of bounds for {count} roots")]
    UnknownRoot {
        /// The requested index.
        index: usize,
        /// The number of available roots.
        count: usize,
    },

    /// The referenced item is disabled and cannot be acted on
    /// programmatically.
    #[error("menu item {0:?} is disabled")]
    DisabledItem(MenuId),
}
