//! The menu content schema.
//!
//! This module defines the declarative description of a menu level:
//! plain items, submenu triggers, groups with an optional trailing
//! separator, and standalone separators. Components scan this schema
//! into their own collections; the schema itself never changes behind
//! their back.
//!
//! ```
//! use menuflow_core::menu;
//!
//! let content = vec![
//!     menu::item("Cut", "cut"),
//!     menu::item("Copy", "copy"),
//!     menu::item("Paste", "paste").enabled(false),
//!     menu::separator(),
//!     menu::submenu("Share", vec![
//!         menu::item("Email", "share-email"),
//!         menu::item("Messages", "share-messages"),
//!     ]),
//! ];
//!
//! assert_eq!(content.len(), 5);
//! ```
use smol_str::SmolStr;

/// Stable identifier for a menu item.
///
/// This is a 64-bit FNV-1a hash, usually derived from the item's
/// value string. Callers are responsible for keeping ids stable
/// across re-renders so hover and selection state survive a re-scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MenuId(pub u64);

impl MenuId {
    /// Creates a new [`MenuId`] from a raw u64 value.
    #[must_use]
    pub const fn from_u64(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Creates a [`MenuId`] by hashing a string at compile time.
    #[must_use]
    pub const fn from_str(s: &str) -> Self {
        Self(fnv1a_hash_str(s))
    }

    /// Derives a deterministic child [`MenuId`] from this ID and a
    /// numeric value.
    ///
    /// Useful for dynamic menus (e.g. recent-file lists) where stable
    /// ids are wanted without a stable value string per entry.
    #[must_use]
    pub const fn child(self, value: u64) -> Self {
        Self(fnv1a_hash_u64_pair(self.0, value))
    }

    /// Derives a deterministic child [`MenuId`] from this ID and a
    /// string.
    #[must_use]
    pub const fn child_str(self, value: &str) -> Self {
        Self(fnv1a_hash_u64_pair(self.0, fnv1a_hash_str(value)))
    }
}

/// FNV-1a 64-bit offset basis.
const FNV1A_OFFSET: u64 = 0xcbf29ce484222325;

/// FNV-1a 64-bit prime.
const FNV1A_PRIME: u64 = 0x0000_0100_0000_01B3;

/// Computes the FNV-1a hash of a string at compile time.
#[must_use]
pub const fn fnv1a_hash_str(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut hash = FNV1A_OFFSET;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV1A_PRIME);
        i += 1;
    }
    hash
}

/// Computes the FNV-1a hash of two u64 values (big-endian byte order)
/// at compile time.
const fn fnv1a_hash_u64_pair(a: u64, b: u64) -> u64 {
    let mut hash = FNV1A_OFFSET;

    let a_bytes = a.to_be_bytes();
    let mut i = 0;
    while i < 8 {
        hash ^= a_bytes[i] as u64;
        hash = hash.wrapping_mul(FNV1A_PRIME);
        i += 1;
    }

    let b_bytes = b.to_be_bytes();
    let mut j = 0;
    while j < 8 {
        hash ^= b_bytes[j] as u64;
        hash = hash.wrapping_mul(FNV1A_PRIME);
        j += 1;
    }

    hash
}

/// A menu node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    /// Stable identifier of this node.
    pub id: MenuId,
    /// Node contents.
    pub kind: MenuKind,
}

impl MenuNode {
    /// Creates a new [`MenuNode`] with the given ID.
    #[must_use]
    pub fn new_with_id(id: MenuId, kind: MenuKind) -> Self {
        Self { id, kind }
    }

    /// Replaces the id of this node.
    #[must_use]
    pub fn with_id(mut self, id: MenuId) -> Self {
        self.id = id;
        self
    }

    /// Sets whether this node is enabled.
    ///
    /// This only has an effect on `Item` and `Submenu` nodes.
    #[must_use]
    pub fn enabled(mut self, is_enabled: bool) -> Self {
        match &mut self.kind {
            MenuKind::Item { enabled, .. } => *enabled = is_enabled,
            MenuKind::Submenu { enabled, .. } => *enabled = is_enabled,
            MenuKind::Group { .. } | MenuKind::Separator => {}
        }
        self
    }

    /// Returns the label of this node, if it has one.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match &self.kind {
            MenuKind::Item { label, .. } | MenuKind::Submenu { label, .. } => Some(label),
            MenuKind::Group { label, .. } => label.as_deref(),
            MenuKind::Separator => None,
        }
    }
}

/// The concrete type of a menu node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuKind {
    /// One selectable row.
    Item {
        /// Text label, matched by the search filter.
        label: SmolStr,
        /// The string committed when the item is selected.
        value: SmolStr,
        /// Whether the item can be navigated to and activated.
        enabled: bool,
    },

    /// A trigger that opens a nested menu level.
    ///
    /// The children are the *child level's* content; the parent level
    /// only collects the trigger row itself.
    Submenu {
        /// Text label of the trigger row.
        label: SmolStr,
        /// Whether the submenu can be opened.
        enabled: bool,
        /// Content of the child level.
        children: Vec<MenuNode>,
    },

    /// A cluster of items with a derived visibility.
    ///
    /// A group is visible while at least one of its children is; its
    /// trailing separator (if any) mirrors that visibility.
    Group {
        /// Optional group heading.
        label: Option<SmolStr>,
        /// The member nodes. Only `Item` children are collected.
        children: Vec<MenuNode>,
        /// Whether a separator trails the group.
        separator: bool,
    },

    /// A separator/divider.
    Separator,
}

/// Creates a selectable item node.
///
/// The id is derived from the value string, which therefore must be
/// unique within one menu level.
pub fn item(label: impl Into<SmolStr>, value: impl Into<SmolStr>) -> MenuNode {
    let value = value.into();

    MenuNode {
        id: MenuId::from_str(&value),
        kind: MenuKind::Item {
            label: label.into(),
            value,
            enabled: true,
        },
    }
}

/// Creates a submenu trigger node with the given child content.
pub fn submenu(label: impl Into<SmolStr>, children: Vec<MenuNode>) -> MenuNode {
    let label = label.into();

    MenuNode {
        id: MenuId::from_str(&label).child(children.len() as u64),
        kind: MenuKind::Submenu {
            label,
            enabled: true,
            children,
        },
    }
}

/// Creates an unnamed group with a trailing separator.
pub fn group(children: Vec<MenuNode>) -> MenuNode {
    MenuNode {
        id: MenuId::from_str("group").child(children.len() as u64),
        kind: MenuKind::Group {
            label: None,
            children,
            separator: true,
        },
    }
}

/// Creates a named group with a trailing separator.
pub fn named_group(label: impl Into<SmolStr>, children: Vec<MenuNode>) -> MenuNode {
    let label = label.into();

    MenuNode {
        id: MenuId::from_str(&label),
        kind: MenuKind::Group {
            label: Some(label),
            children,
            separator: true,
        },
    }
}

/// Creates a standalone separator node.
pub fn separator() -> MenuNode {
    MenuNode {
        id: MenuId::from_str("separator"),
        kind: MenuKind::Separator,
    }
}
