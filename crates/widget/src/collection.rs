//! Scan menu content into navigable collections.
//!
//! A [`Collection`] is the flattened, owned model of one menu level:
//! an arena of row records with stable keys, the ordered list of
//! navigable rows, and the group records whose visibility is derived
//! from their members. It is rebuilt from scratch on every scan;
//! structural changes re-scan, they never patch.
use bitflags::bitflags;
use rustc_hash::FxHashMap;
use slotmap::{SlotMap, new_key_type};
use smol_str::SmolStr;

use crate::core::menu::{MenuId, MenuKind, MenuNode};

new_key_type! {
    /// A stable key into the row arena of a [`Collection`].
    pub struct RowKey;
}

bitflags! {
    /// The flag set of a collected row.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RowFlags: u8 {
        /// The row cannot be navigated to or activated.
        const DISABLED = 1;
        /// The row is a submenu trigger.
        const SUBMENU = 1 << 1;
        /// The row is hidden by the active search filter.
        const HIDDEN = 1 << 2;
    }
}

/// One collected row of a menu level.
#[derive(Debug, Clone)]
pub struct Row {
    /// Stable identifier of the row.
    pub id: MenuId,
    /// Text label, matched by the search filter.
    pub label: SmolStr,
    /// The string committed when the row is activated.
    pub value: SmolStr,
    /// The row's flag set.
    pub flags: RowFlags,
    /// Index of the owning group, if the row belongs to one.
    pub group: Option<usize>,
}

impl Row {
    /// Returns whether the row can be navigated to and activated.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.flags.contains(RowFlags::DISABLED)
    }

    /// Returns whether the row is currently visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.flags.contains(RowFlags::HIDDEN)
    }

    /// Returns whether the row triggers a submenu.
    #[must_use]
    pub fn is_submenu(&self) -> bool {
        self.flags.contains(RowFlags::SUBMENU)
    }
}

/// A cluster of rows with a derived visibility.
#[derive(Debug, Clone)]
pub struct Group {
    /// Optional group heading.
    pub label: Option<SmolStr>,
    /// The member rows, in display order.
    pub rows: Vec<RowKey>,
    /// Whether a separator trails the group.
    pub separator: bool,
    visible: bool,
}

impl Group {
    /// Returns whether the group is visible, i.e. whether at least one
    /// member row is.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns whether the trailing separator is visible.
    ///
    /// The separator mirrors the group: hidden group, hidden
    /// separator.
    #[must_use]
    pub fn separator_visible(&self) -> bool {
        self.separator && self.visible
    }
}

/// The scanned model of one menu level.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    rows: SlotMap<RowKey, Row>,
    order: Vec<RowKey>,
    groups: Vec<Group>,
    by_id: FxHashMap<MenuId, RowKey>,
    highlighted: Option<RowKey>,
}

impl Collection {
    /// Scans the given content into a fresh [`Collection`].
    ///
    /// Disabled rows are kept in the arena (they are still displayed)
    /// but excluded from the navigable order. Children of a `Submenu`
    /// node belong to the child level and are *not* collected here;
    /// only the trigger row itself is. Standalone separators carry no
    /// behavior and are skipped entirely.
    #[must_use]
    pub fn scan(content: &[MenuNode]) -> Self {
        let mut collection = Self::default();

        for node in content {
            match &node.kind {
                MenuKind::Item {
                    label,
                    value,
                    enabled,
                } => {
                    let _ = collection.push_row(
                        node.id,
                        label.clone(),
                        value.clone(),
                        *enabled,
                        false,
                        None,
                    );
                }
                MenuKind::Submenu { label, enabled, .. } => {
                    let _ = collection.push_row(
                        node.id,
                        label.clone(),
                        label.clone(),
                        *enabled,
                        true,
                        None,
                    );
                }
                MenuKind::Group {
                    label,
                    children,
                    separator,
                } => {
                    let index = collection.groups.len();
                    collection.groups.push(Group {
                        label: label.clone(),
                        rows: Vec::new(),
                        separator: *separator,
                        visible: false,
                    });

                    for child in children {
                        if let MenuKind::Item {
                            label,
                            value,
                            enabled,
                        } = &child.kind
                        {
                            let key = collection.push_row(
                                child.id,
                                label.clone(),
                                value.clone(),
                                *enabled,
                                false,
                                Some(index),
                            );
                            collection.groups[index].rows.push(key);
                        }
                    }

                    collection.groups[index].visible = !collection.groups[index].rows.is_empty();
                }
                MenuKind::Separator => {}
            }
        }

        collection
    }

    fn push_row(
        &mut self,
        id: MenuId,
        label: SmolStr,
        value: SmolStr,
        enabled: bool,
        is_submenu: bool,
        group: Option<usize>,
    ) -> RowKey {
        let mut flags = RowFlags::empty();
        flags.set(RowFlags::DISABLED, !enabled);
        flags.set(RowFlags::SUBMENU, is_submenu);

        let key = self.rows.insert(Row {
            id,
            label,
            value,
            flags,
            group,
        });

        let _ = self.by_id.insert(id, key);

        if enabled {
            self.order.push(key);
        }

        key
    }

    /// The number of navigable rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether the collection has no navigable rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the row behind the given key, if it still exists.
    #[must_use]
    pub fn get(&self, key: RowKey) -> Option<&Row> {
        self.rows.get(key)
    }

    /// Returns the key of the navigable row at the given index.
    #[must_use]
    pub fn key_at(&self, index: usize) -> Option<RowKey> {
        self.order.get(index).copied()
    }

    /// Returns the navigable index of the given key.
    #[must_use]
    pub fn index_of(&self, key: RowKey) -> Option<usize> {
        self.order.iter().position(|candidate| *candidate == key)
    }

    /// Looks up a row key by stable id.
    #[must_use]
    pub fn key_of(&self, id: MenuId) -> Option<RowKey> {
        self.by_id.get(&id).copied()
    }

    /// The scanned groups, in display order.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// An iterator over every row in the arena, in no particular
    /// order.
    pub fn rows(&self) -> impl Iterator<Item = (RowKey, &Row)> {
        self.rows.iter()
    }

    /// The currently highlighted row, if any.
    #[must_use]
    pub fn highlighted(&self) -> Option<RowKey> {
        self.highlighted
    }

    /// Highlights the given row, clearing any previous highlight
    /// first.
    ///
    /// At most one row is highlighted at any time; this is the only
    /// place the highlight is written.
    pub fn highlight(&mut self, key: Option<RowKey>) {
        self.highlighted = None;

        if let Some(key) = key {
            let is_eligible = self
                .rows
                .get(key)
                .is_some_and(|row| row.is_enabled() && row.is_visible());

            if is_eligible {
                self.highlighted = Some(key);
            }
        }
    }

    /// Reacts to the pointer entering the row with the given id.
    ///
    /// Last interaction wins: the hovered row takes the highlight from
    /// whichever row held it. Returns the navigable index so the
    /// keyboard cursor can follow. Disabled and hidden rows ignore
    /// hover.
    pub fn hover(&mut self, id: MenuId) -> Option<usize> {
        let key = self.key_of(id)?;
        let row = self.rows.get(key)?;

        if !row.is_enabled() || !row.is_visible() {
            return None;
        }

        let index = self.index_of(key)?;
        self.highlight(Some(key));

        Some(index)
    }

    /// Returns whether the navigable row at the given index is
    /// visible.
    #[must_use]
    pub fn is_visible_at(&self, index: usize) -> bool {
        self.order
            .get(index)
            .and_then(|key| self.rows.get(*key))
            .is_some_and(Row::is_visible)
    }

    /// The first visible navigable index.
    #[must_use]
    pub fn first_visible(&self) -> Option<usize> {
        (0..self.order.len()).find(|index| self.is_visible_at(*index))
    }

    /// The last visible navigable index.
    #[must_use]
    pub fn last_visible(&self) -> Option<usize> {
        (0..self.order.len()).rev().find(|index| self.is_visible_at(*index))
    }

    /// The number of visible navigable rows.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        (0..self.order.len())
            .filter(|index| self.is_visible_at(*index))
            .count()
    }

    /// Steps the cursor to the next visible index, wrapping around.
    ///
    /// From `None`, stepping forward lands on the first visible row
    /// and stepping backward on the last. Returns `None` when nothing
    /// is visible.
    #[must_use]
    pub fn step_visible(&self, from: Option<usize>, forward: bool) -> Option<usize> {
        let count = self.order.len();
        if count == 0 {
            return None;
        }

        let start = match (from, forward) {
            (Some(index), true) => (index + 1) % count,
            (Some(index), false) => (index + count - 1) % count,
            (None, true) => 0,
            (None, false) => count - 1,
        };

        // Bounded walk so a fully hidden list terminates.
        let mut index = start;
        for _ in 0..count {
            if self.is_visible_at(index) {
                return Some(index);
            }

            index = if forward {
                (index + 1) % count
            } else {
                (index + count - 1) % count
            };
        }

        None
    }

    pub(crate) fn row_mut(&mut self, key: RowKey) -> Option<&mut Row> {
        self.rows.get_mut(key)
    }

    pub(crate) fn keys(&self) -> Vec<RowKey> {
        self.rows.keys().collect()
    }

    pub(crate) fn clear_highlight_if(&mut self, key: RowKey) {
        if self.highlighted == Some(key) {
            self.highlighted = None;
        }
    }

    pub(crate) fn recompute_group_visibility(&mut self) {
        for index in 0..self.groups.len() {
            let visible = self.groups[index]
                .rows
                .iter()
                .any(|key| self.rows.get(*key).is_some_and(Row::is_visible));

            self.groups[index].visible = visible;
        }
    }
}
