//! The keyboard navigation state machine of one menu level.
use crate::collection::{Collection, RowKey};
use crate::core::keyboard::key::Named;
use crate::core::keyboard::Key;

/// A sibling direction for top-level root switching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The previous sibling root.
    Previous,
    /// The next sibling root.
    Next,
}

/// What a handled key asks the owning level to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The cursor moved to the given navigable index.
    Moved(usize),
    /// The row should be activated (committed).
    Activated(RowKey),
    /// The row is a submenu trigger that should open.
    EnteredSubmenu(RowKey),
    /// The currently open submenu should close.
    LeftSubmenu,
    /// This whole level should close (back out to the parent).
    ExitLevel,
    /// The sibling top-level root should be selected and activated.
    SwitchRoot(Side),
}

/// Tracks the highlighted index of one menu level and turns key
/// presses into [`Step`]s.
///
/// The cursor is an index into the level's *navigable* order; hidden
/// rows are skipped, arrows wrap around, and every movement re-applies
/// the highlight so exactly one row carries it per level.
#[derive(Debug, Clone)]
pub struct Navigation {
    cursor: Option<usize>,
    in_submenu: bool,
    axis_arrows: bool,
    root_switching: bool,
}

impl Navigation {
    /// Creates a controller with vertical navigation only.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cursor: None,
            in_submenu: false,
            axis_arrows: false,
            root_switching: false,
        }
    }

    /// Enables ArrowRight/ArrowLeft to enter and exit submenus.
    #[must_use]
    pub fn with_axis_arrows(mut self, axis_arrows: bool) -> Self {
        self.axis_arrows = axis_arrows;
        self
    }

    /// Enables horizontal root switching (menu bar context): Left and
    /// Right on a plain row move the sibling top-level selection.
    #[must_use]
    pub fn with_root_switching(mut self, root_switching: bool) -> Self {
        self.root_switching = root_switching;
        self
    }

    /// The current navigable cursor index, if any.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Whether a child submenu currently owns keyboard navigation.
    #[must_use]
    pub fn in_submenu(&self) -> bool {
        self.in_submenu
    }

    /// Latches navigation over to an open child submenu.
    pub fn enter_submenu(&mut self) {
        self.in_submenu = true;
    }

    /// Returns keyboard navigation to this level.
    pub fn leave_submenu(&mut self) {
        self.in_submenu = false;
    }

    /// Clears the cursor and the submenu latch.
    pub fn reset(&mut self) {
        self.cursor = None;
        self.in_submenu = false;
    }

    /// Moves the cursor to the given index and re-applies the
    /// highlight. Used to keep keyboard and pointer state consistent.
    pub fn sync(&mut self, index: Option<usize>, collection: &mut Collection) {
        self.cursor = index;
        collection.highlight(index.and_then(|index| collection.key_at(index)));
    }

    /// Handles one key press against the given collection.
    ///
    /// Returns `None` for keys this level does not handle, including
    /// every vertical movement while a child submenu is open, which is
    /// how delegation works: the child processed the event first, and
    /// anything it left uncaptured is either a back-out key or noise.
    pub fn on_key(&mut self, key: &Key, collection: &mut Collection) -> Option<Step> {
        let named = match key {
            Key::Named(named) => *named,
            Key::Character(_) => return None,
        };

        match named {
            Named::ArrowDown => self.move_cursor(collection, true),
            Named::ArrowUp => self.move_cursor(collection, false),
            Named::Home => self.jump_cursor(collection, collection.first_visible()),
            Named::End => self.jump_cursor(collection, collection.last_visible()),

            Named::Enter => {
                if self.in_submenu {
                    return None;
                }

                let row_key = self.cursor.and_then(|index| collection.key_at(index))?;
                let row = collection.get(row_key)?;

                if row.is_submenu() {
                    Some(Step::EnteredSubmenu(row_key))
                } else {
                    Some(Step::Activated(row_key))
                }
            }

            Named::Escape => {
                if self.in_submenu {
                    Some(Step::LeftSubmenu)
                } else {
                    None
                }
            }

            Named::ArrowRight => {
                if !self.axis_arrows || self.in_submenu {
                    return None;
                }

                let row_key = self.cursor.and_then(|index| collection.key_at(index));
                let is_submenu = row_key
                    .and_then(|row_key| collection.get(row_key))
                    .is_some_and(crate::collection::Row::is_submenu);

                match row_key {
                    Some(row_key) if is_submenu => Some(Step::EnteredSubmenu(row_key)),
                    _ if self.root_switching => Some(Step::SwitchRoot(Side::Next)),
                    _ => None,
                }
            }

            Named::ArrowLeft => {
                if !self.axis_arrows {
                    return None;
                }

                if self.in_submenu {
                    Some(Step::LeftSubmenu)
                } else if self.root_switching {
                    Some(Step::SwitchRoot(Side::Previous))
                } else {
                    // A nested level backs out to its parent.
                    Some(Step::ExitLevel)
                }
            }
        }
    }

    fn move_cursor(&mut self, collection: &mut Collection, forward: bool) -> Option<Step> {
        if self.in_submenu {
            return None;
        }

        let next = collection.step_visible(self.cursor, forward)?;
        self.sync(Some(next), collection);

        Some(Step::Moved(next))
    }

    fn jump_cursor(&mut self, collection: &mut Collection, target: Option<usize>) -> Option<Step> {
        if self.in_submenu {
            return None;
        }

        let target = target?;
        self.sync(Some(target), collection);

        Some(Step::Moved(target))
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::menu;

    fn collection() -> Collection {
        Collection::scan(&[
            menu::item("A", "a"),
            menu::item("B", "b"),
            menu::item("C", "c"),
        ])
    }

    fn down() -> Key {
        Key::Named(Named::ArrowDown)
    }

    fn up() -> Key {
        Key::Named(Named::ArrowUp)
    }

    #[test]
    fn test_arrow_down_wraps_around() {
        let mut collection = collection();
        let mut navigation = Navigation::new();

        assert_eq!(
            navigation.on_key(&down(), &mut collection),
            Some(Step::Moved(0))
        );
        assert_eq!(
            navigation.on_key(&down(), &mut collection),
            Some(Step::Moved(1))
        );
        assert_eq!(
            navigation.on_key(&down(), &mut collection),
            Some(Step::Moved(2))
        );
        assert_eq!(
            navigation.on_key(&down(), &mut collection),
            Some(Step::Moved(0))
        );
    }

    #[test]
    fn test_arrow_up_wraps_around() {
        let mut collection = collection();
        let mut navigation = Navigation::new();

        assert_eq!(
            navigation.on_key(&up(), &mut collection),
            Some(Step::Moved(2))
        );
        assert_eq!(
            navigation.on_key(&up(), &mut collection),
            Some(Step::Moved(1))
        );
    }

    #[test]
    fn test_navigation_is_a_noop_on_empty_collection() {
        let mut collection = Collection::scan(&[]);
        let mut navigation = Navigation::new();

        assert_eq!(navigation.on_key(&down(), &mut collection), None);
        assert_eq!(navigation.on_key(&up(), &mut collection), None);
        assert_eq!(
            navigation.on_key(&Key::Named(Named::Enter), &mut collection),
            None
        );
    }

    #[test]
    fn test_exactly_one_row_highlighted_after_movement() {
        let mut collection = collection();
        let mut navigation = Navigation::new();

        let _ = navigation.on_key(&down(), &mut collection);
        let _ = navigation.on_key(&down(), &mut collection);

        assert_eq!(collection.highlighted(), collection.key_at(1));
    }

    #[test]
    fn test_home_and_end_jump() {
        let mut collection = collection();
        let mut navigation = Navigation::new();

        assert_eq!(
            navigation.on_key(&Key::Named(Named::End), &mut collection),
            Some(Step::Moved(2))
        );
        assert_eq!(
            navigation.on_key(&Key::Named(Named::Home), &mut collection),
            Some(Step::Moved(0))
        );
    }

    #[test]
    fn test_enter_activates_cursor_row() {
        let mut collection = collection();
        let mut navigation = Navigation::new();

        let _ = navigation.on_key(&down(), &mut collection);
        let step = navigation.on_key(&Key::Named(Named::Enter), &mut collection);

        assert_eq!(step, Some(Step::Activated(collection.key_at(0).unwrap())));
    }

    #[test]
    fn test_enter_on_submenu_trigger() {
        let mut collection = Collection::scan(&[menu::submenu(
            "Share",
            vec![menu::item("Email", "email")],
        )]);
        let mut navigation = Navigation::new();

        let _ = navigation.on_key(&down(), &mut collection);
        let step = navigation.on_key(&Key::Named(Named::Enter), &mut collection);

        assert_eq!(
            step,
            Some(Step::EnteredSubmenu(collection.key_at(0).unwrap()))
        );
    }

    #[test]
    fn test_vertical_keys_suppressed_while_in_submenu() {
        let mut collection = collection();
        let mut navigation = Navigation::new();

        let _ = navigation.on_key(&down(), &mut collection);
        navigation.enter_submenu();

        assert_eq!(navigation.on_key(&down(), &mut collection), None);
        assert_eq!(navigation.on_key(&up(), &mut collection), None);
        assert_eq!(navigation.cursor(), Some(0));
    }

    #[test]
    fn test_escape_backs_out_of_submenu_only() {
        let mut collection = collection();
        let mut navigation = Navigation::new();

        assert_eq!(
            navigation.on_key(&Key::Named(Named::Escape), &mut collection),
            None
        );

        navigation.enter_submenu();
        assert_eq!(
            navigation.on_key(&Key::Named(Named::Escape), &mut collection),
            Some(Step::LeftSubmenu)
        );
    }

    #[test]
    fn test_axis_arrows_switch_roots_on_plain_rows() {
        let mut collection = collection();
        let mut navigation = Navigation::new()
            .with_axis_arrows(true)
            .with_root_switching(true);

        let _ = navigation.on_key(&down(), &mut collection);

        assert_eq!(
            navigation.on_key(&Key::Named(Named::ArrowRight), &mut collection),
            Some(Step::SwitchRoot(Side::Next))
        );
        assert_eq!(
            navigation.on_key(&Key::Named(Named::ArrowLeft), &mut collection),
            Some(Step::SwitchRoot(Side::Previous))
        );
    }

    #[test]
    fn test_axis_arrows_disabled_by_default() {
        let mut collection = collection();
        let mut navigation = Navigation::new();

        assert_eq!(
            navigation.on_key(&Key::Named(Named::ArrowRight), &mut collection),
            None
        );
        assert_eq!(
            navigation.on_key(&Key::Named(Named::ArrowLeft), &mut collection),
            None
        );
    }

    #[test]
    fn test_nested_level_arrow_left_exits() {
        let mut collection = collection();
        let mut navigation = Navigation::new().with_axis_arrows(true);

        assert_eq!(
            navigation.on_key(&Key::Named(Named::ArrowLeft), &mut collection),
            Some(Step::ExitLevel)
        );
    }
}
