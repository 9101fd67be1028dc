//! One open menu level and its nesting.
use std::time::Duration;

use smol_str::SmolStr;

use crate::collection::{Collection, Row};
use crate::core::event::Event;
use crate::core::keyboard;
use crate::core::keyboard::key::Named;
use crate::core::menu::{MenuId, MenuKind, MenuNode};
use crate::core::mouse::{self, Target};
use crate::core::{Error, Shell};
use crate::filter;
use crate::navigation::{Navigation, Side, Step};
use crate::scroll::{AutoScroll, Direction};

/// What a processed event asks the owner of a level to do.
///
/// Levels know nothing about host messages; the owning component
/// (select, menu bar, command palette) maps outcomes to callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A row was activated; its value should be committed.
    Commit(SmolStr),

    /// The level wants to be closed (Escape, or backing out of a
    /// nested level).
    CloseRequested,

    /// A sibling top-level root should be selected and activated.
    SwitchRoot(Side),
}

/// One open menu or submenu instance.
///
/// A level exclusively owns its scanned [`Collection`], its
/// [`Navigation`] cursor, and, while a submenu is open, its child
/// level. The only state shared across the parent/child boundary is
/// the parent's `in_submenu` latch, kept in lockstep with the child's
/// existence.
#[derive(Debug)]
pub struct MenuLevel {
    content: Vec<MenuNode>,
    collection: Collection,
    navigation: Navigation,
    child: Option<Box<MenuLevel>>,
    child_trigger: Option<MenuId>,
    auto_scroll: Option<AutoScroll>,
    query: String,
    no_matches: bool,
    is_open: bool,
    pending_scan: bool,
    axis_arrows: bool,
    root_switching: bool,
}

impl MenuLevel {
    /// Creates a closed level over the given content.
    #[must_use]
    pub fn new(content: Vec<MenuNode>) -> Self {
        Self {
            content,
            collection: Collection::default(),
            navigation: Navigation::new(),
            child: None,
            child_trigger: None,
            auto_scroll: None,
            query: String::new(),
            no_matches: false,
            is_open: false,
            pending_scan: false,
            axis_arrows: false,
            root_switching: false,
        }
    }

    /// Enables ArrowRight/ArrowLeft submenu entry and exit for this
    /// level and every child it spawns.
    #[must_use]
    pub fn with_axis_arrows(mut self, axis_arrows: bool) -> Self {
        self.axis_arrows = axis_arrows;
        self.navigation = self.navigation.with_axis_arrows(axis_arrows);
        self
    }

    /// Enables horizontal root switching (menu bar root level only).
    #[must_use]
    pub fn with_root_switching(mut self, root_switching: bool) -> Self {
        self.root_switching = root_switching;
        self.navigation = self.navigation.with_root_switching(root_switching);
        self
    }

    /// Opens the level and arms the deferred content scan.
    ///
    /// The scan itself runs in [`settle`](Self::settle), once the host
    /// signals that freshly mounted content exists. Each open event
    /// schedules exactly one scan.
    pub fn open(&mut self) {
        if self.is_open {
            return;
        }

        self.is_open = true;
        self.pending_scan = true;
        log::debug!("menu level opened ({} nodes)", self.content.len());
    }

    /// Performs the deferred scan armed by [`open`](Self::open), and
    /// settles any open child level.
    pub fn settle(&mut self) {
        if self.is_open && self.pending_scan {
            self.pending_scan = false;
            self.collection = Collection::scan(&self.content);
            log::trace!("menu level scanned {} navigable rows", self.collection.len());
        }

        if let Some(child) = &mut self.child {
            child.settle();
        }
    }

    /// Closes the level, tearing down its child, its cursor, its
    /// repeat task, and its query.
    pub fn close(&mut self) {
        if !self.is_open {
            return;
        }

        self.child = None;
        self.child_trigger = None;
        self.auto_scroll = None;
        self.navigation.reset();
        self.collection = Collection::default();
        self.query.clear();
        self.no_matches = false;
        self.is_open = false;
        self.pending_scan = false;
        log::debug!("menu level closed");
    }

    /// Whether the level is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The scanned collection of this level.
    #[must_use]
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// The navigation state of this level.
    #[must_use]
    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    /// The open child level, if a submenu is showing.
    #[must_use]
    pub fn child(&self) -> Option<&MenuLevel> {
        self.child.as_deref()
    }

    /// The active search query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the active query matched nothing (the empty state).
    #[must_use]
    pub fn no_matches(&self) -> bool {
        self.no_matches
    }

    /// The currently highlighted row, if any.
    #[must_use]
    pub fn highlighted(&self) -> Option<&Row> {
        self.collection
            .highlighted()
            .and_then(|key| self.collection.get(key))
    }

    /// Moves the cursor (and highlight) to the given navigable index.
    pub fn sync_cursor(&mut self, index: Option<usize>) {
        self.navigation.sync(index, &mut self.collection);
    }

    /// Opens the submenu behind the item with the given id.
    ///
    /// Fails fast on wiring bugs: unknown ids, plain items, and
    /// disabled triggers are immediate errors, per the usage-error
    /// contract.
    pub fn open_submenu(&mut self, id: MenuId) -> Result<(), Error> {
        let key = self.collection.key_of(id).ok_or(Error::UnknownItem(id))?;
        let row = self.collection.get(key).ok_or(Error::UnknownItem(id))?;

        if !row.is_submenu() {
            return Err(Error::NotASubmenu(id));
        }

        if !row.is_enabled() {
            return Err(Error::DisabledItem(id));
        }

        let children = self
            .content
            .iter()
            .find_map(|node| match &node.kind {
                MenuKind::Submenu { children, .. } if node.id == id => Some(children.clone()),
                _ => None,
            })
            .ok_or(Error::UnknownItem(id))?;

        // Keep the trigger row highlighted underneath the child.
        let trigger_index = self.collection.index_of(key);
        self.navigation.sync(trigger_index, &mut self.collection);

        let mut child = MenuLevel::new(children).with_axis_arrows(self.axis_arrows);
        child.open();
        self.child = Some(Box::new(child));
        self.child_trigger = Some(id);
        self.navigation.enter_submenu();

        Ok(())
    }

    /// Closes the open submenu, if any, returning keyboard navigation
    /// to this level.
    pub fn close_submenu(&mut self) {
        if self.child.take().is_some() {
            log::debug!("submenu closed, navigation returns to parent level");
        }

        self.child_trigger = None;
        self.navigation.leave_submenu();
    }

    /// Processes one event.
    ///
    /// A closed level ignores everything. An open child level sees the
    /// event first; whatever it leaves uncaptured is handled here.
    pub fn update<Message>(
        &mut self,
        event: &Event,
        shell: &mut Shell<'_, Message>,
    ) -> Option<Outcome> {
        if !self.is_open {
            return None;
        }

        if self.child.is_some() {
            if let Some(outcome) = self.delegate(event, shell) {
                return Some(outcome);
            }

            if shell.is_event_captured() {
                return None;
            }
        }

        match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key }) => self.on_key(key, shell),
            Event::Mouse(mouse_event) => self.on_mouse(*mouse_event, shell),
            Event::InputChanged(query) => {
                self.on_query_changed(query.as_str(), shell);
                None
            }
        }
    }

    /// Drives the auto-scroll repeat task, if one is running.
    ///
    /// The host calls this with elapsed wall time while the pointer
    /// hovers a scroll affordance. Cursor steps clamp at the ends;
    /// scroll affordances never wrap.
    pub fn advance<Message>(&mut self, elapsed: Duration, shell: &mut Shell<'_, Message>) {
        if let Some(child) = &mut self.child {
            child.advance(elapsed, shell);
        }

        let (steps, forward) = match &mut self.auto_scroll {
            Some(auto) => (
                auto.advance(elapsed),
                matches!(auto.direction(), Direction::Down),
            ),
            None => return,
        };

        let mut moved = false;
        for _ in 0..steps {
            let cursor = self.navigation.cursor();
            let boundary = if forward {
                self.collection.last_visible()
            } else {
                self.collection.first_visible()
            };

            if cursor.is_some() && cursor == boundary {
                break;
            }

            let Some(next) = self.collection.step_visible(cursor, forward) else {
                break;
            };

            self.navigation.sync(Some(next), &mut self.collection);
            moved = true;
        }

        if moved {
            if let Some(index) = self.navigation.cursor() {
                shell.request_scroll(index);
            }
        }
    }

    fn delegate<Message>(
        &mut self,
        event: &Event,
        shell: &mut Shell<'_, Message>,
    ) -> Option<Outcome> {
        let child = self.child.as_mut()?;

        match child.update(event, shell)? {
            Outcome::Commit(value) => {
                // Commits bubble to the root; every level on the way
                // closes with it.
                Some(Outcome::Commit(value))
            }
            Outcome::CloseRequested => {
                self.close_submenu();
                shell.capture_event();
                None
            }
            Outcome::SwitchRoot(side) => Some(Outcome::SwitchRoot(side)),
        }
    }

    fn on_key<Message>(
        &mut self,
        key: &keyboard::Key,
        shell: &mut Shell<'_, Message>,
    ) -> Option<Outcome> {
        match self.navigation.on_key(key, &mut self.collection) {
            Some(Step::Moved(index)) => {
                shell.request_scroll(index);
                shell.capture_event();
                None
            }
            Some(Step::Activated(row_key)) => {
                let value = self.collection.get(row_key)?.value.clone();
                shell.capture_event();
                log::debug!("menu item activated via keyboard: {value:?}");

                Some(Outcome::Commit(value))
            }
            Some(Step::EnteredSubmenu(row_key)) => {
                let id = self.collection.get(row_key)?.id;

                if let Err(error) = self.open_submenu(id) {
                    log::warn!("cannot open submenu: {error}");
                }

                shell.capture_event();
                None
            }
            Some(Step::LeftSubmenu) => {
                self.close_submenu();
                shell.capture_event();
                None
            }
            Some(Step::ExitLevel) => {
                shell.capture_event();
                Some(Outcome::CloseRequested)
            }
            Some(Step::SwitchRoot(side)) => {
                shell.capture_event();
                Some(Outcome::SwitchRoot(side))
            }
            None => {
                // An unhandled Escape backs out of this level; the
                // owner decides what closing means.
                if matches!(key, keyboard::Key::Named(Named::Escape)) {
                    Some(Outcome::CloseRequested)
                } else {
                    None
                }
            }
        }
    }

    fn on_mouse<Message>(
        &mut self,
        event: mouse::Event,
        shell: &mut Shell<'_, Message>,
    ) -> Option<Outcome> {
        match event {
            mouse::Event::Entered(Target::Item(id)) => {
                if let Some(index) = self.collection.hover(id) {
                    // Last interaction wins: the keyboard cursor
                    // follows the pointer. No scroll request; hover
                    // is already in view.
                    self.navigation.sync(Some(index), &mut self.collection);

                    // Hovering a different parent row closes the open
                    // submenu; hovering a sibling trigger switches to
                    // it without a click.
                    if self.child.is_some() && self.child_trigger != Some(id) {
                        self.close_submenu();
                    }

                    let is_trigger = self
                        .collection
                        .key_at(index)
                        .and_then(|key| self.collection.get(key))
                        .is_some_and(Row::is_submenu);

                    if is_trigger && self.child.is_none() {
                        if let Err(error) = self.open_submenu(id) {
                            log::warn!("cannot open submenu: {error}");
                        }
                    }

                    shell.capture_event();
                }

                None
            }

            mouse::Event::Clicked(Target::Item(id)) => {
                let key = self.collection.key_of(id)?;
                let row = self.collection.get(key)?;

                if !row.is_enabled() || !row.is_visible() {
                    // Disabled rows swallow their clicks.
                    shell.capture_event();
                    return None;
                }

                if row.is_submenu() {
                    if let Err(error) = self.open_submenu(id) {
                        log::warn!("cannot open submenu: {error}");
                    }

                    shell.capture_event();
                    return None;
                }

                let value = row.value.clone();
                let index = self.collection.index_of(key);
                self.navigation.sync(index, &mut self.collection);
                shell.capture_event();
                log::debug!("menu item activated via pointer: {value:?}");

                Some(Outcome::Commit(value))
            }

            mouse::Event::Entered(Target::ScrollUp) => {
                // Replace any running task before starting a new one.
                self.auto_scroll = Some(AutoScroll::new(Direction::Up));
                shell.capture_event();
                None
            }

            mouse::Event::Entered(Target::ScrollDown) => {
                self.auto_scroll = Some(AutoScroll::new(Direction::Down));
                shell.capture_event();
                None
            }

            mouse::Event::Exited(Target::ScrollUp | Target::ScrollDown) => {
                if self.auto_scroll.take().is_some() {
                    shell.capture_event();
                }

                None
            }

            mouse::Event::Exited(Target::Item(_)) => None,
            mouse::Event::Entered(Target::Root(_))
            | mouse::Event::Exited(Target::Root(_))
            | mouse::Event::Clicked(Target::Root(_))
            | mouse::Event::Clicked(Target::ScrollUp | Target::ScrollDown) => None,
        }
    }

    fn on_query_changed<Message>(&mut self, query: &str, shell: &mut Shell<'_, Message>) {
        self.query.clear();
        self.query.push_str(query);

        let outcome = filter::apply(query, &mut self.collection);
        self.no_matches = outcome.is_empty;
        self.navigation.sync(outcome.first_visible, &mut self.collection);

        if let Some(index) = outcome.first_visible {
            shell.request_scroll(index);
        }

        shell.capture_event();
    }
}
