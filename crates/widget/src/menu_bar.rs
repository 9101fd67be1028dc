//! A horizontal bar of mutually exclusive menu roots.
use smol_str::SmolStr;

use crate::core::event::Event;
use crate::core::menu::{MenuKind, MenuNode};
use crate::core::mouse::{self, Target};
use crate::core::{Error, Shell};
use crate::level::{MenuLevel, Outcome};
use crate::navigation::Side;

/// A menu bar.
///
/// At most one root menu is open at any time; activating a root closes
/// whatever was open before. While the bar is open, hovering a sibling
/// root switches to it without a click, and ArrowLeft/ArrowRight at
/// the root level cycle between roots.
#[allow(missing_debug_implementations)]
pub struct MenuBar<'a, Message> {
    roots: Vec<MenuNode>,
    active_root: Option<usize>,
    level: Option<MenuLevel>,
    on_activate: Box<dyn Fn(SmolStr) -> Message + 'a>,
    on_open_change: Option<Box<dyn Fn(bool) -> Message + 'a>>,
}

impl<'a, Message> MenuBar<'a, Message> {
    /// Creates a new [`MenuBar`] with the given roots.
    ///
    /// `on_activate` maps a committed item value to a host message.
    pub fn new(
        roots: Vec<MenuNode>,
        on_activate: impl Fn(SmolStr) -> Message + 'a,
    ) -> Self {
        Self {
            roots,
            active_root: None,
            level: None,
            on_activate: Box::new(on_activate),
            on_open_change: None,
        }
    }

    /// Sets the message produced when the bar opens or closes as a
    /// whole. Switching between roots does not re-fire it.
    #[must_use]
    pub fn on_open_change(mut self, f: impl Fn(bool) -> Message + 'a) -> Self {
        self.on_open_change = Some(Box::new(f));
        self
    }

    /// Whether any root menu is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.level.is_some()
    }

    /// The index of the active root, if the bar is open.
    #[must_use]
    pub fn active_root(&self) -> Option<usize> {
        self.active_root
    }

    /// The open root level, if any.
    #[must_use]
    pub fn level(&self) -> Option<&MenuLevel> {
        self.level.as_ref()
    }

    /// The root nodes of the bar.
    #[must_use]
    pub fn roots(&self) -> &[MenuNode] {
        &self.roots
    }

    /// Performs the deferred content scan of the open level tree.
    pub fn settle(&mut self) {
        if let Some(level) = &mut self.level {
            level.settle();
        }
    }

    /// Opens the root at the given index, closing any other open root.
    pub fn activate(
        &mut self,
        index: usize,
        shell: &mut Shell<'_, Message>,
    ) -> Result<(), Error> {
        let children = self.root_children(index)?;

        let was_open = self.is_open();

        // Mutual exclusion: the previous root's level tree is torn
        // down wholesale before the new one opens.
        if let Some(level) = &mut self.level {
            level.close();
        }

        let mut level = MenuLevel::new(children)
            .with_axis_arrows(true)
            .with_root_switching(true);
        level.open();

        self.level = Some(level);
        self.active_root = Some(index);
        log::debug!("menu bar root {index} activated");

        if !was_open {
            self.notify_open_change(true, shell);
        }

        Ok(())
    }

    /// Closes the bar entirely.
    pub fn close_all(&mut self, shell: &mut Shell<'_, Message>) {
        let was_open = self.is_open();

        if let Some(level) = &mut self.level {
            level.close();
        }

        self.level = None;
        self.active_root = None;

        if was_open {
            self.notify_open_change(false, shell);
        }
    }

    /// Toggles the root at the given index: a click on the active root
    /// closes the bar, a click on any other root activates it.
    pub fn click_root(
        &mut self,
        index: usize,
        shell: &mut Shell<'_, Message>,
    ) -> Result<(), Error> {
        if index >= self.roots.len() {
            return Err(Error::UnknownRoot {
                index,
                count: self.roots.len(),
            });
        }

        if self.is_open() && self.active_root == Some(index) {
            self.close_all(shell);
            Ok(())
        } else {
            self.activate(index, shell)
        }
    }

    /// Switches to the hovered root, but only while the bar is already
    /// open. Passive hover over a closed bar does nothing.
    pub fn hover_root(&mut self, index: usize, shell: &mut Shell<'_, Message>) -> bool {
        if !self.is_open() || self.active_root == Some(index) || index >= self.roots.len() {
            return false;
        }

        self.activate(index, shell).is_ok()
    }

    /// Cycles to the previous or next root with openable content,
    /// skipping childless and disabled roots.
    pub fn cycle_root(&mut self, side: Side, shell: &mut Shell<'_, Message>) {
        let count = self.roots.len();
        let Some(active) = self.active_root else {
            return;
        };

        if count < 2 {
            return;
        }

        let mut index = active;
        // Bounded walk so a bar of unopenable siblings terminates.
        for _ in 1..count {
            index = match side {
                Side::Next => (index + 1) % count,
                Side::Previous => (index + count - 1) % count,
            };

            if self.root_children(index).is_ok() {
                if let Err(error) = self.activate(index, shell) {
                    log::warn!("cannot switch menu root: {error}");
                }

                return;
            }
        }
    }

    /// Processes one event. Capture status is reported through the
    /// shell.
    pub fn update(&mut self, event: &Event, shell: &mut Shell<'_, Message>) {
        if let Event::Mouse(mouse_event) = event {
            match mouse_event {
                mouse::Event::Clicked(Target::Root(index)) => {
                    if let Err(error) = self.click_root(*index, shell) {
                        log::warn!("cannot toggle menu root: {error}");
                    }

                    shell.capture_event();
                    return;
                }
                mouse::Event::Entered(Target::Root(index)) => {
                    if self.hover_root(*index, shell) {
                        shell.capture_event();
                    }

                    return;
                }
                _ => {}
            }
        }

        let Some(level) = &mut self.level else {
            return;
        };

        match level.update(event, shell) {
            Some(Outcome::Commit(value)) => {
                shell.publish((self.on_activate)(value));
                self.close_all(shell);
                shell.capture_event();
            }
            Some(Outcome::CloseRequested) => {
                self.close_all(shell);
                shell.capture_event();
            }
            Some(Outcome::SwitchRoot(side)) => {
                self.cycle_root(side, shell);
                shell.capture_event();
            }
            None => {}
        }
    }

    fn root_children(&self, index: usize) -> Result<Vec<MenuNode>, Error> {
        let root = self.roots.get(index).ok_or(Error::UnknownRoot {
            index,
            count: self.roots.len(),
        })?;

        match &root.kind {
            MenuKind::Submenu {
                children, enabled, ..
            } if *enabled && !children.is_empty() => Ok(children.clone()),
            _ => Err(Error::NotASubmenu(root.id)),
        }
    }

    fn notify_open_change(&self, is_open: bool, shell: &mut Shell<'_, Message>) {
        if let Some(on_open_change) = &self.on_open_change {
            shell.publish(on_open_change(is_open));
        }
    }
}
