//! A searchable command palette.
use smol_str::SmolStr;

use crate::core::event::Event;
use crate::core::menu::MenuNode;
use crate::core::Shell;
use crate::level::{MenuLevel, Outcome};

/// A command palette: one menu level with a search input in front.
///
/// Typing narrows the visible commands, keyboard navigation walks the
/// matches, and Enter runs the highlighted command and closes the
/// palette. A query that matches nothing shows the empty state rather
/// than an error.
#[allow(missing_debug_implementations)]
pub struct Command<'a, Message> {
    level: MenuLevel,
    on_select: Box<dyn Fn(SmolStr) -> Message + 'a>,
    on_close: Option<Message>,
}

impl<'a, Message> Command<'a, Message> {
    /// Creates a closed [`Command`] palette over the given content.
    pub fn new(
        content: Vec<MenuNode>,
        on_select: impl Fn(SmolStr) -> Message + 'a,
    ) -> Self {
        Self {
            level: MenuLevel::new(content),
            on_select: Box::new(on_select),
            on_close: None,
        }
    }

    /// Sets the message produced when the palette closes.
    #[must_use]
    pub fn on_close(mut self, message: Message) -> Self {
        self.on_close = Some(message);
        self
    }

    /// Whether the palette is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.level.is_open()
    }

    /// The palette level, for inspecting rows and cursor.
    #[must_use]
    pub fn level(&self) -> &MenuLevel {
        &self.level
    }

    /// The active search query.
    #[must_use]
    pub fn query(&self) -> &str {
        self.level.query()
    }

    /// Whether the query matched nothing.
    #[must_use]
    pub fn no_matches(&self) -> bool {
        self.level.no_matches()
    }

    /// The number of commands currently shown.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.level.collection().visible_len()
    }

    /// Opens the palette with an empty query.
    pub fn open(&mut self) {
        self.level.open();
    }

    /// Closes the palette, discarding query and cursor.
    pub fn close(&mut self, shell: &mut Shell<'_, Message>)
    where
        Message: Clone,
    {
        if !self.level.is_open() {
            return;
        }

        self.level.close();

        if let Some(on_close) = &self.on_close {
            shell.publish(on_close.clone());
        }
    }

    /// Performs the deferred content scan.
    pub fn settle(&mut self) {
        self.level.settle();
    }

    /// Processes one event while the palette is open.
    pub fn update(&mut self, event: &Event, shell: &mut Shell<'_, Message>)
    where
        Message: Clone,
    {
        match self.level.update(event, shell) {
            Some(Outcome::Commit(value)) => {
                shell.publish((self.on_select)(value));
                self.close(shell);
                shell.capture_event();
            }
            Some(Outcome::CloseRequested) => {
                self.close(shell);
                shell.capture_event();
            }
            Some(Outcome::SwitchRoot(_)) | None => {}
        }
    }
}
