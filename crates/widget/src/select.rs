//! A dropdown for choosing a single value from a list of options.
use smol_str::SmolStr;

use crate::core::event::Event;
use crate::core::menu::{self, MenuId, MenuNode};
use crate::core::selection::{Binding, SelectionValue};
use crate::core::Shell;
use crate::level::{MenuLevel, Outcome};

/// A single-value select over a list of typed options.
///
/// Options are rendered through their `ToString` value, which doubles
/// as the committed value string. When the committed value no longer
/// maps to an option the component degrades to its placeholder state
/// instead of failing.
#[allow(missing_debug_implementations)]
pub struct Select<'a, T, Message>
where
    T: ToString + PartialEq + Clone,
{
    options: Vec<T>,
    binding: Binding,
    level: MenuLevel,
    on_select: Box<dyn Fn(T) -> Message + 'a>,
    on_open: Option<Message>,
    on_close: Option<Message>,
    placeholder: Option<SmolStr>,
    seed_cursor: bool,
}

impl<'a, T, Message> Select<'a, T, Message>
where
    T: ToString + PartialEq + Clone,
{
    /// Creates a controlled [`Select`]: `selected` is the host-owned
    /// value and commits are only reported through `on_select` until
    /// the host echoes them back via [`sync`](Self::sync).
    pub fn new(
        options: Vec<T>,
        selected: Option<T>,
        on_select: impl Fn(T) -> Message + 'a,
    ) -> Self {
        let value = SelectionValue::Single(
            selected.map(|option| SmolStr::new(option.to_string())),
        );

        Self::with_binding(options, Binding::Controlled(value), on_select)
    }

    /// Creates an uncontrolled [`Select`] that owns its value,
    /// optionally seeded with a default.
    pub fn uncontrolled(
        options: Vec<T>,
        default: Option<T>,
        on_select: impl Fn(T) -> Message + 'a,
    ) -> Self {
        let value = SelectionValue::Single(
            default.map(|option| SmolStr::new(option.to_string())),
        );

        Self::with_binding(options, Binding::Uncontrolled(value), on_select)
    }

    fn with_binding(
        options: Vec<T>,
        binding: Binding,
        on_select: impl Fn(T) -> Message + 'a,
    ) -> Self {
        let content: Vec<MenuNode> = options
            .iter()
            .map(|option| {
                let value = option.to_string();

                menu::item(value.clone(), value)
            })
            .collect();

        Self {
            options,
            binding,
            level: MenuLevel::new(content),
            on_select: Box::new(on_select),
            on_open: None,
            on_close: None,
            placeholder: None,
            seed_cursor: false,
        }
    }

    /// Sets the text shown while nothing is selected.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<SmolStr>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Sets the message produced when the dropdown opens.
    #[must_use]
    pub fn on_open(mut self, message: Message) -> Self {
        self.on_open = Some(message);
        self
    }

    /// Sets the message produced when the dropdown closes.
    #[must_use]
    pub fn on_close(mut self, message: Message) -> Self {
        self.on_close = Some(message);
        self
    }

    /// Whether the dropdown is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.level.is_open()
    }

    /// The dropdown level, for inspecting cursor and rows.
    #[must_use]
    pub fn level(&self) -> &MenuLevel {
        &self.level
    }

    /// The current selection as displayed.
    #[must_use]
    pub fn value(&self) -> &SelectionValue {
        self.binding.value()
    }

    /// The currently selected option, if its value still maps to one.
    #[must_use]
    pub fn selected(&self) -> Option<&T> {
        let SelectionValue::Single(Some(value)) = self.binding.value() else {
            return None;
        };

        self.options
            .iter()
            .find(|option| option.to_string() == value.as_str())
    }

    /// The label to display on the closed trigger.
    ///
    /// Falls back to the placeholder when nothing is selected or the
    /// committed value is stale.
    #[must_use]
    pub fn display_label(&self) -> Option<SmolStr> {
        self.selected()
            .map(|option| SmolStr::new(option.to_string()))
            .or_else(|| self.placeholder.clone())
    }

    /// Replaces the displayed value with one supplied by the host.
    pub fn sync(&mut self, value: SelectionValue) {
        self.binding.sync(value);
    }

    /// Opens the dropdown.
    pub fn open(&mut self, shell: &mut Shell<'_, Message>)
    where
        Message: Clone,
    {
        if self.level.is_open() {
            return;
        }

        self.level.open();
        self.seed_cursor = true;

        if let Some(on_open) = &self.on_open {
            shell.publish(on_open.clone());
        }
    }

    /// Closes the dropdown.
    pub fn close(&mut self, shell: &mut Shell<'_, Message>)
    where
        Message: Clone,
    {
        if !self.level.is_open() {
            return;
        }

        self.level.close();
        self.seed_cursor = false;

        if let Some(on_close) = &self.on_close {
            shell.publish(on_close.clone());
        }
    }

    /// Toggles the dropdown open or closed.
    pub fn toggle(&mut self, shell: &mut Shell<'_, Message>)
    where
        Message: Clone,
    {
        if self.level.is_open() {
            self.close(shell);
        } else {
            self.open(shell);
        }
    }

    /// Performs the deferred content scan and, on the first settle
    /// after opening, moves the cursor to the selected option, or to
    /// the first option when nothing is selected.
    pub fn settle(&mut self) {
        self.level.settle();

        if !self.seed_cursor || !self.level.is_open() {
            return;
        }

        self.seed_cursor = false;

        let selected = match self.binding.value() {
            SelectionValue::Single(Some(value)) => {
                let id = MenuId::from_str(value.as_str());

                self.level
                    .collection()
                    .key_of(id)
                    .and_then(|key| self.level.collection().index_of(key))
            }
            SelectionValue::Single(None) | SelectionValue::Multiple(_) => None,
        };

        // A missing or stale selection opens with the first option
        // highlighted, so the first ArrowDown lands on the second.
        let index = selected.or_else(|| self.level.collection().first_visible());

        if index.is_some() {
            self.level.sync_cursor(index);
        }
    }

    /// Processes one event while the dropdown is open.
    pub fn update(&mut self, event: &Event, shell: &mut Shell<'_, Message>)
    where
        Message: Clone,
    {
        match self.level.update(event, shell) {
            Some(Outcome::Commit(value)) => {
                self.commit(&value, shell);
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

    fn commit(&mut self, value: &SmolStr, shell: &mut Shell<'_, Message>) {
        let Some(option) = self
            .options
            .iter()
            .find(|option| option.to_string() == value.as_str())
            .cloned()
        else {
            // Stale commit: the option list changed underneath the
            // value. Degrade to the placeholder state. A controlled
            // binding is left untouched; its value belongs to the
            // host and the display already degrades through
            // `selected`.
            log::warn!("committed value {value:?} no longer maps to an option");

            if let Binding::Uncontrolled(_) = &self.binding {
                self.binding.sync(SelectionValue::single());
            }

            return;
        };

        let _ = self.binding.commit(value);
        shell.publish((self.on_select)(option));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::keyboard::key::Named;
    use crate::core::keyboard::key_pressed;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Message {
        Selected(String),
        Opened,
        Closed,
    }

    fn select<'a>() -> Select<'a, String, Message> {
        Select::uncontrolled(
            vec!["Red".to_owned(), "Green".to_owned(), "Blue".to_owned()],
            Some("Green".to_owned()),
            |option| Message::Selected(option),
        )
        .placeholder("Pick a color")
        .on_open(Message::Opened)
        .on_close(Message::Closed)
    }

    fn open(select: &mut Select<'_, String, Message>) -> Vec<Message> {
        let mut messages = Vec::new();
        let mut shell = Shell::new(&mut messages);
        select.open(&mut shell);
        select.settle();
        messages
    }

    fn update(select: &mut Select<'_, String, Message>, event: Event) -> Vec<Message> {
        let mut messages = Vec::new();
        let mut shell = Shell::new(&mut messages);
        select.update(&event, &mut shell);
        select.settle();
        messages
    }

    #[test]
    fn test_open_without_selection_highlights_first_option() {
        let mut select: Select<'_, String, Message> = Select::uncontrolled(
            vec!["a".to_owned(), "b".to_owned()],
            None,
            Message::Selected,
        );
        let _ = open(&mut select);

        assert_eq!(select.level().navigation().cursor(), Some(0));

        // One ArrowDown therefore lands on the second option.
        let _ = update(&mut select, Event::Keyboard(key_pressed(Named::ArrowDown)));
        let messages = update(&mut select, Event::Keyboard(key_pressed(Named::Enter)));

        assert_eq!(messages, vec![Message::Selected("b".to_owned())]);
        assert!(!select.is_open());
    }

    #[test]
    fn test_open_seeds_cursor_at_selection() {
        let mut select = select();

        let messages = open(&mut select);

        assert_eq!(messages, vec![Message::Opened]);
        assert_eq!(select.level().navigation().cursor(), Some(1));
    }

    #[test]
    fn test_arrow_and_enter_commit_and_close() {
        let mut select = select();
        let _ = open(&mut select);

        let _ = update(&mut select, Event::Keyboard(key_pressed(Named::ArrowDown)));
        let messages = update(&mut select, Event::Keyboard(key_pressed(Named::Enter)));

        assert_eq!(
            messages,
            vec![Message::Selected("Blue".to_owned()), Message::Closed]
        );
        assert!(!select.is_open());
        assert_eq!(select.selected(), Some(&"Blue".to_owned()));
        assert_eq!(select.display_label(), Some(SmolStr::new("Blue")));
    }

    #[test]
    fn test_escape_closes_without_commit() {
        let mut select = select();
        let _ = open(&mut select);

        let messages = update(&mut select, Event::Keyboard(key_pressed(Named::Escape)));

        assert_eq!(messages, vec![Message::Closed]);
        assert_eq!(select.selected(), Some(&"Green".to_owned()));
    }

    #[test]
    fn test_placeholder_when_nothing_selected() {
        let select: Select<'_, String, Message> =
            Select::uncontrolled(vec!["A".to_owned()], None, Message::Selected)
                .placeholder("Pick one");

        assert_eq!(select.selected(), None);
        assert_eq!(select.display_label(), Some(SmolStr::new("Pick one")));
    }

    #[test]
    fn test_stale_value_degrades_to_placeholder() {
        let mut select: Select<'_, String, Message> =
            Select::uncontrolled(vec!["A".to_owned()], Some("Gone".to_owned()), Message::Selected)
                .placeholder("Pick one");

        assert_eq!(select.display_label(), Some(SmolStr::new("Pick one")));

        let mut messages = Vec::new();
        let mut shell = Shell::new(&mut messages);
        select.commit(&SmolStr::new("Gone"), &mut shell);

        assert!(messages.is_empty());
        assert!(select.value().is_empty());
    }

    #[test]
    fn test_controlled_select_waits_for_sync() {
        let mut select: Select<'_, String, Message> =
            Select::new(vec!["A".to_owned(), "B".to_owned()], None, Message::Selected);

        let _ = open(&mut select);
        let _ = update(&mut select, Event::Keyboard(key_pressed(Named::ArrowDown)));
        let messages = update(&mut select, Event::Keyboard(key_pressed(Named::Enter)));

        assert_eq!(messages, vec![Message::Selected("B".to_owned())]);
        // The displayed value waits for the host to echo it back.
        assert!(select.value().is_empty());

        select.sync(SelectionValue::Single(Some(SmolStr::new("B"))));
        assert_eq!(select.selected(), Some(&"B".to_owned()));
    }

    #[test]
    fn test_stale_commit_leaves_controlled_value_alone() {
        let mut select: Select<'_, String, Message> = Select::new(
            vec!["A".to_owned()],
            Some("Gone".to_owned()),
            Message::Selected,
        )
        .placeholder("Pick one");

        let mut messages = Vec::new();
        let mut shell = Shell::new(&mut messages);
        select.commit(&SmolStr::new("Gone"), &mut shell);

        assert!(messages.is_empty());
        // The host-owned value survives; only the display degrades.
        assert!(select.value().is_selected("Gone"));
        assert_eq!(select.selected(), None);
        assert_eq!(select.display_label(), Some(SmolStr::new("Pick one")));
    }
}
