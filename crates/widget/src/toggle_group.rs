//! A group of pressable items sharing one selection.
use crate::collection::Collection;
use crate::core::event::Event;
use crate::core::menu::{MenuId, MenuNode};
use crate::core::mouse::{self, Target};
use crate::core::selection::{Binding, SelectionValue};
use crate::core::{Error, Shell};

/// A toggle group.
///
/// Unlike a dropdown, the group's items are always mounted, so the
/// content is scanned eagerly and [`rescan`](ToggleGroup::rescan)
/// refreshes it when the host swaps content.
#[allow(missing_debug_implementations)]
pub struct ToggleGroup<'a, Message> {
    content: Vec<MenuNode>,
    collection: Collection,
    binding: Binding,
    on_change: Box<dyn Fn(SelectionValue) -> Message + 'a>,
}

impl<'a, Message> ToggleGroup<'a, Message> {
    /// Creates a single-select group: pressing an item replaces the
    /// previous selection.
    pub fn single(
        content: Vec<MenuNode>,
        on_change: impl Fn(SelectionValue) -> Message + 'a,
    ) -> Self {
        Self::with_binding(
            content,
            Binding::Uncontrolled(SelectionValue::single()),
            on_change,
        )
    }

    /// Creates a multi-select group: pressing an item toggles its
    /// membership without affecting the others.
    pub fn multiple(
        content: Vec<MenuNode>,
        on_change: impl Fn(SelectionValue) -> Message + 'a,
    ) -> Self {
        Self::with_binding(
            content,
            Binding::Uncontrolled(SelectionValue::multiple()),
            on_change,
        )
    }

    /// Creates a group over a host-supplied binding, controlled or
    /// uncontrolled, seeded with its current value.
    pub fn with_binding(
        content: Vec<MenuNode>,
        binding: Binding,
        on_change: impl Fn(SelectionValue) -> Message + 'a,
    ) -> Self {
        let collection = Collection::scan(&content);

        Self {
            content,
            collection,
            binding,
            on_change: Box::new(on_change),
        }
    }

    /// The current selection as displayed.
    #[must_use]
    pub fn value(&self) -> &SelectionValue {
        self.binding.value()
    }

    /// Returns whether the given value is currently selected.
    #[must_use]
    pub fn is_selected(&self, value: &str) -> bool {
        self.binding.value().is_selected(value)
    }

    /// The scanned item collection.
    #[must_use]
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Replaces the displayed value with one supplied by the host.
    pub fn sync(&mut self, value: SelectionValue) {
        self.binding.sync(value);
    }

    /// Replaces the content and rescans it.
    pub fn rescan(&mut self, content: Vec<MenuNode>) {
        self.content = content;
        self.collection = Collection::scan(&self.content);
    }

    /// Programmatically presses the item with the given id.
    ///
    /// Pressing an unknown or disabled item from code is a wiring bug
    /// and fails fast, unlike a pointer click which no-ops.
    pub fn press(
        &mut self,
        id: MenuId,
        shell: &mut Shell<'_, Message>,
    ) -> Result<(), Error> {
        let key = self.collection.key_of(id).ok_or(Error::UnknownItem(id))?;
        let row = self.collection.get(key).ok_or(Error::UnknownItem(id))?;

        if !row.is_enabled() {
            return Err(Error::DisabledItem(id));
        }

        let value = row.value.clone();
        let reported = self.binding.commit(&value);
        shell.publish((self.on_change)(reported));

        Ok(())
    }

    /// Processes one event.
    pub fn update(&mut self, event: &Event, shell: &mut Shell<'_, Message>) {
        let Event::Mouse(mouse::Event::Clicked(Target::Item(id))) = event else {
            return;
        };

        let Some(row) = self.collection.key_of(*id).and_then(|key| self.collection.get(key))
        else {
            return;
        };

        if !row.is_enabled() {
            // A click on a disabled item is swallowed silently.
            shell.capture_event();
            return;
        }

        let value = row.value.clone();
        let reported = self.binding.commit(&value);
        shell.publish((self.on_change)(reported));
        shell.capture_event();
    }
}
