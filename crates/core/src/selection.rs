//! Committed selection values and their ownership.
use smol_str::SmolStr;

/// The committed value(s) of a selection component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionValue {
    /// At most one committed value (select, radio, toggle `single`).
    Single(Option<SmolStr>),

    /// A set of committed values (toggle `multiple`).
    ///
    /// Insertion order is preserved so hosts that display the set in
    /// commit order can rely on it.
    Multiple(Vec<SmolStr>),
}

impl SelectionValue {
    /// Creates an empty single-select value.
    #[must_use]
    pub fn single() -> Self {
        Self::Single(None)
    }

    /// Creates an empty multi-select value.
    #[must_use]
    pub fn multiple() -> Self {
        Self::Multiple(Vec::new())
    }

    /// Returns whether the given value is currently committed.
    #[must_use]
    pub fn is_selected(&self, value: &str) -> bool {
        match self {
            Self::Single(current) => current.as_deref() == Some(value),
            Self::Multiple(values) => values.iter().any(|v| v == value),
        }
    }

    /// Returns whether nothing is committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(current) => current.is_none(),
            Self::Multiple(values) => values.is_empty(),
        }
    }

    /// Commits a value.
    ///
    /// Single mode replaces any previous value first; multiple mode
    /// toggles membership of the value without affecting the others.
    /// Returns whether the selection changed.
    pub fn commit(&mut self, value: &str) -> bool {
        match self {
            Self::Single(current) => {
                if current.as_deref() == Some(value) {
                    false
                } else {
                    *current = Some(SmolStr::new(value));
                    true
                }
            }
            Self::Multiple(values) => {
                if let Some(position) = values.iter().position(|v| v == value) {
                    let _ = values.remove(position);
                } else {
                    values.push(SmolStr::new(value));
                }

                true
            }
        }
    }
}

/// Who owns a [`SelectionValue`].
///
/// A controlled binding treats an externally supplied value as the
/// source of truth: commits only report the would-be value upward and
/// the host echoes it back through [`Binding::sync`]. An uncontrolled
/// binding owns its value and mutates it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// The value is owned by the host.
    Controlled(SelectionValue),

    /// The value is owned by the component, optionally seeded by a
    /// default.
    Uncontrolled(SelectionValue),
}

impl Binding {
    /// The current value as it should be displayed.
    #[must_use]
    pub fn value(&self) -> &SelectionValue {
        match self {
            Self::Controlled(value) | Self::Uncontrolled(value) => value,
        }
    }

    /// Commits a value and returns the resulting selection to report
    /// through `on_value_change`.
    ///
    /// Controlled bindings leave the stored value untouched; the
    /// host decides whether the reported value becomes current.
    pub fn commit(&mut self, value: &str) -> SelectionValue {
        match self {
            Self::Controlled(current) => {
                let mut next = current.clone();
                let _ = next.commit(value);
                next
            }
            Self::Uncontrolled(current) => {
                let _ = current.commit(value);
                current.clone()
            }
        }
    }

    /// Replaces the stored value with one supplied by the host.
    ///
    /// This is how a controlled component reflects the external value;
    /// calling it on an uncontrolled binding overwrites the internal
    /// state, which is occasionally useful for resets.
    pub fn sync(&mut self, value: SelectionValue) {
        match self {
            Self::Controlled(current) | Self::Uncontrolled(current) => *current = value,
        }
    }
}
