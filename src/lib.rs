//! menuflow is a headless navigation and selection engine for overlay
//! menus: selects, dropdown and context menus, menu bars, and command
//! palettes.
//!
//! There is no rendering and no hit testing here. The host environment
//! owns both; it feeds already-routed [`Event`]s into a component and
//! collects the resulting messages through a [`Shell`]. Components
//! react synchronously, so every interaction is an ordinary function
//! call that can be driven from a test as easily as from a UI loop.
//!
//! # A quick tour
//!
//! ```
//! use menuflow::keyboard::key::Named;
//! use menuflow::keyboard::key_pressed;
//! use menuflow::widget::Select;
//! use menuflow::{Event, Shell};
//!
//! #[derive(Debug, Clone, PartialEq, Eq)]
//! enum Message {
//!     FruitPicked(String),
//! }
//!
//! let mut select = Select::uncontrolled(
//!     vec!["Apple".to_owned(), "Banana".to_owned(), "Cherry".to_owned()],
//!     None,
//!     Message::FruitPicked,
//! );
//!
//! let mut messages = Vec::new();
//! let mut shell = Shell::new(&mut messages);
//!
//! select.open(&mut shell);
//! select.settle();
//!
//! // Opening highlights "Apple"; ArrowDown moves to "Banana".
//! select.update(&Event::Keyboard(key_pressed(Named::ArrowDown)), &mut shell);
//! select.update(&Event::Keyboard(key_pressed(Named::Enter)), &mut shell);
//!
//! assert_eq!(messages, vec![Message::FruitPicked("Banana".to_owned())]);
//! assert!(!select.is_open());
//! ```
//!
//! The vocabulary types live in [`menuflow_core`] and are re-exported
//! at the root; the interactive components live in [`widget`].
pub use menuflow_core::{event, keyboard, menu, mouse, selection, shell};
pub use menuflow_widget as widget;

pub use menuflow_core::{Binding, Error, Event, MenuId, MenuKind, MenuNode, SelectionValue, Shell};
