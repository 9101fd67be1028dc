//! The essential ideas of menuflow.
//!
//! This crate contains the vocabulary shared by every interactive
//! component: input events, the menu content schema, selection values,
//! the [`Shell`] used to publish messages upward, and the error
//! taxonomy.
//!
//! It has no opinion about rendering. A host environment feeds events
//! in, components react synchronously, and any resulting messages are
//! collected through a [`Shell`].
pub mod event;
pub mod keyboard;
pub mod menu;
pub mod mouse;
pub mod selection;
pub mod shell;

mod error;

pub use error::Error;
pub use event::Event;
pub use menu::{MenuId, MenuKind, MenuNode};
pub use selection::{Binding, SelectionValue};
pub use shell::Shell;
