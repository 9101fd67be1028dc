//! The interactive components of menuflow.
//!
//! Every component here is headless: it owns navigation, selection,
//! filtering, and nesting state, reacts to events synchronously, and
//! leaves rendering and hit testing to the host environment.
//!
//! The building blocks layer bottom-up. A [`Collection`] is the
//! scanned model of one menu level; [`Navigation`] moves a cursor over
//! it; a [`MenuLevel`] ties both together with filtering, submenus,
//! and auto-scroll. [`Select`], [`MenuBar`], [`ToggleGroup`], and
//! [`Command`] are the component surfaces built on top.
pub use menuflow_core as core;

pub mod collection;
pub mod command;
pub mod filter;
pub mod level;
pub mod menu_bar;
pub mod navigation;
pub mod scroll;
pub mod select;
pub mod toggle_group;

pub use collection::{Collection, Row, RowFlags, RowKey};
pub use command::Command;
pub use level::{MenuLevel, Outcome};
pub use menu_bar::MenuBar;
pub use navigation::{Navigation, Side, Step};
pub use scroll::{AutoScroll, Direction, Viewport};
pub use select::Select;
pub use toggle_group::ToggleGroup;
