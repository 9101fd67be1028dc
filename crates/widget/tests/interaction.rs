//! End-to-end interaction scenarios driven through the public API.
use menuflow_widget::core::keyboard::key::Named;
use menuflow_widget::core::keyboard::key_pressed;
use menuflow_widget::core::mouse::{self, Target};
use menuflow_widget::core::{menu, Event, MenuId, Shell};
use menuflow_widget::{Command, MenuBar, MenuLevel, Select};

use smol_str::SmolStr;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Message {
    Picked(String),
    Activated(SmolStr),
    Ran(SmolStr),
}

fn key(named: Named) -> Event {
    Event::Keyboard(key_pressed(named))
}

#[test]
fn test_select_commits_on_keyboard_and_closes() {
    let mut select = Select::uncontrolled(
        vec!["a".to_owned(), "b".to_owned()],
        None,
        Message::Picked,
    );

    let mut messages = Vec::new();
    let mut shell = Shell::new(&mut messages);
    select.open(&mut shell);
    select.settle();

    // Opening highlights "a", so a single ArrowDown reaches "b".
    select.update(&key(Named::ArrowDown), &mut shell);
    select.update(&key(Named::Enter), &mut shell);

    assert_eq!(messages, vec![Message::Picked("b".to_owned())]);
    assert!(!select.is_open());
    assert_eq!(select.selected(), Some(&"b".to_owned()));
}

#[test]
fn test_menu_bar_keeps_exactly_one_root_open() {
    let mut bar = MenuBar::new(
        vec![
            menu::submenu("File", vec![menu::item("Open", "open")]),
            menu::submenu("Edit", vec![menu::item("Copy", "copy")]),
        ],
        Message::Activated,
    );

    let mut messages = Vec::new();
    let mut shell = Shell::new(&mut messages);

    bar.update(
        &Event::Mouse(mouse::Event::Clicked(Target::Root(0))),
        &mut shell,
    );
    bar.settle();
    assert_eq!(bar.active_root(), Some(0));

    // Hovering the sibling switches to it without a click.
    bar.update(
        &Event::Mouse(mouse::Event::Entered(Target::Root(1))),
        &mut shell,
    );
    bar.settle();

    assert!(bar.is_open());
    assert_eq!(bar.active_root(), Some(1));
    assert_eq!(bar.level().map(|level| level.collection().len()), Some(1));
}

#[test]
fn test_command_palette_empty_state_has_no_highlight() {
    let mut palette = Command::new(
        vec![
            menu::item("One", "one"),
            menu::item("Two", "two"),
            menu::item("Three", "three"),
        ],
        Message::Ran,
    );
    palette.open();
    palette.settle();

    let mut messages = Vec::new();
    let mut shell = Shell::new(&mut messages);
    palette.update(&Event::input("zzz"), &mut shell);

    assert!(palette.no_matches());
    assert_eq!(palette.visible_len(), 0);
    assert!(palette.level().highlighted().is_none());

    // Enter in the empty state commits nothing.
    palette.update(&key(Named::Enter), &mut shell);
    assert!(messages.is_empty());
    assert!(palette.is_open());
}

#[test]
fn test_submenu_keyboard_stays_in_the_child_level() {
    let mut level = MenuLevel::new(vec![
        menu::item("Parent", "parent"),
        menu::submenu(
            "More",
            vec![menu::item("C1", "c1"), menu::item("C2", "c2")],
        ),
    ])
    .with_axis_arrows(true);
    level.open();
    level.settle();

    let mut messages: Vec<Message> = Vec::new();
    let mut shell = Shell::new(&mut messages);

    let _ = level.update(&key(Named::ArrowDown), &mut shell);
    let _ = level.update(&key(Named::ArrowDown), &mut shell);
    let _ = level.update(&key(Named::ArrowRight), &mut shell);
    level.settle();

    assert!(level.child().is_some());

    // Arrow keys now walk the child; the parent cursor stays on the
    // trigger row.
    let _ = level.update(&key(Named::ArrowDown), &mut shell);
    let _ = level.update(&key(Named::ArrowDown), &mut shell);

    let child = level.child().unwrap();
    assert_eq!(child.navigation().cursor(), Some(1));
    assert_eq!(
        child.highlighted().map(|row| row.value.as_str()),
        Some("c2")
    );
    assert_eq!(level.navigation().cursor(), Some(1));
    assert!(level.highlighted().is_some_and(|row| row.is_submenu()));
}

#[test]
fn test_programmatic_scroll_does_not_retrigger_hover() {
    let mut level = MenuLevel::new(vec![
        menu::item("A", "a"),
        menu::item("B", "b"),
        menu::item("C", "c"),
    ]);
    level.open();
    level.settle();

    let mut messages: Vec<Message> = Vec::new();
    let mut shell = Shell::new(&mut messages);

    // The pointer rests over the first row.
    let _ = level.update(
        &Event::Mouse(mouse::Event::enter_item(MenuId::from_str("a"))),
        &mut shell,
    );
    assert_eq!(level.navigation().cursor(), Some(0));

    // Keyboard navigation scrolls the list programmatically. The
    // scroll request carries only a target index; no pointer event is
    // synthesized, so the row under the (now stale) pointer position
    // does not steal the highlight back.
    let _ = level.update(&key(Named::ArrowDown), &mut shell);
    let _ = level.update(&key(Named::ArrowDown), &mut shell);

    assert_eq!(shell.take_scroll_request(), Some(2));
    assert_eq!(level.navigation().cursor(), Some(2));
    assert_eq!(
        level.highlighted().map(|row| row.value.as_str()),
        Some("c")
    );
    assert!(messages.is_empty());
}

#[test]
fn test_wraparound_skips_hidden_and_disabled_rows() {
    let mut level = MenuLevel::new(vec![
        menu::item("Alpha", "alpha"),
        menu::item("Beta", "beta").enabled(false),
        menu::item("Gamma", "gamma"),
    ]);
    level.open();
    level.settle();

    let mut messages: Vec<Message> = Vec::new();
    let mut shell = Shell::new(&mut messages);

    // Disabled rows are not navigable at all.
    assert_eq!(level.collection().len(), 2);

    let _ = level.update(&key(Named::ArrowDown), &mut shell);
    let _ = level.update(&key(Named::ArrowDown), &mut shell);
    assert_eq!(
        level.highlighted().map(|row| row.value.as_str()),
        Some("gamma")
    );

    // Stepping past the end wraps to the top.
    let _ = level.update(&key(Named::ArrowDown), &mut shell);
    assert_eq!(
        level.highlighted().map(|row| row.value.as_str()),
        Some("alpha")
    );
}
