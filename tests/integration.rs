//! Integration tests for formkit.
//!
//! These tests exercise the public API from outside the crate: declarative
//! loading, kinetic scrolling through the Pilot, z-ordered dispatch, and the
//! draw list a scrolled container produces.

use std::time::Duration;

use formkit::event::{InputEvent, Key, TouchEvent, TouchInput};
use formkit::geometry::{Size, Vec2};
use formkit::layout::LayoutKind;
use formkit::testing::{describe, Pilot};
use formkit::widget::{Axis, ScrollDirection, ScrollPhase};
use formkit::{
    Button, CheckBox, Container, Control, ControlExt, Label, ParseError, RegistryError, Scroll,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn ten_row_list() -> Container {
    let mut list = Container::new(LayoutKind::Vertical)
        .with_id("list")
        .with_bounds(0.0, 0.0, 100.0, 200.0)
        .with_scroll(Scroll::VERTICAL);
    for i in 0..10 {
        list.add_control(
            Label::new(format!("row {i}"))
                .with_id(&format!("row{i}"))
                .with_size(100.0, 60.0)
                .boxed(),
        )
        .unwrap();
    }
    list
}

const MENU: &str = r#"
// settings menu
container menu
{
    layout = LAYOUT_VERTICAL
    size = 100, 60
    scroll = SCROLL_VERTICAL

    label title
    {
        text = Settings
        size = 100, 40
    }

    checkBox sound
    {
        text = "Sound"
        checked = true
        size = 100, 40
    }

    button ok
    {
        text = OK
        size = 100, 40
    }
}
"#;

// ---------------------------------------------------------------------------
// Kinetic scrolling
// ---------------------------------------------------------------------------

#[test]
fn test_drag_release_coasts_and_stops_in_bounds() {
    init_logging();
    let mut pilot = Pilot::new(ten_row_list());
    assert_eq!(pilot.container().scroll_engine().max_offset(), Vec2::new(0.0, 400.0));

    pilot.drag((50.0, 150.0), (50.0, 50.0), Duration::from_millis(100), 5);
    let engine = pilot.container().scroll_engine();
    assert_eq!(engine.offset().y, 100.0);
    assert_eq!(engine.phase(Axis::Vertical), ScrollPhase::Coasting);
    assert_eq!(engine.direction(Axis::Vertical), Some(ScrollDirection::Forward));
    assert_eq!(engine.velocity().x, 0.0);

    pilot.frame();
    assert!(pilot.container().scroll_offset().y > 100.0);

    let frames = pilot.settle(1_000);
    assert!(frames < 1_000);
    let offset = pilot.container().scroll_offset();
    assert!(offset.y > 100.0 && offset.y <= 400.0);
    assert_eq!(offset.x, 0.0);
    assert!(pilot.container().scroll_engine().is_idle());
}

#[test]
fn test_hard_fling_stops_at_end() {
    let mut pilot = Pilot::new(ten_row_list());
    pilot.drag((50.0, 190.0), (50.0, 10.0), Duration::from_millis(32), 2);
    pilot.settle(1_000);
    assert_eq!(pilot.container().scroll_offset().y, 400.0);
    assert_eq!(pilot.container().scroll_engine().velocity(), Vec2::ZERO);
}

#[test]
fn test_hold_before_release_does_not_coast() {
    let mut pilot = Pilot::new(ten_row_list());
    pilot.press(50.0, 150.0);
    pilot.frame();
    pilot.move_to(50.0, 100.0);
    pilot.advance(Duration::from_millis(300));
    pilot.release(50.0, 100.0);
    assert_eq!(pilot.container().scroll_engine().velocity(), Vec2::ZERO);
    assert_eq!(pilot.container().scroll_offset().y, 50.0);
}

#[test]
fn test_scrollbars_fade_after_idle() {
    let mut pilot = Pilot::new(ten_row_list());
    pilot.drag((50.0, 150.0), (50.0, 140.0), Duration::from_millis(100), 2);
    pilot.settle(1_000);
    assert_eq!(pilot.container().scroll_engine().scrollbar_opacity(), 1.0);

    pilot.advance(Duration::from_secs(2));
    assert_eq!(pilot.container().scroll_engine().scrollbar_opacity(), 0.0);
    let drawn = describe(&pilot.draw());
    assert!(!drawn.contains("scrollbar"));

    pilot.press(50.0, 50.0);
    assert_eq!(pilot.container().scroll_engine().scrollbar_opacity(), 1.0);
}

#[test]
fn test_revoking_scroll_mid_drag_cancels() {
    let mut pilot = Pilot::new(ten_row_list());
    pilot.press(50.0, 150.0);
    pilot.frame();
    pilot.move_to(50.0, 100.0);
    pilot.container_mut().set_scroll(Scroll::NONE);
    assert!(pilot.container().scroll_engine().is_idle());
    assert!(!pilot.release(50.0, 100.0));
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

#[test]
fn test_top_most_child_wins() {
    let container = Container::default()
        .with_bounds(0.0, 0.0, 100.0, 100.0)
        .with_child(Button::new("under").with_id("under").with_bounds(0.0, 0.0, 50.0, 50.0).with_z_index(1))
        .with_child(Button::new("over").with_id("over").with_bounds(10.0, 10.0, 50.0, 50.0).with_z_index(2));
    let mut pilot = Pilot::new(container);

    assert!(pilot.tap(20.0, 20.0));
    assert!(pilot.tap(5.0, 5.0));

    let clicks = |id: &str| {
        pilot
            .container()
            .find_control(id)
            .and_then(|c| c.downcast_ref::<Button>())
            .map(Button::clicks)
    };
    assert_eq!(clicks("over"), Some(1));
    assert_eq!(clicks("under"), Some(1));
}

#[test]
fn test_child_press_does_not_scroll() {
    let mut list = ten_row_list();
    list.insert_control(
        Button::new("pinned").with_id("pinned").with_size(100.0, 60.0).with_z_index(-1).boxed(),
        0,
    )
    .unwrap();
    let mut pilot = Pilot::new(list);
    pilot.drag((50.0, 30.0), (50.0, 10.0), Duration::from_millis(50), 2);
    assert_eq!(pilot.container().scroll_offset(), Vec2::ZERO);
    let pinned = pilot
        .container()
        .find_control("pinned")
        .and_then(|c| c.downcast_ref::<Button>())
        .unwrap();
    assert_eq!(pinned.clicks(), 1);
}

#[test]
fn test_secondary_contact_ignored_by_scroll() {
    let mut pilot = Pilot::new(ten_row_list());
    let touch = TouchInput {
        contact: 1,
        ..TouchInput::primary(TouchEvent::Press, 50.0, 50.0)
    };
    assert!(!pilot.container_mut().handle_input(InputEvent::Touch(touch)));
    assert!(!pilot.container().scroll_engine().is_dragging());
}

#[test]
fn test_keyboard_reaches_focused_check_box() {
    let mut menu = Container::load(MENU).unwrap();
    assert!(menu.focus("sound"));
    let mut pilot = Pilot::new(menu);
    assert!(pilot.key(Key::Char(' ')));

    let sound = pilot
        .container()
        .find_control("sound")
        .and_then(|c| c.downcast_ref::<CheckBox>())
        .unwrap();
    assert!(!sound.is_checked());
    assert_eq!(pilot.container().focused_id(), Some("sound"));
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

#[test]
fn test_indices_renumber_and_errors() {
    let mut list = ten_row_list();
    list.remove_control_at(3).unwrap();
    assert_eq!(list.control(3).unwrap().id(), Some("row4"));
    assert_eq!(list.child_count(), 9);
    assert_eq!(
        list.control(9).err(),
        Some(RegistryError::IndexOutOfRange { index: 9, len: 9 })
    );
    assert_eq!(
        list.insert_control(Label::new("x").boxed(), 11).err(),
        Some(RegistryError::IndexOutOfRange { index: 11, len: 9 })
    );

    let moved = list.remove_control("row0").unwrap();
    let mut other = Container::default();
    other.add_control(moved).unwrap();
    assert_eq!(other.control(0).unwrap().id(), Some("row0"));
}

// ---------------------------------------------------------------------------
// Declarative loading and drawing
// ---------------------------------------------------------------------------

#[test]
fn test_load_menu() {
    init_logging();
    let menu = Container::load(MENU).unwrap();
    assert_eq!(menu.core().id(), Some("menu"));
    assert_eq!(menu.layout_kind(), LayoutKind::Vertical);
    assert_eq!(menu.scroll(), Scroll::VERTICAL);
    assert_eq!(menu.child_count(), 3);
    let kinds: Vec<_> = menu.children().iter().map(|c| c.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            formkit::widget::ControlKind::Label,
            formkit::widget::ControlKind::CheckBox,
            formkit::widget::ControlKind::Button,
        ]
    );
}

#[test]
fn test_load_rejects_bad_scroll() {
    let err = Container::load("container c\n{\n  scroll = sideways\n}").unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidValue {
            key: "scroll".into(),
            value: "sideways".into(),
            expected: "one of none, horizontal, vertical, both".into(),
        }
    );
    assert!(Container::load("label l\n{\n}").is_err());
}

#[test]
fn test_scrolled_menu_draw_list() {
    let mut pilot = Pilot::new(Container::load(MENU).unwrap());
    assert_eq!(pilot.container().content_size(), Size::new(100.0, 120.0));
    pilot.container_mut().scroll_to(Vec2::new(0.0, 60.0));
    pilot.frame();

    insta::assert_snapshot!(describe(&pilot.draw()), @r#"
    bg 0,0 100x60
    clip 0,0 100x60
      bg 0,-60 100x40
      text 0,-60 100x40 "Settings"
      bg 0,-20 100x40
      text 0,-20 100x40 "[x] Sound"
      bg 0,20 100x40
      text 0,20 100x40 "OK"
    end clip
    scrollbar vertical 96,30 4x30 opacity 1.00
    "#);
    assert!(!pilot.container().is_dirty());
}

#[test]
fn test_load_ignores_trailing_comments() {
    let c = Container::load("container c\n{\n  scroll = vertical // enable scrolling\n  layout = flow // wrap\n}").unwrap();
    assert_eq!(c.scroll(), Scroll::VERTICAL);
    assert_eq!(c.layout_kind(), LayoutKind::Flow);
}
