// Integration tests for the overlay session state machine driven
// through the App controller.

mod common;

use common::{page_with_rects, test_app, MockActivator, MockRenderer, RendererCall};
use keyhop::geometry::{Point, Rect};
use keyhop::highlight::HighlightFilter;
use keyhop::input::Command;
use keyhop::navigator::Direction;
use keyhop::page::Page;

/// Three clickables: top-left (selected on open), below it, and to the
/// right. The viewport center (40,12) is nearest to the top-left one.
fn three_box_page() -> Page {
    page_with_rects(&[
        Rect::new(10.0, 8.0, 20.0, 3.0),
        Rect::new(10.0, 18.0, 20.0, 3.0),
        Rect::new(54.0, 8.0, 20.0, 3.0),
    ])
}

#[test]
fn toggle_opens_with_a_selection_near_the_center() {
    let (mut app, _request_rx, _message_tx) = test_app(three_box_page());
    let mut renderer = MockRenderer::new();
    let mut activator = MockActivator::new();

    app.execute_command(Command::ToggleOverlay, &mut renderer, &mut activator)
        .unwrap();

    assert!(app.session.is_visible());
    assert_eq!(renderer.calls[0], RendererCall::Show(3));
    assert_eq!(renderer.last_selected(), Some(0), "top-left box is nearest to center");
}

#[test]
fn empty_page_refuses_to_open() {
    let (mut app, _request_rx, _message_tx) = test_app(page_with_rects(&[]));
    let mut renderer = MockRenderer::new();
    let mut activator = MockActivator::new();

    app.execute_command(Command::ToggleOverlay, &mut renderer, &mut activator)
        .unwrap();

    assert!(!app.session.is_visible(), "no clickables means no session");
    assert!(renderer.calls.is_empty(), "renderer untouched");
    assert!(app.status.is_some(), "user gets a status notice");
}

#[test]
fn directional_keys_are_noops_while_hidden() {
    let (mut app, _request_rx, _message_tx) = test_app(three_box_page());
    let mut renderer = MockRenderer::new();
    let mut activator = MockActivator::new();

    app.execute_command(Command::Move(Direction::Down), &mut renderer, &mut activator)
        .unwrap();

    assert!(!app.session.is_visible());
    assert!(renderer.calls.is_empty());
}

#[test]
fn moving_restyles_old_and_new_selection() {
    let (mut app, _request_rx, _message_tx) = test_app(three_box_page());
    let mut renderer = MockRenderer::new();
    let mut activator = MockActivator::new();

    app.execute_command(Command::ToggleOverlay, &mut renderer, &mut activator)
        .unwrap();
    app.execute_command(Command::Move(Direction::Down), &mut renderer, &mut activator)
        .unwrap();

    assert_eq!(app.session.selected(), Some(1));
    assert!(renderer.calls.contains(&RendererCall::Unselect(0)));
    assert_eq!(renderer.last_selected(), Some(1));
}

#[test]
fn moving_into_an_empty_direction_stays_put() {
    let (mut app, _request_rx, _message_tx) = test_app(three_box_page());
    let mut renderer = MockRenderer::new();
    let mut activator = MockActivator::new();

    app.execute_command(Command::ToggleOverlay, &mut renderer, &mut activator)
        .unwrap();
    let calls_before = renderer.calls.len();

    app.execute_command(Command::Move(Direction::Up), &mut renderer, &mut activator)
        .unwrap();

    assert_eq!(app.session.selected(), Some(0), "selection unchanged");
    assert_eq!(renderer.calls.len(), calls_before, "no restyle calls");
}

#[test]
fn toggle_while_visible_hides_and_clears_selection() {
    let (mut app, _request_rx, _message_tx) = test_app(three_box_page());
    let mut renderer = MockRenderer::new();
    let mut activator = MockActivator::new();

    app.execute_command(Command::ToggleOverlay, &mut renderer, &mut activator)
        .unwrap();
    app.execute_command(Command::ToggleOverlay, &mut renderer, &mut activator)
        .unwrap();

    assert!(!app.session.is_visible());
    assert_eq!(app.session.selected(), None);
    assert_eq!(renderer.calls.last(), Some(&RendererCall::Hide));
}

#[test]
fn reopening_restores_the_users_place() {
    let (mut app, _request_rx, _message_tx) = test_app(three_box_page());
    let mut renderer = MockRenderer::new();
    let mut activator = MockActivator::new();

    // Open, move down, close
    app.execute_command(Command::ToggleOverlay, &mut renderer, &mut activator)
        .unwrap();
    app.execute_command(Command::Move(Direction::Down), &mut renderer, &mut activator)
        .unwrap();
    app.execute_command(Command::ToggleOverlay, &mut renderer, &mut activator)
        .unwrap();

    assert_eq!(
        app.session.last_selected_position(),
        Some(Point::new(20.0, 19.5)),
        "central point of the second box is remembered"
    );

    // Reopen: the remembered position wins over the viewport center
    app.execute_command(Command::ToggleOverlay, &mut renderer, &mut activator)
        .unwrap();
    assert_eq!(app.session.selected(), Some(1));
}

#[test]
fn session_keeps_its_snapshot_when_the_page_changes() {
    let (mut app, _request_rx, _message_tx) = test_app(three_box_page());
    let mut renderer = MockRenderer::new();
    let mut activator = MockActivator::new();

    app.execute_command(Command::ToggleOverlay, &mut renderer, &mut activator)
        .unwrap();
    let snapshot: Vec<_> = app.session.highlights().to_vec();

    // The page reflows underneath the open session
    app.page = Page::sample(HighlightFilter::default());

    assert_eq!(
        app.session.highlights(),
        snapshot.as_slice(),
        "open session keeps the rects measured at open time"
    );
}

#[test]
fn cancel_hides_the_overlay() {
    let (mut app, _request_rx, _message_tx) = test_app(three_box_page());
    let mut renderer = MockRenderer::new();
    let mut activator = MockActivator::new();

    app.execute_command(Command::ToggleOverlay, &mut renderer, &mut activator)
        .unwrap();
    app.execute_command(Command::Cancel, &mut renderer, &mut activator)
        .unwrap();

    assert!(!app.session.is_visible());
    assert_eq!(renderer.calls.last(), Some(&RendererCall::Hide));
}
