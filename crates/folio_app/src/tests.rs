//! Shell-level tests: the page controllers working together

use crate::prelude::*;
use folio_core::events::event_types::TOUCH_START;

fn page() -> Portfolio {
    Portfolio::new(FolioConfig::default(), Catalog::builtin().unwrap()).unwrap()
}

#[test]
fn test_mount_starts_typewriter() {
    let mut page = page();
    assert!(page.is_mounted());
    assert_eq!(page.snapshot().visible_text, "");

    page.advance(149);
    assert_eq!(page.snapshot().visible_text, "");
    page.advance(1);
    assert_eq!(page.snapshot().visible_text, "S");
    page.advance(150);
    assert_eq!(page.snapshot().visible_text, "ST");
}

#[test]
fn test_wheel_is_clamped_and_consumed() {
    let mut page = page();
    assert_eq!(page.snapshot().max_offset, 2020.0);

    let mut event = Event::wheel(100.0);
    page.handle_event(&mut event);
    assert!(event.propagation_stopped);
    assert_eq!(page.snapshot().offset, 100.0);
    assert_eq!(page.snapshot().transform_x, -100.0);

    page.handle_event(&mut Event::wheel(5_000.0));
    assert_eq!(page.snapshot().offset, 2020.0);

    page.handle_event(&mut Event::wheel(-9_000.0));
    assert_eq!(page.snapshot().offset, 0.0);
}

#[test]
fn test_touch_drag_moves_strip() {
    let mut page = page();
    page.handle_event(&mut Event::touch_start(500.0));
    page.handle_event(&mut Event::touch_move(400.0));
    assert_eq!(page.snapshot().offset, 150.0);
    page.handle_event(&mut Event::touch_end());

    // Without a gesture start, moves are ignored
    page.handle_event(&mut Event::touch_move(0.0));
    assert_eq!(page.snapshot().offset, 150.0);
}

#[test]
fn test_modal_blocks_scroll_and_locks_page() {
    let mut page = page();
    page.open_project(2).unwrap();
    assert_eq!(page.selected_project().map(|p| p.title.as_str()), Some("Math Confidence"));

    let snapshot = page.snapshot();
    assert!(snapshot.modal_visible);
    assert!(snapshot.scroll_locked);

    let mut wheel = Event::wheel(300.0);
    page.handle_event(&mut wheel);
    assert!(wheel.propagation_stopped);
    page.handle_event(&mut Event::touch_start(500.0));
    page.handle_event(&mut Event::touch_move(100.0));
    assert_eq!(page.snapshot().offset, 0.0);
}

#[test]
fn test_close_releases_lock_after_fade() {
    let mut page = page();
    page.open_project(1).unwrap();
    page.next_image();
    page.next_image();
    assert_eq!(page.snapshot().image_index, 2);

    page.close_project();
    let snapshot = page.snapshot();
    assert!(!snapshot.modal_visible);
    assert_eq!(snapshot.modal_project, Some(1));
    assert!(snapshot.scroll_locked);

    page.advance(299);
    assert!(page.snapshot().scroll_locked);
    page.advance(1);
    let snapshot = page.snapshot();
    assert_eq!(snapshot.modal_project, None);
    assert!(!snapshot.scroll_locked);

    // Reopening starts from the first image
    page.open_project(1).unwrap();
    assert_eq!(page.snapshot().image_index, 0);
}

#[test]
fn test_unknown_project_is_rejected() {
    let mut page = page();
    assert!(matches!(
        page.open_project(99),
        Err(FolioError::UnknownProject(99))
    ));
    assert!(!page.snapshot().scroll_locked);
}

#[test]
fn test_image_navigation_requires_open_modal() {
    let mut page = page();
    page.next_image();
    assert_eq!(page.snapshot().image_index, 0);
    assert!(!page.select_image(1));

    page.open_project(1).unwrap();
    assert!(page.select_image(3));
    page.prev_image();
    assert_eq!(page.snapshot().image_index, 2);
}

#[test]
fn test_resize_switches_item_width_without_reclamp() {
    let mut page = page();
    page.handle_event(&mut Event::wheel(2_020.0));
    page.handle_event(&mut Event::resize(375.0, 812.0));

    let snapshot = page.snapshot();
    // 8 * 300 - 375 + 100
    assert_eq!(snapshot.max_offset, 2125.0);
    assert_eq!(snapshot.offset, 2020.0);
}

#[test]
fn test_menu_link_closes_menu() {
    let mut page = page();
    page.open_menu();
    assert!(page.snapshot().menu_open);

    let link = page.activate_menu_link(1).unwrap();
    assert_eq!(link.href, "mailto:is2587@nyu.edu");
    assert!(!page.snapshot().menu_open);
}

#[test]
fn test_teardown_stops_everything() {
    let mut page = page();
    page.advance(150);
    page.open_project(3).unwrap();
    page.teardown();

    assert!(!page.is_mounted());
    assert_eq!(page.scheduler().pending_count(), 0);
    assert!(!page.snapshot().scroll_locked);

    let text = page.snapshot().visible_text;
    page.advance(10_000);
    assert_eq!(page.snapshot().visible_text, text);

    let mut touch = Event::touch_start(10.0);
    assert_eq!(touch.event_type, TOUCH_START);
    page.handle_event(&mut touch);
    page.handle_event(&mut Event::touch_move(0.0));
    assert_eq!(page.snapshot().offset, 0.0);
}

#[test]
fn test_interaction_after_teardown_is_inert() {
    let mut page = page();
    page.teardown();

    assert!(matches!(page.open_project(1), Err(FolioError::NotMounted)));
    page.close_project();
    page.open_menu();
    assert!(page.activate_menu_link(0).is_none());
    page.next_image();

    let snapshot = page.snapshot();
    assert_eq!(snapshot.modal_project, None);
    assert!(!snapshot.scroll_locked);
    assert!(!snapshot.menu_open);
    assert_eq!(page.scheduler().pending_count(), 0);

    page.teardown();
    assert!(!page.document().is_locked());
}

#[test]
fn test_drop_releases_document_lock() {
    let mut page = page();
    page.open_project(5).unwrap();
    let document = page.document().clone();
    assert!(document.is_locked());
    drop(page);
    assert!(!document.is_locked());
}
