use super::*;

fn sections() -> Vec<Section> {
    ["home", "about", "skills", "projects"]
        .into_iter()
        .map(|id| Section::new(id, id))
        .collect()
}

const TOPS: [f64; 4] = [0.0, 600.0, 1200.0, 1800.0];

fn nav() -> NavState {
    NavState::new(sections(), NavConfig::default())
}

// =============================================================
// active_index
// =============================================================

#[test]
fn active_index_picks_last_section_above_line() {
    assert_eq!(active_index(&TOPS, 0.0, 80.0), Some(0));
    assert_eq!(active_index(&TOPS, 519.0, 80.0), Some(0));
    assert_eq!(active_index(&TOPS, 520.0, 80.0), Some(1));
    assert_eq!(active_index(&TOPS, 5000.0, 80.0), Some(3));
}

#[test]
fn active_index_is_none_above_first_section() {
    assert_eq!(active_index(&[200.0, 800.0], 0.0, 80.0), None);
    assert_eq!(active_index(&[], 100.0, 80.0), None);
}

#[test]
fn missing_sections_never_become_active() {
    let tops = [0.0, f64::INFINITY, 1200.0];
    assert_eq!(active_index(&tops, 700.0, 80.0), Some(0));
    assert_eq!(active_index(&tops, 1200.0, 80.0), Some(2));
}

// =============================================================
// update_scroll
// =============================================================

#[test]
fn update_scroll_reports_change_only_once() {
    let mut nav = nav();
    let first = nav.update_scroll(&TOPS, ScrollMetrics::at_offset(700.0));
    assert_eq!(
        first.active,
        Some(ActiveChange {
            previous: None,
            current: Some(1)
        })
    );
    assert!(nav.is_active("about"));

    let second = nav.update_scroll(&TOPS, ScrollMetrics::at_offset(750.0));
    assert_eq!(second.active, None);
    assert!(second.is_empty());
}

#[test]
fn update_scroll_tracks_header_and_back_to_top() {
    let mut nav = nav();
    let update = nav.update_scroll(&TOPS, ScrollMetrics::at_offset(60.0));
    assert_eq!(update.scrolled, Some(true));
    assert_eq!(update.back_to_top, None);

    let update = nav.update_scroll(&TOPS, ScrollMetrics::at_offset(500.0));
    assert_eq!(update.scrolled, None);
    assert_eq!(update.back_to_top, Some(true));
    assert!(nav.shows_back_to_top());

    let update = nav.update_scroll(&TOPS, ScrollMetrics::at_offset(0.0));
    assert_eq!(update.scrolled, Some(false));
    assert_eq!(update.back_to_top, Some(false));
}

#[test]
fn page_bottom_activates_last_section() {
    let mut nav = nav();
    let metrics = ScrollMetrics {
        offset: 1500.0,
        viewport_height: 900.0,
        document_height: 2400.0,
    };
    nav.update_scroll(&TOPS, metrics);
    assert!(nav.is_active("projects"));
}

#[test]
fn scrolling_back_above_first_section_clears_active() {
    let mut nav = NavState::new(sections(), NavConfig::default());
    let tops = [300.0, 900.0, 1500.0, 2100.0];
    nav.update_scroll(&tops, ScrollMetrics::at_offset(400.0));
    assert!(nav.is_active("home"));
    let update = nav.update_scroll(&tops, ScrollMetrics::at_offset(0.0));
    assert_eq!(
        update.active,
        Some(ActiveChange {
            previous: Some(0),
            current: None
        })
    );
    assert!(nav.active().is_none());
}

// =============================================================
// Drawer
// =============================================================

#[test]
fn toggle_opens_and_closes() {
    let mut nav = nav();
    assert!(nav.handle_drawer(DrawerEvent::Toggle));
    assert!(nav.is_drawer_open());
    assert!(nav.handle_drawer(DrawerEvent::Toggle));
    assert_eq!(nav.drawer(), DrawerState::Closed);
}

#[test]
fn dismiss_events_close_open_drawer() {
    for event in [DrawerEvent::OutsideClick, DrawerEvent::Escape, DrawerEvent::LinkClicked] {
        let mut nav = nav();
        nav.handle_drawer(DrawerEvent::Toggle);
        assert!(nav.handle_drawer(event), "{event:?} should close");
        assert!(!nav.is_drawer_open());
    }
}

#[test]
fn dismiss_events_on_closed_drawer_are_noops() {
    let mut nav = nav();
    for event in [
        DrawerEvent::OutsideClick,
        DrawerEvent::Escape,
        DrawerEvent::LinkClicked,
        DrawerEvent::Resized { width: 1200.0 },
    ] {
        assert!(!nav.handle_drawer(event));
    }
}

#[test]
fn resize_closes_only_when_crossing_breakpoint() {
    let mut nav = nav();
    nav.handle_drawer(DrawerEvent::Toggle);
    assert!(!nav.handle_drawer(DrawerEvent::Resized { width: 500.0 }));
    assert!(nav.is_drawer_open());
    assert!(nav.handle_drawer(DrawerEvent::Resized { width: 768.0 }));
    assert!(!nav.is_drawer_open());
}

// =============================================================
// Anchors
// =============================================================

#[test]
fn scroll_target_subtracts_header_and_clamps() {
    let nav = nav();
    assert_eq!(nav.scroll_target(600.0), 520.0);
    assert_eq!(nav.scroll_target(10.0), 0.0);
}

#[test]
fn section_href_is_anchor() {
    assert_eq!(Section::new("contact", "Contact").href(), "#contact");
}
