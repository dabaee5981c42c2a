//! End-to-end carousel behaviour through the public `ui::carousel` API, the
//! way the feature slider drives it: configuration from `site.toml`, arrow
//! and keyboard commands from the adapter, resizes in between.

use std::cell::RefCell;
use std::rc::Rc;

use ui::carousel::adapter::{self, ArrowSide, NavCommand, SwipeDirection};
use ui::carousel::{CarouselConfig, NavigationController};
use ui::core::config::SiteConfig;
use ui::core::content::fund_items;

const SITE_TOML: &str = include_str!("../site.toml");

fn fund_slider(width: u32, rtl: bool) -> NavigationController {
    let site = SiteConfig::from_toml(SITE_TOML).unwrap();
    let config = CarouselConfig::new(fund_items().len(), site.slider.breakpoints())
        .rtl(rtl)
        .viewport_width(width);
    NavigationController::new(config).unwrap()
}

fn press(nav: &mut NavigationController, side: ArrowSide) -> bool {
    let arrow = adapter::arrows(nav)
        .into_iter()
        .find(|arrow| arrow.side == side)
        .unwrap();
    if arrow.disabled {
        return false;
    }
    adapter::apply(nav, arrow.command)
}

#[test]
fn desktop_funds_walk_three_pages_with_the_right_arrow() {
    let mut nav = fund_slider(1280, false);
    assert_eq!(nav.items_per_view(), 3);
    assert_eq!(nav.page_count(), 3);

    assert!(press(&mut nav, ArrowSide::Right));
    assert!(press(&mut nav, ArrowSide::Right));
    assert_eq!(nav.current_slide(), 6);
    assert!(nav.is_last_page());
    assert!(!press(&mut nav, ArrowSide::Right));
    assert_eq!(nav.page_map().page_len(nav.current_page()), 2);
}

#[test]
fn arabic_funds_walk_the_same_pages_with_the_left_arrow() {
    let mut ltr = fund_slider(1280, false);
    let mut rtl = fund_slider(1280, true);

    let mut ltr_pages = vec![ltr.current_page()];
    while press(&mut ltr, ArrowSide::Right) {
        ltr_pages.push(ltr.current_page());
    }
    let mut rtl_pages = vec![rtl.current_page()];
    while press(&mut rtl, ArrowSide::Left) {
        rtl_pages.push(rtl.current_page());
    }

    assert_eq!(ltr_pages, vec![0, 1, 2]);
    assert_eq!(ltr_pages, rtl_pages);
    // At the end the visual "forward" arrow is disabled on each side.
    let rtl_arrows = adapter::arrows(&rtl);
    assert!(rtl_arrows[0].disabled);
    assert!(!rtl_arrows[1].disabled);
}

#[test]
fn keyboard_and_swipes_follow_the_arrows() {
    let mut nav = fund_slider(1280, true);
    let key = adapter::command_for_key("ArrowLeft", &nav).unwrap();
    assert_eq!(key, NavCommand::Next);
    assert!(adapter::apply(&mut nav, key));
    assert_eq!(nav.current_page(), 1);

    let swipe = adapter::command_for_swipe(SwipeDirection::Left, nav.is_rtl());
    assert_eq!(swipe, NavCommand::Prev);
    assert!(adapter::apply(&mut nav, swipe));
    assert!(nav.is_first_page());

    let end = adapter::command_for_key("End", &nav).unwrap();
    adapter::apply(&mut nav, end);
    assert!(nav.is_last_page());
}

#[test]
fn shrinking_the_window_keeps_the_slide_and_repaginates() {
    let mut nav = fund_slider(1280, false);
    nav.go_to_page(2);
    assert_eq!(nav.current_slide(), 6);

    nav.set_viewport_width(800);
    assert_eq!(nav.items_per_view(), 2);
    assert_eq!(nav.page_count(), 4);
    assert_eq!(nav.current_slide(), 6);
    assert_eq!(nav.current_page(), 3);
    assert!(nav.is_last_page());

    nav.set_viewport_width(375);
    assert_eq!(nav.items_per_view(), 1);
    assert_eq!(nav.page_count(), 8);
    assert_eq!(nav.current_page(), 6);
    assert!(!nav.is_last_page());
    assert_eq!(adapter::dots(&nav).iter().filter(|dot| dot.active).count(), 1);
}

#[test]
fn listener_sees_every_move_once() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut nav = fund_slider(1280, false);
    let sink = Rc::clone(&seen);
    nav.set_listener(Rc::new(move |slide| sink.borrow_mut().push(slide)));

    for dot in adapter::dots(&nav) {
        adapter::apply(&mut nav, dot.command());
    }
    // Page 0 was already active; no notification for it.
    assert_eq!(*seen.borrow(), vec![3, 6]);

    adapter::apply(&mut nav, NavCommand::MoveToSlide(100));
    assert_eq!(*seen.borrow(), vec![3, 6, 7]);
}

#[test]
fn single_page_sections_hide_controls() {
    let site = SiteConfig::from_toml(SITE_TOML).unwrap();
    let nav = NavigationController::new(
        CarouselConfig::new(3, site.slider.breakpoints()).viewport_width(1280),
    )
    .unwrap();
    assert!(!adapter::controls_visible(&nav));
    assert!(nav.is_first_page() && nav.is_last_page());
}
