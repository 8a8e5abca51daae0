//! Integration test: drive a `Portfolio` against the simulated portfolio page
//! and check what ends up on screen after clicks, keys, scrolls and timers.

use folio_core::{FolioConfig, Key, KeyPress, PageEvent, PageHost, PointerAction, SimPage, SimSession};
use folio_protocol::{ClassToken, DomCommand, Part, SectionId, StyleProp, Stylesheet, Target, Widget};

fn session() -> SimSession {
    SimSession::start(SimPage::portfolio(800.0), FolioConfig::default())
}

fn key(c: char) -> PageEvent {
    PageEvent::Key(KeyPress::new(Key::Char(c)))
}

fn link(id: &str) -> Target {
    Target::NavLink(SectionId::from(id))
}

#[test]
fn startup_marks_home_active_and_mounts_chrome() {
    let s = session();
    assert!(s.page.has_class(&link("home"), ClassToken::Active));
    assert_eq!(
        s.page.style(&Target::ProgressBar, StyleProp::Width),
        Some("0%")
    );
    for widget in [Widget::ProgressBar, Widget::SectionIndicator, Widget::ScrollTopButton] {
        assert!(
            s.page.is_mounted(|w| *w == widget),
            "{widget:?} should be mounted at startup"
        );
    }
    assert!(s.page.is_mounted(|w| matches!(w, Widget::NavPreview { .. })));
    assert!(s.portfolio.typing().is_some());
    assert!(!s.page.is_mounted(|w| *w == Widget::Stylesheet(Stylesheet::ReducedMotion)));
}

#[test]
fn keyboard_shortcut_scrolls_activates_and_records_history() {
    let mut s = session();
    s.dispatch(key('3'));
    assert!(s.portfolio.wants_frame(), "shortcut should start a smooth scroll");
    s.advance(1000.0);

    assert_eq!(s.page.scroll_y(), 1520.0);
    assert!(s.page.has_class(&link("about"), ClassToken::Active));
    assert!(!s.page.has_class(&link("home"), ClassToken::Active));
    assert_eq!(s.page.history().last().map(|id| id.as_str()), Some("about"));
    assert_eq!(
        s.page.style(&link("about"), StyleProp::Transform),
        Some("scale(1)"),
        "link pulse should have settled"
    );
}

#[test]
fn shortcuts_are_ignored_inside_text_fields() {
    let mut s = session();
    s.dispatch(PageEvent::Key(KeyPress::in_text_field(Key::Char('3'))));
    s.advance(800.0);
    assert_eq!(s.page.scroll_y(), 0.0);
    assert!(s.page.history().is_empty());
}

#[test]
fn nav_link_click_ripples_and_scrolls_with_link_offset() {
    let mut s = session();
    let links = s.page.query_all(".nav-link");
    let skills = links[4];
    assert_eq!(s.page.anchor_of(skills).as_deref(), Some("skills"));

    s.dispatch(PageEvent::NavLinkClick(skills));
    assert!(s.page.is_mounted(|w| matches!(w, Widget::Ripple { parent, .. } if *parent == skills)));

    s.advance(700.0);
    assert_eq!(s.page.scroll_y(), 3540.0);
    assert!(!s.page.is_mounted(|w| matches!(w, Widget::Ripple { .. })));
    assert!(s.page.has_class(&link("skills"), ClassToken::Active));
    assert_eq!(s.page.history().last().map(|id| id.as_str()), Some("skills"));
}

#[test]
fn overview_card_click_flashes_then_navigates() {
    let mut s = session();
    let card = s.page.query_all(".overview-card")[0];
    s.dispatch(PageEvent::OverviewCardClick(card));
    assert_eq!(
        s.page.style(&Target::Node(card), StyleProp::Transform),
        Some("scale(0.98)")
    );

    s.advance(700.0);
    assert_eq!(s.page.style(&Target::Node(card), StyleProp::Transform), None);
    assert_eq!(s.page.scroll_y(), 1540.0);
    assert!(s.page.has_class(&link("about"), ClassToken::Active));
}

#[test]
fn hamburger_staggers_links_and_link_click_closes_menu() {
    let mut s = session();
    s.dispatch(PageEvent::HamburgerClick);
    assert!(s.page.has_class(&Target::Hamburger, ClassToken::Active));
    assert!(s.page.has_class(&Target::NavMenu, ClassToken::Active));
    assert_eq!(s.page.style(&link("home"), StyleProp::Opacity), Some("1"));
    assert_eq!(s.page.style(&link("contact"), StyleProp::Opacity), Some("0"));

    s.advance(300.0);
    assert_eq!(s.page.style(&link("contact"), StyleProp::Opacity), Some("1"));
    assert_eq!(
        s.page.style(&link("contact"), StyleProp::Transform),
        Some("translateY(0)")
    );

    let about = s.page.query_all(".nav-link")[2];
    s.dispatch(PageEvent::NavLinkClick(about));
    assert!(!s.page.has_class(&Target::NavMenu, ClassToken::Active));
    assert!(!s.page.has_class(&Target::Hamburger, ClassToken::Active));
}

#[test]
fn announcement_runs_to_completion() {
    let mut s = session();
    s.dispatch(PageEvent::WipClick);
    assert!(s.page.is_mounted(|w| *w == Widget::Backdrop));
    assert!(s.page.is_mounted(|w| *w == Widget::Overlay));
    assert_eq!(s.page.style(&Target::Backdrop, StyleProp::Opacity), Some("1"));

    s.advance(2600.0);
    assert_eq!(s.page.text(&Target::OverlayText), Some("Work in Progress"));

    s.advance(2000.0);
    assert!(!s.page.is_mounted(|w| matches!(w, Widget::Backdrop | Widget::Overlay)));
    assert!(!s.portfolio.modal().is_open());
}

#[test]
fn retriggered_announcement_keeps_a_single_overlay() {
    let mut s = session();
    s.dispatch(PageEvent::WipClick);
    s.advance(1000.0);
    s.dispatch(PageEvent::WipClick);

    let backdrops = s
        .page
        .mounted()
        .iter()
        .filter(|w| **w == Widget::Backdrop)
        .count();
    assert_eq!(backdrops, 1);

    // The first run's cleanup would fall at 4500 and must not fire.
    s.advance(3600.0);
    assert!(s.page.is_mounted(|w| *w == Widget::Overlay));

    s.advance(1000.0);
    assert!(!s.page.is_mounted(|w| *w == Widget::Overlay));
}

#[test]
fn konami_code_plays_rainbow_once() {
    let mut s = session();
    let keys = [
        Key::Up,
        Key::Up,
        Key::Down,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::Left,
        Key::Right,
        Key::Char('b'),
        Key::Char('a'),
    ];
    for k in keys {
        s.dispatch(PageEvent::Key(KeyPress::new(k)));
    }
    assert_eq!(
        s.page.style(&Target::Body, StyleProp::Animation),
        Some("rainbow 1s ease-in-out")
    );
    s.advance(1100.0);
    assert_eq!(s.page.style(&Target::Body, StyleProp::Animation), None);
}

#[test]
fn reduced_motion_jumps_instantly() {
    let page = SimPage::portfolio(800.0).with_reduced_motion();
    let mut s = SimSession::start(page, FolioConfig::default());
    assert!(s.page.is_mounted(|w| *w == Widget::Stylesheet(Stylesheet::ReducedMotion)));

    s.dispatch(key('5'));
    assert!(!s.portfolio.wants_frame());
    assert_eq!(s.page.scroll_y(), 3520.0);
}

#[test]
fn header_hides_on_scroll_down_and_returns_on_scroll_up() {
    let mut s = session();
    s.scroll_to(600.0);
    assert!(s.page.has_class(&Target::Header, ClassToken::Scrolled));
    assert!(s.page.has_class(&Target::Header, ClassToken::NavHidden));

    s.advance(50.0);
    s.scroll_to(500.0);
    assert!(!s.page.has_class(&Target::Header, ClassToken::NavHidden));
    assert!(s.page.has_class(&Target::Header, ClassToken::Scrolled));

    s.advance(50.0);
    s.scroll_to(20.0);
    assert!(!s.page.has_class(&Target::Header, ClassToken::Scrolled));
}

#[test]
fn progress_and_section_indicator_follow_scroll() {
    let mut s = session();
    s.scroll_to(1600.0);
    assert_eq!(s.page.text(&Target::SectionIndicator), Some("About Me"));
    assert_eq!(
        s.page.style(&Target::SectionIndicator, StyleProp::Opacity),
        Some("1")
    );

    s.advance(50.0);
    s.scroll_to(3000.0);
    assert_eq!(
        s.page.style(&Target::ProgressBar, StyleProp::Width),
        Some("50%")
    );
    assert_eq!(s.page.text(&Target::SectionIndicator), Some("Experience"));
}

#[test]
fn back_to_top_appears_and_returns_home() {
    let mut s = session();
    s.scroll_to(1000.0);
    assert!(s.page.has_class(&Target::ScrollTopButton, ClassToken::Visible));

    s.dispatch(PageEvent::ScrollTopClick);
    s.advance(700.0);
    assert_eq!(s.page.scroll_y(), 0.0);
    assert!(!s.page.has_class(&Target::ScrollTopButton, ClassToken::Visible));
    assert!(s.page.has_class(&link("home"), ClassToken::Active));
}

#[test]
fn scroll_indicator_targets_about() {
    let mut s = session();
    s.dispatch(PageEvent::ScrollIndicatorClick);
    s.advance(900.0);
    assert_eq!(s.page.scroll_y(), 1540.0);
}

#[test]
fn keyboard_hints_show_after_startup_then_fade() {
    let mut s = session();
    s.scroll_to(500.0);
    assert!(!s.page.is_mounted(|w| matches!(w, Widget::KeyboardHints { .. })));

    s.advance(2150.0);
    assert!(s.page.is_mounted(|w| matches!(w, Widget::KeyboardHints { .. })));
    assert_eq!(
        s.page.style(&Target::KeyboardHints, StyleProp::Opacity),
        Some("1")
    );

    s.advance(3250.0);
    assert!(!s.page.is_mounted(|w| matches!(w, Widget::KeyboardHints { .. })));
}

#[test]
fn scrolling_marker_clears_when_scroll_goes_idle() {
    let mut s = session();
    s.scroll_to(400.0);
    assert!(s.page.has_class(&Target::Body, ClassToken::IsScrolling));
    s.advance(200.0);
    assert!(!s.page.has_class(&Target::Body, ClassToken::IsScrolling));
}

#[test]
fn resize_rediscovers_layout_after_debounce() {
    let mut s = session();
    s.page.set_window_height(400.0);
    s.dispatch(PageEvent::Resize);
    assert_eq!(s.portfolio.nav().metrics().window_height, 800.0);
    s.advance(200.0);
    assert_eq!(s.portfolio.nav().metrics().window_height, 400.0);
}

#[test]
fn typing_effect_writes_first_phrase() {
    let mut s = session();
    s.advance(2000.0);
    assert_eq!(s.page.text(&Target::Subtitle), None);

    s.advance(4400.0);
    let first = s.portfolio.config().typing.phrases[0].clone();
    assert_eq!(s.page.text(&Target::Subtitle), Some(first.as_str()));
}

#[test]
fn card_hover_lifts_small_items_in_order() {
    let mut s = session();
    let card = s.page.query_all(".overview-card")[0];
    s.dispatch(PageEvent::Pointer {
        node: card,
        action: PointerAction::Enter,
    });
    s.advance(100.0);
    let third = Target::Part {
        of: card,
        part: Part::SmallItem,
        index: Some(2),
    };
    assert_eq!(
        s.page.style(&third, StyleProp::Transform),
        Some("translateY(-2px) scale(1.05)")
    );
}

#[test]
fn scrolled_content_reveals_once() {
    let mut s = session();
    s.scroll_to(1000.0);
    s.advance(1200.0);
    assert_eq!(s.page.revealed(".overview-card"), 4);
    let revealed = s.portfolio.reveal().revealed_count();
    assert!(revealed > 0);

    let now = s.now();
    let cmds = s.portfolio.force_reveal(now, &s.page);
    assert!(
        !cmds
            .iter()
            .any(|c| matches!(c, DomCommand::AddClass { class: ClassToken::Animate, .. })),
        "a second sweep over the same viewport should reveal nothing new"
    );
    assert_eq!(s.portfolio.reveal().revealed_count(), revealed);

    let rest = s.portfolio.reveal_all(now);
    s.page.apply(rest);
    s.advance(5000.0);
    assert_eq!(
        s.portfolio.reveal().revealed_count(),
        s.portfolio.reveal().len()
    );
    assert_eq!(s.page.revealed(".contact-item"), 3);
}

#[test]
fn missing_components_do_not_stop_the_rest() {
    let page = SimPage::new(800.0).section("home", 900.0).section("about", 900.0);
    let mut s = SimSession::start(page, FolioConfig::default());
    assert!(s.portfolio.typing().is_none());
    assert!(s.portfolio.interactive_nodes().is_empty());

    s.dispatch(key('2'));
    s.advance(700.0);
    assert_eq!(s.page.scroll_y(), 0.0, "absent section should be ignored");

    s.dispatch(key('3'));
    s.advance(700.0);
    assert_eq!(s.page.scroll_y(), 820.0);
}
