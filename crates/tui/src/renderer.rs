use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_core::nav::{ProgressBand, display_name};
use folio_core::{FolioConfig, Key, KeyPress, PageEvent, PageHost, SimPage, SimSession};
use folio_protocol::{ClassToken, NodeId, StyleProp, Target};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
};
use tracing::debug;

/// Height of the simulated browser window in CSS pixels.
pub const WINDOW_HEIGHT: f64 = 800.0;

const SCROLL_STEP: f64 = 60.0;

/// Elements drawn in the viewport pane, with their labels.
const LANDMARKS: &[(&str, &str)] = &[
    (".hero-subtitle", "subtitle"),
    (".scroll-indicator", "scroll indicator"),
    (".section-title", "title"),
    (".section-subtitle", "subtitle"),
    (".overview-card", "overview card"),
    (".about-text", "about text"),
    (".highlight-item", "highlight"),
    (".timeline-item", "timeline item"),
    (".skill-category", "skill category"),
    (".project-card", "project card"),
    (".education-item", "education item"),
    (".contact-item", "contact item"),
    (".social-link-large", "social link"),
];

fn band_color(band: ProgressBand) -> Color {
    match band {
        ProgressBand::Early => Color::Rgb(139, 92, 246),
        ProgressBand::Middle => Color::Rgb(168, 85, 247),
        ProgressBand::Late => Color::Rgb(192, 132, 252),
        ProgressBand::End => Color::Rgb(168, 85, 247),
    }
}

/// Screen regions that respond to a mouse click, rebuilt every frame.
#[derive(Debug, Default)]
struct HitMap {
    regions: Vec<(Rect, PageEvent)>,
}

impl HitMap {
    fn at(&self, column: u16, row: u16) -> Option<PageEvent> {
        self.regions
            .iter()
            .find(|(r, _)| {
                column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
            })
            .map(|(_, event)| event.clone())
    }
}

pub fn run(page: SimPage, config: FolioConfig) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, SimSession::start(page, config));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    mut session: SimSession,
) -> Result<()> {
    let mut last = Instant::now();
    let mut hits = HitMap::default();

    loop {
        let elapsed = last.elapsed();
        last = Instant::now();
        session.advance(elapsed.as_secs_f64() * 1000.0);

        terminal.draw(|frame| hits = draw(frame, &session))?;

        if !event::poll(Duration::from_millis(16))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('j') => scroll_by(&mut session, SCROLL_STEP),
                KeyCode::Char('k') => scroll_by(&mut session, -SCROLL_STEP),
                KeyCode::PageDown => scroll_by(&mut session, WINDOW_HEIGHT * 0.9),
                KeyCode::PageUp => scroll_by(&mut session, -WINDOW_HEIGHT * 0.9),
                KeyCode::Char('w') => session.dispatch(PageEvent::WipClick),
                KeyCode::Char('m') => session.dispatch(PageEvent::HamburgerClick),
                KeyCode::Char('t') => session.dispatch(PageEvent::ScrollTopClick),
                KeyCode::Char('r') => {
                    let now = session.now();
                    let cmds = session.portfolio.force_reveal(now, &session.page);
                    session.page.apply(cmds);
                }
                KeyCode::Char('R') => {
                    let now = session.now();
                    let cmds = session.portfolio.reveal_all(now);
                    session.page.apply(cmds);
                }
                KeyCode::Up => press(&mut session, Key::Up),
                KeyCode::Down => press(&mut session, Key::Down),
                KeyCode::Left => press(&mut session, Key::Left),
                KeyCode::Right => press(&mut session, Key::Right),
                KeyCode::Char(c) => press(&mut session, Key::Char(c.to_ascii_lowercase())),
                _ => {}
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => scroll_by(&mut session, SCROLL_STEP),
                MouseEventKind::ScrollUp => scroll_by(&mut session, -SCROLL_STEP),
                MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(event) = hits.at(mouse.column, mouse.row) {
                        debug!(?event, "click");
                        session.dispatch(event);
                    }
                }
                _ => {}
            },
            Event::Resize(..) => session.dispatch(PageEvent::Resize),
            _ => {}
        }
    }
    Ok(())
}

fn press(session: &mut SimSession, key: Key) {
    session.dispatch(PageEvent::Key(KeyPress::new(key)));
}

fn scroll_by(session: &mut SimSession, delta: f64) {
    let metrics = session.page.metrics();
    let y = (metrics.scroll_y + delta).clamp(0.0, metrics.max_scroll());
    session.scroll_to(y);
}

fn draw(frame: &mut Frame, session: &SimSession) -> HitMap {
    let area = frame.area();
    let mut hits = HitMap::default();
    if area.height < 6 || area.width < 40 {
        frame.render_widget(Paragraph::new("terminal too small"), area);
        return hits;
    }

    draw_header(frame, session, Rect::new(0, 0, area.width, 1), &mut hits);
    draw_progress(frame, session, Rect::new(0, 1, area.width, 1));

    let body = Rect::new(0, 2, area.width, area.height.saturating_sub(3));
    let outline_width = 24u16.min(body.width / 3);
    draw_outline(frame, session, Rect::new(body.x, body.y, outline_width, body.height));
    draw_viewport(
        frame,
        session,
        Rect::new(outline_width, body.y, body.width - outline_width, body.height),
        &mut hits,
    );

    draw_footer(frame, session, Rect::new(0, area.height - 1, area.width, 1));
    draw_announcement(frame, session, area);
    hits
}

fn draw_header(frame: &mut Frame, session: &SimSession, area: Rect, hits: &mut HitMap) {
    let page = &session.page;
    if page.has_class(&Target::Header, ClassToken::NavHidden) {
        let hidden = Paragraph::new(" \u{25b2} header hidden, scroll up to show")
            .style(Style::default().fg(Color::DarkGray).bg(Color::Black));
        frame.render_widget(hidden, area);
        return;
    }

    let bg = if page.has_class(&Target::Header, ClassToken::Scrolled) {
        Color::Rgb(45, 27, 61)
    } else {
        Color::Black
    };
    let rainbow = page.style(&Target::Body, StyleProp::Animation).is_some();
    let brand = if rainbow { " \u{1f308} folio " } else { " folio " };

    let mut spans = vec![Span::styled(
        brand,
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];
    let mut x = area.x + brand.chars().count() as u16;
    let links = page.query_all(".nav-link");
    for link in links {
        let Some(section) = page.anchor_of(link) else {
            continue;
        };
        let label = format!(" {} ", section.as_str());
        let style = if page.has_class(&Target::NavLink(section.clone()), ClassToken::Active) {
            Style::default().fg(Color::Black).bg(Color::Magenta)
        } else {
            Style::default().fg(Color::Gray)
        };
        let width = label.chars().count() as u16;
        hits.regions
            .push((Rect::new(x, area.y, width, 1), PageEvent::NavLinkClick(link)));
        x += width;
        spans.push(Span::styled(label, style));
    }

    let menu = if session.portfolio.nav().is_menu_open() {
        " [menu open]"
    } else {
        ""
    };
    spans.push(Span::styled(menu, Style::default().fg(Color::Yellow)));

    if let Some(text) = page.text(&Target::SectionIndicator)
        && page.style(&Target::SectionIndicator, StyleProp::Opacity) == Some("1")
    {
        spans.push(Span::styled(
            format!("  \u{2502} {text}"),
            Style::default().fg(Color::LightMagenta),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

fn draw_progress(frame: &mut Frame, session: &SimSession, area: Rect) {
    let percent = session
        .page
        .style(&Target::ProgressBar, StyleProp::Width)
        .and_then(|w| w.trim_end_matches('%').parse::<f64>().ok())
        .unwrap_or(0.0);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(band_color(ProgressBand::for_percent(percent))))
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label(format!("{percent:.0}%"));
    frame.render_widget(gauge, area);
}

fn draw_outline(frame: &mut Frame, session: &SimSession, area: Rect) {
    let nav = session.portfolio.nav();
    let metrics = session.page.metrics();
    let active = nav.active();

    let lines: Vec<Line> = nav
        .sections()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let in_view = s.offset_top < metrics.scroll_y + metrics.window_height
                && s.offset_bottom() > metrics.scroll_y;
            let marker = if active == Some(&s.id) { "\u{25b6}" } else { " " };
            let style = match (active == Some(&s.id), in_view) {
                (true, _) => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
                (false, true) => Style::default().fg(Color::White),
                (false, false) => Style::default().fg(Color::DarkGray),
            };
            Line::styled(format!("{marker} {} {}", i + 1, display_name(s.id.as_str())), style)
        })
        .collect();

    let reveal = session.portfolio.reveal();
    let title = format!(" {}/{} revealed ", reveal.revealed_count(), reveal.len());
    let block = Block::default().borders(Borders::RIGHT).title(title);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_viewport(frame: &mut Frame, session: &SimSession, area: Rect, hits: &mut HitMap) {
    if area.height == 0 {
        return;
    }
    let page = &session.page;
    let metrics = page.metrics();
    let px_per_row = metrics.window_height / f64::from(area.height);
    let row_of = |viewport_y: f64| -> Option<u16> {
        let row = (viewport_y / px_per_row).floor();
        (row >= 0.0 && row < f64::from(area.height)).then_some(row as u16)
    };

    frame.render_widget(Block::default().style(Style::default().bg(Color::Black)), area);
    let buf_width = area.width.saturating_sub(2);

    for section in session.portfolio.nav().sections() {
        let Some(row) = row_of(section.offset_top - metrics.scroll_y) else {
            continue;
        };
        let label = format!("\u{2500}\u{2500} {} ", display_name(section.id.as_str()));
        let fill = (buf_width as usize).saturating_sub(label.chars().count());
        let line = Line::styled(
            format!("{label}{}", "\u{2500}".repeat(fill)),
            Style::default().fg(Color::Rgb(139, 92, 246)),
        );
        frame.render_widget(Paragraph::new(line), Rect::new(area.x + 1, area.y + row, buf_width, 1));
    }

    for (selector, label) in LANDMARKS {
        for node in page.query_all(selector) {
            let Some(rect) = page.rect(node) else {
                continue;
            };
            let Some(row) = row_of(rect.top()) else {
                continue;
            };
            let (text, style) = landmark(session, selector, label, node);
            let at = Rect::new(area.x + 3, area.y + row, buf_width.saturating_sub(2), 1);
            if let Some(event) = click_for(selector, node) {
                hits.regions.push((at, event));
            }
            frame.render_widget(Paragraph::new(Line::styled(text, style)), at);
        }
    }

    if page.has_class(&Target::ScrollTopButton, ClassToken::Visible) {
        let at = Rect::new(area.x + area.width.saturating_sub(5), area.y + area.height - 1, 3, 1);
        hits.regions.push((at, PageEvent::ScrollTopClick));
        frame.render_widget(
            Paragraph::new("[\u{2191}]").style(Style::default().fg(Color::Magenta)),
            at,
        );
    }
}

fn landmark(session: &SimSession, selector: &str, label: &str, node: NodeId) -> (String, Style) {
    let page = &session.page;
    if selector == ".hero-subtitle" {
        let typed = page.text(&Target::Subtitle).unwrap_or_default();
        return (
            format!("{typed}|"),
            Style::default().fg(Color::White).add_modifier(Modifier::ITALIC),
        );
    }
    if selector == ".scroll-indicator" {
        return ("\u{2193} scroll".into(), Style::default().fg(Color::Gray));
    }
    let target = Target::Node(node);
    let anchor = page
        .anchor_of(node)
        .map(|s| format!(" \u{2192} {}", s.as_str()))
        .unwrap_or_default();
    if !session.portfolio.reveal().is_tracked(node) {
        return (format!("{label}{anchor}"), Style::default().fg(Color::Gray));
    }
    if page.has_class(&target, ClassToken::Animate) {
        (
            format!("\u{2713} {label}{anchor}"),
            Style::default().fg(Color::Green),
        )
    } else {
        (
            format!("\u{00b7} {label}{anchor}"),
            Style::default().fg(Color::DarkGray),
        )
    }
}

fn click_for(selector: &str, node: NodeId) -> Option<PageEvent> {
    match selector {
        ".overview-card" => Some(PageEvent::OverviewCardClick(node)),
        ".scroll-indicator" => Some(PageEvent::ScrollIndicatorClick),
        _ => None,
    }
}

fn draw_footer(frame: &mut Frame, session: &SimSession, area: Rect) {
    let page = &session.page;
    let hints = page
        .text(&Target::KeyboardHints)
        .filter(|_| page.style(&Target::KeyboardHints, StyleProp::Opacity) == Some("1"));
    let line = match hints {
        Some(text) => Line::styled(
            format!(" {text}"),
            Style::default().fg(Color::White).bg(Color::Rgb(45, 27, 61)),
        ),
        None => Line::styled(
            " 1-8 jump | j/k PgUp/PgDn scroll | m menu | w wip | t top | r/R reveal | q quit ",
            Style::default().fg(Color::Gray).bg(Color::DarkGray),
        ),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_announcement(frame: &mut Frame, session: &SimSession, area: Rect) {
    let page = &session.page;
    if !page.is_mounted(|w| w.target() == Some(Target::Backdrop)) {
        return;
    }
    if page.style(&Target::Backdrop, StyleProp::Opacity) == Some("1") {
        frame.buffer_mut().set_style(area, Style::default().fg(Color::DarkGray));
    }

    let text_visible = page.style(&Target::OverlayText, StyleProp::Opacity) == Some("1");
    let Some(text) = page.text(&Target::OverlayText).filter(|_| text_visible) else {
        return;
    };
    let width = (text.chars().count() as u16 + 6).min(area.width);
    let popup = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + area.height / 2 - 1,
        width,
        3,
    );
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(Line::styled(
            text.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .centered()
        .block(Block::default().borders(Borders::ALL)),
        popup,
    );
}
