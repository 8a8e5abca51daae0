//! Event wiring and the single timer/animation-frame pump.
//!
//! The running [`App`] lives in a thread-local. DOM listeners, the
//! intersection observer, the timer and the frame callback all enter it
//! through [`with_app`], so exactly one event is processed at a time.

use std::cell::RefCell;

use folio_core::{FolioConfig, Key, KeyPress, PageEvent, PageHost, PointerAction, Portfolio};
use folio_protocol::{DomCommand, NodeId, Target};
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent,
};

use crate::dom::BrowserPage;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Run `f` against the running app. `None` before boot, or when called from
/// inside another handler.
pub fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> Option<R> {
    APP.with(|cell| {
        let Ok(mut slot) = cell.try_borrow_mut() else {
            warn!("re-entrant page event dropped");
            return None;
        };
        slot.as_mut().map(f)
    })
}

pub struct App {
    page: BrowserPage,
    portfolio: Portfolio,
    observer: Option<IntersectionObserver>,
    timer: Option<i32>,
    frame_pending: bool,
    on_timer: Closure<dyn FnMut()>,
    on_frame: Closure<dyn FnMut(f64)>,
}

/// Build the coordinator over the live page, render its initial state and
/// start listening.
pub fn boot() -> Result<(), JsValue> {
    let mut page = BrowserPage::new()?;
    let config = load_config(&page);
    let mut portfolio = Portfolio::new(config);
    let cmds = portfolio.init(page.now(), &page);
    page.apply(cmds);

    let observer = match observe(&page, &portfolio) {
        Ok(observer) => Some(observer),
        Err(err) => {
            warn!(?err, "intersection observer unavailable; relying on sweeps");
            None
        }
    };
    if let Err(err) = bind_listeners(&page, &portfolio) {
        warn!(?err, "some listeners could not be attached");
    }

    let app = App {
        page,
        portfolio,
        observer,
        timer: None,
        frame_pending: false,
        on_timer: Closure::wrap(Box::new(|| {
            with_app(App::on_timer);
        }) as Box<dyn FnMut()>),
        on_frame: Closure::wrap(Box::new(|_timestamp: f64| {
            with_app(App::on_frame);
        }) as Box<dyn FnMut(f64)>),
    };
    APP.with(|cell| {
        if let Ok(mut slot) = cell.try_borrow_mut() {
            *slot = Some(app);
        }
    });
    with_app(App::reschedule);
    info!("folio running");
    Ok(())
}

fn load_config(page: &BrowserPage) -> FolioConfig {
    let Some(text) = page
        .document()
        .get_element_by_id("folio-config")
        .and_then(|el| el.text_content())
    else {
        return FolioConfig::default();
    };
    match FolioConfig::from_json(&text) {
        Ok(config) => {
            info!("using page configuration");
            config
        }
        Err(err) => {
            warn!(%err, "ignoring page configuration");
            FolioConfig::default()
        }
    }
}

impl App {
    pub fn dispatch(&mut self, event: PageEvent) {
        let now = self.page.now();
        let cmds = self.portfolio.handle(now, event, &self.page);
        self.page.apply(cmds);
        self.reschedule();
    }

    /// Reveal what is on screen now; returns the commands applied.
    pub fn force_reveal(&mut self) -> Vec<DomCommand> {
        let now = self.page.now();
        let cmds = self.portfolio.force_reveal(now, &self.page);
        self.page.apply(cmds.clone());
        self.reschedule();
        cmds
    }

    /// Reveal everything still hidden; returns the commands applied now.
    pub fn reveal_all(&mut self) -> Vec<DomCommand> {
        let now = self.page.now();
        let cmds = self.portfolio.reveal_all(now);
        self.page.apply(cmds.clone());
        self.reschedule();
        cmds
    }

    fn on_timer(&mut self) {
        self.timer = None;
        let now = self.page.now();
        let cmds = self.portfolio.pump(now, &self.page);
        self.page.apply(cmds);
        self.reschedule();
    }

    fn on_frame(&mut self) {
        self.frame_pending = false;
        let now = self.page.now();
        let mut cmds = self.portfolio.frame(now);
        cmds.extend(self.portfolio.pump(now, &self.page));
        self.page.apply(cmds);
        self.reschedule();
    }

    fn on_intersections(&mut self, entries: &js_sys::Array) {
        let now = self.page.now();
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(node) = self.page.node_id(&target) else {
                continue;
            };
            let event = PageEvent::Intersection {
                node,
                is_intersecting: entry.is_intersecting(),
                ratio: entry.intersection_ratio(),
            };
            let cmds = self.portfolio.handle(now, event, &self.page);
            self.page.apply(cmds);
            if !self.portfolio.is_observing(node)
                && let Some(observer) = &self.observer
            {
                observer.unobserve(&target);
            }
        }
        self.reschedule();
    }

    /// Arm the frame callback while a smooth scroll runs and the timer for the
    /// earliest queued task.
    fn reschedule(&mut self) {
        let window = self.page.window().clone();
        if self.portfolio.wants_frame() && !self.frame_pending {
            match window.request_animation_frame(self.on_frame.as_ref().unchecked_ref()) {
                Ok(_) => self.frame_pending = true,
                Err(err) => warn!(?err, "requestAnimationFrame failed"),
            }
        }
        if let Some(handle) = self.timer.take() {
            window.clear_timeout_with_handle(handle);
        }
        if let Some(due) = self.portfolio.next_wake() {
            let delay = (due - self.page.now()).max(0.0).ceil() as i32;
            match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                self.on_timer.as_ref().unchecked_ref(),
                delay,
            ) {
                Ok(handle) => self.timer = Some(handle),
                Err(err) => warn!(?err, "setTimeout failed"),
            }
        }
    }
}

fn dispatch(event: PageEvent) {
    with_app(|app| app.dispatch(event));
}

fn observe(page: &BrowserPage, portfolio: &Portfolio) -> Result<IntersectionObserver, JsValue> {
    let callback = Closure::wrap(Box::new(
        |entries: js_sys::Array, _observer: IntersectionObserver| {
            with_app(|app| app.on_intersections(&entries));
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let reveal = &portfolio.config().reveal;
    let thresholds: js_sys::Array = reveal
        .observer_thresholds
        .iter()
        .map(|t| JsValue::from_f64(*t))
        .collect();
    let options = IntersectionObserverInit::new();
    options.set_threshold(&thresholds);
    options.set_root_margin(&reveal.root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    let mut watched = 0;
    for node in portfolio.observed() {
        if let Some(el) = page.node(node) {
            observer.observe(&el);
            watched += 1;
        }
    }
    debug!(watched, "observing reveal targets");
    Ok(observer)
}

/// Attach `handler` for `kind` events on `target` for the page lifetime.
fn listen<E>(target: &EventTarget, kind: &str, mut handler: impl FnMut(E) + 'static) -> Result<(), JsValue>
where
    E: JsCast + 'static,
{
    let callback = Closure::wrap(Box::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    }) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

fn on_click(target: &EventTarget, event: PageEvent, prevent_default: bool) -> Result<(), JsValue> {
    listen(target, "click", move |e: Event| {
        if prevent_default {
            e.prevent_default();
        }
        dispatch(event.clone());
    })
}

fn bind_listeners(page: &BrowserPage, portfolio: &Portfolio) -> Result<(), JsValue> {
    let window: &EventTarget = page.window().as_ref();
    listen(window, "scroll", |_: Event| dispatch(PageEvent::Scroll))?;
    listen(window, "resize", |_: Event| dispatch(PageEvent::Resize))?;
    listen(window, "hashchange", |_: Event| dispatch(PageEvent::HashChange))?;
    listen(page.document().as_ref(), "keydown", |e: KeyboardEvent| {
        dispatch(PageEvent::Key(KeyPress {
            key: Key::from_dom(&e.key()),
            in_text_field: in_text_field(&e),
        }));
    })?;

    for node in page.query_all(".nav-link") {
        if page.anchor_of(node).is_none() {
            continue;
        }
        if let Some(el) = page.node(node) {
            on_click(&el, PageEvent::NavLinkClick(node), true)?;
        }
    }
    for node in page.query_all(".overview-card") {
        if let Some(el) = page.node(node) {
            on_click(&el, PageEvent::OverviewCardClick(node), false)?;
        }
    }
    let singles = [
        (".nav-link-wip", PageEvent::WipClick, true),
        (".hamburger", PageEvent::HamburgerClick, false),
        (".scroll-indicator", PageEvent::ScrollIndicatorClick, false),
    ];
    for (selector, event, prevent) in singles {
        match page.select(selector) {
            Some(el) => on_click(&el, event, prevent)?,
            None => debug!(selector, "not on page"),
        }
    }
    if let Some(button) = page.widget(&Target::ScrollTopButton) {
        on_click(button, PageEvent::ScrollTopClick, false)?;
    }

    for node in portfolio.interactive_nodes() {
        bind_pointer(page, node)?;
    }
    Ok(())
}

fn bind_pointer(page: &BrowserPage, node: NodeId) -> Result<(), JsValue> {
    let Some(el) = page.node(node) else {
        return Ok(());
    };
    let actions = [
        ("mouseenter", PointerAction::Enter),
        ("mouseleave", PointerAction::Leave),
        ("mousedown", PointerAction::Down),
        ("mouseup", PointerAction::Up),
    ];
    for (kind, action) in actions {
        listen(&el, kind, move |_: Event| {
            dispatch(PageEvent::Pointer { node, action });
        })?;
    }
    Ok(())
}

fn in_text_field(event: &KeyboardEvent) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .is_some_and(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA"))
}
