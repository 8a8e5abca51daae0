//! Applying `DomCommand`s to the live document.
//!
//! Commands are applied in order. A command whose target is not on the page
//! is skipped; DOM exceptions are logged and the rest of the batch still runs.

use folio_protocol::{DomCommand, Target, Widget};
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

use crate::dom::{BrowserPage, select_all};
use crate::styles;

impl BrowserPage {
    pub fn apply(&mut self, cmds: impl IntoIterator<Item = DomCommand>) {
        for cmd in cmds {
            if let Err(err) = self.apply_one(&cmd) {
                warn!(?cmd, ?err, "command failed");
            }
        }
    }

    fn apply_one(&mut self, cmd: &DomCommand) -> Result<(), JsValue> {
        match cmd {
            DomCommand::AddClass { target, class } => {
                for el in self.resolve(target) {
                    el.class_list().add_1(class.class_name())?;
                }
            }
            DomCommand::RemoveClass { target, class } => {
                for el in self.resolve(target) {
                    el.class_list().remove_1(class.class_name())?;
                }
            }
            DomCommand::SetStyle {
                target,
                property,
                value,
            } => {
                for el in self.resolve(target) {
                    if let Some(el) = el.dyn_ref::<HtmlElement>() {
                        el.style().set_property(property.css_name(), value)?;
                    }
                }
            }
            DomCommand::ClearStyle { target, property } => {
                for el in self.resolve(target) {
                    if let Some(el) = el.dyn_ref::<HtmlElement>() {
                        el.style().remove_property(property.css_name())?;
                    }
                }
            }
            DomCommand::SetText { target, text } => {
                for el in self.resolve(target) {
                    el.set_text_content(Some(text));
                }
            }
            DomCommand::ScrollTo { y } => self.window().scroll_to_with_x_and_y(0.0, *y),
            DomCommand::PushHistory { section } => {
                self.window()
                    .history()?
                    .push_state_with_url(&JsValue::NULL, "", Some(&section.to_hash()))?;
            }
            DomCommand::Mount(widget) => self.mount(widget)?,
            DomCommand::Remove { target } => {
                if let Some(el) = self.widgets.remove(target) {
                    el.remove();
                }
                if *target == Target::Overlay {
                    self.widgets.remove(&Target::OverlayText);
                }
            }
        }
        Ok(())
    }

    /// Elements addressed by `target`; empty when none are on the page.
    fn resolve(&self, target: &Target) -> Vec<Element> {
        let found: Vec<Element> = match target {
            Target::Node(id) => self.node(*id).into_iter().collect(),
            Target::Part { of, part, index } => {
                let Some(root) = self.node(*of) else {
                    return Vec::new();
                };
                let parts = select_all(&root, part.selector());
                match index {
                    Some(i) => parts.into_iter().nth(*i).into_iter().collect(),
                    None => parts,
                }
            }
            Target::NavLink(section) => select_all(
                self.document(),
                &format!(".nav-link[href=\"{}\"]", section.to_hash()),
            ),
            Target::Body => self
                .document()
                .body()
                .map(Element::from)
                .into_iter()
                .collect(),
            Target::Header => self.select(".navbar").into_iter().collect(),
            Target::NavMenu => self.select(".nav-menu").into_iter().collect(),
            Target::Hamburger => self.select(".hamburger").into_iter().collect(),
            other => self.widget(other).cloned().into_iter().collect(),
        };
        if found.is_empty() {
            debug!(?target, "target not on page");
        }
        found
    }

    fn mount(&mut self, widget: &Widget) -> Result<(), JsValue> {
        if let Some(target) = widget.target()
            && self.widgets.contains_key(&target)
        {
            return Ok(());
        }
        let Some(body) = self.document().body() else {
            return Ok(());
        };
        match widget {
            Widget::ProgressBar => {
                let container = self.create("div", "progress-container", None)?;
                let bar = self.create("div", "progress-bar", None)?;
                container.append_child(&bar)?;
                body.append_child(&container)?;
                self.widgets.insert(Target::ProgressBar, bar.into());
            }
            Widget::SectionIndicator => {
                let Some(navbar) = self.select(".navbar .nav-container") else {
                    debug!("no navbar container; section indicator skipped");
                    return Ok(());
                };
                let indicator =
                    self.create("div", "section-indicator", Some(styles::SECTION_INDICATOR))?;
                navbar.append_child(&indicator)?;
                self.widgets.insert(Target::SectionIndicator, indicator.into());
            }
            Widget::ScrollTopButton => {
                let button = self.create("button", "scroll-to-top", None)?;
                button.set_text_content(Some("\u{2191}"));
                button.set_attribute("aria-label", "Scroll to top")?;
                body.append_child(&button)?;
                self.widgets.insert(Target::ScrollTopButton, button.into());
            }
            Widget::TypingText => {
                let Some(subtitle) = self.select(".hero-subtitle") else {
                    return Ok(());
                };
                subtitle.set_inner_html("");
                let text = self.create("span", "typing-text", None)?;
                let cursor = self.create("span", "typing-cursor", Some(styles::CURSOR))?;
                cursor.set_text_content(Some("|"));
                subtitle.append_child(&text)?;
                subtitle.append_child(&cursor)?;
                self.widgets.insert(Target::Subtitle, text.into());
            }
            Widget::KeyboardHints { text } => {
                let hints = self.create("div", "keyboard-hints", Some(styles::KEYBOARD_HINTS))?;
                hints.set_text_content(Some(text));
                body.append_child(&hints)?;
                self.widgets.insert(Target::KeyboardHints, hints.into());
            }
            Widget::NavPreview { section, text } => {
                let selector = format!(".nav-link[href=\"{}\"]", section.to_hash());
                let Some(link) = self.select(&selector) else {
                    return Ok(());
                };
                if let Some(link) = link.dyn_ref::<HtmlElement>() {
                    link.style().set_property("position", "relative")?;
                }
                let preview = self.create("div", "nav-preview", Some(styles::NAV_PREVIEW))?;
                preview.set_text_content(Some(text));
                link.append_child(&preview)?;
                self.widgets
                    .insert(Target::NavPreview(section.clone()), preview.into());
            }
            Widget::Backdrop => {
                let backdrop = self.create("div", "wip-backdrop", Some(styles::BACKDROP))?;
                body.append_child(&backdrop)?;
                self.widgets.insert(Target::Backdrop, backdrop.into());
            }
            Widget::Overlay => {
                let overlay = self.create("div", "wip-apple-overlay", Some(styles::OVERLAY))?;
                let text = self.create("h1", "wip-text", Some(styles::OVERLAY_TEXT))?;
                overlay.append_child(&text)?;
                body.append_child(&overlay)?;
                self.widgets.insert(Target::Overlay, overlay.into());
                self.widgets.insert(Target::OverlayText, text.into());
            }
            Widget::Ripple {
                id,
                parent,
                size,
                left,
                top,
            } => {
                let Some(parent) = self.node(*parent) else {
                    return Ok(());
                };
                if let Some(parent) = parent.dyn_ref::<HtmlElement>() {
                    parent.style().set_property("position", "relative")?;
                }
                let ripple = self.create("span", "ripple", Some(styles::RIPPLE))?;
                let style = ripple.style();
                style.set_property("width", &format!("{size}px"))?;
                style.set_property("height", &format!("{size}px"))?;
                style.set_property("left", &format!("{left}px"))?;
                style.set_property("top", &format!("{top}px"))?;
                parent.append_child(&ripple)?;
                self.widgets.insert(Target::Ripple(*id), ripple.into());
            }
            Widget::Stylesheet(sheet) => {
                let (id, css) = styles::stylesheet(*sheet);
                if self.document().get_element_by_id(id).is_some() {
                    return Ok(());
                }
                let Some(head) = self.document().head() else {
                    return Ok(());
                };
                let style = self.document().create_element("style")?;
                style.set_id(id);
                style.set_text_content(Some(css));
                head.append_child(&style)?;
            }
        }
        Ok(())
    }

    fn create(&self, tag: &str, class: &str, css: Option<&str>) -> Result<HtmlElement, JsValue> {
        let el = self
            .document()
            .create_element(tag)?
            .dyn_into::<HtmlElement>()
            .map_err(JsValue::from)?;
        el.set_class_name(class);
        if let Some(css) = css {
            el.style().set_css_text(css);
        }
        Ok(el)
    }
}
