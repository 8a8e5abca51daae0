use serde::{Deserialize, Serialize};

use crate::section_id::SectionId;
use crate::tokens::{ClassToken, StyleProp};
use crate::types::NodeId;

/// A single, stateless DOM instruction.
///
/// The core emits a `Vec<DomCommand>` for every event it handles. Hosts
/// apply the list in order; each command carries all the data it needs.
/// A command whose target cannot be resolved is skipped by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomCommand {
    AddClass { target: Target, class: ClassToken },
    RemoveClass { target: Target, class: ClassToken },

    /// Set one inline style property.
    SetStyle {
        target: Target,
        property: StyleProp,
        value: String,
    },

    /// Reset one inline style property to the stylesheet value.
    ClearStyle { target: Target, property: StyleProp },

    SetText { target: Target, text: String },

    /// Set the window's vertical scroll offset.
    ScrollTo { y: f64 },

    /// Push `#<section>` onto the session history without navigating.
    PushHistory { section: SectionId },

    /// Create a host-owned element. Mounting a widget that is already present
    /// is a no-op on the host side.
    Mount(Widget),

    /// Detach an element from the document.
    Remove { target: Target },
}

/// Addressable element of the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// An element handed out by the host's `query_all`.
    Node(NodeId),
    /// Descendants of a node. `index: None` addresses every match.
    Part {
        of: NodeId,
        part: Part,
        index: Option<usize>,
    },
    /// The `.nav-link` whose `href` is `#<section>`.
    NavLink(SectionId),
    NavPreview(SectionId),
    Body,
    Header,
    NavMenu,
    Hamburger,
    ProgressBar,
    SectionIndicator,
    /// Text span of the rotating hero subtitle.
    Subtitle,
    ScrollTopButton,
    KeyboardHints,
    Backdrop,
    Overlay,
    OverlayText,
    Ripple(u64),
}

/// Descendant groups inside interactive cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Part {
    /// `.card-icon, .category-icon`
    Icon,
    /// `.mini-tag, .mini-metric, .skill-item`
    SmallItem,
}

impl Part {
    pub fn selector(self) -> &'static str {
        match self {
            Part::Icon => ".card-icon, .category-icon",
            Part::SmallItem => ".mini-tag, .mini-metric, .skill-item",
        }
    }
}

/// Elements created by the page script rather than authored in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Widget {
    ProgressBar,
    SectionIndicator,
    ScrollTopButton,
    /// Replaces the hero subtitle content with a text span and a blinking cursor.
    TypingText,
    KeyboardHints { text: String },
    NavPreview { section: SectionId, text: String },
    /// Blurred full-window backdrop of the work-in-progress announcement.
    Backdrop,
    /// Transparent full-window overlay holding the announcement text.
    Overlay,
    Ripple {
        id: u64,
        parent: NodeId,
        size: f64,
        left: f64,
        top: f64,
    },
    Stylesheet(Stylesheet),
}

/// Document-level `<style>` blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stylesheet {
    /// `rainbow`, `ripple`, `blink` and `pulse-subtle` keyframes.
    Keyframes,
    /// Pointer suppression while scrolling and paint containment.
    ScrollPerformance,
    /// Collapses animation and transition durations to near zero.
    ReducedMotion,
}

impl Widget {
    /// The target a mounted widget is addressed by. Stylesheets have none.
    pub fn target(&self) -> Option<Target> {
        Some(match self {
            Widget::ProgressBar => Target::ProgressBar,
            Widget::SectionIndicator => Target::SectionIndicator,
            Widget::ScrollTopButton => Target::ScrollTopButton,
            Widget::TypingText => Target::Subtitle,
            Widget::KeyboardHints { .. } => Target::KeyboardHints,
            Widget::NavPreview { section, .. } => Target::NavPreview(section.clone()),
            Widget::Backdrop => Target::Backdrop,
            Widget::Overlay => Target::Overlay,
            Widget::Ripple { id, .. } => Target::Ripple(*id),
            Widget::Stylesheet(_) => return None,
        })
    }
}

impl DomCommand {
    pub fn add_class(target: Target, class: ClassToken) -> Self {
        DomCommand::AddClass { target, class }
    }

    pub fn remove_class(target: Target, class: ClassToken) -> Self {
        DomCommand::RemoveClass { target, class }
    }

    pub fn set_class(target: Target, class: ClassToken, on: bool) -> Self {
        if on {
            DomCommand::AddClass { target, class }
        } else {
            DomCommand::RemoveClass { target, class }
        }
    }

    pub fn style(target: Target, property: StyleProp, value: impl Into<String>) -> Self {
        DomCommand::SetStyle {
            target,
            property,
            value: value.into(),
        }
    }

    pub fn clear_style(target: Target, property: StyleProp) -> Self {
        DomCommand::ClearStyle { target, property }
    }

    pub fn text(target: Target, text: impl Into<String>) -> Self {
        DomCommand::SetText {
            target,
            text: text.into(),
        }
    }

    /// The element this command mutates, if any.
    pub fn target(&self) -> Option<&Target> {
        match self {
            DomCommand::AddClass { target, .. }
            | DomCommand::RemoveClass { target, .. }
            | DomCommand::SetStyle { target, .. }
            | DomCommand::ClearStyle { target, .. }
            | DomCommand::SetText { target, .. }
            | DomCommand::Remove { target } => Some(target),
            DomCommand::ScrollTo { .. } | DomCommand::PushHistory { .. } | DomCommand::Mount(_) => {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_class_picks_direction() {
        assert_eq!(
            DomCommand::set_class(Target::Header, ClassToken::Scrolled, true),
            DomCommand::AddClass {
                target: Target::Header,
                class: ClassToken::Scrolled
            }
        );
        assert!(matches!(
            DomCommand::set_class(Target::Header, ClassToken::Scrolled, false),
            DomCommand::RemoveClass { .. }
        ));
    }

    #[test]
    fn commands_survive_json() {
        let cmd = DomCommand::style(Target::ProgressBar, StyleProp::Width, "42%");
        let json = serde_json::to_string(&cmd).unwrap_or_default();
        let back: Option<DomCommand> = serde_json::from_str(&json).ok();
        assert_eq!(back, Some(cmd));
    }
}
