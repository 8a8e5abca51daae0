use serde::{Deserialize, Serialize};

/// Entrance animation assigned to an element before it is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RevealKind {
    SlideInUp,
    FadeInUp,
    FadeInLeft,
    ScaleIn,
}

impl RevealKind {
    pub fn class_name(self) -> &'static str {
        match self {
            RevealKind::SlideInUp => "slide-in-up",
            RevealKind::FadeInUp => "fade-in-up",
            RevealKind::FadeInLeft => "fade-in-left",
            RevealKind::ScaleIn => "scale-in",
        }
    }
}

/// Semantic class markers, resolved to the stylesheet's class names by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassToken {
    /// One-shot "revealed" marker.
    Animate,
    /// Current nav link, open hamburger, open menu.
    Active,
    /// Header once the page is scrolled past the threshold.
    Scrolled,
    /// Header hidden while scrolling down.
    NavHidden,
    /// Back-to-top button shown.
    Visible,
    /// Body while a scroll burst is in progress.
    IsScrolling,
    Reveal(RevealKind),
}

impl ClassToken {
    pub fn class_name(self) -> &'static str {
        match self {
            ClassToken::Animate => "animate",
            ClassToken::Active => "active",
            ClassToken::Scrolled => "scrolled",
            ClassToken::NavHidden => "nav-hidden",
            ClassToken::Visible => "visible",
            ClassToken::IsScrolling => "is-scrolling",
            ClassToken::Reveal(kind) => kind.class_name(),
        }
    }
}

/// Inline style properties the core is allowed to touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleProp {
    Opacity,
    Transform,
    Transition,
    Width,
    Background,
    BoxShadow,
    BackdropFilter,
    Animation,
}

impl StyleProp {
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProp::Opacity => "opacity",
            StyleProp::Transform => "transform",
            StyleProp::Transition => "transition",
            StyleProp::Width => "width",
            StyleProp::Background => "background",
            StyleProp::BoxShadow => "box-shadow",
            StyleProp::BackdropFilter => "backdrop-filter",
            StyleProp::Animation => "animation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_classes_pass_through() {
        assert_eq!(
            ClassToken::Reveal(RevealKind::FadeInLeft).class_name(),
            "fade-in-left"
        );
        assert_eq!(ClassToken::Animate.class_name(), "animate");
    }

    #[test]
    fn reveal_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&RevealKind::SlideInUp).unwrap_or_default();
        assert_eq!(json, "\"slide-in-up\"");
    }
}
