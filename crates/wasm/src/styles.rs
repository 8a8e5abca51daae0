//! Inline CSS for script-created elements and the injected stylesheets.

use folio_protocol::Stylesheet;

pub const SECTION_INDICATOR: &str = "position: absolute; right: 120px; top: 50%; \
    transform: translateY(-50%); font-size: 0.85rem; color: var(--text-secondary); \
    opacity: 0; transition: opacity 0.3s ease; pointer-events: none;";

pub const NAV_PREVIEW: &str = "position: absolute; top: 100%; left: 50%; \
    transform: translateX(-50%) translateY(-5px); background: rgba(45, 27, 61, 0.95); \
    color: white; padding: 0.5rem 0.8rem; border-radius: 6px; font-size: 0.75rem; \
    white-space: nowrap; opacity: 0; transition: all 0.2s ease; pointer-events: none; \
    z-index: 1000; border: 1px solid rgba(139, 92, 246, 0.2); backdrop-filter: blur(10px);";

pub const KEYBOARD_HINTS: &str = "position: fixed; bottom: 2rem; left: 2rem; \
    background: rgba(45, 27, 61, 0.9); color: white; padding: 0.5rem 1rem; \
    border-radius: 6px; font-size: 0.75rem; opacity: 0; transition: opacity 0.3s ease; \
    z-index: 999; backdrop-filter: blur(10px); border: 1px solid rgba(139, 92, 246, 0.2);";

pub const BACKDROP: &str = "position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; \
    background: rgba(0, 0, 0, 0.3); backdrop-filter: blur(0px); z-index: 999998; opacity: 0; \
    transition: all 0.8s cubic-bezier(0.25, 0.1, 0.25, 1);";

pub const OVERLAY: &str = "position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; \
    background: transparent; z-index: 999999; display: flex; align-items: center; \
    justify-content: center; opacity: 0; transition: all 0.8s cubic-bezier(0.25, 0.1, 0.25, 1);";

pub const OVERLAY_TEXT: &str = "font-family: -apple-system, BlinkMacSystemFont, \
    \"SF Pro Display\", system-ui, sans-serif; font-size: 4rem; font-weight: 700; color: white; \
    margin: 0; padding: 0; text-align: center; letter-spacing: -0.02em; \
    text-shadow: 0 4px 20px rgba(0, 0, 0, 0.8); transform: translateY(20px); opacity: 0; \
    transition: all 0.8s cubic-bezier(0.25, 0.1, 0.25, 1); max-width: 90vw; \
    white-space: nowrap; overflow: hidden;";

pub const CURSOR: &str = "animation: blink 1s infinite; color: var(--vibrant-purple); \
    font-weight: 400; margin-left: 2px;";

pub const RIPPLE: &str = "position: absolute; border-radius: 50%; \
    background: rgba(139, 92, 246, 0.3); transform: scale(0); animation: ripple 0.6s linear; \
    pointer-events: none;";

const KEYFRAMES: &str = "
@keyframes rainbow {
    0% { filter: hue-rotate(0deg); }
    50% { filter: hue-rotate(180deg); }
    100% { filter: hue-rotate(360deg); }
}
@keyframes ripple {
    to { transform: scale(2); opacity: 0; }
}
@keyframes blink {
    0%, 50% { opacity: 1; }
    51%, 100% { opacity: 0; }
}
@keyframes pulse-subtle {
    0%, 100% { transform: scale(1); opacity: 0.8; }
    50% { transform: scale(1.05); opacity: 1; }
}
";

const SCROLL_PERFORMANCE: &str = "
.is-scrolling * { pointer-events: none; }
.overview-card, .skill-category, .timeline-content { contain: layout style paint; }
.profile-image img { image-rendering: -webkit-optimize-contrast; }
";

const REDUCED_MOTION: &str = "
*, *::before, *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
}
";

pub fn stylesheet(sheet: Stylesheet) -> (&'static str, &'static str) {
    match sheet {
        Stylesheet::Keyframes => ("folio-keyframes", KEYFRAMES),
        Stylesheet::ScrollPerformance => ("folio-scroll-performance", SCROLL_PERFORMANCE),
        Stylesheet::ReducedMotion => ("folio-reduced-motion", REDUCED_MOTION),
    }
}
