pub mod commands;
pub mod section_id;
pub mod tokens;
pub mod types;

pub use commands::{DomCommand, Part, Stylesheet, Target, Widget};
pub use section_id::SectionId;
pub use tokens::{ClassToken, RevealKind, StyleProp};
pub use types::{NodeId, Rect, SectionDescriptor, ViewportMetrics};
