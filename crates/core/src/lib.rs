//! Behaviour of the folio portfolio page, independent of any renderer.
//!
//! Hosts implement [`PageHost`], forward [`PageEvent`]s to a [`Portfolio`]
//! and apply the [`folio_protocol::DomCommand`]s it returns.

pub mod config;
pub mod easing;
pub mod easter_egg;
pub mod error;
pub mod host;
pub mod input;
pub mod interactions;
pub mod modal;
pub mod nav;
pub mod portfolio;
pub mod rate;
pub mod reveal;
pub mod schedule;
pub mod scroll;
pub mod sim;
pub mod typing;

pub use config::FolioConfig;
pub use easing::Easing;
pub use error::FolioError;
pub use host::{PageEvent, PageHost};
pub use input::{Key, KeyPress};
pub use interactions::PointerAction;
pub use portfolio::Portfolio;
pub use sim::{SimPage, SimSession};
