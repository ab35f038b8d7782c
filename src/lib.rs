//! Nav Toggle - click-driven navigation menu toggle
//!
//! Binds a trigger element to a panel element. Each activation flips the
//! panel's open class and mirrors the result in the trigger's
//! `aria-expanded` attribute. If either element is missing the controller
//! stays inert.
//!
//! Hosts:
//! - `memory`: in-memory element tree (headless, used by the CLI and tests)
//! - `wasm`: real DOM via web-sys (feature `wasm`)
//! - `component`: Dioxus component (feature `dioxus`)
//!
//! ## Example
//! ```rust
//! use nav_toggle::prelude::*;
//!
//! let doc = MemoryDocument::site_header(true, true);
//! let controller = ToggleController::locate(&doc, &ToggleConfig::default()).unwrap();
//!
//! let trigger = doc.query(".nav__toggle").unwrap().unwrap();
//! trigger.click();
//!
//! assert_eq!(controller.state(), Some(MenuState::Open));
//! assert_eq!(trigger.attribute("aria-expanded").as_deref(), Some("true"));
//! ```

pub mod config;
pub mod controller;
pub mod element;
pub mod error;
pub mod memory;
pub mod selector;
pub mod state;

// Re-export common types
pub mod prelude {
    pub use crate::config::ToggleConfig;
    pub use crate::controller::ToggleController;
    pub use crate::element::{ElementLookup, Panel, Trigger};
    pub use crate::error::{ToggleError, ToggleResult};
    pub use crate::memory::{MemoryDocument, MemoryElement};
    pub use crate::selector::Selector;
    pub use crate::state::MenuState;
}

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(feature = "dioxus")]
pub mod component;
