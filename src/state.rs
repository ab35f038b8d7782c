//! Open/closed state of the navigation panel

use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-state machine for the panel. Every activation toggles; there is no
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// Map open-class membership to a state
    pub fn from_open(open: bool) -> Self {
        if open {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// The opposite state
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// Value written to the trigger's expansion attribute
    pub fn aria_value(self) -> &'static str {
        match self {
            MenuState::Open => "true",
            MenuState::Closed => "false",
        }
    }

    /// Parse an expansion attribute value. Anything other than `"true"`
    /// reads as closed, matching how assistive tech treats the attribute.
    pub fn from_aria_value(value: &str) -> Self {
        Self::from_open(value.trim() == "true")
    }
}

impl fmt::Display for MenuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuState::Open => write!(f, "open"),
            MenuState::Closed => write!(f, "closed"),
        }
    }
}

impl From<bool> for MenuState {
    fn from(open: bool) -> Self {
        Self::from_open(open)
    }
}
