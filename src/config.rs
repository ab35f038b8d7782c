//! Toggle configuration
//!
//! Every field has a default, so an empty JSON object yields the stock
//! markup contract: `.nav__toggle` drives `[data-nav]` via `is-open` and
//! `aria-expanded`.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ToggleError, ToggleResult};
use crate::selector::Selector;

fn default_trigger_selector() -> String { ".nav__toggle".to_string() }
fn default_panel_selector() -> String { "[data-nav]".to_string() }
fn default_open_class() -> String { "is-open".to_string() }
fn default_expanded_attribute() -> String { "aria-expanded".to_string() }

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleConfig {
    /// Selector for the element that receives clicks
    #[serde(default = "default_trigger_selector")]
    pub trigger_selector: String,
    /// Selector for the element whose open class is toggled
    #[serde(default = "default_panel_selector")]
    pub panel_selector: String,
    /// Class marking the panel as open
    #[serde(default = "default_open_class")]
    pub open_class: String,
    /// Attribute on the trigger mirroring the open state
    #[serde(default = "default_expanded_attribute")]
    pub expanded_attribute: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            trigger_selector: default_trigger_selector(),
            panel_selector: default_panel_selector(),
            open_class: default_open_class(),
            expanded_attribute: default_expanded_attribute(),
        }
    }
}

impl ToggleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> ToggleResult<Self> {
        let config: ToggleConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> ToggleResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn trigger(&self) -> ToggleResult<Selector> {
        Selector::parse(&self.trigger_selector)
    }

    pub fn panel(&self) -> ToggleResult<Selector> {
        Selector::parse(&self.panel_selector)
    }

    /// Check selectors parse and the class/attribute names are usable tokens
    pub fn validate(&self) -> ToggleResult<()> {
        self.trigger()?;
        self.panel()?;
        check_token("open_class", &self.open_class)?;
        check_token("expanded_attribute", &self.expanded_attribute)?;
        Ok(())
    }
}

fn check_token(field: &str, value: &str) -> ToggleResult<()> {
    if value.is_empty() {
        return Err(ToggleError::InvalidConfig(format!("{field} is empty")));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ToggleError::InvalidConfig(format!(
            "{field} '{value}' contains whitespace"
        )));
    }
    Ok(())
}
