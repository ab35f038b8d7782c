//! Dioxus navigation toggle
//!
//! Renders the same markup contract as the DOM binding: a `.nav__toggle`
//! button carrying `aria-expanded` and a `[data-nav]` panel that gains the
//! open class. State lives in a signal instead of the class list.
//!
//! The component always renders the stock contract: the `nav` base class and
//! the `aria-expanded` attribute. Only the open class is a prop. rsx needs
//! attribute names at compile time, so `ToggleConfig::expanded_attribute`
//! applies to the DOM binding alone.

use dioxus::prelude::*;

use crate::state::MenuState;

/// Class attribute for the panel in `state`
pub fn panel_classes(base: &str, open_class: &str, state: MenuState) -> String {
    if state.is_open() {
        format!("{base} {open_class}")
    } else {
        base.to_string()
    }
}

#[component]
pub fn NavToggle(
    label: String,
    #[props(default = "is-open".to_string())] open_class: String,
    children: Element,
) -> Element {
    let mut state = use_signal(MenuState::default);
    let classes = panel_classes("nav", &open_class, state());

    rsx! {
        button {
            class: "nav__toggle",
            r#type: "button",
            "aria-expanded": state().aria_value(),
            onclick: move |_| state.set(state().toggled()),
            "{label}"
        }

        nav {
            class: "{classes}",
            "data-nav": "",
            {children}
        }
    }
}
