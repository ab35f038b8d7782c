use nav_toggle::prelude::*;

fn bound_header() -> (MemoryDocument, ToggleController<MemoryElement, MemoryElement>) {
    let doc = MemoryDocument::site_header(true, true);
    let controller = ToggleController::locate(&doc, &ToggleConfig::default()).unwrap();
    (doc, controller)
}

fn element(doc: &MemoryDocument, selector: &str) -> MemoryElement {
    doc.query(selector).unwrap().unwrap()
}

#[test]
fn one_click_opens_panel() {
    let (doc, _controller) = bound_header();
    let trigger = element(&doc, ".nav__toggle");
    let panel = element(&doc, "[data-nav]");

    trigger.click();

    assert!(panel.has_class("is-open"));
    assert_eq!(trigger.attribute("aria-expanded").as_deref(), Some("true"));
}

#[test]
fn two_clicks_close_panel() {
    let (doc, _controller) = bound_header();
    let trigger = element(&doc, ".nav__toggle");
    let panel = element(&doc, "[data-nav]");

    trigger.click();
    trigger.click();

    assert!(!panel.has_class("is-open"));
    assert_eq!(trigger.attribute("aria-expanded").as_deref(), Some("false"));
}

#[test]
fn missing_panel_leaves_trigger_untouched() {
    let doc = MemoryDocument::site_header(true, false);
    let controller = ToggleController::locate(&doc, &ToggleConfig::default()).unwrap();
    let trigger = element(&doc, ".nav__toggle");
    let before = format!("{:?}", trigger);

    assert!(!controller.is_bound());
    assert_eq!(trigger.listener_count(), 0);

    trigger.click();
    trigger.click();

    assert_eq!(format!("{:?}", trigger), before);
    assert_eq!(trigger.attribute("aria-expanded").as_deref(), Some("false"));
}

#[test]
fn missing_trigger_leaves_panel_untouched() {
    let doc = MemoryDocument::site_header(false, true);
    let controller = ToggleController::locate(&doc, &ToggleConfig::default()).unwrap();
    let panel = element(&doc, "[data-nav]");

    assert!(!controller.is_bound());
    assert_eq!(controller.activate(), None);
    assert!(!panel.has_class("is-open"));
}

#[test]
fn empty_document_is_inert() {
    let doc = MemoryDocument::new();
    let controller = ToggleController::locate(&doc, &ToggleConfig::default()).unwrap();
    assert!(!controller.is_bound());
    assert_eq!(controller.state(), None);
}

#[test]
fn state_after_n_clicks_follows_parity() {
    for n in 0..12 {
        let (doc, controller) = bound_header();
        let trigger = element(&doc, ".nav__toggle");
        for _ in 0..n {
            trigger.click();
        }
        let expected = if n % 2 == 1 {
            MenuState::Open
        } else {
            MenuState::Closed
        };
        assert_eq!(controller.state(), Some(expected), "after {n} clicks");
    }
}

#[test]
fn attribute_mirrors_class_after_every_click() {
    let (doc, _controller) = bound_header();
    let trigger = element(&doc, ".nav__toggle");
    let panel = element(&doc, "[data-nav]");

    for _ in 0..7 {
        trigger.click();
        let expanded = trigger.attribute("aria-expanded").unwrap();
        assert_eq!(
            MenuState::from_aria_value(&expanded),
            MenuState::from_open(panel.has_class("is-open"))
        );
    }
}

#[test]
fn only_first_matching_elements_are_bound() {
    let mut doc = MemoryDocument::new();
    let first_trigger = doc.append(MemoryElement::new("button").with_class("nav__toggle"));
    let second_trigger = doc.append(MemoryElement::new("button").with_class("nav__toggle"));
    let first_panel = doc.append(MemoryElement::new("nav").with_attribute("data-nav", ""));
    let second_panel = doc.append(MemoryElement::new("nav").with_attribute("data-nav", ""));

    let _controller = ToggleController::locate(&doc, &ToggleConfig::default()).unwrap();

    second_trigger.click();
    assert!(!first_panel.has_class("is-open"));

    first_trigger.click();
    assert!(first_panel.has_class("is-open"));
    assert!(!second_panel.has_class("is-open"));
}

#[test]
fn json_config_drives_lookup() {
    let config = ToggleConfig::from_json(
        r##"{
            "trigger_selector": "#menu-button",
            "panel_selector": "[data-menu=main]",
            "open_class": "menu--open"
        }"##,
    )
    .unwrap();

    let mut doc = MemoryDocument::new();
    let trigger = doc.append(MemoryElement::new("button").with_id("menu-button"));
    doc.append(MemoryElement::new("nav").with_attribute("data-menu", "footer"));
    let panel = doc.append(MemoryElement::new("nav").with_attribute("data-menu", "main"));

    let controller = ToggleController::locate(&doc, &config).unwrap();
    assert!(controller.is_bound());

    trigger.click();
    assert!(panel.has_class("menu--open"));
    assert_eq!(trigger.attribute("aria-expanded").as_deref(), Some("true"));
}

#[test]
fn invalid_selector_is_reported() {
    let doc = MemoryDocument::site_header(true, true);
    let config = ToggleConfig {
        trigger_selector: "header .nav__toggle".to_string(),
        ..ToggleConfig::default()
    };
    let result = ToggleController::locate(&doc, &config);
    assert!(matches!(result, Err(ToggleError::InvalidSelector(_))));
}

#[test]
fn selectors_the_browser_would_reject_are_config_errors() {
    for bad in [r#"{ "trigger_selector": ".1nav" }"#, r#"{ "panel_selector": "[data-x=]]" }"#] {
        assert!(
            matches!(ToggleConfig::from_json(bad), Err(ToggleError::InvalidSelector(_))),
            "expected {bad} to be rejected"
        );
    }
}

#[test]
fn uppercase_attribute_selector_finds_panel() {
    let doc = MemoryDocument::site_header(true, true);
    let config = ToggleConfig {
        panel_selector: "[DATA-NAV]".to_string(),
        ..ToggleConfig::default()
    };
    let controller = ToggleController::locate(&doc, &config).unwrap();
    assert!(controller.is_bound());

    element(&doc, ".nav__toggle").click();
    assert!(element(&doc, "[data-nav]").has_class("is-open"));
}
