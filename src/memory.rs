//! In-memory element tree
//!
//! A headless host for the controller: elements hold a tag, an optional id,
//! a class list, attributes and click listeners. Handles are cheap `Rc`
//! clones, so a handle kept by a test observes every mutation the
//! controller makes.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::element::{ActivationHandler, ElementLookup, Panel, Trigger};
use crate::error::ToggleResult;
use crate::selector::Selector;

#[derive(Default)]
struct ElementData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    listeners: Vec<ActivationHandler>,
}

/// Shared handle to an in-memory element
#[derive(Clone)]
pub struct MemoryElement {
    data: Rc<RefCell<ElementData>>,
}

impl MemoryElement {
    pub fn new(tag: &str) -> Self {
        Self {
            data: Rc::new(RefCell::new(ElementData {
                tag: tag.to_ascii_lowercase(),
                ..Default::default()
            })),
        }
    }

    /// Element that `selector` will find. Tag selectors pick the tag;
    /// anything else gets `default_tag` plus the marker.
    pub fn for_selector(default_tag: &str, selector: &Selector) -> Self {
        match selector {
            Selector::Tag(tag) => Self::new(tag),
            Selector::Class(class) => Self::new(default_tag).with_class(class),
            Selector::Id(id) => Self::new(default_tag).with_id(id),
            Selector::Attribute { name, value } => {
                Self::new(default_tag).with_attribute(name, value.as_deref().unwrap_or(""))
            }
        }
    }

    /// Set the element id
    pub fn with_id(self, id: &str) -> Self {
        self.data.borrow_mut().id = Some(id.to_string());
        self
    }

    /// Add a class
    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Set an attribute. Names are stored lowercased, as in an HTML document.
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.data
            .borrow_mut()
            .attributes
            .insert(name.to_ascii_lowercase(), value.to_string());
        self
    }

    pub fn tag(&self) -> String {
        self.data.borrow().tag.clone()
    }

    pub fn id(&self) -> Option<String> {
        self.data.borrow().id.clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.data.borrow().classes.clone()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.data
            .borrow()
            .attributes
            .get(&name.to_ascii_lowercase())
            .cloned()
    }

    pub fn add_class(&self, class: &str) {
        let mut data = self.data.borrow_mut();
        if !data.classes.iter().any(|c| c == class) {
            data.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&self, class: &str) {
        self.data.borrow_mut().classes.retain(|c| c != class);
    }

    pub fn listener_count(&self) -> usize {
        self.data.borrow().listeners.len()
    }

    /// Dispatch a click to every listener, in registration order.
    ///
    /// Listeners are detached while they run so they may mutate this
    /// element (the trigger writes its own attribute from its handler).
    pub fn click(&self) {
        let mut listeners = std::mem::take(&mut self.data.borrow_mut().listeners);
        for listener in listeners.iter_mut() {
            listener();
        }
        let mut data = self.data.borrow_mut();
        let added = std::mem::take(&mut data.listeners);
        listeners.extend(added);
        data.listeners = listeners;
    }

    /// Whether this element matches `selector`
    pub fn matches(&self, selector: &Selector) -> bool {
        let data = self.data.borrow();
        match selector {
            Selector::Class(class) => data.classes.iter().any(|c| c == class),
            Selector::Id(id) => data.id.as_deref() == Some(id.as_str()),
            Selector::Tag(tag) => data.tag == *tag,
            Selector::Attribute { name, value } => match (
                data.attributes.get(&name.to_ascii_lowercase()),
                value,
            ) {
                (Some(_), None) => true,
                (Some(actual), Some(expected)) => actual == expected,
                (None, _) => false,
            },
        }
    }

    pub fn ptr_eq(&self, other: &MemoryElement) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data.borrow();
        f.debug_struct("MemoryElement")
            .field("tag", &data.tag)
            .field("id", &data.id)
            .field("classes", &data.classes)
            .field("attributes", &data.attributes)
            .field("listeners", &data.listeners.len())
            .finish()
    }
}

impl Trigger for MemoryElement {
    fn set_attribute(&self, name: &str, value: &str) -> ToggleResult<()> {
        self.data
            .borrow_mut()
            .attributes
            .insert(name.to_ascii_lowercase(), value.to_string());
        Ok(())
    }

    fn on_activate(&self, handler: ActivationHandler) -> ToggleResult<()> {
        self.data.borrow_mut().listeners.push(handler);
        Ok(())
    }
}

impl Panel for MemoryElement {
    fn has_class(&self, class: &str) -> bool {
        self.data.borrow().classes.iter().any(|c| c == class)
    }

    fn toggle_class(&self, class: &str) -> ToggleResult<bool> {
        if self.has_class(class) {
            self.remove_class(class);
            Ok(false)
        } else {
            self.add_class(class);
            Ok(true)
        }
    }
}

/// Flat, ordered collection of elements
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: Vec<MemoryElement>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element and return a handle to it
    pub fn append(&mut self, element: MemoryElement) -> MemoryElement {
        self.elements.push(element.clone());
        element
    }

    /// Document with the stock header markup: a `.nav__toggle` button and a
    /// `[data-nav]` panel. Either can be left out.
    pub fn site_header(with_trigger: bool, with_panel: bool) -> Self {
        let mut doc = Self::new();
        doc.append(MemoryElement::new("header").with_class("site-header"));
        if with_trigger {
            doc.append(
                MemoryElement::new("button")
                    .with_class("nav__toggle")
                    .with_attribute("aria-expanded", "false"),
            );
        }
        if with_panel {
            doc.append(
                MemoryElement::new("nav")
                    .with_class("nav")
                    .with_attribute("data-nav", ""),
            );
        }
        doc
    }

    pub fn query(&self, selector: &str) -> ToggleResult<Option<MemoryElement>> {
        let selector = Selector::parse(selector)?;
        self.find(&selector)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl ElementLookup for MemoryDocument {
    type Element = MemoryElement;

    fn find(&self, selector: &Selector) -> ToggleResult<Option<MemoryElement>> {
        Ok(self.elements.iter().find(|e| e.matches(selector)).cloned())
    }
}
