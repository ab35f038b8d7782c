//! Host boundary: what the controller needs from the element tree

use crate::error::ToggleResult;
use crate::selector::Selector;

/// Handler invoked on each activation. The event payload is not used.
pub type ActivationHandler = Box<dyn FnMut()>;

/// Element that receives activation events and carries the expansion attribute
pub trait Trigger {
    fn set_attribute(&self, name: &str, value: &str) -> ToggleResult<()>;

    /// Register `handler` to run on every activation (click)
    fn on_activate(&self, handler: ActivationHandler) -> ToggleResult<()>;
}

/// Element whose open state is membership of a class
pub trait Panel {
    fn has_class(&self, class: &str) -> bool;

    /// Flip membership of `class`, returning whether it is now present
    fn toggle_class(&self, class: &str) -> ToggleResult<bool>;
}

/// Locates elements in a host document
pub trait ElementLookup {
    type Element;

    /// First element in document order matching `selector`.
    ///
    /// `Ok(None)` means nothing matched. An `Err` means the host rejected
    /// the selector, which is a configuration problem rather than a missing
    /// element.
    fn find(&self, selector: &Selector) -> ToggleResult<Option<Self::Element>>;
}
