//! Toggle controller binding a trigger to a panel
//!
//! The controller is either bound (both elements found, one activation
//! handler registered on the trigger) or inert. An inert controller never
//! registers a handler and never touches either element.

use std::rc::Rc;

use crate::config::ToggleConfig;
use crate::element::{ElementLookup, Panel, Trigger};
use crate::error::ToggleResult;
use crate::state::MenuState;

struct Binding<T, P> {
    trigger: T,
    panel: P,
    open_class: String,
    expanded_attribute: String,
}

impl<T: Trigger, P: Panel> Binding<T, P> {
    fn activate(&self) -> MenuState {
        let open = match self.panel.toggle_class(&self.open_class) {
            Ok(open) => open,
            Err(e) => {
                log::warn!("failed to toggle '{}' on panel: {}", self.open_class, e);
                self.panel.has_class(&self.open_class)
            }
        };
        let state = MenuState::from_open(open);

        if let Err(e) = self
            .trigger
            .set_attribute(&self.expanded_attribute, state.aria_value())
        {
            log::warn!("failed to set '{}' on trigger: {}", self.expanded_attribute, e);
        }

        log::trace!("nav toggled {}", state);
        state
    }

    fn state(&self) -> MenuState {
        MenuState::from_open(self.panel.has_class(&self.open_class))
    }
}

pub struct ToggleController<T, P> {
    binding: Option<Rc<Binding<T, P>>>,
}

impl<T, P> ToggleController<T, P>
where
    T: Trigger + 'static,
    P: Panel + 'static,
{
    /// Bind an explicit trigger/panel pair.
    ///
    /// When either is `None` the controller is inert and `Ok` is returned.
    /// Errors come only from an invalid `config` or a host that refuses the
    /// listener.
    pub fn bind(trigger: Option<T>, panel: Option<P>, config: &ToggleConfig) -> ToggleResult<Self> {
        config.validate()?;

        let (trigger, panel) = match (trigger, panel) {
            (Some(trigger), Some(panel)) => (trigger, panel),
            _ => return Ok(Self::inert()),
        };

        let binding = Rc::new(Binding {
            trigger,
            panel,
            open_class: config.open_class.clone(),
            expanded_attribute: config.expanded_attribute.clone(),
        });

        // The handler owns a strong reference: the binding lives as long as
        // the trigger keeps its listener.
        let handler_binding = Rc::clone(&binding);
        binding.trigger.on_activate(Box::new(move || {
            handler_binding.activate();
        }))?;

        log::debug!(
            "nav toggle bound: {} -> {}",
            config.trigger_selector,
            config.panel_selector
        );

        Ok(Self {
            binding: Some(binding),
        })
    }

    /// A controller that does nothing
    pub fn inert() -> Self {
        Self { binding: None }
    }

    /// Flip the panel and mirror the result on the trigger.
    ///
    /// This is what the registered handler runs on each click. Returns the
    /// new state, or `None` when inert.
    pub fn activate(&self) -> Option<MenuState> {
        self.binding.as_ref().map(|b| b.activate())
    }

    /// Current state read from the panel, or `None` when inert
    pub fn state(&self) -> Option<MenuState> {
        self.binding.as_ref().map(|b| b.state())
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    pub fn trigger(&self) -> Option<&T> {
        self.binding.as_ref().map(|b| &b.trigger)
    }

    pub fn panel(&self) -> Option<&P> {
        self.binding.as_ref().map(|b| &b.panel)
    }
}

impl<E> ToggleController<E, E>
where
    E: Trigger + Panel + 'static,
{
    /// Look up the trigger and panel once using the configured selectors,
    /// then `bind` them.
    pub fn locate<L>(lookup: &L, config: &ToggleConfig) -> ToggleResult<Self>
    where
        L: ElementLookup<Element = E>,
    {
        let trigger = lookup.find(&config.trigger()?)?;
        let panel = lookup.find(&config.panel()?)?;
        Self::bind(trigger, panel, config)
    }
}
