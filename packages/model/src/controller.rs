use std::cell::RefCell;

use futures_signals::signal::{Signal, SignalExt};

use crate::{
    config::Config,
    content::{ContentItem, Entry},
    position::{PositionOptions, Positioned, Positioner},
    state::{DropdownState, PendingPosition, Transition},
};

/// Drives one dropdown: owns its state and reacts to events raised by the
/// header, the rows and the body.
pub struct Controller {
    config: Config,
    state: DropdownState,
    on_change: RefCell<Box<dyn FnMut(&Entry)>>,
}

impl Controller {
    pub fn new(config: Config, on_change: impl FnMut(&Entry) + 'static) -> Self {
        Self {
            config,
            state: DropdownState::new(),
            on_change: RefCell::new(Box::new(on_change)),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &DropdownState {
        &self.state
    }

    /// `true` while the body should be rendered.
    pub fn body_visible(&self) -> impl Signal<Item = bool> + 'static {
        let has_content = self.config.has_content();
        self.state.open_signal().map(move |open| open && has_content)
    }

    /// The header was clicked.
    ///
    /// When this opens the dropdown, the caller must run [`Self::position`]
    /// with the returned token once the body has been rendered.
    pub fn trigger(&self) -> Option<PendingPosition> {
        match self.state.toggle() {
            Transition::Opened(pending) => Some(pending),
            Transition::Closed => None,
        }
    }

    /// Bind the body to the header. `elements` is `(header, body)`, if both
    /// were found.
    pub fn position<E>(
        &self,
        pending: PendingPosition,
        positioner: &(impl Positioner<E> + ?Sized),
        elements: Option<(E, E)>,
    ) -> Positioned {
        if !self.state.is_current(pending) {
            return Positioned::Stale;
        }

        let Some((header, body)) = elements else {
            return Positioned::MissingElements;
        };

        self.state.attach(pending, || {
            positioner.create(&header, &body, &PositionOptions::default())
        })
    }

    /// A row was activated. Separators, and rows activated while the
    /// dropdown is closed, are ignored.
    ///
    /// Returns whether `on_change` was called.
    pub fn select(&self, item: &ContentItem) -> bool {
        let Some(entry) = item.entry() else {
            return false;
        };

        if !self.state.is_open() {
            return false;
        }

        self.state.close();
        (self.on_change.borrow_mut())(entry);
        true
    }

    /// A click landed outside the body.
    pub fn outside_click(&self) {
        self.state.close();
    }
}
