use std::cell::{Cell, RefCell};

use futures_signals::signal::{Mutable, Signal};

use crate::position::{PositionBinding, Positioned};

/// Open/closed state, plus the position binding that exists while open.
pub struct DropdownState {
    open: Mutable<bool>,
    generation: Cell<u64>,
    binding: RefCell<Option<Box<dyn PositionBinding>>>,
}

/// Identifies the open sequence a deferred positioning step belongs to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct PendingPosition(u64);

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Transition {
    Opened(PendingPosition),
    Closed,
}

impl DropdownState {
    pub fn new() -> Self {
        Self {
            open: Mutable::new(false),
            generation: Cell::new(0),
            binding: RefCell::new(None),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn open_signal(&self) -> impl Signal<Item = bool> + 'static {
        self.open.signal()
    }

    #[cfg(test)]
    pub fn has_binding(&self) -> bool {
        self.binding.borrow().is_some()
    }

    pub fn toggle(&self) -> Transition {
        if self.is_open() {
            self.close();
            Transition::Closed
        } else {
            self.destroy_binding();
            let generation = self.generation.get() + 1;
            self.generation.set(generation);
            self.open.set(true);
            Transition::Opened(PendingPosition(generation))
        }
    }

    /// Returns `true` if the dropdown was open.
    pub fn close(&self) -> bool {
        self.destroy_binding();
        self.open.replace(false)
    }

    /// Whether `pending` belongs to the open sequence that is still showing.
    pub fn is_current(&self, pending: PendingPosition) -> bool {
        self.is_open() && pending.0 == self.generation.get()
    }

    /// Run the deferred positioning step for `pending`.
    ///
    /// `create` is only called if the dropdown is still in the open sequence
    /// that produced `pending`.
    pub fn attach(
        &self,
        pending: PendingPosition,
        create: impl FnOnce() -> Option<Box<dyn PositionBinding>>,
    ) -> Positioned {
        if !self.is_current(pending) {
            return Positioned::Stale;
        }

        self.destroy_binding();

        let Some(binding) = create() else {
            return Positioned::Unavailable;
        };

        *self.binding.borrow_mut() = Some(binding);
        Positioned::Bound
    }

    fn destroy_binding(&self) {
        let binding = self.binding.borrow_mut().take();

        if let Some(binding) = binding {
            binding.destroy();
        }
    }
}

impl Default for DropdownState {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DropdownState {
    fn drop(&mut self) {
        self.destroy_binding();
    }
}
