use std::{cell::Cell, rc::Rc};

use crate::position::{PositionBinding, PositionOptions, Positioner};

/// Counts live bindings, so tests can check every path destroys them.
#[derive(Clone, Default)]
pub struct Bindings {
    live: Rc<Cell<usize>>,
    created: Rc<Cell<usize>>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self) -> Option<Box<dyn PositionBinding>> {
        self.live.set(self.live.get() + 1);
        self.created.set(self.created.get() + 1);

        Some(Box::new(FakeBinding(self.live.clone())))
    }

    pub fn live(&self) -> usize {
        self.live.get()
    }

    pub fn created(&self) -> usize {
        self.created.get()
    }
}

struct FakeBinding(Rc<Cell<usize>>);

impl PositionBinding for FakeBinding {
    fn destroy(self: Box<Self>) {
        self.0.set(self.0.get() - 1);
    }
}

/// Stands in for a DOM element.
#[derive(Debug, PartialEq, Eq)]
pub struct FakeElement(pub &'static str);

pub struct FakePositioner {
    pub bindings: Bindings,
    pub last_options: Cell<Option<PositionOptions>>,
}

impl FakePositioner {
    pub fn new(bindings: &Bindings) -> Self {
        Self {
            bindings: bindings.clone(),
            last_options: Cell::new(None),
        }
    }
}

impl Positioner<FakeElement> for FakePositioner {
    fn create(
        &self,
        reference: &FakeElement,
        floating: &FakeElement,
        options: &PositionOptions,
    ) -> Option<Box<dyn PositionBinding>> {
        assert_eq!(reference, &FakeElement("header"));
        assert_eq!(floating, &FakeElement("body"));
        self.last_options.set(Some(*options));
        self.bindings.create()
    }
}

/// A positioner whose library isn't loaded.
pub struct NoPositioner;

impl Positioner<FakeElement> for NoPositioner {
    fn create(
        &self,
        _reference: &FakeElement,
        _floating: &FakeElement,
        _options: &PositionOptions,
    ) -> Option<Box<dyn PositionBinding>> {
        None
    }
}
