use strum::{AsRefStr, Display};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Display, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Placement {
    BottomStart,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Display, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    Fixed,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionOptions {
    pub placement: Placement,
    pub strategy: Strategy,
    /// Keep the floating element inside the viewport.
    pub prevent_overflow: bool,
    /// `(skidding, distance)` in pixels.
    pub offset: (f64, f64),
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            placement: Placement::BottomStart,
            strategy: Strategy::Fixed,
            prevent_overflow: true,
            offset: (0.0, 5.0),
        }
    }
}

/// A live anchoring of a floating element to its reference element.
pub trait PositionBinding {
    fn destroy(self: Box<Self>);
}

/// Creates position bindings between elements of type `E`.
pub trait Positioner<E> {
    /// `None` if positioning isn't available.
    fn create(
        &self,
        reference: &E,
        floating: &E,
        options: &PositionOptions,
    ) -> Option<Box<dyn PositionBinding>>;
}

/// Outcome of a deferred positioning step.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Positioned {
    Bound,
    /// The dropdown was closed, or reopened, since the step was scheduled.
    Stale,
    /// The positioner couldn't create a binding.
    Unavailable,
    /// The header or body isn't rendered.
    MissingElements,
}
