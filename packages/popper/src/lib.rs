//! [Popper](https://popper.js.org) bindings.
//!
//! Popper is expected as the global `Popper`, loaded from its UMD bundle. If
//! it isn't loaded, [`Popper::create`] returns `None`.
use dropdown_model::position::{PositionBinding, PositionOptions, Positioner};
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Element;

#[wasm_bindgen(inline_js = r#"
export function create_popper(reference, popper, placement, strategy, preventOverflow, skidding, distance) {
    if (typeof Popper === "undefined") {
        return null;
    }

    const modifiers = [{ name: "offset", options: { offset: [skidding, distance] } }];

    if (preventOverflow) {
        modifiers.push({ name: "preventOverflow", options: { rootBoundary: "viewport" } });
    }

    return Popper.createPopper(reference, popper, { placement, strategy, modifiers });
}
"#)]
extern "C" {
    pub type Instance;

    #[allow(clippy::too_many_arguments)]
    fn create_popper(
        reference: &Element,
        popper: &Element,
        placement: &str,
        strategy: &str,
        prevent_overflow: bool,
        skidding: f64,
        distance: f64,
    ) -> Option<Instance>;

    #[wasm_bindgen(method)]
    pub fn destroy(this: &Instance);
}

#[derive(Copy, Clone, Default)]
pub struct Popper;

impl Positioner<Element> for Popper {
    fn create(
        &self,
        reference: &Element,
        floating: &Element,
        options: &PositionOptions,
    ) -> Option<Box<dyn PositionBinding>> {
        let (skidding, distance) = options.offset;
        let instance = create_popper(
            reference,
            floating,
            options.placement.as_ref(),
            options.strategy.as_ref(),
            options.prevent_overflow,
            skidding,
            distance,
        )?;

        Some(Box::new(PopperBinding(instance)))
    }
}

pub struct PopperBinding(Instance);

impl PositionBinding for PopperBinding {
    fn destroy(self: Box<Self>) {
        self.0.destroy();
    }
}
