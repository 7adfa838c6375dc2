use dropdown_model::{ContentItem, Translate};
use silkenweb::{
    document::{self, EventCallback},
    elements::html::ul,
    node::Node,
    prelude::{Element, ParentElement},
};
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::{class_names, css, item::ItemView};

/// The floating list of rows.
///
/// While a `BodyView` is alive, a mousedown anywhere outside the dropdown
/// with id `root_id` calls `on_close`. The dropdown's own header is excluded,
/// as it toggles the dropdown itself.
pub struct BodyView {
    node: Node,
    outside_click: EventCallback,
}

impl BodyView {
    pub fn new(
        root_id: &str,
        content: &[ContentItem],
        class: &str,
        translator: &dyn Translate,
        on_changed: impl FnMut(&ContentItem) + Clone + 'static,
        mut on_close: impl FnMut() + 'static,
    ) -> Self {
        let body = ul().class(css::body()).classes(class_names(class)).children(
            content
                .iter()
                .map(|item| ItemView::new(item, translator, on_changed.clone())),
        );

        let root_id = root_id.to_string();
        let outside_click = document::on_mousedown(move |event: MouseEvent| {
            if is_outside(&root_id, &event) {
                on_close()
            }
        });

        Self {
            node: body.into(),
            outside_click,
        }
    }

    /// The listener must be kept for as long as `node` is mounted.
    pub fn into_parts(self) -> (Node, EventCallback) {
        (self.node, self.outside_click)
    }
}

fn is_outside(root_id: &str, event: &MouseEvent) -> bool {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(root_id))
    else {
        return true;
    };

    let target = event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok());

    !root.contains(target.as_ref())
}
