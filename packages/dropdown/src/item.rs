use derive_more::Into;
use dropdown_model::{ContentItem, ItemText, Row, Translate};
use silkenweb::{
    clone,
    elements::html::{hr, li, span, Li},
    node::Node,
    prelude::{Element, ElementEvents, HtmlElement, ParentElement},
    Value,
};

use crate::{css, header::icon};

/// One row of the body.
#[derive(Into, Value)]
pub struct ItemView(Node);

impl ItemView {
    /// `on_changed` is called with `item` when the row is clicked, or when
    /// Enter is pressed while it has focus. Separators never call it.
    pub fn new(
        item: &ContentItem,
        translator: &dyn Translate,
        on_changed: impl FnMut(&ContentItem) + Clone + 'static,
    ) -> Self {
        let row = li()
            .attribute("data-id", item.data_id())
            .tabindex(item.focus_index());

        let row = match Row::new(item, translator) {
            Row::Divider => row.class(css::divider()).child(hr()),
            Row::Entry { icon: icon_name, text, .. } => {
                let text = match text {
                    ItemText::Html(html) => span().effect(move |elem| elem.set_inner_html(&html)),
                    ItemText::Text(text) => span().text(text),
                };

                on_activate(
                    row.class(css::item())
                        .optional_child(icon_name.as_deref().map(icon))
                        .child(text),
                    item.clone(),
                    on_changed,
                )
            }
        };

        Self(row.into())
    }
}

fn on_activate(
    row: Li,
    item: ContentItem,
    mut handler: impl FnMut(&ContentItem) + Clone + 'static,
) -> Li {
    row.on_click({
        clone!(mut handler);
        clone!(item);
        move |event, _| {
            if activate(Activation::Click, &item, &mut handler) {
                event.prevent_default();
            }
        }
    })
    .on_keydown(move |event, _| {
        if activate(Activation::Key(&event.key()), &item, &mut handler) {
            event.prevent_default();
        }
    })
}

#[derive(Copy, Clone, Debug)]
enum Activation<'a> {
    Click,
    Key(&'a str),
}

/// Returns whether `handler` was called, meaning the event's default action
/// should be suppressed.
fn activate(
    activation: Activation,
    item: &ContentItem,
    handler: &mut impl FnMut(&ContentItem),
) -> bool {
    let activates = match activation {
        Activation::Click => true,
        Activation::Key(key) => key == "Enter",
    };

    if activates {
        handler(item);
    }

    activates
}
