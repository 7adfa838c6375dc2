use derive_more::Into;
use dropdown_model::{Config, Translate};
use futures_signals::signal::{Signal, SignalExt};
use silkenweb::{
    elements::html::{button, i, span},
    node::Node,
    prelude::{Element, ElementEvents, HtmlElement, ParentElement},
    value::Sig,
    Value,
};

use crate::{class_names, css};

/// The trigger button.
#[derive(Into, Value)]
pub struct HeaderView(Node);

impl HeaderView {
    pub fn new(
        config: &Config,
        translator: &dyn Translate,
        open: impl Signal<Item = bool> + 'static,
        mut on_trigger: impl FnMut() + 'static,
    ) -> Self {
        let label = config.label().resolve(translator);
        let options = config.options();

        let header = button()
            .class(css::header())
            .classes(class_names(&options.header_class))
            .r#type("button")
            .title(label.as_str())
            .attribute("aria-expanded", Sig(open.map(|open| open.to_string())))
            .on_click(move |event, _| {
                event.prevent_default();
                on_trigger()
            })
            .optional_child(config.icon().map(icon))
            .child(span().text(label.as_str()));

        let header = if options.caret {
            header.child(i().class(css::caret()))
        } else {
            header
        };

        Self(header.into())
    }
}

pub(crate) fn icon(name: &str) -> Node {
    i().class(css::icon()).classes(class_names(name)).into()
}
