//! A dropdown component: a trigger button that opens a list of rows,
//! positioned below it.
use std::{cell::Cell, rc::Rc};

use derive_more::Into;
use dropdown_model::{
    position::{Positioned, Positioner},
    Config, ContentItem, Controller, Entry, Translate,
};
use futures_signals::signal::SignalExt;
use gloo_console::{log, warn};
use silkenweb::{
    clone, document,
    elements::html::div,
    node::Node,
    prelude::{Element, HtmlElement, ParentElement},
    task::on_animation_frame,
    value::Sig,
    Value,
};

pub use crate::{body::BodyView, header::HeaderView, item::ItemView};

mod body;
mod header;
mod item;

mod css {
    silkenweb::css!(
        path = "css/dropdown.css",
        auto_mount,
        transpile = (modules)
    );

    pub use class::*;
}

/// Collaborators shared by every dropdown on a page.
#[derive(Clone)]
pub struct Services {
    pub translator: Rc<dyn Translate>,
    pub positioner: Rc<dyn Positioner<web_sys::Element>>,
}

impl Services {
    pub fn new(
        translator: impl Translate + 'static,
        positioner: impl Positioner<web_sys::Element> + 'static,
    ) -> Self {
        Self {
            translator: Rc::new(translator),
            positioner: Rc::new(positioner),
        }
    }
}

#[derive(Into, Value)]
pub struct DropdownView(Node);

impl DropdownView {
    /// Without any content, only the empty container is rendered.
    pub fn new(
        config: Config,
        services: Services,
        on_change: impl FnMut(&Entry) + 'static,
    ) -> Self {
        let container = div()
            .id(config.id())
            .class(css::container())
            .classes(class_names(config.class()));

        if !config.has_content() {
            return Self(container.into());
        }

        let controller = Rc::new(Controller::new(config, on_change));
        let header = HeaderView::new(
            controller.config(),
            services.translator.as_ref(),
            controller.state().open_signal(),
            {
                clone!(controller, services);
                move || trigger(&controller, &services)
            },
        );

        let outside_click: Rc<Cell<Option<document::EventCallback>>> = Rc::default();
        let body = controller.body_visible().map({
            clone!(controller);
            move |visible| {
                if !visible {
                    outside_click.set(None);
                    return None;
                }

                let (body, listener) = body_view(&controller, &services).into_parts();
                outside_click.set(Some(listener));
                Some(body)
            }
        });

        Self(container.child(header).optional_child(Sig(body)).into())
    }
}

fn body_view(controller: &Rc<Controller>, services: &Services) -> BodyView {
    let config = controller.config();

    BodyView::new(
        config.id(),
        config.content(),
        &config.options().body_class,
        services.translator.as_ref(),
        {
            let controller = Rc::downgrade(controller);
            move |item: &ContentItem| {
                if let Some(controller) = controller.upgrade() {
                    log!(format!(
                        "dropdown {}: selected {:?}",
                        controller.config().id(),
                        item.data_id()
                    ));
                    controller.select(item);
                }
            }
        },
        {
            let controller = Rc::downgrade(controller);
            move || {
                if let Some(controller) = controller.upgrade() {
                    controller.outside_click();
                }
            }
        },
    )
}

fn trigger(controller: &Rc<Controller>, services: &Services) {
    let id = controller.config().id();

    let Some(pending) = controller.trigger() else {
        log!(format!("dropdown {id}: closed"));
        return;
    };

    log!(format!("dropdown {id}: opened"));

    clone!(controller);
    let positioner = services.positioner.clone();

    // The body is only in the DOM once the open state has been rendered.
    on_animation_frame(move || {
        let id = controller.config().id();
        let elements = find_part(id, css::header()).zip(find_part(id, css::body()));

        match controller.position(pending, positioner.as_ref(), elements) {
            Positioned::Bound => log!(format!("dropdown {id}: positioned")),
            Positioned::Stale => log!(format!("dropdown {id}: closed before positioning")),
            Positioned::Unavailable => warn!(format!("dropdown {id}: positioner unavailable")),
            Positioned::MissingElements => {
                warn!(format!("dropdown {id}: header or body not found"))
            }
        }
    });
}

/// Find a part of the dropdown `id`. The id is looked up directly, as it
/// needn't be a valid CSS identifier.
fn find_part(id: &str, class: &str) -> Option<web_sys::Element> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .query_selector(&part_selector(class))
        .ok()
        .flatten()
}

fn part_selector(class: &str) -> String {
    format!(".{class}")
}

fn class_names(classes: &str) -> Vec<&str> {
    classes.split_whitespace().collect()
}
