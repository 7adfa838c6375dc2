use dropdown_model::{Catalog, Config, RawConfig};
use futures_signals::signal::Mutable;
use gloo_console::{error, log};
use silkenweb::{
    elements::html::{div, p},
    mount,
    prelude::ParentElement,
    value::Sig,
};
use silkenweb_dropdown::{DropdownView, Services};
use silkenweb_popper::Popper;

fn main() {
    let catalog = Catalog::from_json(include_str!("catalog.json")).unwrap_or_else(|e| {
        error!(format!("invalid catalog: {e}"));
        Catalog::new()
    });
    let configs: Vec<Option<RawConfig>> = match serde_json::from_str(include_str!("dropdowns.json"))
    {
        Ok(configs) => configs,
        Err(e) => {
            error!(format!("invalid dropdown list: {e}"));
            Vec::new()
        }
    };

    let services = Services::new(catalog, Popper);
    let selected = Mutable::new("Nothing selected".to_string());

    let dropdowns = configs
        .into_iter()
        .filter_map(|raw| match Config::new(raw) {
            Ok(config) => Some(config),
            Err(e) => {
                error!(format!("skipping dropdown: {e}"));
                None
            }
        })
        .map(|config| {
            let selected = selected.clone();
            let id = config.id().to_string();

            DropdownView::new(config, services.clone(), move |entry| {
                log!(format!("{id}: {}", entry.id));
                selected.set(format!("{id}: {}", entry.id));
            })
        });

    mount(
        "app",
        div()
            .child(div().children(dropdowns))
            .child(p().text(Sig(selected.signal_cloned()))),
    );
}
