//! State and data model for a dropdown: a trigger header, a floating body
//! and a list of selectable rows.
//!
//! Nothing in here touches the DOM, so the open/closed state machine and the
//! position binding lifecycle can be driven directly from tests.

pub mod config;
pub mod content;
pub mod controller;
pub mod position;
pub mod state;
pub mod translate;

pub use config::{Config, ConfigError, Label, Options, RawConfig, RawOptions};
pub use content::{ContentItem, Entry, ItemId, ItemText, Row};
pub use controller::Controller;
pub use translate::{Catalog, Translate};

/// Empty strings count as absent.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod testing;
