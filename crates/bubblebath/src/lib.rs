//! `bubblebath` bundles the bubblebath text area for ratatui hosts.
//!
//! The engine lives in `bubblebath-core` and is re-exported here module by module, so
//! `bubblebath::textarea::TextArea` and `bubblebath_core::textarea::TextArea` are the same type.
//! This crate adds [`help::HelpBar`] for showing key bindings next to the component.
//!
//! Enable the `crossterm` feature for `bubblebath::crossterm_input`.
pub use bubblebath_core::error;
pub use bubblebath_core::input;
pub use bubblebath_core::keymap;
pub use bubblebath_core::render;
pub use bubblebath_core::text;
pub use bubblebath_core::textarea;
pub use bubblebath_core::theme;
pub use bubblebath_core::viewport;
pub use bubblebath_core::wrapping;

#[cfg(feature = "crossterm")]
pub use bubblebath_core::crossterm_input;

pub mod help;
