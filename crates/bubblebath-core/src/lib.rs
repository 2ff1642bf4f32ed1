//! `bubblebath-core` is the editing engine behind the bubblebath text area.
//!
//! It owns the text model and everything needed to draw it in a terminal: a line store with
//! cursor, soft wrapping that respects wide characters, word- and character-wise motion, and a
//! viewport that keeps the cursor in view.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: you drive input + rendering from your app.
//! - No async runtime and no I/O: every call returns immediately.
//! - Clipboard access is app-controlled: the text area emits
//!   [`textarea::TextAreaAction::PasteRequested`] and the caller answers with
//!   [`textarea::TextArea::paste_result`].
//!
//! ## Getting started
//!
//! Most users should depend on the facade crate `bubblebath`. Useful entry points:
//! - [`textarea::TextArea`]: the multi-line input component.
//! - [`textarea::TextBuffer`]: the line store and motion engine without rendering.
//! - [`wrapping::wrap`]: the soft-wrap algorithm on its own.
//!
//! Enable the `crossterm` feature for [`crossterm_input`] conversions.
pub mod error;
pub mod theme;

pub mod text;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod render;
pub mod viewport;
pub mod wrapping;

pub mod input;
pub mod keymap;
pub mod textarea;
