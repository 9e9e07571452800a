//! TUI screens

mod form;

pub use form::{Focus, FormAction, FormScreen, NOTES_REQUIRED};
